// facegrid - core/normalize.rs
//
// Record Normalizer: converts one loosely-typed RawRecord into a canonical
// record with concrete integer counts, lowercased comparison keys, parsed
// timestamps, and precomputed display strings.
//
// normalize() is pure and total — every absent or malformed input degrades
// to a defined default (0, None, or "N/A") rather than propagating an error.

use crate::core::model::{CanonicalRecord, Language, RawRecord};
use crate::util::constants::NOT_AVAILABLE;
use chrono::{DateTime, Utc};
use serde_json::Value;

/// Normalise one raw record. Consumes the raw record, which is retained
/// unmodified inside the result for later export.
pub fn normalize(raw: RawRecord) -> CanonicalRecord {
    let followers = count_value(&raw.followers);
    let following = count_value(&raw.following);
    let repos = count_value(&raw.public_repos);
    let gists = count_value(&raw.public_gists);
    let sponsors = count_value(&raw.sponsors_count);
    let sponsoring = count_value(&raw.sponsoring_count);
    let total_stars = count_value(&raw.total_stars);

    let top_languages = raw
        .top_languages
        .iter()
        .map(|lang| Language {
            name: lang.name.to_lowercase(),
            label: lang.name.clone(),
            bytes: count_value(&lang.bytes).unwrap_or(0),
            percent: lang.percent,
        })
        .collect();

    CanonicalRecord {
        login: string_value(&raw.login).to_lowercase(),
        name: string_value(&raw.name).to_lowercase(),
        location: string_value(&raw.location).to_lowercase(),
        followers: followers.unwrap_or(0),
        following: following.unwrap_or(0),
        repos: repos.unwrap_or(0),
        gists: gists.unwrap_or(0),
        sponsors: sponsors.unwrap_or(0),
        sponsoring: sponsoring.unwrap_or(0),
        total_stars: total_stars.unwrap_or(0),
        // No source field supplies fork counts; kept wired at zero.
        forks: 0,
        avatar_updated_at: timestamp_value(&raw.avatar_updated_at),
        last_repo_pushed_at: timestamp_value(&raw.last_repo_pushed_at),
        last_public_commit_at: timestamp_value(&raw.last_public_commit_at),
        top_languages,
        followers_display: display_count(followers, raw.followers_display.as_deref()),
        following_display: display_count(following, raw.following_display.as_deref()),
        repos_display: display_count(repos, raw.public_repos_display.as_deref()),
        gists_display: display_count(gists, raw.public_gists_display.as_deref()),
        sponsors_display: display_count(sponsors, raw.sponsors_count_display.as_deref()),
        sponsoring_display: display_count(sponsoring, raw.sponsoring_count_display.as_deref()),
        stars_display: display_count(total_stars, raw.total_stars_display.as_deref()),
        raw,
    }
}

/// Derive the display string for a count.
///
/// A producer-supplied pre-formatted string always wins; otherwise the
/// parsed integer is rendered with thousands grouping; a missing value
/// renders as the `"N/A"` sentinel.
pub fn display_count(value: Option<u64>, preformatted: Option<&str>) -> String {
    match preformatted {
        Some(s) => s.to_owned(),
        None => match value {
            Some(n) => group_thousands(n),
            None => NOT_AVAILABLE.to_owned(),
        },
    }
}

/// Interpret a loosely-typed count field.
///
/// Returns `None` for `null`/absent, the `"N/A"` sentinel, and strings with
/// no leading base-10 integer. Negative values clamp to zero. String parsing
/// stops at the first non-digit, so `"1234 stars"` reads as 1234.
pub fn count_value(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_i64().map(|v| v.max(0) as u64))
            .or_else(|| n.as_f64().map(|v| v.max(0.0).trunc() as u64)),
        Value::String(s) => parse_count_str(s),
        _ => None,
    }
}

fn parse_count_str(s: &str) -> Option<u64> {
    let trimmed = s.trim();
    if trimmed.is_empty() || trimmed == NOT_AVAILABLE {
        return None;
    }
    if let Some(rest) = trimmed.strip_prefix('-') {
        // A parseable negative count clamps to zero; garbage stays missing.
        let digits = leading_digits(rest)?;
        return digits.parse::<u64>().ok().map(|_| 0);
    }
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    leading_digits(unsigned)?.parse::<u64>().ok()
}

fn leading_digits(s: &str) -> Option<&str> {
    let end = s
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len());
    if end == 0 {
        None
    } else {
        Some(&s[..end])
    }
}

/// Interpret a loosely-typed timestamp field.
///
/// Accepts RFC 3339 strings; anything else (absent, `null`, `"N/A"`,
/// unparseable garbage) uniformly becomes `None` — "no date available".
pub fn timestamp_value(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => s.trim().parse::<DateTime<Utc>>().ok(),
        _ => None,
    }
}

fn string_value(value: &Value) -> &str {
    match value {
        Value::String(s) => s.as_str(),
        _ => "",
    }
}

/// Render an integer with comma thousands grouping (1234567 -> "1,234,567").
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw_from(json: serde_json::Value) -> RawRecord {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn test_count_value_coercion() {
        assert_eq!(count_value(&json!(42)), Some(42));
        assert_eq!(count_value(&json!("1234")), Some(1234));
        assert_eq!(count_value(&json!("  77 ")), Some(77));
        assert_eq!(count_value(&json!("1234 stars")), Some(1234));
        assert_eq!(count_value(&json!("N/A")), None);
        assert_eq!(count_value(&json!(null)), None);
        assert_eq!(count_value(&json!("garbage")), None);
        // Negative counts clamp to zero rather than wrapping.
        assert_eq!(count_value(&json!(-5)), Some(0));
        assert_eq!(count_value(&json!("-5")), Some(0));
    }

    #[test]
    fn test_timestamp_value() {
        let ts = timestamp_value(&json!("2024-03-01T12:00:00Z")).unwrap();
        assert_eq!(ts.to_rfc3339(), "2024-03-01T12:00:00+00:00");
        assert_eq!(timestamp_value(&json!("not a date")), None);
        assert_eq!(timestamp_value(&json!(null)), None);
        assert_eq!(timestamp_value(&json!("N/A")), None);
    }

    #[test]
    fn test_display_count_prefers_preformatted() {
        assert_eq!(display_count(Some(1500), Some("1.5k")), "1.5k");
        assert_eq!(display_count(Some(1500), None), "1,500");
        assert_eq!(display_count(None, None), "N/A");
        // Producer-supplied string wins even when the value is missing.
        assert_eq!(display_count(None, Some("~2k")), "~2k");
    }

    #[test]
    fn test_normalize_defaults_and_lowercasing() {
        let rec = normalize(raw_from(json!({
            "login": "OctoCat",
            "name": "The Octocat",
            "location": "San Francisco",
            "followers": "N/A",
            "total_stars": "919"
        })));
        assert_eq!(rec.login, "octocat");
        assert_eq!(rec.name, "the octocat");
        assert_eq!(rec.location, "san francisco");
        assert_eq!(rec.followers, 0);
        assert_eq!(rec.followers_display, "N/A");
        assert_eq!(rec.total_stars, 919);
        assert_eq!(rec.stars_display, "919");
        assert_eq!(rec.forks, 0);
        assert_eq!(rec.avatar_updated_at, None);
        // Original-case login survives in the retained raw record.
        assert_eq!(rec.raw.login, json!("OctoCat"));
    }

    #[test]
    fn test_normalize_languages_keep_input_order() {
        let rec = normalize(raw_from(json!({
            "login": "a",
            "top_languages": [
                {"name": "TypeScript", "bytes": 10},
                {"name": "Rust", "bytes": "999999"},
                {"name": "C", "bytes": "N/A", "percent": 1.5}
            ]
        })));
        let names: Vec<&str> = rec.top_languages.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["typescript", "rust", "c"]);
        assert_eq!(rec.top_languages[0].label, "TypeScript");
        assert_eq!(rec.top_languages[1].bytes, 999_999);
        assert_eq!(rec.top_languages[2].bytes, 0);
        assert_eq!(rec.top_languages[2].percent, Some(1.5));
    }

    /// Canonical counts are always concrete integers, and every display
    /// string is either "N/A" or a grouped rendering of the same integer.
    #[test]
    fn test_display_strings_consistent_with_counts() {
        let rec = normalize(raw_from(json!({
            "login": "a",
            "followers": 1234567,
            "following": "N/A",
            "public_repos": 12
        })));
        assert_eq!(rec.followers_display, group_thousands(rec.followers));
        assert_eq!(rec.following_display, "N/A");
        assert_eq!(rec.following, 0);
        assert_eq!(rec.repos_display, group_thousands(rec.repos));
    }
}
