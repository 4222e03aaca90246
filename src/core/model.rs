// facegrid - core/model.rs
//
// Core data model types. Pure data definitions with no I/O and no UI
// dependencies. These types are the shared vocabulary across all layers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// =============================================================================
// Raw record (as fetched)
// =============================================================================

/// One developer profile exactly as it appears in the source JSON document.
///
/// The source data is semi-structured: any field may be absent, `null`, or
/// the sentinel string `"N/A"`, and numeric fields sometimes arrive as
/// strings. Loosely-typed fields are therefore kept as `serde_json::Value`
/// and only interpreted by the normaliser. Raw records are immutable once
/// fetched; bulk export serialises this pre-normalisation field set, never
/// the derived one.
///
/// The absent-vs-`null` distinction is deliberately collapsed on
/// re-serialisation: a field the document carried as an explicit `null`
/// (or an explicitly empty `top_languages` list) is omitted from export
/// output rather than re-emitted. Both forms mean "no data" to every
/// consumer, and omitting them keeps export from injecting nulls into
/// fields the document never mentioned.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawRecord {
    /// Account login. The stable identity key for the whole collection.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub login: Value,

    /// Display name (may be missing for many accounts).
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub name: Value,

    /// Free-form location string.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub location: Value,

    /// Profile page URL. Passed through untouched for display/export.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub html_url: Value,

    /// When the avatar image last changed.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub avatar_updated_at: Value,

    /// Most recent push to any owned repository.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub last_repo_pushed_at: Value,

    /// Most recent public commit authored by the account.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub last_public_commit_at: Value,

    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub followers: Value,

    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub following: Value,

    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub public_repos: Value,

    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub public_gists: Value,

    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub sponsors_count: Value,

    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub sponsoring_count: Value,

    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub total_stars: Value,

    /// Languages by bytes of code, already ordered by the data producer.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub top_languages: Vec<RawLanguage>,

    /// Optional pre-formatted display counterparts supplied by the data
    /// producer. When present they win over locally derived formatting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub followers_display: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub following_display: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_repos_display: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_gists_display: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sponsors_count_display: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sponsoring_count_display: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_stars_display: Option<String>,

    /// Any fields this crate does not model, preserved so export emits the
    /// document's full raw field set.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// One entry of `top_languages` as supplied by the data producer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawLanguage {
    /// Language name in original case.
    #[serde(default)]
    pub name: String,

    /// Bytes of code in this language (may arrive as a string).
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub bytes: Value,

    /// Share of the profile's total bytes, when the producer computed it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percent: Option<f64>,
}

// =============================================================================
// Canonical record (normalised output)
// =============================================================================

/// A profile record normalised for filtering, sorting, and display.
///
/// Created once per raw record at load time and never mutated afterwards.
/// Comparison keys are lowercased; counts are concrete integers with
/// missing/sentinel values degraded to 0; timestamps are parsed or `None`.
/// The originating [`RawRecord`] is retained for export and for any display
/// field the canonical form does not carry.
#[derive(Debug, Clone)]
pub struct CanonicalRecord {
    /// Lowercased login: comparison key and stable identity.
    pub login: String,

    /// Lowercased display name, empty when the profile has none.
    pub name: String,

    /// Lowercased location, empty when absent.
    pub location: String,

    pub followers: u64,
    pub following: u64,
    pub repos: u64,
    pub gists: u64,
    pub sponsors: u64,
    pub sponsoring: u64,
    pub total_stars: u64,

    /// Always 0: no source field supplies fork counts, but the field stays
    /// wired through filtering and sorting for interface stability.
    pub forks: u64,

    /// `None` means "no date available" (absent or unparseable source value).
    pub avatar_updated_at: Option<DateTime<Utc>>,
    pub last_repo_pushed_at: Option<DateTime<Utc>>,
    pub last_public_commit_at: Option<DateTime<Utc>>,

    /// Languages in the producer's order; the normaliser never re-sorts.
    pub top_languages: Vec<Language>,

    /// Precomputed display strings: either the producer-supplied formatted
    /// value or a thousands-grouped rendering; `"N/A"` when the source value
    /// was missing or sentinel.
    pub followers_display: String,
    pub following_display: String,
    pub repos_display: String,
    pub gists_display: String,
    pub sponsors_display: String,
    pub sponsoring_display: String,
    pub stars_display: String,

    /// The unmodified source record, retained read-only for bulk export.
    pub raw: RawRecord,
}

/// Normalised language entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Language {
    /// Lowercased name, used for substring matching.
    pub name: String,

    /// Original-case name for display.
    pub label: String,

    /// Bytes of code; 0 when the source value was missing or malformed.
    pub bytes: u64,

    /// Passed through from the source when present.
    pub percent: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_record_tolerates_missing_and_mixed_fields() {
        let json = r#"{
            "login": "octocat",
            "followers": "1234",
            "following": null,
            "total_stars": "N/A",
            "some_future_field": 7
        }"#;
        let raw: RawRecord = serde_json::from_str(json).unwrap();
        assert_eq!(raw.login, Value::String("octocat".into()));
        assert_eq!(raw.followers, Value::String("1234".into()));
        assert!(raw.following.is_null());
        assert_eq!(raw.total_stars, Value::String("N/A".into()));
        assert_eq!(raw.extra.get("some_future_field"), Some(&Value::from(7)));
    }

    #[test]
    fn test_raw_record_round_trips_unknown_fields() {
        let json = r#"{"login":"a","custom":{"nested":true}}"#;
        let raw: RawRecord = serde_json::from_str(json).unwrap();
        let back = serde_json::to_value(&raw).unwrap();
        assert_eq!(back["login"], "a");
        assert_eq!(back["custom"]["nested"], true);
        // Absent fields must not reappear as explicit nulls.
        assert!(back.get("followers").is_none());
    }

    /// Explicit nulls and an explicitly empty language list collapse with
    /// absent fields on re-serialisation (see the type-level doc comment).
    #[test]
    fn test_explicit_null_collapses_with_absent_on_export() {
        let json = r#"{"login":"a","name":null,"followers":null,"top_languages":[]}"#;
        let raw: RawRecord = serde_json::from_str(json).unwrap();
        assert!(raw.name.is_null());
        assert!(raw.top_languages.is_empty());

        let back = serde_json::to_value(&raw).unwrap();
        assert!(back.get("name").is_none());
        assert!(back.get("followers").is_none());
        assert!(back.get("top_languages").is_none());
        // Modelled fields with real values still round-trip.
        assert_eq!(back["login"], "a");
    }
}
