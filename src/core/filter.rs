// facegrid - core/filter.rs
//
// Filter predicate set and pipeline for canonical profile records.
// All eleven filter categories are AND-combined; each category is a no-op
// at its default value, and unrecognised wire strings fail open to the
// default rather than rejecting records.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::core::model::CanonicalRecord;
use crate::util::constants::{FOLLOWERS_RANGE_CEILING, FORKS_RANGE_CEILING, REPOS_RANGE_CEILING};
use chrono::{DateTime, Duration, Months, Utc};

// =============================================================================
// Filter parameters
// =============================================================================

/// Complete filter state for one pass. Constructed fresh by the boundary
/// layer from current UI state immediately before each pass; the core never
/// reads ambient UI state. All fields are AND-combined when applied.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterParams {
    /// Substring search over name, login, and location (case-insensitive).
    /// Empty = no filter.
    pub search: String,

    /// Inclusive followers range.
    pub min_followers: u64,
    pub max_followers: u64,

    /// Inclusive public-repository range.
    pub min_repos: u64,
    pub max_repos: u64,

    /// Inclusive fork-count range. Fork counts are always 0 in canonical
    /// records, so only a min above 0 ever excludes anything.
    pub min_forks: u64,
    pub max_forks: u64,

    /// Sponsors-count mode (people sponsoring this account).
    pub sponsors: SponsorFilter,

    /// Sponsoring-count mode (accounts this account sponsors).
    pub sponsoring: SponsorFilter,

    /// Recency bucket for the avatar's last change.
    pub avatar_age: DateBucket,

    /// Minimum total stars across owned repositories.
    pub min_stars: u64,

    /// Substring match over language names (case-insensitive).
    /// Empty = no filter.
    pub language: String,

    /// Recency bucket for the last repository push.
    pub repo_activity: DateBucket,

    /// Recency bucket for the last public commit.
    pub commit_activity: DateBucket,
}

impl Default for FilterParams {
    fn default() -> Self {
        Self {
            search: String::new(),
            min_followers: 0,
            max_followers: FOLLOWERS_RANGE_CEILING,
            min_repos: 0,
            max_repos: REPOS_RANGE_CEILING,
            min_forks: 0,
            max_forks: FORKS_RANGE_CEILING,
            sponsors: SponsorFilter::Any,
            sponsoring: SponsorFilter::Any,
            avatar_age: DateBucket::Any,
            min_stars: 0,
            language: String::new(),
            repo_activity: DateBucket::Any,
            commit_activity: DateBucket::Any,
        }
    }
}

impl FilterParams {
    /// Returns true when every category is at its no-op default, so the
    /// whole pass can be skipped.
    pub fn is_noop(&self) -> bool {
        *self == Self::default()
    }

    /// Self-heal inverted numeric ranges: when min > max the effective max
    /// widens to the category's sentinel ceiling. The bounds are never
    /// swapped and the caller is not told — this is policy, not an error.
    fn repaired(&self) -> Self {
        let mut params = self.clone();
        if params.min_followers > params.max_followers {
            params.max_followers = FOLLOWERS_RANGE_CEILING;
        }
        if params.min_repos > params.max_repos {
            params.max_repos = REPOS_RANGE_CEILING;
        }
        if params.min_forks > params.max_forks {
            params.max_forks = FORKS_RANGE_CEILING;
        }
        params
    }
}

// =============================================================================
// Sponsor mode
// =============================================================================

/// Filter mode for the sponsors / sponsoring counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SponsorFilter {
    /// Matches every record.
    #[default]
    Any,

    /// Count must be greater than zero.
    Has,

    /// Count must be at least this many.
    Min(u64),
}

impl SponsorFilter {
    /// Parse the wire form used by the UI shell: `"any"`, `"has"` (alias
    /// `"is"`), or `"min-<N>"`. Unrecognised values fail open to `Any`.
    pub fn parse(s: &str) -> Self {
        match s {
            "has" | "is" => Self::Has,
            s => match s.strip_prefix("min-").and_then(|n| n.parse::<u64>().ok()) {
                Some(n) => Self::Min(n),
                None => Self::Any,
            },
        }
    }

    fn matches(self, count: u64) -> bool {
        match self {
            Self::Any => true,
            Self::Has => count > 0,
            Self::Min(n) => count >= n,
        }
    }
}

// =============================================================================
// Date buckets
// =============================================================================

/// Named recency class for a record timestamp, judged against rolling
/// cutoffs computed at filter time. Every bucket except `Old` means "within
/// the last N" (timestamp >= cutoff, inclusive); `Old` means strictly before
/// the five-year cutoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateBucket {
    /// Matches every record.
    #[default]
    Any,
    Week,
    Month,
    SixMonths,
    Year,
    TwoYears,
    FiveYears,
    Old,
}

impl DateBucket {
    /// Parse the wire form used by the UI shell. Unrecognised values fail
    /// open to `Any`.
    pub fn parse(s: &str) -> Self {
        match s {
            "week" => Self::Week,
            "month" => Self::Month,
            "6months" => Self::SixMonths,
            "year" => Self::Year,
            "2years" => Self::TwoYears,
            "5years" => Self::FiveYears,
            "old" => Self::Old,
            _ => Self::Any,
        }
    }

    /// A missing timestamp matches every bucket, like `Any`.
    fn matches(self, timestamp: Option<DateTime<Utc>>, ranges: &DateRanges) -> bool {
        let ts = match timestamp {
            Some(ts) => ts,
            None => return true,
        };
        match self {
            Self::Any => true,
            Self::Week => ts >= ranges.week,
            Self::Month => ts >= ranges.month,
            Self::SixMonths => ts >= ranges.six_months,
            Self::Year => ts >= ranges.year,
            Self::TwoYears => ts >= ranges.two_years,
            Self::FiveYears => ts >= ranges.five_years,
            Self::Old => ts < ranges.five_years,
        }
    }
}

/// Rolling cutoff instants shared by every date-bucket predicate in one
/// filter pass. Recomputed per pass — never cached — since "now" advances.
#[derive(Debug, Clone, Copy)]
pub struct DateRanges {
    pub week: DateTime<Utc>,
    pub month: DateTime<Utc>,
    pub six_months: DateTime<Utc>,
    pub year: DateTime<Utc>,
    pub two_years: DateTime<Utc>,
    pub five_years: DateTime<Utc>,
}

impl DateRanges {
    /// Compute all six cutoffs relative to `now`. Month-based cutoffs use
    /// calendar months; the week cutoff is exactly seven days.
    pub fn compute(now: DateTime<Utc>) -> Self {
        Self {
            week: now - Duration::weeks(1),
            month: now - Months::new(1),
            six_months: now - Months::new(6),
            year: now - Months::new(12),
            two_years: now - Months::new(24),
            five_years: now - Months::new(60),
        }
    }
}

// =============================================================================
// Filter pipeline
// =============================================================================

/// Apply all filters to the canonical collection, returning indices of
/// matching records in their original relative order (stable subsequence).
///
/// Returns indices into `records` rather than copies; the session keeps the
/// collection itself write-once. `now` anchors the rolling date cutoffs and
/// is passed explicitly so passes are reproducible under test.
pub fn apply_filters(
    records: &[CanonicalRecord],
    params: &FilterParams,
    now: DateTime<Utc>,
) -> Vec<usize> {
    if params.is_noop() {
        return (0..records.len()).collect();
    }

    let params = params.repaired();
    let ranges = DateRanges::compute(now);
    let search = params.search.to_lowercase();
    let language = params.language.to_lowercase();

    records
        .iter()
        .enumerate()
        .filter(|(_, record)| matches_all(record, &params, &ranges, &search, &language))
        .map(|(idx, _)| idx)
        .collect()
}

/// Check one record against all eleven filter categories.
fn matches_all(
    record: &CanonicalRecord,
    params: &FilterParams,
    ranges: &DateRanges,
    search: &str,
    language: &str,
) -> bool {
    matches_search(record, search)
        && in_range(record.followers, params.min_followers, params.max_followers)
        && in_range(record.repos, params.min_repos, params.max_repos)
        && in_range(record.forks, params.min_forks, params.max_forks)
        && params.sponsors.matches(record.sponsors)
        && params.sponsoring.matches(record.sponsoring)
        && params.avatar_age.matches(record.avatar_updated_at, ranges)
        && record.total_stars >= params.min_stars
        && matches_language(record, language)
        && params
            .repo_activity
            .matches(record.last_repo_pushed_at, ranges)
        && params
            .commit_activity
            .matches(record.last_public_commit_at, ranges)
}

/// Empty term matches all; otherwise substring of name, login, or location.
/// `term` must already be lowercased.
fn matches_search(record: &CanonicalRecord, term: &str) -> bool {
    term.is_empty()
        || record.name.contains(term)
        || record.login.contains(term)
        || record.location.contains(term)
}

/// Inclusive range check. Assumes a valid range — inverted ranges are
/// repaired by the pipeline before predicates run.
fn in_range(value: u64, min: u64, max: u64) -> bool {
    value >= min && value <= max
}

/// Empty filter matches all; otherwise any language name must contain the
/// (already lowercased) filter substring.
fn matches_language(record: &CanonicalRecord, filter: &str) -> bool {
    filter.is_empty()
        || record
            .top_languages
            .iter()
            .any(|lang| lang.name.contains(filter))
}
