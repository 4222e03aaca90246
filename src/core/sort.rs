// facegrid - core/sort.rs
//
// Sort engine for the filtered view. A registry of named comparators keyed
// by a (field, direction) pair; ties break arbitrarily (no secondary key).
// Sorting is non-mutating: it copies the view's index order and returns a
// fresh ordering. Core layer: pure logic, no I/O or UI dependencies.

use crate::core::model::CanonicalRecord;
use chrono::{DateTime, Utc};
use std::cmp::Ordering;

/// Field a comparator orders by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Followers,
    Following,
    Repos,
    Gists,
    Forks,
    Sponsors,
    Sponsoring,
    Stars,
    /// Last repository push; missing timestamps sort as the epoch.
    RepoActivity,
    /// Last public commit; missing timestamps sort as the epoch.
    CommitActivity,
    /// Lexicographic over the lowercased name.
    Name,
    /// Followers-per-following heuristic; descending only on the wire.
    FollowerRatio,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// One entry of the comparator registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub field: SortField,
    pub direction: Direction,
}

impl SortKey {
    /// Parse the wire form used by the UI shell (`"followers-desc"`,
    /// `"name-asc"`, `"ratio"`, ...). Returns `None` for unrecognised keys;
    /// the session then leaves the filtered order untouched (identity sort).
    pub fn parse(s: &str) -> Option<Self> {
        use Direction::{Ascending, Descending};
        use SortField::*;
        let key = |field, direction| Some(Self { field, direction });
        match s {
            "followers-desc" => key(Followers, Descending),
            "followers-asc" => key(Followers, Ascending),
            "following-desc" => key(Following, Descending),
            "following-asc" => key(Following, Ascending),
            "repos-desc" => key(Repos, Descending),
            "repos-asc" => key(Repos, Ascending),
            "gists-desc" => key(Gists, Descending),
            "gists-asc" => key(Gists, Ascending),
            "forks-desc" => key(Forks, Descending),
            "forks-asc" => key(Forks, Ascending),
            "sponsors-desc" => key(Sponsors, Descending),
            "sponsors-asc" => key(Sponsors, Ascending),
            "sponsoring-desc" => key(Sponsoring, Descending),
            "sponsoring-asc" => key(Sponsoring, Ascending),
            "stars-desc" => key(Stars, Descending),
            "stars-asc" => key(Stars, Ascending),
            "activity-desc" => key(RepoActivity, Descending),
            "activity-asc" => key(RepoActivity, Ascending),
            "commit-desc" => key(CommitActivity, Descending),
            "commit-asc" => key(CommitActivity, Ascending),
            "name-asc" => key(Name, Ascending),
            "name-desc" => key(Name, Descending),
            "ratio" => key(FollowerRatio, Descending),
            _ => None,
        }
    }

    /// Total order over canonical records for this key.
    pub fn compare(&self, a: &CanonicalRecord, b: &CanonicalRecord) -> Ordering {
        let ascending = match self.field {
            SortField::Followers => a.followers.cmp(&b.followers),
            SortField::Following => a.following.cmp(&b.following),
            SortField::Repos => a.repos.cmp(&b.repos),
            SortField::Gists => a.gists.cmp(&b.gists),
            SortField::Forks => a.forks.cmp(&b.forks),
            SortField::Sponsors => a.sponsors.cmp(&b.sponsors),
            SortField::Sponsoring => a.sponsoring.cmp(&b.sponsoring),
            SortField::Stars => a.total_stars.cmp(&b.total_stars),
            SortField::RepoActivity => {
                activity_instant(a.last_repo_pushed_at).cmp(&activity_instant(b.last_repo_pushed_at))
            }
            SortField::CommitActivity => activity_instant(a.last_public_commit_at)
                .cmp(&activity_instant(b.last_public_commit_at)),
            SortField::Name => a.name.cmp(&b.name),
            SortField::FollowerRatio => follower_ratio(a)
                .partial_cmp(&follower_ratio(b))
                .unwrap_or(Ordering::Equal),
        };
        match self.direction {
            Direction::Ascending => ascending,
            Direction::Descending => ascending.reverse(),
        }
    }
}

/// Order the filtered view by `key`, returning a fresh index sequence.
/// No records are dropped or duplicated; the input view is untouched.
pub fn sort_view(records: &[CanonicalRecord], view: &[usize], key: SortKey) -> Vec<usize> {
    let mut ordered = view.to_vec();
    ordered.sort_by(|&a, &b| key.compare(&records[a], &records[b]));
    ordered
}

/// Missing activity timestamps sort as the earliest possible instant.
fn activity_instant(ts: Option<DateTime<Utc>>) -> DateTime<Utc> {
    ts.unwrap_or(DateTime::UNIX_EPOCH)
}

/// Followers-per-following heuristic. "No following" is treated as an
/// implicit denominator of 1, so the ratio is the follower count itself —
/// deliberately not a mathematical ratio, preserved for compatibility.
fn follower_ratio(record: &CanonicalRecord) -> f64 {
    if record.following == 0 {
        record.followers as f64
    } else {
        record.followers as f64 / record.following as f64
    }
}
