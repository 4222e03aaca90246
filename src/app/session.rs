// facegrid - app/session.rs
//
// Session controller: the single owner of the canonical record collection
// and of the filtered/sorted view over it. The collection is written once
// at load time and read-only afterwards; every parameter change re-runs the
// pure core pipeline and replaces the view's index vector, so the UI shell
// never holds core state of its own.
//
// A failed load is terminal for the session: it stays in the Failed state
// with zero counts and ignores further ingestion, matching the shell's
// static "unable to load" screen with no retry path.

use crate::app::loader;
use crate::core::filter::{apply_filters, FilterParams};
use crate::core::model::{CanonicalRecord, RawRecord};
use crate::core::normalize::normalize;
use crate::core::sort::{sort_view, SortKey};
use chrono::Utc;
use std::path::Path;

/// Lifecycle of the record collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    /// No load has been attempted yet; filtering and sorting are no-ops.
    #[default]
    Empty,

    /// The collection is loaded and filterable.
    Loaded,

    /// The load failed. Terminal: the session reports zero counts forever.
    Failed,
}

/// Owns the canonical collection and the current view over it.
#[derive(Debug, Default)]
pub struct Session {
    /// All normalised records, in document order. Write-once at load.
    records: Vec<CanonicalRecord>,

    /// Indices into `records` for the current filtered+sorted view.
    view: Vec<usize>,

    /// Filter parameters applied on the last refresh.
    params: FilterParams,

    /// Current sort key; `None` leaves the filtered order untouched.
    sort_key: Option<SortKey>,

    load_state: LoadState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    /// Load the record document from disk and ingest it.
    /// On failure the session transitions to the terminal `Failed` state.
    pub fn load_path(&mut self, path: &Path) -> crate::util::error::Result<usize> {
        match loader::load_from_path(path) {
            Ok(raw) => {
                self.ingest(raw);
                Ok(self.records.len())
            }
            Err(e) => {
                self.mark_failed();
                Err(e.into())
            }
        }
    }

    /// Normalise and take ownership of an already-decoded record set.
    ///
    /// Ignored (with a warning) once the session has failed: the original
    /// system offers no retry path after a load error.
    pub fn ingest(&mut self, raw: Vec<RawRecord>) {
        if self.load_state == LoadState::Failed {
            tracing::warn!("Ignoring ingest into a failed session");
            return;
        }
        self.records = raw.into_iter().map(normalize).collect();
        self.load_state = LoadState::Loaded;
        tracing::info!(records = self.records.len(), "Collection ingested");
        self.refresh();
    }

    /// Record a load failure reported by the data-loading collaborator
    /// (e.g. a fetch that never produced a payload).
    pub fn mark_failed(&mut self) {
        self.load_state = LoadState::Failed;
        self.records.clear();
        self.view.clear();
        tracing::warn!("Session marked failed; collection is not filterable");
    }

    /// Replace the filter parameters and re-run the pipeline.
    pub fn set_params(&mut self, params: FilterParams) {
        self.params = params;
        self.refresh();
    }

    /// Replace the sort key and re-run the pipeline. `None` (including any
    /// unparseable wire string upstream) means identity sort.
    pub fn set_sort_key(&mut self, sort_key: Option<SortKey>) {
        self.sort_key = sort_key;
        self.refresh();
    }

    /// Re-run filter then sort against the current instant. Cheap no-op on
    /// an empty or failed session.
    pub fn refresh(&mut self) {
        self.view = apply_filters(&self.records, &self.params, Utc::now());
        if let Some(key) = self.sort_key {
            self.view = sort_view(&self.records, &self.view, key);
        }
        tracing::debug!(
            visible = self.view.len(),
            total = self.records.len(),
            "View refreshed"
        );
    }

    /// The ordered, visible records for rendering.
    pub fn visible(&self) -> impl Iterator<Item = &CanonicalRecord> {
        self.view.iter().map(|&idx| &self.records[idx])
    }

    /// (visible, total) count pair for the shell's results line.
    pub fn counts(&self) -> (usize, usize) {
        (self.view.len(), self.records.len())
    }

    /// Whether the current view has any records (drives the empty-state UI).
    pub fn has_results(&self) -> bool {
        !self.view.is_empty()
    }

    /// Fallback lookup by the stable identity key. `login` is matched
    /// case-insensitively against the canonical (lowercased) key.
    pub fn record_by_login(&self, login: &str) -> Option<&CanonicalRecord> {
        let needle = login.to_lowercase();
        self.records.iter().find(|r| r.login == needle)
    }

    /// Raw-record projection of the *current* filtered view, in view order,
    /// for bulk export (core::export).
    pub fn raw_export_set(&self) -> Vec<&RawRecord> {
        self.view.iter().map(|&idx| &self.records[idx].raw).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filter::FilterParams;

    fn loaded_session() -> Session {
        let doc = r#"[
            {"login": "alice", "name": "Alice", "followers": 5000, "total_stars": 900},
            {"login": "bob", "name": "Bob", "followers": 50, "total_stars": 10},
            {"login": "carol", "name": "Carol", "followers": 120, "total_stars": 500}
        ]"#;
        let mut session = Session::new();
        session.ingest(loader::load_from_slice(doc.as_bytes()).unwrap());
        session
    }

    #[test]
    fn test_ingest_makes_everything_visible() {
        let session = loaded_session();
        assert_eq!(session.load_state(), LoadState::Loaded);
        assert_eq!(session.counts(), (3, 3));
        assert!(session.has_results());
        let logins: Vec<&str> = session.visible().map(|r| r.login.as_str()).collect();
        assert_eq!(logins, vec!["alice", "bob", "carol"]);
    }

    #[test]
    fn test_filter_then_sort() {
        let mut session = loaded_session();
        session.set_params(FilterParams {
            min_followers: 100,
            ..Default::default()
        });
        session.set_sort_key(SortKey::parse("followers-asc"));
        assert_eq!(session.counts(), (2, 3));
        let logins: Vec<&str> = session.visible().map(|r| r.login.as_str()).collect();
        assert_eq!(logins, vec!["carol", "alice"]);
    }

    #[test]
    fn test_unknown_sort_key_keeps_filtered_order() {
        let mut session = loaded_session();
        session.set_sort_key(SortKey::parse("bogus-key"));
        let logins: Vec<&str> = session.visible().map(|r| r.login.as_str()).collect();
        assert_eq!(logins, vec!["alice", "bob", "carol"]);
    }

    #[test]
    fn test_record_by_login_is_case_insensitive() {
        let session = loaded_session();
        assert!(session.record_by_login("ALICE").is_some());
        assert!(session.record_by_login("nobody").is_none());
    }

    #[test]
    fn test_raw_export_set_follows_view_order() {
        let mut session = loaded_session();
        session.set_sort_key(SortKey::parse("stars-desc"));
        let raw = session.raw_export_set();
        let logins: Vec<_> = raw.iter().map(|r| r.login.clone()).collect();
        assert_eq!(
            logins,
            vec![
                serde_json::json!("alice"),
                serde_json::json!("carol"),
                serde_json::json!("bob")
            ]
        );
    }

    /// A failed load leaves counts at zero and never panics on later calls.
    #[test]
    fn test_failed_load_is_terminal() {
        let mut session = Session::new();
        let err = session.load_path(Path::new("/nonexistent/users.json"));
        assert!(err.is_err());
        assert_eq!(session.load_state(), LoadState::Failed);
        assert_eq!(session.counts(), (0, 0));
        assert!(!session.has_results());

        // Filtering, sorting, and even a late ingest are harmless no-ops.
        session.set_params(FilterParams::default());
        session.set_sort_key(SortKey::parse("followers-desc"));
        session.ingest(vec![RawRecord::default()]);
        assert_eq!(session.counts(), (0, 0));
        assert_eq!(session.load_state(), LoadState::Failed);
    }

    #[test]
    fn test_empty_session_is_harmless() {
        let mut session = Session::new();
        session.refresh();
        assert_eq!(session.counts(), (0, 0));
        assert_eq!(session.load_state(), LoadState::Empty);
    }
}
