// facegrid - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Crate display name.
pub const APP_NAME: &str = "facegrid";

/// Current crate version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Sentinels
// =============================================================================

/// Literal rendered for a count whose source value was missing, `null`,
/// the sentinel itself, or unparseable.
pub const NOT_AVAILABLE: &str = "N/A";

/// Effective upper bound substituted for the followers range when the
/// caller supplies an inverted range (min > max). Range repair widens the
/// bound rather than rejecting or swapping; see core::filter.
pub const FOLLOWERS_RANGE_CEILING: u64 = 999_999_999;

/// Effective upper bound substituted for inverted repository-count ranges.
pub const REPOS_RANGE_CEILING: u64 = 999_999;

/// Effective upper bound substituted for inverted fork-count ranges.
pub const FORKS_RANGE_CEILING: u64 = 999_999;

// =============================================================================
// Export
// =============================================================================

/// Maximum number of records that can be exported in a single operation.
/// Prevents runaway allocations if a caller wires export to an unfiltered
/// multi-document collection.
pub const MAX_EXPORT_RECORDS: usize = 100_000;

/// CSV cell separator between language names in the `top_languages` column.
pub const LANGUAGE_LIST_SEPARATOR: &str = ";";

// =============================================================================
// Logging
// =============================================================================

/// Default log level when neither RUST_LOG nor an explicit level is given.
pub const DEFAULT_LOG_LEVEL: &str = "info";
