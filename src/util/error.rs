// facegrid - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation; all errors preserve the causal chain
// for diagnostic logging.
//
// Steady-state filter/sort calls are infallible by design — malformed field
// values degrade to defaults inside the normaliser and unrecognised
// filter/sort keys fail open. Only loading the record document and exporting
// the filtered set can fail.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all facegrid operations.
#[derive(Debug)]
pub enum FacegridError {
    /// Loading or parsing the record document failed.
    Load(LoadError),

    /// Export operation failed.
    Export(ExportError),
}

impl fmt::Display for FacegridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load(e) => write!(f, "Load error: {e}"),
            Self::Export(e) => write!(f, "Export error: {e}"),
        }
    }
}

impl std::error::Error for FacegridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Load(e) => Some(e),
            Self::Export(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Load errors
// ---------------------------------------------------------------------------

/// Errors raised while obtaining and decoding the record document.
///
/// Any of these is fatal to the session: the collection never becomes
/// filterable and the session reports zero counts thereafter.
#[derive(Debug)]
pub enum LoadError {
    /// I/O error reading the document.
    Io {
        path: Option<PathBuf>,
        source: io::Error,
    },

    /// The document is not valid JSON or not a JSON array of records.
    Json {
        path: Option<PathBuf>,
        source: serde_json::Error,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => match path {
                Some(p) => write!(f, "cannot read '{}': {source}", p.display()),
                None => write!(f, "cannot read record document: {source}"),
            },
            Self::Json { path, source } => match path {
                Some(p) => write!(f, "malformed record document '{}': {source}", p.display()),
                None => write!(f, "malformed record document: {source}"),
            },
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
        }
    }
}

impl From<LoadError> for FacegridError {
    fn from(e: LoadError) -> Self {
        Self::Load(e)
    }
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors related to export operations.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error writing the export stream.
    Io { source: io::Error },

    /// CSV serialisation error.
    Csv { source: csv::Error },

    /// JSON serialisation error.
    Json { source: serde_json::Error },

    /// Export would exceed the maximum record count.
    TooManyRecords { count: usize, max: usize },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { source } => write!(f, "export I/O error: {source}"),
            Self::Csv { source } => write!(f, "CSV export error: {source}"),
            Self::Json { source } => write!(f, "JSON export error: {source}"),
            Self::TooManyRecords { count, max } => write!(
                f,
                "export of {count} records exceeds maximum of {max}. \
                 Apply filters to reduce the result set."
            ),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source } => Some(source),
            Self::Csv { source } => Some(source),
            Self::Json { source } => Some(source),
            Self::TooManyRecords { .. } => None,
        }
    }
}

impl From<ExportError> for FacegridError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

/// Convenience type alias for facegrid results.
pub type Result<T> = std::result::Result<T, FacegridError>;
