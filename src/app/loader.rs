// facegrid - app/loader.rs
//
// Record document loading: decode a JSON array of raw profile records from
// a byte slice, reader, or file path. This is the seam to the data-loading
// collaborator — the network transfer itself happens outside the crate and
// hands this layer either the payload bytes or its failure.
//
// Loading is the only fallible step of a session's lifetime; every error
// here is fatal to that session (see app::session).

use crate::core::model::RawRecord;
use crate::util::error::LoadError;
use std::io::Read;
use std::path::Path;

/// Decode a record document from raw bytes.
pub fn load_from_slice(bytes: &[u8]) -> Result<Vec<RawRecord>, LoadError> {
    let records: Vec<RawRecord> =
        serde_json::from_slice(bytes).map_err(|e| LoadError::Json {
            path: None,
            source: e,
        })?;
    tracing::debug!(records = records.len(), "Record document decoded");
    Ok(records)
}

/// Decode a record document from any reader.
pub fn load_from_reader<R: Read>(mut reader: R) -> Result<Vec<RawRecord>, LoadError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).map_err(|e| LoadError::Io {
        path: None,
        source: e,
    })?;
    load_from_slice(&bytes)
}

/// Read and decode a record document from a file on disk.
pub fn load_from_path(path: &Path) -> Result<Vec<RawRecord>, LoadError> {
    let bytes = std::fs::read(path).map_err(|e| LoadError::Io {
        path: Some(path.to_path_buf()),
        source: e,
    })?;
    let records: Vec<RawRecord> =
        serde_json::from_slice(&bytes).map_err(|e| LoadError::Json {
            path: Some(path.to_path_buf()),
            source: e,
        })?;
    tracing::info!(
        path = %path.display(),
        records = records.len(),
        "Record document loaded"
    );
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const DOC: &str = r#"[
        {"login": "alice", "followers": 5},
        {"login": "bob", "followers": "N/A"}
    ]"#;

    #[test]
    fn test_load_from_slice() {
        let records = load_from_slice(DOC.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].login, serde_json::json!("alice"));
    }

    #[test]
    fn test_load_from_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("users.json");
        std::fs::write(&path, DOC).unwrap();
        let records = load_from_path(&path).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = load_from_path(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn test_load_malformed_document_is_json_error() {
        let err = load_from_slice(b"{\"not\": \"an array\"}").unwrap_err();
        assert!(matches!(err, LoadError::Json { .. }));
        let err = load_from_slice(b"junk {{").unwrap_err();
        assert!(matches!(err, LoadError::Json { .. }));
    }

    #[test]
    fn test_empty_array_loads_cleanly() {
        assert!(load_from_slice(b"[]").unwrap().is_empty());
    }
}
