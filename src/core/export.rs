// facegrid - core/export.rs
//
// CSV and JSON export of the current filtered record set.
// Export serialises the *raw* pre-normalisation field set, never the
// derived canonical fields, so downstream consumers see the document as
// fetched. Core layer: writes to any Write trait object; picking a file
// and putting bytes on disk is the shell's job.

use crate::core::model::{RawLanguage, RawRecord};
use crate::util::constants::{LANGUAGE_LIST_SEPARATOR, MAX_EXPORT_RECORDS};
use crate::util::error::ExportError;
use serde_json::Value;
use std::io::Write;

/// Column order of the CSV export.
const CSV_HEADER: [&str; 15] = [
    "login",
    "name",
    "location",
    "html_url",
    "followers",
    "following",
    "public_repos",
    "public_gists",
    "sponsors_count",
    "sponsoring_count",
    "total_stars",
    "avatar_updated_at",
    "last_repo_pushed_at",
    "last_public_commit_at",
    "top_languages",
];

/// Export raw records to CSV.
///
/// Null/absent cells render empty; the `"N/A"` sentinel passes through;
/// `top_languages` renders as a separator-joined name list.
pub fn export_csv<W: Write>(records: &[&RawRecord], writer: W) -> Result<usize, ExportError> {
    check_capacity(records.len())?;

    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer
        .write_record(CSV_HEADER)
        .map_err(|e| ExportError::Csv { source: e })?;

    let mut count = 0;
    for record in records {
        csv_writer
            .write_record([
                cell(&record.login),
                cell(&record.name),
                cell(&record.location),
                cell(&record.html_url),
                cell(&record.followers),
                cell(&record.following),
                cell(&record.public_repos),
                cell(&record.public_gists),
                cell(&record.sponsors_count),
                cell(&record.sponsoring_count),
                cell(&record.total_stars),
                cell(&record.avatar_updated_at),
                cell(&record.last_repo_pushed_at),
                cell(&record.last_public_commit_at),
                language_cell(&record.top_languages),
            ])
            .map_err(|e| ExportError::Csv { source: e })?;
        count += 1;
    }

    csv_writer
        .flush()
        .map_err(|e| ExportError::Io { source: e })?;

    Ok(count)
}

/// Export raw records to JSON (array of objects, pretty-printed).
pub fn export_json<W: Write>(records: &[&RawRecord], writer: W) -> Result<usize, ExportError> {
    check_capacity(records.len())?;
    serde_json::to_writer_pretty(writer, records).map_err(|e| ExportError::Json { source: e })?;
    Ok(records.len())
}

fn check_capacity(count: usize) -> Result<(), ExportError> {
    if count > MAX_EXPORT_RECORDS {
        return Err(ExportError::TooManyRecords {
            count,
            max: MAX_EXPORT_RECORDS,
        });
    }
    Ok(())
}

/// Render one loosely-typed field as a CSV cell.
fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn language_cell(languages: &[RawLanguage]) -> String {
    languages
        .iter()
        .map(|lang| lang.name.as_str())
        .collect::<Vec<_>>()
        .join(LANGUAGE_LIST_SEPARATOR)
}
