//! JSON codec for the persisted slot and for export/import files

use crate::domain::entry::validate_date;
use crate::domain::Entry;
use crate::error::{Result, StudyLogError};
use serde_json::Value;
use tracing::warn;

/// Parse text as a JSON array, returning its raw elements
fn decode_array(text: &str) -> std::result::Result<Vec<Value>, String> {
    let value: Value = serde_json::from_str(text).map_err(|e| e.to_string())?;

    match value {
        Value::Array(items) => Ok(items),
        _ => Err("Invalid file format - expected array".to_string()),
    }
}

/// Parse the persisted slot payload.
/// Elements that do not decode as entries are skipped so the rest survive the next write.
pub fn parse_stored(text: &str) -> Result<Vec<Entry>> {
    let items = decode_array(text).map_err(StudyLogError::PersistenceRead)?;

    let entries = items
        .into_iter()
        .enumerate()
        .filter_map(|(idx, item)| match serde_json::from_value::<Entry>(item) {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(entry = idx + 1, error = %e, "skipping unreadable stored entry");
                None
            }
        })
        .collect();
    Ok(entries)
}

/// Parse an import file. Anything but an array of entry objects with
/// `YYYY-MM-DD` dates is rejected.
pub fn parse_import(text: &str) -> Result<Vec<Entry>> {
    let items = decode_array(text).map_err(StudyLogError::ImportFormat)?;

    items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| -> Result<Entry> {
            let mut entry: Entry = serde_json::from_value(item).map_err(|e| {
                StudyLogError::ImportFormat(format!("entry #{}: {}", idx + 1, e))
            })?;
            let date = validate_date(&entry.date).map_err(|_| {
                StudyLogError::ImportFormat(format!(
                    "entry #{}: invalid date '{}', expected YYYY-MM-DD",
                    idx + 1,
                    entry.date
                ))
            })?;
            entry.date = date;
            Ok(entry)
        })
        .collect()
}

/// Compact form written to the storage slot
pub fn to_stored(entries: &[Entry]) -> Result<String> {
    Ok(serde_json::to_string(entries)?)
}

/// Pretty-printed form for export files
pub fn to_export(entries: &[Entry]) -> Result<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}
