use crate::error::{PalsyError, Result};
use crate::stats::capture::CaptureRecord;
use crate::types::assessment::AssessmentRecord;
use chrono::{DateTime, NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::Path;
use thiserror::Error;

/// An array element that does not deserialize as an assessment record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("input entry {index}{} could not be parsed: {reason}", id_suffix(.id))]
pub struct MalformedRecord {
    pub index: usize,
    pub id: Option<String>,
    pub reason: String,
}

fn id_suffix(id: &Option<String>) -> String {
    id.as_ref()
        .map(|id| format!(" (id '{id}')"))
        .unwrap_or_default()
}

#[derive(Debug, Default)]
pub struct LoadedRecords {
    pub records: Vec<AssessmentRecord>,
    pub malformed: Vec<MalformedRecord>,
}

/// Loads an assessment array. A file that is not a JSON array fails as a
/// whole; a bad element only rejects that element.
pub fn load_records(path: &Path) -> Result<LoadedRecords> {
    let entries: Vec<Value> = read_json(path)?;
    let mut loaded = LoadedRecords::default();
    for (index, entry) in entries.into_iter().enumerate() {
        let id = entry.get("id").and_then(Value::as_str).map(str::to_string);
        match serde_json::from_value::<AssessmentRecord>(entry) {
            Ok(record) => loaded.records.push(record),
            Err(e) => {
                tracing::debug!(index, error = %e, "malformed assessment entry");
                loaded.malformed.push(MalformedRecord {
                    index,
                    id,
                    reason: e.to_string(),
                });
            }
        }
    }
    Ok(loaded)
}

/// Capture uploads are all-or-nothing.
pub fn load_captures(path: &Path) -> Result<Vec<CaptureRecord>> {
    read_json(path)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        return Err(PalsyError::PathNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let items: Vec<T> = serde_json::from_str(&content)
        .map_err(|e| PalsyError::InputParse(format!("{}: {}", path.display(), e)))?;
    tracing::info!(path = %path.display(), count = items.len(), "loaded input");
    Ok(items)
}

/// Accepts RFC 3339 or a bare `YYYY-MM-DD` (midnight UTC).
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| PalsyError::InvalidTimestamp(value.to_string()))
}
