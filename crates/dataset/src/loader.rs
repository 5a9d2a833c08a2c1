//! CSV Record Loader
//!
//! Reads customer purchase records and validates them against the static
//! record schema. Column order in the source does not matter, but every
//! schema column must be present exactly once and no other column may
//! appear.

use crate::collection::Dataset;
use crate::error::LoadError;
use crate::record::{Record, COLUMNS};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io;
use std::path::Path;
use tracing::{debug, info, warn};

/// Load records from a CSV file on disk
pub fn load_path<P: AsRef<Path>>(path: P) -> Result<Dataset<Record>, LoadError> {
    let path = path.as_ref();
    let source = path.display().to_string();

    let file = File::open(path).map_err(|e| {
        warn!(path = %source, error = %e, "Data source unavailable");
        LoadError::DataUnavailable {
            path: source.clone(),
            message: e.to_string(),
        }
    })?;

    load_reader(file, &source)
}

/// Load records from any reader producing CSV text.
///
/// `source` names the input in log events and errors.
pub fn load_reader<R: io::Read>(reader: R, source: &str) -> Result<Dataset<Record>, LoadError> {
    info!(source, "Load started");

    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| LoadError::DataUnavailable {
            path: source.to_string(),
            message: format!("Failed to read header: {e}"),
        })?
        .clone();

    check_schema(&headers)?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| LoadError::InvalidRecord {
            line: e.position().map(|p| p.line()).unwrap_or(0),
            message: e.to_string(),
        })?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);

        let record: Record = row
            .deserialize(Some(&headers))
            .map_err(|e| LoadError::InvalidRecord {
                line,
                message: e.to_string(),
            })?;

        if let Err(message) = validate(&record) {
            warn!(line, %message, "Rejected record");
            return Err(LoadError::InvalidRecord { line, message });
        }

        records.push(record);
    }

    info!(source, rows = records.len(), "Load completed");
    Ok(Dataset::new(records))
}

/// Compare a header row against the record schema
fn check_schema(headers: &StringRecord) -> Result<(), LoadError> {
    let mut seen: Vec<&str> = Vec::with_capacity(headers.len());
    let mut unexpected = Vec::new();

    for name in headers.iter() {
        if COLUMNS.contains(&name) && !seen.contains(&name) {
            seen.push(name);
        } else {
            unexpected.push(name.to_string());
        }
    }

    let missing: Vec<String> = COLUMNS
        .iter()
        .filter(|column| !seen.contains(column))
        .map(|column| column.to_string())
        .collect();

    if missing.is_empty() && unexpected.is_empty() {
        debug!("Header matches record schema");
        Ok(())
    } else {
        warn!(?missing, ?unexpected, "Header does not match record schema");
        Err(LoadError::Schema {
            missing,
            unexpected,
        })
    }
}

/// Range checks the type system cannot express
fn validate(record: &Record) -> Result<(), String> {
    for (field, value) in [("Income", record.income), ("Miles", record.miles_per_week)] {
        if !value.is_finite() || value < 0.0 {
            return Err(format!("{field} value {value} must be finite and non-negative"));
        }
    }
    Ok(())
}
