// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Cheat-sheet ingestion: turn an exported sheet into `Vec<Row>`.
//!
//! This is the only place column presence is checked. Once rows exist, every
//! field is a plain string and the scorer never looks at headers again.
//!
//! Two formats, picked by file extension:
//!
//! - **CSV**: header row with the [`REQUIRED_COLUMNS`], in any order, extra
//!   columns allowed. Short records are padded with empty cells.
//! - **JSON**: an array of objects keyed by the same headers.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde_json::Value;
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::types::Row;

pub const COL_COMMON: &str = "Common";
pub const COL_KEYWORD: &str = "Keyword / Search Term";
pub const COL_REPORT: &str = "Database/Report Location";
pub const COL_FULL_KEY: &str = "Full Information Key";
pub const COL_ENTITY: &str = "Entity Type";
pub const COL_CANONICAL: &str = "Canonical Field";
pub const COL_SYNONYMS: &str = "Synonyms / Ask Phrases";

/// Headers every sheet must carry, in reporting order.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    COL_COMMON,
    COL_KEYWORD,
    COL_REPORT,
    COL_FULL_KEY,
    COL_ENTITY,
    COL_CANONICAL,
    COL_SYNONYMS,
];

/// Sheet file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetFormat {
    Csv,
    Json,
}

impl SheetFormat {
    /// Detect from the file extension, case-insensitively.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "csv" => Ok(SheetFormat::Csv),
            "json" => Ok(SheetFormat::Json),
            _ => Err(Error::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Required headers absent from `headers`, in [`REQUIRED_COLUMNS`] order.
///
/// Headers are compared after trimming surrounding whitespace.
pub fn missing_columns<S: AsRef<str>>(headers: &[S]) -> Vec<String> {
    REQUIRED_COLUMNS
        .iter()
        .filter(|required| !headers.iter().any(|h| h.as_ref().trim() == **required))
        .map(|c| c.to_string())
        .collect()
}

/// Read a CSV sheet. Validates the header row before reading any record.
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<Row>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let missing = missing_columns(&headers.iter().collect::<Vec<_>>());
    if !missing.is_empty() {
        return Err(Error::MissingColumns(missing));
    }

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let mut record = record?;
        while record.len() < headers.len() {
            record.push_field("");
        }
        rows.push(record.deserialize(Some(&headers))?);
    }
    Ok(rows)
}

/// Read a JSON sheet: an array of objects keyed by column header.
///
/// Objects that omit a column get an empty string for it, `null` cells become
/// empty strings and numbers or booleans their JSON text. The array as a whole
/// must mention every required column at least once.
pub fn read_json<R: Read>(reader: R) -> Result<Vec<Row>> {
    let records: Vec<serde_json::Map<String, Value>> = serde_json::from_reader(reader)?;

    if !records.is_empty() {
        let seen: Vec<&str> = records
            .iter()
            .flat_map(|r| r.keys().map(String::as_str))
            .collect();
        let missing = missing_columns(&seen);
        if !missing.is_empty() {
            return Err(Error::MissingColumns(missing));
        }
    }

    records
        .into_iter()
        .map(|record| {
            let cells = record
                .into_iter()
                .map(|(header, value)| (header, Value::String(cell_text(value))))
                .collect();
            serde_json::from_value(Value::Object(cells)).map_err(Error::from)
        })
        .collect()
}

fn cell_text(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    }
}

/// Load a sheet from disk, picking the format from the extension.
pub fn load_sheet(path: &Path) -> Result<Vec<Row>> {
    let format = SheetFormat::from_path(path)?;
    let reader = BufReader::new(File::open(path)?);
    let rows = match format {
        SheetFormat::Csv => read_csv(reader)?,
        SheetFormat::Json => read_json(reader)?,
    };

    if rows.is_empty() {
        warn!(path = %path.display(), "sheet has no data rows");
    }
    info!(path = %path.display(), format = ?format, rows = rows.len(), "loaded sheet");
    Ok(rows)
}
