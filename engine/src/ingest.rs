//! CSV ingest and export for FEA parameter tables
//!
//! The loop assumes a well-formed table; this module is the collaborator
//! that rejects malformed input (missing columns, non-numeric or
//! non-finite fields) before a table ever reaches it.

use crate::error::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};
use shared::{ParameterRow, ParameterTable, SharedError};
use std::fs::File;
use std::io;
use std::path::Path;

/// Column set required of uploaded FEA tables
pub const REQUIRED_COLUMNS: [&str; 6] = ["X", "Y", "Thickness", "Stiffness", "Velocity", "Penetration"];

#[derive(Debug, Deserialize)]
struct RawFeaRecord {
    #[serde(rename = "X")]
    x: i64,
    #[serde(rename = "Y")]
    y: i64,
    #[serde(rename = "Thickness")]
    thickness: f64,
    #[serde(rename = "Stiffness")]
    stiffness: f64,
    #[serde(rename = "Velocity")]
    velocity: f64,
    #[serde(rename = "Penetration")]
    penetration: f64,
}

#[derive(Debug, Serialize)]
struct OutputRecord {
    #[serde(rename = "X")]
    x: i64,
    #[serde(rename = "Y")]
    y: i64,
    #[serde(rename = "Thickness")]
    thickness: f64,
    #[serde(rename = "Stiffness")]
    stiffness: f64,
    #[serde(rename = "Velocity")]
    velocity: f64,
    #[serde(rename = "Penetration")]
    penetration: f64,
    #[serde(rename = "Predicted_HIC")]
    predicted_hic: Option<f64>,
    #[serde(rename = "Recommendation")]
    recommendation: Option<&'static str>,
}

/// Parse a CSV stream into a parameter table
///
/// Headers are matched by exact name after trimming. An input with only
/// a header row yields a valid empty table.
pub fn read_table<R: io::Read>(reader: R) -> EngineResult<ParameterTable> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(EngineError::MissingColumn {
                column: column.to_string(),
            });
        }
    }

    let mut table = ParameterTable::new();
    for (index, result) in csv_reader.deserialize::<RawFeaRecord>().enumerate() {
        // Header occupies line 1
        let line = index + 2;
        let record = result.map_err(|e| EngineError::InvalidRecord {
            line,
            message: e.to_string(),
        })?;

        let row = ParameterRow::new(
            record.x,
            record.y,
            record.thickness,
            record.stiffness,
            record.velocity,
            record.penetration,
        );
        row.validate().map_err(|e| match e {
            SharedError::NonFiniteValue { field } => EngineError::NonFiniteField { line, column: field },
            other => EngineError::SharedError(other),
        })?;

        table.push(row);
    }

    Ok(table)
}

/// Parse a CSV file into a parameter table
pub fn read_table_from_path<P: AsRef<Path>>(path: P) -> EngineResult<ParameterTable> {
    let file = File::open(path)?;
    read_table(file)
}

/// Write a table with its derived columns appended
pub fn write_table<W: io::Write>(writer: W, table: &ParameterTable) -> EngineResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for row in table.rows() {
        csv_writer.serialize(OutputRecord {
            x: row.x,
            y: row.y,
            thickness: row.thickness,
            stiffness: row.stiffness,
            velocity: row.velocity,
            penetration: row.penetration,
            predicted_hic: row.predicted_hic,
            recommendation: row.recommendation.map(|r| r.as_str()),
        })?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Write a table with its derived columns to a file
pub fn write_table_to_path<P: AsRef<Path>>(path: P, table: &ParameterTable) -> EngineResult<()> {
    let file = File::create(path)?;
    write_table(file, table)
}
