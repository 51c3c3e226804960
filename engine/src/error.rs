//! Engine-specific error types

use shared::SharedError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Missing required column: {column}")]
    MissingColumn { column: String },

    #[error("Invalid record at line {line}: {message}")]
    InvalidRecord { line: usize, message: String },

    #[error("Non-finite value at line {line}, column {column}")]
    NonFiniteField { line: usize, column: String },

    #[error("Duplicate grid coordinate ({x}, {y})")]
    DuplicateCoordinate { x: i64, y: i64 },

    #[error("Configuration error: {field}")]
    ConfigurationError { field: String },

    #[error("Shared component error")]
    SharedError(#[from] SharedError),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type EngineResult<T> = Result<T, EngineError>;
