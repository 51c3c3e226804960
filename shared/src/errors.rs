//! Shared error types for the HIC surrogate demo

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Invalid configuration: {field} = {value}")]
    InvalidConfig { field: String, value: String },

    #[error("Non-finite value in field: {field}")]
    NonFiniteValue { field: String },
}

pub type SharedResult<T> = Result<T, SharedError>;
