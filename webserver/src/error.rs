//! WebServer-specific error types

use engine::EngineError;
use shared::SharedError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WebServerError {
    #[error("HTTP server startup failed: {0}")]
    ServerStartup(String),

    #[error("Invalid request format: {details}")]
    InvalidRequest { details: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Response building error: {0}")]
    ResponseError(String),

    #[error("Engine error: {0}")]
    EngineError(#[from] EngineError),

    #[error("Shared component error")]
    SharedError(#[from] SharedError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl WebServerError {
    /// Convenience constructor for configuration problems
    pub fn config(message: impl Into<String>) -> Self {
        WebServerError::ConfigError(message.into())
    }

    /// Whether the caller supplied a bad request rather than the server failing
    pub fn is_client_error(&self) -> bool {
        match self {
            WebServerError::InvalidRequest { .. } | WebServerError::SharedError(_) => true,
            WebServerError::EngineError(e) => matches!(
                e,
                EngineError::DuplicateCoordinate { .. }
                    | EngineError::ConfigurationError { .. }
                    | EngineError::MissingColumn { .. }
                    | EngineError::InvalidRecord { .. }
                    | EngineError::NonFiniteField { .. }
            ),
            _ => false,
        }
    }
}

pub type WebServerResult<T> = Result<T, WebServerError>;
