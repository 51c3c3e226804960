//! Service trait definitions for dependency injection
//!
//! Engine access and file I/O are abstracted through these traits for
//! testability.

use async_trait::async_trait;
use shared::{ImpactParameters, ParameterTable};

use crate::error::WebServerResult;
use crate::types::{OptimizationOutcome, Prediction, SettingsOverrides};

/// Engine access service trait
#[mockall::automock]
#[async_trait]
pub trait PredictionService: Send + Sync {
    /// Score a single parameter set and classify the result
    async fn predict(&self, params: ImpactParameters) -> WebServerResult<Prediction>;

    /// Run the adjustment loop over a table with per-request overrides
    async fn optimize(
        &self,
        table: ParameterTable,
        overrides: SettingsOverrides,
        include_grid: bool,
    ) -> WebServerResult<OptimizationOutcome>;
}

/// Static file serving service trait
#[mockall::automock]
#[async_trait]
pub trait FileManager: Send + Sync {
    /// Serve a static file from the configured directory
    async fn serve_file(&self, path: &str) -> WebServerResult<StaticFileResponse>;

    /// Check if a file exists
    async fn file_exists(&self, path: &str) -> bool;
}

/// Static file response
#[derive(Debug, Clone)]
pub struct StaticFileResponse {
    pub content: Vec<u8>,
    pub content_type: String,
    pub cache_control: Option<String>,
}

impl StaticFileResponse {
    /// Create new static file response
    pub fn new(content: Vec<u8>, content_type: String) -> Self {
        Self {
            content,
            content_type,
            cache_control: None,
        }
    }

    /// Set cache control header
    pub fn with_cache_control(mut self, cache_control: String) -> Self {
        self.cache_control = Some(cache_control);
        self
    }
}
