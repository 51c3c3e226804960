//! File manager service implementation
//!
//! Serves the demo page assets (HTML, CSS, JavaScript) from a
//! configurable static directory.

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::{WebServerError, WebServerResult};
use crate::traits::{FileManager, StaticFileResponse};

/// Real file manager serving from a directory on disk
#[derive(Clone)]
pub struct RealFileManager {
    static_dir: PathBuf,
    content_types: HashMap<&'static str, &'static str>,
}

impl RealFileManager {
    /// Create a new static file service rooted at the given directory
    pub fn new(static_dir: impl Into<PathBuf>) -> Self {
        let mut content_types = HashMap::new();
        content_types.insert("html", "text/html; charset=utf-8");
        content_types.insert("css", "text/css; charset=utf-8");
        content_types.insert("js", "application/javascript; charset=utf-8");
        content_types.insert("json", "application/json; charset=utf-8");
        content_types.insert("csv", "text/csv; charset=utf-8");
        content_types.insert("png", "image/png");
        content_types.insert("jpg", "image/jpeg");
        content_types.insert("jpeg", "image/jpeg");
        content_types.insert("svg", "image/svg+xml");
        content_types.insert("ico", "image/x-icon");

        Self {
            static_dir: static_dir.into(),
            content_types,
        }
    }

    /// Get file extension from path
    fn get_extension<'a>(&self, path: &'a str) -> Option<&'a str> {
        if path.contains('.') {
            path.split('.').last()
        } else {
            None
        }
    }

    /// Content type for a path, defaulting to octet-stream
    fn content_type(&self, path: &str) -> String {
        match self.get_extension(path) {
            Some(extension) => self
                .content_types
                .get(extension)
                .copied()
                .unwrap_or("application/octet-stream")
                .to_string(),
            None => "text/html; charset=utf-8".to_string(),
        }
    }

    /// Normalize a request path to a file name under the static root
    ///
    /// Rejects parent-directory components so requests cannot escape the
    /// static directory.
    fn normalize_path(&self, path: &str) -> WebServerResult<String> {
        let path = path.trim_start_matches('/');

        if path.split('/').any(|segment| segment == "..") {
            return Err(WebServerError::InvalidRequest {
                details: format!("Invalid static path: {path}"),
            });
        }

        if path.is_empty() || path == "index" {
            return Ok("index.html".to_string());
        }

        if !path.contains('.') {
            return Ok(format!("{path}.html"));
        }

        Ok(path.to_string())
    }
}

#[async_trait]
impl FileManager for RealFileManager {
    async fn serve_file(&self, path: &str) -> WebServerResult<StaticFileResponse> {
        let normalized = self.normalize_path(path)?;
        let full_path = self.static_dir.join(&normalized);

        let content = tokio::fs::read(&full_path)
            .await
            .map_err(|_| WebServerError::FileNotFound(normalized.clone()))?;

        Ok(StaticFileResponse::new(content, self.content_type(&normalized))
            .with_cache_control("public, max-age=3600".to_string()))
    }

    async fn file_exists(&self, path: &str) -> bool {
        match self.normalize_path(path) {
            Ok(normalized) => tokio::fs::try_exists(self.static_dir.join(normalized))
                .await
                .unwrap_or(false),
            Err(_) => false,
        }
    }
}
