//! Webserver for the HIC surrogate demo
//!
//! This library provides the HTTP face of the demo: single-parameter
//! prediction, table optimization runs, and static file serving for the
//! browser UI, with engine access behind injectable service traits.

pub mod error;
pub mod services;
pub mod state;
pub mod traits;
pub mod types;
pub mod webserver_impl;

// Re-export main types
pub use error::{WebServerError, WebServerResult};
pub use state::WebServerState;
pub use types::*;
pub use webserver_impl::WebServer;

// Re-export trait definitions
pub use traits::{FileManager, PredictionService, StaticFileResponse};

// Re-export service implementations
pub use services::{EnginePredictionService, RealFileManager};
