//! Shared types for the HIC surrogate demo
//!
//! Contains only truly shared types used by both the engine and the
//! webserver. Component-internal types (API request/response shapes,
//! loop settings) are kept in their respective components.

pub mod errors;
pub mod logging;
pub mod types;

pub use errors::*;
pub use types::*;
