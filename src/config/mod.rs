//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, limits, status code sets)
//! - Security header name constants
//! - CLI option types, library scan options and validation

mod constants;
mod headers;
mod types;

// Re-export all constants
pub use constants::*;
pub use headers::*;
pub use types::{
    Config, FailOn, LogFormat, LogLevel, OutputFormat, ScanOptions,
};
