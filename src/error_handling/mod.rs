//! Error handling.
//!
//! This module provides:
//! - Error type definitions for scans, initialization and configuration
//! - Categorization of probe transport failures (for logging)
//!
//! Errors are split into two tiers:
//! - **Errors**: the input cannot be scanned, or an internal fault occurred
//! - **Degradations**: network failures during a probe, absorbed into `false` signals

mod categorization;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use types::{
    ConfigValidationError, ErrorResponse, InitializationError, ProbeFailure, ScanError,
};
