//! Error type definitions.
//!
//! This module defines the error types surfaced to callers and the failure
//! categories used when a probe degrades.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use serde::Serialize;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Errors returned by a scan.
///
/// Network failures during the probes are not errors: they degrade to `false`
/// signals and the scan still produces a full result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// The input cannot be turned into a scannable target.
    #[error("Invalid URL '{input}': {reason}")]
    InvalidUrl {
        /// The raw input as given by the caller
        input: String,
        /// Why the input was rejected
        reason: String,
    },

    /// An unexpected fault inside the scanner (e.g. a probe task panicked).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ScanError {
    /// Returns `true` when the caller is at fault (4xx-equivalent).
    pub fn is_client_error(&self) -> bool {
        matches!(self, ScanError::InvalidUrl { .. })
    }

    /// Converts the error into the structured payload exposed at the boundary.
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            message: self.to_string(),
        }
    }
}

impl From<InitializationError> for ScanError {
    fn from(e: InitializationError) -> Self {
        ScanError::Internal(e.to_string())
    }
}

impl From<tokio::task::JoinError> for ScanError {
    fn from(e: tokio::task::JoinError) -> Self {
        ScanError::Internal(format!("probe task failed: {e}"))
    }
}

/// Caller-facing error payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    /// Human-readable description of the failure
    pub message: String,
}

/// A configuration value outside its accepted range.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid value for {field}: {message}")]
pub struct ConfigValidationError {
    /// Name of the offending option
    pub field: &'static str,
    /// What is accepted instead
    pub message: String,
}

impl ConfigValidationError {
    pub(crate) fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Categories of transport failures seen by the probes.
///
/// Only used for logging; every category degrades the probe to `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ProbeFailure {
    /// Total or connect timeout elapsed
    Timeout,
    /// DNS, TCP or TLS failure while connecting
    Connect,
    /// Redirect limit exceeded or invalid redirect
    Redirect,
    /// Request could not be sent
    Request,
    /// Response body or decoding failure
    Body,
    /// Anything else
    Other,
}

impl std::fmt::Display for ProbeFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ProbeFailure {
    /// Short label used in log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProbeFailure::Timeout => "timeout",
            ProbeFailure::Connect => "connect error",
            ProbeFailure::Redirect => "redirect error",
            ProbeFailure::Request => "request error",
            ProbeFailure::Body => "body error",
            ProbeFailure::Other => "other error",
        }
    }
}
