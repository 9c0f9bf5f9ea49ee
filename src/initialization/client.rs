//! HTTP client initialization.
//!
//! This module provides functions to initialize the HTTP clients used by the
//! HTTPS probe and the HTTP redirect probe.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::{ScanOptions, MAX_REDIRECT_HOPS, TCP_CONNECT_TIMEOUT_SECS};
use crate::error_handling::InitializationError;

/// Connect timeout for the given options: never longer than the total timeout.
fn connect_timeout(options: &ScanOptions) -> Duration {
    options
        .timeout
        .min(Duration::from_secs(TCP_CONNECT_TIMEOUT_SECS))
}

/// Initializes the HTTP client used by the HTTPS probe.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from options
/// - Total timeout from options, and a separate connect timeout
/// - Redirect following enabled (up to `MAX_REDIRECT_HOPS`)
/// - Rustls TLS backend (no native TLS)
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(options: &ScanOptions) -> Result<Arc<reqwest::Client>, InitializationError> {
    let client = ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECT_HOPS))
        .timeout(options.timeout)
        .connect_timeout(connect_timeout(options))
        .user_agent(options.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}

/// Initializes the HTTP client used by the redirect probe.
///
/// Redirects are disabled so the first hop (status and `Location`) can be
/// inspected directly.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_redirect_client(
    options: &ScanOptions,
) -> Result<Arc<reqwest::Client>, InitializationError> {
    let client = ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(options.timeout)
        .connect_timeout(connect_timeout(options))
        .user_agent(options.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}
