//! Shared resources for the probes.

use std::sync::Arc;

use crate::config::ScanOptions;
use crate::error_handling::InitializationError;
use crate::initialization::{init_client, init_redirect_client};

/// HTTP clients used by the two probes.
///
/// Cheap to clone; the clients are reference-counted and hold no per-scan state.
#[derive(Clone)]
pub struct ProbeContext {
    /// HTTP client for the HTTPS probe (with redirects enabled)
    pub client: Arc<reqwest::Client>,
    /// HTTP client for the redirect probe (with redirects disabled)
    pub redirect_client: Arc<reqwest::Client>,
}

impl ProbeContext {
    /// Builds both clients from the scan options.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if a client cannot be built.
    pub fn new(options: &ScanOptions) -> Result<Self, InitializationError> {
        Ok(Self {
            client: init_client(options)?,
            redirect_client: init_redirect_client(options)?,
        })
    }
}
