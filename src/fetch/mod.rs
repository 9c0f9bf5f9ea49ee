//! Network probes.
//!
//! Two independent probes run concurrently for every target:
//! - the HTTPS probe fetches `https://{host}/` following redirects and keeps the
//!   response headers
//! - the redirect probe fetches `http://{host}/` without following redirects and
//!   inspects the first hop
//!
//! Probes never fail: transport errors (DNS, TLS, refused connections, timeouts)
//! are logged and degrade to `false` signals.

mod context;
mod https;
mod redirects;
mod request;


use std::sync::Arc;

use log::debug;

pub use context::ProbeContext;
pub use https::{probe_https, HttpsProbe};
pub use redirects::{is_https_upgrade, probe_http_redirect};
pub use request::extract_security_headers;

use crate::error_handling::ScanError;
use crate::models::{ProbeSignals, ScanTarget};

/// Runs both probes for `target` as concurrent tasks and joins their signals.
///
/// # Errors
///
/// Returns `ScanError::Internal` only if a probe task panics or is cancelled.
/// Network failures are never errors.
pub async fn probe_target(
    ctx: &ProbeContext,
    target: &ScanTarget,
) -> Result<ProbeSignals, ScanError> {
    let https_task = {
        let client = Arc::clone(&ctx.client);
        let url = target.https_url().to_string();
        tokio::spawn(async move { probe_https(&client, &url).await })
    };
    let redirect_task = {
        let client = Arc::clone(&ctx.redirect_client);
        let url = target.http_url().to_string();
        tokio::spawn(async move { probe_http_redirect(&client, &url).await })
    };

    let (https, redirect) = tokio::join!(https_task, redirect_task);
    let https = https?;
    let http_redirects_to_https = redirect?;

    debug!(
        "Probes for {} finished: https_enabled={}, http_redirects_to_https={}",
        target.host(),
        https.enabled,
        http_redirects_to_https
    );

    Ok(ProbeSignals {
        https_enabled: https.enabled,
        http_redirects_to_https,
        headers: extract_security_headers(https.headers.as_ref()),
    })
}
