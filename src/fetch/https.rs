//! HTTPS availability probe.

use log::debug;
use reqwest::header::HeaderMap;

use crate::config::{HTTPS_OK_STATUS_MAX, HTTPS_OK_STATUS_MIN};
use crate::error_handling::categorize_reqwest_error;
use crate::fetch::request::RequestHeaders;

/// Outcome of the HTTPS probe.
#[derive(Debug, Clone, Default)]
pub struct HttpsProbe {
    /// Final status (after redirects) was in `[200, 400)`
    pub enabled: bool,
    /// Headers of the final response; `None` when no response was received
    pub headers: Option<HeaderMap>,
}

/// Fetches `url` following redirects and reports whether HTTPS answers.
///
/// Any status in `[200, 400)` counts as enabled, so 401/403/404 pages do too:
/// the server answered over TLS. Response headers are kept whenever a response
/// arrived, even if its status falls outside that range. The body is never read.
pub async fn probe_https(client: &reqwest::Client, url: &str) -> HttpsProbe {
    match RequestHeaders::apply_to_request_builder(client.get(url))
        .send()
        .await
    {
        Ok(response) => {
            let status = response.status().as_u16();
            let enabled = (HTTPS_OK_STATUS_MIN..HTTPS_OK_STATUS_MAX).contains(&status);
            debug!(
                "HTTPS probe {} -> {} (final URL {}), enabled={}",
                url,
                status,
                response.url(),
                enabled
            );
            HttpsProbe {
                enabled,
                headers: Some(response.headers().clone()),
            }
        }
        Err(e) => {
            debug!(
                "HTTPS probe {} failed ({}): {}",
                url,
                categorize_reqwest_error(&e),
                e
            );
            HttpsProbe::default()
        }
    }
}
