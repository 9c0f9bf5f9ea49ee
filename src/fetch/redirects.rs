//! HTTP to HTTPS redirect probe.
//!
//! Only the first hop is inspected; the client used here has redirects disabled.

use log::{debug, warn};

use crate::config::UPGRADE_REDIRECT_STATUSES;
use crate::error_handling::categorize_reqwest_error;
use crate::fetch::request::RequestHeaders;
use crate::utils::starts_with_ignore_ascii_case;

/// Returns `true` if a response is a redirect to an `https://` location.
///
/// The status must be one of 301, 302, 307 or 308. Only the scheme of the
/// location is checked; host and path may point anywhere.
pub fn is_https_upgrade(status: u16, location: Option<&str>) -> bool {
    UPGRADE_REDIRECT_STATUSES.contains(&status)
        && location.is_some_and(|loc| starts_with_ignore_ascii_case(loc, "https://"))
}

/// Fetches the plain HTTP `url` and reports whether it redirects to HTTPS.
///
/// Returns `false` on any transport failure.
pub async fn probe_http_redirect(client: &reqwest::Client, url: &str) -> bool {
    let response = match RequestHeaders::apply_to_request_builder(client.get(url))
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => {
            debug!(
                "Redirect probe {} failed ({}): {}",
                url,
                categorize_reqwest_error(&e),
                e
            );
            return false;
        }
    };

    let status = response.status().as_u16();
    let raw_location = response.headers().get(reqwest::header::LOCATION);
    let location = raw_location.and_then(|value| value.to_str().ok());
    let upgrades = is_https_upgrade(status, location);

    if UPGRADE_REDIRECT_STATUSES.contains(&status) {
        match (raw_location, location) {
            (None, _) => warn!("Redirect status {} for {} but no Location header", status, url),
            (Some(_), None) => warn!(
                "Redirect status {} for {} with a non-UTF-8 Location header",
                status, url
            ),
            _ => {}
        }
    }
    debug!(
        "Redirect probe {} -> {} (location {:?}), redirects_to_https={}",
        url, status, location, upgrades
    );
    upgrades
}
