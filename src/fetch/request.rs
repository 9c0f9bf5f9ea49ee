//! Request headers and response header extraction.

use reqwest::header::HeaderMap;

use crate::config::SECURITY_HEADERS;
use crate::models::SecurityHeaders;

/// Browser-like request headers sent with both probes.
///
/// `Upgrade-Insecure-Requests` is not sent: the redirect probe must observe
/// what the server does for any client.
pub(crate) struct RequestHeaders;

impl RequestHeaders {
    /// Applies the standard request headers to a `reqwest::RequestBuilder`.
    pub(crate) fn apply_to_request_builder(
        builder: reqwest::RequestBuilder,
    ) -> reqwest::RequestBuilder {
        builder
            .header(
                reqwest::header::ACCEPT,
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            )
            .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
    }
}

/// Extracts the tracked security headers from the HTTPS response.
///
/// `HeaderMap` lookups are case-insensitive. With no response (`None`) every
/// header is absent. Values that are not valid UTF-8 are converted lossily.
pub fn extract_security_headers(headers: Option<&HeaderMap>) -> SecurityHeaders {
    let mut extracted = SecurityHeaders::default();
    let Some(headers) = headers else {
        return extracted;
    };

    for &name in SECURITY_HEADERS {
        if let (Some(value), Some(slot)) = (headers.get(name), extracted.slot_mut(name)) {
            *slot = Some(String::from_utf8_lossy(value.as_bytes()).into_owned());
        }
    }
    extracted
}
