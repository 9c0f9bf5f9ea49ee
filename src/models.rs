//! Data passed between the scan stages.
//!
//! Each stage owns its output and hands it to the next one by value.

use serde::Serialize;

use crate::config::{
    HEADER_CONTENT_SECURITY_POLICY, HEADER_PERMISSIONS_POLICY, HEADER_REFERRER_POLICY,
    HEADER_STRICT_TRANSPORT_SECURITY, HEADER_X_CONTENT_TYPE_OPTIONS, HEADER_X_FRAME_OPTIONS,
};
use crate::security::{Finding, Priority};

/// Canonical probe targets derived from user input.
///
/// Both URLs share `host`, differ only in scheme and always end in `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanTarget {
    host: String,
    https_url: String,
    http_url: String,
}

impl ScanTarget {
    /// Builds the two root URLs for a host (`host` may carry a `:port`).
    pub(crate) fn for_host(host: String) -> Self {
        let https_url = format!("https://{host}/");
        let http_url = format!("http://{host}/");
        Self {
            host,
            https_url,
            http_url,
        }
    }

    /// Points the probes at arbitrary URLs (mock servers in tests).
    #[cfg(test)]
    pub(crate) fn with_urls(host: &str, https_url: String, http_url: String) -> Self {
        Self {
            host: host.to_string(),
            https_url,
            http_url,
        }
    }

    /// Host, including the port when one was given.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// `https://{host}/`
    pub fn https_url(&self) -> &str {
        &self.https_url
    }

    /// `http://{host}/`
    pub fn http_url(&self) -> &str {
        &self.http_url
    }
}

/// The six security headers read from the HTTPS response.
///
/// Every field is always serialized, as `null` when the header was absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SecurityHeaders {
    /// `Strict-Transport-Security`
    #[serde(rename = "strict-transport-security")]
    pub strict_transport_security: Option<String>,
    /// `Content-Security-Policy`
    #[serde(rename = "content-security-policy")]
    pub content_security_policy: Option<String>,
    /// `X-Frame-Options`
    #[serde(rename = "x-frame-options")]
    pub x_frame_options: Option<String>,
    /// `X-Content-Type-Options`
    #[serde(rename = "x-content-type-options")]
    pub x_content_type_options: Option<String>,
    /// `Referrer-Policy`
    #[serde(rename = "referrer-policy")]
    pub referrer_policy: Option<String>,
    /// `Permissions-Policy`
    #[serde(rename = "permissions-policy")]
    pub permissions_policy: Option<String>,
}

impl SecurityHeaders {
    fn slot(&self, name: &str) -> Option<&Option<String>> {
        match name {
            HEADER_STRICT_TRANSPORT_SECURITY => Some(&self.strict_transport_security),
            HEADER_CONTENT_SECURITY_POLICY => Some(&self.content_security_policy),
            HEADER_X_FRAME_OPTIONS => Some(&self.x_frame_options),
            HEADER_X_CONTENT_TYPE_OPTIONS => Some(&self.x_content_type_options),
            HEADER_REFERRER_POLICY => Some(&self.referrer_policy),
            HEADER_PERMISSIONS_POLICY => Some(&self.permissions_policy),
            _ => None,
        }
    }

    pub(crate) fn slot_mut(&mut self, name: &str) -> Option<&mut Option<String>> {
        match name {
            HEADER_STRICT_TRANSPORT_SECURITY => Some(&mut self.strict_transport_security),
            HEADER_CONTENT_SECURITY_POLICY => Some(&mut self.content_security_policy),
            HEADER_X_FRAME_OPTIONS => Some(&mut self.x_frame_options),
            HEADER_X_CONTENT_TYPE_OPTIONS => Some(&mut self.x_content_type_options),
            HEADER_REFERRER_POLICY => Some(&mut self.referrer_policy),
            HEADER_PERMISSIONS_POLICY => Some(&mut self.permissions_policy),
            _ => None,
        }
    }

    /// Value of a tracked header by its lowercase name; `None` when absent or untracked.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.slot(name).and_then(|value| value.as_deref())
    }
}

/// Signals collected by the two probes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeSignals {
    /// The HTTPS probe got a final status in `[200, 400)`
    pub https_enabled: bool,
    /// The plain HTTP root answered with an upgrade redirect to `https://`
    pub http_redirects_to_https: bool,
    /// Security headers of the HTTPS response (all absent if the probe failed)
    pub headers: SecurityHeaders,
}

/// Final report for one target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    /// Host that was scanned, including the port when one was given
    pub host: String,
    /// See [`ProbeSignals::https_enabled`]
    pub https_enabled: bool,
    /// See [`ProbeSignals::http_redirects_to_https`]
    pub http_redirects_to_https: bool,
    /// Security headers of the HTTPS response
    pub headers: SecurityHeaders,
    /// 0 to 100, ten points per passing finding
    pub score: u8,
    /// Eight findings in fixed order
    pub findings: Vec<Finding>,
    /// Up to three remediation items, in finding order
    pub priorities: Vec<Priority>,
}

impl ScanResult {
    /// Assembles the result from the outputs of the previous stages.
    pub(crate) fn compose(
        host: String,
        signals: ProbeSignals,
        findings: Vec<Finding>,
        score: u8,
        priorities: Vec<Priority>,
    ) -> Self {
        Self {
            host,
            https_enabled: signals.https_enabled,
            http_redirects_to_https: signals.http_redirects_to_https,
            headers: signals.headers,
            score,
            findings,
            priorities,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_target_urls_share_host() {
        let target = ScanTarget::for_host("example.com:8443".to_string());
        assert_eq!(target.host(), "example.com:8443");
        assert_eq!(target.https_url(), "https://example.com:8443/");
        assert_eq!(target.http_url(), "http://example.com:8443/");
    }

    #[test]
    fn test_security_headers_lookup() {
        let mut headers = SecurityHeaders::default();
        assert_eq!(headers.get(HEADER_X_FRAME_OPTIONS), None);

        if let Some(slot) = headers.slot_mut(HEADER_X_FRAME_OPTIONS) {
            *slot = Some("DENY".to_string());
        }
        assert_eq!(headers.get(HEADER_X_FRAME_OPTIONS), Some("DENY"));
        assert_eq!(headers.x_frame_options.as_deref(), Some("DENY"));
        assert_eq!(headers.get("server"), None);
        assert!(headers.slot_mut("server").is_none());
    }

    #[test]
    fn test_security_headers_serialize_all_names() {
        let value = serde_json::to_value(SecurityHeaders::default()).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 6);
        for name in crate::config::SECURITY_HEADERS {
            assert!(object[*name].is_null(), "{name} should serialize as null");
        }
    }
}
