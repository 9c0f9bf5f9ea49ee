//! Finding types.

use serde::{Serialize, Serializer};
use strum_macros::EnumIter as EnumIterMacro;

use crate::config::{
    HEADER_CONTENT_SECURITY_POLICY, HEADER_PERMISSIONS_POLICY, HEADER_REFERRER_POLICY,
    HEADER_STRICT_TRANSPORT_SECURITY, HEADER_X_CONTENT_TYPE_OPTIONS, HEADER_X_FRAME_OPTIONS,
};

/// Identifier of a check.
///
/// Declaration order is the order findings appear in a result, and therefore
/// the order in which priorities are picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum FindingKey {
    /// HTTPS answers with a status in `[200, 400)`
    HttpsEnabled,
    /// Plain HTTP redirects to HTTPS
    HttpRedirectsToHttps,
    /// `Strict-Transport-Security` is set
    Hsts,
    /// `Content-Security-Policy` is set
    Csp,
    /// `X-Frame-Options` is set
    XFrameOptions,
    /// `X-Content-Type-Options` is set
    XContentTypeOptions,
    /// `Referrer-Policy` is set
    ReferrerPolicy,
    /// `Permissions-Policy` is set
    PermissionsPolicy,
}

impl std::fmt::Display for FindingKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FindingKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl FindingKey {
    /// Stable identifier, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            FindingKey::HttpsEnabled => "httpsEnabled",
            FindingKey::HttpRedirectsToHttps => "httpRedirectsToHttps",
            FindingKey::Hsts => "hsts",
            FindingKey::Csp => "csp",
            FindingKey::XFrameOptions => "x-frame-options",
            FindingKey::XContentTypeOptions => "x-content-type-options",
            FindingKey::ReferrerPolicy => "referrer-policy",
            FindingKey::PermissionsPolicy => "permissions-policy",
        }
    }

    /// Response header backing this check, if it is a header check.
    pub fn header_name(&self) -> Option<&'static str> {
        match self {
            FindingKey::HttpsEnabled | FindingKey::HttpRedirectsToHttps => None,
            FindingKey::Hsts => Some(HEADER_STRICT_TRANSPORT_SECURITY),
            FindingKey::Csp => Some(HEADER_CONTENT_SECURITY_POLICY),
            FindingKey::XFrameOptions => Some(HEADER_X_FRAME_OPTIONS),
            FindingKey::XContentTypeOptions => Some(HEADER_X_CONTENT_TYPE_OPTIONS),
            FindingKey::ReferrerPolicy => Some(HEADER_REFERRER_POLICY),
            FindingKey::PermissionsPolicy => Some(HEADER_PERMISSIONS_POLICY),
        }
    }

    /// Message used when the check passes.
    pub fn pass_message(&self) -> &'static str {
        match self {
            FindingKey::HttpsEnabled => "HTTPS is enabled and responds correctly.",
            FindingKey::HttpRedirectsToHttps => "HTTP requests are redirected to HTTPS.",
            FindingKey::Hsts => "Strict-Transport-Security (HSTS) header is set.",
            FindingKey::Csp => "Content-Security-Policy header is set.",
            FindingKey::XFrameOptions => "X-Frame-Options header is set (clickjacking protection).",
            FindingKey::XContentTypeOptions => {
                "X-Content-Type-Options header is set (MIME sniffing protection)."
            }
            FindingKey::ReferrerPolicy => "Referrer-Policy header is set.",
            FindingKey::PermissionsPolicy => "Permissions-Policy header is set.",
        }
    }

    /// Message used when the check fails.
    pub fn fail_message(&self) -> &'static str {
        match self {
            FindingKey::HttpsEnabled => "HTTPS is not available or does not respond correctly.",
            FindingKey::HttpRedirectsToHttps => "HTTP requests are not redirected to HTTPS.",
            FindingKey::Hsts => "Strict-Transport-Security (HSTS) header is missing.",
            FindingKey::Csp => "Content-Security-Policy header is missing.",
            FindingKey::XFrameOptions => {
                "X-Frame-Options header is missing; the site can be framed (clickjacking)."
            }
            FindingKey::XContentTypeOptions => {
                "X-Content-Type-Options header is missing; browsers may MIME-sniff responses."
            }
            FindingKey::ReferrerPolicy => "Referrer-Policy header is missing.",
            FindingKey::PermissionsPolicy => "Permissions-Policy header is missing.",
        }
    }

    /// One-line remediation, shown only when the check fails.
    pub fn advice(&self) -> Option<&'static str> {
        let advice = match self {
            FindingKey::HttpsEnabled => {
                "Serve the site over HTTPS with a valid TLS certificate (e.g. from Let's Encrypt)."
            }
            FindingKey::HttpRedirectsToHttps => {
                "Redirect all HTTP requests to HTTPS with a 301 or 308 response (Location: https://...)."
            }
            FindingKey::Hsts => "Strict-Transport-Security: max-age=31536000; includeSubDomains",
            FindingKey::Csp => "Content-Security-Policy: default-src 'self'",
            FindingKey::XFrameOptions => "X-Frame-Options: DENY",
            FindingKey::XContentTypeOptions => "X-Content-Type-Options: nosniff",
            FindingKey::ReferrerPolicy => "Referrer-Policy: strict-origin-when-cross-origin",
            FindingKey::PermissionsPolicy => {
                "Permissions-Policy: geolocation=(), microphone=(), camera=()"
            }
        };
        Some(advice)
    }
}

/// Result of one check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// Which check this is
    pub key: FindingKey,
    /// Whether the check passed
    pub ok: bool,
    /// Fixed pass or fail message
    pub message: String,
    /// Present iff `ok` is false
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advice: Option<String>,
}

impl Finding {
    /// Builds the finding for `key` with its fixed message and, on failure, its advice.
    pub fn new(key: FindingKey, ok: bool) -> Self {
        let (message, advice) = if ok {
            (key.pass_message(), None)
        } else {
            (key.fail_message(), key.advice())
        };
        Self {
            key,
            ok,
            message: message.to_string(),
            advice: advice.map(str::to_string),
        }
    }
}

/// A remediation item picked from a failing finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Priority {
    /// Key of the failing finding
    pub key: FindingKey,
    /// Its remediation advice
    pub advice: String,
}
