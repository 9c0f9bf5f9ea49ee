//! URL validation and normalization.

use log::warn;

use crate::config::MAX_URL_LENGTH;
use crate::error_handling::ScanError;
use crate::models::ScanTarget;
use crate::utils::starts_with_ignore_ascii_case;

/// Returns `true` if `input` starts with `http://` or `https://`, ignoring case.
fn has_http_scheme(input: &str) -> bool {
    starts_with_ignore_ascii_case(input, "http://")
        || starts_with_ignore_ascii_case(input, "https://")
}

fn invalid(input: &str, reason: impl Into<String>) -> ScanError {
    let reason = reason.into();
    warn!("Rejecting invalid URL {input:?}: {reason}");
    ScanError::InvalidUrl {
        input: input.to_string(),
        reason,
    }
}

/// Normalizes free-form input into a `ScanTarget`.
///
/// Trims whitespace, adds an `https://` prefix if no http(s) scheme is present,
/// then parses the result. Only the host (and port, if given) is kept: path,
/// query, fragment and credentials are dropped, and both probe URLs point at `/`.
///
/// # Errors
///
/// Returns `ScanError::InvalidUrl` if the input is empty, longer than
/// `MAX_URL_LENGTH`, cannot be parsed, or has no host.
///
/// # Examples
///
/// ```
/// use security_posture::normalize_target;
///
/// let target = normalize_target("  example.com/login?next=/ ").unwrap();
/// assert_eq!(target.host(), "example.com");
/// assert_eq!(target.https_url(), "https://example.com/");
/// assert_eq!(target.http_url(), "http://example.com/");
/// ```
pub fn normalize_target(input: &str) -> Result<ScanTarget, ScanError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(invalid(input, "empty input"));
    }
    if trimmed.len() > MAX_URL_LENGTH {
        return Err(invalid(
            input,
            format!(
                "input exceeds maximum length ({} > {})",
                trimmed.len(),
                MAX_URL_LENGTH
            ),
        ));
    }

    let normalized = if has_http_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    let parsed = url::Url::parse(&normalized).map_err(|e| invalid(input, e.to_string()))?;
    let host = match parsed.host_str() {
        Some(host) if !host.is_empty() => host,
        _ => return Err(invalid(input, "URL has no host")),
    };

    // port() is None for the scheme's default port, so https://example.com:443 -> example.com
    let host = match parsed.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    };

    Ok(ScanTarget::for_host(host))
}
