//! Probe failure categorization.

use super::types::ProbeFailure;

/// Categorizes a `reqwest::Error` into a `ProbeFailure`.
///
/// Timeouts are checked first because a connect timeout also reports as a
/// connect error.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ProbeFailure {
    if error.is_timeout() {
        ProbeFailure::Timeout
    } else if error.is_connect() {
        ProbeFailure::Connect
    } else if error.is_redirect() {
        ProbeFailure::Redirect
    } else if error.is_body() || error.is_decode() {
        ProbeFailure::Body
    } else if error.is_request() {
        ProbeFailure::Request
    } else {
        ProbeFailure::Other
    }
}
