//! Tests for input normalization through the public API.

use security_posture::{normalize_target, ScanError};

#[test]
fn test_scheme_is_prepended_when_missing() {
    let target = normalize_target("example.com").unwrap();
    assert_eq!(target.host(), "example.com");
    assert_eq!(target.https_url(), "https://example.com/");
}

#[test]
fn test_probe_urls_always_point_at_root() {
    let inputs = [
        "example.com",
        "example.com/",
        "https://example.com/a/b/c",
        "http://example.com/?q=1",
        "  HTTPS://EXAMPLE.com#top  ",
    ];
    for input in inputs {
        let target = normalize_target(input).unwrap();
        assert_eq!(target.host(), "example.com", "input {input:?}");
        assert_eq!(target.https_url(), format!("https://{}/", target.host()));
        assert_eq!(target.http_url(), format!("http://{}/", target.host()));
    }
}

#[test]
fn test_urls_differ_only_in_scheme() {
    let target = normalize_target("shop.example.co.uk:8443/cart").unwrap();
    assert_eq!(
        target.https_url().trim_start_matches("https://"),
        target.http_url().trim_start_matches("http://")
    );
}

#[test]
fn test_invalid_inputs() {
    for input in ["", "   ", "http://", "https://bad host.example", "https://[::1"] {
        match normalize_target(input) {
            Err(ScanError::InvalidUrl { input: raw, .. }) => assert_eq!(raw, input),
            other => panic!("{input:?} should be rejected, got {other:?}"),
        }
    }
}
