//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including timeouts, size limits, and the status codes the probes care about.

// Network operation timeouts
/// Default total timeout for a single probe request, in seconds.
/// Covers DNS, connect, TLS handshake and response headers.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// Upper bound accepted for `--timeout-seconds`.
pub const MAX_TIMEOUT_SECS: u64 = 120;
/// TCP connection timeout in seconds.
/// Lowered to the total timeout when that one is smaller.
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Default number of targets scanned concurrently in batch mode.
pub const DEFAULT_MAX_CONCURRENCY: usize = 8;

/// Default minimum score used by `--fail-on low-score`.
pub const DEFAULT_MIN_SCORE: u8 = 70;

/// Default User-Agent string for probe requests.
///
/// Identifies the tool honestly; users can override it via `--user-agent`.
pub const DEFAULT_USER_AGENT: &str = concat!("security_posture/", env!("CARGO_PKG_VERSION"));

// URL validation
/// Maximum accepted input length (2048 characters).
/// Matches common browser and server limits.
pub const MAX_URL_LENGTH: usize = 2048;

// Redirect handling
/// Maximum number of redirect hops the HTTPS probe follows.
pub const MAX_REDIRECT_HOPS: usize = 10;

// Scoring
/// Points awarded per passing finding.
pub const POINTS_PER_FINDING: u8 = 10;
/// Maximum score a target can reach.
pub const MAX_SCORE: u8 = 100;
/// Maximum number of prioritized advice items in a result.
pub const MAX_PRIORITIES: usize = 3;

// HTTP status codes
/// Lower bound (inclusive) of statuses that count as "HTTPS enabled".
pub const HTTPS_OK_STATUS_MIN: u16 = 200;
/// Upper bound (exclusive) of statuses that count as "HTTPS enabled".
pub const HTTPS_OK_STATUS_MAX: u16 = 400;
/// Redirect statuses accepted as an HTTP to HTTPS upgrade.
/// 303 is not included: it changes the request method.
pub const UPGRADE_REDIRECT_STATUSES: &[u16] = &[301, 302, 307, 308];

// Exit codes
/// Exit code when the run completed but the `--fail-on` policy was violated.
pub const EXIT_CODE_POLICY_VIOLATION: i32 = 2;
