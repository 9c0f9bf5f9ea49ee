//! Scan pipeline: normalize, probe, evaluate, score, compose.


use log::info;

use crate::app::normalize_target;
use crate::config::ScanOptions;
use crate::error_handling::{InitializationError, ScanError};
use crate::fetch::{probe_target, ProbeContext};
use crate::models::{ScanResult, ScanTarget};
use crate::security::{compute_score, evaluate_findings, select_priorities};

/// Reusable scanner holding the probe clients.
///
/// Cloning is cheap and clones share the underlying connection pools. Scans of
/// different targets are independent of each other.
#[derive(Clone)]
pub struct Scanner {
    ctx: ProbeContext,
}

impl Scanner {
    /// Creates a scanner with the given options.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if an HTTP client cannot be built.
    pub fn new(options: &ScanOptions) -> Result<Self, InitializationError> {
        Ok(Self {
            ctx: ProbeContext::new(options)?,
        })
    }

    /// Normalizes `input` and scans the resulting target.
    ///
    /// # Errors
    ///
    /// - `ScanError::InvalidUrl` if `input` cannot be normalized
    /// - `ScanError::Internal` if a probe task fails unexpectedly
    ///
    /// Unreachable hosts are not errors: they produce a complete result with
    /// failing findings.
    pub async fn scan(&self, input: &str) -> Result<ScanResult, ScanError> {
        let target = normalize_target(input)?;
        self.scan_target(&target).await
    }

    /// Scans an already normalized target.
    ///
    /// # Errors
    ///
    /// Returns `ScanError::Internal` if a probe task fails unexpectedly.
    pub async fn scan_target(&self, target: &ScanTarget) -> Result<ScanResult, ScanError> {
        let signals = probe_target(&self.ctx, target).await?;
        let findings = evaluate_findings(&signals);
        let score = compute_score(&findings);
        let priorities = select_priorities(&findings);

        info!(
            "Scanned {}: score {} ({} issue{} prioritized)",
            target.host(),
            score,
            priorities.len(),
            if priorities.len() == 1 { "" } else { "s" }
        );

        Ok(ScanResult::compose(
            target.host().to_string(),
            signals,
            findings,
            score,
            priorities,
        ))
    }
}

/// Scans a single URL with default options.
///
/// # Errors
///
/// - `ScanError::InvalidUrl` if `url` cannot be normalized
/// - `ScanError::Internal` if the HTTP clients cannot be built or a probe task fails
///
/// # Example
///
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), security_posture::ScanError> {
/// let result = security_posture::scan("example.com").await?;
/// println!("{} scored {}/100", result.host, result.score);
/// for priority in &result.priorities {
///     println!("- {}", priority.advice);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn scan(url: &str) -> Result<ScanResult, ScanError> {
    let target = normalize_target(url)?;
    let scanner = Scanner::new(&ScanOptions::default())?;
    scanner.scan_target(&target).await
}
