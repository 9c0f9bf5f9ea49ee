//! security_posture library: best-effort security posture checks for web hosts
//!
//! A scan normalizes the input into a host, probes `https://{host}/` (following
//! redirects) and `http://{host}/` (first hop only) concurrently, then evaluates
//! eight findings:
//!
//! - HTTPS answers with a status in `[200, 400)`
//! - plain HTTP redirects to HTTPS
//! - six security headers are present on the HTTPS response
//!
//! Each passing finding is worth 10 points, and up to three failing findings are
//! returned as prioritized advice. Network failures never abort a scan; they show
//! up as failing findings.
//!
//! # Example
//!
//! ```no_run
//! use security_posture::{ScanOptions, Scanner};
//! use std::time::Duration;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let scanner = Scanner::new(&ScanOptions {
//!     timeout: Duration::from_secs(5),
//!     ..Default::default()
//! })?;
//!
//! let result = scanner.scan("example.com").await?;
//! println!("{}: {}/100", result.host, result.score);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

mod app;
pub mod config;
mod error_handling;
mod fetch;
pub mod initialization;
mod models;
mod run;
mod scanner;
mod security;
mod utils;

// Re-export public API
pub use app::{normalize_target, write_outcome};
pub use config::{Config, FailOn, LogFormat, LogLevel, OutputFormat, ScanOptions};
pub use error_handling::{
    ConfigValidationError, ErrorResponse, InitializationError, ProbeFailure, ScanError,
};
pub use models::{ProbeSignals, ScanResult, ScanTarget, SecurityHeaders};
pub use run::{parse_target_lines, read_targets, run_scans, RunReport};
pub use scanner::{scan, Scanner};
pub use security::{Finding, FindingKey, Priority};
