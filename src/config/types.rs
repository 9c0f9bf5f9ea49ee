//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and library configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_MAX_CONCURRENCY, DEFAULT_MIN_SCORE, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
    MAX_SCORE, MAX_TIMEOUT_SECS,
};
use crate::error_handling::ConfigValidationError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Output format for scan results written to stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored, human-readable report
    Plain,
    /// One JSON object per line
    Json,
}

/// Exit code policy for the CLI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FailOn {
    /// Always exit 0 once the run completes
    Never,
    /// Exit 2 if any target could not be scanned
    InvalidInput,
    /// Exit 2 if any target scored below `--min-score` or could not be scanned
    LowScore,
}

/// Command-line options and configuration.
///
/// # Examples
///
/// ```bash
/// # Single host, human-readable report
/// security_posture example.com
///
/// # Several hosts as JSON lines, failing CI when a score drops below 80
/// security_posture --format json --fail-on low-score --min-score 80 example.com example.org
///
/// # Targets from a file (or '-' for stdin)
/// security_posture --file hosts.txt --max-concurrency 16
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "security_posture",
    version,
    about = "Checks HTTPS, HTTP to HTTPS redirection and security headers of web hosts."
)]
pub struct Config {
    /// Hosts or URLs to scan (scheme optional, path and query are ignored)
    #[arg(value_name = "URL")]
    pub urls: Vec<String>,

    /// File to read targets from, one per line ('-' reads stdin)
    #[arg(long, value_parser)]
    pub file: Option<PathBuf>,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Result format: plain|json
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// Per-probe timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Maximum number of targets scanned concurrently
    #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENCY)]
    pub max_concurrency: usize,

    /// Exit code policy: never|invalid-input|low-score
    #[arg(long, value_enum, default_value_t = FailOn::Never)]
    pub fail_on: FailOn,

    /// Minimum acceptable score for `--fail-on low-score`
    #[arg(long, default_value_t = DEFAULT_MIN_SCORE)]
    pub min_score: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            urls: Vec::new(),
            file: None,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
            format: OutputFormat::Plain,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            fail_on: FailOn::Never,
            min_score: DEFAULT_MIN_SCORE,
        }
    }
}

impl Config {
    /// Checks option values that clap cannot express as types.
    ///
    /// # Errors
    ///
    /// Returns the first offending field together with a message describing the
    /// accepted range.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.urls.is_empty() && self.file.is_none() {
            return Err(ConfigValidationError::new(
                "urls",
                "no targets given: pass at least one URL or use --file <path> ('-' for stdin)",
            ));
        }
        if self.timeout_seconds == 0 || self.timeout_seconds > MAX_TIMEOUT_SECS {
            return Err(ConfigValidationError::new(
                "timeout_seconds",
                format!("timeout_seconds must be greater than 0 and at most {MAX_TIMEOUT_SECS}"),
            ));
        }
        if self.max_concurrency == 0 {
            return Err(ConfigValidationError::new(
                "max_concurrency",
                "max_concurrency must be greater than 0",
            ));
        }
        if self.min_score > MAX_SCORE {
            return Err(ConfigValidationError::new(
                "min_score",
                format!("min_score must be between 0 and {MAX_SCORE}"),
            ));
        }
        Ok(())
    }
}

/// Library-level scan options (no CLI dependencies).
///
/// # Examples
///
/// ```
/// use security_posture::ScanOptions;
/// use std::time::Duration;
///
/// let options = ScanOptions {
///     timeout: Duration::from_secs(5),
///     ..Default::default()
/// };
/// assert_eq!(options.timeout, Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Total timeout applied to each probe request
    pub timeout: Duration,
    /// HTTP User-Agent header value
    pub user_agent: String,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl From<&Config> for ScanOptions {
    fn from(config: &Config) -> Self {
        Self {
            timeout: Duration::from_secs(config.timeout_seconds),
            user_agent: config.user_agent.clone(),
        }
    }
}
