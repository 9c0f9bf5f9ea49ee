//! Batch runs over many targets (the CLI's main loop).

mod input;

use std::io::Write;
use std::time::Instant;

use anyhow::{Context, Result};
use futures::stream::{self, StreamExt};
use log::info;

use crate::app::write_outcome;
use crate::config::{Config, FailOn, ScanOptions, EXIT_CODE_POLICY_VIOLATION};
use crate::scanner::Scanner;

pub use input::{parse_target_lines, read_targets};

/// Summary of a batch run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunReport {
    /// Number of targets read
    pub total: usize,
    /// Targets that produced a result
    pub succeeded: usize,
    /// Targets that could not be scanned (invalid input or internal fault)
    pub failed: usize,
    /// Successful targets whose score was below `min_score`
    pub low_score: usize,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

impl RunReport {
    /// Process exit code for this run under the given policy.
    ///
    /// Returns 0 when the policy is satisfied, `EXIT_CODE_POLICY_VIOLATION` otherwise.
    pub fn exit_code(&self, fail_on: FailOn) -> i32 {
        let violated = match fail_on {
            FailOn::Never => false,
            FailOn::InvalidInput => self.failed > 0,
            FailOn::LowScore => self.failed > 0 || self.low_score > 0,
        };
        if violated {
            EXIT_CODE_POLICY_VIOLATION
        } else {
            0
        }
    }
}

/// Scans every target named by `config`, writing each outcome to stdout.
///
/// At most `config.max_concurrency` targets are scanned at once; outcomes are
/// written in input order.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the target file cannot be
/// read, the HTTP clients cannot be built, or stdout cannot be written.
pub async fn run_scans(config: &Config) -> Result<RunReport> {
    config.validate()?;
    let targets = read_targets(config).await?;
    info!("Scanning {} target(s)", targets.len());

    let scanner = Scanner::new(&ScanOptions::from(config))
        .context("Failed to initialize HTTP clients")?;

    let start_time = Instant::now();
    let mut report = RunReport {
        total: targets.len(),
        ..Default::default()
    };

    let mut outcomes = stream::iter(targets)
        .map(|input| {
            let scanner = scanner.clone();
            async move {
                let outcome = scanner.scan(&input).await;
                (input, outcome)
            }
        })
        .buffered(config.max_concurrency);

    let stdout = std::io::stdout();
    while let Some((input, outcome)) = outcomes.next().await {
        match &outcome {
            Ok(result) => {
                report.succeeded += 1;
                if result.score < config.min_score {
                    report.low_score += 1;
                }
            }
            Err(_) => report.failed += 1,
        }
        let mut out = stdout.lock();
        write_outcome(&mut out, config.format, &input, &outcome)
            .context("Failed to write scan result")?;
        out.flush().context("Failed to flush stdout")?;
    }

    report.elapsed_seconds = start_time.elapsed().as_secs_f64();
    info!(
        "Scanned {} target(s) in {:.1}s: {} succeeded, {} failed, {} below score {}",
        report.total,
        report.elapsed_seconds,
        report.succeeded,
        report.failed,
        report.low_score,
        config.min_score
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(failed: usize, low_score: usize) -> RunReport {
        RunReport {
            total: 4,
            succeeded: 4 - failed,
            failed,
            low_score,
            elapsed_seconds: 0.5,
        }
    }

    #[test]
    fn test_exit_code_never() {
        assert_eq!(report(2, 2).exit_code(FailOn::Never), 0);
    }

    #[test]
    fn test_exit_code_invalid_input() {
        assert_eq!(report(0, 3).exit_code(FailOn::InvalidInput), 0);
        assert_eq!(report(1, 0).exit_code(FailOn::InvalidInput), 2);
    }

    #[test]
    fn test_exit_code_low_score() {
        assert_eq!(report(0, 0).exit_code(FailOn::LowScore), 0);
        assert_eq!(report(0, 1).exit_code(FailOn::LowScore), 2);
        assert_eq!(report(1, 0).exit_code(FailOn::LowScore), 2);
    }

    #[tokio::test]
    async fn test_run_scans_rejects_invalid_config() {
        let err = run_scans(&Config::default()).await.unwrap_err();
        assert!(err.to_string().contains("urls"));
    }

    #[tokio::test]
    async fn test_run_scans_counts_invalid_targets() {
        let config = Config {
            urls: vec!["".to_string(), "http://".to_string()],
            format: crate::config::OutputFormat::Json,
            ..Default::default()
        };
        let report = run_scans(&config).await.expect("run completes");
        assert_eq!(report.total, 2);
        assert_eq!(report.failed, 2);
        assert_eq!(report.succeeded, 0);
        assert_eq!(report.exit_code(FailOn::InvalidInput), 2);
    }
}
