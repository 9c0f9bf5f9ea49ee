//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `security_posture` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Exit codes
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use security_posture::initialization::init_logger_with;
use security_posture::{run_scans, Config, OutputFormat};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_scans(&config).await {
        Ok(report) => {
            if config.format == OutputFormat::Plain && report.total > 1 {
                eprintln!(
                    "Scanned {} targets ({} succeeded, {} failed, {} below {}) in {:.1}s",
                    report.total,
                    report.succeeded,
                    report.failed,
                    report.low_score,
                    config.min_score,
                    report.elapsed_seconds
                );
            }
            let code = report.exit_code(config.fail_on);
            if code != 0 {
                process::exit(code);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("security_posture error: {:#}", e);
            process::exit(1);
        }
    }
}
