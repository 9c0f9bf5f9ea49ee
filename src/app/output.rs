//! Result rendering for the CLI.

use std::io::{self, Write};

use colored::*;
use serde::Serialize;

use crate::config::OutputFormat;
use crate::error_handling::{ErrorResponse, ScanError};
use crate::models::ScanResult;

/// JSON line written for an input that could not be scanned.
#[derive(Serialize)]
struct FailedScan<'a> {
    input: &'a str,
    error: ErrorResponse,
}

/// Writes one scan outcome to `out` in the requested format.
///
/// JSON output is one object per line: either a `ScanResult` or
/// `{"input": ..., "error": {"message": ...}}`.
pub fn write_outcome<W: Write>(
    out: &mut W,
    format: OutputFormat,
    input: &str,
    outcome: &Result<ScanResult, ScanError>,
) -> io::Result<()> {
    match (format, outcome) {
        (OutputFormat::Json, Ok(result)) => {
            serde_json::to_writer(&mut *out, result)?;
            writeln!(out)
        }
        (OutputFormat::Json, Err(e)) => {
            let failed = FailedScan {
                input,
                error: e.to_response(),
            };
            serde_json::to_writer(&mut *out, &failed)?;
            writeln!(out)
        }
        (OutputFormat::Plain, Ok(result)) => write_plain(out, result),
        (OutputFormat::Plain, Err(e)) => {
            writeln!(out, "{} {}", "✘".red(), e.to_string().red())?;
            writeln!(out)
        }
    }
}

fn write_plain<W: Write>(out: &mut W, result: &ScanResult) -> io::Result<()> {
    let score = format!("{}/100", result.score);
    let score = match result.score {
        80..=100 => score.green(),
        50..=79 => score.yellow(),
        _ => score.red(),
    };
    writeln!(out, "{}  score {}", result.host.bold(), score)?;

    for finding in &result.findings {
        let mark = if finding.ok { "✔".green() } else { "✘".red() };
        writeln!(out, "  {} {}", mark, finding.message)?;
    }

    if !result.priorities.is_empty() {
        writeln!(out, "  {}", "Priorities:".bold())?;
        for (index, priority) in result.priorities.iter().enumerate() {
            writeln!(
                out,
                "    {}. [{}] {}",
                index + 1,
                priority.key.as_str().cyan(),
                priority.advice
            )?;
        }
    }
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ProbeSignals, SecurityHeaders};
    use crate::security::{compute_score, evaluate_findings, select_priorities};

    fn sample_result(https_enabled: bool) -> ScanResult {
        let signals = ProbeSignals {
            https_enabled,
            http_redirects_to_https: false,
            headers: SecurityHeaders {
                x_frame_options: Some("DENY".to_string()),
                ..Default::default()
            },
        };
        let findings = evaluate_findings(&signals);
        let score = compute_score(&findings);
        let priorities = select_priorities(&findings);
        ScanResult::compose(
            "example.com".to_string(),
            signals,
            findings,
            score,
            priorities,
        )
    }

    fn render(format: OutputFormat, outcome: &Result<ScanResult, ScanError>) -> String {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        write_outcome(&mut buf, format, "example.com", outcome).expect("write to Vec");
        String::from_utf8(buf).expect("utf-8 output")
    }

    #[test]
    fn test_json_result_is_single_line() {
        let output = render(OutputFormat::Json, &Ok(sample_result(true)));
        assert_eq!(output.lines().count(), 1);
        let value: serde_json::Value = serde_json::from_str(output.trim()).unwrap();
        assert_eq!(value["host"], "example.com");
        assert_eq!(value["score"], 20);
        assert_eq!(value["headers"]["x-frame-options"], "DENY");
        assert!(value["headers"]["content-security-policy"].is_null());
    }

    #[test]
    fn test_json_error_carries_input_and_message() {
        let err = ScanError::InvalidUrl {
            input: "http://".to_string(),
            reason: "empty host".to_string(),
        };
        let output = render(OutputFormat::Json, &Err(err));
        let value: serde_json::Value = serde_json::from_str(output.trim()).unwrap();
        assert_eq!(value["input"], "example.com");
        assert!(value["error"]["message"]
            .as_str()
            .unwrap()
            .contains("empty host"));
    }

    #[test]
    fn test_plain_report_lists_findings_and_priorities() {
        let output = render(OutputFormat::Plain, &Ok(sample_result(false)));
        assert!(output.contains("example.com  score 10/100"));
        assert!(output.contains("✘ HTTPS is not available"));
        assert!(output.contains("✔ X-Frame-Options header is set"));
        assert!(output.contains("Priorities:"));
        assert!(output.contains("1. [httpsEnabled]"));
        assert!(output.contains("3. [hsts] Strict-Transport-Security: max-age=31536000"));
    }

    #[test]
    fn test_plain_error_line() {
        let output = render(
            OutputFormat::Plain,
            &Err(ScanError::Internal("probe task failed".to_string())),
        );
        assert!(output.contains("✘ Internal error: probe task failed"));
    }
}
