//! Tests for CLI argument parsing.

use clap::Parser;
use security_posture::{Config, FailOn, LogFormat, OutputFormat};
use std::path::PathBuf;

#[test]
fn test_defaults_with_single_url() {
    let config = Config::try_parse_from(["security_posture", "example.com"]).unwrap();
    assert_eq!(config.urls, vec!["example.com"]);
    assert_eq!(config.file, None);
    assert_eq!(config.format, OutputFormat::Plain);
    assert_eq!(config.timeout_seconds, 10);
    assert_eq!(config.max_concurrency, 8);
    assert_eq!(config.fail_on, FailOn::Never);
    assert_eq!(config.min_score, 70);
    assert!(config.user_agent.starts_with("security_posture/"));
    assert!(config.validate().is_ok());
}

#[test]
fn test_all_options() {
    let config = Config::try_parse_from([
        "security_posture",
        "--format",
        "json",
        "--log-format",
        "json",
        "--log-level",
        "debug",
        "--timeout-seconds",
        "4",
        "--user-agent",
        "audit-bot/2.0",
        "--max-concurrency",
        "2",
        "--fail-on",
        "low-score",
        "--min-score",
        "90",
        "--file",
        "hosts.txt",
        "a.example",
        "b.example",
    ])
    .unwrap();

    assert_eq!(config.format, OutputFormat::Json);
    assert!(matches!(config.log_format, LogFormat::Json));
    assert_eq!(
        log::LevelFilter::from(config.log_level.clone()),
        log::LevelFilter::Debug
    );
    assert_eq!(config.timeout_seconds, 4);
    assert_eq!(config.user_agent, "audit-bot/2.0");
    assert_eq!(config.max_concurrency, 2);
    assert_eq!(config.fail_on, FailOn::LowScore);
    assert_eq!(config.min_score, 90);
    assert_eq!(config.file, Some(PathBuf::from("hosts.txt")));
    assert_eq!(config.urls, vec!["a.example", "b.example"]);
}

#[test]
fn test_fail_on_invalid_input_value() {
    let config =
        Config::try_parse_from(["security_posture", "--fail-on", "invalid-input", "x.example"])
            .unwrap();
    assert_eq!(config.fail_on, FailOn::InvalidInput);
}

#[test]
fn test_unknown_format_is_rejected() {
    let result = Config::try_parse_from(["security_posture", "--format", "xml", "x.example"]);
    assert!(result.is_err());
}

#[test]
fn test_no_targets_parses_but_fails_validation() {
    let config = Config::try_parse_from(["security_posture"]).unwrap();
    let err = config.validate().unwrap_err();
    assert_eq!(err.field, "urls");
}
