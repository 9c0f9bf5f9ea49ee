//! Tests for exit code policies (--fail-on flag).

use security_posture::{FailOn, RunReport};

fn report(succeeded: usize, failed: usize, low_score: usize) -> RunReport {
    RunReport {
        total: succeeded + failed,
        succeeded,
        failed,
        low_score,
        elapsed_seconds: 1.0,
    }
}

#[test]
fn test_fail_on_never_always_returns_zero() {
    assert_eq!(report(0, 5, 0).exit_code(FailOn::Never), 0);
    assert_eq!(report(5, 0, 5).exit_code(FailOn::Never), 0);
}

#[test]
fn test_fail_on_invalid_input_ignores_low_scores() {
    assert_eq!(report(5, 0, 5).exit_code(FailOn::InvalidInput), 0);
    assert_eq!(report(4, 1, 0).exit_code(FailOn::InvalidInput), 2);
}

#[test]
fn test_fail_on_low_score() {
    assert_eq!(report(5, 0, 0).exit_code(FailOn::LowScore), 0);
    assert_eq!(report(5, 0, 1).exit_code(FailOn::LowScore), 2);
    assert_eq!(report(4, 1, 0).exit_code(FailOn::LowScore), 2);
}

#[test]
fn test_empty_run_passes_every_policy() {
    let empty = RunReport::default();
    for policy in [FailOn::Never, FailOn::InvalidInput, FailOn::LowScore] {
        assert_eq!(empty.exit_code(policy), 0);
    }
}
