//! Security findings, scoring and prioritization.
//!
//! Turns the probe signals into eight pass/fail findings, a score from 0 to 100 and a
//! short list of remediation advice.

mod analysis;
mod types;

pub use analysis::{compute_score, evaluate_findings, select_priorities};
pub use types::{Finding, FindingKey, Priority};
