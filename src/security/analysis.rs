//! Finding evaluation, scoring and prioritization.

use strum::IntoEnumIterator;

use super::{Finding, FindingKey, Priority};
use crate::config::{MAX_PRIORITIES, MAX_SCORE, POINTS_PER_FINDING};
use crate::models::ProbeSignals;

/// Maps the probe signals to one finding per `FindingKey`, in declaration order.
///
/// A header check passes only when the header is present with a non-empty value.
pub fn evaluate_findings(signals: &ProbeSignals) -> Vec<Finding> {
    FindingKey::iter()
        .map(|key| {
            let ok = match key {
                FindingKey::HttpsEnabled => signals.https_enabled,
                FindingKey::HttpRedirectsToHttps => signals.http_redirects_to_https,
                header_key => header_key
                    .header_name()
                    .and_then(|name| signals.headers.get(name))
                    .is_some_and(|value| !value.is_empty()),
            };
            Finding::new(key, ok)
        })
        .collect()
}

/// Ten points per passing finding, clamped to `[0, 100]`.
pub fn compute_score(findings: &[Finding]) -> u8 {
    let passing = findings.iter().filter(|f| f.ok).count();
    let points = passing.saturating_mul(usize::from(POINTS_PER_FINDING));
    u8::try_from(points.min(usize::from(MAX_SCORE))).unwrap_or(MAX_SCORE)
}

/// The first three failing findings that carry advice, in finding order.
///
/// This is a prefix take, not a severity ranking.
pub fn select_priorities(findings: &[Finding]) -> Vec<Priority> {
    findings
        .iter()
        .filter(|f| !f.ok)
        .filter_map(|f| {
            f.advice.as_ref().map(|advice| Priority {
                key: f.key,
                advice: advice.clone(),
            })
        })
        .take(MAX_PRIORITIES)
        .collect()
}
