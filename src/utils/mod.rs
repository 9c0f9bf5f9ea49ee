//! Small string helpers shared by the normalizer and the probes.

/// ASCII case-insensitive `starts_with`.
pub(crate) fn starts_with_ignore_ascii_case(value: &str, prefix: &str) -> bool {
    value
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}
