//! Gap analysis — set difference between required and possessed skills.

use std::collections::BTreeSet;

/// Skills in `required` that are absent from `possessed`.
///
/// Case-sensitive as stored: callers are responsible for consistent casing
/// (the comparison orchestrator lowercases both sides before calling).
/// Returns an empty set — not an error — when nothing is missing or when
/// `required` is empty. `BTreeSet` keeps iteration order deterministic.
pub fn missing_skills<R, P>(required: &[R], possessed: &[P]) -> BTreeSet<String>
where
    R: AsRef<str>,
    P: AsRef<str>,
{
    let possessed: BTreeSet<&str> = possessed.iter().map(|s| s.as_ref()).collect();

    required
        .iter()
        .map(|s| s.as_ref())
        .filter(|skill| !possessed.contains(skill))
        .map(|skill| skill.to_string())
        .collect()
}

/// Match percentage per the core invariant: 0 when nothing is required,
/// otherwise `(1 - missing / required) * 100`. `required` is the size of the
/// deduplicated required set. Unrounded; the caller applies its rounding
/// policy.
pub fn match_pct(required: usize, missing: usize) -> f64 {
    if required == 0 {
        return 0.0;
    }
    (1.0 - missing as f64 / required as f64) * 100.0
}
