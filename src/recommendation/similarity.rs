//! Friend-set similarity measures

use std::collections::BTreeSet;

/// Round to two decimals, halves away from zero.
///
/// Operates on the binary value, so a decimal tie that is not exactly
/// representable (e.g. `1.005`) rounds according to its stored value.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Number of friends shared by both sets
pub fn mutual_count(a: &BTreeSet<String>, b: &BTreeSet<String>) -> usize {
    // iterate the smaller set
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    small.iter().filter(|id| large.contains(*id)).count()
}

/// Jaccard similarity of two friend sets, rounded to two decimals.
///
/// Returns 0.0 when both sets are empty.
pub fn jaccard(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    let intersection = mutual_count(a, b);
    let union = a.len() + b.len() - intersection;
    if union == 0 {
        return 0.0;
    }
    round2(intersection as f64 / union as f64)
}
