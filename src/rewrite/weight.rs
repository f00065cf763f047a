//! Relevance weights for rewritten queries.
//!
//! A rewrite's weight is derived from how far it strays from the original
//! query: `base / (substitutions * divider)`. More substitutions means a
//! lower weight, and a larger divider penalizes substitution harder.

use crate::rewrite::combiner::RewriteSet;

use ahash::AHashMap;

/// Rewritten text mapped to its relevance weight.
pub type WeightedRewrites = AHashMap<String, f64>;

/// Weight for a single rewrite.
///
/// Strictly positive when `base > 0` and `divider > 0`; strictly
/// decreasing in `substitutions`. The combiner never emits an entry with
/// zero substitutions, so the divisor is never zero for valid input.
pub fn substitution_weight(base: f64, substitutions: usize, divider: f64) -> f64 {
    base / (substitutions as f64 * divider)
}

/// Weight a whole rewrite set.
pub fn weigh(rewrites: &RewriteSet, base: f64, divider: f64) -> WeightedRewrites {
    rewrites
        .iter()
        .map(|(text, &count)| (text.clone(), substitution_weight(base, count, divider)))
        .collect()
}
