//! Recursive construction of multi-substitution rewrites.
//!
//! Given the ordered position groups collected across all variants of a
//! query, this module builds every valid rewritten string obtainable by
//! applying or skipping a substitution at each position, up to a maximum
//! substitution budget per rewrite.
//!
//! Each applied substitution may change the text's length, so the original
//! span offsets drift as rewrites compound; the drift is threaded through
//! the recursion and added to each candidate's recorded start offset.
//!
//! When two different substitution paths converge on the same rewritten
//! text, the substitution count recorded last wins. This last-write-wins
//! policy is deliberate and observable (it decides which count feeds the
//! weight formula); changing it to first-write-wins would silently change
//! weights for convergent rewrites.

use ahash::AHashMap;

use crate::rewrite::lookup::PositionGroup;
use crate::rewrite::splice::splice;

/// Rewritten text mapped to the number of substitutions that produced it.
pub type RewriteSet = AHashMap<String, usize>;

/// Recursively build all rewrites of `text` from the remaining `groups`.
///
/// `substitutions` counts the substitutions already applied on this path
/// and `offset_drift` is the cumulative codepoint length change those
/// substitutions introduced. Top-level callers pass `0, 0`.
///
/// Returns the merged map of rewritten text → substitution count. The
/// unmodified input is never part of the result.
pub fn combine(
    text: &str,
    groups: &[PositionGroup],
    max_rewrites: usize,
    substitutions: usize,
    offset_drift: i64,
) -> RewriteSet {
    let mut rewrites = RewriteSet::new();

    let Some((first, rest)) = groups.split_first() else {
        return rewrites;
    };
    if substitutions >= max_rewrites {
        return rewrites;
    }

    let text_len = text.chars().count() as i64;

    for candidate in &first.candidates {
        // Offsets were recorded against the variant's original text; shift
        // by the drift accumulated on this path. Clamping at zero absorbs
        // malformed backend offsets rather than panicking.
        let start = (candidate.start as i64 + offset_drift).max(0) as usize;
        let span = candidate.end.saturating_sub(candidate.start);
        let rewritten = splice(text, start, span, &candidate.replacement);
        let drift = rewritten.chars().count() as i64 - text_len + offset_drift;

        rewrites.insert(rewritten.clone(), substitutions + 1);

        if !rest.is_empty() {
            for (child, count) in combine(&rewritten, rest, max_rewrites, substitutions + 1, drift) {
                rewrites.insert(child, count);
            }
        }
    }

    // Skip branch: decline every candidate at this position so later
    // positions are still explored on their own.
    if !rest.is_empty() {
        for (child, count) in combine(text, rest, max_rewrites, substitutions, offset_drift) {
            rewrites.insert(child, count);
        }
    }

    rewrites
}
