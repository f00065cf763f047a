//! Word-grouping variant generation.
//!
//! Multi-word synonyms are stored in the backend dictionary under joined
//! tokens such as `sleeve_dress`. To give the dictionary a chance to match
//! a multi-word span, the query is expanded into every variant obtainable
//! by merging adjacent words: for each combination of interior spaces, the
//! selected spaces are replaced with the word-joiner delimiter.
//!
//! A query with `k` spaces yields `2^k` variants (the original included).
//! This growth is exponential by design and is not bounded here; callers
//! must treat long queries as a scaling hazard.
//!
//! # Examples
//!
//! ```
//! use xyston::rewrite::combinations::word_group_variants;
//!
//! let variants = word_group_variants("long sleeve dress");
//! assert_eq!(variants.len(), 4);
//! assert_eq!(variants[0], "long sleeve dress");
//! assert!(variants.contains(&"long_sleeve dress".to_string()));
//! assert!(variants.contains(&"long sleeve_dress".to_string()));
//! assert!(variants.contains(&"long_sleeve_dress".to_string()));
//! ```

use ahash::AHashSet;

/// The character used to fuse adjacent words into one lookup token.
///
/// Never appears in normal query input as a semantic separator; the lookup
/// adapter converts it back to a space in replacement text.
pub const WORD_JOINER: char = '_';

/// Generate all word-grouping variants of a query.
///
/// The unmodified query always comes first; then variants with 1 merged
/// space, then 2, and so on, each combination in position order. Variants
/// are deduplicated by exact text equality, keeping the first occurrence.
pub fn word_group_variants(query: &str) -> Vec<String> {
    let chars: Vec<char> = query.chars().collect();
    let positions: Vec<usize> = chars
        .iter()
        .enumerate()
        .filter(|(_, c)| **c == ' ')
        .map(|(i, _)| i)
        .collect();

    let mut variants = vec![query.to_string()];
    let mut seen: AHashSet<String> = variants.iter().cloned().collect();

    for cpt in 1..=positions.len() {
        for combo in combinations(&positions, cpt) {
            let mut merged = chars.clone();
            for &pos in &combo {
                merged[pos] = WORD_JOINER;
            }
            let variant: String = merged.into_iter().collect();
            if seen.insert(variant.clone()) {
                variants.push(variant);
            }
        }
    }

    variants
}

/// All `cpt`-sized combinations of `items`, order-preserving, no repetition.
pub(crate) fn combinations(items: &[usize], cpt: usize) -> Vec<Vec<usize>> {
    if cpt == 0 {
        return vec![Vec::new()];
    }
    if items.len() < cpt {
        return Vec::new();
    }

    let mut result = Vec::new();
    for i in 0..=items.len() - cpt {
        for mut tail in combinations(&items[i + 1..], cpt - 1) {
            let mut combo = Vec::with_capacity(cpt);
            combo.push(items[i]);
            combo.append(&mut tail);
            result.push(combo);
        }
    }
    result
}
