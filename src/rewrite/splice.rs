//! Codepoint-safe substring replacement.
//!
//! Offsets reported by the analysis backend are codepoint offsets, so all
//! splicing must treat the string as a sequence of codepoints. Byte-indexed
//! slicing would corrupt adjacent characters on any multi-byte input.

/// Replace `len` codepoints of `s` starting at codepoint `start` with
/// `replacement`, returning a new string.
///
/// Out-of-range arguments follow array-splice conventions: a `start` past
/// the end clamps to the end (the replacement is appended), and a `len`
/// past the remaining codepoints removes to the end.
///
/// # Examples
///
/// ```
/// use xyston::rewrite::splice::splice;
///
/// assert_eq!(splice("long sleeve dress", 5, 12, "cardigan"), "long cardigan");
/// assert_eq!(splice("café bar", 0, 4, "tapas"), "tapas bar");
/// ```
pub fn splice(s: &str, start: usize, len: usize, replacement: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let start = start.min(chars.len());
    let end = start.saturating_add(len).min(chars.len());

    let mut result = String::with_capacity(s.len() + replacement.len());
    result.extend(&chars[..start]);
    result.push_str(replacement);
    result.extend(&chars[end..]);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_replacement() {
        assert_eq!(splice("red shoes", 4, 5, "sneakers"), "red sneakers");
        assert_eq!(splice("abc", 1, 1, "XY"), "aXYc");
    }

    #[test]
    fn test_multibyte_replacement() {
        // "café résumé" is 11 codepoints but 13 bytes.
        assert_eq!(splice("café résumé", 5, 6, "cv"), "café cv");
        assert_eq!(splice("café résumé", 0, 4, "bistro"), "bistro résumé");
    }

    #[test]
    fn test_round_trip_restores_original() {
        let original = "café résumé";
        let replaced = splice(original, 0, 4, "bistro");
        assert_eq!(splice(&replaced, 0, 6, "café"), original);
    }

    #[test]
    fn test_start_past_end_appends() {
        assert_eq!(splice("abc", 10, 2, "def"), "abcdef");
    }

    #[test]
    fn test_len_past_end_removes_to_end() {
        assert_eq!(splice("abcdef", 2, 100, "X"), "abX");
    }

    #[test]
    fn test_zero_len_inserts() {
        assert_eq!(splice("ac", 1, 0, "b"), "abc");
    }
}
