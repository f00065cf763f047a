//! Token types returned by the text analysis backend.
//!
//! These are the units the rewriting pipeline consumes: each token carries
//! its text, a kind classification, and the span it covers in the analyzed
//! text. Offsets are always expressed in **codepoints** of the submitted
//! text, never bytes — the backend contract requires it, and every piece of
//! offset arithmetic downstream depends on it.
//!
//! # Examples
//!
//! ```
//! use xyston::analysis::token::{AnalyzedToken, TokenKind};
//!
//! let token = AnalyzedToken::new("sneakers", TokenKind::Synonym, 0, 5);
//! assert_eq!(token.token, "sneakers");
//! assert_eq!(token.start_offset, 0);
//! assert_eq!(token.end_offset, 5);
//! assert!(token.is_synonym());
//! ```

use serde::{Deserialize, Serialize};

/// Token kind classification reported by the analysis backend.
///
/// Only [`TokenKind::Synonym`] tokens participate in rewriting; everything
/// else is filtered out by the lookup adapter.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// A plain word token from the analyzed text.
    Word,
    /// A synonym or expansion produced by the backend's dictionary.
    Synonym,
    /// Any other backend-specific token kind.
    Other(String),
}

impl TokenKind {
    /// Parse a backend type label into a token kind (case-insensitive).
    ///
    /// Backends report free-form type strings such as `"SYNONYM"` or
    /// `"word"`; unknown labels are preserved under [`TokenKind::Other`].
    pub fn from_label(label: &str) -> Self {
        match label.to_ascii_lowercase().as_str() {
            "synonym" => TokenKind::Synonym,
            "word" | "alphanum" => TokenKind::Word,
            _ => TokenKind::Other(label.to_string()),
        }
    }
}

/// A single token emitted by the analysis backend for one analyzed text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedToken {
    /// The token's text content.
    pub token: String,

    /// Kind classification (only `Synonym` is retained for rewriting).
    pub kind: TokenKind,

    /// Codepoint offset where the token's span starts in the analyzed text.
    pub start_offset: usize,

    /// Codepoint offset where the token's span ends (exclusive).
    pub end_offset: usize,
}

impl AnalyzedToken {
    /// Create a new token.
    pub fn new<S: Into<String>>(token: S, kind: TokenKind, start_offset: usize, end_offset: usize) -> Self {
        AnalyzedToken {
            token: token.into(),
            kind,
            start_offset,
            end_offset,
        }
    }

    /// Create a synonym token covering the given span.
    pub fn synonym<S: Into<String>>(token: S, start_offset: usize, end_offset: usize) -> Self {
        AnalyzedToken::new(token, TokenKind::Synonym, start_offset, end_offset)
    }

    /// Whether this token is a synonym candidate.
    pub fn is_synonym(&self) -> bool {
        self.kind == TokenKind::Synonym
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_label() {
        assert_eq!(TokenKind::from_label("SYNONYM"), TokenKind::Synonym);
        assert_eq!(TokenKind::from_label("synonym"), TokenKind::Synonym);
        assert_eq!(TokenKind::from_label("word"), TokenKind::Word);
        assert_eq!(
            TokenKind::from_label("SHINGLE"),
            TokenKind::Other("SHINGLE".to_string())
        );
    }

    #[test]
    fn test_token_construction() {
        let token = AnalyzedToken::synonym("running shoes", 0, 8);
        assert!(token.is_synonym());
        assert_eq!(token.start_offset, 0);
        assert_eq!(token.end_offset, 8);

        let token = AnalyzedToken::new("shoes", TokenKind::Word, 0, 5);
        assert!(!token.is_synonym());
    }

    #[test]
    fn test_token_serialization() {
        let token = AnalyzedToken::synonym("sneakers", 0, 5);
        let json = serde_json::to_string(&token).unwrap();
        let back: AnalyzedToken = serde_json::from_str(&json).unwrap();
        assert_eq!(token, back);
    }
}
