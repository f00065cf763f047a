//! Synonym lookup adapter over the analysis backend.
//!
//! For one query variant and one stage, this adapter asks the backend to
//! analyze the variant, keeps only synonym tokens, converts word-joiner
//! delimiters inside replacement text back to spaces, and groups the
//! candidates by the character span they anchor at.
//!
//! Lookup failures are non-fatal: any backend error degrades to an empty
//! candidate list for that variant.

use std::sync::Arc;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::backend::AnalysisBackend;
use crate::rewrite::Stage;
use crate::rewrite::combinations::WORD_JOINER;

/// One substitution candidate: replace the span `start..end` (codepoints,
/// relative to the variant it was found in) with `replacement`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SynonymCandidate {
    /// Codepoint offset where the replaced span starts.
    pub start: usize,
    /// Codepoint offset where the replaced span ends (exclusive).
    pub end: usize,
    /// Replacement text, with word joiners already converted to spaces.
    pub replacement: String,
}

/// Mutually exclusive substitution candidates anchored at one span.
#[derive(Clone, Debug, PartialEq)]
pub struct PositionGroup {
    /// Span key in `"{start}_{end}"` form.
    pub key: String,
    /// Candidates in discovery order.
    pub candidates: Vec<SynonymCandidate>,
}

/// Adapter that turns backend analysis output into position groups.
pub struct SynonymLookup {
    backend: Arc<dyn AnalysisBackend>,
}

impl SynonymLookup {
    /// Create a new lookup adapter over the given backend.
    pub fn new(backend: Arc<dyn AnalysisBackend>) -> Self {
        SynonymLookup { backend }
    }

    /// Look up synonym candidates for one variant.
    ///
    /// Returns position groups in discovery order. A backend failure is
    /// logged and treated as "no tokens found".
    pub fn lookup(&self, index: &str, variant: &str, stage: Stage) -> Vec<PositionGroup> {
        let tokens = match self.backend.analyze(index, variant, stage.analyzer_name()) {
            Ok(tokens) => tokens,
            Err(error) => {
                debug!(%index, %variant, %error, "synonym lookup failed, no candidates for variant");
                return Vec::new();
            }
        };

        let mut groups: Vec<PositionGroup> = Vec::new();
        let mut index_by_key: AHashMap<String, usize> = AHashMap::new();

        for token in tokens {
            if !token.is_synonym() {
                continue;
            }
            let key = format!("{}_{}", token.start_offset, token.end_offset);
            let candidate = SynonymCandidate {
                start: token.start_offset,
                end: token.end_offset,
                // Multi-word synonym targets are stored joined; they must
                // read as natural words in the rewritten query.
                replacement: token.token.replace(WORD_JOINER, " "),
            };
            match index_by_key.get(&key) {
                Some(&i) => groups[i].candidates.push(candidate),
                None => {
                    index_by_key.insert(key.clone(), groups.len());
                    groups.push(PositionGroup {
                        key,
                        candidates: vec![candidate],
                    });
                }
            }
        }

        groups
    }
}
