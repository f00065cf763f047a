//! Query rewriting pipeline.
//!
//! This module contains the whole rewriting engine: variant generation,
//! codepoint-safe splicing, synonym lookup, recursive combination,
//! weighting, the orchestrator tying the stages together, and the caching
//! facade in front of it.

pub mod cache;
pub mod combinations;
pub mod combiner;
pub mod engine;
pub mod lookup;
pub mod splice;
pub mod weight;

// Re-export commonly used types
pub use cache::{CachedRewriter, MemoryRewriteCache, RewriteCache};
pub use combinations::{WORD_JOINER, word_group_variants};
pub use combiner::{RewriteSet, combine};
pub use engine::QueryRewriter;
pub use lookup::{PositionGroup, SynonymCandidate, SynonymLookup};
pub use splice::splice;
pub use weight::{WeightedRewrites, substitution_weight, weigh};

use serde::{Deserialize, Serialize};

/// One phase of rewriting, selecting which backend analyzer to consult.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// Direct synonym substitution.
    Synonym,
    /// Broader/related term expansion, chained over the synonym stage.
    Expansion,
}

impl Stage {
    /// Name of the backend analyzer serving this stage.
    pub fn analyzer_name(&self) -> &'static str {
        match self {
            Stage::Synonym => "synonym",
            Stage::Expansion => "synonym_expand",
        }
    }
}
