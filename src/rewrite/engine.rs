//! The rewrite orchestrator.
//!
//! Runs the full pipeline for one query: word-grouping variants, synonym
//! lookup per variant, recursive combination under the stage's budget, and
//! weighting — first for the synonym stage, then for the expansion stage
//! chained over the synonym stage's outputs plus the original query.

use std::sync::Arc;

use crate::analysis::backend::{AnalysisBackend, ScopeHandle, ScopeResolver};
use crate::config::RewriteParams;
use crate::error::Result;
use crate::rewrite::Stage;
use crate::rewrite::combinations::word_group_variants;
use crate::rewrite::combiner::{RewriteSet, combine};
use crate::rewrite::lookup::{PositionGroup, SynonymLookup};
use crate::rewrite::weight::{WeightedRewrites, weigh};

/// Orchestrates both rewriting stages for a query.
///
/// Holds only injected, effectively-immutable collaborators; every call is
/// independent and reentrant.
pub struct QueryRewriter {
    lookup: SynonymLookup,
    scopes: Arc<dyn ScopeResolver>,
}

impl QueryRewriter {
    /// Create a new rewriter over the given collaborators.
    pub fn new(backend: Arc<dyn AnalysisBackend>, scopes: Arc<dyn ScopeResolver>) -> Self {
        QueryRewriter {
            lookup: SynonymLookup::new(backend),
            scopes,
        }
    }

    /// Compute the weighted rewrite set for `query` in `scope`.
    ///
    /// The result never contains the unmodified query under its base boost;
    /// the caller is expected to search with the original query alongside
    /// whatever this returns. With both stages disabled the result is
    /// empty.
    ///
    /// Fails fast on invalid parameters or an unresolvable scope; analysis
    /// failures during lookup never propagate (they shrink the result
    /// instead).
    pub fn rewrite(
        &self,
        scope: &str,
        query: &str,
        params: &RewriteParams,
        original_boost: f64,
    ) -> Result<WeightedRewrites> {
        params.validate()?;

        let mut result = WeightedRewrites::new();
        if !params.synonym.enabled && !params.expansion.enabled {
            return Ok(result);
        }

        let handle = self.scopes.resolve(scope)?;

        let synonym_rewrites = if params.synonym.enabled {
            let rewrites =
                self.stage_rewrites(&handle, query, Stage::Synonym, params.synonym.max_rewrites);
            weigh(&rewrites, original_boost, params.synonym.weight_divider)
        } else {
            WeightedRewrites::new()
        };

        if params.expansion.enabled {
            // Expansion runs over the original query and over every synonym
            // rewrite, each seeded with its own weight.
            let mut seeds: Vec<(String, f64)> = vec![(query.to_string(), original_boost)];
            seeds.extend(
                synonym_rewrites
                    .iter()
                    .map(|(text, &weight)| (text.clone(), weight)),
            );

            for (seed, seed_weight) in seeds {
                let rewrites = self.stage_rewrites(
                    &handle,
                    &seed,
                    Stage::Expansion,
                    params.expansion.max_rewrites,
                );
                result.extend(weigh(&rewrites, seed_weight, params.expansion.weight_divider));
            }
        }

        // Synonym rewrites merge last, overwriting expansion entries that
        // converged on the same text.
        result.extend(synonym_rewrites);

        Ok(result)
    }

    /// Run one stage over all word-grouping variants of `text`.
    fn stage_rewrites(
        &self,
        handle: &ScopeHandle,
        text: &str,
        stage: Stage,
        max_rewrites: usize,
    ) -> RewriteSet {
        if max_rewrites == 0 {
            return RewriteSet::new();
        }

        let mut groups: Vec<PositionGroup> = Vec::new();
        for variant in word_group_variants(text) {
            groups.extend(self.lookup.lookup(&handle.index, &variant, stage));
        }
        // Variants only swap spaces for joiners, so spans recorded against
        // a variant line up with the stage's original text.
        combine(text, &groups, max_rewrites, 0, 0)
    }
}
