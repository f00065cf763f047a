//! # Xyston
//!
//! A query rewriting engine for full-text search.
//!
//! Xyston expands a free-text query into a weighted set of alternate query
//! strings by substituting words (or merged word groups) with synonyms and
//! expansions from an external analysis backend, so a downstream search can
//! match synonymous phrasing without the caller writing multiple queries.
//!
//! ## Features
//!
//! - Word-grouping variant generation for multi-word synonym matching
//! - Codepoint-safe offset arithmetic throughout
//! - Recursive multi-substitution rewriting under a per-stage budget
//! - Two-stage pipeline: synonym substitution, then expansion chained over
//!   the synonym stage's outputs
//! - Substitution-count based relevance weighting
//! - Pluggable analysis backend, scope resolver, and result cache
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use xyston::analysis::backend::{AnalysisBackend, StaticScopeResolver};
//! use xyston::analysis::token::AnalyzedToken;
//! use xyston::config::{RewriteParams, StageParams};
//! use xyston::error::Result;
//! use xyston::rewrite::QueryRewriter;
//!
//! struct DictBackend;
//!
//! impl AnalysisBackend for DictBackend {
//!     fn analyze(&self, _index: &str, text: &str, _analyzer: &str) -> Result<Vec<AnalyzedToken>> {
//!         match text {
//!             "shoes" => Ok(vec![AnalyzedToken::synonym("sneakers", 0, 5)]),
//!             _ => Ok(Vec::new()),
//!         }
//!     }
//! }
//!
//! let mut scopes = StaticScopeResolver::new();
//! scopes.insert("products", "products_v1");
//!
//! let rewriter = QueryRewriter::new(Arc::new(DictBackend), Arc::new(scopes));
//! let params = RewriteParams {
//!     synonym: StageParams::new(1, 1.0),
//!     expansion: StageParams::disabled(),
//! };
//!
//! let rewrites = rewriter.rewrite("products", "shoes", &params, 1.0).unwrap();
//! assert_eq!(rewrites.get("sneakers"), Some(&1.0));
//! ```

pub mod analysis;
pub mod config;
pub mod error;
pub mod rewrite;

pub mod prelude {
    //! Convenience re-exports for common usage.

    pub use crate::analysis::backend::{
        AnalysisBackend, ScopeHandle, ScopeResolver, StaticScopeResolver,
    };
    pub use crate::analysis::token::{AnalyzedToken, TokenKind};
    pub use crate::config::{RewriteParams, StageParams};
    pub use crate::error::{Result, XystonError};
    pub use crate::rewrite::{
        CachedRewriter, MemoryRewriteCache, QueryRewriter, RewriteCache, Stage, WeightedRewrites,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
