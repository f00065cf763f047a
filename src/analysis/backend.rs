//! Collaborator contracts for text analysis and scope resolution.
//!
//! The rewriting engine does not tokenize text itself. It delegates to an
//! external analysis backend that runs a named analyzer over a text and
//! reports tokens with codepoint spans. Likewise it does not know how
//! logical search contexts map to concrete indexes; a scope resolver
//! supplies that mapping. Both collaborators are injected at construction
//! time — there is no ambient/global lookup.

use ahash::AHashMap;

use crate::analysis::token::AnalyzedToken;
use crate::error::{Result, XystonError};

/// Trait for the external text analysis backend.
///
/// Implementations run the named analyzer over `text` within the dictionary
/// of the given index and return the resulting tokens. Offsets in returned
/// tokens must be codepoint offsets into `text`.
///
/// # Thread Safety
///
/// The trait requires `Send + Sync` so a backend handle can be shared
/// across concurrent rewrite calls.
///
/// # Failure
///
/// Implementations may fail (backend unreachable, invalid input). Callers
/// inside the engine treat any error as "no tokens found" — a failed
/// analysis never aborts a rewrite computation.
pub trait AnalysisBackend: Send + Sync {
    /// Analyze `text` under `analyzer` in the scope of `index`.
    fn analyze(&self, index: &str, text: &str, analyzer: &str) -> Result<Vec<AnalyzedToken>>;
}

/// A resolved search scope: the concrete index identity backing a logical
/// scope name.
///
/// The index identity selects the per-scope synonym dictionary on the
/// backend and doubles as the cache invalidation tag, so reindexing a scope
/// can bulk-invalidate its cached rewrites.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScopeHandle {
    /// Concrete index identifier for this scope.
    pub index: String,
}

impl ScopeHandle {
    /// Create a new scope handle.
    pub fn new<S: Into<String>>(index: S) -> Self {
        ScopeHandle { index: index.into() }
    }
}

/// Trait for mapping logical search contexts to concrete indexes.
pub trait ScopeResolver: Send + Sync {
    /// Resolve a logical scope name to its index identity.
    fn resolve(&self, scope: &str) -> Result<ScopeHandle>;
}

/// Scope resolver backed by a fixed scope → index table.
///
/// Suitable for deployments where the mapping is known up front, and as the
/// resolver used throughout the test suite.
#[derive(Debug, Default, Clone)]
pub struct StaticScopeResolver {
    indexes: AHashMap<String, String>,
}

impl StaticScopeResolver {
    /// Create an empty resolver.
    pub fn new() -> Self {
        StaticScopeResolver {
            indexes: AHashMap::new(),
        }
    }

    /// Register an index for a scope, replacing any previous mapping.
    pub fn insert<S: Into<String>, I: Into<String>>(&mut self, scope: S, index: I) {
        self.indexes.insert(scope.into(), index.into());
    }
}

impl ScopeResolver for StaticScopeResolver {
    fn resolve(&self, scope: &str) -> Result<ScopeHandle> {
        self.indexes
            .get(scope)
            .map(|index| ScopeHandle::new(index.clone()))
            .ok_or_else(|| XystonError::scope(format!("no index registered for scope '{scope}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_scope_resolution() {
        let mut resolver = StaticScopeResolver::new();
        resolver.insert("products", "products_v3");

        let handle = resolver.resolve("products").unwrap();
        assert_eq!(handle.index, "products_v3");
    }

    #[test]
    fn test_unknown_scope_fails() {
        let resolver = StaticScopeResolver::new();
        let error = resolver.resolve("missing").unwrap_err();
        match error {
            XystonError::Scope(_) => {}
            other => panic!("Expected scope error, got {other:?}"),
        }
    }
}
