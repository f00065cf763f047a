//! Memoization facade for rewrite computation.
//!
//! Rewriting a query costs one backend round-trip per variant per stage, so
//! results are memoized per (scope index, query text). The cache itself is
//! an external collaborator behind the [`RewriteCache`] trait; entries are
//! tagged with the scope's index identity so reindexing a scope can bulk
//! invalidate every rewrite cached for it.
//!
//! The facade is read-then-write, not atomic check-and-set: two concurrent
//! callers missing on the same key may both compute and both write.
//! Computation is deterministic and idempotent, so the duplicated work is
//! wasted but harmless.

use std::sync::Arc;

use ahash::AHashMap;
use parking_lot::RwLock;
use tracing::trace;

use crate::analysis::backend::{AnalysisBackend, ScopeResolver};
use crate::config::RewriteParams;
use crate::error::Result;
use crate::rewrite::engine::QueryRewriter;
use crate::rewrite::weight::WeightedRewrites;

/// Trait for the external rewrite cache collaborator.
pub trait RewriteCache: Send + Sync {
    /// Fetch a cached rewrite set, or `None` on miss.
    fn get(&self, key: &str) -> Option<WeightedRewrites>;

    /// Store a rewrite set under `key`, associated with invalidation tags.
    fn put(&self, key: &str, value: &WeightedRewrites, tags: &[String]);

    /// Drop every entry associated with `tag`.
    fn invalidate_tag(&self, tag: &str);
}

/// In-memory [`RewriteCache`] implementation.
///
/// Unbounded; suitable for embedding and for tests. Deployments with a
/// shared cache service implement [`RewriteCache`] over it instead.
#[derive(Default)]
pub struct MemoryRewriteCache {
    entries: RwLock<AHashMap<String, WeightedRewrites>>,
    keys_by_tag: RwLock<AHashMap<String, Vec<String>>>,
}

impl MemoryRewriteCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        MemoryRewriteCache::default()
    }
}

impl RewriteCache for MemoryRewriteCache {
    fn get(&self, key: &str) -> Option<WeightedRewrites> {
        self.entries.read().get(key).cloned()
    }

    fn put(&self, key: &str, value: &WeightedRewrites, tags: &[String]) {
        self.entries.write().insert(key.to_string(), value.clone());
        let mut keys_by_tag = self.keys_by_tag.write();
        for tag in tags {
            keys_by_tag
                .entry(tag.clone())
                .or_default()
                .push(key.to_string());
        }
    }

    fn invalidate_tag(&self, tag: &str) {
        let keys = self.keys_by_tag.write().remove(tag);
        if let Some(keys) = keys {
            let mut entries = self.entries.write();
            for key in keys {
                entries.remove(&key);
            }
        }
    }
}

/// A [`QueryRewriter`] with memoized results.
pub struct CachedRewriter {
    rewriter: QueryRewriter,
    scopes: Arc<dyn ScopeResolver>,
    cache: Arc<dyn RewriteCache>,
}

impl CachedRewriter {
    /// Create a caching rewriter over the given collaborators.
    pub fn new(
        backend: Arc<dyn AnalysisBackend>,
        scopes: Arc<dyn ScopeResolver>,
        cache: Arc<dyn RewriteCache>,
    ) -> Self {
        CachedRewriter {
            rewriter: QueryRewriter::new(backend, scopes.clone()),
            scopes,
            cache,
        }
    }

    /// Compute or recall the weighted rewrite set for `query` in `scope`.
    ///
    /// The cache key is `"{index}|{query}"` and the entry is tagged with
    /// the scope's index identity.
    pub fn rewrite(
        &self,
        scope: &str,
        query: &str,
        params: &RewriteParams,
        original_boost: f64,
    ) -> Result<WeightedRewrites> {
        let handle = self.scopes.resolve(scope)?;
        let key = format!("{}|{}", handle.index, query);

        if let Some(hit) = self.cache.get(&key) {
            trace!(%key, "rewrite cache hit");
            return Ok(hit);
        }

        let rewrites = self.rewriter.rewrite(scope, query, params, original_boost)?;
        self.cache.put(&key, &rewrites, &[handle.index]);
        Ok(rewrites)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_cache_round_trip() {
        let cache = MemoryRewriteCache::new();
        let mut value = WeightedRewrites::new();
        value.insert("sneakers".to_string(), 1.0);

        assert!(cache.get("products_v1|shoes").is_none());
        cache.put("products_v1|shoes", &value, &["products_v1".to_string()]);
        assert_eq!(cache.get("products_v1|shoes"), Some(value));
    }

    #[test]
    fn test_tag_invalidation_drops_tagged_entries() {
        let cache = MemoryRewriteCache::new();
        let value = WeightedRewrites::new();
        cache.put("products_v1|shoes", &value, &["products_v1".to_string()]);
        cache.put("products_v1|dress", &value, &["products_v1".to_string()]);
        cache.put("brands_v2|nike", &value, &["brands_v2".to_string()]);

        cache.invalidate_tag("products_v1");

        assert!(cache.get("products_v1|shoes").is_none());
        assert!(cache.get("products_v1|dress").is_none());
        assert!(cache.get("brands_v2|nike").is_some());
    }
}
