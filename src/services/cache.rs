use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::models::{RankOptions, RankOutcome};

/// In-process TTL cache for ranked results.
///
/// Ranking a full candidate pool is the expensive path, so results are kept
/// per subject + filter set for a bounded window (15 minutes by default).
/// Entries expire on their own; explicit invalidation exists for the
/// profile-updated path, where stale rankings would be misleading.
pub struct MatchCache {
    inner: moka::sync::Cache<String, Arc<RankOutcome>>,
    ttl_secs: u64,
}

impl MatchCache {
    pub fn new(max_entries: u64, ttl_secs: u64) -> Self {
        let inner = moka::sync::CacheBuilder::new(max_entries)
            .time_to_live(Duration::from_secs(ttl_secs))
            .support_invalidation_closures()
            .build();

        Self { inner, ttl_secs }
    }

    pub fn ttl_secs(&self) -> u64 {
        self.ttl_secs
    }

    pub fn get(&self, key: &str) -> Option<Arc<RankOutcome>> {
        let hit = self.inner.get(key);
        if hit.is_some() {
            tracing::trace!(key, "rank cache hit");
        } else {
            tracing::trace!(key, "rank cache miss");
        }
        hit
    }

    pub fn insert(&self, key: String, outcome: RankOutcome) {
        self.inner.insert(key, Arc::new(outcome));
    }

    /// Drop every cached ranking for one subject, across all filter sets
    pub fn invalidate_subject(&self, user_id: &str) {
        let prefix = format!("{}:", CacheKey::ranked_prefix(user_id));
        if let Err(e) = self.inner.invalidate_entries_if(move |key, _| key.starts_with(&prefix)) {
            tracing::warn!(user_id, error = %e, "cache invalidation predicate rejected");
        }
        tracing::debug!(user_id, "invalidated cached rankings");
    }

    pub fn invalidate_all(&self) {
        self.inner.invalidate_all();
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats { entries: self.inner.entry_count() }
    }
}

/// Cache statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheStats {
    pub entries: u64,
}

/// Cache key builder
pub struct CacheKey;

impl CacheKey {
    /// Key for a ranked result: subject + deterministic filter fingerprint
    pub fn ranked(user_id: &str, options: &RankOptions) -> String {
        format!("{}:{}", Self::ranked_prefix(user_id), options.fingerprint())
    }

    fn ranked_prefix(user_id: &str) -> String {
        format!("rank:{}", user_id)
    }
}
