//! Memoization of verdicts per claim.
//!
//! Keys are the exact claim text. The store is injected into the
//! [`VerificationClient`](crate::VerificationClient) so tests and embedders
//! can share, replace or inspect it.

use async_trait::async_trait;
use claimcheck_core::Verdict;
use moka::future::Cache;

use crate::config::CacheConfig;

/// Thread-safe claim → verdict store.
#[async_trait]
pub trait VerdictStore: Send + Sync {
    /// Look up a verdict by exact claim text.
    async fn get(&self, claim: &str) -> Option<Verdict>;

    /// Remember a verdict for a claim.
    async fn insert(&self, claim: String, verdict: Verdict);
}

/// In-memory store using moka.
///
/// Entries never expire; with no `max_entries` nothing is ever evicted.
pub struct MemoryStore {
    cache: Cache<String, Verdict>,
}

impl MemoryStore {
    pub fn new(config: &CacheConfig) -> Self {
        let mut builder = Cache::builder();
        if let Some(max_entries) = config.max_entries {
            builder = builder.max_capacity(max_entries);
        }

        Self {
            cache: builder.build(),
        }
    }

    /// Number of remembered claims (approximate until pending tasks run).
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Flush moka's internal bookkeeping so `entry_count` is exact.
    pub async fn sync(&self) {
        self.cache.run_pending_tasks().await;
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(&CacheConfig::default())
    }
}

#[async_trait]
impl VerdictStore for MemoryStore {
    async fn get(&self, claim: &str) -> Option<Verdict> {
        self.cache.get(claim).await
    }

    async fn insert(&self, claim: String, verdict: Verdict) {
        self.cache.insert(claim, verdict).await;
    }
}
