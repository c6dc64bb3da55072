//! Counters for a verification client.

use claimcheck_core::Verdict;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// Point-in-time copy of the client's counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    /// `verify` calls answered from the store
    pub cache_hits: u64,

    /// `verify` calls that went to the network
    pub cache_misses: u64,

    /// Individual HTTP attempts, retries included
    pub network_attempts: u64,

    pub verified: u64,
    pub empty_responses: u64,
    pub transport_errors: u64,
    pub internal_errors: u64,
}

/// Shared counters, updated from every `verify` call.
#[derive(Debug, Default)]
pub struct ClientStats {
    inner: RwLock<StatsSnapshot>,
}

impl ClientStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_hit(&self) {
        self.inner.write().cache_hits += 1;
    }

    pub fn record_miss(&self) {
        self.inner.write().cache_misses += 1;
    }

    pub fn record_attempt(&self) {
        self.inner.write().network_attempts += 1;
    }

    /// Count a freshly produced verdict by outcome.
    pub fn record_outcome(&self, verdict: &Verdict) {
        let mut stats = self.inner.write();
        match verdict {
            Verdict::Verified { .. } => stats.verified += 1,
            Verdict::EmptyResponse => stats.empty_responses += 1,
            Verdict::TransportError { .. } => stats.transport_errors += 1,
            Verdict::InternalError { .. } => stats.internal_errors += 1,
        }
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        self.inner.read().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let stats = ClientStats::new();
        stats.record_miss();
        stats.record_attempt();
        stats.record_attempt();
        stats.record_outcome(&Verdict::EmptyResponse);
        stats.record_hit();

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.cache_hits, 1);
        assert_eq!(snapshot.cache_misses, 1);
        assert_eq!(snapshot.network_attempts, 2);
        assert_eq!(snapshot.empty_responses, 1);
        assert_eq!(snapshot.verified, 0);
    }
}
