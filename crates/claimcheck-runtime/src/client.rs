//! Verification Client.
//!
//! `verify` is a linear pipeline with no internal parallelism:
//! 1. Look the claim up in the store; a hit returns without network access
//! 2. Build the request (`claimcheck-core`)
//! 3. Send it, retrying transient failures with exponential backoff
//! 4. Parse the answer into a [`Verdict`]
//! 5. Remember the verdict, whatever it is, for the life of the store
//!
//! Each attempt is bounded by the configured timeout regardless of what
//! the provider does internally. There is no cancellation; callers that
//! need one can drop the future or wrap it in their own timeout.

use backon::Retryable;
use claimcheck_core::{
    build_request, extract, Claim, Extraction, GenerateRequest, GenerateResponse, Verdict,
};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::cache::{MemoryStore, VerdictStore};
use crate::config::{ConfigError, RuntimeConfig};
use crate::providers::{GenerativeProvider, ProviderError};
use crate::retry::RetryPolicy;
use crate::stats::{ClientStats, StatsSnapshot};

/// Sends claims to a provider and returns memoized verdicts.
pub struct VerificationClient {
    provider: Arc<dyn GenerativeProvider>,
    store: Arc<dyn VerdictStore>,
    policy: RetryPolicy,
    timeout: Duration,
    stats: ClientStats,
}

impl VerificationClient {
    /// Create a client with an in-memory store sized from `config.cache`.
    pub fn new(provider: Arc<dyn GenerativeProvider>, config: RuntimeConfig) -> Self {
        let store = Arc::new(MemoryStore::new(&config.cache));
        Self::with_store(provider, store, config)
    }

    /// Create a client around an existing store.
    pub fn with_store(
        provider: Arc<dyn GenerativeProvider>,
        store: Arc<dyn VerdictStore>,
        config: RuntimeConfig,
    ) -> Self {
        Self {
            provider,
            store,
            policy: RetryPolicy::new(&config.retry),
            timeout: config.timeout,
            stats: ClientStats::new(),
        }
    }

    pub fn builder() -> VerificationClientBuilder {
        VerificationClientBuilder::new()
    }

    /// Verify a claim.
    ///
    /// Never fails: transport exhaustion, empty answers and internal
    /// problems are all encoded in the returned [`Verdict`].
    pub async fn verify(&self, claim: &Claim) -> Verdict {
        if let Some(verdict) = self.store.get(claim.as_str()).await {
            tracing::debug!(
                cache = "hit",
                outcome = verdict.outcome(),
                "Returning memoized verdict"
            );
            self.stats.record_hit();
            return verdict;
        }
        self.stats.record_miss();
        tracing::debug!(cache = "miss", provider = self.provider.name(), "Verifying claim");

        let request = build_request(claim);
        let verdict = self.fetch(&request).await;

        self.stats.record_outcome(&verdict);
        tracing::info!(
            outcome = verdict.outcome(),
            sources = verdict.sources().len(),
            "Verification finished"
        );

        self.store
            .insert(claim.as_str().to_string(), verdict.clone())
            .await;

        verdict
    }

    /// Counters since the client was created.
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    /// Run the retry loop and turn its result into a verdict.
    async fn fetch(&self, request: &GenerateRequest) -> Verdict {
        let counter = AtomicU32::new(0);
        let counter = &counter;

        let result = (|| self.attempt(request, counter))
            .retry(self.policy.backoff())
            .sleep(tokio::time::sleep)
            .when(ProviderError::is_retryable)
            .notify(|error: &ProviderError, delay: Duration| {
                tracing::warn!(
                    attempt = counter.load(Ordering::SeqCst),
                    max_attempts = self.policy.max_attempts(),
                    delay = ?delay,
                    error = %error,
                    "Attempt failed, backing off"
                );
            })
            .await;

        let attempts = counter.load(Ordering::SeqCst);

        match result {
            Ok(response) => match extract(response) {
                Extraction::Answer { text, sources } => Verdict::Verified { text, sources },
                Extraction::Empty => {
                    tracing::warn!("Model returned an empty response candidate");
                    Verdict::EmptyResponse
                }
            },
            Err(error) if error.is_transport() => {
                tracing::error!(attempts, error = %error, "Verification service unreachable");
                Verdict::TransportError {
                    attempts,
                    http_status: error.status(),
                    detail: error.to_string(),
                }
            }
            Err(error) => {
                tracing::error!(error = %error, "Unexpected error processing response");
                Verdict::InternalError {
                    detail: error.to_string(),
                }
            }
        }
    }

    /// One bounded exchange with the provider.
    async fn attempt(
        &self,
        request: &GenerateRequest,
        counter: &AtomicU32,
    ) -> Result<GenerateResponse, ProviderError> {
        let attempt = counter.fetch_add(1, Ordering::SeqCst) + 1;
        self.stats.record_attempt();
        tracing::debug!(attempt, timeout = ?self.timeout, "Sending request");

        match tokio::time::timeout(self.timeout, self.provider.generate(request, self.timeout)).await
        {
            Ok(result) => result,
            Err(_) => Err(ProviderError::Timeout(self.timeout)),
        }
    }
}

/// Builder for [`VerificationClient`].
pub struct VerificationClientBuilder {
    provider: Option<Arc<dyn GenerativeProvider>>,
    store: Option<Arc<dyn VerdictStore>>,
    config: RuntimeConfig,
}

impl VerificationClientBuilder {
    pub fn new() -> Self {
        Self {
            provider: None,
            store: None,
            config: RuntimeConfig::default(),
        }
    }

    pub fn provider(mut self, provider: Arc<dyn GenerativeProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Share a store between clients, or inject a custom one.
    pub fn store(mut self, store: Arc<dyn VerdictStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the client, validating the configuration.
    pub fn build(self) -> Result<VerificationClient, ConfigError> {
        self.config.validate()?;
        let provider = self
            .provider
            .ok_or_else(|| ConfigError::Invalid("No provider set".to_string()))?;

        Ok(match self.store {
            Some(store) => VerificationClient::with_store(provider, store, self.config),
            None => VerificationClient::new(provider, self.config),
        })
    }
}

impl Default for VerificationClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
