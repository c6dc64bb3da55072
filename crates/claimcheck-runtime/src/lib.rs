//! # claimcheck-runtime
//!
//! Sends claims to a grounded generative model and returns a [`Verdict`].
//!
//! The [`VerificationClient`] owns the whole request/response cycle:
//! - memoization through an injected [`VerdictStore`]
//! - bounded retries with exponential backoff and no jitter
//! - a per-attempt timeout
//! - parsing of text and web citations via `claimcheck-core`
//!
//! Failures never escape as errors. They come back as
//! [`Verdict::TransportError`], [`Verdict::EmptyResponse`] or
//! [`Verdict::InternalError`].
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use claimcheck_core::Claim;
//! use claimcheck_runtime::{GeminiProvider, RuntimeConfig, VerificationClient};
//!
//! let config = RuntimeConfig::default();
//! let provider = GeminiProvider::from_config(&config)?;
//! let client = VerificationClient::new(Arc::new(provider), config);
//!
//! let verdict = client.verify(&Claim::new("Purgatory exists")?).await;
//! println!("{}", verdict.text());
//! ```

pub mod cache;
pub mod client;
pub mod config;
pub mod providers;
pub mod retry;
pub mod stats;

pub use cache::{MemoryStore, VerdictStore};
pub use client::{VerificationClient, VerificationClientBuilder};
pub use config::{CacheConfig, ConfigError, RetryConfig, RuntimeConfig};
pub use providers::{
    ApiCredential, CredentialSource, GenerativeProvider, ProviderError, GEMINI_API_KEY_ENV,
};
pub use retry::RetryPolicy;
pub use stats::{ClientStats, StatsSnapshot};

#[cfg(feature = "gemini")]
pub use providers::GeminiProvider;

pub use claimcheck_core::{Claim, SourceRef, Verdict};
