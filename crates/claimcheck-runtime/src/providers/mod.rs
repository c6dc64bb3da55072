//! Generative model providers.
//!
//! A provider performs exactly one HTTP exchange per call. Retrying,
//! memoization and parsing into a [`Verdict`](claimcheck_core::Verdict)
//! happen in the [`VerificationClient`](crate::VerificationClient).
//!
//! ## Security
//!
//! Credentials go through [`secrets::ApiCredential`] and are only exposed
//! at the point the request is built.

use async_trait::async_trait;
use claimcheck_core::{GenerateRequest, GenerateResponse};
use std::time::Duration;
use thiserror::Error;

pub mod secrets;

#[cfg(feature = "gemini")]
mod gemini;

pub use secrets::{ApiCredential, CredentialSource, GEMINI_API_KEY_ENV};

#[cfg(feature = "gemini")]
pub use gemini::GeminiProvider;

/// Errors from a single provider exchange.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    #[error("API error: {status} - {message}")]
    Status { status: u16, message: String },

    #[error("Response parse error: {0}")]
    Parse(String),

    #[error("Provider not configured: {0}")]
    NotConfigured(String),
}

impl ProviderError {
    /// Whether another attempt could succeed.
    ///
    /// Connection failures, timeouts, 408, 429 and 5xx are transient.
    /// Other 4xx statuses (bad key, malformed request) will fail the same
    /// way every time.
    pub fn is_retryable(&self) -> bool {
        match self {
            ProviderError::Http(_) | ProviderError::Timeout(_) => true,
            ProviderError::Status { status, .. } => {
                matches!(status, 408 | 429) || (500..=599).contains(status)
            }
            ProviderError::Parse(_) | ProviderError::NotConfigured(_) => false,
        }
    }

    /// Whether this failure belongs to the transport/HTTP layer, as opposed
    /// to handling of a response that did arrive.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ProviderError::Http(_) | ProviderError::Timeout(_) | ProviderError::Status { .. }
        )
    }

    /// HTTP status code, when the service answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ProviderError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Provider abstraction over the grounded generation endpoint.
#[async_trait]
pub trait GenerativeProvider: Send + Sync {
    /// Send one request and decode the response body.
    ///
    /// `timeout` bounds this single exchange.
    async fn generate(
        &self,
        request: &GenerateRequest,
        timeout: Duration,
    ) -> Result<GenerateResponse, ProviderError>;

    /// Check if the provider is usable without making a request.
    async fn health_check(&self) -> bool {
        true
    }

    /// Provider name for logs.
    fn name(&self) -> &str;
}
