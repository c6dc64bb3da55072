//! Gemini `generateContent` provider.
//!
//! ## Security
//!
//! The service takes its key as a `?key=` query parameter, so the request
//! URL itself is sensitive. reqwest errors are stripped of their URL before
//! they are turned into [`ProviderError`]s, and the endpoint is only ever
//! logged without the query string.

use super::{
    secrets::{ApiCredential, CredentialSource, GEMINI_API_KEY_ENV},
    GenerativeProvider, ProviderError,
};
use crate::config::RuntimeConfig;
use async_trait::async_trait;
use claimcheck_core::{GenerateRequest, GenerateResponse};
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use std::time::Duration;

/// Longest slice of a raw error body carried into an error message.
const MAX_ERROR_BODY: usize = 300;

/// Google Gemini provider with search grounding.
pub struct GeminiProvider {
    credential: ApiCredential,
    endpoint: String,
    client: reqwest::Client,
}

impl std::fmt::Debug for GeminiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiProvider")
            .field("credential", &self.credential)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl GeminiProvider {
    /// Create a provider with an explicit key.
    pub fn new(api_key: impl Into<String>, config: &RuntimeConfig) -> Result<Self, ProviderError> {
        Self::with_credential(
            ApiCredential::new(api_key, CredentialSource::Programmatic),
            config,
        )
    }

    /// Use `api_key` from the config, falling back to `GEMINI_API_KEY`.
    pub fn from_config(config: &RuntimeConfig) -> Result<Self, ProviderError> {
        let credential =
            ApiCredential::from_config_or_env(config.api_key.as_ref(), GEMINI_API_KEY_ENV)?;
        Self::with_credential(credential, config)
    }

    fn with_credential(
        credential: ApiCredential,
        config: &RuntimeConfig,
    ) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("claimcheck/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ProviderError::NotConfigured(format!("HTTP client: {}", e)))?;

        Ok(Self::with_client(credential, config, client))
    }

    fn with_client(
        credential: ApiCredential,
        config: &RuntimeConfig,
        client: reqwest::Client,
    ) -> Self {
        Self {
            credential,
            endpoint: config.endpoint(),
            client,
        }
    }

    /// The `generateContent` URL, without the key.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorDetail {
    #[serde(default)]
    message: String,
}

fn transport_error(error: reqwest::Error, timeout: Duration) -> ProviderError {
    if error.is_timeout() {
        ProviderError::Timeout(timeout)
    } else {
        ProviderError::Http(error.without_url().to_string())
    }
}

/// Best human-readable message from a non-2xx body.
fn error_message(status: reqwest::StatusCode, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<GeminiError>(body) {
        if !parsed.error.message.is_empty() {
            return parsed.error.message;
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        return status.canonical_reason().unwrap_or("no body").to_string();
    }
    trimmed.chars().take(MAX_ERROR_BODY).collect()
}

#[async_trait]
impl GenerativeProvider for GeminiProvider {
    async fn generate(
        &self,
        request: &GenerateRequest,
        timeout: Duration,
    ) -> Result<GenerateResponse, ProviderError> {
        // SECURITY: the key is exposed only here, as a query parameter
        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", self.credential.expose())])
            .header(CONTENT_TYPE, "application/json")
            .timeout(timeout)
            .json(request)
            .send()
            .await
            .map_err(|e| transport_error(e, timeout))?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(status = status.as_u16(), endpoint = %self.endpoint, "Non-success status");
            return Err(ProviderError::Status {
                status: status.as_u16(),
                message: error_message(status, &body),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| transport_error(e, timeout))?;

        serde_json::from_slice(&body).map_err(|e| ProviderError::Parse(e.to_string()))
    }

    async fn health_check(&self) -> bool {
        !self.credential.is_empty()
    }

    fn name(&self) -> &str {
        "gemini"
    }
}
