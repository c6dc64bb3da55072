//! API key handling.
//!
//! The key is wrapped in a [`SecretString`] the moment it is read, prints
//! as `[REDACTED]`, and is zeroed on drop. The only way to read it back is
//! [`ApiCredential::expose`], which should be called where the request URL
//! is assembled and nowhere else.

use secrecy::{ExposeSecret, SecretString};
use std::fmt;

use super::ProviderError;

/// Environment variable consulted when no key is configured.
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Where a credential was loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    /// `api_key` in the runtime config file
    Config,
    /// Environment variable
    Environment,
    /// Passed in by code
    Programmatic,
}

impl fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialSource::Config => write!(f, "config"),
            CredentialSource::Environment => write!(f, "environment"),
            CredentialSource::Programmatic => write!(f, "programmatic"),
        }
    }
}

/// A static API credential.
pub struct ApiCredential {
    value: SecretString,
    source: CredentialSource,
}

impl ApiCredential {
    pub fn new(value: impl Into<String>, source: CredentialSource) -> Self {
        Self {
            value: SecretString::from(value.into()),
            source,
        }
    }

    /// Read the key from `env_var`.
    pub fn from_env(env_var: &str) -> Result<Self, ProviderError> {
        std::env::var(env_var)
            .map(|value| Self::new(value, CredentialSource::Environment))
            .map_err(|_| {
                ProviderError::NotConfigured(format!(
                    "API key not set: configure the '{}' environment variable",
                    env_var
                ))
            })
    }

    /// Use the configured value if present, otherwise `env_var`.
    pub fn from_config_or_env(
        configured: Option<&SecretString>,
        env_var: &str,
    ) -> Result<Self, ProviderError> {
        if let Some(value) = configured {
            return Ok(Self::new(
                value.expose_secret().to_string(),
                CredentialSource::Config,
            ));
        }

        Self::from_env(env_var).map_err(|_| {
            ProviderError::NotConfigured(format!(
                "API key required: set 'api_key' in config or the {} environment variable",
                env_var
            ))
        })
    }

    /// The raw key. Use only when building the outbound request.
    pub fn expose(&self) -> &str {
        self.value.expose_secret()
    }

    pub fn is_empty(&self) -> bool {
        self.value.expose_secret().trim().is_empty()
    }

    pub fn source(&self) -> CredentialSource {
        self.source
    }
}

impl fmt::Debug for ApiCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiCredential")
            .field("value", &"[REDACTED]")
            .field("source", &self.source)
            .finish()
    }
}

impl fmt::Display for ApiCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "API key from {} [REDACTED]", self.source)
    }
}
