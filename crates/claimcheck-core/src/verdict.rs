//! Verification outcomes.
//!
//! A [`Verdict`] is produced once per claim and never mutated. Callers
//! branch on the variant; [`Verdict::text`] still renders every outcome
//! as displayable prose for surfaces that only show text.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Message shown when the model answered with nothing usable.
pub const EMPTY_RESPONSE_MESSAGE: &str = "Error: Model returned an empty response candidate.";

/// A web citation backing the analysis.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceRef {
    pub uri: String,

    /// May be empty; see [`SourceRef::display_title`].
    #[serde(default)]
    pub title: String,
}

impl SourceRef {
    pub fn new(uri: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            title: title.into(),
        }
    }

    /// Title for display, falling back to the URI when the title is empty.
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            &self.uri
        } else {
            &self.title
        }
    }
}

/// Outcome of verifying one claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Verdict {
    /// The model produced an analysis.
    Verified {
        text: String,
        sources: Vec<SourceRef>,
    },

    /// HTTP succeeded but no candidate text came back. Not retried.
    EmptyResponse,

    /// Every attempt failed at the transport or HTTP-status level.
    /// `http_status` is set when the service answered with a non-success code.
    TransportError {
        attempts: u32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        http_status: Option<u16>,
        detail: String,
    },

    /// Something other than the network went wrong.
    InternalError { detail: String },
}

impl Verdict {
    /// Displayable text for this outcome.
    pub fn text(&self) -> Cow<'_, str> {
        match self {
            Verdict::Verified { text, .. } => Cow::Borrowed(text.as_str()),
            Verdict::EmptyResponse => Cow::Borrowed(EMPTY_RESPONSE_MESSAGE),
            Verdict::TransportError {
                attempts,
                http_status: None,
                detail,
            } => Cow::Owned(format!(
                "Error: Failed to connect to the verification service after {} {}. Details: {}",
                attempts,
                attempt_noun(*attempts),
                detail
            )),
            Verdict::TransportError {
                attempts,
                http_status: Some(code),
                detail,
            } => Cow::Owned(format!(
                "Error: The verification service rejected the request (HTTP {}) after {} {}. Details: {}",
                code,
                attempts,
                attempt_noun(*attempts),
                detail
            )),
            Verdict::InternalError { detail } => Cow::Owned(format!(
                "An unexpected error occurred during API processing: {}",
                detail
            )),
        }
    }

    /// Citations; empty for every non-success outcome.
    pub fn sources(&self) -> &[SourceRef] {
        match self {
            Verdict::Verified { sources, .. } => sources,
            _ => &[],
        }
    }

    pub fn is_verified(&self) -> bool {
        matches!(self, Verdict::Verified { .. })
    }

    /// Short label for logs and metrics.
    pub fn outcome(&self) -> &'static str {
        match self {
            Verdict::Verified { .. } => "verified",
            Verdict::EmptyResponse => "empty_response",
            Verdict::TransportError { .. } => "transport_error",
            Verdict::InternalError { .. } => "internal_error",
        }
    }
}

fn attempt_noun(attempts: u32) -> &'static str {
    if attempts == 1 {
        "attempt"
    } else {
        "attempts"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_title_falls_back_to_uri() {
        assert_eq!(SourceRef::new("https://a", "").display_title(), "https://a");
        assert_eq!(SourceRef::new("https://b", "B").display_title(), "B");
    }

    #[test]
    fn test_error_texts() {
        assert_eq!(
            Verdict::EmptyResponse.text(),
            "Error: Model returned an empty response candidate."
        );

        let transport = Verdict::TransportError {
            attempts: 5,
            http_status: None,
            detail: "connection refused".to_string(),
        };
        assert_eq!(
            transport.text(),
            "Error: Failed to connect to the verification service after 5 attempts. Details: connection refused"
        );

        let internal = Verdict::InternalError {
            detail: "bad json".to_string(),
        };
        assert!(internal.text().starts_with("An unexpected error occurred"));
    }

    #[test]
    fn test_rejection_text_names_status_and_single_attempt() {
        let rejected = Verdict::TransportError {
            attempts: 1,
            http_status: Some(403),
            detail: "API key not valid.".to_string(),
        };
        assert_eq!(
            rejected.text(),
            "Error: The verification service rejected the request (HTTP 403) after 1 attempt. Details: API key not valid."
        );

        let refused = Verdict::TransportError {
            attempts: 1,
            http_status: None,
            detail: "connection refused".to_string(),
        };
        assert!(refused.text().contains("after 1 attempt. Details"));
    }

    #[test]
    fn test_http_status_serialized_only_when_present() {
        let refused = Verdict::TransportError {
            attempts: 5,
            http_status: None,
            detail: "connection refused".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&refused).unwrap(),
            json!({"status": "transport_error", "attempts": 5, "detail": "connection refused"})
        );
    }

    #[test]
    fn test_sources_empty_for_failures() {
        let failure = Verdict::TransportError {
            attempts: 1,
            http_status: None,
            detail: String::new(),
        };
        assert!(failure.sources().is_empty());
        assert!(Verdict::EmptyResponse.sources().is_empty());
    }

    #[test]
    fn test_serializes_with_status_tag() {
        let verdict = Verdict::Verified {
            text: "ok".to_string(),
            sources: vec![SourceRef::new("https://a", "")],
        };
        assert_eq!(
            serde_json::to_value(&verdict).unwrap(),
            json!({
                "status": "verified",
                "text": "ok",
                "sources": [{"uri": "https://a", "title": ""}]
            })
        );
        assert_eq!(
            serde_json::to_value(Verdict::EmptyResponse).unwrap(),
            json!({"status": "empty_response"})
        );
    }
}
