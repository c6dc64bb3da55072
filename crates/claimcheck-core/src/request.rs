//! Request Builder.
//!
//! Serializes to the `generateContent` body:
//!
//! ```json
//! {
//!   "contents": [{"parts": [{"text": "..."}]}],
//!   "tools": [{"google_search": {}}],
//!   "systemInstruction": {"parts": [{"text": "..."}]}
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::claim::Claim;
use crate::prompts::{user_query, SYSTEM_INSTRUCTION};

/// Outbound generation payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub contents: Vec<Content>,
    pub tools: Vec<Tool>,
    pub system_instruction: Content,
}

/// A list of text parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

impl Content {
    /// Content made of a single text part.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            parts: vec![Part { text: text.into() }],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

/// Capability flags for the remote model.
///
/// The service expects the snake_case `google_search` key here,
/// unlike the camelCase used elsewhere in the body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tool {
    #[serde(rename = "google_search")]
    GoogleSearch(GoogleSearch),
}

/// Empty marker object enabling web-search grounding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoogleSearch {}

/// Build the payload for a claim.
///
/// Pure: no clock, no randomness, no I/O.
pub fn build_request(claim: &Claim) -> GenerateRequest {
    GenerateRequest {
        contents: vec![Content::text(user_query(claim.as_str()))],
        tools: vec![Tool::GoogleSearch(GoogleSearch::default())],
        system_instruction: Content::text(SYSTEM_INSTRUCTION),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_payload_shape() {
        let claim = Claim::new("The Catholic Church teaches Purgatory exists.").unwrap();
        let body = serde_json::to_value(build_request(&claim)).unwrap();

        assert_eq!(
            body,
            json!({
                "contents": [{"parts": [{"text":
                    "Provide a comparative analysis of the claim: 'The Catholic Church teaches Purgatory exists.'"
                }]}],
                "tools": [{"google_search": {}}],
                "systemInstruction": {"parts": [{"text": SYSTEM_INSTRUCTION}]}
            })
        );
    }

    #[test]
    fn test_tool_deserializes() {
        let tool: Tool = serde_json::from_value(json!({"google_search": {}})).unwrap();
        assert_eq!(tool, Tool::GoogleSearch(GoogleSearch {}));
    }

    proptest! {
        #[test]
        fn prop_build_is_deterministic(text in "[a-zA-Z ]{0,40}[a-zA-Z]") {
            let claim = Claim::new(text).unwrap();
            prop_assert_eq!(build_request(&claim), build_request(&claim));
        }

        #[test]
        fn prop_claim_is_embedded_verbatim(text in "\\PC*[a-z]\\PC*") {
            let claim = Claim::new(text.clone()).unwrap();
            let request = build_request(&claim);
            prop_assert!(request.contents[0].parts[0].text.contains(&text));
        }
    }
}
