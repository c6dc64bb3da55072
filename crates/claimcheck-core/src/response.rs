//! Grounded-response parsing.
//!
//! Every field of the inbound model is optional. The service omits
//! whole objects freely, and a missing path means "no answer", not a
//! parse failure.

use serde::{Deserialize, Serialize};

use crate::verdict::SourceRef;

/// Inbound `generateContent` response (the parts we read).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,

    #[serde(default)]
    pub grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidatePart {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundingMetadata {
    #[serde(default)]
    pub grounding_attributions: Vec<Attribution>,

    /// Newer API revisions report citations here instead.
    #[serde(default)]
    pub grounding_chunks: Vec<Attribution>,
}

/// A single citation record; only `web` entries are used.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attribution {
    #[serde(default)]
    pub web: Option<WebOrigin>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebOrigin {
    #[serde(default)]
    pub uri: Option<String>,

    #[serde(default)]
    pub title: Option<String>,
}

/// What a successful HTTP response contained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// Generated text plus any web citations.
    Answer {
        text: String,
        sources: Vec<SourceRef>,
    },

    /// No candidate, or the first candidate had no text.
    Empty,
}

/// Read the first candidate's text and its web citations.
pub fn extract(response: GenerateResponse) -> Extraction {
    let Some(candidate) = response.candidates.into_iter().next() else {
        return Extraction::Empty;
    };

    let text = candidate
        .content
        .and_then(|content| content.parts.into_iter().next())
        .and_then(|part| part.text)
        .filter(|text| !text.is_empty());

    let Some(text) = text else {
        return Extraction::Empty;
    };

    let sources = candidate
        .grounding_metadata
        .map(web_sources)
        .unwrap_or_default();

    tracing::debug!(
        text_len = text.len(),
        sources = sources.len(),
        "Extracted grounded answer"
    );

    Extraction::Answer { text, sources }
}

/// Keep attributions with a non-empty web URI, in response order.
fn web_sources(metadata: GroundingMetadata) -> Vec<SourceRef> {
    let attributions = if metadata.grounding_attributions.is_empty() {
        metadata.grounding_chunks
    } else {
        metadata.grounding_attributions
    };

    attributions
        .into_iter()
        .filter_map(|attribution| attribution.web)
        .filter_map(|web| match web.uri {
            Some(uri) if !uri.is_empty() => Some(SourceRef {
                uri,
                title: web.title.unwrap_or_default(),
            }),
            _ => None,
        })
        .collect()
}
