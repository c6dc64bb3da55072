//! The claim under analysis.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors raised when accepting a claim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClaimError {
    #[error("Claim is empty: enter a theological claim to analyze")]
    Blank,
}

/// A caller-supplied theological claim.
///
/// The text is kept exactly as given. It doubles as the memoization key,
/// so `"Purgatory"` and `"Purgatory "` are different claims.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Claim(String);

impl Claim {
    /// Accept a claim, rejecting empty or whitespace-only input.
    pub fn new(text: impl Into<String>) -> Result<Self, ClaimError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ClaimError::Blank);
        }
        Ok(Self(text))
    }

    /// The claim text, verbatim.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for Claim {
    type Error = ClaimError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Claim> for String {
    fn from(claim: Claim) -> Self {
        claim.0
    }
}

impl AsRef<str> for Claim {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Claim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_blank_claims_rejected() {
        assert_eq!(Claim::new(""), Err(ClaimError::Blank));
        assert_eq!(Claim::new("   \n\t"), Err(ClaimError::Blank));
    }

    #[test]
    fn test_claim_kept_verbatim() {
        let claim = Claim::new("  Purgatory exists. ").unwrap();
        assert_eq!(claim.as_str(), "  Purgatory exists. ");
    }

    #[test]
    fn test_trailing_whitespace_is_a_distinct_claim() {
        let a = Claim::new("Purgatory").unwrap();
        let b = Claim::new("Purgatory ").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_deserialize_rejects_blank() {
        let parsed: Result<Claim, _> = serde_json::from_str("\"  \"");
        assert!(parsed.is_err());

        let parsed: Claim = serde_json::from_str("\"Sola scriptura\"").unwrap();
        assert_eq!(parsed.as_str(), "Sola scriptura");
    }

    proptest! {
        #[test]
        fn prop_non_blank_text_round_trips(text in ".*[^\\s].*") {
            let claim = Claim::new(text.clone()).unwrap();
            prop_assert_eq!(claim.into_inner(), text);
        }
    }
}
