//! # claimcheck-core
//!
//! Pure, network-free half of claimcheck.
//!
//! This crate knows how to turn a theological claim into a grounded
//! generation request and how to read the answer back:
//! - [`build_request`] assembles the outbound payload for a [`Claim`]
//! - [`extract`] pulls the generated text and web citations out of a response
//! - [`Verdict`] is the tagged outcome handed to callers
//!
//! ## Key Guarantees
//!
//! 1. **Deterministic**: the same claim always yields the same payload
//! 2. **No I/O**: sending requests lives in `claimcheck-runtime`
//! 3. **Verbatim**: claims are never normalized, generated text is never rewritten
//!
//! ## Example
//!
//! ```rust
//! use claimcheck_core::{build_request, Claim};
//!
//! let claim = Claim::new("The Assumption of Mary").unwrap();
//! let request = build_request(&claim);
//! let body = serde_json::to_value(&request).unwrap();
//!
//! assert_eq!(body["tools"][0]["google_search"], serde_json::json!({}));
//! ```

pub mod claim;
pub mod prompts;
pub mod request;
pub mod response;
pub mod verdict;

// Re-export main types at crate root
pub use claim::{Claim, ClaimError};
pub use request::{build_request, Content, GenerateRequest, Part, Tool};
pub use response::{extract, Extraction, GenerateResponse};
pub use verdict::{SourceRef, Verdict};
