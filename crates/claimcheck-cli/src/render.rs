//! Rendering verdicts for the terminal.
//!
//! The analysis text arrives as Markdown and is printed as-is. Sources are
//! listed as Markdown links, using the URI when a source has no title.

use claimcheck_runtime::{SourceRef, Verdict};
use serde::Serialize;
use std::fmt::Write;

pub const RESULTS_HEADING: &str = "### Comparative Analysis Results";

pub const SOURCES_HEADING: &str = "Grounding Sources";

pub const SOURCES_CAPTION: &str = "Note: Grounding sources are provided by Google Search and may \
include links to official Catechism documents or reputable theological sites.";

pub const NO_SOURCES_NOTICE: &str =
    "No specific grounding sources were found, or the model relied on internal knowledge.";

pub const BLANK_CLAIM_NOTICE: &str = "Please enter a claim to begin analysis.";

/// Formatted text report for one verdict.
pub fn render_text(verdict: &Verdict) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}\n", RESULTS_HEADING);
    let _ = writeln!(out, "{}", verdict.text());

    let sources = verdict.sources();
    if sources.is_empty() {
        let _ = writeln!(out, "\nWarning: {}", NO_SOURCES_NOTICE);
    } else {
        let _ = writeln!(out, "\n---\n{}\n", SOURCES_HEADING);
        out.push_str(&source_list(sources));
        let _ = writeln!(out, "\n{}", SOURCES_CAPTION);
    }

    out
}

/// Bulleted link list, one source per line, in response order.
pub fn source_list(sources: &[SourceRef]) -> String {
    sources
        .iter()
        .map(|source| format!("- **[{}]({})**\n", source.display_title(), source.uri))
        .collect()
}

#[derive(Serialize)]
struct JsonReport<'a> {
    claim: &'a str,
    #[serde(flatten)]
    verdict: &'a Verdict,
}

/// JSON report for one verdict, tagged with its claim.
pub fn render_json(claim: &str, verdict: &Verdict) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport { claim, verdict })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verified(sources: Vec<SourceRef>) -> Verdict {
        Verdict::Verified {
            text: "**1. Roman Catholic Doctrine**".to_string(),
            sources,
        }
    }

    #[test]
    fn test_sources_use_title_or_uri() {
        let list = source_list(&[
            SourceRef::new("https://a", ""),
            SourceRef::new("https://b", "B"),
        ]);
        assert_eq!(list, "- **[https://a](https://a)**\n- **[B](https://b)**\n");
    }

    #[test]
    fn test_text_report_with_sources() {
        let report = render_text(&verified(vec![SourceRef::new("https://vatican.va", "CCC")]));

        assert!(report.starts_with(RESULTS_HEADING));
        assert!(report.contains("**1. Roman Catholic Doctrine**"));
        assert!(report.contains(SOURCES_HEADING));
        assert!(report.contains("- **[CCC](https://vatican.va)**"));
        assert!(report.contains(SOURCES_CAPTION));
        assert!(!report.contains(NO_SOURCES_NOTICE));
    }

    #[test]
    fn test_text_report_without_sources() {
        let report = render_text(&verified(vec![]));
        assert!(report.contains(NO_SOURCES_NOTICE));
        assert!(!report.contains(SOURCES_HEADING));
    }

    #[test]
    fn test_failures_render_as_prose() {
        let report = render_text(&Verdict::TransportError {
            attempts: 5,
            http_status: None,
            detail: "Timeout after 60s".to_string(),
        });
        assert!(report.contains("after 5 attempts. Details: Timeout after 60s"));
        assert!(report.contains(NO_SOURCES_NOTICE));
    }

    #[test]
    fn test_json_report() {
        let json = render_json("Purgatory", &Verdict::EmptyResponse).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["claim"], "Purgatory");
        assert_eq!(value["status"], "empty_response");
    }
}
