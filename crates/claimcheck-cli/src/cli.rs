//! Command-line argument parsing.

use clap::Parser;
use std::path::PathBuf;

/// Compare a theological claim against Catechism teaching and the text of Scripture.
#[derive(Parser, Debug)]
#[command(name = "claimcheck")]
#[command(version)]
#[command(
    about = "Catechism-Scripture analyzer: grounded comparative analysis of theological claims",
    long_about = "Sends a theological claim to a search-grounded model and prints a two-part \
analysis (Roman Catholic doctrine, then scriptural verification) with the web sources it cited.\n\n\
With no CLAIM argument, claims are read from stdin, one per line. Repeated claims are \
answered from memory without another request.\n\n\
The API key is read from 'api_key' in the config file or the GEMINI_API_KEY environment variable."
)]
pub struct Cli {
    /// Claim to analyze, e.g. "The Assumption of Mary"
    pub claim: Option<String>,

    /// Runtime config file (YAML, or JSON with a .json extension)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the model name
    #[arg(long)]
    pub model: Option<String>,

    /// Print verdicts as JSON instead of formatted text
    #[arg(long)]
    pub json: bool,

    /// Log retries and cache activity to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_claim_and_flags() {
        let cli = Cli::parse_from(["claimcheck", "--json", "-v", "Purgatory exists"]);
        assert_eq!(cli.claim.as_deref(), Some("Purgatory exists"));
        assert!(cli.json);
        assert!(cli.verbose);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_claim_optional() {
        let cli = Cli::parse_from(["claimcheck", "--model", "gemini-x"]);
        assert!(cli.claim.is_none());
        assert_eq!(cli.model.as_deref(), Some("gemini-x"));
    }
}
