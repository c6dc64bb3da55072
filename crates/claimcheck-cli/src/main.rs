//! claimcheck binary.

mod cli;
mod render;

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use claimcheck_runtime::{
    Claim, GeminiProvider, GenerativeProvider, RetryPolicy, RuntimeConfig, VerificationClient,
    GEMINI_API_KEY_ENV,
};

use crate::cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "claimcheck=debug,claimcheck_runtime=debug,claimcheck_core=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn load_config(cli: &Cli) -> Result<RuntimeConfig> {
    let mut config = match &cli.config {
        Some(path) => RuntimeConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => RuntimeConfig::default(),
    };

    if let Some(model) = &cli.model {
        config.model = model.clone();
        config.validate().context("Invalid --model")?;
    }

    Ok(config)
}

/// Returns whether every claim was verified.
async fn run(cli: Cli) -> Result<bool> {
    let config = load_config(&cli)?;
    let provider = GeminiProvider::from_config(&config).context("Gemini provider")?;
    if !provider.health_check().await {
        bail!(
            "API key is blank: set 'api_key' in the config file or the {} environment variable",
            GEMINI_API_KEY_ENV
        );
    }

    let policy = RetryPolicy::new(&config.retry);
    tracing::debug!(
        endpoint = provider.endpoint(),
        max_attempts = policy.max_attempts(),
        worst_case_backoff = ?policy.total_delay(),
        "Provider ready"
    );

    let client = VerificationClient::new(Arc::new(provider), config);

    if let Some(raw) = &cli.claim {
        return Ok(analyze(&client, raw, cli.json).await?.unwrap_or(false));
    }

    let mut all_verified = true;
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read claim from stdin")?;
        if let Some(verified) = analyze(&client, &line, cli.json).await? {
            all_verified &= verified;
        }
    }

    let stats = client.stats();
    tracing::debug!(
        cache_hits = stats.cache_hits,
        cache_misses = stats.cache_misses,
        network_attempts = stats.network_attempts,
        "Session finished"
    );

    Ok(all_verified)
}

/// Verify and print one claim. `None` when the claim was blank.
async fn analyze(client: &VerificationClient, raw: &str, json: bool) -> Result<Option<bool>> {
    let claim = match Claim::new(raw) {
        Ok(claim) => claim,
        Err(_) => {
            eprintln!("Warning: {}", render::BLANK_CLAIM_NOTICE);
            return Ok(None);
        }
    };

    eprintln!("Searching official sources and performing dual-source analysis...");
    let verdict = client.verify(&claim).await;

    let mut stdout = io::stdout().lock();
    if json {
        writeln!(stdout, "{}", render::render_json(claim.as_str(), &verdict)?)?;
    } else {
        writeln!(stdout, "{}", render::render_text(&verdict))?;
    }
    stdout.flush()?;

    Ok(Some(verdict.is_verified()))
}
