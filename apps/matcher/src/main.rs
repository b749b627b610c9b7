use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use matcher::config::Config;
use matcher::input::{load_candidate, load_jobs};
use matcher::matching::MatchScorer;

fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Structured logging on stderr; stdout carries the results
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting matcher v{}", env!("CARGO_PKG_VERSION"));

    let candidate = load_candidate(&config.candidate_file)?;
    let jobs = load_jobs(&config.jobs_file)?;

    let scorer = config.scorer()?;
    info!(
        weights = ?config.weights,
        strategy = ?config.strategy,
        min_score = config.min_score,
        "Ranking {} jobs",
        jobs.len()
    );

    let ranked = scorer.rank(&candidate, &jobs, config.min_score);

    let output = serde_json::to_string_pretty(&ranked).context("Failed to serialize results")?;
    println!("{output}");

    info!("Returned {} of {} jobs", ranked.len(), jobs.len());
    Ok(())
}
