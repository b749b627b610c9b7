use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::errors::MatcherError;
use crate::matching::{ScoringWeights, SignalStrategy, WeightedScorer};

/// Matcher configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub candidate_file: PathBuf,
    pub jobs_file: PathBuf,
    pub min_score: u32,
    pub weights: ScoringWeights,
    pub strategy: SignalStrategy,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &str| {
            lookup(key)
                .with_context(|| format!("Required environment variable '{key}' is not set"))
        };
        let or_default = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let min_score = or_default("MATCH_MIN_SCORE", "0")
            .trim()
            .parse::<u32>()
            .context("MATCH_MIN_SCORE must be a whole number")?;
        if min_score > 100 {
            anyhow::bail!("MATCH_MIN_SCORE must be between 0 and 100, got {min_score}");
        }

        Ok(Config {
            candidate_file: PathBuf::from(require("MATCH_CANDIDATE_FILE")?),
            jobs_file: PathBuf::from(require("MATCH_JOBS_FILE")?),
            min_score,
            weights: or_default("MATCH_WEIGHTS", "primary")
                .parse()
                .context("MATCH_WEIGHTS is invalid")?,
            strategy: SignalStrategy {
                keywords: or_default("MATCH_KEYWORD_STRATEGY", "set-overlap")
                    .parse()
                    .context("MATCH_KEYWORD_STRATEGY is invalid")?,
                experience: or_default("MATCH_EXPERIENCE_STRATEGY", "years")
                    .parse()
                    .context("MATCH_EXPERIENCE_STRATEGY is invalid")?,
                education: or_default("MATCH_EDUCATION_STRATEGY", "presence")
                    .parse()
                    .context("MATCH_EDUCATION_STRATEGY is invalid")?,
            },
            rust_log: or_default("RUST_LOG", "info"),
        })
    }

    /// The scorer this deployment runs with.
    pub fn scorer(&self) -> Result<WeightedScorer, MatcherError> {
        WeightedScorer::new(self.weights, self.strategy)
    }
}
