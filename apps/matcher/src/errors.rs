use std::path::PathBuf;

use thiserror::Error;

/// Errors raised at the edges of the matcher: configuration parsing and input loading.
/// The scoring core itself is total and never returns one of these.
#[derive(Debug, Error)]
pub enum MatcherError {
    #[error("Invalid weights: {0}")]
    InvalidWeights(String),

    #[error("Unknown {kind} '{value}' (expected one of: {expected})")]
    UnknownVariant {
        kind: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
