//! Loads candidate and job JSON documents for the command-line driver.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::errors::MatcherError;
use crate::models::{CandidateProfile, JobPosting};

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, MatcherError> {
    let raw = fs::read_to_string(path).map_err(|source| MatcherError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| MatcherError::Json {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_candidate(path: &Path) -> Result<CandidateProfile, MatcherError> {
    let candidate: CandidateProfile = read_json(path)?;
    debug!(
        path = %path.display(),
        skills = candidate.skills.len(),
        keywords = candidate.keywords.len(),
        "loaded candidate profile"
    );
    Ok(candidate)
}

pub fn load_jobs(path: &Path) -> Result<Vec<JobPosting>, MatcherError> {
    let jobs: Vec<JobPosting> = read_json(path)?;
    debug!(path = %path.display(), jobs = jobs.len(), "loaded job catalog");
    Ok(jobs)
}
