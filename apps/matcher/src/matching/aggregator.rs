//! Match Aggregator: weighs the four signals into one score and ranks jobs.
//!
//! Default backend: `WeightedScorer` with the primary weight set and the
//! default signal strategy. Callers that need another deployment profile build
//! their own `WeightedScorer` and keep it fixed.

use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::errors::MatcherError;
use crate::matching::explanation::explain;
use crate::matching::signals::{
    education_score, experience_score, keywords_score, skills_score, SignalStrategy,
};
use crate::matching::skills::partition_skills;
use crate::matching::weights::{ScoringWeights, WeightProfile};
use crate::models::{CandidateProfile, JobPosting};

/// Minimum overall score upstream callers treat as a relevant match.
pub const RELEVANCE_THRESHOLD: u32 = 30;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

/// The four weighted signals, each rounded to an integer in 0–100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubScores {
    pub skills: u32,
    pub experience: u32,
    pub keywords: u32,
    pub education: u32,
}

/// Scored match of one candidate against one job. Built once, never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult<'a> {
    pub job: &'a JobPosting,
    pub overall_score: u32,
    pub sub_scores: SubScores,
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub explanation: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// A job scorer. Implement this to swap the scoring backend without touching
/// the ranking or the callers.
pub trait MatchScorer: Send + Sync {
    fn score<'a>(&self, candidate: &CandidateProfile, job: &'a JobPosting) -> MatchResult<'a>;

    /// Short backend label, e.g. "weighted".
    fn backend(&self) -> &'static str;

    /// Scores every job, drops results under `min_score`, and sorts the rest
    /// by overall score, highest first. Equal scores keep input order.
    fn rank<'a>(
        &self,
        candidate: &CandidateProfile,
        jobs: &'a [JobPosting],
        min_score: u32,
    ) -> Vec<MatchResult<'a>> {
        let mut results: Vec<MatchResult<'a>> = jobs
            .par_iter()
            .map(|job| self.score(candidate, job))
            .filter(|result| result.overall_score >= min_score)
            .collect();

        // sort_by is stable; ties stay in input order
        results.sort_by(|a, b| b.overall_score.cmp(&a.overall_score));

        debug!(
            backend = self.backend(),
            scored = jobs.len(),
            kept = results.len(),
            min_score,
            "ranked jobs"
        );

        results
    }
}

// ────────────────────────────────────────────────────────────────────────────
// WeightedScorer (default backend)
// ────────────────────────────────────────────────────────────────────────────

/// Deterministic multi-signal scorer.
///
/// overall = round(0.4·skills + 0.3·experience + 0.2·keywords + 0.1·education)
/// under the primary weights, computed on the unrounded signals.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WeightedScorer {
    weights: ScoringWeights,
    strategy: SignalStrategy,
}

impl WeightedScorer {
    /// Fails with `MatcherError::InvalidWeights` unless the weights are
    /// non-negative and sum to 1.0.
    pub fn new(weights: ScoringWeights, strategy: SignalStrategy) -> Result<Self, MatcherError> {
        weights.validate()?;
        Ok(Self { weights, strategy })
    }

    pub fn with_profile(profile: WeightProfile, strategy: SignalStrategy) -> Self {
        Self {
            weights: profile.weights(),
            strategy,
        }
    }

    pub fn weights(&self) -> ScoringWeights {
        self.weights
    }

    pub fn strategy(&self) -> SignalStrategy {
        self.strategy
    }
}

impl MatchScorer for WeightedScorer {
    fn score<'a>(&self, candidate: &CandidateProfile, job: &'a JobPosting) -> MatchResult<'a> {
        let skills = clamp_score(skills_score(&candidate.skills, &job.skills));
        let experience = clamp_score(experience_score(candidate, job, self.strategy.experience));
        let keywords = clamp_score(keywords_score(candidate, job, self.strategy.keywords));
        let education = clamp_score(education_score(candidate, job, self.strategy.education));

        let w = &self.weights;
        let weighted = skills * w.skills
            + experience * w.experience
            + keywords * w.keywords
            + education * w.education;
        let overall_score = to_points(weighted);

        let (matching_skills, missing_skills) = partition_skills(&candidate.skills, &job.skills);
        let explanation = explain(overall_score, &matching_skills, &missing_skills);

        MatchResult {
            job,
            overall_score,
            sub_scores: SubScores {
                skills: to_points(skills),
                experience: to_points(experience),
                keywords: to_points(keywords),
                education: to_points(education),
            },
            matching_skills,
            missing_skills,
            explanation,
        }
    }

    fn backend(&self) -> &'static str {
        "weighted"
    }
}

fn clamp_score(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 100.0)
}

fn to_points(value: f64) -> u32 {
    clamp_score(value).round() as u32
}

// ────────────────────────────────────────────────────────────────────────────
// Entry points
// ────────────────────────────────────────────────────────────────────────────

/// Scores one job with the default scorer.
pub fn score_one<'a>(candidate: &CandidateProfile, job: &'a JobPosting) -> MatchResult<'a> {
    WeightedScorer::default().score(candidate, job)
}

/// Ranks every job with the default scorer. `None` keeps every result;
/// pass `Some(RELEVANCE_THRESHOLD)` for relevant matches only.
pub fn rank_all<'a>(
    candidate: &CandidateProfile,
    jobs: &'a [JobPosting],
    min_score: Option<u32>,
) -> Vec<MatchResult<'a>> {
    WeightedScorer::default().rank(candidate, jobs, min_score.unwrap_or(0))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
