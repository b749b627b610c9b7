//! Signal Scorers: four independent 0–100 sub-scores.
//!
//! Each signal has the variants the matcher has historically shipped with. A
//! deployment picks one variant per signal through `SignalStrategy` and keeps
//! it, since scores are only comparable under the same choice.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::MatcherError;
use crate::matching::skills::has_equivalent;
use crate::models::candidate::distinct_terms;
use crate::models::{CandidateProfile, JobPosting};

/// Returned when there is nothing on the job side to compare against.
pub const NEUTRAL_SCORE: f64 = 50.0;
/// Experience text overlap when the candidate lists no experience.
pub const EXPERIENCE_FLOOR: f64 = 30.0;
/// Education text overlap when the candidate lists no education.
pub const EDUCATION_FLOOR: f64 = 40.0;
/// Education presence score when at least one entry exists.
pub const EDUCATION_PRESENT_SCORE: f64 = 80.0;

// ────────────────────────────────────────────────────────────────────────────
// Strategy selection
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeywordStrategy {
    /// Job keywords covered by candidate keywords; neutral when the job has none.
    #[default]
    SetOverlap,
    /// Candidate keywords found in description + requirements; 0 when the candidate has none.
    TextPresence,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExperienceStrategy {
    /// Banding on years of experience.
    #[default]
    Years,
    /// Experience snippets found in the job description.
    TextOverlap,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EducationStrategy {
    /// Fixed score for having any education entry.
    #[default]
    Presence,
    /// Education snippets found in the requirements text.
    TextOverlap,
}

/// The variant chosen for each configurable signal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalStrategy {
    pub keywords: KeywordStrategy,
    pub experience: ExperienceStrategy,
    pub education: EducationStrategy,
}

impl FromStr for KeywordStrategy {
    type Err = MatcherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "set-overlap" => Ok(Self::SetOverlap),
            "text-presence" => Ok(Self::TextPresence),
            other => Err(MatcherError::UnknownVariant {
                kind: "keyword strategy",
                value: other.to_string(),
                expected: "set-overlap, text-presence",
            }),
        }
    }
}

impl FromStr for ExperienceStrategy {
    type Err = MatcherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "years" => Ok(Self::Years),
            "text-overlap" => Ok(Self::TextOverlap),
            other => Err(MatcherError::UnknownVariant {
                kind: "experience strategy",
                value: other.to_string(),
                expected: "years, text-overlap",
            }),
        }
    }
}

impl FromStr for EducationStrategy {
    type Err = MatcherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "presence" => Ok(Self::Presence),
            "text-overlap" => Ok(Self::TextOverlap),
            other => Err(MatcherError::UnknownVariant {
                kind: "education strategy",
                value: other.to_string(),
                expected: "presence, text-overlap",
            }),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Signals
// ────────────────────────────────────────────────────────────────────────────

/// Share of job skills with at least one equivalent candidate skill.
pub fn skills_score(candidate_skills: &[String], job_skills: &[String]) -> f64 {
    let job = distinct_terms(job_skills);
    if job.is_empty() {
        return NEUTRAL_SCORE;
    }

    let candidate = distinct_terms(candidate_skills);
    let matched = job
        .iter()
        .filter(|skill| has_equivalent(&candidate, skill))
        .count();

    percentage(matched, job.len())
}

pub fn keywords_score(
    candidate: &CandidateProfile,
    job: &JobPosting,
    strategy: KeywordStrategy,
) -> f64 {
    match strategy {
        KeywordStrategy::SetOverlap => keyword_set_overlap(&candidate.keywords, &job.keywords),
        KeywordStrategy::TextPresence => {
            text_presence(&candidate.keywords, &job.description_with_requirements())
                .unwrap_or(0.0)
        }
    }
}

fn keyword_set_overlap(candidate_keywords: &[String], job_keywords: &[String]) -> f64 {
    let job = distinct_terms(job_keywords);
    if job.is_empty() {
        return NEUTRAL_SCORE;
    }

    let candidate: Vec<String> = distinct_terms(candidate_keywords)
        .into_iter()
        .map(str::to_lowercase)
        .collect();

    let matched = job
        .iter()
        .filter(|job_kw| {
            let job_kw = job_kw.to_lowercase();
            candidate.iter().any(|kw| job_kw.contains(kw.as_str()))
        })
        .count();

    percentage(matched, job.len())
}

pub fn experience_score(
    candidate: &CandidateProfile,
    job: &JobPosting,
    strategy: ExperienceStrategy,
) -> f64 {
    match strategy {
        ExperienceStrategy::Years => years_band(candidate.years_experience),
        ExperienceStrategy::TextOverlap => {
            text_presence(&candidate.experience, &job.description).unwrap_or(EXPERIENCE_FLOOR)
        }
    }
}

/// ≥5 years → 90, ≥3 → 75, ≥1 → 60, anything else (unknown, negative, NaN) → 50.
pub fn years_band(years: Option<f64>) -> f64 {
    match years {
        Some(y) if y >= 5.0 => 90.0,
        Some(y) if y >= 3.0 => 75.0,
        Some(y) if y >= 1.0 => 60.0,
        _ => NEUTRAL_SCORE,
    }
}

pub fn education_score(
    candidate: &CandidateProfile,
    job: &JobPosting,
    strategy: EducationStrategy,
) -> f64 {
    match strategy {
        EducationStrategy::Presence => {
            if distinct_terms(&candidate.education).is_empty() {
                NEUTRAL_SCORE
            } else {
                EDUCATION_PRESENT_SCORE
            }
        }
        EducationStrategy::TextOverlap => {
            text_presence(&candidate.education, &job.requirements_text())
                .unwrap_or(EDUCATION_FLOOR)
        }
    }
}

/// Share of `terms` found as case-insensitive substrings of `haystack`.
/// `None` when there are no terms, so each caller picks its own fallback.
fn text_presence(terms: &[String], haystack: &str) -> Option<f64> {
    let terms = distinct_terms(terms);
    if terms.is_empty() {
        return None;
    }

    let haystack = haystack.to_lowercase();
    let matched = terms
        .iter()
        .filter(|term| haystack.contains(term.to_lowercase().as_str()))
        .count();

    Some(percentage(matched, terms.len()).min(100.0))
}

fn percentage(matched: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (matched as f64 / total as f64 * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn make_job(description: &str, requirements: &[&str], keywords: &[&str]) -> JobPosting {
        JobPosting {
            id: Uuid::new_v4(),
            title: "Backend Engineer".to_string(),
            company: "Acme".to_string(),
            location: "Remote".to_string(),
            description: description.to_string(),
            requirements: strings(requirements),
            responsibilities: vec![],
            skills: vec![],
            keywords: strings(keywords),
            salary: None,
            employment_type: Default::default(),
            remote: true,
            posted_date: Utc::now(),
            application_url: String::new(),
            source: "manual".to_string(),
        }
    }

    #[test]
    fn test_skills_neutral_when_job_lists_none() {
        assert_eq!(skills_score(&strings(&["Rust"]), &[]), NEUTRAL_SCORE);
        assert_eq!(skills_score(&[], &[]), NEUTRAL_SCORE);
    }

    #[test]
    fn test_skills_identical_sets_score_full() {
        let skills = strings(&["Rust", "Tokio", "PostgreSQL"]);
        assert_eq!(skills_score(&skills, &skills), 100.0);
    }

    #[test]
    fn test_skills_disjoint_sets_score_zero() {
        let candidate = strings(&["Rust", "Tokio"]);
        let job = strings(&["Java", "Spring"]);
        assert_eq!(skills_score(&candidate, &job), 0.0);
    }

    #[test]
    fn test_skills_counts_each_job_skill_once() {
        // Two candidate skills satisfy "react"; it still counts as one of two.
        let candidate = strings(&["react", "reactjs"]);
        let job = strings(&["React", "Docker"]);
        assert_eq!(skills_score(&candidate, &job), 50.0);
    }

    #[test]
    fn test_skills_alias_scenario() {
        assert_eq!(skills_score(&strings(&["python"]), &strings(&["py"])), 100.0);
    }

    #[test]
    fn test_skills_partial_scenario() {
        let candidate = strings(&["React", "Node.js", "TypeScript"]);
        let job = strings(&["React", "Node.js", "TypeScript", "AWS", "Docker"]);
        assert_eq!(skills_score(&candidate, &job).round(), 60.0);
    }

    #[test]
    fn test_keyword_set_overlap_neutral_without_job_keywords() {
        let candidate = CandidateProfile {
            keywords: strings(&["cloud"]),
            ..Default::default()
        };
        let job = make_job("", &[], &[]);
        assert_eq!(
            keywords_score(&candidate, &job, KeywordStrategy::SetOverlap),
            NEUTRAL_SCORE
        );
    }

    #[test]
    fn test_keyword_set_overlap_counts_job_keywords() {
        let candidate = CandidateProfile {
            keywords: strings(&["cloud", "web"]),
            ..Default::default()
        };
        let job = make_job(
            "",
            &[],
            &["full stack", "web development", "cloud", "microservices"],
        );
        assert_eq!(
            keywords_score(&candidate, &job, KeywordStrategy::SetOverlap),
            50.0
        );
    }

    #[test]
    fn test_keyword_text_presence_zero_without_candidate_keywords() {
        let job = make_job("Lots of words here", &["and requirements"], &["cloud"]);
        assert_eq!(
            keywords_score(&CandidateProfile::default(), &job, KeywordStrategy::TextPresence),
            0.0
        );
    }

    #[test]
    fn test_keyword_text_presence_searches_requirements_too() {
        let candidate = CandidateProfile {
            keywords: strings(&["Microservices", "GraphQL", "kafka", "terraform"]),
            ..Default::default()
        };
        let job = make_job(
            "We build microservices at scale.",
            &["Experience with Kafka"],
            &[],
        );
        assert_eq!(
            keywords_score(&candidate, &job, KeywordStrategy::TextPresence),
            50.0
        );
    }

    #[test]
    fn test_years_banding() {
        assert_eq!(years_band(Some(7.0)), 90.0);
        assert_eq!(years_band(Some(5.0)), 90.0);
        assert_eq!(years_band(Some(3.5)), 75.0);
        assert_eq!(years_band(Some(1.0)), 60.0);
        assert_eq!(years_band(Some(0.5)), 50.0);
        assert_eq!(years_band(Some(-4.0)), 50.0);
        assert_eq!(years_band(Some(f64::NAN)), 50.0);
        assert_eq!(years_band(None), 50.0);
    }

    #[test]
    fn test_experience_text_overlap_floor() {
        let job = make_job("Distributed systems work", &[], &[]);
        assert_eq!(
            experience_score(&CandidateProfile::default(), &job, ExperienceStrategy::TextOverlap),
            EXPERIENCE_FLOOR
        );
    }

    #[test]
    fn test_experience_text_overlap_matches_description() {
        let candidate = CandidateProfile {
            experience: strings(&["distributed systems", "embedded firmware"]),
            ..Default::default()
        };
        let job = make_job("Own our Distributed Systems platform", &[], &[]);
        assert_eq!(
            experience_score(&candidate, &job, ExperienceStrategy::TextOverlap),
            50.0
        );
    }

    #[test]
    fn test_education_presence_variant() {
        let job = make_job("", &[], &[]);
        let educated = CandidateProfile {
            education: strings(&["BSc Computer Science"]),
            ..Default::default()
        };
        assert_eq!(
            education_score(&educated, &job, EducationStrategy::Presence),
            EDUCATION_PRESENT_SCORE
        );
        assert_eq!(
            education_score(&CandidateProfile::default(), &job, EducationStrategy::Presence),
            NEUTRAL_SCORE
        );
    }

    #[test]
    fn test_education_text_overlap_variant() {
        let job = make_job("", &["Bachelor's degree in Computer Science"], &[]);
        let candidate = CandidateProfile {
            education: strings(&["computer science", "MBA"]),
            ..Default::default()
        };
        assert_eq!(
            education_score(&candidate, &job, EducationStrategy::TextOverlap),
            50.0
        );
        assert_eq!(
            education_score(&CandidateProfile::default(), &job, EducationStrategy::TextOverlap),
            EDUCATION_FLOOR
        );
    }

    #[test]
    fn test_strategy_names_parse() {
        assert_eq!(
            "text-presence".parse::<KeywordStrategy>().unwrap(),
            KeywordStrategy::TextPresence
        );
        assert_eq!(
            " Years ".parse::<ExperienceStrategy>().unwrap(),
            ExperienceStrategy::Years
        );
        assert_eq!(
            "text-overlap".parse::<EducationStrategy>().unwrap(),
            EducationStrategy::TextOverlap
        );
        assert!("fuzzy".parse::<KeywordStrategy>().is_err());
    }

    #[test]
    fn test_default_strategy() {
        let strategy = SignalStrategy::default();
        assert_eq!(strategy.keywords, KeywordStrategy::SetOverlap);
        assert_eq!(strategy.experience, ExperienceStrategy::Years);
        assert_eq!(strategy.education, EducationStrategy::Presence);
    }
}
