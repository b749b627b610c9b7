//! Skill gap across a set of target jobs.
//!
//! Collects every skill the target jobs ask for, plus any extra targets the
//! caller names, and splits them by whether the candidate already has them.

use serde::Serialize;

use crate::matching::skills::has_equivalent;
use crate::models::candidate::distinct_terms;
use crate::models::{CandidateProfile, JobPosting};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SkillGap {
    pub target_skills: Vec<String>,
    pub current_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

impl SkillGap {
    /// Share of target skills the candidate already covers, 0–100.
    /// 100 when there are no targets.
    pub fn coverage(&self) -> u32 {
        if self.target_skills.is_empty() {
            return 100;
        }
        (self.current_skills.len() as f64 / self.target_skills.len() as f64 * 100.0).round() as u32
    }
}

pub fn skill_gap(
    candidate: &CandidateProfile,
    jobs: &[&JobPosting],
    extra_targets: &[String],
) -> SkillGap {
    let requested: Vec<String> = jobs
        .iter()
        .flat_map(|job| job.skills.iter())
        .chain(extra_targets.iter())
        .cloned()
        .collect();

    let target_skills: Vec<String> = distinct_terms(&requested)
        .into_iter()
        .map(str::to_string)
        .collect();

    let owned = distinct_terms(&candidate.skills);
    let (current_skills, missing_skills): (Vec<String>, Vec<String>) = target_skills
        .iter()
        .cloned()
        .partition(|skill| has_equivalent(&owned, skill));

    SkillGap {
        target_skills,
        current_skills,
        missing_skills,
    }
}
