//! Job search filters applied to a catalog before or after ranking.

use serde::{Deserialize, Serialize};

use crate::matching::skills::skills_equivalent;
use crate::models::candidate::distinct_terms;
use crate::models::{EmploymentType, JobPosting};

/// Every field is optional; an unset field doesn't restrict anything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobSearchFilters {
    /// Free text matched against title, company and description.
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub employment_type: Option<EmploymentType>,
    #[serde(default)]
    pub remote: Option<bool>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub salary_min: Option<u32>,
    #[serde(default)]
    pub salary_max: Option<u32>,
}

impl JobSearchFilters {
    pub fn matches(&self, job: &JobPosting) -> bool {
        let search = self.search.as_deref().map(str::trim);
        if let Some(search) = search.filter(|s| !s.is_empty()) {
            let needle = search.to_lowercase();
            let found = [&job.title, &job.company, &job.description]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle));
            if !found {
                return false;
            }
        }

        if let Some(location) = self.location.as_deref() {
            if !job
                .location
                .to_lowercase()
                .contains(&location.trim().to_lowercase())
            {
                return false;
            }
        }

        if self.employment_type.is_some_and(|t| t != job.employment_type) {
            return false;
        }

        if self.remote.is_some_and(|remote| remote != job.remote) {
            return false;
        }

        let wanted = distinct_terms(&self.skills);
        if !wanted.is_empty() {
            let job_skills = distinct_terms(&job.skills);
            let any_skill = wanted.iter().any(|skill| {
                job_skills
                    .iter()
                    .any(|job_skill| skills_equivalent(skill, job_skill))
            });
            if !any_skill {
                return false;
            }
        }

        let salary = job.salary.as_ref();

        // A zero filter bound is unset. Jobs without a stated bound pass.
        let floor = self.salary_min.filter(|bound| *bound > 0);
        let ceiling = self.salary_max.filter(|bound| *bound > 0);

        if let (Some(floor), Some(job_min)) = (floor, salary.and_then(|s| s.min)) {
            if job_min < floor {
                return false;
            }
        }

        if let (Some(ceiling), Some(job_max)) = (ceiling, salary.and_then(|s| s.max)) {
            if job_max > ceiling {
                return false;
            }
        }

        true
    }
}

/// Keeps the jobs that pass every set filter, in input order.
pub fn filter_jobs<'a>(jobs: &'a [JobPosting], filters: &JobSearchFilters) -> Vec<&'a JobPosting> {
    jobs.iter().filter(|job| filters.matches(job)).collect()
}
