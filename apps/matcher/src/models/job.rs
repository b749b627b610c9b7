use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentType {
    #[default]
    FullTime,
    PartTime,
    Contract,
    Internship,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: Option<u32>,
    pub max: Option<u32>,
    pub currency: String,
}

/// A normalized job listing. Read-only input to the scorer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub salary: Option<SalaryRange>,
    #[serde(default)]
    pub employment_type: EmploymentType,
    #[serde(default)]
    pub remote: bool,
    pub posted_date: DateTime<Utc>,
    #[serde(default)]
    pub application_url: String,
    #[serde(default)]
    pub source: String,
}

impl JobPosting {
    /// Description followed by every requirement, space separated.
    pub fn description_with_requirements(&self) -> String {
        let mut text = self.description.clone();
        for requirement in &self.requirements {
            text.push(' ');
            text.push_str(requirement);
        }
        text
    }

    pub fn requirements_text(&self) -> String {
        self.requirements.join(" ")
    }
}
