use serde::{Deserialize, Serialize};

/// Résumé-derived attributes of one candidate, as handed over by the CV parser.
///
/// Every collection defaults to empty so scorers never see a missing field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub experience: Vec<String>,
    #[serde(default)]
    pub education: Vec<String>,
    #[serde(default)]
    pub years_experience: Option<f64>,
}

/// Reduces a string collection to a set: blank entries dropped, duplicates
/// removed case-insensitively, first spelling kept in input order.
pub fn distinct_terms(values: &[String]) -> Vec<&str> {
    let mut seen: Vec<String> = Vec::with_capacity(values.len());
    let mut out = Vec::with_capacity(values.len());

    for value in values {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            continue;
        }
        let key = trimmed.to_lowercase();
        if seen.contains(&key) {
            continue;
        }
        seen.push(key);
        out.push(trimmed);
    }

    out
}
