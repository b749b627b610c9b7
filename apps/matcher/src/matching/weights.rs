use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::MatcherError;

const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Per-signal weights for the overall score. Always sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub skills: f64,
    pub experience: f64,
    pub keywords: f64,
    pub education: f64,
}

/// skills 0.4, experience 0.3, keywords 0.2, education 0.1
pub const PRIMARY_WEIGHTS: ScoringWeights = ScoringWeights {
    skills: 0.4,
    experience: 0.3,
    keywords: 0.2,
    education: 0.1,
};

/// skills 0.4, experience 0.2, keywords 0.3, education 0.1
pub const ALTERNATE_WEIGHTS: ScoringWeights = ScoringWeights {
    skills: 0.4,
    experience: 0.2,
    keywords: 0.3,
    education: 0.1,
};

impl Default for ScoringWeights {
    fn default() -> Self {
        PRIMARY_WEIGHTS
    }
}

impl ScoringWeights {
    /// Builds a custom weight set. Rejects negative or non-finite weights and
    /// sets that don't sum to 1.0.
    pub fn new(
        skills: f64,
        experience: f64,
        keywords: f64,
        education: f64,
    ) -> Result<Self, MatcherError> {
        let weights = Self {
            skills,
            experience,
            keywords,
            education,
        };
        weights.validate()?;
        Ok(weights)
    }

    pub fn sum(&self) -> f64 {
        self.skills + self.experience + self.keywords + self.education
    }

    pub fn validate(&self) -> Result<(), MatcherError> {
        let all = [self.skills, self.experience, self.keywords, self.education];
        if all.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(MatcherError::InvalidWeights(format!(
                "weights must be finite and non-negative, got {:?}",
                self
            )));
        }
        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(MatcherError::InvalidWeights(format!(
                "weights must sum to 1.0, got {sum}"
            )));
        }
        Ok(())
    }
}

/// Accepts a profile name ("primary", "alternate") or four comma-separated
/// weights in skills, experience, keywords, education order.
impl FromStr for ScoringWeights {
    type Err = MatcherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.contains(',') {
            return s.parse::<WeightProfile>().map(WeightProfile::weights);
        }

        let parts = s
            .split(',')
            .map(|part| {
                part.trim().parse::<f64>().map_err(|_| {
                    MatcherError::InvalidWeights(format!("'{}' is not a number", part.trim()))
                })
            })
            .collect::<Result<Vec<f64>, _>>()?;

        match parts.as_slice() {
            &[skills, experience, keywords, education] => {
                Self::new(skills, experience, keywords, education)
            }
            _ => Err(MatcherError::InvalidWeights(format!(
                "expected 4 weights, got {}",
                parts.len()
            ))),
        }
    }
}

/// Named weight sets selectable from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeightProfile {
    #[default]
    Primary,
    Alternate,
}

impl WeightProfile {
    pub fn weights(self) -> ScoringWeights {
        match self {
            WeightProfile::Primary => PRIMARY_WEIGHTS,
            WeightProfile::Alternate => ALTERNATE_WEIGHTS,
        }
    }
}

impl FromStr for WeightProfile {
    type Err = MatcherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "primary" => Ok(Self::Primary),
            "alternate" => Ok(Self::Alternate),
            other => Err(MatcherError::UnknownVariant {
                kind: "weight profile",
                value: other.to_string(),
                expected: "primary, alternate",
            }),
        }
    }
}
