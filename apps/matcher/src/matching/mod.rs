// Job matching engine
// Skill normalization, signal scoring, weighted aggregation, explanations.
// Pure and synchronous: no I/O here, callers hand in already-parsed data.

pub mod aggregator;
pub mod explanation;
pub mod filters;
pub mod gap;
pub mod signals;
pub mod skills;
pub mod weights;

pub use aggregator::{
    rank_all, score_one, MatchResult, MatchScorer, SubScores, WeightedScorer, RELEVANCE_THRESHOLD,
};
pub use explanation::explain;
pub use filters::{filter_jobs, JobSearchFilters};
pub use gap::{skill_gap, SkillGap};
pub use signals::{EducationStrategy, ExperienceStrategy, KeywordStrategy, SignalStrategy};
pub use skills::{partition_skills, skills_equivalent};
pub use weights::{ScoringWeights, WeightProfile, ALTERNATE_WEIGHTS, PRIMARY_WEIGHTS};
