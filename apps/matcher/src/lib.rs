//! Résumé-to-job matching: ranks job postings against a candidate profile with
//! explainable, deterministic scores.

pub mod config;
pub mod errors;
pub mod input;
pub mod matching;
pub mod models;

pub use matching::{rank_all, score_one, MatchResult};
pub use models::{CandidateProfile, JobPosting};
