//! Resume Match - résumé to job description matching service
//!
//! This library provides the text-similarity engine behind the service:
//! normalization, per-request TF-IDF vectorization, cosine scoring and
//! keyword overlap, plus the skill-gap, salary and ATS helpers.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{AnalysisError, AtsChecker, Matcher, SalaryModel, StopWords};
pub use models::{MatchOutcome, MatchResult, MatchRequest, MatchResponse};
