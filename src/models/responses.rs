use serde::{Deserialize, Serialize};
use crate::models::domain::MatchOutcome;

/// Response for the match endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResponse {
    pub match_percentage: f64,
    pub matched_keywords: Vec<String>,
    pub total_matches: usize,
    pub similarity_explanation: String,
}

impl From<MatchOutcome> for MatchResponse {
    fn from(outcome: MatchOutcome) -> Self {
        let similarity_explanation = outcome.explanation();
        match outcome {
            MatchOutcome::Matched(result) => Self {
                match_percentage: result.match_percentage,
                matched_keywords: result.matched_keywords,
                total_matches: result.total_matches,
                similarity_explanation,
            },
            MatchOutcome::InsufficientText => Self {
                match_percentage: 0.0,
                matched_keywords: vec![],
                total_matches: 0,
                similarity_explanation,
            },
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
