// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AtsBreakdown, AtsReport, EducationLevel, KeywordMatches, MatchOutcome, MatchResult,
    SalaryEstimate, SalaryWeights, SkillGap, Vectorized, Vocabulary, WeightVector,
    INSUFFICIENT_TEXT_EXPLANATION,
};
pub use requests::{AtsRequest, MatchRequest, SalaryRequest, SkillGapRequest};
pub use responses::{ErrorResponse, HealthResponse, MatchResponse};
