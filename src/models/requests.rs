use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to score a résumé against a job description
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchRequest {
    #[validate(length(max = 200000))]
    #[serde(alias = "resumeText")]
    pub resume_text: String,
    #[validate(length(max = 200000))]
    #[serde(alias = "jobDescription")]
    pub job_description: String,
}

/// Request for an ATS readability score
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AtsRequest {
    #[validate(length(max = 200000))]
    #[serde(alias = "resumeText")]
    pub resume_text: String,
    #[serde(default, alias = "jobDescription")]
    pub job_description: Option<String>,
}

/// Request to compare résumé skills with job skills
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SkillGapRequest {
    #[validate(length(max = 1000))]
    #[serde(default, alias = "resumeSkills")]
    pub resume_skills: Vec<String>,
    #[validate(length(max = 1000))]
    #[serde(default, alias = "jobSkills")]
    pub job_skills: Vec<String>,
}

/// Request for a salary estimate
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SalaryRequest {
    #[validate(range(min = 0.0, max = 80.0))]
    #[serde(alias = "yearsExperience")]
    pub years_experience: f64,
    #[validate(range(max = 10000))]
    #[serde(alias = "skillCount")]
    pub skill_count: u32,
    /// 0 = Bachelor, 1 = Master, 2 = PhD
    #[validate(range(max = 2))]
    #[serde(alias = "educationLevel")]
    pub education_level: u8,
}
