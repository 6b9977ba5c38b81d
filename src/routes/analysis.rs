use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::{skill_gap, AtsChecker, Matcher, SalaryModel};
use crate::models::{
    AtsRequest, EducationLevel, ErrorResponse, HealthResponse, MatchRequest, MatchResponse,
    SalaryRequest, SkillGapRequest,
};

pub const SERVICE_NAME: &str = "resume-match";

/// Application state shared across all handlers
///
/// Every field is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub salary: SalaryModel,
    pub ats: AtsChecker,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            matcher: Matcher::with_defaults(),
            salary: SalaryModel::default(),
            ats: AtsChecker::default(),
        }
    }
}

/// Configure all analysis routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/match", web::post().to(match_resume))
        .route("/skill-gap", web::post().to(skill_gap_report))
        .route("/salary", web::post().to(predict_salary))
        .route("/ats-score", web::post().to(ats_score));
}

fn validation_error(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

/// Health check endpoint
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Match endpoint
///
/// POST /api/v1/match
///
/// Request body:
/// ```json
/// {
///   "resume_text": "string",
///   "job_description": "string"
/// }
/// ```
async fn match_resume(
    state: web::Data<AppState>,
    req: web::Json<MatchRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for match request: {}", errors);
        return validation_error(errors);
    }

    let outcome = state
        .matcher
        .match_documents(&req.resume_text, &req.job_description);

    if outcome.is_insufficient() {
        tracing::info!(
            "Insufficient text for match (resume: {} chars, job: {} chars)",
            req.resume_text.len(),
            req.job_description.len()
        );
    } else {
        tracing::info!(
            "Match computed: {:.2}% with {} shared keywords",
            outcome.match_percentage(),
            outcome.total_matches()
        );
    }

    HttpResponse::Ok().json(MatchResponse::from(outcome))
}

/// Skill gap endpoint
///
/// POST /api/v1/skill-gap
///
/// Request body:
/// ```json
/// {
///   "resume_skills": ["string"],
///   "job_skills": ["string"]
/// }
/// ```
async fn skill_gap_report(req: web::Json<SkillGapRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    let gap = skill_gap(req.resume_skills.as_slice(), req.job_skills.as_slice());

    tracing::debug!(
        "Skill gap: {} matched, {} missing ({}% coverage)",
        gap.matched_skills.len(),
        gap.missing_skills.len(),
        gap.skill_coverage_percent
    );

    HttpResponse::Ok().json(gap)
}

/// Salary endpoint
///
/// POST /api/v1/salary
///
/// Request body:
/// ```json
/// {
///   "years_experience": 3.5,
///   "skill_count": 12,
///   "education_level": 0
/// }
/// ```
async fn predict_salary(
    state: web::Data<AppState>,
    req: web::Json<SalaryRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    let education = match EducationLevel::from_level(req.education_level) {
        Some(level) => level,
        None => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Invalid education level".to_string(),
                message: "education_level must be one of: 0 (bachelor), 1 (master), 2 (phd)"
                    .to_string(),
                status_code: 400,
            });
        }
    };

    match state
        .salary
        .estimate(req.years_experience, req.skill_count, education)
    {
        Ok(estimate) => HttpResponse::Ok().json(estimate),
        Err(e) => {
            tracing::error!("Failed to estimate salary: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to estimate salary".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// ATS score endpoint
///
/// POST /api/v1/ats-score
///
/// Request body:
/// ```json
/// {
///   "resume_text": "string",
///   "job_description": "string"
/// }
/// ```
async fn ats_score(
    state: web::Data<AppState>,
    req: web::Json<AtsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    let report = state.ats.score(&req.resume_text);

    tracing::debug!("ATS score: {}", report.ats_score);

    HttpResponse::Ok().json(report)
}
