// Integration tests for Resume Match

use actix_web::{http::StatusCode, test, web, App};
use resume_match::routes::{configure_routes, json_config, AppState};
use serde_json::{json, Value};

macro_rules! init_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::default()))
                .app_data(json_config())
                .configure(configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn test_root_health_check() {
    let app = init_app!();
    let req = test::TestRequest::get().uri("/").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "resume-match");
}

#[actix_web::test]
async fn test_match_endpoint() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/match")
        .set_json(json!({
            "resume_text": "Senior backend engineer: Python, SQL, AWS, Docker.",
            "job_description": "Backend engineer with Python and SQL experience"
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let pct = body["match_percentage"].as_f64().unwrap();
    assert!(pct > 0.0 && pct < 100.0);
    assert_eq!(body["matched_keywords"], json!(["backend", "engineer", "python", "sql"]));
    assert_eq!(body["total_matches"], 4);
    assert_eq!(body["similarity_explanation"], "Found 4 common relevant keywords.");
}

#[actix_web::test]
async fn test_match_endpoint_accepts_camel_case() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/match")
        .set_json(json!({
            "resumeText": "Rust tokio",
            "jobDescription": "Rust tokio"
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["match_percentage"].as_f64(), Some(100.0));
}

#[actix_web::test]
async fn test_match_endpoint_insufficient_text() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/match")
        .set_json(json!({
            "resume_text": "",
            "job_description": "Engineer Python SQL"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["match_percentage"].as_f64(), Some(0.0));
    assert_eq!(body["matched_keywords"], json!([]));
    assert_eq!(body["similarity_explanation"], "Insufficient text to analyze.");
}

#[actix_web::test]
async fn test_match_endpoint_malformed_json() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/match")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"resume_text\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_json");
}

#[actix_web::test]
async fn test_skill_gap_endpoint() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/skill-gap")
        .set_json(json!({
            "resume_skills": ["Python", "SQL"],
            "job_skills": ["python", "sql", "aws", "docker"]
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["matched_skills"], json!(["python", "sql"]));
    assert_eq!(body["missing_skills"], json!(["aws", "docker"]));
    assert_eq!(body["skill_coverage_percent"].as_f64(), Some(50.0));
}

#[actix_web::test]
async fn test_salary_endpoint() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/salary")
        .set_json(json!({
            "years_experience": 5.0,
            "skill_count": 10,
            "education_level": 2
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    // 30000 + 25000 + 10000 + 20000
    assert_eq!(body["predicted_salary"].as_f64(), Some(85000.0));
    assert_eq!(body["currency"], "USD");
    assert_eq!(body["period"], "yearly");
}

#[actix_web::test]
async fn test_salary_endpoint_rejects_negative_experience() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/salary")
        .set_json(json!({
            "years_experience": -2.0,
            "skill_count": 1,
            "education_level": 0
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Validation failed");
}

#[actix_web::test]
async fn test_ats_score_endpoint() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/ats-score")
        .set_json(json!({
            "resume_text": "Experience at Acme. Education: BSc. Skills: Rust.",
            "job_description": "Rust developer"
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    // 5 (length) + 15 (sections) + 10 (format) + 40 (content)
    assert_eq!(body["ats_score"], 70);
    assert_eq!(body["breakdown"]["sections"], "Found 3/4 essential sections");
    assert_eq!(body["sections_found"], json!(["experience", "education", "skills"]));
}
