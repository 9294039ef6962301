//! Axum route handlers — the only boundary the Presentation Layer calls.
//!
//! Contract per action: validate the raw input, invoke exactly one flow,
//! rewrap any flow failure into a uniform operation-specific message. The
//! underlying cause is logged for operators and never surfaced to callers.

use axum::{extract::State, Json};
use tracing::{error, info};
use validator::Validate;

use crate::data_uri::DataUri;
use crate::errors::AppError;
use crate::flows::extract_job::{self, ExtractedJobData};
use crate::flows::extract_resume::{self, ExtractedResumeData, ResumeSource};
use crate::flows::generate::{self, CoverLetterResult};
use crate::flows::optimize_ats::{self, AtsOptimizationResult};
use crate::flows::suggest_skills::{self, SkillSuggestion};
use crate::schema::{
    describe_errors, CoverLetterRequest, ExtractJobRequest, ExtractResumeRequest,
    OptimizeAtsRequest, SuggestSkillsRequest,
};
use crate::state::AppState;

/// Fails fast with the full list of violations; no flow runs after a failure.
fn check<T: Validate>(input: &T) -> Result<(), AppError> {
    input
        .validate()
        .map_err(|errors| AppError::Validation(describe_errors(&errors)))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/letters/generate
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<CoverLetterRequest>,
) -> Result<Json<CoverLetterResult>, AppError> {
    check(&request)?;

    let result = generate::run(&request, state.model.as_ref())
        .await
        .map_err(|e| {
            error!("cover letter generation failed: {e}");
            AppError::Llm("Failed to generate cover letter.".to_string())
        })?;

    info!(
        "Generated cover letter for application to {} ({})",
        request.recipient_information.company, request.job_details.job_title
    );
    Ok(Json(result))
}

/// POST /api/v1/letters/suggest-skills
pub async fn handle_suggest_skills(
    State(state): State<AppState>,
    Json(request): Json<SuggestSkillsRequest>,
) -> Result<Json<SkillSuggestion>, AppError> {
    check(&request)?;

    let suggestion = suggest_skills::run(&request, state.model.as_ref())
        .await
        .map_err(|e| {
            error!("skill suggestion failed: {e}");
            AppError::Llm("Failed to suggest skills.".to_string())
        })?;

    info!(
        "Suggested {} skills and {} achievements",
        suggestion.suggested_skills.len(),
        suggestion.suggested_achievements.len()
    );
    Ok(Json(suggestion))
}

/// POST /api/v1/letters/optimize-ats
pub async fn handle_optimize_ats(
    State(state): State<AppState>,
    Json(request): Json<OptimizeAtsRequest>,
) -> Result<Json<AtsOptimizationResult>, AppError> {
    check(&request)?;

    let result = optimize_ats::run(&request, state.model.as_ref())
        .await
        .map_err(|e| {
            error!("ATS optimization failed: {e}");
            AppError::Llm("Failed to optimize for ATS.".to_string())
        })?;

    info!("Optimized letter with {} keywords", result.keywords.len());
    Ok(Json(result))
}

/// POST /api/v1/letters/extract-job
pub async fn handle_extract_job(
    State(state): State<AppState>,
    Json(request): Json<ExtractJobRequest>,
) -> Result<Json<ExtractedJobData>, AppError> {
    check(&request)?;

    let data = extract_job::run(&request, state.model.as_ref())
        .await
        .map_err(|e| {
            error!("job posting extraction failed: {e}");
            AppError::Llm("Failed to extract job details.".to_string())
        })?;

    info!("Extracted job posting for {}", data.company);
    Ok(Json(data))
}

/// POST /api/v1/letters/extract-resume
pub async fn handle_extract_resume(
    State(state): State<AppState>,
    Json(request): Json<ExtractResumeRequest>,
) -> Result<Json<ExtractedResumeData>, AppError> {
    check(&request)?;
    let source = resume_source(&request)?;

    let data = extract_resume::run(source, state.model.as_ref())
        .await
        .map_err(|e| {
            error!("resume extraction failed: {e}");
            AppError::Llm("Failed to extract data from resume.".to_string())
        })?;

    info!("Extracted resume with {} skills", data.skills.len());
    Ok(Json(data))
}

/// Picks the input shape. Text wins when both are present; a data URI is
/// parsed and its payload checked before any model work happens.
fn resume_source(request: &ExtractResumeRequest) -> Result<ResumeSource, AppError> {
    if let Some(text) = request.resume_text.as_deref().filter(|t| !t.trim().is_empty()) {
        return Ok(ResumeSource::Text(text.to_string()));
    }

    let uri = request.resume_data_uri.as_deref().unwrap_or_default();
    let parsed =
        DataUri::parse(uri).map_err(|e| AppError::Validation(format!("resumeDataUri: {e}")))?;
    Ok(ResumeSource::File(parsed))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::{Config, DEFAULT_MODEL};
    use crate::llm_client::testing::StubModel;
    use crate::routes::build_router;
    use crate::state::AppState;

    fn test_config() -> Config {
        Config {
            anthropic_api_key: "test-key".to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_url: "http://localhost:0".to_string(),
            port: 8080,
            rust_log: "info".to_string(),
        }
    }

    fn app(model: Arc<StubModel>) -> Router {
        build_router(AppState {
            model,
            config: test_config(),
        })
    }

    async fn post_json(router: Router, path: &str, body: Value) -> (StatusCode, Value) {
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(path)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    fn generate_body() -> Value {
        json!({
            "personalInformation": {
                "name": "Jordan Reyes",
                "email": "jordan@example.com",
                "phone": "+1 555 0147",
                "address": "Austin, TX"
            },
            "recipientInformation": {
                "company": "Northwind",
                "contactName": "Sam Field",
                "address": "Seattle, WA"
            },
            "jobDetails": {
                "jobTitle": "Engineer",
                "jobDescription": "Own backend services end to end in a small team.",
                "experienceSummary": "Six years building and operating backend services.",
                "relevantSkills": "React, Node.js"
            }
        })
    }

    #[tokio::test]
    async fn test_generate_returns_nonempty_letter() {
        let stub = StubModel::replying(
            r#"{"coverLetter": "I am excited to apply for the Engineer role at Northwind."}"#,
        );
        let (status, body) = post_json(
            app(stub.clone()),
            "/api/v1/letters/generate",
            generate_body(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let letter = body["coverLetter"].as_str().unwrap();
        assert!(!letter.trim().is_empty());
        assert_eq!(stub.call_count(), 1);
    }

    #[tokio::test]
    async fn test_generate_invalid_email_fails_before_any_model_call() {
        let stub = StubModel::replying(r#"{"coverLetter": "never used"}"#);
        let mut body = generate_body();
        body["personalInformation"]["email"] = json!("not-an-email");

        let (status, response) =
            post_json(app(stub.clone()), "/api/v1/letters/generate", body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response["error"]["code"], "VALIDATION_ERROR");
        let message = response["error"]["message"].as_str().unwrap();
        assert!(message.contains("email"), "error must name the email field");
        assert_eq!(stub.call_count(), 0, "no model call on invalid input");
    }

    #[tokio::test]
    async fn test_generate_enumerates_every_violation() {
        let stub = StubModel::replying("{}");
        let mut body = generate_body();
        body["personalInformation"]["name"] = json!("");
        body["jobDetails"]["jobDescription"] = json!("short");

        let (status, response) =
            post_json(app(stub.clone()), "/api/v1/letters/generate", body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let message = response["error"]["message"].as_str().unwrap();
        assert!(message.contains("Name is required."));
        assert!(message.contains("Job description should be more detailed."));
        assert_eq!(stub.call_count(), 0);
    }

    #[tokio::test]
    async fn test_generate_flow_failure_is_rewrapped_uniformly() {
        let stub = StubModel::failing();
        let (status, response) = post_json(
            app(stub.clone()),
            "/api/v1/letters/generate",
            generate_body(),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response["error"]["code"], "LLM_ERROR");
        assert_eq!(
            response["error"]["message"],
            "Failed to generate cover letter."
        );
        assert_eq!(stub.call_count(), 1);
    }

    #[tokio::test]
    async fn test_suggest_skills_roundtrip() {
        let stub = StubModel::replying(
            r#"{"suggestedSkills": ["Rust"], "suggestedAchievements": ["I shipped a scheduler."]}"#,
        );
        let body = json!({
            "jobDescription": "Senior Rust engineer for infrastructure work.",
            "resume": "I shipped a scheduler. I operate Kubernetes clusters."
        });

        let (status, response) =
            post_json(app(stub.clone()), "/api/v1/letters/suggest-skills", body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(response["suggestedSkills"][0], "Rust");
        assert_eq!(stub.call_count(), 1);
    }

    #[tokio::test]
    async fn test_suggest_skills_failure_message() {
        let stub = StubModel::failing();
        let body = json!({
            "jobDescription": "Senior Rust engineer.",
            "resume": "I shipped a scheduler."
        });

        let (status, response) =
            post_json(app(stub), "/api/v1/letters/suggest-skills", body).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response["error"]["message"], "Failed to suggest skills.");
    }

    #[tokio::test]
    async fn test_optimize_ats_roundtrip() {
        let stub = StubModel::replying(
            r#"{"optimizedCoverLetter": "Optimized.", "keywords": ["Kubernetes"]}"#,
        );
        let body = json!({
            "coverLetter": "I build backend services.",
            "jobDescription": "Kubernetes experience required."
        });

        let (status, response) =
            post_json(app(stub.clone()), "/api/v1/letters/optimize-ats", body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(response["keywords"][0], "Kubernetes");
        assert_eq!(stub.call_count(), 1);
    }

    #[tokio::test]
    async fn test_extract_job_roundtrip() {
        let stub = StubModel::replying(
            r#"{"company": "Northwind", "jobTitle": "Engineer", "address": "Seattle, WA"}"#,
        );
        let body = json!({"jobPosting": "Northwind is hiring an Engineer in Seattle."});

        let (status, response) =
            post_json(app(stub.clone()), "/api/v1/letters/extract-job", body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(response["company"], "Northwind");
        assert_eq!(stub.call_count(), 1);
    }

    const RESUME_REPLY: &str =
        r#"{"experienceSummary": "I have six years of backend experience.", "skills": ["Rust"]}"#;

    #[tokio::test]
    async fn test_extract_resume_accepts_plain_text() {
        let stub = StubModel::replying(RESUME_REPLY);
        let body = json!({"resumeText": "Six years of backend experience with Rust."});

        let (status, response) =
            post_json(app(stub.clone()), "/api/v1/letters/extract-resume", body).await;

        assert_eq!(status, StatusCode::OK);
        assert!(!response["experienceSummary"].as_str().unwrap().is_empty());
        assert_eq!(response["skills"][0], "Rust");
        assert_eq!(stub.call_count(), 1);
    }

    #[tokio::test]
    async fn test_extract_resume_accepts_data_uri() {
        let stub = StubModel::replying(RESUME_REPLY);
        let body = json!({"resumeDataUri": "data:application/pdf;base64,JVBERi0xLjQ="});

        let (status, response) =
            post_json(app(stub.clone()), "/api/v1/letters/extract-resume", body).await;

        assert_eq!(status, StatusCode::OK);
        assert!(!response["experienceSummary"].as_str().unwrap().is_empty());
        assert_eq!(stub.call_count(), 1);
    }

    #[tokio::test]
    async fn test_extract_resume_rejects_missing_source() {
        let stub = StubModel::replying(RESUME_REPLY);
        let (status, response) =
            post_json(app(stub.clone()), "/api/v1/letters/extract-resume", json!({})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            response["error"]["message"],
            "Provide resume text or an uploaded resume file."
        );
        assert_eq!(stub.call_count(), 0);
    }

    #[tokio::test]
    async fn test_extract_resume_rejects_malformed_data_uri() {
        let stub = StubModel::replying(RESUME_REPLY);
        let body = json!({"resumeDataUri": "data:application/pdf;base64,@@not-base64@@"});

        let (status, response) =
            post_json(app(stub.clone()), "/api/v1/letters/extract-resume", body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let message = response["error"]["message"].as_str().unwrap();
        assert!(message.contains("resumeDataUri"));
        assert_eq!(stub.call_count(), 0);
    }
}
