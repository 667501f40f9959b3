use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{AssessmentAnswers, Scenario};
use super::results::ProgramFilter;
use super::service::MatchmakerService;

/// Router builder exposing the catalog, assessment, and comparison
/// endpoints.
pub fn matchmaker_router(service: Arc<MatchmakerService>) -> Router {
    Router::new()
        .route("/api/v1/programs", get(list_programs_handler))
        .route("/api/v1/programs/:program_id", get(program_details_handler))
        .route("/api/v1/assessments", post(submit_assessment_handler))
        .route("/api/v1/comparisons", post(compare_handler))
        .route(
            "/api/v1/scenarios/:scenario/fields",
            get(scenario_fields_handler),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub struct SubmitAssessmentRequest {
    pub scenario: Scenario,
    pub answers: AssessmentAnswers,
}

#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    pub program_ids: Vec<String>,
}

fn error_body(status: StatusCode, message: impl AsRef<str>) -> Response {
    let payload = json!({
        "success": false,
        "error": message.as_ref(),
    });
    (status, axum::Json(payload)).into_response()
}

pub(crate) async fn list_programs_handler(
    State(service): State<Arc<MatchmakerService>>,
    Query(filter): Query<ProgramFilter>,
) -> Response {
    let programs = service.programs(&filter);
    let payload = json!({
        "success": true,
        "programs": programs,
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn program_details_handler(
    State(service): State<Arc<MatchmakerService>>,
    Path(program_id): Path<String>,
) -> Response {
    match service.program(&program_id) {
        Ok(program) => {
            let payload = json!({
                "success": true,
                "program": program,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => error_body(error.status_code(), error.to_string()),
    }
}

pub(crate) async fn submit_assessment_handler(
    State(service): State<Arc<MatchmakerService>>,
    body: Result<axum::Json<SubmitAssessmentRequest>, JsonRejection>,
) -> Response {
    let axum::Json(request) = match body {
        Ok(body) => body,
        Err(_) => {
            return error_body(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to process assessment",
            );
        }
    };

    if let Some(latency) = service.simulated_latency() {
        tokio::time::sleep(latency).await;
    }

    let outcome = service.submit_assessment(request.scenario, &request.answers);
    let payload = json!({
        "success": true,
        "assessment_id": outcome.assessment_id,
        "scenario": outcome.scenario,
        "matches": outcome.matches,
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn compare_handler(
    State(service): State<Arc<MatchmakerService>>,
    axum::Json(request): axum::Json<CompareRequest>,
) -> Response {
    match service.compare(&request.program_ids) {
        Ok(comparison) => {
            let payload = json!({
                "success": true,
                "comparison": comparison,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => error_body(error.status_code(), error.to_string()),
    }
}

pub(crate) async fn scenario_fields_handler(
    State(service): State<Arc<MatchmakerService>>,
    Path(scenario): Path<String>,
) -> Response {
    let scenario = match scenario.parse::<Scenario>() {
        Ok(scenario) => scenario,
        Err(error) => return error_body(StatusCode::NOT_FOUND, error.to_string()),
    };

    let fields = service.fields(scenario);
    let payload = json!({
        "success": true,
        "scenario": scenario,
        "label": scenario.label(),
        "total_steps": fields.len(),
        "fields": fields,
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}
