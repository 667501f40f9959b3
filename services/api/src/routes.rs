use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use partner_match::error::AppError;
use partner_match::matchmaker::{
    matchmaker_router, roi, MatchmakerError, MatchmakerService, RoiInputs, RoiProjection,
};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub(crate) struct RoiEstimateResponse {
    pub(crate) success: bool,
    pub(crate) projection: RoiProjection,
}

pub(crate) fn with_matchmaker_routes(service: Arc<MatchmakerService>) -> axum::Router {
    matchmaker_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/roi/estimate",
            axum::routing::post(roi_estimate_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn roi_estimate_endpoint(
    Json(inputs): Json<RoiInputs>,
) -> Result<Json<RoiEstimateResponse>, AppError> {
    let projection = roi::estimate(&inputs).map_err(MatchmakerError::from)?;

    Ok(Json(RoiEstimateResponse {
        success: true,
        projection,
    }))
}
