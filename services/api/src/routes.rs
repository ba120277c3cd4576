use crate::infra::AppState;
use axum::extract::rejection::JsonRejection;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::atomic::Ordering;
use tracing::debug;
use zenflow::dashboard::{render_dashboard, ChartData};
use zenflow::error::AppError;
use zenflow::stress::{assess, StressAssessment, StressInput, StressScore};

/// Check-in payload shared by `/stress` and `/intervention`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub(crate) struct StressRequest {
    pub(crate) mood: i64,
    pub(crate) screen_time: f64,
    pub(crate) typing_speed: i64,
}

impl From<StressRequest> for StressInput {
    fn from(request: StressRequest) -> Self {
        StressInput::new(request.mood, request.screen_time, request.typing_speed)
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct StressResponse {
    pub(crate) stress_score: StressScore,
    pub(crate) intervention: &'static str,
}

impl From<&StressAssessment> for StressResponse {
    fn from(assessment: &StressAssessment) -> Self {
        Self {
            stress_score: assessment.score,
            intervention: assessment.intervention,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct InterventionResponse {
    pub(crate) intervention: &'static str,
    pub(crate) score: StressScore,
}

pub(crate) fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/dashboard", get(dashboard_endpoint))
        .route("/stress", post(stress_endpoint))
        .route("/intervention", post(intervention_endpoint))
        .layer(Extension(state))
}

pub(crate) async fn root() -> Json<serde_json::Value> {
    Json(json!({ "message": "ZenFlow Stress API is running." }))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
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

pub(crate) async fn dashboard_endpoint() -> Result<Html<String>, AppError> {
    let page = render_dashboard(&ChartData::placeholder(), Utc::now())?;
    Ok(Html(page))
}

pub(crate) async fn stress_endpoint(
    payload: Result<Json<StressRequest>, JsonRejection>,
) -> Result<Json<StressResponse>, AppError> {
    let Json(request) = payload?;
    let assessment = assess_request(request);
    Ok(Json(StressResponse::from(&assessment)))
}

pub(crate) async fn intervention_endpoint(
    payload: Result<Json<StressRequest>, JsonRejection>,
) -> Result<Json<InterventionResponse>, AppError> {
    let Json(request) = payload?;
    let assessment = assess_request(request);
    Ok(Json(InterventionResponse {
        intervention: assessment.intervention,
        score: assessment.score,
    }))
}

// The thread-local generator is created and dropped here so it never lives
// across an await point.
fn assess_request(request: StressRequest) -> StressAssessment {
    let input = StressInput::from(request);
    let assessment = assess(&input, &mut rand::thread_rng());
    debug!(
        mood = input.mood,
        screen_time = input.screen_time,
        typing_speed = input.typing_speed,
        score = assessment.score.value(),
        band = assessment.band.label(),
        "stress assessed"
    );
    assessment
}
