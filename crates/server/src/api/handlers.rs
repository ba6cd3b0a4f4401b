use axum::{extract::State, http::header, response::IntoResponse, Json};
use serde::Serialize;
use std::sync::Arc;
use supper_core::{Config, Day, COMMON_RESTRICTIONS};

use crate::metrics::encode_metrics;
use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Serialize)]
pub struct DaysResponse {
    pub days: Vec<Day>,
}

#[derive(Serialize)]
pub struct RestrictionsResponse {
    pub restrictions: Vec<&'static str>,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

pub async fn get_config(State(state): State<Arc<AppState>>) -> Json<Config> {
    Json(state.config().clone())
}

/// GET /api/v1/days
pub async fn list_days() -> Json<DaysResponse> {
    Json(DaysResponse {
        days: Day::ALL.to_vec(),
    })
}

/// GET /api/v1/restrictions/common
pub async fn common_restrictions() -> Json<RestrictionsResponse> {
    Json(RestrictionsResponse {
        restrictions: COMMON_RESTRICTIONS.to_vec(),
    })
}

/// GET /metrics
pub async fn metrics() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        encode_metrics(),
    )
}
