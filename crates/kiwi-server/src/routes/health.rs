//! Health Route

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct HealthCheck {
    pub status: String,
    pub message: String,
    pub version: String,
    pub oracle: String,
    pub model: String,
}

/// Service liveness (does not call the oracle)
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is running", body = HealthCheck)),
    tag = "Health"
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthCheck> {
    let oracle = state.chat_service.oracle();
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Kiwi API is running - the dessert pet is awake".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        oracle: oracle.oracle_name().to_string(),
        model: oracle.model_id().to_string(),
    })
}
