//! Personality Routes - Catalog for the frontend picker

use axum::{routing::get, Json, Router};

use crate::models::PersonalitiesResponse;
use crate::AppState;

/// List recognized personalities
#[utoipa::path(
    get,
    path = "/personalities",
    responses((status = 200, description = "Personality catalog", body = PersonalitiesResponse)),
    tag = "Personality"
)]
pub async fn list_personalities() -> Json<PersonalitiesResponse> {
    Json(PersonalitiesResponse::catalog())
}

pub fn router() -> Router<AppState> {
    Router::new().route("/personalities", get(list_personalities))
}
