// predictor-backend/src/api/handlers/system_handler.rs
use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::api::{dto::common::ApiResponse, AppState};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub environment: String,
    pub version: String,
}

pub async fn health_check_handler(
    State(app_state): State<AppState>,
) -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::success(
        "Service is healthy",
        HealthResponse {
            status: "ok".to_string(),
            environment: app_state.config.environment.clone(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    ))
}

pub fn system_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check_handler))
        .with_state(app_state)
}
