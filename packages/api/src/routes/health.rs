use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use shared::models::responses::HealthResponse;

use crate::state::AppState;

/// Health check endpoint to verify API status
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            success: true,
            message: "Server is running".to_string(),
            timestamp: Utc::now(),
            environment: state.environment.clone(),
        }),
    )
}
