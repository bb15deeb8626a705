use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared::models::responses::ErrorResponse;
use shared::services::errors::game_service_errors::GameServiceError;

#[derive(Debug)]
pub enum ApiError {
    GameService(GameServiceError),
    BadRequest(String),
    RouteNotFound(String),
}

impl From<GameServiceError> for ApiError {
    fn from(error: GameServiceError) -> Self {
        ApiError::GameService(error)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl ApiError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            ApiError::GameService(GameServiceError::ValidationError(msg)) => {
                (StatusCode::BAD_REQUEST, msg.clone())
            }
            ApiError::GameService(GameServiceError::InvalidState(msg)) => {
                (StatusCode::BAD_REQUEST, msg.clone())
            }
            ApiError::GameService(GameServiceError::GameNotFound) => {
                (StatusCode::NOT_FOUND, "Game not found".to_string())
            }
            ApiError::GameService(GameServiceError::RepositoryError(_)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error".to_string(),
            ),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::RouteNotFound(path) => {
                (StatusCode::NOT_FOUND, format!("Route {} not found", path))
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        (status, Json(ErrorResponse::new(message))).into_response()
    }
}
