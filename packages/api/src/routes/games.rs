use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use lambda_http::tracing::{debug, error};

use crate::{error::ApiError, state::AppState};
use shared::models::game::Game;
use shared::models::requests::{CreateGameRequest, SubmitBoardRequest, UpdateRoundRequest};
use shared::models::responses::ApiResponse;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/games", get(list_games).post(create_game))
        .route("/api/games/{id}", get(get_game))
        .route("/api/games/{id}/round", put(update_round))
        .route("/api/games/{id}/board", put(submit_board))
        .route("/api/games/{id}/end", put(end_game))
}

async fn list_games(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Game>>>, ApiError> {
    let games = state.game_service.list_games().await.map_err(|e| {
        error!("Failed to list games: {}", e);
        ApiError::from(e)
    })?;
    Ok(Json(ApiResponse::list(games)))
}

async fn create_game(
    State(state): State<AppState>,
    payload: Result<Json<CreateGameRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Game>>), ApiError> {
    let Json(request) = payload?;
    let (player1_name, player2_name) = request.into_names()?;

    let game = state
        .game_service
        .create_game(&player1_name, &player2_name)
        .await
        .map_err(|e| {
            error!(
                "Failed to create game for {} vs {}: {}",
                player1_name, player2_name, e
            );
            ApiError::from(e)
        })?;

    debug!("Game created successfully: {}", game.id);
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(game).with_message("Game created successfully")),
    ))
}

async fn get_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Game>>, ApiError> {
    state
        .game_service
        .get_game(&id)
        .await
        .map(|game| Json(ApiResponse::new(game)))
        .map_err(|e| {
            error!("Failed to retrieve game {}: {}", id, e);
            ApiError::from(e)
        })
}

async fn update_round(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateRoundRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<Game>>, ApiError> {
    let Json(request) = payload?;
    let winner = request.into_winner()?;

    let game = state
        .game_service
        .record_round(&id, &winner)
        .await
        .map_err(|e| {
            error!("Failed to record round for game {}: {}", id, e);
            ApiError::from(e)
        })?;

    debug!("Round {} recorded for game {}", game.total_rounds, id);
    Ok(Json(
        ApiResponse::new(game).with_message("Game round updated successfully"),
    ))
}

async fn submit_board(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<SubmitBoardRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<Game>>, ApiError> {
    let Json(request) = payload?;

    let game = state
        .game_service
        .record_board(&id, &request.board)
        .await
        .map_err(|e| {
            error!("Failed to record board for game {}: {}", id, e);
            ApiError::from(e)
        })?;

    debug!("Board round {} recorded for game {}", game.total_rounds, id);
    Ok(Json(
        ApiResponse::new(game).with_message("Game round updated successfully"),
    ))
}

async fn end_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Game>>, ApiError> {
    let game = state.game_service.end_game(&id).await.map_err(|e| {
        error!("Failed to end game {}: {}", id, e);
        ApiError::from(e)
    })?;

    debug!("Game ended successfully: {}", id);
    Ok(Json(
        ApiResponse::new(game).with_message("Game ended successfully"),
    ))
}
