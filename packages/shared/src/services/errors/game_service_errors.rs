use thiserror::Error;

use crate::models::game::{InvalidGameId, InvalidRoundWinner, TransitionError};
use crate::repositories::errors::game_repository_errors::GameRepositoryError;

#[derive(Debug, Error)]
pub enum GameServiceError {
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Game not found")]
    GameNotFound,
    #[error("Invalid state: {0}")]
    InvalidState(String),
    #[error("Repository error: {0}")]
    RepositoryError(#[from] GameRepositoryError),
}

impl From<InvalidGameId> for GameServiceError {
    fn from(err: InvalidGameId) -> Self {
        GameServiceError::ValidationError(err.to_string())
    }
}

impl From<InvalidRoundWinner> for GameServiceError {
    fn from(err: InvalidRoundWinner) -> Self {
        GameServiceError::ValidationError(err.to_string())
    }
}

impl From<TransitionError> for GameServiceError {
    fn from(err: TransitionError) -> Self {
        GameServiceError::InvalidState(err.to_string())
    }
}
