use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, error};

use crate::{
    models::{
        board::Board,
        game::{Game, GameId, RoundWinner, MAX_PLAYER_NAME_LENGTH},
    },
    repositories::{
        errors::game_repository_errors::GameRepositoryError, game_repository::GameRepository,
    },
    services::{board_service::BoardService, errors::game_service_errors::GameServiceError},
};

/// Owns the lifecycle of a game record: created, any number of rounds,
/// then ended. Every mutation is a read-modify-write with no version check,
/// so concurrent writers to the same game resolve as last write wins.
#[derive(Clone)]
pub struct GameService {
    repository: Arc<dyn GameRepository + Send + Sync>,
}

impl GameService {
    pub fn new(repository: Arc<dyn GameRepository + Send + Sync>) -> Self {
        GameService { repository }
    }

    pub async fn create_game(
        &self,
        player1_name: &str,
        player2_name: &str,
    ) -> Result<Game, GameServiceError> {
        Self::validate_player_names(player1_name, player2_name)?;

        let game = Game::new(player1_name, player2_name);
        self.repository.create_game(&game).await.map_err(|e| {
            error!("Failed to store new game {}: {}", game.id, e);
            GameServiceError::from(e)
        })?;

        debug!(
            "Created game {} for {} vs {}",
            game.id, game.player1.name, game.player2.name
        );
        Ok(game)
    }

    pub async fn get_game(&self, game_id: &str) -> Result<Game, GameServiceError> {
        let game_id = GameId::parse(game_id)?;
        self.load(&game_id).await
    }

    /// Newest first.
    pub async fn list_games(&self) -> Result<Vec<Game>, GameServiceError> {
        let mut games = self.repository.list_games().await?;
        games.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(games)
    }

    /// Records a round whose outcome the caller has already decided.
    pub async fn record_round(
        &self,
        game_id: &str,
        winner: &str,
    ) -> Result<Game, GameServiceError> {
        let game_id = GameId::parse(game_id)?;
        let winner: RoundWinner = winner.parse()?;
        self.apply_round(&game_id, winner).await
    }

    /// Records a round from its final board, deriving the outcome.
    pub async fn record_board(
        &self,
        game_id: &str,
        board: &Board,
    ) -> Result<Game, GameServiceError> {
        let game_id = GameId::parse(game_id)?;
        let winner = BoardService::classify_result(board).ok_or_else(|| {
            GameServiceError::ValidationError("Round is not over".to_string())
        })?;
        self.apply_round(&game_id, winner).await
    }

    pub async fn end_game(&self, game_id: &str) -> Result<Game, GameServiceError> {
        let game_id = GameId::parse(game_id)?;
        let mut game = self.load(&game_id).await?;

        game.end(Utc::now())?;
        self.save(&game).await?;

        debug!(
            "Ended game {} after {} rounds",
            game.id, game.total_rounds
        );
        Ok(game)
    }

    async fn apply_round(
        &self,
        game_id: &GameId,
        winner: RoundWinner,
    ) -> Result<Game, GameServiceError> {
        let mut game = self.load(game_id).await?;

        game.record_round(winner)?;
        self.save(&game).await?;

        debug!(
            "Recorded round {} ({:?}) for game {}",
            game.total_rounds, winner, game.id
        );
        Ok(game)
    }

    async fn load(&self, game_id: &GameId) -> Result<Game, GameServiceError> {
        self.repository
            .get_game(game_id)
            .await?
            .ok_or(GameServiceError::GameNotFound)
    }

    async fn save(&self, game: &Game) -> Result<(), GameServiceError> {
        self.repository.update_game(game).await.map_err(|e| match e {
            GameRepositoryError::NotFound => GameServiceError::GameNotFound,
            _ => {
                error!("Failed to update game {}: {}", game.id, e);
                GameServiceError::RepositoryError(e)
            }
        })
    }

    fn validate_player_names(player1_name: &str, player2_name: &str) -> Result<(), GameServiceError> {
        let name1 = player1_name.trim();
        let name2 = player2_name.trim();

        if name1.is_empty() || name2.is_empty() {
            return Err(GameServiceError::ValidationError(
                "Player names cannot be empty".to_string(),
            ));
        }

        if name1.chars().count() > MAX_PLAYER_NAME_LENGTH
            || name2.chars().count() > MAX_PLAYER_NAME_LENGTH
        {
            return Err(GameServiceError::ValidationError(format!(
                "Player names must be at most {} characters",
                MAX_PLAYER_NAME_LENGTH
            )));
        }

        if name1.to_lowercase() == name2.to_lowercase() {
            return Err(GameServiceError::ValidationError(
                "Players must have different names".to_string(),
            ));
        }

        Ok(())
    }
}
