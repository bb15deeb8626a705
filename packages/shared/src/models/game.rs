use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

pub const GAME_ID_LENGTH: usize = 32;
pub const MAX_PLAYER_NAME_LENGTH: usize = 50;

/// Primary key of a game record: 32 lowercase hex digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid game ID format")]
pub struct InvalidGameId;

impl GameId {
    pub fn generate() -> Self {
        GameId(Uuid::new_v4().simple().to_string())
    }

    pub fn parse(raw: &str) -> Result<Self, InvalidGameId> {
        if raw.len() != GAME_ID_LENGTH || !raw.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(InvalidGameId);
        }
        Ok(GameId(raw.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundWinner {
    Player1,
    Player2,
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Winner must be either \"player1\", \"player2\", or \"draw\"")]
pub struct InvalidRoundWinner;

impl FromStr for RoundWinner {
    type Err = InvalidRoundWinner;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "player1" => Ok(RoundWinner::Player1),
            "player2" => Ok(RoundWinner::Player2),
            "draw" => Ok(RoundWinner::Draw),
            _ => Err(InvalidRoundWinner),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl Player {
    pub fn new(name: &str) -> Self {
        Player {
            name: name.trim().to_string(),
            ..Default::default()
        }
    }

    pub fn rounds_played(&self) -> u32 {
        self.wins + self.losses + self.draws
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Created,
    RoundRecorded,
    Ended,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("Cannot update an inactive game")]
    InactiveGame,
    #[error("Game is already ended")]
    AlreadyEnded,
    #[error("Round limit reached")]
    RoundLimitReached,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: GameId,
    pub player1: Player,
    pub player2: Player,
    pub total_rounds: u32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<DateTime<Utc>>,
}

impl Game {
    /// Builds a fresh, active game. Names are trimmed but not validated here.
    pub fn new(player1_name: &str, player2_name: &str) -> Self {
        Game {
            id: GameId::generate(),
            player1: Player::new(player1_name),
            player2: Player::new(player2_name),
            total_rounds: 0,
            is_active: true,
            created_at: Utc::now(),
            ended_at: None,
        }
    }

    pub fn status(&self) -> GameStatus {
        match (self.is_active, self.total_rounds) {
            (false, _) => GameStatus::Ended,
            (true, 0) => GameStatus::Created,
            (true, _) => GameStatus::RoundRecorded,
        }
    }

    /// Leaves the record untouched when the game is no longer active.
    pub fn record_round(&mut self, winner: RoundWinner) -> Result<(), TransitionError> {
        if !self.is_active {
            return Err(TransitionError::InactiveGame);
        }

        self.total_rounds = self
            .total_rounds
            .checked_add(1)
            .ok_or(TransitionError::RoundLimitReached)?;

        // Per-player counters never exceed total_rounds on a consistent record.
        match winner {
            RoundWinner::Player1 => {
                self.player1.wins = self.player1.wins.saturating_add(1);
                self.player2.losses = self.player2.losses.saturating_add(1);
            }
            RoundWinner::Player2 => {
                self.player2.wins = self.player2.wins.saturating_add(1);
                self.player1.losses = self.player1.losses.saturating_add(1);
            }
            RoundWinner::Draw => {
                self.player1.draws = self.player1.draws.saturating_add(1);
                self.player2.draws = self.player2.draws.saturating_add(1);
            }
        }
        Ok(())
    }

    pub fn end(&mut self, ended_at: DateTime<Utc>) -> Result<(), TransitionError> {
        if !self.is_active {
            return Err(TransitionError::AlreadyEnded);
        }

        self.is_active = false;
        self.ended_at = Some(ended_at);
        Ok(())
    }
}
