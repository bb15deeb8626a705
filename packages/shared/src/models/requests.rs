use serde::Deserialize;
use serde_json::Value;

use crate::models::board::Board;
use crate::services::errors::game_service_errors::GameServiceError;

/// Body of `POST /api/games`. Names stay untyped so non-string values can be
/// reported as a validation failure rather than a parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameRequest {
    #[serde(default)]
    pub player1_name: Option<Value>,
    #[serde(default)]
    pub player2_name: Option<Value>,
}

impl CreateGameRequest {
    pub fn into_names(self) -> Result<(String, String), GameServiceError> {
        match (self.player1_name, self.player2_name) {
            (Some(Value::String(name1)), Some(Value::String(name2))) => Ok((name1, name2)),
            (None | Some(Value::Null), _) | (_, None | Some(Value::Null)) => {
                Err(GameServiceError::ValidationError(
                    "Both player1Name and player2Name are required".to_string(),
                ))
            }
            _ => Err(GameServiceError::ValidationError(
                "Player names must be strings".to_string(),
            )),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateRoundRequest {
    #[serde(default)]
    pub winner: Option<String>,
}

impl UpdateRoundRequest {
    pub fn into_winner(self) -> Result<String, GameServiceError> {
        self.winner
            .ok_or_else(|| GameServiceError::ValidationError("Winner is required".to_string()))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubmitBoardRequest {
    pub board: Board,
}
