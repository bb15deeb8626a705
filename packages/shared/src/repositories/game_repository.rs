use async_trait::async_trait;
use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use serde_dynamo::{from_item, from_items, to_item};
use tracing::debug;

use crate::models::game::{Game, GameId};
use crate::repositories::errors::game_repository_errors::GameRepositoryError;

#[cfg(test)]
use mockall::automock;

pub struct DynamoDbGameRepository {
    pub client: Client,
    pub table_name: String,
}

impl DynamoDbGameRepository {
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait GameRepository: Send + Sync {
    async fn create_game(&self, game: &Game) -> Result<(), GameRepositoryError>;

    async fn get_game(&self, game_id: &GameId) -> Result<Option<Game>, GameRepositoryError>;

    /// Overwrites an existing record. Fails with `NotFound` if the record is gone.
    async fn update_game(&self, game: &Game) -> Result<(), GameRepositoryError>;

    /// Every stored game, in no particular order.
    async fn list_games(&self) -> Result<Vec<Game>, GameRepositoryError>;
}

#[async_trait]
impl GameRepository for DynamoDbGameRepository {
    async fn create_game(&self, game: &Game) -> Result<(), GameRepositoryError> {
        let item = to_item(game).map_err(|e| GameRepositoryError::Serialization(e.to_string()))?;

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .condition_expression("attribute_not_exists(id)")
            .send()
            .await
            .map_err(|e| GameRepositoryError::DynamoDb(e.to_string()))?;

        debug!("Stored game {}", game.id);
        Ok(())
    }

    async fn get_game(&self, game_id: &GameId) -> Result<Option<Game>, GameRepositoryError> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("id", AttributeValue::S(game_id.to_string()))
            .send()
            .await
            .map_err(|e| GameRepositoryError::DynamoDb(e.to_string()))?;

        match output.item {
            Some(item) => {
                let game: Game = from_item(item)
                    .map_err(|e| GameRepositoryError::Serialization(e.to_string()))?;
                Ok(Some(game))
            }
            None => Ok(None),
        }
    }

    async fn update_game(&self, game: &Game) -> Result<(), GameRepositoryError> {
        let item = to_item(game).map_err(|e| GameRepositoryError::Serialization(e.to_string()))?;

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .condition_expression("attribute_exists(id)")
            .send()
            .await
            .map_err(update_error)?;

        Ok(())
    }

    async fn list_games(&self) -> Result<Vec<Game>, GameRepositoryError> {
        let items = self
            .client
            .scan()
            .table_name(&self.table_name)
            .into_paginator()
            .items()
            .send()
            .collect::<Result<Vec<_>, _>>()
            .await
            .map_err(|e| GameRepositoryError::DynamoDb(e.to_string()))?;

        debug!("Scanned {} games from {}", items.len(), self.table_name);
        from_items(items).map_err(|e| GameRepositoryError::Serialization(e.to_string()))
    }
}

/// A failed `attribute_exists(id)` guard means the record is gone.
fn update_error<R: std::fmt::Debug>(err: SdkError<PutItemError, R>) -> GameRepositoryError {
    match err.as_service_error() {
        Some(e) if e.is_conditional_check_failed_exception() => GameRepositoryError::NotFound,
        _ => GameRepositoryError::DynamoDb(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_dynamodb::types::error::ConditionalCheckFailedException;

    #[test]
    fn test_failed_existence_check_maps_to_not_found() {
        let err = SdkError::service_error(
            PutItemError::ConditionalCheckFailedException(
                ConditionalCheckFailedException::builder()
                    .message("The conditional request failed")
                    .build(),
            ),
            (),
        );

        assert!(matches!(update_error(err), GameRepositoryError::NotFound));
    }

    #[test]
    fn test_other_update_failures_stay_opaque() {
        let err: SdkError<PutItemError, ()> = SdkError::timeout_error("request timed out");

        assert!(matches!(update_error(err), GameRepositoryError::DynamoDb(_)));
    }

    #[test]
    fn test_game_item_layout() {
        let game = Game::new("Alice", "Bob");

        let item: std::collections::HashMap<String, AttributeValue> = to_item(&game).unwrap();

        assert_eq!(item.get("id"), Some(&AttributeValue::S(game.id.to_string())));
        assert_eq!(item.get("isActive"), Some(&AttributeValue::Bool(true)));
        assert_eq!(item.get("totalRounds"), Some(&AttributeValue::N("0".to_string())));
        assert!(item.contains_key("createdAt"));
        assert!(!item.contains_key("endedAt"));

        let restored: Game = from_item(item).unwrap();
        assert_eq!(restored, game);
    }
}
