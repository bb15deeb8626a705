use thiserror::Error;

pub const DEFAULT_ENVIRONMENT: &str = "development";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} environment variable must be set")]
    Missing(&'static str),
    #[error("{key} has an invalid value: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub games_table: String,
    pub dynamodb_endpoint: Option<String>,
    pub environment: String,
    /// When set, serve over plain TCP instead of the Lambda runtime.
    pub port: Option<u16>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let games_table = non_empty("GAMES_TABLE").ok_or(ConfigError::Missing("GAMES_TABLE"))?;

        let port = match non_empty("PORT") {
            Some(raw) => Some(raw.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                key: "PORT",
                value: raw,
            })?),
            None => None,
        };

        Ok(AppConfig {
            games_table,
            dynamodb_endpoint: non_empty("DYNAMODB_ENDPOINT"),
            environment: non_empty("APP_ENV").unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string()),
            port,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_minimal_config() {
        let config = config_from(&[("GAMES_TABLE", "games")]).unwrap();

        assert_eq!(config.games_table, "games");
        assert_eq!(config.dynamodb_endpoint, None);
        assert_eq!(config.environment, DEFAULT_ENVIRONMENT);
        assert_eq!(config.port, None);
    }

    #[test]
    fn test_full_config() {
        let config = config_from(&[
            ("GAMES_TABLE", "games-prod"),
            ("DYNAMODB_ENDPOINT", "http://localhost:8000"),
            ("APP_ENV", "production"),
            ("PORT", "5000"),
        ])
        .unwrap();

        assert_eq!(config.dynamodb_endpoint.as_deref(), Some("http://localhost:8000"));
        assert_eq!(config.environment, "production");
        assert_eq!(config.port, Some(5000));
    }

    #[test]
    fn test_missing_table() {
        assert_eq!(config_from(&[]), Err(ConfigError::Missing("GAMES_TABLE")));
        assert_eq!(
            config_from(&[("GAMES_TABLE", "  ")]),
            Err(ConfigError::Missing("GAMES_TABLE"))
        );
    }

    #[test]
    fn test_invalid_port() {
        assert_eq!(
            config_from(&[("GAMES_TABLE", "games"), ("PORT", "http")]),
            Err(ConfigError::Invalid {
                key: "PORT",
                value: "http".to_string()
            })
        );
    }
}
