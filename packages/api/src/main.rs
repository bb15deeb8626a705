use lambda_http::tracing::{info, Level};
use lambda_http::{run, Error};
use std::env::set_var;
use std::sync::Arc;

use api::{app, state::AppState};
use shared::config::AppConfig;
use shared::repositories::game_repository::DynamoDbGameRepository;
use shared::services::game_service::GameService;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = AppConfig::from_env()?;

    match config.port {
        Some(_) => tracing_subscriber::fmt().with_max_level(Level::DEBUG).init(),
        None => {
            set_var("AWS_LAMBDA_HTTP_IGNORE_STAGE_IN_PATH", "true");
            // required to enable CloudWatch error logging by the runtime
            lambda_http::tracing::init_default_subscriber();
        }
    }

    // Set up services
    let sdk_config = aws_config::load_from_env().await;
    let mut dynamodb_config = aws_sdk_dynamodb::config::Builder::from(&sdk_config);
    if let Some(endpoint) = &config.dynamodb_endpoint {
        dynamodb_config = dynamodb_config.endpoint_url(endpoint);
    }
    let client = aws_sdk_dynamodb::Client::from_conf(dynamodb_config.build());

    let game_repository = Arc::new(DynamoDbGameRepository::new(client, &config.games_table));
    let game_service = Arc::new(GameService::new(game_repository));

    let app_state = AppState {
        game_service,
        environment: config.environment.clone(),
    };
    let app = app(app_state);

    match config.port {
        Some(port) => {
            let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
            info!("Serving games API on {}", listener.local_addr()?);
            axum::serve(listener, app).await?;
            Ok(())
        }
        None => {
            info!("Starting games API on the Lambda runtime");
            run(app).await
        }
    }
}
