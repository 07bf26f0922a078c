use mongodb::{Client, bson::doc, options::ClientOptions};
use tracing::info;

use super::MongoConfig;
use crate::retry::{RetryConfig, retry_with_backoff};

/// Error type for MongoDB connection setup
#[derive(Debug, thiserror::Error)]
pub enum MongoError {
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
}

/// Connect using a MongoConfig and verify the server answers a ping
pub async fn connect(config: &MongoConfig) -> Result<Client, MongoError> {
    info!("Attempting to connect to MongoDB at {}", config.url);

    let mut options = ClientOptions::parse(&config.url).await?;
    config.apply_to(&mut options);

    let client = Client::with_options(options)?;

    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(|e| MongoError::ConnectionFailed(e.to_string()))?;

    info!("Successfully connected to MongoDB");
    Ok(client)
}

/// Connect with exponential backoff; `None` uses [`RetryConfig::default`]
///
/// ```ignore
/// use database::{RetryConfig, mongodb::{MongoConfig, connect_with_retry}};
///
/// let config = MongoConfig {
///     url: "mongodb://localhost:27017".to_string(),
///     database: "shop".to_string(),
///     ..MongoConfig::default()
/// };
/// let retry = RetryConfig { max_retries: 10, ..RetryConfig::default() };
/// let client = connect_with_retry(&config, Some(retry)).await?;
/// ```
pub async fn connect_with_retry(
    config: &MongoConfig,
    retry_config: Option<RetryConfig>,
) -> Result<Client, MongoError> {
    retry_with_backoff(|| connect(config), retry_config.unwrap_or_default()).await
}
