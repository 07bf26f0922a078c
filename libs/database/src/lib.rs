//! MongoDB connection management
//!
//! - [`mongodb`]: configuration, connection with retry, health checks
//! - [`retry`]: exponential backoff for fallible async operations
//!
//! # Features
//!
//! - `config` - load [`mongodb::MongoConfig`] from the environment via `core_config::FromEnv`
//!
//! # Example
//!
//! ```ignore
//! use core_config::FromEnv;
//! use database::mongodb::{MongoConfig, connect_with_retry};
//!
//! let config = MongoConfig::from_env()?;
//! let client = connect_with_retry(&config, None).await?;
//! let db = client.database(config.database());
//! ```

pub mod mongodb;
pub mod retry;

pub use retry::{RetryConfig, retry_with_backoff};
