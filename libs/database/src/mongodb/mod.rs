//! MongoDB connector and health checks

mod config;
mod connector;
mod health;

pub use config::MongoConfig;
pub use connector::{MongoError, connect, connect_with_retry};
pub use health::ping;

// Re-export MongoDB types for convenience
pub use mongodb::{Client, Collection, Database};
