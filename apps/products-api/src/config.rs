//! Configuration for Products API

use core_config::{AppInfo, FromEnv, app_info, env_optional, env_or_default, server::ServerConfig};
use database::mongodb::MongoConfig;
use domain_products::mongodb::DEFAULT_COLLECTION;
use std::path::PathBuf;

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub mongodb: MongoConfig,
    pub server: ServerConfig,
    pub environment: Environment,
    /// `PRODUCTS_COLLECTION`
    pub collection: String,
    /// `PRODUCTS_SEED_FILE`; when set the collection is replaced at startup
    pub seed_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let app = app_info!();
        let environment = Environment::from_env();
        let mut mongodb = MongoConfig::from_env()?;
        if mongodb.app_name.is_none() {
            mongodb = mongodb.with_app_name(app.name);
        }
        let server = ServerConfig::from_env()?;

        Ok(Self {
            app,
            mongodb,
            server,
            environment,
            collection: env_or_default("PRODUCTS_COLLECTION", DEFAULT_COLLECTION),
            seed_file: env_optional("PRODUCTS_SEED_FILE").map(PathBuf::from),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        temp_env::with_vars(
            [
                ("MONGODB_URL", Some("mongodb://localhost:27017")),
                ("MONGODB_DATABASE", Some("shop")),
                ("MONGODB_APP_NAME", None),
                ("PRODUCTS_COLLECTION", None),
                ("PRODUCTS_SEED_FILE", None),
                ("PORT", None),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.mongodb.database(), "shop");
                assert_eq!(config.mongodb.app_name.as_deref(), Some("products_api"));
                assert_eq!(config.collection, "products");
                assert_eq!(config.seed_file, None);
                assert_eq!(config.server.port, 8080);
            },
        );
    }

    #[test]
    fn test_config_overrides() {
        temp_env::with_vars(
            [
                ("MONGODB_URL", Some("mongodb://db:27017")),
                ("MONGODB_DATABASE", Some("shop")),
                ("PRODUCTS_COLLECTION", Some("catalog")),
                ("PRODUCTS_SEED_FILE", Some("data/products.json")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.collection, "catalog");
                assert_eq!(config.seed_file, Some(PathBuf::from("data/products.json")));
            },
        );
    }

    #[test]
    fn test_config_requires_database_url() {
        temp_env::with_vars_unset(["MONGODB_URL", "MONGO_URL"], || {
            let err = Config::from_env().unwrap_err();
            assert!(err.to_string().contains("MONGODB_URL"));
        });
    }
}
