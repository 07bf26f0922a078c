#[cfg(feature = "config")]
use core_config::{ConfigError, FromEnv, env_first, env_parse_or};
use mongodb::options::ClientOptions;
use std::time::Duration;

/// MongoDB connection settings
///
/// ```ignore
/// use database::mongodb::MongoConfig;
///
/// let config = MongoConfig {
///     url: "mongodb://localhost:27017".to_string(),
///     database: "shop".to_string(),
///     ..MongoConfig::default()
/// }
/// .with_app_name("products-api");
/// ```
#[derive(Clone, Debug)]
pub struct MongoConfig {
    /// Format: mongodb://[username:password@]host[:port][/database][?options]
    pub url: String,
    pub database: String,
    /// Reported to the server in connection handshakes
    pub app_name: Option<String>,
    pub max_pool_size: u32,
    pub min_pool_size: u32,
    pub connect_timeout_secs: u64,
    pub server_selection_timeout_secs: u64,
}

impl MongoConfig {
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    /// Apply pool, timeout and app-name settings on top of options parsed from the URL
    pub fn apply_to(&self, options: &mut ClientOptions) {
        options.max_pool_size = Some(self.max_pool_size);
        options.min_pool_size = Some(self.min_pool_size);
        options.connect_timeout = Some(Duration::from_secs(self.connect_timeout_secs));
        options.server_selection_timeout =
            Some(Duration::from_secs(self.server_selection_timeout_secs));
        if let Some(ref app_name) = self.app_name {
            options.app_name = Some(app_name.clone());
        }
    }
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            url: "mongodb://localhost:27017".to_string(),
            database: "default".to_string(),
            app_name: None,
            max_pool_size: 100,
            min_pool_size: 5,
            connect_timeout_secs: 10,
            server_selection_timeout_secs: 30,
        }
    }
}

/// Environment variables:
/// - `MONGODB_URL` or `MONGO_URL` (required)
/// - `MONGODB_DATABASE` or `MONGO_DATABASE` (required)
/// - `MONGODB_APP_NAME` (optional)
/// - `MONGODB_MAX_POOL_SIZE` (default: 100), `MONGODB_MIN_POOL_SIZE` (default: 5)
/// - `MONGODB_CONNECT_TIMEOUT_SECS` (default: 10)
/// - `MONGODB_SERVER_SELECTION_TIMEOUT_SECS` (default: 30)
#[cfg(feature = "config")]
impl FromEnv for MongoConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            url: env_first(&["MONGODB_URL", "MONGO_URL"])?,
            database: env_first(&["MONGODB_DATABASE", "MONGO_DATABASE"])?,
            app_name: std::env::var("MONGODB_APP_NAME").ok(),
            max_pool_size: env_parse_or("MONGODB_MAX_POOL_SIZE", defaults.max_pool_size)?,
            min_pool_size: env_parse_or("MONGODB_MIN_POOL_SIZE", defaults.min_pool_size)?,
            connect_timeout_secs: env_parse_or(
                "MONGODB_CONNECT_TIMEOUT_SECS",
                defaults.connect_timeout_secs,
            )?,
            server_selection_timeout_secs: env_parse_or(
                "MONGODB_SERVER_SELECTION_TIMEOUT_SECS",
                defaults.server_selection_timeout_secs,
            )?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mongo_config_defaults() {
        let config = MongoConfig::default();
        assert_eq!(config.url, "mongodb://localhost:27017");
        assert_eq!(config.database(), "default");
        assert_eq!(config.max_pool_size, 100);
        assert_eq!(config.min_pool_size, 5);
        assert!(config.app_name.is_none());
    }

    #[test]
    fn test_mongo_config_with_app_name() {
        let config = MongoConfig::default().with_app_name("products-api");
        assert_eq!(config.app_name.as_deref(), Some("products-api"));
    }

    #[test]
    fn test_apply_to_overrides_pool_and_timeouts() {
        let config = MongoConfig {
            max_pool_size: 20,
            connect_timeout_secs: 3,
            ..MongoConfig::default()
        }
        .with_app_name("products-api");

        let mut options = ClientOptions::default();
        config.apply_to(&mut options);

        assert_eq!(options.max_pool_size, Some(20));
        assert_eq!(options.min_pool_size, Some(5));
        assert_eq!(options.connect_timeout, Some(Duration::from_secs(3)));
        assert_eq!(options.app_name.as_deref(), Some("products-api"));
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_mongo_config_from_env() {
        temp_env::with_vars(
            [
                ("MONGODB_URL", Some("mongodb://localhost:27017")),
                ("MONGODB_DATABASE", Some("shop")),
                ("MONGODB_MAX_POOL_SIZE", Some("10")),
            ],
            || {
                let config = MongoConfig::from_env().unwrap();
                assert_eq!(config.url, "mongodb://localhost:27017");
                assert_eq!(config.database, "shop");
                assert_eq!(config.max_pool_size, 10);
                assert_eq!(config.min_pool_size, 5);
            },
        );
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_mongo_config_from_env_fallback_names() {
        temp_env::with_vars(
            [
                ("MONGODB_URL", None::<&str>),
                ("MONGO_URL", Some("mongodb://fallback:27017")),
                ("MONGODB_DATABASE", None::<&str>),
                ("MONGO_DATABASE", Some("fallbackdb")),
            ],
            || {
                let config = MongoConfig::from_env().unwrap();
                assert_eq!(config.url, "mongodb://fallback:27017");
                assert_eq!(config.database, "fallbackdb");
            },
        );
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_mongo_config_from_env_missing_url() {
        temp_env::with_vars(
            [
                ("MONGODB_URL", None::<&str>),
                ("MONGO_URL", None::<&str>),
                ("MONGODB_DATABASE", Some("shop")),
            ],
            || {
                let err = MongoConfig::from_env().unwrap_err();
                assert!(err.to_string().contains("MONGODB_URL"));
            },
        );
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_mongo_config_from_env_bad_pool_size() {
        temp_env::with_vars(
            [
                ("MONGODB_URL", Some("mongodb://localhost:27017")),
                ("MONGODB_DATABASE", Some("shop")),
                ("MONGODB_MAX_POOL_SIZE", Some("lots")),
            ],
            || {
                let err = MongoConfig::from_env().unwrap_err();
                assert!(err.to_string().contains("MONGODB_MAX_POOL_SIZE"));
            },
        );
    }
}
