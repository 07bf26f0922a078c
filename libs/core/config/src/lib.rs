pub mod server;
pub mod tracing;

use std::env;
use std::str::FromStr;
use thiserror::Error;

/// Configuration error type
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Environment variable '{0}' is required but not set")]
    MissingEnvVar(String),

    #[error("Failed to parse environment variable '{key}': {details}")]
    ParseError { key: String, details: String },
}

/// Application environment
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// `APP_ENV=production` (any case) selects production, anything else development
    pub fn from_env() -> Self {
        let app_env = env_or_default("APP_ENV", "development");

        if app_env.eq_ignore_ascii_case("production") {
            Environment::Production
        } else {
            Environment::Development
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// Name and version reported by health endpoints
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppInfo {
    pub name: &'static str,
    pub version: &'static str,
}

/// Build an [`AppInfo`] from the calling crate's Cargo metadata
#[macro_export]
macro_rules! app_info {
    () => {
        $crate::AppInfo {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        }
    };
}

/// Trait for configuration that can be loaded from environment variables
pub trait FromEnv: Sized {
    fn from_env() -> Result<Self, ConfigError>;
}

/// Value of `key`, or `default` when unset
pub fn env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Value of the first set variable among `keys`
pub fn env_first(keys: &[&str]) -> Result<String, ConfigError> {
    keys.iter()
        .find_map(|key| env::var(key).ok())
        .ok_or_else(|| ConfigError::MissingEnvVar(keys.join(" or ")))
}

/// Parse `key` into `T`, falling back to `default` when unset
pub fn env_parse_or<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.parse().map_err(|e: T::Err| ConfigError::ParseError {
            key: key.to_string(),
            details: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}

/// `Some(value)` when `key` is set to a non-empty value
pub fn env_optional(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_defaults_to_development() {
        temp_env::with_var_unset("APP_ENV", || {
            let env = Environment::from_env();
            assert_eq!(env, Environment::Development);
            assert!(!env.is_production());
        });
    }

    #[test]
    fn test_environment_production_case_insensitive() {
        for value in ["production", "PRODUCTION", "Production"] {
            temp_env::with_var("APP_ENV", Some(value), || {
                assert_eq!(Environment::from_env(), Environment::Production);
            });
        }
    }

    #[test]
    fn test_environment_unknown_defaults_to_development() {
        temp_env::with_var("APP_ENV", Some("staging"), || {
            assert_eq!(Environment::from_env(), Environment::Development);
        });
    }

    #[test]
    fn test_env_first_prefers_earlier_keys() {
        temp_env::with_vars([("FIRST_KEY", Some("one")), ("SECOND_KEY", Some("two"))], || {
            assert_eq!(env_first(&["FIRST_KEY", "SECOND_KEY"]).unwrap(), "one");
        });
        temp_env::with_vars([("FIRST_KEY", None), ("SECOND_KEY", Some("two"))], || {
            assert_eq!(env_first(&["FIRST_KEY", "SECOND_KEY"]).unwrap(), "two");
        });
    }

    #[test]
    fn test_env_first_names_all_keys_when_missing() {
        temp_env::with_vars_unset(["FIRST_KEY", "SECOND_KEY"], || {
            let err = env_first(&["FIRST_KEY", "SECOND_KEY"]).unwrap_err();
            assert!(err.to_string().contains("FIRST_KEY or SECOND_KEY"));
        });
    }

    #[test]
    fn test_env_parse_or() {
        temp_env::with_var_unset("POOL_SIZE", || {
            assert_eq!(env_parse_or("POOL_SIZE", 7u32).unwrap(), 7);
        });
        temp_env::with_var("POOL_SIZE", Some("12"), || {
            assert_eq!(env_parse_or("POOL_SIZE", 7u32).unwrap(), 12);
        });
        temp_env::with_var("POOL_SIZE", Some("twelve"), || {
            let err = env_parse_or("POOL_SIZE", 7u32).unwrap_err();
            assert!(err.to_string().contains("POOL_SIZE"));
        });
    }

    #[test]
    fn test_env_optional_ignores_blank() {
        temp_env::with_var("SEED_FILE", Some("  "), || {
            assert_eq!(env_optional("SEED_FILE"), None);
        });
        temp_env::with_var("SEED_FILE", Some("data.json"), || {
            assert_eq!(env_optional("SEED_FILE").as_deref(), Some("data.json"));
        });
    }

    #[test]
    fn test_app_info_macro() {
        let info = app_info!();
        assert_eq!(info.name, "core_config");
        assert!(!info.version.is_empty());
    }
}
