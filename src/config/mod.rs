//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `GITHUB_SHOWCASE` prefix and nested values use double underscores as separators.
//! Every value has a default, so an empty environment yields a working setup.
//!
//! # Example
//!
//! ```no_run
//! use github_showcase::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Showing {}", config.github.username);
//! ```

mod cache;
mod error;
mod github;
mod logging;

pub use cache::{CacheBackend, CacheConfig};
pub use error::{ConfigError, ValidationError};
pub use github::GitHubConfig;
pub use logging::{LogFormat, LoggingConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// GitHub account and API settings
    #[serde(default)]
    pub github: GitHubConfig,

    /// Snapshot cache backend
    #[serde(default)]
    pub cache: CacheConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `GITHUB_SHOWCASE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `GITHUB_SHOWCASE__GITHUB__USERNAME=octocat` -> `github.username = octocat`
    /// - `GITHUB_SHOWCASE__CACHE__BACKEND=redis` -> `cache.backend = redis`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("GITHUB_SHOWCASE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.github.validate()?;
        self.cache.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "GITHUB_SHOWCASE__GITHUB__USERNAME",
        "GITHUB_SHOWCASE__GITHUB__TIMEOUT_SECS",
        "GITHUB_SHOWCASE__CACHE__BACKEND",
        "GITHUB_SHOWCASE__CACHE__REDIS_URL",
        "GITHUB_SHOWCASE__CACHE__FORCE_REFRESH",
        "GITHUB_SHOWCASE__LOGGING__FORMAT",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.github.username, "Riyad6950");
        assert_eq!(config.cache.backend, CacheBackend::File);
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("GITHUB_SHOWCASE__GITHUB__USERNAME", "octocat");
        env::set_var("GITHUB_SHOWCASE__GITHUB__TIMEOUT_SECS", "10");
        env::set_var("GITHUB_SHOWCASE__CACHE__BACKEND", "redis");
        env::set_var("GITHUB_SHOWCASE__CACHE__REDIS_URL", "redis://localhost:6379");
        env::set_var("GITHUB_SHOWCASE__CACHE__FORCE_REFRESH", "true");
        env::set_var("GITHUB_SHOWCASE__LOGGING__FORMAT", "json");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.github.username, "octocat");
        assert_eq!(config.github.timeout_secs, 10);
        assert_eq!(config.cache.backend, CacheBackend::Redis);
        assert_eq!(config.cache.redis_url.as_deref(), Some("redis://localhost:6379"));
        assert!(config.cache.force_refresh);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_redis_backend_without_url() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("GITHUB_SHOWCASE__CACHE__BACKEND", "redis");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingRequired(_))
        ));
    }

    #[test]
    fn test_unknown_backend_fails_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("GITHUB_SHOWCASE__CACHE__BACKEND", "memcached");
        let result = AppConfig::load();
        clear_env();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }
}
