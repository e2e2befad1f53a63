//! Snapshot cache configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where cached snapshots are kept
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CacheBackend {
    /// Process memory; lost on exit
    Memory,
    /// One JSON file per key under `directory`
    #[default]
    File,
    /// A Redis server at `redis_url`
    Redis,
}

/// Cache configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    #[serde(default)]
    pub backend: CacheBackend,

    /// Directory for the file backend
    #[serde(default = "default_directory")]
    pub directory: PathBuf,

    /// Connection URL for the Redis backend
    pub redis_url: Option<String>,

    /// Ignore any fresh entry and fetch anew
    #[serde(default)]
    pub force_refresh: bool,
}

impl CacheConfig {
    /// Validate cache configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.backend != CacheBackend::Redis {
            return Ok(());
        }
        match self.redis_url.as_deref() {
            None | Some("") => Err(ValidationError::MissingRequired("CACHE_REDIS_URL")),
            Some(url) if !url.starts_with("redis://") && !url.starts_with("rediss://") => {
                Err(ValidationError::InvalidRedisUrl)
            }
            Some(_) => Ok(()),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            backend: CacheBackend::default(),
            directory: default_directory(),
            redis_url: None,
            force_refresh: false,
        }
    }
}

fn default_directory() -> PathBuf {
    PathBuf::from(".cache/github-showcase")
}
