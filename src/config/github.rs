//! GitHub API configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::adapters::github::GitHubRestConfig;

/// GitHub account and API settings
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubConfig {
    /// Account whose profile is shown
    #[serde(default = "default_username")]
    pub username: String,

    /// REST API base URL
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// User-Agent override; the crate name and version are used when unset
    pub user_agent: Option<String>,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl GitHubConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Builds the HTTP adapter configuration.
    pub fn to_rest_config(&self) -> GitHubRestConfig {
        let config = GitHubRestConfig::default()
            .with_base_url(self.api_base_url.clone())
            .with_timeout(self.timeout());

        match &self.user_agent {
            Some(agent) if !agent.trim().is_empty() => config.with_user_agent(agent.clone()),
            _ => config,
        }
    }

    /// Validate GitHub configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.username.trim().is_empty() {
            return Err(ValidationError::MissingRequired("GITHUB_USERNAME"));
        }
        if !self.api_base_url.starts_with("https://") && !self.api_base_url.starts_with("http://") {
            return Err(ValidationError::InvalidApiBaseUrl);
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            username: default_username(),
            api_base_url: default_api_base_url(),
            user_agent: None,
            timeout_secs: default_timeout(),
        }
    }
}

fn default_username() -> String {
    "Riyad6950".to_string()
}

fn default_api_base_url() -> String {
    "https://api.github.com".to_string()
}

fn default_timeout() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_github_config_defaults() {
        let config = GitHubConfig::default();
        assert_eq!(config.username, "Riyad6950");
        assert_eq!(config.api_base_url, "https://api.github.com");
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_empty_username() {
        let config = GitHubConfig {
            username: "  ".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("GITHUB_USERNAME"))
        );
    }

    #[test]
    fn test_validation_base_url_scheme() {
        let config = GitHubConfig {
            api_base_url: "ftp://api.github.com".to_string(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidApiBaseUrl));
    }

    #[test]
    fn test_validation_zero_timeout() {
        let config = GitHubConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidTimeout));
    }

    #[test]
    fn test_rest_config_carries_overrides() {
        let config = GitHubConfig {
            api_base_url: "http://localhost:8080/".to_string(),
            user_agent: Some("showcase-test".to_string()),
            timeout_secs: 5,
            ..Default::default()
        };

        let rest = config.to_rest_config();
        assert_eq!(rest.base_url, "http://localhost:8080");
        assert_eq!(rest.user_agent, "showcase-test");
        assert_eq!(rest.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_rest_config_keeps_default_user_agent() {
        let rest = GitHubConfig::default().to_rest_config();
        assert!(rest.user_agent.starts_with("github-showcase/"));
    }
}
