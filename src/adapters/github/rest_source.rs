//! GitHub REST Source - Implementation of ProfileSource over the public API.
//!
//! Requests are unauthenticated, so they fall under GitHub's anonymous
//! rate limit. Callers are expected to cache what they get back.
//!
//! # Configuration
//!
//! ```ignore
//! let config = GitHubRestConfig::default()
//!     .with_base_url("https://api.github.com")
//!     .with_timeout(Duration::from_secs(10));
//!
//! let source = GitHubRestSource::new(config)?;
//! ```

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use super::wire_types::{GitHubEvent, GitHubFollower, GitHubLanguages, GitHubRepo, GitHubUser};
use crate::domain::github::{
    AccountProfile, FollowerRef, LanguageBreakdown, PublicEvent, RepositoryListing,
};
use crate::ports::{ProfileSource, SourceError};

/// Media type GitHub recommends for REST v3 requests.
const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// Configuration for the GitHub REST source.
#[derive(Debug, Clone)]
pub struct GitHubRestConfig {
    /// Base URL for the API (default: https://api.github.com).
    pub base_url: String,
    /// User-Agent header; GitHub rejects requests without one.
    pub user_agent: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for GitHubRestConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.github.com".to_string(),
            user_agent: concat!("github-showcase/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl GitHubRestConfig {
    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Sets the User-Agent header value.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// GitHub REST API source.
pub struct GitHubRestSource {
    config: GitHubRestConfig,
    client: Client,
}

impl GitHubRestSource {
    /// Creates a new source with the given configuration.
    pub fn new(config: GitHubRestConfig) -> Result<Self, SourceError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));

        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| SourceError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn user_url(&self, username: &str) -> String {
        format!("{}/users/{}", self.config.base_url, username)
    }

    fn repos_url(&self, username: &str, per_page: usize) -> String {
        format!(
            "{}/repos?sort=updated&per_page={}",
            self.user_url(username),
            per_page
        )
    }

    fn events_url(&self, username: &str, per_page: usize) -> String {
        format!("{}/events/public?per_page={}", self.user_url(username), per_page)
    }

    fn followers_url(&self, username: &str, per_page: usize) -> String {
        format!("{}/followers?per_page={}", self.user_url(username), per_page)
    }

    /// Sends a GET request, mapping transport failures.
    async fn send(&self, url: &str) -> Result<Response, SourceError> {
        debug!(url, "GET");

        self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                SourceError::Timeout {
                    timeout_secs: self.config.timeout.as_secs(),
                }
            } else if e.is_connect() {
                SourceError::network(format!("Connection failed: {}", e))
            } else {
                SourceError::network(e.to_string())
            }
        })
    }

    /// Fetches `url` and decodes a successful JSON body into `T`.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, SourceError> {
        let response = self.send(url).await?;
        let status = response.status();

        if !status.is_success() {
            return Err(SourceError::unexpected_status(status.as_u16(), url));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| SourceError::network(format!("Failed to read body: {}", e)))?;

        serde_json::from_slice(&body)
            .map_err(|e| SourceError::malformed(format!("{}: {}", url, e)))
    }
}

#[async_trait]
impl ProfileSource for GitHubRestSource {
    async fn fetch_profile(&self, username: &str) -> Result<AccountProfile, SourceError> {
        let user: GitHubUser = self.get_json(&self.user_url(username)).await?;
        Ok(user.into())
    }

    async fn fetch_repositories(
        &self,
        username: &str,
        per_page: usize,
    ) -> Result<Vec<RepositoryListing>, SourceError> {
        let repos: Vec<GitHubRepo> = self.get_json(&self.repos_url(username, per_page)).await?;
        Ok(repos.into_iter().map(RepositoryListing::from).collect())
    }

    async fn fetch_events(
        &self,
        username: &str,
        per_page: usize,
    ) -> Result<Vec<PublicEvent>, SourceError> {
        let events: Vec<GitHubEvent> = self.get_json(&self.events_url(username, per_page)).await?;
        events.into_iter().map(PublicEvent::try_from).collect()
    }

    async fn fetch_followers(
        &self,
        username: &str,
        per_page: usize,
    ) -> Result<Vec<FollowerRef>, SourceError> {
        let followers: Vec<GitHubFollower> =
            self.get_json(&self.followers_url(username, per_page)).await?;
        Ok(followers.into_iter().map(FollowerRef::from).collect())
    }

    async fn fetch_languages(
        &self,
        repository: &RepositoryListing,
    ) -> Result<LanguageBreakdown, SourceError> {
        let languages: GitHubLanguages = self.get_json(&repository.languages_url).await?;
        Ok(languages.into())
    }
}

impl std::fmt::Debug for GitHubRestSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubRestSource")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> GitHubRestSource {
        GitHubRestSource::new(
            GitHubRestConfig::default().with_base_url("https://api.example.test/"),
        )
        .unwrap()
    }

    #[test]
    fn default_config_targets_public_api() {
        let config = GitHubRestConfig::default();
        assert_eq!(config.base_url, "https://api.github.com");
        assert!(config.user_agent.starts_with("github-showcase/"));
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        assert_eq!(source().config.base_url, "https://api.example.test");
    }

    #[test]
    fn endpoint_urls_carry_paging_parameters() {
        let source = source();
        assert_eq!(
            source.user_url("octocat"),
            "https://api.example.test/users/octocat"
        );
        assert_eq!(
            source.repos_url("octocat", 6),
            "https://api.example.test/users/octocat/repos?sort=updated&per_page=6"
        );
        assert_eq!(
            source.events_url("octocat", 10),
            "https://api.example.test/users/octocat/events/public?per_page=10"
        );
        assert_eq!(
            source.followers_url("octocat", 5),
            "https://api.example.test/users/octocat/followers?per_page=5"
        );
    }

    #[tokio::test]
    async fn unreachable_host_is_a_network_error() {
        let source = GitHubRestSource::new(
            GitHubRestConfig::default()
                .with_base_url("http://127.0.0.1:9")
                .with_timeout(Duration::from_secs(2)),
        )
        .unwrap();

        let result = source.fetch_profile("octocat").await;
        assert!(matches!(
            result,
            Err(SourceError::Network(_)) | Err(SourceError::Timeout { .. })
        ));
    }
}
