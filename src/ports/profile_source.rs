//! Profile Source Port - Interface for the remote GitHub data source.
//!
//! The aggregator only talks to this trait, so tests can substitute an
//! in-process fake and the HTTP adapter stays the single place that knows
//! about URLs and wire formats.
//!
//! # Example
//!
//! ```ignore
//! let source = GitHubRestSource::new(GitHubRestConfig::default())?;
//! let profile = source.fetch_profile("octocat").await?;
//! ```

use async_trait::async_trait;

use crate::domain::github::{
    AccountProfile, FollowerRef, LanguageBreakdown, PublicEvent, RepositoryListing,
};

/// Port for reading an account's public GitHub data.
///
/// Every method is a single read-only request; implementations must not
/// retry or fall back on their own.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    /// Fetch the account record.
    async fn fetch_profile(&self, username: &str) -> Result<AccountProfile, SourceError>;

    /// Fetch up to `per_page` repositories, most recently updated first.
    async fn fetch_repositories(
        &self,
        username: &str,
        per_page: usize,
    ) -> Result<Vec<RepositoryListing>, SourceError>;

    /// Fetch up to `per_page` public events, most recent first.
    async fn fetch_events(
        &self,
        username: &str,
        per_page: usize,
    ) -> Result<Vec<PublicEvent>, SourceError>;

    /// Fetch up to `per_page` followers.
    async fn fetch_followers(
        &self,
        username: &str,
        per_page: usize,
    ) -> Result<Vec<FollowerRef>, SourceError>;

    /// Fetch the language breakdown of one repository.
    async fn fetch_languages(
        &self,
        repository: &RepositoryListing,
    ) -> Result<LanguageBreakdown, SourceError>;
}

/// Errors from the remote data source.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    /// The request could not be sent or the connection failed.
    #[error("network error: {0}")]
    Network(String),

    /// The request did not complete within the configured timeout.
    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// The server answered with a non-success status.
    #[error("unexpected status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The body was not JSON or lacked expected fields.
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl SourceError {
    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a malformed response error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed(message.into())
    }

    /// Creates an unexpected status error.
    pub fn unexpected_status(status: u16, url: impl Into<String>) -> Self {
        Self::UnexpectedStatus {
            status,
            url: url.into(),
        }
    }

    /// True for shape or parse failures, false for transport failures.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unexpected_status_displays_url() {
        let err = SourceError::unexpected_status(404, "https://api.github.com/users/nobody");
        assert_eq!(
            err.to_string(),
            "unexpected status 404 from https://api.github.com/users/nobody"
        );
    }

    #[test]
    fn only_malformed_is_malformed() {
        assert!(SourceError::malformed("missing login").is_malformed());
        assert!(!SourceError::network("reset").is_malformed());
        assert!(!SourceError::Timeout { timeout_secs: 5 }.is_malformed());
    }
}
