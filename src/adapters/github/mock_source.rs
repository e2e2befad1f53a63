//! Mock Profile Source for testing.
//!
//! Provides a configurable in-process implementation of the ProfileSource
//! port, allowing tests to run without calling the GitHub API.
//!
//! # Features
//!
//! - Pre-configured profile, repositories, events and followers
//! - Per-repository language breakdowns and response delays
//! - Error injection per endpoint
//! - Call counting for verifying cache hits
//!
//! # Example
//!
//! ```ignore
//! let source = MockProfileSource::new()
//!     .with_repository(listing, breakdown)
//!     .failing(SourceEndpoint::Followers, SourceError::network("reset"));
//!
//! assert!(source.fetch_followers("octocat", 5).await.is_err());
//! ```

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::foundation::Timestamp;
use crate::domain::github::{
    AccountProfile, EventKind, FollowerRef, LanguageBreakdown, PublicEvent, RepositoryListing,
};
use crate::ports::{ProfileSource, SourceError};

/// The requests a [`ProfileSource`] can serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceEndpoint {
    Profile,
    Repositories,
    Events,
    Followers,
    Languages,
}

/// Mock profile source for testing.
#[derive(Debug, Clone)]
pub struct MockProfileSource {
    profile: AccountProfile,
    repositories: Vec<(RepositoryListing, LanguageBreakdown)>,
    events: Vec<PublicEvent>,
    followers: Vec<FollowerRef>,
    failures: HashMap<SourceEndpoint, SourceError>,
    language_delays: HashMap<String, Duration>,
    calls: Arc<Mutex<Vec<SourceEndpoint>>>,
    language_completions: Arc<Mutex<Vec<String>>>,
}

impl Default for MockProfileSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockProfileSource {
    /// Creates a source for `octocat` with no repositories, events or followers.
    pub fn new() -> Self {
        Self {
            profile: Self::sample_profile("octocat"),
            repositories: Vec::new(),
            events: Vec::new(),
            followers: Vec::new(),
            failures: HashMap::new(),
            language_delays: HashMap::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
            language_completions: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A plausible account record for `login`.
    pub fn sample_profile(login: &str) -> AccountProfile {
        AccountProfile {
            name: Some(format!("{login} (test)")),
            login: login.to_string(),
            avatar_url: format!("https://avatars.example/{login}"),
            bio: Some("Builds things".to_string()),
            public_repos: 12,
            followers: 40,
            following: 7,
            html_url: format!("https://github.com/{login}"),
        }
    }

    /// A repository listing owned by `octocat`.
    pub fn sample_listing(name: &str) -> RepositoryListing {
        RepositoryListing {
            name: name.to_string(),
            description: Some(format!("The {name} project")),
            stargazers_count: 3,
            size_kb: 512,
            html_url: format!("https://github.com/octocat/{name}"),
            languages_url: format!("https://api.github.com/repos/octocat/{name}/languages"),
        }
    }

    /// A push event against `octocat/{repo}`.
    pub fn sample_push(repo: &str, commit_count: u32) -> PublicEvent {
        PublicEvent {
            kind: EventKind::Push { commit_count },
            repo_name: format!("octocat/{repo}"),
            created_at: Timestamp::from_unix_millis(1_700_000_000_000).unwrap_or_default(),
        }
    }

    /// A follower handle with derived URLs.
    pub fn sample_follower(login: &str) -> FollowerRef {
        FollowerRef {
            login: login.to_string(),
            avatar_url: format!("https://avatars.example/{login}"),
            html_url: format!("https://github.com/{login}"),
        }
    }

    pub fn with_profile(mut self, profile: AccountProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Adds a repository and the breakdown its language request returns.
    pub fn with_repository(mut self, listing: RepositoryListing, languages: LanguageBreakdown) -> Self {
        self.repositories.push((listing, languages));
        self
    }

    pub fn with_event(mut self, event: PublicEvent) -> Self {
        self.events.push(event);
        self
    }

    pub fn with_follower(mut self, follower: FollowerRef) -> Self {
        self.followers.push(follower);
        self
    }

    /// Makes every request to `endpoint` fail with `error`.
    pub fn failing(mut self, endpoint: SourceEndpoint, error: SourceError) -> Self {
        self.failures.insert(endpoint, error);
        self
    }

    /// Delays the language response of the named repository.
    pub fn with_language_delay(mut self, repository: &str, delay: Duration) -> Self {
        self.language_delays.insert(repository.to_string(), delay);
        self
    }

    /// Total number of requests served, failed ones included.
    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|calls| calls.len()).unwrap_or(0)
    }

    /// Number of requests made to one endpoint.
    pub fn calls_to(&self, endpoint: SourceEndpoint) -> usize {
        self.calls
            .lock()
            .map(|calls| calls.iter().filter(|c| **c == endpoint).count())
            .unwrap_or(0)
    }

    /// Repository names in the order their language requests completed.
    pub fn language_completion_order(&self) -> Vec<String> {
        self.language_completions
            .lock()
            .map(|order| order.clone())
            .unwrap_or_default()
    }

    fn record(&self, endpoint: SourceEndpoint) -> Result<(), SourceError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(endpoint);
        }
        match self.failures.get(&endpoint) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ProfileSource for MockProfileSource {
    async fn fetch_profile(&self, _username: &str) -> Result<AccountProfile, SourceError> {
        self.record(SourceEndpoint::Profile)?;
        Ok(self.profile.clone())
    }

    async fn fetch_repositories(
        &self,
        _username: &str,
        per_page: usize,
    ) -> Result<Vec<RepositoryListing>, SourceError> {
        self.record(SourceEndpoint::Repositories)?;
        Ok(self
            .repositories
            .iter()
            .take(per_page)
            .map(|(listing, _)| listing.clone())
            .collect())
    }

    async fn fetch_events(
        &self,
        _username: &str,
        per_page: usize,
    ) -> Result<Vec<PublicEvent>, SourceError> {
        self.record(SourceEndpoint::Events)?;
        Ok(self.events.iter().take(per_page).cloned().collect())
    }

    async fn fetch_followers(
        &self,
        _username: &str,
        per_page: usize,
    ) -> Result<Vec<FollowerRef>, SourceError> {
        self.record(SourceEndpoint::Followers)?;
        Ok(self.followers.iter().take(per_page).cloned().collect())
    }

    async fn fetch_languages(
        &self,
        repository: &RepositoryListing,
    ) -> Result<LanguageBreakdown, SourceError> {
        self.record(SourceEndpoint::Languages)?;

        if let Some(delay) = self.language_delays.get(&repository.name) {
            sleep(*delay).await;
        }

        let languages = self
            .repositories
            .iter()
            .find(|(listing, _)| listing.languages_url == repository.languages_url)
            .map(|(_, languages)| languages.clone())
            .ok_or_else(|| {
                SourceError::unexpected_status(404, repository.languages_url.clone())
            })?;

        if let Ok(mut order) = self.language_completions.lock() {
            order.push(repository.name.clone());
        }
        Ok(languages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn serves_configured_data_and_counts_calls() {
        let source = MockProfileSource::new()
            .with_repository(
                MockProfileSource::sample_listing("site"),
                [("HTML", 10u64)].into_iter().collect(),
            )
            .with_follower(MockProfileSource::sample_follower("hubot"));

        let repos = source.fetch_repositories("octocat", 6).await.unwrap();
        let langs = source.fetch_languages(&repos[0]).await.unwrap();
        let followers = source.fetch_followers("octocat", 5).await.unwrap();

        assert_eq!(repos.len(), 1);
        assert_eq!(langs.get("HTML"), Some(10));
        assert_eq!(followers[0].login, "hubot");
        assert_eq!(source.call_count(), 3);
        assert_eq!(source.calls_to(SourceEndpoint::Languages), 1);
    }

    #[tokio::test]
    async fn injected_failure_is_returned() {
        let source = MockProfileSource::new()
            .failing(SourceEndpoint::Events, SourceError::network("connection reset"));

        let result = source.fetch_events("octocat", 10).await;
        assert_eq!(result, Err(SourceError::network("connection reset")));
        assert_eq!(source.calls_to(SourceEndpoint::Events), 1);
    }

    #[tokio::test]
    async fn unknown_repository_languages_are_not_found() {
        let source = MockProfileSource::new();
        let result = source
            .fetch_languages(&MockProfileSource::sample_listing("ghost"))
            .await;
        assert!(matches!(
            result,
            Err(SourceError::UnexpectedStatus { status: 404, .. })
        ));
    }
}
