//! GitHub REST API response types.
//!
//! These types mirror the JSON the API returns. They are designed to:
//! - Reject responses missing fields the panel relies on
//! - Ignore the many fields the panel does not use
//! - Map onto domain types right after parsing

use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::BTreeMap;

use crate::domain::foundation::Timestamp;
use crate::domain::github::{
    AccountProfile, EventKind, FollowerRef, LanguageBreakdown, PublicEvent, RepositoryListing,
};
use crate::ports::SourceError;

/// `GET /users/{username}`
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubUser {
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: String,
    pub bio: Option<String>,
    pub public_repos: u32,
    pub followers: u32,
    pub following: u32,
    pub html_url: String,
}

impl From<GitHubUser> for AccountProfile {
    fn from(user: GitHubUser) -> Self {
        AccountProfile {
            name: user.name,
            login: user.login,
            avatar_url: user.avatar_url,
            bio: user.bio,
            public_repos: user.public_repos,
            followers: user.followers,
            following: user.following,
            html_url: user.html_url,
        }
    }
}

/// One element of `GET /users/{username}/repos`
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubRepo {
    pub name: String,
    pub description: Option<String>,
    pub stargazers_count: u32,
    /// Kilobytes.
    pub size: u64,
    pub html_url: String,
    pub languages_url: String,
}

impl From<GitHubRepo> for RepositoryListing {
    fn from(repo: GitHubRepo) -> Self {
        RepositoryListing {
            name: repo.name,
            description: repo.description,
            stargazers_count: repo.stargazers_count,
            size_kb: repo.size,
            html_url: repo.html_url,
            languages_url: repo.languages_url,
        }
    }
}

/// One element of `GET /users/{username}/events/public`
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    pub repo: GitHubEventRepo,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub payload: GitHubEventPayload,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GitHubEventRepo {
    /// `owner/name`
    pub name: String,
}

/// The subset of event payload fields the feed shows.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GitHubEventPayload {
    /// Number of commits in a push.
    pub size: Option<u32>,
    /// Commits in a push; consulted when `size` is absent.
    pub commits: Option<Vec<serde_json::Value>>,
    /// `repository`, `branch` or `tag` for create events.
    pub ref_type: Option<String>,
}

impl TryFrom<GitHubEvent> for PublicEvent {
    type Error = SourceError;

    fn try_from(event: GitHubEvent) -> Result<Self, Self::Error> {
        let kind = match event.event_type.as_str() {
            "PushEvent" => EventKind::Push {
                commit_count: event
                    .payload
                    .size
                    .or_else(|| event.payload.commits.as_ref().map(|c| saturating_count(c.len())))
                    .unwrap_or(0),
            },
            "CreateEvent" => EventKind::Create {
                ref_type: event.payload.ref_type.clone().ok_or_else(|| {
                    SourceError::malformed("CreateEvent payload is missing ref_type")
                })?,
            },
            "WatchEvent" => EventKind::Watch,
            other => EventKind::Other {
                event_type: other.to_string(),
            },
        };

        Ok(PublicEvent {
            kind,
            repo_name: event.repo.name,
            created_at: Timestamp::from_datetime(event.created_at),
        })
    }
}

fn saturating_count(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

/// One element of `GET /users/{username}/followers`
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubFollower {
    pub login: String,
    pub avatar_url: String,
    pub html_url: String,
}

impl From<GitHubFollower> for FollowerRef {
    fn from(follower: GitHubFollower) -> Self {
        FollowerRef {
            login: follower.login,
            avatar_url: follower.avatar_url,
            html_url: follower.html_url,
        }
    }
}

/// `GET /repos/{owner}/{repo}/languages`
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct GitHubLanguages(pub BTreeMap<String, u64>);

impl From<GitHubLanguages> for LanguageBreakdown {
    fn from(languages: GitHubLanguages) -> Self {
        languages.0.into_iter().collect()
    }
}
