//! Profile snapshots and their cache envelope.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use super::{AccountProfile, FollowerRef, LanguageStats, PublicEvent, RepositorySummary};
use crate::domain::foundation::{unix_millis, Timestamp};

/// How long a cached snapshot stays fresh.
pub const CACHE_TTL: Duration = Duration::from_secs(60 * 60);

/// Tag mixed into cache keys. Bump it whenever the snapshot shape or the
/// aggregation rules change so old entries are ignored.
pub const SCHEMA_VERSION: &str = "v2";

/// Everything the GitHub panel displays, produced by one aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    pub profile: AccountProfile,
    /// Most recently updated first.
    pub repos: Vec<RepositorySummary>,
    /// Most recent first.
    pub activity: Vec<PublicEvent>,
    #[serde(rename = "langStats")]
    pub lang_stats: LanguageStats,
    pub followers: Vec<FollowerRef>,
}

impl ProfileSnapshot {
    /// Number of repositories in the snapshot.
    pub fn total_projects(&self) -> usize {
        self.repos.len()
    }
}

/// Key under which an account's snapshot is cached.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    pub fn for_account(username: &str) -> Self {
        Self(format!("github_data_{SCHEMA_VERSION}_{username}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A snapshot together with the moment it was fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub data: ProfileSnapshot,
    #[serde(with = "unix_millis")]
    pub timestamp: Timestamp,
}

impl CacheEntry {
    pub fn new(data: ProfileSnapshot, timestamp: Timestamp) -> Self {
        Self { data, timestamp }
    }

    /// Fresh while strictly less than [`CACHE_TTL`] has elapsed.
    pub fn is_fresh_at(&self, now: Timestamp) -> bool {
        let elapsed_ms = now.duration_since(&self.timestamp).num_milliseconds();
        i128::from(elapsed_ms) < CACHE_TTL.as_millis() as i128
    }

    /// Serializes the entry into the store's string format.
    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn decode(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
