//! ProfileDataAggregator - Builds and caches GitHub profile snapshots.
//!
//! A call either returns a complete snapshot or fails as a whole:
//!
//! 1. A fresh cache entry is returned without touching the network.
//! 2. Otherwise the profile, repositories, events and followers are fetched
//!    concurrently, then every repository's language breakdown.
//! 3. Breakdowns are attached to repositories by position and folded into
//!    language statistics.
//! 4. The snapshot is written to the store and returned.
//!
//! Any failure after the cache check leaves the store untouched. A stale
//! entry is never served as a fallback.

use futures::future::try_join_all;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::domain::github::{
    CacheEntry, CacheKey, LanguageStats, ProfileSnapshot, RepositorySummary,
};
use crate::ports::{Clock, KeyValueError, KeyValueStore, ProfileSource, SourceError};

/// Repositories requested per snapshot, most recently updated first.
pub const REPOSITORY_PAGE_SIZE: usize = 6;

/// Public events requested per snapshot.
pub const EVENT_PAGE_SIZE: usize = 10;

/// Followers requested per snapshot.
pub const FOLLOWER_PAGE_SIZE: usize = 5;

/// Reasons a fetch-and-store pass can fail.
#[derive(Debug, thiserror::Error)]
pub enum AggregationError {
    #[error("source request failed: {0}")]
    Source(#[from] SourceError),

    #[error("failed to encode cache entry: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to write cache entry: {0}")]
    Cache(#[from] KeyValueError),
}

/// Failure indicator returned to presentation code.
///
/// Callers are expected to show a "data unavailable" placeholder; the
/// underlying cause is only reachable through [`std::error::Error::source`]
/// for logging.
#[derive(Debug, thiserror::Error)]
#[error("GitHub data unavailable")]
pub struct DataUnavailable {
    #[source]
    cause: AggregationError,
}

/// Aggregates one account's GitHub data into cached snapshots.
pub struct ProfileDataAggregator {
    username: String,
    cache_key: CacheKey,
    source: Arc<dyn ProfileSource>,
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
}

impl ProfileDataAggregator {
    pub fn new(
        username: impl Into<String>,
        source: Arc<dyn ProfileSource>,
        store: Arc<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let username = username.into();
        let cache_key = CacheKey::for_account(&username);
        Self {
            username,
            cache_key,
            source,
            store,
            clock,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Key this account's snapshots are stored under.
    pub fn cache_key(&self) -> &CacheKey {
        &self.cache_key
    }

    /// Returns the cached snapshot while fresh, otherwise fetches a new one.
    pub async fn get_data(&self) -> Result<ProfileSnapshot, DataUnavailable> {
        if let Some(entry) = self.cached_entry().await {
            if entry.is_fresh_at(self.clock.now()) {
                debug!(key = %self.cache_key, "Using cached GitHub data");
                return Ok(entry.data);
            }
            debug!(key = %self.cache_key, "Cached GitHub data is stale");
        }

        self.refresh().await
    }

    /// Fetches a new snapshot regardless of what the cache holds.
    pub async fn refresh(&self) -> Result<ProfileSnapshot, DataUnavailable> {
        info!(username = %self.username, "Fetching fresh GitHub data");

        self.fetch_and_store().await.map_err(|cause| {
            match &cause {
                AggregationError::Source(e) if e.is_malformed() => error!(
                    username = %self.username,
                    error = %cause,
                    "GitHub returned an unexpected response shape"
                ),
                _ => error!(username = %self.username, error = %cause, "GitHub fetch failed"),
            }
            DataUnavailable { cause }
        })
    }

    /// Reads the current cache entry without checking freshness.
    ///
    /// Unreadable or undecodable entries are reported as absent.
    pub async fn cached_entry(&self) -> Option<CacheEntry> {
        let raw = match self.store.get(self.cache_key.as_str()).await {
            Ok(raw) => raw?,
            Err(e) => {
                warn!(key = %self.cache_key, error = %e, "Cache read failed");
                return None;
            }
        };

        match CacheEntry::decode(&raw) {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(key = %self.cache_key, error = %e, "Ignoring corrupt cache entry");
                None
            }
        }
    }

    async fn fetch_and_store(&self) -> Result<ProfileSnapshot, AggregationError> {
        let username = self.username.as_str();

        let (profile, mut listings, mut activity, mut followers) = tokio::try_join!(
            self.source.fetch_profile(username),
            self.source.fetch_repositories(username, REPOSITORY_PAGE_SIZE),
            self.source.fetch_events(username, EVENT_PAGE_SIZE),
            self.source.fetch_followers(username, FOLLOWER_PAGE_SIZE),
        )?;

        listings.truncate(REPOSITORY_PAGE_SIZE);
        activity.truncate(EVENT_PAGE_SIZE);
        followers.truncate(FOLLOWER_PAGE_SIZE);

        // try_join_all yields results in input order, whatever order they complete in.
        let breakdowns =
            try_join_all(listings.iter().map(|listing| self.source.fetch_languages(listing)))
                .await?;

        let repos: Vec<RepositorySummary> = listings
            .into_iter()
            .zip(breakdowns)
            .map(|(listing, languages)| listing.with_languages(languages))
            .collect();

        let lang_stats = LanguageStats::from_breakdowns(repos.iter().map(|repo| &repo.languages));

        let snapshot = ProfileSnapshot {
            profile,
            repos,
            activity,
            lang_stats,
            followers,
        };

        let entry = CacheEntry::new(snapshot, self.clock.now());
        self.store
            .set(self.cache_key.as_str(), entry.encode()?)
            .await?;

        debug!(
            key = %self.cache_key,
            repos = entry.data.repos.len(),
            events = entry.data.activity.len(),
            "Cached fresh GitHub data"
        );

        Ok(entry.data)
    }
}
