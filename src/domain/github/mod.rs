//! GitHub panel domain.
//!
//! Records fetched from the GitHub REST API, the language statistics derived
//! from them, and the cache envelope the aggregator persists.

mod event;
mod follower;
mod language_stats;
mod profile;
mod repository;
mod snapshot;

pub use event::{EventKind, PublicEvent};
pub use follower::FollowerRef;
pub use language_stats::{LanguageStats, LanguageTotals, TrackedLanguage};
pub use profile::AccountProfile;
pub use repository::{LanguageBreakdown, RepositoryListing, RepositorySummary};
pub use snapshot::{CacheEntry, CacheKey, ProfileSnapshot, CACHE_TTL, SCHEMA_VERSION};
