//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `github` - GitHub REST source and a configurable mock
//! - `storage` - Key-value stores for cached snapshots (memory, file, Redis)
//! - `clock` - System time
//! - `render` - HTML markup for snapshots

pub mod clock;
pub mod github;
pub mod render;
pub mod storage;

pub use clock::SystemClock;
pub use github::{GitHubRestConfig, GitHubRestSource, MockProfileSource, SourceEndpoint};
pub use storage::{FileKeyValueStore, InMemoryKeyValueStore, RedisKeyValueStore};
