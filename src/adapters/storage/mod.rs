//! Storage Adapters
//!
//! Implementations of the KeyValueStore port for caching snapshots.
//!
//! ## Available Adapters
//!
//! - **FileKeyValueStore** - One file per key in a cache directory
//! - **InMemoryKeyValueStore** - Stores entries in memory (testing/development)
//! - **RedisKeyValueStore** - Plain GET/SET against Redis (shared deployments)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileKeyValueStore, InMemoryKeyValueStore};
//!
//! // Production: file-based storage
//! let store = FileKeyValueStore::new(".cache/github-showcase");
//!
//! // Testing: in-memory storage
//! let store = InMemoryKeyValueStore::new();
//! ```

mod file_store;
mod in_memory_store;
mod redis_store;

pub use file_store::FileKeyValueStore;
pub use in_memory_store::InMemoryKeyValueStore;
pub use redis_store::RedisKeyValueStore;
