//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ProfileSource` - Remote account, repository, event and follower data
//! - `KeyValueStore` - String-keyed persistence for cached snapshots
//! - `Clock` - Current time for cache freshness checks

mod clock;
mod key_value_store;
mod profile_source;

pub use clock::Clock;
pub use key_value_store::{KeyValueError, KeyValueStore};
pub use profile_source::{ProfileSource, SourceError};
