//! GitHub source adapters.
//!
//! Implementations of the ProfileSource port.
//!
//! ## Available Adapters
//!
//! - `GitHubRestSource` - Public GitHub REST API over reqwest
//! - `MockProfileSource` - Configurable in-process source for tests

mod mock_source;
mod rest_source;
mod wire_types;

pub use mock_source::{MockProfileSource, SourceEndpoint};
pub use rest_source::{GitHubRestConfig, GitHubRestSource};
pub use wire_types::{
    GitHubEvent, GitHubEventPayload, GitHubEventRepo, GitHubFollower, GitHubLanguages,
    GitHubRepo, GitHubUser,
};
