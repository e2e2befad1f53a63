//! Public activity events for the activity feed.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

/// What happened, with the kind-specific payload the feed displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventKind {
    /// Commits pushed to a branch.
    Push { commit_count: u32 },
    /// A repository, branch or tag was created.
    Create { ref_type: String },
    /// The repository was starred.
    Watch,
    /// Any other event type, kept by its GitHub name.
    Other { event_type: String },
}

/// One entry of the account's public event stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicEvent {
    pub kind: EventKind,
    /// Full repository name, `owner/name`.
    pub repo_name: String,
    pub created_at: Timestamp,
}

impl PublicEvent {
    /// Repository name without its owner prefix.
    pub fn repo_short_name(&self) -> &str {
        self.repo_name
            .split_once('/')
            .map(|(_, name)| name)
            .unwrap_or(&self.repo_name)
    }
}
