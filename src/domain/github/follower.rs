//! Follower references for the "Recent Followers" list.

use serde::{Deserialize, Serialize};

/// A follower of the showcased account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowerRef {
    pub login: String,
    pub avatar_url: String,
    pub html_url: String,
}
