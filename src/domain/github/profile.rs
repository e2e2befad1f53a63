//! Account metadata shown on the profile card.

use serde::{Deserialize, Serialize};

/// Public metadata of a GitHub account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountProfile {
    /// Display name; GitHub allows accounts without one.
    pub name: Option<String>,
    /// Login handle, without the leading `@`.
    pub login: String,
    pub avatar_url: String,
    pub bio: Option<String>,
    pub public_repos: u32,
    pub followers: u32,
    pub following: u32,
    /// Canonical profile page.
    pub html_url: String,
}

impl AccountProfile {
    /// Name to show in headings, falling back to the login handle.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.login)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(name: Option<&str>) -> AccountProfile {
        AccountProfile {
            name: name.map(str::to_string),
            login: "octocat".to_string(),
            avatar_url: "https://avatars.example/octocat".to_string(),
            bio: None,
            public_repos: 8,
            followers: 3,
            following: 1,
            html_url: "https://github.com/octocat".to_string(),
        }
    }

    #[test]
    fn display_name_prefers_name() {
        assert_eq!(profile(Some("The Octocat")).display_name(), "The Octocat");
    }

    #[test]
    fn display_name_falls_back_to_login() {
        assert_eq!(profile(None).display_name(), "octocat");
        assert_eq!(profile(Some("  ")).display_name(), "octocat");
    }
}
