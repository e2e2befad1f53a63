//! Repository records.
//!
//! A [`RepositoryListing`] is what the repository list endpoint returns. It
//! only becomes a [`RepositorySummary`] once its language breakdown has been
//! attached, so snapshots can never carry a repository without languages.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Bytes of source per language for one repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageBreakdown(BTreeMap<String, u64>);

impl LanguageBreakdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Byte count for a language, if the repository uses it.
    pub fn get(&self, language: &str) -> Option<u64> {
        self.0.get(language).copied()
    }

    /// Sum of bytes across every language.
    pub fn total_bytes(&self) -> u64 {
        self.0.values().fold(0u64, |acc, bytes| acc.saturating_add(*bytes))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(lang, bytes)| (lang.as_str(), *bytes))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, u64)> for LanguageBreakdown {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<(&'a str, u64)> for LanguageBreakdown {
    fn from_iter<I: IntoIterator<Item = (&'a str, u64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(l, b)| (l.to_string(), b)).collect())
    }
}

/// A repository as listed by the account's repository endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryListing {
    pub name: String,
    pub description: Option<String>,
    pub stargazers_count: u32,
    /// Repository size in kilobytes.
    pub size_kb: u64,
    pub html_url: String,
    /// Endpoint returning this repository's language breakdown.
    pub languages_url: String,
}

impl RepositoryListing {
    /// Attaches the fetched language breakdown, producing the public summary.
    pub fn with_languages(self, languages: LanguageBreakdown) -> RepositorySummary {
        RepositorySummary {
            name: self.name,
            description: self.description,
            stargazers_count: self.stargazers_count,
            size_kb: self.size_kb,
            html_url: self.html_url,
            languages,
        }
    }
}

/// A repository with its language breakdown attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySummary {
    pub name: String,
    pub description: Option<String>,
    pub stargazers_count: u32,
    pub size_kb: u64,
    pub html_url: String,
    pub languages: LanguageBreakdown,
}

impl RepositorySummary {
    /// Size in megabytes, as shown on repository cards.
    pub fn size_mb(&self) -> f64 {
        self.size_kb as f64 / 1024.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing() -> RepositoryListing {
        RepositoryListing {
            name: "portfolio".to_string(),
            description: Some("My site".to_string()),
            stargazers_count: 4,
            size_kb: 2048,
            html_url: "https://github.com/octocat/portfolio".to_string(),
            languages_url: "https://api.github.com/repos/octocat/portfolio/languages".to_string(),
        }
    }

    #[test]
    fn with_languages_keeps_listing_fields() {
        let langs: LanguageBreakdown = [("HTML", 10), ("CSS", 5)].into_iter().collect();
        let summary = listing().with_languages(langs.clone());

        assert_eq!(summary.name, "portfolio");
        assert_eq!(summary.description.as_deref(), Some("My site"));
        assert_eq!(summary.stargazers_count, 4);
        assert_eq!(summary.languages, langs);
    }

    #[test]
    fn size_mb_converts_from_kilobytes() {
        let summary = listing().with_languages(LanguageBreakdown::new());
        assert!((summary.size_mb() - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn breakdown_total_sums_all_languages() {
        let langs: LanguageBreakdown =
            [("HTML", 300), ("Python", 400), ("CSS", 200)].into_iter().collect();
        assert_eq!(langs.total_bytes(), 900);
        assert_eq!(langs.get("Python"), Some(400));
        assert_eq!(langs.get("Go"), None);
    }

    #[test]
    fn breakdown_serializes_as_plain_object() {
        let langs: LanguageBreakdown = [("CSS", 5), ("HTML", 10)].into_iter().collect();
        let json = serde_json::to_string(&langs).unwrap();
        assert_eq!(json, r#"{"CSS":5,"HTML":10}"#);
    }
}
