//! Aggregate language usage across repositories.
//!
//! Only the tracked languages are reported. Bytes of every other language
//! land in an "Others" bucket that still counts toward the denominator, so
//! the reported percentages reflect each tracked language's share of all
//! code, not just of the tracked subset.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::LanguageBreakdown;
use crate::domain::foundation::Percentage;

/// Languages reported individually in [`LanguageStats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TrackedLanguage {
    #[serde(rename = "HTML")]
    Html,
    #[serde(rename = "CSS")]
    Css,
    #[serde(rename = "JavaScript")]
    JavaScript,
}

impl TrackedLanguage {
    /// All tracked languages, in display order.
    pub const ALL: [TrackedLanguage; 3] = [
        TrackedLanguage::Html,
        TrackedLanguage::Css,
        TrackedLanguage::JavaScript,
    ];

    /// Name as GitHub's linguist reports it.
    pub fn name(&self) -> &'static str {
        match self {
            TrackedLanguage::Html => "HTML",
            TrackedLanguage::Css => "CSS",
            TrackedLanguage::JavaScript => "JavaScript",
        }
    }

    /// Matches a linguist language name exactly.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.name() == name)
    }
}

impl fmt::Display for TrackedLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Running byte totals over a set of repositories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageTotals {
    tracked: BTreeMap<TrackedLanguage, u64>,
    others: u64,
    grand_total: u64,
}

impl LanguageTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one repository's breakdown into the totals.
    pub fn accumulate(&mut self, breakdown: &LanguageBreakdown) {
        for (language, bytes) in breakdown.iter() {
            match TrackedLanguage::from_name(language) {
                Some(tracked) => {
                    let entry = self.tracked.entry(tracked).or_insert(0);
                    *entry = entry.saturating_add(bytes);
                }
                None => self.others = self.others.saturating_add(bytes),
            }
            self.grand_total = self.grand_total.saturating_add(bytes);
        }
    }

    /// Bytes attributed to a tracked language.
    pub fn bytes_for(&self, language: TrackedLanguage) -> u64 {
        self.tracked.get(&language).copied().unwrap_or(0)
    }

    /// Bytes of every language outside the tracked set.
    pub fn others(&self) -> u64 {
        self.others
    }

    /// Bytes across all languages, tracked or not.
    pub fn grand_total(&self) -> u64 {
        self.grand_total
    }

    /// Converts the totals into rounded percentages of the grand total.
    ///
    /// Each share is rounded half-up. When rounding pushes the sum past 100,
    /// the rounded-up shares with the smallest remainders give a point back.
    pub fn to_stats(&self) -> LanguageStats {
        let total = self.grand_total;
        let mut shares: BTreeMap<TrackedLanguage, Percentage> = TrackedLanguage::ALL
            .into_iter()
            .map(|lang| (lang, Percentage::from_ratio(self.bytes_for(lang), total)))
            .collect();

        if total == 0 {
            return LanguageStats(shares);
        }

        let sum: u32 = shares.values().map(|p| u32::from(p.value())).sum();
        if sum <= 100 {
            return LanguageStats(shares);
        }

        let total = u128::from(total);
        let mut rounded_up: Vec<(u128, TrackedLanguage)> = TrackedLanguage::ALL
            .into_iter()
            .filter_map(|lang| {
                let remainder = (u128::from(self.bytes_for(lang)) * 100) % total;
                (remainder * 2 >= total).then_some((remainder, lang))
            })
            .collect();
        rounded_up.sort();

        for (_, lang) in rounded_up.into_iter().take((sum - 100) as usize) {
            if let Some(share) = shares.get_mut(&lang) {
                *share = share.decremented();
            }
        }

        LanguageStats(shares)
    }
}

/// Share of all code written in each tracked language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageStats(BTreeMap<TrackedLanguage, Percentage>);

impl LanguageStats {
    /// Stats with every tracked language at zero.
    pub fn zero() -> Self {
        Self(
            TrackedLanguage::ALL
                .into_iter()
                .map(|lang| (lang, Percentage::ZERO))
                .collect(),
        )
    }

    /// Computes stats over the given breakdowns.
    pub fn from_breakdowns<'a>(breakdowns: impl IntoIterator<Item = &'a LanguageBreakdown>) -> Self {
        let mut totals = LanguageTotals::new();
        for breakdown in breakdowns {
            totals.accumulate(breakdown);
        }
        totals.to_stats()
    }

    pub fn get(&self, language: TrackedLanguage) -> Percentage {
        self.0.get(&language).copied().unwrap_or(Percentage::ZERO)
    }

    /// Tracked languages and their shares, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (TrackedLanguage, Percentage)> + '_ {
        self.0.iter().map(|(lang, pct)| (*lang, *pct))
    }

    /// Sum of all reported shares.
    pub fn total(&self) -> u32 {
        self.0.values().map(|p| u32::from(p.value())).sum()
    }
}

impl Default for LanguageStats {
    fn default() -> Self {
        Self::zero()
    }
}
