//! Repository grid renderer.

use super::markup::html_escape;
use crate::domain::foundation::Percentage;
use crate::domain::github::{LanguageBreakdown, RepositorySummary, TrackedLanguage};

/// Language chips below this share are not shown on a card.
const MIN_CHIP_PERCENT: u8 = 5;

/// Renders one card per repository. Empty input renders nothing.
pub fn render_repo_grid(repos: &[RepositorySummary]) -> String {
    if repos.is_empty() {
        return String::new();
    }

    let cards: String = repos.iter().map(render_repo_card).collect();
    format!(r#"<div class="gh-repo-grid">{cards}</div>"#)
}

fn render_repo_card(repo: &RepositorySummary) -> String {
    let description = repo
        .description
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or("No description available");

    format!(
        r#"<a href="{url}" target="_blank" rel="noopener" class="gh-repo-card">
    <div class="gh-repo-top">
        <i class="far fa-folder"></i>
        <div class="gh-repo-stars"><i class="far fa-star"></i> {stars}</div>
    </div>
    <h3>{name}</h3>
    <p>{description}</p>
    <div class="gh-repo-footer">
        <div class="gh-lang-breakdown">{chips}</div>
        <span class="gh-repo-size">{size:.1} MB</span>
    </div>
</a>"#,
        url = html_escape(&repo.html_url),
        stars = repo.stargazers_count,
        name = html_escape(&repo.name),
        description = html_escape(description),
        chips = render_language_chips(&repo.languages),
        size = repo.size_mb(),
    )
}

/// Per-repository language chips.
///
/// Only tracked languages get a chip, unless the repository uses fewer than
/// three languages, in which case all of them do. Shares under 5% are hidden.
pub fn render_language_chips(languages: &LanguageBreakdown) -> String {
    let total = languages.total_bytes();
    if total == 0 {
        return String::new();
    }

    let show_all = languages.len() < 3;
    let mut entries: Vec<(&str, u64)> = languages
        .iter()
        .filter(|(lang, _)| show_all || TrackedLanguage::from_name(lang).is_some())
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let chips: String = entries
        .into_iter()
        .filter_map(|(lang, bytes)| {
            let pct = Percentage::from_ratio(bytes, total);
            (pct.value() >= MIN_CHIP_PERCENT).then(|| {
                format!(
                    r#"<span class="gh-lang-chip">{} {}</span>"#,
                    html_escape(lang),
                    pct
                )
            })
        })
        .collect();

    format!(r#"<div class="gh-lang-stack">{chips}</div>"#)
}
