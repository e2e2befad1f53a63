//! Profile card renderer.

use super::markup::html_escape;
use crate::domain::github::AccountProfile;

/// Shown when the account has no bio.
const DEFAULT_BIO: &str = "Developer & Creative Coder";

/// Renders the account header, bio, counters and follow link.
pub fn render_profile_card(profile: &AccountProfile) -> String {
    let name = html_escape(profile.display_name());
    let bio = profile
        .bio
        .as_deref()
        .filter(|bio| !bio.trim().is_empty())
        .unwrap_or(DEFAULT_BIO);

    format!(
        r#"<div class="gh-profile-card">
    <div class="gh-profile-header">
        <img src="{avatar}" alt="{name}" class="gh-avatar">
        <div class="gh-meta">
            <h3>{name}</h3>
            <p>@{login}</p>
        </div>
    </div>
    <p class="gh-bio">{bio}</p>
    <div class="gh-stats">
        {repos}
        {followers}
        {following}
    </div>
    <a href="{url}" target="_blank" rel="noopener" class="gh-link">Follow on GitHub <i class="fab fa-github"></i></a>
</div>"#,
        avatar = html_escape(&profile.avatar_url),
        name = name,
        login = html_escape(&profile.login),
        bio = html_escape(bio),
        repos = stat(profile.public_repos, "Repos"),
        followers = stat(profile.followers, "Followers"),
        following = stat(profile.following, "Following"),
        url = html_escape(&profile.html_url),
    )
}

fn stat(value: u32, label: &str) -> String {
    format!(
        r#"<div class="gh-stat"><span class="gh-stat-val">{value}</span><span class="gh-stat-label">{label}</span></div>"#
    )
}
