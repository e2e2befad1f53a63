//! Full GitHub panel composition.

use super::{
    render_activity_feed, render_followers, render_language_usage, render_profile_card,
    render_repo_grid,
};
use crate::domain::foundation::Timestamp;
use crate::domain::github::ProfileSnapshot;

/// Placeholder shown in place of the panel when no snapshot is available.
pub const UNAVAILABLE_MESSAGE: &str = "Unable to load GitHub data right now.";

/// Renders the two-column panel: profile, languages and followers on the
/// left; activity and repositories on the right.
pub fn render_dashboard(snapshot: &ProfileSnapshot, now: Timestamp) -> String {
    format!(
        r#"<div class="gh-dashboard-grid">
<div class="gh-left-col">
{profile}
{languages}
{followers}
</div>
<div class="gh-right-col">
{activity}
{repos}
</div>
</div>"#,
        profile = render_profile_card(&snapshot.profile),
        languages = render_language_usage(&snapshot.lang_stats, snapshot.total_projects(), now),
        followers = render_followers(&snapshot.followers),
        activity = render_activity_feed(&snapshot.activity, now),
        repos = render_repo_grid(&snapshot.repos),
    )
}

/// Degraded-state markup for when aggregation failed.
pub fn render_unavailable() -> String {
    format!(r#"<div class="gh-loader">{UNAVAILABLE_MESSAGE}</div>"#)
}
