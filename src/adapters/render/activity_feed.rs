//! Recent activity feed renderer.

use super::markup::html_escape;
use crate::domain::foundation::Timestamp;
use crate::domain::github::{EventKind, PublicEvent};

/// Events shown in the feed; the snapshot may hold more.
const FEED_LENGTH: usize = 5;

/// Renders the most recent events with icons and relative times.
pub fn render_activity_feed(events: &[PublicEvent], now: Timestamp) -> String {
    if events.is_empty() {
        return String::new();
    }

    let items: String = events
        .iter()
        .take(FEED_LENGTH)
        .map(|event| {
            format!(
                r#"<div class="gh-event">
    <div class="gh-event-icon">{icon}</div>
    <div class="gh-event-content">
        <p class="gh-event-text">{text}</p>
        <span class="gh-event-date">{when}</span>
    </div>
</div>"#,
                icon = event_icon(&event.kind),
                text = describe_event(event),
                when = time_ago(event.created_at, now),
            )
        })
        .collect();

    format!(
        r#"<div class="gh-activity-feed"><h4>Recent Activity</h4><div class="gh-events">{items}</div></div>"#
    )
}

fn event_icon(kind: &EventKind) -> &'static str {
    match kind {
        EventKind::Push { .. } => r#"<i class="fas fa-code-commit"></i>"#,
        EventKind::Create { .. } => r#"<i class="fas fa-plus"></i>"#,
        EventKind::Watch => r#"<i class="fas fa-star"></i>"#,
        EventKind::Other { .. } => r#"<i class="fas fa-bolt"></i>"#,
    }
}

/// One-line description, repository name emphasised.
pub fn describe_event(event: &PublicEvent) -> String {
    let repo = html_escape(event.repo_short_name());
    match &event.kind {
        EventKind::Push { commit_count } => {
            let noun = if *commit_count == 1 { "commit" } else { "commits" };
            format!("Pushed {commit_count} {noun} to <strong>{repo}</strong>")
        }
        EventKind::Create { ref_type } => {
            format!("Created {} <strong>{repo}</strong>", html_escape(ref_type))
        }
        EventKind::Watch => format!("Starred <strong>{repo}</strong>"),
        EventKind::Other { .. } => format!("Activity in <strong>{repo}</strong>"),
    }
}

/// Coarse relative time such as "3 days ago".
///
/// Each unit is used only once more than one whole unit has passed, so 36
/// hours reads "1 day ago" and exactly 24 hours reads "24 hours ago".
/// Times in the future read "0 seconds ago".
pub fn time_ago(then: Timestamp, now: Timestamp) -> String {
    const UNITS: [(i64, &str); 5] = [
        (31_536_000, "year"),
        (2_592_000, "month"),
        (86_400, "day"),
        (3_600, "hour"),
        (60, "minute"),
    ];

    let seconds = now.duration_since(&then).num_seconds().max(0);

    let (count, unit) = UNITS
        .iter()
        .find(|(unit_secs, _)| seconds > *unit_secs)
        .map(|(unit_secs, name)| (seconds / unit_secs, *name))
        .unwrap_or((seconds, "second"));

    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn at(millis: i64) -> Timestamp {
        Timestamp::from_unix_millis(millis).unwrap()
    }

    fn event(kind: EventKind) -> PublicEvent {
        PublicEvent {
            kind,
            repo_name: "octocat/site".to_string(),
            created_at: at(0),
        }
    }

    #[test]
    fn push_describes_commit_count() {
        let text = describe_event(&event(EventKind::Push { commit_count: 3 }));
        assert_eq!(text, "Pushed 3 commits to <strong>site</strong>");
    }

    #[test]
    fn push_of_single_commit_is_singular() {
        let text = describe_event(&event(EventKind::Push { commit_count: 1 }));
        assert_eq!(text, "Pushed 1 commit to <strong>site</strong>");
    }

    #[test]
    fn create_describes_ref_type() {
        let text = describe_event(&event(EventKind::Create {
            ref_type: "branch".to_string(),
        }));
        assert_eq!(text, "Created branch <strong>site</strong>");
    }

    #[test]
    fn watch_and_other_events() {
        assert_eq!(
            describe_event(&event(EventKind::Watch)),
            "Starred <strong>site</strong>"
        );
        assert_eq!(
            describe_event(&event(EventKind::Other {
                event_type: "ForkEvent".to_string()
            })),
            "Activity in <strong>site</strong>"
        );
    }

    #[test]
    fn time_ago_picks_largest_exceeded_unit() {
        let now = at(100_000_000_000);
        assert_eq!(time_ago(now.minus(Duration::seconds(30)), now), "30 seconds ago");
        assert_eq!(time_ago(now.minus(Duration::minutes(5)), now), "5 minutes ago");
        assert_eq!(time_ago(now.minus(Duration::hours(36)), now), "1 day ago");
        assert_eq!(time_ago(now.minus(Duration::days(400)), now), "1 year ago");
        assert_eq!(time_ago(now.minus(Duration::days(800)), now), "2 years ago");
    }

    #[test]
    fn time_ago_at_exact_unit_uses_smaller_unit() {
        let now = at(100_000_000_000);
        assert_eq!(time_ago(now.minus(Duration::hours(24)), now), "24 hours ago");
        assert_eq!(time_ago(now.minus(Duration::seconds(60)), now), "60 seconds ago");
    }

    #[test]
    fn time_ago_clamps_future_times() {
        let now = at(100_000_000_000);
        assert_eq!(time_ago(now.plus(Duration::minutes(5)), now), "0 seconds ago");
    }

    #[test]
    fn feed_shows_at_most_five_events() {
        let events: Vec<PublicEvent> = (0..8)
            .map(|i| PublicEvent {
                kind: EventKind::Watch,
                repo_name: format!("octocat/repo-{i}"),
                created_at: at(0),
            })
            .collect();

        let html = render_activity_feed(&events, at(1_000));

        assert_eq!(html.matches(r#"class="gh-event""#).count(), 5);
        assert!(html.contains("repo-4"));
        assert!(!html.contains("repo-5"));
    }

    #[test]
    fn empty_feed_renders_nothing() {
        assert_eq!(render_activity_feed(&[], at(0)), "");
    }

    #[test]
    fn repo_names_are_escaped() {
        let mut evt = event(EventKind::Watch);
        evt.repo_name = "octocat/<b>".to_string();
        assert_eq!(describe_event(&evt), "Starred <strong>&lt;b&gt;</strong>");
    }
}
