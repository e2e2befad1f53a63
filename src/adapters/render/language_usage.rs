//! Language usage bars.

use crate::domain::foundation::Timestamp;
use crate::domain::github::LanguageStats;

/// Renders one bar per tracked language plus a project count and date.
pub fn render_language_usage(stats: &LanguageStats, total_projects: usize, now: Timestamp) -> String {
    let bars: String = stats
        .iter()
        .map(|(lang, pct)| {
            format!(
                r#"<div class="tech-bar-group">
    <div class="tech-bar-label">{lang}</div>
    <div class="tech-track"><div class="tech-fill" style="width: {value}%"></div></div>
    <div class="tech-pct">{pct}</div>
</div>"#,
                value = pct.value(),
            )
        })
        .collect();

    format!(
        r#"<div class="tech-usage-container">
    <div class="tech-usage-title">Top Languages (GitHub)</div>
    {bars}
    <div class="tech-summary-row">
        <div class="tech-summary-item"><strong>{total_projects}</strong> Total Projects</div>
        <div class="tech-summary-item"><strong>{updated}</strong> Last Updated</div>
    </div>
</div>"#,
        updated = now.format_day_month_year(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::github::LanguageBreakdown;
    use chrono::{TimeZone, Utc};

    #[test]
    fn bars_follow_tracked_language_order() {
        let breakdown: LanguageBreakdown =
            [("HTML", 300u64), ("CSS", 200), ("JavaScript", 500)].into_iter().collect();
        let stats = LanguageStats::from_breakdowns([&breakdown]);
        let now = Timestamp::from_datetime(Utc.with_ymd_and_hms(2025, 1, 9, 0, 0, 0).unwrap());

        let html = render_language_usage(&stats, 6, now);

        let html_pos = html.find(">HTML<").unwrap();
        let css_pos = html.find(">CSS<").unwrap();
        let js_pos = html.find(">JavaScript<").unwrap();
        assert!(html_pos < css_pos && css_pos < js_pos);
        assert!(html.contains(r#"style="width: 50%""#));
        assert!(html.contains("<strong>6</strong> Total Projects"));
        assert!(html.contains("<strong>09/01/2025</strong> Last Updated"));
    }

    #[test]
    fn zero_stats_render_empty_bars() {
        let html = render_language_usage(&LanguageStats::zero(), 0, Timestamp::now());
        assert_eq!(html.matches(r#"style="width: 0%""#).count(), 3);
    }
}
