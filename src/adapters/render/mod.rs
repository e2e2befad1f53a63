//! HTML renderers for the GitHub panel.
//!
//! Each renderer is a pure function of a slice of a
//! [`ProfileSnapshot`](crate::domain::github::ProfileSnapshot); none of them
//! fetch data. Renderers showing relative or current dates take `now`
//! explicitly. All interpolated text is HTML-escaped.

mod activity_feed;
mod dashboard;
mod followers;
mod language_usage;
mod markup;
mod profile_card;
mod repo_grid;

pub use activity_feed::{describe_event, render_activity_feed, time_ago};
pub use dashboard::{render_dashboard, render_unavailable, UNAVAILABLE_MESSAGE};
pub use followers::render_followers;
pub use language_usage::render_language_usage;
pub use profile_card::render_profile_card;
pub use repo_grid::{render_language_chips, render_repo_grid};
