//! GitHub panel query handlers.
//!
//! Read-only handlers producing profile snapshots for display.

mod profile_data_aggregator;

pub use profile_data_aggregator::{
    AggregationError, DataUnavailable, ProfileDataAggregator, EVENT_PAGE_SIZE,
    FOLLOWER_PAGE_SIZE, REPOSITORY_PAGE_SIZE,
};
