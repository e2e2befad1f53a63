//! Application layer - Query handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::github::{
    AggregationError, DataUnavailable, ProfileDataAggregator, EVENT_PAGE_SIZE,
    FOLLOWER_PAGE_SIZE, REPOSITORY_PAGE_SIZE,
};
