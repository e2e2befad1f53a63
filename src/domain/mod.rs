//! Domain layer containing the GitHub panel's data types and pure logic.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (timestamps, percentages)
//! - `github` - Profile snapshot records, language statistics, cache entries

pub mod foundation;
pub mod github;
