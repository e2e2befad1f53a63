//! Foundation module - Shared domain primitives.
//!
//! Contains value objects that form the vocabulary of the showcase domain.

mod percentage;
mod timestamp;

pub use percentage::Percentage;
pub use timestamp::{unix_millis, Timestamp};
