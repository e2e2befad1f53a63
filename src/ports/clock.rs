//! Clock Port - Source of the current time.
//!
//! Cache freshness is a comparison against "now", so the aggregator reads
//! time through this trait instead of the system clock directly.

use crate::domain::foundation::Timestamp;

/// Port for reading the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}
