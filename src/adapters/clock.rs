//! System clock adapter.

use crate::domain::foundation::Timestamp;
use crate::ports::Clock;

/// Reads the current UTC time from the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}
