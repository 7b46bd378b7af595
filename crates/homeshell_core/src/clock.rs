//! Wall-clock source for record timestamps.

use chrono::{DateTime, Utc};

/// Supplies "now" to the repository so tests can pin time.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// System UTC clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}
