use chrono::{DateTime, Utc};

use crate::application::interface::clock::Clock;

/// Wall-clock time. Tests substitute a fixed clock through the same trait.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
