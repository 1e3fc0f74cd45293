use chrono::{DateTime, Utc};

/// Wall-clock source, injectable so the idle guard can be tested with
/// deterministic timestamps.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
