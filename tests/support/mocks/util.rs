// tests/support/mocks/util.rs
use chrono::{DateTime, Utc};

#[derive(Clone)]
pub struct FixedClock;

impl docs_migrator::application::ports::time::Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        // Use fixed time for deterministic tests
        super::time::fixed_now()
    }
}
