//! Clock collaborator.
//!
//! Every time-dependent rule takes "now" as an argument. Callers obtain it from a `Clock`,
//! which is `SystemClock` in production and `FixedClock` in tests.

use chrono::{DateTime, Datelike, Utc};

/// Source of the current time
pub trait Clock: Send + Sync {
    /// The current instant
    fn now(&self) -> DateTime<Utc>;

    /// Current month, 0-indexed (January = 0)
    fn current_month0(&self) -> u32 {
        self.now().month0()
    }
}

/// Reads the system clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
