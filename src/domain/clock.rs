//! Clock abstraction for time-dependent logic
//!
//! Validation compares `date_joined` against the current time; the clock is
//! injected through constructors so that comparison is deterministic under
//! test. Nothing in the domain reads wall-clock time directly.

use std::fmt::Debug;

use chrono::{DateTime, Utc};

/// Supplies the current time
pub trait Clock: Send + Sync + Debug {
    fn now(&self) -> DateTime<Utc>;
}

/// Clock backed by the system wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
pub mod fixed {
    use super::*;

    /// Clock that always returns a preset instant
    #[derive(Debug, Clone, Copy)]
    pub struct FixedClock(pub DateTime<Utc>);

    impl FixedClock {
        pub fn at(instant: DateTime<Utc>) -> Self {
            Self(instant)
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }
}
