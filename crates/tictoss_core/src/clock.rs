//! Time sources for the session's timed phases.
//!
//! The session never sleeps. It records when each pending timer is due on
//! a [`Clock`] and fires it on the first `Tick` at or after that instant.

use std::time::{Duration, Instant};

/// Monotonic time since some fixed origin.
pub trait Clock {
    /// Time elapsed since the clock's origin.
    fn now(&self) -> Duration;
}

/// Wall-clock time measured from construction.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Starts a clock at zero.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// A clock that only moves when told to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ManualClock {
    current: Duration,
}

impl ManualClock {
    /// Starts a clock at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the clock forward.
    pub fn advance(&mut self, amount: Duration) {
        self.current += amount;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.current
    }
}
