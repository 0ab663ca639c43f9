//! Frame clocks
//!
//! Times are seconds since the clock was created.

use std::time::{Duration, Instant};

pub trait Clock {
    fn now(&self) -> f64;

    /// Block until `deadline` (no-op if it already passed)
    fn sleep_until(&mut self, deadline: f64);
}

/// Real time, for the native binary
#[derive(Debug, Clone)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }

    fn sleep_until(&mut self, deadline: f64) {
        let remaining = deadline - self.now();
        if remaining > 0.0 {
            std::thread::sleep(Duration::from_secs_f64(remaining));
        }
    }
}

/// Jumps straight to each deadline; used by tests and fast-forward runs
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: f64,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, secs: f64) {
        self.now += secs;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.now
    }

    fn sleep_until(&mut self, deadline: f64) {
        self.now = self.now.max(deadline);
    }
}
