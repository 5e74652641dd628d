//! Time source for word and round timing

use std::time::Instant;

/// Supplies the current instant to the coordinator.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall clock backed by `Instant::now`
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Elapsed seconds between two instants, never less than one second.
pub fn elapsed_secs(start: Instant, now: Instant) -> f64 {
    now.saturating_duration_since(start).as_secs_f64().max(1.0)
}

#[cfg(test)]
pub(crate) use manual::ManualClock;
