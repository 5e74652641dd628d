//! Turn countdown
//!
//! The timer does not own a thread. The host calls [`TurnTimer::tick`] once a
//! second; a stopped timer ignores ticks, so stopping or resetting cancels any
//! pending countdown.

use tracing::debug;

/// Default turn duration in seconds
pub const DEFAULT_TURN_DURATION: i32 = 60;

/// Emitted when the countdown reaches zero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerSignal {
    Expired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerState {
    Idle,
    Running,
}

#[derive(Debug, Clone)]
pub struct TurnTimer {
    duration: i32,
    remaining: i32,
    state: TimerState,
}

impl Default for TurnTimer {
    fn default() -> Self {
        Self::new(DEFAULT_TURN_DURATION)
    }
}

impl TurnTimer {
    pub fn new(duration: i32) -> Self {
        Self {
            duration,
            remaining: duration,
            state: TimerState::Idle,
        }
    }

    /// Start counting down from the current remaining time.
    ///
    /// Already running: nothing happens. Nothing left on the clock: expires
    /// immediately.
    pub fn start(&mut self) -> Option<TimerSignal> {
        if self.state == TimerState::Running {
            return None;
        }
        if self.remaining <= 0 {
            self.remaining = 0;
            debug!("timer expired on start");
            return Some(TimerSignal::Expired);
        }
        self.state = TimerState::Running;
        debug!(remaining = self.remaining, "timer started");
        None
    }

    /// Advance one second. Returns `Expired` exactly once per start.
    pub fn tick(&mut self) -> Option<TimerSignal> {
        if self.state != TimerState::Running {
            return None;
        }
        self.remaining -= 1;
        if self.remaining <= 0 {
            self.remaining = 0;
            self.state = TimerState::Idle;
            debug!("timer expired");
            return Some(TimerSignal::Expired);
        }
        None
    }

    pub fn stop(&mut self) {
        self.state = TimerState::Idle;
    }

    /// Change the configured duration. A running countdown keeps its
    /// remaining time until the next reset.
    pub fn update_duration(&mut self, duration: i32) {
        self.duration = duration;
        if self.state == TimerState::Idle {
            self.remaining = duration;
        }
    }

    /// Stop and refill to the configured duration
    pub fn reset(&mut self) {
        self.stop();
        self.remaining = self.duration;
    }

    pub fn remaining(&self) -> i32 {
        self.remaining
    }

    pub fn duration(&self) -> i32 {
        self.duration
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }
}
