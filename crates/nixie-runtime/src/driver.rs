#![forbid(unsafe_code)]

//! Scoped animation driver: the fixed-cadence tick source for driven modes.
//!
//! The driver is plain data owned next to the model it drives — no thread,
//! no callback registration. The host loop keeps the driver's armed state in
//! sync with the active mode and feeds it elapsed time; the driver answers
//! with the number of whole ticks that became due. Dropping the owner drops
//! the driver, so a timer can never outlive its view.
//!
//! # Invariants
//!
//! 1. The driver is armed exactly while the mode is driven.
//! 2. Each whole 500 ms period yields exactly one tick; partial periods
//!    carry over to the next call.
//! 3. Any mode change clears accumulated time: the next tick is a full
//!    period after the change.
//! 4. A disarmed driver never reports ticks.

use std::time::Duration;

use nixie_core::Mode;
use tracing::debug;
use web_time::Instant;

/// Fixed animation cadence. Not configurable at runtime.
pub const TICK_INTERVAL: Duration = Duration::from_millis(500);

/// Accumulator-based periodic tick source, armed only in driven modes.
#[derive(Debug, Clone)]
pub struct AnimationDriver {
    mode: Mode,
    accumulated: Duration,
    last_poll: Option<Instant>,
}

impl AnimationDriver {
    /// Create a disarmed driver (`Interactive` mode).
    #[must_use]
    pub fn new() -> Self {
        Self {
            mode: Mode::Interactive,
            accumulated: Duration::ZERO,
            last_poll: None,
        }
    }

    /// Whether the driver is currently armed.
    #[inline]
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.mode.is_driven()
    }

    /// Align the driver with `mode`: armed exactly while the mode is
    /// driven. Any mode change tears the old timer down, so the first tick
    /// after a change is always a full period away — even when switching
    /// between the two driven modes.
    pub fn sync_mode(&mut self, mode: Mode) {
        if mode == self.mode {
            return;
        }
        self.mode = mode;
        self.accumulated = Duration::ZERO;
        self.last_poll = None;
        debug!(armed = self.is_armed(), ?mode, "animation driver state change");
    }

    /// Explicitly disarm, discarding any accumulated time.
    pub fn disarm(&mut self) {
        self.sync_mode(Mode::Interactive);
    }

    /// Record `dt` of elapsed time and return how many whole ticks became
    /// due. Returns 0 while disarmed (elapsed time is not banked).
    pub fn advance(&mut self, dt: Duration) -> u32 {
        if !self.is_armed() {
            return 0;
        }
        self.accumulated += dt;
        let mut due = 0u32;
        while self.accumulated >= TICK_INTERVAL {
            self.accumulated -= TICK_INTERVAL;
            due += 1;
        }
        due
    }

    /// Measure elapsed wall time since the previous poll and [`advance`]
    /// by it. The first poll after arming establishes the baseline and
    /// reports no ticks.
    ///
    /// [`advance`]: Self::advance
    pub fn poll(&mut self) -> u32 {
        if !self.is_armed() {
            return 0;
        }
        let now = Instant::now();
        let dt = match self.last_poll {
            Some(previous) => now.saturating_duration_since(previous),
            None => Duration::ZERO,
        };
        self.last_poll = Some(now);
        self.advance(dt)
    }
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::new()
    }
}
