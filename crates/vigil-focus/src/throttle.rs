//! Throttle gate - at most one action per cooldown window

use std::time::Duration;

use vigil_core::Timestamp;

/// Default cooldown between accepted regain signals
pub const DEFAULT_COOLDOWN: Duration = Duration::from_millis(1000);

/// Gate that opens at most once per cooldown window
///
/// Firing while open closes the gate until the cooldown elapses; firing
/// while closed is a silent no-op regardless of how many suppressed
/// attempts occur in between. Reopening is driven purely by the
/// timestamps handed to [`try_fire`](ThrottleGate::try_fire), so the gate
/// is deterministic under any host clock.
#[derive(Clone, Copy, Debug)]
pub struct ThrottleGate {
    cooldown: Duration,
    closed_until: Timestamp,
}

impl ThrottleGate {
    pub fn new(cooldown: Duration) -> Self {
        ThrottleGate {
            cooldown,
            closed_until: Timestamp::ZERO,
        }
    }

    /// Attempt to fire the gate at `now`
    ///
    /// Returns `true` when the gate was open; the gate then stays closed
    /// until `now + cooldown`.
    pub fn try_fire(&mut self, now: Timestamp) -> bool {
        if now < self.closed_until {
            return false;
        }
        self.closed_until = now + self.cooldown;
        true
    }

    /// Whether a fire at `now` would be accepted
    pub fn is_open(&self, now: Timestamp) -> bool {
        now >= self.closed_until
    }

    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }
}

impl Default for ThrottleGate {
    fn default() -> Self {
        ThrottleGate::new(DEFAULT_COOLDOWN)
    }
}

/// A zero-argument action wrapped behind a throttle gate
pub struct Throttled<F: FnMut()> {
    gate: ThrottleGate,
    action: F,
}

impl<F: FnMut()> Throttled<F> {
    pub fn new(action: F, cooldown: Duration) -> Self {
        Throttled {
            gate: ThrottleGate::new(cooldown),
            action,
        }
    }

    /// Execute the action if the gate is open; suppressed otherwise
    ///
    /// Returns whether the action ran.
    pub fn trigger(&mut self, now: Timestamp) -> bool {
        if !self.gate.try_fire(now) {
            return false;
        }
        (self.action)();
        true
    }
}
