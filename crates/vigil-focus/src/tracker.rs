//! Focus/leave tracker - away-interval computation for the viewport
//!
//! One tracker exists per engine, not per element. It watches the
//! viewport's focus state and, on each regain, reports how long the
//! viewport was away so the engine can stamp that interval onto every
//! exposure that was open at the time.

use std::time::Duration;

use tracing::debug;
use vigil_core::Timestamp;

use crate::ThrottleGate;

/// Viewport focus state machine
///
/// States: `Focused` and `AwayPending` (focus lost, awaiting regain).
/// Scroll is treated as a regain-equivalent signal because some hosts
/// never deliver a focus event when attention returns via scrolling.
/// Regain signals are throttled so a burst of scroll events collapses to
/// a single away-interval computation.
#[derive(Debug)]
pub struct FocusTracker {
    /// When the viewport lost focus; ZERO while focused
    blur_time: Timestamp,
    /// Whether regain/scroll signals are currently armed
    ///
    /// Armed between a focus loss and the regain that handles it.
    /// Signals arriving while disarmed are dropped.
    awaiting: bool,
    /// Shared across away/return cycles
    gate: ThrottleGate,
}

impl FocusTracker {
    pub fn new() -> Self {
        FocusTracker::with_cooldown(crate::DEFAULT_COOLDOWN)
    }

    pub fn with_cooldown(cooldown: Duration) -> Self {
        FocusTracker {
            blur_time: Timestamp::ZERO,
            awaiting: false,
            gate: ThrottleGate::new(cooldown),
        }
    }

    /// Whether the viewport is currently considered away
    pub fn is_away(&self) -> bool {
        self.awaiting
    }

    /// The viewport lost focus at `now`
    ///
    /// A repeated loss while already away moves the blur time forward.
    pub fn focus_lost(&mut self, now: Timestamp) {
        self.blur_time = now;
        self.awaiting = true;
        debug!(at = ?now, "viewport focus lost");
    }

    /// The viewport regained focus at `now`
    ///
    /// Returns the away interval to attribute, or `None` when the signal
    /// is disarmed, throttled, or no loss was recorded.
    pub fn focus_regained(&mut self, now: Timestamp) -> Option<Duration> {
        self.regain(now)
    }

    /// A scroll occurred at `now`; treated exactly like a focus regain
    pub fn scroll(&mut self, now: Timestamp) -> Option<Duration> {
        self.regain(now)
    }

    fn regain(&mut self, now: Timestamp) -> Option<Duration> {
        if !self.awaiting {
            return None;
        }
        if !self.gate.try_fire(now) {
            return None;
        }
        if self.blur_time.is_zero() {
            return None;
        }

        let leave = now - self.blur_time;
        self.blur_time = Timestamp::ZERO;
        self.awaiting = false;
        debug!(leave_ms = leave.as_millis() as u64, "viewport focus regained");
        Some(leave)
    }
}

impl Default for FocusTracker {
    fn default() -> Self {
        FocusTracker::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_away_interval_computed_on_regain() {
        let mut tracker = FocusTracker::new();

        tracker.focus_lost(Timestamp::from_millis(1000));
        assert!(tracker.is_away());

        let leave = tracker.focus_regained(Timestamp::from_millis(1750));
        assert_eq!(leave, Some(Duration::from_millis(750)));
        assert!(!tracker.is_away());
    }

    #[test]
    fn test_scroll_is_regain_equivalent() {
        let mut tracker = FocusTracker::new();

        tracker.focus_lost(Timestamp::from_millis(500));
        let leave = tracker.scroll(Timestamp::from_millis(900));
        assert_eq!(leave, Some(Duration::from_millis(400)));
    }

    #[test]
    fn test_regain_without_loss_is_noop() {
        let mut tracker = FocusTracker::new();
        assert_eq!(tracker.focus_regained(Timestamp::from_millis(100)), None);
        assert_eq!(tracker.scroll(Timestamp::from_millis(200)), None);
    }

    #[test]
    fn test_signals_disarmed_after_regain() {
        let mut tracker = FocusTracker::new();

        tracker.focus_lost(Timestamp::from_millis(1000));
        assert!(tracker.focus_regained(Timestamp::from_millis(1100)).is_some());

        // A later scroll with no intervening loss does nothing, even
        // after the throttle cooldown has elapsed
        assert_eq!(tracker.scroll(Timestamp::from_millis(6000)), None);
    }

    #[test]
    fn test_scroll_burst_collapses() {
        let mut tracker = FocusTracker::new();

        tracker.focus_lost(Timestamp::from_millis(1000));
        assert!(tracker.scroll(Timestamp::from_millis(1300)).is_some());

        // Burst of further scrolls inside the cooldown; the tracker is
        // already disarmed so nothing fires
        for offset in 0..5 {
            assert_eq!(tracker.scroll(Timestamp::from_millis(1310 + offset)), None);
        }
    }

    #[test]
    fn test_throttle_defers_second_cycle() {
        let mut tracker = FocusTracker::with_cooldown(Duration::from_millis(1000));

        tracker.focus_lost(Timestamp::from_millis(1000));
        assert!(tracker.focus_regained(Timestamp::from_millis(1100)).is_some());

        // Second loss shortly after; the gate is still closed from the
        // first regain, so an immediate scroll is suppressed
        tracker.focus_lost(Timestamp::from_millis(1200));
        assert_eq!(tracker.scroll(Timestamp::from_millis(1400)), None);

        // Once the gate reopens the pending loss is handled
        let leave = tracker.scroll(Timestamp::from_millis(2100));
        assert_eq!(leave, Some(Duration::from_millis(900)));
    }

    #[test]
    fn test_repeated_loss_moves_blur_forward() {
        let mut tracker = FocusTracker::new();

        tracker.focus_lost(Timestamp::from_millis(100));
        tracker.focus_lost(Timestamp::from_millis(600));

        let leave = tracker.focus_regained(Timestamp::from_millis(1000));
        assert_eq!(leave, Some(Duration::from_millis(400)));
    }
}
