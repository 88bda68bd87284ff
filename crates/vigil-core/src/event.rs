//! Crossing events delivered by the observation primitive

use crate::{ElementId, Timestamp};

/// Ratio checkpoints requested of the observation primitive
///
/// Coarse enough to catch threshold crossings without per-pixel event
/// storms.
pub const RATIO_CHECKPOINTS: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

/// A ratio-threshold crossing for one observed element
///
/// Batches may interleave events for multiple elements; events for the
/// same element arrive in chronological order.
#[derive(Clone, Copy, Debug)]
pub struct CrossingEvent {
    /// The element whose intersection ratio crossed a checkpoint
    pub target: ElementId,
    /// Whether the element currently intersects the viewport at all
    pub is_intersecting: bool,
    /// Intersection ratio at the crossing, in [0, 1]
    pub ratio: f64,
    /// Host timestamp of the crossing
    pub time: Timestamp,
}

impl CrossingEvent {
    pub fn new(target: ElementId, is_intersecting: bool, ratio: f64, time: Timestamp) -> Self {
        CrossingEvent {
            target,
            is_intersecting,
            ratio,
            time,
        }
    }

    /// Crossing into the viewport at the given ratio
    pub fn entry(target: ElementId, ratio: f64, time: Timestamp) -> Self {
        CrossingEvent::new(target, true, ratio, time)
    }

    /// Crossing fully out of the viewport
    pub fn exit(target: ElementId, time: Timestamp) -> Self {
        CrossingEvent::new(target, false, 0.0, time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkpoints_ordered() {
        for pair in RATIO_CHECKPOINTS.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert_eq!(RATIO_CHECKPOINTS[0], 0.0);
        assert_eq!(RATIO_CHECKPOINTS[4], 1.0);
    }

    #[test]
    fn test_exit_event_shape() {
        let ev = CrossingEvent::exit(ElementId::new(3), Timestamp::from_millis(100));
        assert!(!ev.is_intersecting);
        assert_eq!(ev.ratio, 0.0);
    }
}
