//! Viewport observation seam
//!
//! The underlying intersection-observation primitive is a black box
//! supplied by the host. It is expected to emit [`CrossingEvent`]
//! batches whenever an observed element's ratio crosses one of the
//! requested checkpoints; delivery back into the engine is the host's
//! responsibility.
//!
//! [`CrossingEvent`]: vigil_core::CrossingEvent

use vigil_core::ElementId;

/// Host-side observation primitive
pub trait ViewportObserver {
    /// Start the primitive with the ratio checkpoints to monitor
    ///
    /// Called exactly once per engine, on the first registration.
    fn start(&mut self, thresholds: &[f64]);

    /// Begin observing an element
    fn observe(&mut self, target: ElementId);

    /// Stop observing an element
    ///
    /// Must tolerate handles that were never observed or are already
    /// unobserved.
    fn unobserve(&mut self, target: ElementId);
}
