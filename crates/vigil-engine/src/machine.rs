//! Exposure state machine - crossing-event transition pipeline
//!
//! Per element the machine knows two states: idle (no start time) and
//! exposed (start time set, end time pending). Entry at or above the
//! configured ratio opens an exposure; only a return to exactly zero
//! closes it. Partial dips in between carry no transitions, so one
//! exposure may span arbitrary ratio fluctuation above zero.

use tracing::debug;
use vigil_core::{CrossingEvent, ExposureResult, ObserverId, VigilResult};

use crate::{ExposureReporter, ExposureStore, ViewportObserver};

/// What a single crossing event did to its element
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventOutcome {
    /// An exposure opened
    Entered,
    /// An open exposure closed and produced a result
    Finalized {
        /// Whether the default report action ran (callback did not claim it)
        reported: bool,
    },
    /// Ratio returned to zero with no exposure open; record wiped
    Cleared,
    /// No configuration for the element; event dropped
    Stale,
    /// Informational crossing, no transition
    Unchanged,
}

/// Counters for one dispatched batch
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DispatchSummary {
    pub entered: u32,
    pub finalized: u32,
    pub reported: u32,
    pub cleared: u32,
    pub stale: u32,
    pub unchanged: u32,
}

/// Drives element timing records from crossing events
pub struct ExposureMachine {
    observer_id: ObserverId,
}

impl ExposureMachine {
    pub fn new(observer_id: ObserverId) -> Self {
        ExposureMachine { observer_id }
    }

    pub fn observer_id(&self) -> ObserverId {
        self.observer_id
    }

    /// Process a batch of crossing events
    pub fn process_batch<O, R>(
        &self,
        store: &mut ExposureStore,
        observer: &mut O,
        reporter: &mut R,
        events: &[CrossingEvent],
    ) -> VigilResult<DispatchSummary>
    where
        O: ViewportObserver,
        R: ExposureReporter,
    {
        let mut summary = DispatchSummary::default();

        for event in events {
            match self.process_event(store, observer, reporter, event)? {
                EventOutcome::Entered => summary.entered += 1,
                EventOutcome::Finalized { reported } => {
                    summary.finalized += 1;
                    if reported {
                        summary.reported += 1;
                    }
                }
                EventOutcome::Cleared => summary.cleared += 1,
                EventOutcome::Stale => summary.stale += 1,
                EventOutcome::Unchanged => summary.unchanged += 1,
            }
        }

        Ok(summary)
    }

    /// Process one crossing event
    pub fn process_event<O, R>(
        &self,
        store: &mut ExposureStore,
        observer: &mut O,
        reporter: &mut R,
        event: &CrossingEvent,
    ) -> VigilResult<EventOutcome>
    where
        O: ViewportObserver,
        R: ExposureReporter,
    {
        // Handles may arrive after unregistration; in-flight delivery is
        // asynchronous on the host side
        let Some(entry) = store.get_mut(event.target) else {
            debug!(element = %event.target, "crossing event for unregistered element dropped");
            return Ok(EventOutcome::Stale);
        };

        if event.is_intersecting && event.ratio >= entry.config.ratio {
            if entry.record.is_tracking() {
                // Re-entering at threshold while already tracking does
                // not reset the start
                return Ok(EventOutcome::Unchanged);
            }
            entry.record.start_time = event.time;
            debug!(element = %event.target, at = ?event.time, "exposure started");
            return Ok(EventOutcome::Entered);
        }

        // Exactly zero by contract: partial dips above zero never close
        // an exposure
        if event.ratio == 0.0 {
            entry.record.end_time = event.time;

            let open = if entry.record.is_tracking() {
                Some((
                    ExposureResult::from_record(&entry.record),
                    entry.config.callback.clone(),
                    entry.config.once,
                ))
            } else {
                None
            };

            let outcome = match open {
                Some((result, callback, once)) => {
                    let claimed = callback(&result, event, self.observer_id);
                    if !claimed {
                        reporter.deliver(&result, event.target)?;
                    }
                    debug!(
                        element = %event.target,
                        time_ms = result.time.as_millis() as u64,
                        leave_ms = result.leave_time.as_millis() as u64,
                        claimed,
                        "exposure finalized"
                    );
                    if once {
                        store.remove(event.target);
                        observer.unobserve(event.target);
                    }
                    EventOutcome::Finalized { reported: !claimed }
                }
                None => EventOutcome::Cleared,
            };

            // Whatever remains registered starts the next cycle clean
            if let Some(entry) = store.get_mut(event.target) {
                entry.record.reset();
            }
            return Ok(outcome);
        }

        Ok(EventOutcome::Unchanged)
    }
}
