//! Registration API and engine orchestration

use std::time::Duration;

use tracing::debug;
use vigil_core::{
    CrossingEvent, ElementId, ObserverId, RegisterSpec, Timestamp, VigilResult, RATIO_CHECKPOINTS,
};
use vigil_focus::{FocusTracker, DEFAULT_COOLDOWN};

use crate::{DispatchSummary, ExposureMachine, ExposureReporter, ExposureStore, ViewportObserver};

/// Engine configuration
#[derive(Clone, Debug)]
pub struct EngineConfig {
    /// Cooldown applied to focus-regain and scroll signals
    pub regain_cooldown: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            regain_cooldown: DEFAULT_COOLDOWN,
        }
    }
}

/// Exposure engine - registration, dispatch, and focus correction
///
/// Owns one observation primitive, one reporter, one store, and one
/// focus tracker. Engines are independent; a host needing isolation can
/// construct several, each with its own observer.
pub struct ExposureEngine<O, R> {
    observer: O,
    reporter: R,
    store: ExposureStore,
    tracker: FocusTracker,
    machine: ExposureMachine,
    observer_id: ObserverId,
    observer_started: bool,
}

impl<O, R> ExposureEngine<O, R>
where
    O: ViewportObserver,
    R: ExposureReporter,
{
    /// Create an engine with default configuration
    pub fn new(observer: O, reporter: R) -> Self {
        Self::with_config(observer, reporter, EngineConfig::default())
    }

    /// Create an engine with custom configuration
    pub fn with_config(observer: O, reporter: R, config: EngineConfig) -> Self {
        let observer_id = ObserverId::next();
        ExposureEngine {
            observer,
            reporter,
            store: ExposureStore::new(),
            tracker: FocusTracker::with_cooldown(config.regain_cooldown),
            machine: ExposureMachine::new(observer_id),
            observer_id,
            observer_started: false,
        }
    }

    /// Register an element for exposure tracking
    ///
    /// The first registration starts the observation primitive with the
    /// fixed ratio checkpoints. Re-registering an already-registered
    /// element overwrites its configuration and resets its timing record.
    pub fn register(&mut self, target: ElementId, spec: impl Into<RegisterSpec>) {
        self.ensure_started();
        self.store.insert(target, spec.into().into_config());
        self.observer.observe(target);
        debug!(element = %target, "element registered");
    }

    /// Register an element with a bare callback over default configuration
    pub fn register_callback<F>(&mut self, target: ElementId, callback: F)
    where
        F: Fn(&vigil_core::ExposureResult, &CrossingEvent, ObserverId) -> bool
            + Send
            + Sync
            + 'static,
    {
        self.register(target, RegisterSpec::callback(callback));
    }

    /// Stop tracking an element
    ///
    /// Safe to call for handles that are not registered; repeated calls
    /// are no-ops.
    pub fn unregister(&mut self, target: ElementId) {
        if self.store.remove(target).is_some() {
            debug!(element = %target, "element unregistered");
        }
        if self.observer_started {
            self.observer.unobserve(target);
        }
    }

    /// Dispatch a batch of crossing events from the observation primitive
    pub fn handle_intersections(
        &mut self,
        events: &[CrossingEvent],
    ) -> VigilResult<DispatchSummary> {
        self.machine
            .process_batch(&mut self.store, &mut self.observer, &mut self.reporter, events)
    }

    /// The viewport lost focus at `now`
    pub fn focus_lost(&mut self, now: Timestamp) {
        self.tracker.focus_lost(now);
    }

    /// The viewport regained focus at `now`
    pub fn focus_regained(&mut self, now: Timestamp) {
        if let Some(leave) = self.tracker.focus_regained(now) {
            self.stamp(leave);
        }
    }

    /// The viewport scrolled at `now`; regain-equivalent
    pub fn scroll_resumed(&mut self, now: Timestamp) {
        if let Some(leave) = self.tracker.scroll(now) {
            self.stamp(leave);
        }
    }

    fn stamp(&mut self, leave: Duration) {
        let stamped = self.store.stamp_leave(leave);
        debug!(
            stamped,
            leave_ms = leave.as_millis() as u64,
            "away interval attributed to open exposures"
        );
    }

    fn ensure_started(&mut self) {
        if !self.observer_started {
            self.observer.start(&RATIO_CHECKPOINTS);
            self.observer_started = true;
        }
    }

    pub fn is_registered(&self, target: ElementId) -> bool {
        self.store.contains(target)
    }

    pub fn observer_id(&self) -> ObserverId {
        self.observer_id
    }

    /// Read access to the store, mainly for inspection and tests
    pub fn store(&self) -> &ExposureStore {
        &self.store
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }
}
