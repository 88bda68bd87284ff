//! Scenario simulator - scripted viewport sessions against a virtual clock
//!
//! Drives a real engine with synthetic crossing and focus events. Time
//! never flows on its own; every step advances an explicit clock, so
//! scenarios are fully deterministic.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use vigil_core::{
    CrossingEvent, ElementId, ExposureConfig, ExposureResult, RegisterSpec, Timestamp, VigilResult,
};
use vigil_engine::{DispatchSummary, ExposureEngine};
use vigil_focus::DEFAULT_COOLDOWN;

use crate::{CollectingReporter, RecordingObserver};

/// Scripted session against a virtual clock
pub struct ExposureSimulator {
    engine: ExposureEngine<RecordingObserver, CollectingReporter>,
    observer: RecordingObserver,
    reporter: CollectingReporter,
    now: Timestamp,
}

impl ExposureSimulator {
    /// Simulator starting one virtual second after the epoch
    pub fn new() -> Self {
        ExposureSimulator::starting_at(1_000)
    }

    pub fn starting_at(millis: u64) -> Self {
        let observer = RecordingObserver::new();
        let reporter = CollectingReporter::new();
        let engine = ExposureEngine::new(observer.clone(), reporter.clone());
        ExposureSimulator {
            engine,
            observer,
            reporter,
            now: Timestamp::from_millis(millis),
        }
    }

    pub fn now(&self) -> Timestamp {
        self.now
    }

    /// Advance the virtual clock
    pub fn advance(&mut self, millis: u64) -> Timestamp {
        self.now = self.now + Duration::from_millis(millis);
        self.now
    }

    /// Advance past the regain throttle cooldown
    pub fn settle_throttle(&mut self) -> Timestamp {
        self.advance(DEFAULT_COOLDOWN.as_millis() as u64)
    }

    pub fn register(&mut self, target: ElementId, spec: impl Into<RegisterSpec>) {
        self.engine.register(target, spec);
    }

    pub fn unregister(&mut self, target: ElementId) {
        self.engine.unregister(target);
    }

    /// Deliver a crossing at the given ratio, intersecting
    pub fn enter(&mut self, target: ElementId, ratio: f64) -> VigilResult<DispatchSummary> {
        let event = CrossingEvent::entry(target, ratio, self.now);
        self.engine.handle_intersections(&[event])
    }

    /// Deliver a partial crossing; same shape as `enter`, reads better in
    /// scenarios where the ratio is below threshold
    pub fn dip(&mut self, target: ElementId, ratio: f64) -> VigilResult<DispatchSummary> {
        self.enter(target, ratio)
    }

    /// Deliver a full exit (ratio zero)
    pub fn exit(&mut self, target: ElementId) -> VigilResult<DispatchSummary> {
        let event = CrossingEvent::exit(target, self.now);
        self.engine.handle_intersections(&[event])
    }

    /// Deliver a prebuilt batch
    pub fn deliver(&mut self, events: &[CrossingEvent]) -> VigilResult<DispatchSummary> {
        self.engine.handle_intersections(events)
    }

    pub fn blur(&mut self) {
        self.engine.focus_lost(self.now);
    }

    pub fn refocus(&mut self) {
        self.engine.focus_regained(self.now);
    }

    pub fn scroll(&mut self) {
        self.engine.scroll_resumed(self.now);
    }

    /// Everything the default report action delivered so far
    pub fn results(&self) -> Vec<(ElementId, ExposureResult)> {
        self.reporter.delivered()
    }

    pub fn observer(&self) -> &RecordingObserver {
        &self.observer
    }

    pub fn engine(&self) -> &ExposureEngine<RecordingObserver, CollectingReporter> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut ExposureEngine<RecordingObserver, CollectingReporter> {
        &mut self.engine
    }
}

impl Default for ExposureSimulator {
    fn default() -> Self {
        ExposureSimulator::new()
    }
}

/// Seeded generator of partial-ratio fluctuation
pub struct RatioJitter {
    rng: StdRng,
    lo: f64,
    hi: f64,
}

impl RatioJitter {
    /// Ratios drawn uniformly from `lo..hi`
    pub fn new(seed: u64, lo: f64, hi: f64) -> Self {
        RatioJitter {
            rng: StdRng::seed_from_u64(seed),
            lo,
            hi,
        }
    }

    pub fn next_ratio(&mut self) -> f64 {
        self.rng.gen_range(self.lo..self.hi)
    }

    /// A run of partial crossings spaced `step_ms` apart from `start`
    pub fn dips(
        &mut self,
        target: ElementId,
        start: Timestamp,
        step_ms: u64,
        count: usize,
    ) -> Vec<CrossingEvent> {
        (0..count)
            .map(|i| {
                let at = start + Duration::from_millis(step_ms * (i as u64 + 1));
                CrossingEvent::entry(target, self.next_ratio(), at)
            })
            .collect()
    }
}

/// Predefined scenarios
pub mod scenarios {
    use super::*;

    /// One element registered with the default configuration
    pub fn single_default() -> (ExposureSimulator, ElementId) {
        let mut sim = ExposureSimulator::new();
        let el = ElementId::new(1);
        sim.register(el, ExposureConfig::default());
        (sim, el)
    }

    /// One element with a custom configuration
    pub fn single(config: ExposureConfig) -> (ExposureSimulator, ElementId) {
        let mut sim = ExposureSimulator::new();
        let el = ElementId::new(1);
        sim.register(el, config);
        (sim, el)
    }

    /// Two repeatable elements at a 0.5 threshold
    pub fn repeating_pair() -> (ExposureSimulator, [ElementId; 2]) {
        let mut sim = ExposureSimulator::new();
        let els = [ElementId::new(1), ElementId::new(2)];
        for el in els {
            sim.register(el, ExposureConfig::new().with_ratio(0.5).with_once(false));
        }
        (sim, els)
    }
}
