//! Recording doubles for the engine's external seams
//!
//! Each double is a cheap cloneable handle over shared state, so a test
//! can hand one clone to the engine and keep another for inspection.

use std::sync::Arc;

use parking_lot::Mutex;
use vigil_core::{ElementId, ExposureResult, VigilError, VigilResult};
use vigil_engine::{ExposureReporter, ViewportObserver};

/// Observation primitive that records every call made to it
#[derive(Clone, Default)]
pub struct RecordingObserver {
    state: Arc<Mutex<ObserverLog>>,
}

/// What a [`RecordingObserver`] saw
#[derive(Clone, Debug, Default)]
pub struct ObserverLog {
    pub started_with: Option<Vec<f64>>,
    pub observed: Vec<ElementId>,
    pub unobserved: Vec<ElementId>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        RecordingObserver::default()
    }

    pub fn log(&self) -> ObserverLog {
        self.state.lock().clone()
    }

    /// Whether observation for `target` is currently active
    pub fn is_observing(&self, target: ElementId) -> bool {
        let log = self.state.lock();
        let observed = log.observed.iter().filter(|el| **el == target).count();
        let unobserved = log.unobserved.iter().filter(|el| **el == target).count();
        observed > unobserved
    }
}

impl ViewportObserver for RecordingObserver {
    fn start(&mut self, thresholds: &[f64]) {
        self.state.lock().started_with = Some(thresholds.to_vec());
    }

    fn observe(&mut self, target: ElementId) {
        self.state.lock().observed.push(target);
    }

    fn unobserve(&mut self, target: ElementId) {
        self.state.lock().unobserved.push(target);
    }
}

/// Reporter that collects every delivered result
#[derive(Clone, Default)]
pub struct CollectingReporter {
    delivered: Arc<Mutex<Vec<(ElementId, ExposureResult)>>>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        CollectingReporter::default()
    }

    pub fn delivered(&self) -> Vec<(ElementId, ExposureResult)> {
        self.delivered.lock().clone()
    }

    pub fn count(&self) -> usize {
        self.delivered.lock().len()
    }
}

impl ExposureReporter for CollectingReporter {
    fn deliver(&mut self, result: &ExposureResult, target: ElementId) -> VigilResult<()> {
        self.delivered.lock().push((target, *result));
        Ok(())
    }
}

/// Reporter whose sink is permanently down
#[derive(Clone, Copy, Debug, Default)]
pub struct FailingReporter;

impl ExposureReporter for FailingReporter {
    fn deliver(&mut self, _result: &ExposureResult, _target: ElementId) -> VigilResult<()> {
        Err(VigilError::ReportDelivery("sink unavailable".into()))
    }
}

/// Spy over exposure callbacks
///
/// `as_callback` yields a callback that records each invocation and
/// returns the configured claim value.
#[derive(Clone, Default)]
pub struct CallbackSpy {
    calls: Arc<Mutex<Vec<ExposureResult>>>,
    claim: bool,
}

impl CallbackSpy {
    pub fn new(claim: bool) -> Self {
        CallbackSpy {
            calls: Arc::new(Mutex::new(Vec::new())),
            claim,
        }
    }

    pub fn as_callback(&self) -> vigil_core::ExposureCallback {
        let spy = self.clone();
        Arc::new(move |result, _event, _observer| {
            spy.calls.lock().push(*result);
            spy.claim
        })
    }

    pub fn calls(&self) -> Vec<ExposureResult> {
        self.calls.lock().clone()
    }
}
