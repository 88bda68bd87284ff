//! Mutex-serialized engine handle for multi-threaded hosts
//!
//! The engine itself is single-threaded by contract; hosts that deliver
//! crossing batches and focus signals from different threads wrap it in
//! a [`SharedEngine`], which serializes every entry point behind one
//! lock.

use std::sync::Arc;

use parking_lot::Mutex;
use vigil_core::{CrossingEvent, ElementId, RegisterSpec, Timestamp, VigilResult};

use crate::{DispatchSummary, ExposureEngine, ExposureReporter, ViewportObserver};

/// Cloneable, thread-safe handle to an [`ExposureEngine`]
pub struct SharedEngine<O, R> {
    inner: Arc<Mutex<ExposureEngine<O, R>>>,
}

impl<O, R> SharedEngine<O, R>
where
    O: ViewportObserver + Send,
    R: ExposureReporter + Send,
{
    pub fn new(engine: ExposureEngine<O, R>) -> Self {
        SharedEngine {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    pub fn register(&self, target: ElementId, spec: impl Into<RegisterSpec>) {
        self.inner.lock().register(target, spec);
    }

    pub fn unregister(&self, target: ElementId) {
        self.inner.lock().unregister(target);
    }

    pub fn handle_intersections(&self, events: &[CrossingEvent]) -> VigilResult<DispatchSummary> {
        self.inner.lock().handle_intersections(events)
    }

    pub fn focus_lost(&self, now: Timestamp) {
        self.inner.lock().focus_lost(now);
    }

    pub fn focus_regained(&self, now: Timestamp) {
        self.inner.lock().focus_regained(now);
    }

    pub fn scroll_resumed(&self, now: Timestamp) {
        self.inner.lock().scroll_resumed(now);
    }

    pub fn is_registered(&self, target: ElementId) -> bool {
        self.inner.lock().is_registered(target)
    }

    /// Run a closure against the locked engine
    pub fn with<T>(&self, f: impl FnOnce(&mut ExposureEngine<O, R>) -> T) -> T {
        f(&mut self.inner.lock())
    }
}

impl<O, R> Clone for SharedEngine<O, R> {
    fn clone(&self) -> Self {
        SharedEngine {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use vigil_core::ExposureConfig;

    use super::*;
    use crate::LogReporter;

    #[derive(Default)]
    struct NullObserver;

    impl ViewportObserver for NullObserver {
        fn start(&mut self, _thresholds: &[f64]) {}
        fn observe(&mut self, _target: ElementId) {}
        fn unobserve(&mut self, _target: ElementId) {}
    }

    #[test]
    fn test_shared_handles_cross_threads() {
        let shared = SharedEngine::new(ExposureEngine::new(NullObserver, LogReporter));
        let el = ElementId::new(1);
        shared.register(el, ExposureConfig::new().with_once(false));

        let worker = {
            let shared = shared.clone();
            std::thread::spawn(move || {
                shared
                    .handle_intersections(&[
                        CrossingEvent::entry(el, 1.0, Timestamp::from_millis(100)),
                        CrossingEvent::exit(el, Timestamp::from_millis(600)),
                    ])
                    .unwrap()
            })
        };

        let summary = worker.join().unwrap();
        assert_eq!(summary.finalized, 1);
        assert!(shared.is_registered(el));
    }
}
