//! Report delivery seam

use tracing::info;
use vigil_core::{ElementId, ExposureResult, VigilResult};

/// Consumer of finalized exposures whose callback did not claim them
pub trait ExposureReporter {
    /// Deliver a finalized result
    ///
    /// Invoked after finalization unless the element's callback returned
    /// `true`. Errors propagate out of the dispatch call to the host.
    fn deliver(&mut self, result: &ExposureResult, target: ElementId) -> VigilResult<()>;
}

/// Default reporter: logs the finalized exposure
#[derive(Clone, Copy, Debug, Default)]
pub struct LogReporter;

impl ExposureReporter for LogReporter {
    fn deliver(&mut self, result: &ExposureResult, target: ElementId) -> VigilResult<()> {
        info!(
            element = %target,
            time_ms = result.time.as_millis() as u64,
            leave_ms = result.leave_time.as_millis() as u64,
            "delivering exposure report"
        );
        Ok(())
    }
}
