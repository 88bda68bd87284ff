//! Timing records and finalized exposure results

use std::time::Duration;

use crate::Timestamp;

/// In-flight timing state for one registered element
///
/// INVARIANT: `start_time == Timestamp::ZERO` means no exposure is being
/// tracked; away-time attribution is skipped for such records.
/// `start_time` set with `end_time` zero means the exposure is live.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimingRecord {
    /// When the element first reached its configured ratio
    pub start_time: Timestamp,
    /// When the element's ratio returned to exactly zero
    pub end_time: Timestamp,
    /// Most recent viewport-away interval overlapping this exposure
    ///
    /// Overwritten, not accumulated, on every focus regain. Only the last
    /// away/return cycle before finalization survives into the result;
    /// known limitation.
    pub leave_time: Duration,
}

impl TimingRecord {
    pub const fn zeroed() -> Self {
        TimingRecord {
            start_time: Timestamp::ZERO,
            end_time: Timestamp::ZERO,
            leave_time: Duration::ZERO,
        }
    }

    /// Whether an exposure is currently being timed
    #[inline]
    pub fn is_tracking(&self) -> bool {
        !self.start_time.is_zero()
    }

    /// Return the record to its initial state so the element can be
    /// tracked again on a future entry
    pub fn reset(&mut self) {
        *self = TimingRecord::zeroed();
    }
}

/// Finalized exposure measurement handed to callbacks and reporters
///
/// `time` is the raw dwell duration between entry and exit. It is NOT
/// netted against `leave_time`; whether and how to discount the away
/// interval is the consumer's decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExposureResult {
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub leave_time: Duration,
    /// Raw dwell duration, `end_time - start_time`
    pub time: Duration,
}

impl ExposureResult {
    /// Snapshot a record at finalization
    pub fn from_record(record: &TimingRecord) -> Self {
        ExposureResult {
            start_time: record.start_time,
            end_time: record.end_time,
            leave_time: record.leave_time,
            time: record.end_time - record.start_time,
        }
    }

    /// Dwell duration with the away interval discounted
    ///
    /// Explicit consumer-side netting of `time` against `leave_time`;
    /// saturates at zero.
    pub fn attentive_time(&self) -> Duration {
        self.time.saturating_sub(self.leave_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_lifecycle() {
        let mut record = TimingRecord::zeroed();
        assert!(!record.is_tracking());

        record.start_time = Timestamp::from_millis(1000);
        assert!(record.is_tracking());

        record.reset();
        assert_eq!(record, TimingRecord::zeroed());
    }

    #[test]
    fn test_result_raw_time() {
        let record = TimingRecord {
            start_time: Timestamp::from_millis(1000),
            end_time: Timestamp::from_millis(1500),
            leave_time: Duration::from_millis(200),
        };
        let result = ExposureResult::from_record(&record);

        assert_eq!(result.time, Duration::from_millis(500));
        assert_eq!(result.leave_time, Duration::from_millis(200));
        assert_eq!(result.attentive_time(), Duration::from_millis(300));
    }

    #[test]
    fn test_attentive_time_saturates() {
        let record = TimingRecord {
            start_time: Timestamp::from_millis(1000),
            end_time: Timestamp::from_millis(1100),
            leave_time: Duration::from_millis(500),
        };
        let result = ExposureResult::from_record(&record);

        assert_eq!(result.attentive_time(), Duration::ZERO);
    }
}
