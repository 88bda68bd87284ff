//! Time primitives for the VIGIL engine
//!
//! Timestamps are host-supplied milliseconds. The engine never reads a
//! clock of its own; every transition is driven by the time carried on
//! the event that caused it.

use std::fmt;
use std::ops::{Add, Sub};
use std::time::Duration;

/// Host timestamp in milliseconds
///
/// `Timestamp::ZERO` doubles as the "unset" sentinel in timing records:
/// a record whose start time is zero is not tracking an exposure.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp(pub u64);

impl Timestamp {
    pub const ZERO: Timestamp = Timestamp(0);

    #[inline]
    pub fn from_millis(millis: u64) -> Self {
        Timestamp(millis)
    }

    #[inline]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    #[inline]
    pub fn as_secs_f64(self) -> f64 {
        self.0 as f64 / 1000.0
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn saturating_add(self, duration: Duration) -> Self {
        Timestamp(self.0.saturating_add(duration.as_millis() as u64))
    }

    #[inline]
    pub fn saturating_sub(self, duration: Duration) -> Self {
        Timestamp(self.0.saturating_sub(duration.as_millis() as u64))
    }
}

impl Add<Duration> for Timestamp {
    type Output = Timestamp;

    #[inline]
    fn add(self, rhs: Duration) -> Self::Output {
        Timestamp(self.0 + rhs.as_millis() as u64)
    }
}

impl Sub<Timestamp> for Timestamp {
    type Output = Duration;

    #[inline]
    fn sub(self, rhs: Timestamp) -> Self::Output {
        Duration::from_millis(self.0.saturating_sub(rhs.0))
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t+{}ms", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_difference() {
        let t1 = Timestamp::from_millis(1000);
        let t2 = Timestamp::from_millis(1500);

        assert_eq!(t2 - t1, Duration::from_millis(500));
        // Differences saturate rather than underflow
        assert_eq!(t1 - t2, Duration::ZERO);
    }

    #[test]
    fn test_timestamp_add_duration() {
        let t = Timestamp::from_millis(100) + Duration::from_millis(250);
        assert_eq!(t.as_millis(), 350);
    }

    #[test]
    fn test_zero_sentinel() {
        assert!(Timestamp::ZERO.is_zero());
        assert!(!Timestamp::from_millis(1).is_zero());
    }
}
