//! Identity types for the VIGIL engine
//!
//! Elements are identified by opaque 64-bit handles. The engine never
//! controls an element's lifecycle; it only reacts to events keyed by
//! these handles.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Element identity - opaque handle usable as a map key
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct ElementId(pub u64);

impl ElementId {
    #[inline]
    pub fn new(id: u64) -> Self {
        ElementId(id)
    }

    #[inline]
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl From<u64> for ElementId {
    #[inline]
    fn from(id: u64) -> Self {
        ElementId(id)
    }
}

impl fmt::Debug for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "El({})", self.0)
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

static NEXT_OBSERVER_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a shared observation primitive
///
/// Handed to exposure callbacks as their third argument so consumers can
/// correlate results with the observer instance that produced them.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ObserverId(pub u64);

impl ObserverId {
    #[inline]
    pub fn new(id: u64) -> Self {
        ObserverId(id)
    }

    /// Allocate a fresh process-unique observer identity
    pub fn next() -> Self {
        ObserverId(NEXT_OBSERVER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Debug for ObserverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Obs({})", self.0)
    }
}
