//! Exposure state store - per-element configuration and timing records

use std::collections::HashMap;
use std::time::Duration;

use vigil_core::{ElementId, ExposureConfig, TimingRecord};

/// Configuration and timing state for one registered element
///
/// Pairing both in a single entry keeps the store invariant structural:
/// an element has a configuration exactly when it has a timing record.
#[derive(Clone, Debug)]
pub struct ElementEntry {
    pub config: ExposureConfig,
    pub record: TimingRecord,
}

impl ElementEntry {
    pub fn new(config: ExposureConfig) -> Self {
        ElementEntry {
            config,
            record: TimingRecord::zeroed(),
        }
    }
}

/// Registry of all currently tracked elements
///
/// Owned by a single engine instance; multiple independent engines can
/// coexist, each with its own store.
#[derive(Debug, Default)]
pub struct ExposureStore {
    entries: HashMap<ElementId, ElementEntry>,
}

impl ExposureStore {
    pub fn new() -> Self {
        ExposureStore::default()
    }

    /// Insert or overwrite an element's configuration with a fresh
    /// zeroed timing record
    pub fn insert(&mut self, target: ElementId, config: ExposureConfig) {
        self.entries.insert(target, ElementEntry::new(config));
    }

    pub fn get(&self, target: ElementId) -> Option<&ElementEntry> {
        self.entries.get(&target)
    }

    pub fn get_mut(&mut self, target: ElementId) -> Option<&mut ElementEntry> {
        self.entries.get_mut(&target)
    }

    pub fn remove(&mut self, target: ElementId) -> Option<ElementEntry> {
        self.entries.remove(&target)
    }

    pub fn contains(&self, target: ElementId) -> bool {
        self.entries.contains_key(&target)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ElementId, &ElementEntry)> {
        self.entries.iter()
    }

    /// The timing record for an element, if registered
    pub fn record(&self, target: ElementId) -> Option<&TimingRecord> {
        self.entries.get(&target).map(|entry| &entry.record)
    }

    /// Stamp an away interval onto every record that is mid-exposure
    ///
    /// Records without an open exposure are untouched. Returns the
    /// number of records stamped.
    pub fn stamp_leave(&mut self, leave: Duration) -> usize {
        let mut stamped = 0;
        for entry in self.entries.values_mut() {
            if entry.record.is_tracking() {
                entry.record.leave_time = leave;
                stamped += 1;
            }
        }
        stamped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vigil_core::Timestamp;

    #[test]
    fn test_store_basic() {
        let mut store = ExposureStore::new();
        let el = ElementId::new(1);

        store.insert(el, ExposureConfig::default());
        assert!(store.contains(el));
        assert_eq!(store.len(), 1);
        assert_eq!(store.record(el), Some(&TimingRecord::zeroed()));

        store.remove(el);
        assert!(store.is_empty());
    }

    #[test]
    fn test_reinsert_resets_record() {
        let mut store = ExposureStore::new();
        let el = ElementId::new(1);

        store.insert(el, ExposureConfig::default());
        store.get_mut(el).unwrap().record.start_time = Timestamp::from_millis(500);

        store.insert(el, ExposureConfig::new().with_ratio(0.5));
        let entry = store.get(el).unwrap();
        assert_eq!(entry.config.ratio, 0.5);
        assert_eq!(entry.record, TimingRecord::zeroed());
    }

    #[test]
    fn test_stamp_leave_only_touches_open_exposures() {
        let mut store = ExposureStore::new();
        let open = ElementId::new(1);
        let idle = ElementId::new(2);

        store.insert(open, ExposureConfig::default());
        store.insert(idle, ExposureConfig::default());
        store.get_mut(open).unwrap().record.start_time = Timestamp::from_millis(100);

        let stamped = store.stamp_leave(Duration::from_millis(250));
        assert_eq!(stamped, 1);
        assert_eq!(
            store.record(open).unwrap().leave_time,
            Duration::from_millis(250)
        );
        assert_eq!(store.record(idle).unwrap().leave_time, Duration::ZERO);
    }
}
