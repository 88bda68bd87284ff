//! Dispatch throughput for crossing-event batches

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use vigil_core::{CrossingEvent, ElementId, ExposureConfig, Timestamp};
use vigil_engine::ExposureEngine;
use vigil_test::{CollectingReporter, RecordingObserver};

const ELEMENTS: u64 = 50;
const CYCLES: u64 = 10;

fn batch() -> Vec<CrossingEvent> {
    let mut events = Vec::with_capacity((ELEMENTS * CYCLES * 2) as usize);
    for cycle in 0..CYCLES {
        for el in 0..ELEMENTS {
            let base = cycle * 1000 + el * 2;
            events.push(CrossingEvent::entry(
                ElementId::new(el),
                0.8,
                Timestamp::from_millis(base + 1),
            ));
            events.push(CrossingEvent::exit(
                ElementId::new(el),
                Timestamp::from_millis(base + 2),
            ));
        }
    }
    events
}

fn bench_dispatch(c: &mut Criterion) {
    let mut engine = ExposureEngine::new(RecordingObserver::new(), CollectingReporter::new());
    for el in 0..ELEMENTS {
        engine.register(
            ElementId::new(el),
            ExposureConfig::new().with_ratio(0.5).with_once(false),
        );
    }
    let events = batch();

    c.bench_function("dispatch_crossing_batch", |b| {
        b.iter(|| engine.handle_intersections(black_box(&events)).unwrap())
    });
}

criterion_group!(benches, bench_dispatch);
criterion_main!(benches);
