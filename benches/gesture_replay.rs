// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for gesture handling.
//!
//! Measures the performance of:
//! - A long interleaved gesture sequence through the engine
//! - Script replay through a full viewer session

use criterion::{criterion_group, criterion_main, Criterion};
use photo_lens::replay::{self, GestureScript, ScriptEvent};
use photo_lens::ui::state::GestureTuning;
use photo_lens::ui::viewer::{GestureEngine, GestureEvent};
use std::hint::black_box;
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);

/// One drag that snaps back, one pinch zoom, one double tap.
fn gesture_cycle(step: usize) -> Vec<GestureEvent> {
    let mut events = vec![GestureEvent::PanStart];
    events.extend((0..30).map(|i| GestureEvent::PanMove {
        dx: 0.0,
        dy: (i * 5 + step % 7) as f32,
    }));
    events.push(GestureEvent::PanEnd { velocity_y: 10.0 });
    events.push(GestureEvent::DoubleTap);
    events.push(GestureEvent::PinchStart);
    events.extend((0..20).map(|i| GestureEvent::PinchMove {
        scale: 1.5 + i as f32 * 0.02,
    }));
    events.push(GestureEvent::PinchEnd { scale: 1.9 });
    events.push(GestureEvent::PinchFinish { scale: 1.9 });
    events.push(GestureEvent::DoubleTap);
    events
}

/// Benchmark the engine alone over many cycles with frame ticks in between.
fn bench_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture_replay");
    let events: Vec<GestureEvent> = (0..100).flat_map(gesture_cycle).collect();

    group.bench_function("engine_long_sequence", |b| {
        b.iter(|| {
            let mut engine = GestureEngine::new(GestureTuning::default());
            for event in &events {
                engine.handle(*event);
                engine.tick(FRAME);
            }
            black_box(engine.snapshot());
        });
    });

    group.finish();
}

/// Benchmark replay through a session, including frame recording.
fn bench_replay(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture_replay");
    let script = GestureScript {
        screen: None,
        asset: None,
        events: (0..100)
            .flat_map(gesture_cycle)
            .flat_map(|event| [to_script(event), ScriptEvent::Tick { ms: 16 }])
            .collect(),
    };

    group.bench_function("session_replay", |b| {
        b.iter(|| black_box(replay::run(&script, GestureTuning::default())));
    });

    group.finish();
}

fn to_script(event: GestureEvent) -> ScriptEvent {
    match event {
        GestureEvent::PanStart => ScriptEvent::PanStart,
        GestureEvent::PanMove { dx, dy } => ScriptEvent::PanMove { dx, dy },
        GestureEvent::PanEnd { velocity_y } => ScriptEvent::PanEnd { velocity_y },
        GestureEvent::PinchStart => ScriptEvent::PinchStart,
        GestureEvent::PinchMove { scale } => ScriptEvent::PinchMove { scale },
        GestureEvent::PinchEnd { scale } => ScriptEvent::PinchEnd { scale },
        GestureEvent::PinchFinish { scale } => ScriptEvent::PinchFinish { scale },
        GestureEvent::DoubleTap => ScriptEvent::DoubleTap,
    }
}

criterion_group!(benches, bench_engine, bench_replay);
criterion_main!(benches);
