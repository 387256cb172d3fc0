//! # Dispatch Benchmark
//!
//! REQUIREMENTS:
//! - A frame of cursor-move traffic must not grow the event queue pools
//! - Dispatch over a full panel of buttons stays well under a frame budget
//!
//! Run with: `cargo bench --package kestrel_ui`

// Benchmarks don't need docs
#![allow(missing_docs)]

use std::cell::RefCell;
use std::rc::Rc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kestrel_ui::{
    ButtonStyle, ControlsManager, Event, EventQueue, FixedSurface, KeyEvent, MonospaceMetrics,
    RenderRegistry, UIRenderer,
};

fn manager_with_buttons(count: usize) -> ControlsManager {
    let renderer = Rc::new(RefCell::new(UIRenderer::new()));
    let registry: Rc<RefCell<dyn RenderRegistry>> = renderer;
    let mut manager = ControlsManager::new(
        Rc::new(FixedSurface::new(1280.0, 720.0)),
        Rc::new(MonospaceMetrics::DEFAULT),
        registry,
    );

    for i in 0..count {
        let column = (i % 10) as f32;
        let row = (i / 10) as f32;
        manager
            .create_button("Go", column * 120.0, row * 50.0, 110.0, 40.0, ButtonStyle::Curve)
            .expect("bench button");
    }
    manager
}

/// Benchmark: push and pop through the queue, the steady cursor-move pattern.
fn bench_queue_churn(c: &mut Criterion) {
    c.bench_function("event_queue_churn", |b| {
        let mut queue = EventQueue::with_capacity(1);
        b.iter(|| {
            queue.push(black_box(Event::Keyboard(KeyEvent::new())));
            black_box(queue.pop());
        });
        assert_eq!(queue.recycled_slots().keyboard, 1, "churn must not grow the pool");
    });
}

/// Benchmark: one frame of hover traffic over panels of increasing size.
fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("controls_manager_frame");

    for buttons in [1_usize, 16, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(buttons), &buttons, |b, &buttons| {
            let mut manager = manager_with_buttons(buttons);
            let mut x = 0.0_f64;
            b.iter(|| {
                x = (x + 7.0) % 1200.0;
                manager.on_cursor_move(x, 700.0);
                manager.on_cursor_move(x + 1.0, 700.0);
                manager.update(black_box(0.016)).expect("no handlers installed");
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_queue_churn, bench_frame);
criterion_main!(benches);
