// Copyright 2026 the Mathview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size, Vec2};
use mathview::{Canvas, CanvasConfig, GestureSink, ViewBox, ZoomConfig};

const FRAMES: u32 = 120;

fn sized_canvas() -> Canvas {
    let config = CanvasConfig {
        zoom: ZoomConfig::Enabled,
        ..CanvasConfig::default()
    };
    let mut canvas = Canvas::new(ViewBox::default(), config).expect("default view box is valid");
    canvas.resize(Size::new(1280.0, 720.0));
    canvas.subscribe(|vp| {
        black_box(vp.math_rect());
    });
    canvas
}

fn bench_gestures(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture_stream");

    group.bench_function(format!("pinch_and_pan(frames={FRAMES})"), |b| {
        b.iter_batched(
            sized_canvas,
            |mut canvas| {
                canvas.on_gesture_start();
                for frame in 0..FRAMES {
                    let t = f64::from(frame) / f64::from(FRAMES);
                    canvas.on_gesture_update(
                        Point::new(640.0 + 40.0 * t, 360.0 - 20.0 * t),
                        1.0 + t,
                        Vec2::new(1.5, -0.5),
                    );
                }
                canvas.on_gesture_end();
                black_box(canvas.camera().zoom());
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function(format!("wheel(steps={FRAMES})"), |b| {
        b.iter_batched(
            sized_canvas,
            |mut canvas| {
                for step in 0..FRAMES {
                    let delta = if step % 2 == 0 { 120.0 } else { -90.0 };
                    canvas.on_scroll(delta, Point::new(300.0, 200.0));
                }
                black_box(canvas.camera().zoom());
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_gestures);
criterion_main!(benches);
