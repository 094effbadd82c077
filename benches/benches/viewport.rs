// Copyright 2026 the Mathview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size, Vec2};
use mathview_affine::Affine;
use mathview_view2d::{AspectPolicy, Camera, CameraMove, ResolvedViewport, ViewBox, ZoomLimits};

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewport_resolve");
    let view_box = ViewBox::new((-2.0, 6.0), (1.0, 3.0));
    let camera = Affine::translate(0.5, -0.25) * Affine::scale(0.5, 0.5);

    for (name, size) in [
        ("square", Size::new(500.0, 500.0)),
        ("wide", Size::new(1920.0, 480.0)),
        ("tall", Size::new(360.0, 1280.0)),
    ] {
        for policy in [AspectPolicy::Contain, AspectPolicy::Stretch] {
            group.bench_with_input(
                BenchmarkId::new(format!("{policy:?}"), name),
                &size,
                |b, &size| {
                    b.iter(|| {
                        ResolvedViewport::resolve(
                            black_box(&view_box),
                            black_box(size),
                            policy,
                            black_box(camera),
                        )
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewport_convert");
    let vp = ResolvedViewport::resolve(
        &ViewBox::default(),
        Size::new(800.0, 600.0),
        AspectPolicy::Contain,
        Affine::scale(0.25, 0.25),
    );

    group.bench_function("screen_to_math", |b| {
        b.iter(|| vp.screen_to_math(black_box(Point::new(123.0, 456.0))));
    });
    group.bench_function("math_to_screen", |b| {
        b.iter(|| vp.math_to_screen(black_box(Point::new(0.75, -0.3))));
    });
    group.bench_function("pixel_delta_to_math", |b| {
        b.iter(|| vp.pixel_delta_to_math(black_box(Vec2::new(12.0, -7.0))));
    });

    group.finish();
}

fn bench_camera(c: &mut Criterion) {
    let mut group = c.benchmark_group("camera");

    group.bench_function("move_by_pan_zoom", |b| {
        let mut camera = Camera::new(ZoomLimits::default());
        camera.set_base();
        let mut i = 0_u32;
        b.iter(|| {
            i = i.wrapping_add(1);
            let t = f64::from(i % 100) * 0.01;
            camera.move_by(
                CameraMove::pan(Vec2::new(t, -t)).with_zoom(Point::new(0.5, 0.5), 1.0 + t),
            );
            black_box(camera.matrix());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_resolve, bench_conversion, bench_camera);
criterion_main!(benches);
