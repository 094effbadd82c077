// Copyright 2026 the Mathview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use mathview_affine::{Affine, AffineBuilder};

fn zoom_about(at: Point, factor: f64) -> Affine {
    AffineBuilder::new()
        .translate(-at.x, -at.y)
        .scale(factor, factor)
        .translate(at.x, at.y)
        .build()
}

fn bench_affine(c: &mut Criterion) {
    let mut group = c.benchmark_group("affine");
    let m = Affine::translate(3.0, -4.0) * Affine::rotate(0.3) * Affine::scale(2.0, 0.5);
    let n = zoom_about(Point::new(1.5, -0.5), 0.8);

    group.bench_function("compose", |b| {
        b.iter(|| Affine::compose(black_box(m), black_box(n)));
    });
    group.bench_function("invert", |b| {
        b.iter(|| black_box(m).invert());
    });
    group.bench_function("builder_zoom_about", |b| {
        b.iter(|| zoom_about(black_box(Point::new(1.5, -0.5)), black_box(0.8)));
    });
    group.bench_function("apply_1k_points", |b| {
        let points: Vec<Point> = (0..1000)
            .map(|i| Point::new(f64::from(i) * 0.01, f64::from(i % 37) - 18.0))
            .collect();
        b.iter(|| {
            let sum = points.iter().fold(0.0, |acc, &p| {
                let q = black_box(m) * p;
                acc + q.x + q.y
            });
            black_box(sum);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_affine);
criterion_main!(benches);
