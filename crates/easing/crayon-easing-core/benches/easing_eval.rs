//! Per-sample cost of easing evaluation.
//!
//! Run with: `cargo bench --bench easing_eval`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use crayon_easing_core::{evaluate, CubicBezier, Easing, EasingCurve, Tween};

fn bench_named(c: &mut Criterion) {
    let mut group = c.benchmark_group("named_easing");
    for easing in [
        Easing::Linear,
        Easing::CubicInOut,
        Easing::ElasticInOut,
        Easing::BounceOut,
        Easing::ExponentialInOut,
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(easing), &easing, |b, e| {
            b.iter(|| {
                let mut acc = 0.0f32;
                for i in 0..=100 {
                    acc += evaluate(*e, black_box(i as f32 / 100.0));
                }
                black_box(acc)
            });
        });
    }
    group.finish();
}

fn bench_bezier(c: &mut Criterion) {
    let mut group = c.benchmark_group("cubic_bezier");
    let curves = [
        ("ease", CubicBezier::EASE),
        ("ease_in_out", CubicBezier::EASE_IN_OUT),
        ("cubic_in_out", CubicBezier::new(0.645, 0.045, 0.355, 1.0)),
        ("flat_ends", CubicBezier::new(1.0, 0.0, 0.0, 1.0)),
    ];
    for (name, curve) in curves {
        group.bench_with_input(BenchmarkId::from_parameter(name), &curve, |b, curve| {
            b.iter(|| {
                let mut acc = 0.0f32;
                for i in 0..=100 {
                    acc += curve.solve(black_box(i as f32 / 100.0));
                }
                black_box(acc)
            });
        });
    }
    group.bench_function("parse_and_solve", |b| {
        b.iter(|| {
            let curve: CubicBezier = black_box("0.25,0.1,0.25,1.0").parse().unwrap();
            black_box(curve.solve(0.5))
        });
    });
    group.finish();
}

fn bench_tween(c: &mut Criterion) {
    c.bench_function("tween_vec3_60fps_1s", |b| {
        let curve = EasingCurve::from(CubicBezier::EASE);
        b.iter(|| {
            let mut tween = Tween::new([0.0f32; 3], [1.0, 2.0, 3.0], 1.0, curve);
            while !tween.advance(black_box(1.0 / 60.0)).is_finished() {}
            black_box(tween.end())
        });
    });
}

criterion_group!(benches, bench_named, bench_bezier, bench_tween);
criterion_main!(benches);
