//! Criterion benchmarks for the per-frame hot paths.
//!
//! Run with:
//!   cargo bench
//!
//! Covers:
//!   - compute_pose (easing + modulation math)
//!   - Timeline::scene_at (phase application + clone)
//!   - state URL encoding (serde_json + base64)

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use shedcap::camera::{compute_pose, Easing, PathParams};
use shedcap::capture::builtin;
use shedcap::scene::transport::encode_state;

fn bench_compute_pose(c: &mut Criterion) {
    let params = PathParams::orbit(-2.15, 1.1, 12.0, Easing::TrapezoidalB);
    c.bench_function("compute_pose_orbit", |b| {
        b.iter(|| {
            for frame in 0..360u32 {
                let t = f64::from(frame) / 360.0;
                black_box(compute_pose(black_box(t), &params));
            }
        });
    });
}

fn bench_scene_at(c: &mut Criterion) {
    let walkthrough = builtin("walkthrough").unwrap();
    c.bench_function("scene_at_walkthrough", |b| {
        b.iter(|| {
            black_box(walkthrough.timeline.scene_at(black_box(135)));
        });
    });
}

fn bench_encode_state(c: &mut Criterion) {
    let morph = builtin("morph").unwrap();
    let scene = morph.timeline.scene_at(90);
    c.bench_function("encode_state", |b| {
        b.iter(|| {
            black_box(encode_state(black_box(&scene)).unwrap());
        });
    });
}

criterion_group!(
    benches,
    bench_compute_pose,
    bench_scene_at,
    bench_encode_state
);
criterion_main!(benches);
