use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rs_kinematics::apis::easy_kinematics::EasyKinematics;
use rs_kinematics::calculators::Values;
use rs_kinematics::catalogs::variables;
use rs_kinematics::motion::CircularParticle;

pub fn bench_state(c: &mut Criterion) {
    let mut group = c.benchmark_group("particle_state");
    let particle = CircularParticle::accelerated(2.0, 1.0, 0.5).unwrap();
    let times: Vec<f64> = (0..10_000).map(|i| i as f64 * 0.001).collect();

    group.bench_function("state_sequential", |b| b.iter(|| {
        times.iter().map(|&t| particle.state(black_box(t))).count()
    }));

    group.bench_function("sample_path", |b| b.iter(|| {
        particle.sample_path(black_box(&times))
    }));

    group.finish();
}

pub fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");
    let calculator = EasyKinematics::new();

    let direct = Values::new()
        .with(variables::LINEAR_VELOCITY, 10.0)
        .with(variables::ANGULAR_VELOCITY, 2.0);
    group.bench_function("radius_first_method", |b| b.iter(|| {
        calculator.resolve(black_box(variables::RADIUS), &direct)
    }));

    // The preferred methods are rejected, so the engine falls through to the last one.
    let fallback = Values::new()
        .with(variables::LINEAR_VELOCITY, 10.0)
        .with(variables::ANGULAR_VELOCITY, 0.0)
        .with(variables::CENTRIPETAL_ACCELERATION, 20.0);
    group.bench_function("radius_fallback", |b| b.iter(|| {
        calculator.resolve(black_box(variables::RADIUS), &fallback)
    }));

    group.bench_function("unknown_target", |b| b.iter(|| {
        calculator.resolve(black_box("temperature"), &direct)
    }));

    group.finish();
}

criterion_group!(benches, bench_state, bench_resolve);
criterion_main!(benches);
