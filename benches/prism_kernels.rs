use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use geo_fields::dipole;
use geo_fields::forward::{collect_field_on_points, ForwardConfig};
use geo_fields::math::R3;
use geo_fields::prism::{self, MagnetizedPrism, Prism};

fn observation_grid(n: usize) -> Vec<R3> {
    let step = 1_000.0 / n as f64;
    (0..n * n)
        .map(|idx| R3::new((idx % n) as f64 * step, (idx / n) as f64 * step, 10.0))
        .collect()
}

fn bench_single_pair(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_pair");
    let cube = Prism::new(-50.0, 50.0, -50.0, 50.0, -150.0, -50.0);
    let magnetization = R3::new(0.5, -0.3, 1.2);
    let point = R3::new(12.0, -31.0, 5.0);

    group.bench_function("prism_field", |b| {
        b.iter(|| {
            prism::magnetic_field(black_box(point), black_box(&cube), black_box(magnetization))
        })
    });
    group.bench_function("prism_three_components", |b| {
        b.iter(|| {
            let point = black_box(point);
            (
                prism::magnetic_e(point, &cube, magnetization),
                prism::magnetic_n(point, &cube, magnetization),
                prism::magnetic_u(point, &cube, magnetization),
            )
        })
    });
    group.bench_function("prism_upward", |b| {
        b.iter(|| prism::magnetic_u(black_box(point), black_box(&cube), black_box(magnetization)))
    });
    group.bench_function("dipole_field", |b| {
        let moment = magnetization * cube.volume();
        b.iter(|| dipole::magnetic_field(black_box(point), cube.center(), black_box(moment)))
    });
    group.finish();
}

fn bench_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("forward_grid");
    let sources: Vec<MagnetizedPrism> = (0..16)
        .map(|i| {
            let west = i as f64 * 60.0;
            MagnetizedPrism::new(
                Prism::new(west, west + 50.0, 0.0, 500.0, -300.0, -100.0),
                R3::new(0.0, 0.0, 1.0),
            )
        })
        .collect();
    let points = observation_grid(50);

    for (name, config) in [
        ("serial", ForwardConfig::new()),
        ("parallel", ForwardConfig::new().with_parallel()),
    ] {
        group.bench_function(BenchmarkId::new(name, points.len()), |b| {
            b.iter(|| {
                let _ = collect_field_on_points(&points, &sources, &config);
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_single_pair, bench_grid);
criterion_main!(benches);
