use criterion::{criterion_group, criterion_main, Criterion};
use multipole_core::profiles::radius_profile;
use multipole_core::trace::{angular_grid, build_geometry};
use multipole_types::config::RenderConfig;
use multipole_types::state::PoleOrder;
use std::hint::black_box;

fn bench_profile_eval(c: &mut Criterion) {
    let th = angular_grid(5.0, 1000);
    let theta_0 = 5f64.to_radians();

    let mut group = c.benchmark_group("profile_1000_samples");
    for order in PoleOrder::all() {
        group.bench_function(order.name(), |b| {
            b.iter(|| black_box(radius_profile(order, 1.0, theta_0, &th)))
        });
    }
    group.finish();
}

fn bench_build_geometry(c: &mut Criterion) {
    let config = RenderConfig::default();
    let thetas = [5.0, 10.0, 15.0, 20.0, 30.0, 40.0];

    c.bench_function("build_geometry_6_lines", |b| {
        b.iter(|| {
            let geometry =
                build_geometry(PoleOrder::Hexadecapole, &config, &thetas).unwrap();
            black_box(geometry.extent());
        })
    });
}

criterion_group!(benches, bench_profile_eval, bench_build_geometry);
criterion_main!(benches);
