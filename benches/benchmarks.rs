/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use xrd_rs::diffraction::{PatternConfig, XrdCalculator};
use xrd_rs::structure::{Lattice, Site, Structure, Vector3D};

fn cscl() -> Structure {
    Structure::new(
        Lattice::cubic(4.209),
        vec![
            Site::new("Cs", Vector3D::new(0.0, 0.0, 0.0)),
            Site::new("Cl", Vector3D::new(0.5, 0.5, 0.5)),
        ],
    )
}

fn rock_salt() -> Structure {
    let na = [
        [0.0, 0.0, 0.0],
        [0.5, 0.5, 0.0],
        [0.5, 0.0, 0.5],
        [0.0, 0.5, 0.5],
    ];
    let cl = [
        [0.5, 0.5, 0.5],
        [0.0, 0.0, 0.5],
        [0.0, 0.5, 0.0],
        [0.5, 0.0, 0.0],
    ];
    let mut sites = Vec::new();
    for p in na {
        sites.push(Site::new("Na", Vector3D::new(p[0], p[1], p[2])));
    }
    for p in cl {
        sites.push(Site::new("Cl", Vector3D::new(p[0], p[1], p[2])));
    }
    Structure::new(Lattice::cubic(5.6402), sites)
}

fn pattern_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Pattern Calculation");
    let calculator = XrdCalculator::default();
    let config = PatternConfig::default();

    let structure = cscl();
    group.bench_function("cscl_0_90", |b| {
        b.iter(|| {
            black_box(
                calculator
                    .get_pattern(black_box(&structure), &config)
                    .unwrap(),
            )
        })
    });

    let structure = rock_salt();
    group.bench_function("nacl_0_90", |b| {
        b.iter(|| {
            black_box(
                calculator
                    .get_pattern(black_box(&structure), &config)
                    .unwrap(),
            )
        })
    });

    let wide = PatternConfig {
        two_theta_range: (0.0, 160.0),
        ..PatternConfig::default()
    };
    let structure = rock_salt();
    group.bench_function("nacl_0_160", |b| {
        b.iter(|| {
            black_box(
                calculator
                    .get_pattern(black_box(&structure), &wide)
                    .unwrap(),
            )
        })
    });

    group.finish();
}

criterion_group!(benches, pattern_benchmark);
criterion_main!(benches);
