//! Operator and evaluation benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::f64::consts::PI;
use vcalc_expr::{evaluate, tokenize};
use vcalc_fields::{CoordinateSystem, ScalarField, VectorField};

const SPHERICAL_POINT: [f64; 3] = [1.0, 3.14, PI];

fn generate_long_expression(terms: usize) -> String {
    (0..terms)
        .map(|i| format!("{}sin({}x^2)^2*y", i % 9 + 1, i % 5 + 1))
        .collect::<Vec<_>>()
        .join("+")
}

// === Expression Benchmarks ===

fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");
    for terms in [1, 10, 100] {
        let expression = generate_long_expression(terms);
        group.bench_with_input(
            BenchmarkId::from_parameter(terms),
            &expression,
            |b, expression| b.iter(|| tokenize(black_box(expression))),
        );
    }
    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    c.bench_function("evaluate_spherical_scalar", |b| {
        b.iter(|| {
            evaluate(
                black_box("-3sin(2r^3)^5+phi*theta^2"),
                black_box(&SPHERICAL_POINT),
                CoordinateSystem::Spherical,
            )
        })
    });
}

// === Operator Benchmarks ===

fn bench_gradient(c: &mut Criterion) {
    let mut group = c.benchmark_group("gradient");
    let fields = [
        ("cartesian", "72+3x^2+5cos(y^2)-3z", CoordinateSystem::Cartesian),
        ("cylindrical", "-3sin(2r^3)^5+phi*z^2", CoordinateSystem::Cylindrical),
        ("spherical", "-3sin(2r^3)^5+phi*theta^2", CoordinateSystem::Spherical),
    ];
    for (name, expression, system) in fields {
        let Ok(field) = ScalarField::new(expression, system) else {
            continue;
        };
        group.bench_function(name, |b| {
            b.iter(|| field.gradient(black_box(&SPHERICAL_POINT)))
        });
    }
    group.finish();
}

fn bench_vector_operators(c: &mut Criterion) {
    let Ok(field) = VectorField::new(
        "3r^2",
        "5cos(theta^3*phi)",
        "sqrt(1-theta^2)-5phi+3",
        CoordinateSystem::Spherical,
    ) else {
        return;
    };

    let mut group = c.benchmark_group("vector_operators");
    group.bench_function("divergence", |b| {
        b.iter(|| field.divergence(black_box(&SPHERICAL_POINT)))
    });
    group.bench_function("curl", |b| {
        b.iter(|| field.curl(black_box(&SPHERICAL_POINT)))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_tokenize,
    bench_evaluate,
    bench_gradient,
    bench_vector_operators,
);
criterion_main!(benches);
