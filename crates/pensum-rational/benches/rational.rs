//! Benchmarks for canonical rational arithmetic at growing operand sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pensum_rational::Rational;

/// Builds a pair of canonical rationals with `digits`-digit parts.
///
/// Numerators and denominators are consecutive integers, so the values
/// stay coprime and reduction cannot shrink them.
fn operands(digits: usize) -> (Rational, Rational) {
    let denom = format!("1{}", "0".repeat(digits));
    let below: Rational = format!("{}/{}", "9".repeat(digits), denom)
        .parse()
        .expect("valid literal");
    let above: Rational = format!("1{}1/{}", "0".repeat(digits - 1), denom)
        .parse()
        .expect("valid literal");
    (below, above)
}

fn bench_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic");
    for digits in [8usize, 64, 512] {
        let (a, b) = operands(digits);
        group.bench_with_input(BenchmarkId::new("add", digits), &digits, |bench, _| {
            bench.iter(|| black_box(&a) + black_box(&b));
        });
        group.bench_with_input(BenchmarkId::new("mul", digits), &digits, |bench, _| {
            bench.iter(|| black_box(&a) * black_box(&b));
        });
        group.bench_with_input(BenchmarkId::new("cmp", digits), &digits, |bench, _| {
            bench.iter(|| black_box(&a).cmp(black_box(&b)));
        });
    }
    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let text = format!("{}/1{}", "9".repeat(256), "0".repeat(256));
    c.bench_function("parse", |b| {
        b.iter(|| black_box(&text).parse::<Rational>().expect("valid literal"));
    });
}

criterion_group!(benches, bench_arithmetic, bench_parse);
criterion_main!(benches);
