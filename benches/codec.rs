use clock_codec::{clock_to_day_fraction, clock_to_seconds, seconds_to_clock};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_codec(c: &mut Criterion) {
    let seconds: Vec<f64> = (0..86400).map(|t| t as f64).collect();
    let clocks = seconds_to_clock(&seconds).unwrap();

    c.bench_function("seconds_to_clock one day", |b| {
        b.iter(|| seconds_to_clock(black_box(&seconds)).unwrap())
    });
    c.bench_function("clock_to_seconds one day", |b| {
        b.iter(|| clock_to_seconds(black_box(&clocks)).unwrap())
    });
    c.bench_function("clock_to_day_fraction one day", |b| {
        b.iter(|| clock_to_day_fraction(black_box(&clocks)).unwrap())
    });
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);
