use criterion::{criterion_group, criterion_main, Benchmark, Criterion};

use ca_patterns::{Life105Pattern, Life106Pattern, RlePattern};


use patterns::PatternText;

criterion_group!(decode, rle_benchmark, life105_benchmark, life106_benchmark);
criterion_main!(decode);

fn rle_benchmark(c: &mut Criterion) {
    bench_rle(c, patterns::GLIDER_RLE);
    bench_rle(c, patterns::GOSPER_GUN_RLE);
}

fn life105_benchmark(c: &mut Criterion) {
    bench_life105(c, patterns::PULSAR_LIFE105);
}

fn life106_benchmark(c: &mut Criterion) {
    bench_life106(c, patterns::GLIDER_LIFE106);
}

fn bench_rle(c: &mut Criterion, pattern: PatternText) {
    c.bench(
        "decode_rle",
        Benchmark::new(pattern.name, move |b| {
            b.iter(|| pattern.text.parse::<RlePattern>().unwrap())
        }),
    );
}

fn bench_life105(c: &mut Criterion, pattern: PatternText) {
    c.bench(
        "decode_life105",
        Benchmark::new(pattern.name, move |b| {
            b.iter(|| pattern.text.parse::<Life105Pattern>().unwrap())
        }),
    );
}

fn bench_life106(c: &mut Criterion, pattern: PatternText) {
    c.bench(
        "decode_life106",
        Benchmark::new(pattern.name, move |b| {
            b.iter(|| pattern.text.parse::<Life106Pattern>().unwrap())
        }),
    );
}
