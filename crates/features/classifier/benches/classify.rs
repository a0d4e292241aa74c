use anum_classifier::classify;
use anum_domain::{Filter, PropertySet};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    let starts = [("small", 1u64), ("billion", 1_000_000_000), ("max_signed", 9_223_372_036_854_774_807)];

    for (label, start) in starts {
        group.throughput(Throughput::Elements(1_000));
        group.bench_with_input(BenchmarkId::new("consecutive", label), &start, |b, &s| {
            b.iter(|| {
                for value in s..s + 1_000 {
                    black_box(classify(black_box(value)));
                }
            });
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let filter = Filter::new(PropertySet::SUNNY | PropertySet::EVEN, PropertySet::DUCK);

    c.bench_function("search_sunny_even_not_duck", |b| {
        b.iter(|| (1u64..).filter(|&v| filter.accepts(classify(v))).take(5).count());
    });
}

criterion_group!(benches, bench_classify, bench_search);
criterion_main!(benches);
