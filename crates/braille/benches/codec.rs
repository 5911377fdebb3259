//! Benchmarks for encoding and decoding.

use braille::{classify, decode, encode};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const SENTENCE: &str = "The Quick Brown Fox jumps over 13 lazy dogs, twice (42 times)! ";

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for repeat in [1, 16, 256].iter() {
        let text = SENTENCE.repeat(*repeat);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(repeat), &text, |b, text| {
            b.iter(|| black_box(encode(black_box(text))));
        });
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for repeat in [1, 16, 256].iter() {
        let cells = encode(&SENTENCE.repeat(*repeat)).unwrap_or_default();
        group.throughput(Throughput::Bytes(cells.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(repeat), &cells, |b, cells| {
            b.iter(|| black_box(decode(black_box(cells))));
        });
    }

    group.finish();
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");
    let english = SENTENCE.repeat(16);
    let braille = encode(&english).unwrap_or_default();

    group.bench_function("english", |b| {
        b.iter(|| black_box(classify(black_box(&english))));
    });
    group.bench_function("braille", |b| {
        b.iter(|| black_box(classify(black_box(&braille))));
    });

    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode, bench_classify);
criterion_main!(benches);
