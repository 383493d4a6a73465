use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hamming_link::ecc::hamming::{construct_codec, word, HammingCode};

fn bench_construct(c: &mut Criterion) {
    c.bench_function("hamming construct", |b| {
        b.iter(|| construct_codec().unwrap())
    });
}

fn bench_encode(c: &mut Criterion) {
    let codec = construct_codec().unwrap();
    let data = word(&[0, 1, 1, 0, 1, 1]).unwrap();
    c.bench_function("hamming encode", |b| {
        b.iter(|| codec.encode(black_box(&data)).unwrap())
    });
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("hamming decode");
    let codec = construct_codec().unwrap();
    let extended = HammingCode::extended().unwrap();

    let valid = word(&[0, 1, 1, 0, 1, 1, 1, 1, 1, 1]).unwrap();
    let corrupted = word(&[0, 0, 1, 1, 0, 1, 1, 1, 1, 0]).unwrap();
    let garbage = word(&[1, 1, 1, 0, 0, 0, 1, 1, 1, 1]).unwrap();
    let extended_valid = word(&[0, 1, 1, 0, 1, 1, 1, 1, 1, 1, 1]).unwrap();

    group.bench_function("valid", |b| {
        b.iter(|| codec.decode(black_box(&valid)).unwrap())
    });
    group.bench_function("corrected", |b| {
        b.iter(|| codec.decode(black_box(&corrupted)).unwrap())
    });
    group.bench_function("uncorrectable", |b| {
        b.iter(|| codec.decode(black_box(&garbage)).unwrap())
    });
    group.bench_function("extended valid", |b| {
        b.iter(|| extended.decode(black_box(&extended_valid)).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_construct, bench_encode, bench_decode);
criterion_main!(benches);
