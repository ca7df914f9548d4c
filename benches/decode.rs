use criterion::{criterion_group, criterion_main, Criterion};
use life_patterns::rle::{decode_rle, run_length_decode, DecodeOptions};
use life_patterns::{load_patterns, Catalog, Config};

const GOSPER: &str = include_str!("../patterns/gosperglidergun.rle");

fn bench_tokenizer(c: &mut Criterion) {
    let body = "24bo$22bobo$12b2o6b2o12b2o$11bo3bo4b2o12b2o$2o8bo5bo3b2o".repeat(64);
    c.bench_function("run_length_decode", |b| {
        b.iter(|| run_length_decode(&body).count())
    });
}

fn bench_decode_and_square(c: &mut Criterion) {
    c.bench_function("decode_gosper", |b| {
        b.iter(|| {
            decode_rle("gosperglidergun", GOSPER, DecodeOptions::default())
                .unwrap()
                .cells
                .squared()
        })
    });
}

fn bench_standard_catalog(c: &mut Criterion) {
    let catalog = Catalog::standard().unwrap();
    let config = Config::default().with_patterns_dir(concat!(env!("CARGO_MANIFEST_DIR"), "/patterns"));
    c.bench_function("load_standard_catalog", |b| {
        b.iter(|| load_patterns(&config, &catalog).unwrap())
    });
}

criterion_group!(
    benches,
    bench_tokenizer,
    bench_decode_and_square,
    bench_standard_catalog,
);
criterion_main!(benches);
