use burrow::{Dims, Generator};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const SMALL: Dims = Dims(31, 31);
const LARGE: Dims = Dims(301, 201);

pub fn generate_small(c: &mut Criterion) {
    let generator = Generator::default();
    c.bench_function("generate_small", |b| {
        b.iter(|| generator.generate(black_box(SMALL), black_box(Some(7))).unwrap())
    });
}

pub fn generate_large(c: &mut Criterion) {
    let generator = Generator::default();
    c.bench_function("generate_large", |b| {
        b.iter(|| generator.generate(black_box(LARGE), black_box(Some(7))).unwrap())
    });
}

criterion_group! {name = benches; config = Criterion::default().sample_size(10); targets = generate_small, generate_large}
criterion_main!(benches);
