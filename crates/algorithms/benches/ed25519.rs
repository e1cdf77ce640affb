// Benchmarks for edwards25519 field and group element operations

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use ed25519_core_algorithms::ec::ed25519::{
    ExtendedPoint, FieldElement, PrecomputedPoint, FIELD_ELEMENT_SIZE, POINT_COMPRESSED_SIZE,
};
use rand::{rngs::OsRng, RngCore};

/// Generate a random field element for benchmarking
fn random_field_element() -> FieldElement {
    let mut bytes = [0u8; FIELD_ELEMENT_SIZE];
    OsRng.fill_bytes(&mut bytes);
    FieldElement::from_bytes(&bytes)
}

/// Generate a random curve point by decoding random y values until one fits
fn random_point() -> ExtendedPoint {
    let mut bytes = [0u8; POINT_COMPRESSED_SIZE];
    loop {
        OsRng.fill_bytes(&mut bytes);
        if let Ok(p) = ExtendedPoint::from_bytes(&bytes) {
            return p;
        }
    }
}

/// Benchmark field element operations
fn bench_field_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("ed25519-field");

    group.bench_function("addition", |b| {
        b.iter_batched(
            || (random_field_element(), random_field_element()),
            |(a, b)| black_box(a.add(&b)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("multiplication", |b| {
        b.iter_batched(
            || (random_field_element(), random_field_element()),
            |(a, b)| black_box(a.mul(&b)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("squaring", |b| {
        b.iter_batched(random_field_element, |a| black_box(a.square()), BatchSize::SmallInput)
    });

    group.bench_function("inversion", |b| {
        b.iter_batched(random_field_element, |a| black_box(a.invert()), BatchSize::SmallInput)
    });

    group.bench_function("pow22523", |b| {
        b.iter_batched(random_field_element, |a| black_box(a.pow22523()), BatchSize::SmallInput)
    });

    group.bench_function("to_bytes", |b| {
        b.iter_batched(random_field_element, |a| black_box(a.to_bytes()), BatchSize::SmallInput)
    });

    group.bench_function("from_bytes", |b| {
        b.iter_batched(
            || random_field_element().to_bytes(),
            |bytes| black_box(FieldElement::from_bytes(&bytes)),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

/// Benchmark point operations
fn bench_point_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("ed25519-point");

    group.bench_function("add_cached", |b| {
        b.iter_batched(
            || (random_point(), random_point().to_cached()),
            |(p, q)| black_box(p.add_cached(&q).to_extended()),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("add_precomputed", |b| {
        b.iter_batched(
            || (random_point(), random_point().to_precomputed()),
            |(p, q)| black_box(p.add_precomputed(&q).to_extended()),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("doubling", |b| {
        b.iter_batched(random_point, |p| black_box(p.double().to_extended()), BatchSize::SmallInput)
    });

    group.bench_function("compress", |b| {
        b.iter_batched(random_point, |p| black_box(p.to_bytes()), BatchSize::SmallInput)
    });

    group.bench_function("decompress", |b| {
        b.iter_batched(
            || random_point().to_bytes(),
            |bytes| black_box(ExtendedPoint::from_bytes(&bytes)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("table_select", |b| {
        let p = random_point();
        let mut table = [PrecomputedPoint::identity(); 8];
        let mut acc = p;
        for entry in table.iter_mut() {
            *entry = acc.to_precomputed();
            acc = acc.add_cached(&p.to_cached()).to_extended();
        }
        b.iter(|| black_box(PrecomputedPoint::select(&table, black_box(-5))))
    });

    group.finish();
}

criterion_group!(benches, bench_field_operations, bench_point_operations);
criterion_main!(benches);
