//! Performance benchmarks for builder operations.
//!
//! These benchmarks measure the cost of the validation and construction
//! paths:
//! - Building a valid draft
//! - Validating an invalid draft (all rules fail)
//! - Round-tripping through the plain record

use criterion::{criterion_group, criterion_main, Criterion};
use person_builder::{PersonBuilder, PersonRecord};

/// Benchmark the happy path: create, chain setters, build.
fn bench_build_valid(c: &mut Criterion) {
    c.bench_function("build_valid", |b| {
        b.iter(|| {
            let person = PersonBuilder::new("John", 20)
                .set_age(30)
                .set_name("John Smith")
                .build();
            let _ = std::hint::black_box(person);
        });
    });
}

/// Benchmark validation with every rule failing.
fn bench_validate_invalid(c: &mut Criterion) {
    let builder = PersonBuilder::new("", -1);

    c.bench_function("validate_invalid", |b| {
        b.iter(|| {
            let report = builder.validate();
            let _ = std::hint::black_box(report);
        });
    });
}

/// Benchmark record-to-entity-to-record projection.
fn bench_record_round_trip(c: &mut Criterion) {
    let record = PersonRecord::new("Alice", 18);

    c.bench_function("record_round_trip", |b| {
        b.iter(|| {
            let person = PersonBuilder::from_record(record.clone())
                .build()
                .expect("record is valid");
            let _ = std::hint::black_box(person.to_record());
        });
    });
}

criterion_group!(
    benches,
    bench_build_valid,
    bench_validate_invalid,
    bench_record_round_trip
);
criterion_main!(benches);
