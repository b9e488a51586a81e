#![allow(missing_docs)]
//! Benchmarks for epicur and xMetaDissPlus mapping.
//!
//! Measures mapping a single record to an element tree, serializing it to
//! XML, and mapping a batch of records with rayon.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dnb_xmetadiss::formats::{RecordSerializer, XMetaDissSerializer};
use dnb_xmetadiss::{map_epicur, map_xmetadissplus, MapperConfig, Record, StaticVocabulary};
use rayon::prelude::*;

/// Load a fixture from the test data directory.
fn load_fixture(filename: &str) -> String {
    let path = format!("tests/data/{filename}");
    std::fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to load fixture: {path}"))
}

fn setup() -> (Record, MapperConfig, StaticVocabulary) {
    let record = Record::from_json(&load_fixture("full_record.json")).expect("record fixture");
    let vocabulary = StaticVocabulary::new()
        .load_json("resourcetypes", &load_fixture("resourcetypes.json"))
        .expect("vocabulary fixture");
    let config = MapperConfig::new("https://repo.example.org", "https://repo.example.org/api")
        .with_dcterms_dcmitype_key("dcmi");
    (record, config, vocabulary)
}

/// Benchmark mapping one record to an xMetaDissPlus tree.
fn benchmark_map_xmetadissplus(c: &mut Criterion) {
    let (record, config, vocabulary) = setup();

    c.bench_function("map_xmetadissplus", |b| {
        b.iter(|| map_xmetadissplus(black_box(&record), &config, &vocabulary).expect("map"));
    });
}

/// Benchmark mapping and serializing one record to an xMetaDissPlus string.
fn benchmark_serialize_xmetadissplus(c: &mut Criterion) {
    let (record, config, vocabulary) = setup();
    let serializer = XMetaDissSerializer::new(config, vocabulary);

    c.bench_function("serialize_xmetadissplus", |b| {
        b.iter(|| serializer.serialize(black_box(&record)).expect("serialize"));
    });
}

/// Benchmark mapping one record to an epicur tree.
fn benchmark_map_epicur(c: &mut Criterion) {
    let (record, config, _) = setup();

    c.bench_function("map_epicur", |b| {
        b.iter(|| {
            map_epicur(black_box(&record), &config.site_ui_url, &config.epicur_nbn_scheme)
                .expect("map")
        });
    });
}

/// Benchmark serializing 1,000 records in parallel.
fn benchmark_parallel_1k(c: &mut Criterion) {
    let (record, config, vocabulary) = setup();
    let records: Vec<Record> = (0..1000)
        .map(|n| {
            let mut r = record.clone();
            r.id = Some(format!("rec-{n}"));
            r
        })
        .collect();
    let serializer = XMetaDissSerializer::new(config, vocabulary);

    c.bench_function("serialize_1k_parallel", |b| {
        b.iter(|| {
            records
                .par_iter()
                .map(|r| serializer.serialize(r).map(|xml| xml.len()).unwrap_or(0))
                .sum::<usize>()
        });
    });
}

criterion_group!(
    benches,
    benchmark_map_xmetadissplus,
    benchmark_serialize_xmetadissplus,
    benchmark_map_epicur,
    benchmark_parallel_1k
);
criterion_main!(benches);
