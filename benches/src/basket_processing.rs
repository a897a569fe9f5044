use std::time::Duration;

use basket::prelude::*;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use futures::io::Cursor;

/// Catalog of `count` items with cycling prices
fn generate_catalog(count: usize) -> Vec<Item<FixedPoint>> {
    (0..count)
        .map(|i| {
            let price = FixedPoint::from_raw(((i % 97) as i64 + 1) * 10_000);
            Item::new(format!("item-{}", i), price).expect("non-negative price")
        })
        .collect()
}

fn generate_csv(count: usize) -> String {
    let mut csv = String::from("name,price\n");
    for i in 0..count {
        csv.push_str(&format!("item-{},{}.{:02}\n", i, i % 97 + 1, i % 100));
    }
    csv
}

fn bench_catalog_source(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().expect("runtime");
    let mut group = c.benchmark_group("catalog_source");

    for count in [100, 1_000, 10_000] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.to_async(&runtime).iter(|| async move {
                let source =
                    CatalogSource::new(generate_catalog(count)).with_latency(Duration::ZERO);
                // Roughly half the catalog fits, so both admission paths run
                let limit = FixedPoint::from_raw(count as i64 * 250_000);
                SequenceProcessor::new(source, Basket::new(limit))
                    .process()
                    .await
                    .expect("catalog source never fails")
            });
        });
    }

    group.finish();
}

fn bench_csv_source(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().expect("runtime");
    let mut group = c.benchmark_group("csv_source");

    for count in [100, 1_000, 10_000] {
        let csv = generate_csv(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &csv, |b, csv| {
            b.to_async(&runtime).iter(|| async {
                let stream =
                    CsvCatalogStream::<FixedPoint>::new(Cursor::new(csv.clone().into_bytes()));
                let limit = FixedPoint::from_raw(i64::MAX);
                SequenceProcessor::new(StreamSource::new(stream), Basket::new(limit))
                    .process()
                    .await
                    .expect("generated CSV is valid")
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_catalog_source, bench_csv_source);
criterion_main!(benches);
