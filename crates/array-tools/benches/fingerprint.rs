use array_tools::{canonicalize, fingerprint, sort_multiple, SortColumn, Value};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::json;

/// Catalog of `rows` product rows, each with a nested tag list.
fn catalog(rows: usize) -> Value {
    let items: Vec<serde_json::Value> = (0..rows)
        .rev()
        .map(|i| {
            let category = ["fruit", "Dairy", "vegetable"][i % 3];
            json!({
                "sku": format!("SKU-{i:05}"),
                "category": category,
                "position": i % 17,
                "price": (i as f64) * 0.25,
                "tags": [format!("t{}", i % 5), "sale", format!("t{}", i % 3)],
            })
        })
        .collect();
    Value::from(serde_json::Value::Array(items))
}

fn bench_fingerprint(c: &mut Criterion) {
    let mut group = c.benchmark_group("fingerprint");
    for rows in [10usize, 100, 1000] {
        let value = catalog(rows);
        group.bench_function(BenchmarkId::from_parameter(rows), |b| {
            b.iter(|| fingerprint(&value).expect("finite catalog"));
        });
    }
    group.finish();
}

fn bench_canonicalize(c: &mut Criterion) {
    let value = catalog(1000);
    c.bench_function("canonicalize/1000", |b| b.iter(|| canonicalize(&value)));
}

fn bench_sort_multiple(c: &mut Criterion) {
    let value = catalog(1000);
    let columns = [SortColumn::asc("category"), SortColumn::desc("position")];
    c.bench_function("sort_multiple/1000", |b| {
        b.iter(|| sort_multiple(&value, &columns).expect("all rows have both columns"));
    });
}

criterion_group!(
    benches,
    bench_fingerprint,
    bench_canonicalize,
    bench_sort_multiple
);
criterion_main!(benches);
