//! Criterion benchmarks for vault_core metrics
//!
//! Run with: cargo bench -p vault_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use vault_core::calendar::add_days;
use vault_core::model::{Transaction, TransactionKind};
use vault_core::{MetricsConfig, consistency_score, evaluate, growth_rate};

const SOURCES: [&str; 5] = ["Salary", "Freelance", "Dividends", "Rent", "Gift"];

fn create_ledger(len: usize) -> Vec<Transaction> {
    let mut rng = StdRng::seed_from_u64(42);
    let start = jiff::civil::date(2023, 1, 1);
    (0..len)
        .map(|i| {
            Transaction::income(
                i as u32,
                rng.random_range(10.0..5_000.0),
                add_days(start, rng.random_range(0..730)),
                SOURCES[i % SOURCES.len()],
            )
            .with_settled(rng.random_bool(0.8))
        })
        .collect()
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    let config = MetricsConfig::default();
    let as_of = jiff::civil::date(2024, 6, 15);

    for len in [10, 100, 1_000, 10_000].iter() {
        let ledger = create_ledger(*len);
        group.bench_with_input(BenchmarkId::new("records", len), len, |b, _| {
            b.iter(|| {
                evaluate(
                    TransactionKind::Income,
                    black_box(Some(ledger.as_slice())),
                    None,
                    black_box(as_of),
                    &config,
                )
            })
        });
    }

    group.finish();
}

fn bench_individual_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("metrics");
    let ledger = create_ledger(1_000);
    let as_of = jiff::civil::date(2024, 6, 15);

    group.bench_function("growth_rate", |b| {
        b.iter(|| growth_rate(black_box(&ledger), black_box(as_of)))
    });
    group.bench_function("consistency_score", |b| {
        b.iter(|| consistency_score(black_box(&ledger)))
    });

    group.finish();
}

criterion_group!(benches, bench_evaluate, bench_individual_metrics);
criterion_main!(benches);
