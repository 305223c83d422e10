//! Grouping and descriptive statistics over record lists.
//!
//! Everything here allocates its own intermediates and never mutates the input.

use std::collections::BTreeMap;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::calendar::MonthKey;
use crate::model::{MonthlyPoint, SourceShare, Transaction};

/// Sum amounts per calendar month, ordered chronologically.
#[must_use]
pub fn monthly_buckets(records: &[Transaction]) -> BTreeMap<MonthKey, f64> {
    let mut buckets = BTreeMap::new();
    for tx in records {
        *buckets.entry(tx.month()).or_insert(0.0) += tx.amount;
    }
    buckets
}

/// Monthly buckets flattened into chart points
#[must_use]
pub fn monthly_series(records: &[Transaction]) -> Vec<MonthlyPoint> {
    monthly_buckets(records)
        .into_iter()
        .map(|(month, total)| MonthlyPoint { month, total })
        .collect()
}

/// Sum of records falling in `month`
#[must_use]
pub fn month_total(records: &[Transaction], month: MonthKey) -> f64 {
    records
        .iter()
        .filter(|tx| month.contains(tx.date))
        .map(|tx| tx.amount)
        .sum()
}

/// Arithmetic mean, `None` for an empty slice
#[must_use]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Population standard deviation (divides by N), `None` for an empty slice
#[must_use]
pub fn population_std_dev(values: &[f64]) -> Option<f64> {
    let mean = mean(values)?;
    let variance =
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    Some(variance.sqrt())
}

/// Largest absolute distance of any value from the mean
#[must_use]
pub fn max_abs_deviation(values: &[f64]) -> Option<f64> {
    let mean = mean(values)?;
    values.iter().map(|v| (v - mean).abs()).reduce(f64::max)
}

/// Number of distinct sources/categories
#[must_use]
pub fn distinct_sources(records: &[Transaction]) -> usize {
    records
        .iter()
        .map(|tx| tx.source.as_str())
        .collect::<FxHashSet<_>>()
        .len()
}

/// Totals per source, largest first, truncated to `limit` entries.
///
/// Shares are relative to the total over every source, so a truncated list
/// may sum to less than 100. Ties keep alphabetical order.
#[must_use]
pub fn source_breakdown(records: &[Transaction], limit: usize) -> Vec<SourceShare> {
    let mut by_source: FxHashMap<&str, (f64, usize)> = FxHashMap::default();
    for tx in records {
        let entry = by_source.entry(tx.source.as_str()).or_insert((0.0, 0));
        entry.0 += tx.amount;
        entry.1 += 1;
    }

    let grand_total: f64 = by_source.values().map(|(total, _)| total).sum();

    let mut shares: Vec<SourceShare> = by_source
        .into_iter()
        .map(|(source, (total, count))| SourceShare {
            source: source.to_string(),
            total,
            count,
            share: if grand_total > 0.0 {
                (total / grand_total * 100.0).clamp(0.0, 100.0)
            } else {
                0.0
            },
        })
        .collect();

    shares.sort_by(|a, b| {
        b.total
            .total_cmp(&a.total)
            .then_with(|| a.source.cmp(&b.source))
    });
    shares.truncate(limit);
    shares
}
