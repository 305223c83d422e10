//! Scalar metrics shown in the income and expense evaluation panels.
//!
//! Every function is total: an empty slice yields the neutral value for that
//! metric instead of `NaN` or a panic. Percentage-valued results are kept in
//! [0, 100] except [`growth_rate`], which is signed and unbounded.

use jiff::civil::Date;

use crate::aggregate::{
    distinct_sources, max_abs_deviation, mean, month_total, monthly_buckets, population_std_dev,
};
use crate::calendar::MonthKey;
use crate::config::ScoreWeights;
use crate::model::Transaction;

/// Points awarded per distinct source before saturation
pub const DIVERSIFICATION_PER_SOURCE: f64 = 25.0;

/// Sum of every record's amount
#[must_use]
pub fn total_amount(records: &[Transaction]) -> f64 {
    records.iter().map(|tx| tx.amount).sum()
}

/// Month-over-month change between the month of `as_of` and the month before it, in percent.
///
/// With a zero previous month the result is 100 when the current month is
/// positive and 0 otherwise.
#[must_use]
pub fn growth_rate(records: &[Transaction], as_of: Date) -> f64 {
    let current_month = MonthKey::from_date(as_of);
    let current = month_total(records, current_month);
    let previous = month_total(records, current_month.previous());
    growth_between(current, previous)
}

pub(crate) fn growth_between(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        if current > 0.0 { 100.0 } else { 0.0 }
    } else {
        (current - previous) / previous * 100.0
    }
}

/// 100 minus the coefficient of variation of monthly totals, in percent.
///
/// Fewer than two distinct months scores 100.
#[must_use]
pub fn consistency_score(records: &[Transaction]) -> f64 {
    let monthly: Vec<f64> = monthly_buckets(records).into_values().collect();
    consistency_from_monthly(&monthly)
}

pub(crate) fn consistency_from_monthly(monthly: &[f64]) -> f64 {
    if monthly.len() < 2 {
        return 100.0;
    }
    let (Some(mean), Some(std_dev)) = (mean(monthly), population_std_dev(monthly)) else {
        return 100.0;
    };
    if std_dev == 0.0 {
        return 100.0;
    }
    // a zero mean gives an infinite cv, which clamps to 0
    let cv = std_dev / mean;
    (100.0 - cv * 100.0).clamp(0.0, 100.0)
}

/// 25 points per distinct source, saturating at 100
#[must_use]
pub fn diversification_score(records: &[Transaction]) -> f64 {
    diversification_score_with(records, DIVERSIFICATION_PER_SOURCE)
}

/// [`diversification_score`] with a custom per-source weight
#[must_use]
pub fn diversification_score_with(records: &[Transaction], per_source: f64) -> f64 {
    diversification_from_count(distinct_sources(records), per_source)
}

pub(crate) fn diversification_from_count(distinct: usize, per_source: f64) -> f64 {
    (distinct as f64 * per_source).clamp(0.0, 100.0)
}

/// Penalizes the largest single monthly deviation from the mean, rounded to an integer.
///
/// Fewer than two distinct months scores 100.
#[must_use]
pub fn stability_index(records: &[Transaction]) -> f64 {
    let monthly: Vec<f64> = monthly_buckets(records).into_values().collect();
    stability_from_monthly(&monthly)
}

pub(crate) fn stability_from_monthly(monthly: &[f64]) -> f64 {
    if monthly.len() < 2 {
        return 100.0;
    }
    let (Some(mean), Some(max_dev)) = (mean(monthly), max_abs_deviation(monthly)) else {
        return 100.0;
    };
    if max_dev == 0.0 {
        return 100.0;
    }
    (100.0 - max_dev / mean * 50.0).clamp(0.0, 100.0).round()
}

/// Weighted blend of consistency, positive growth and diversification.
///
/// Displayed as "achievement rate" or "goal alignment". Always in [0, 100].
#[must_use]
pub fn performance_score(records: &[Transaction], as_of: Date) -> f64 {
    performance_score_with(
        records,
        as_of,
        &ScoreWeights::default(),
        DIVERSIFICATION_PER_SOURCE,
    )
}

/// [`performance_score`] with custom weights
#[must_use]
pub fn performance_score_with(
    records: &[Transaction],
    as_of: Date,
    weights: &ScoreWeights,
    per_source: f64,
) -> f64 {
    blend_performance(
        consistency_score(records),
        growth_rate(records, as_of),
        diversification_score_with(records, per_source),
        weights,
    )
}

pub(crate) fn blend_performance(
    consistency: f64,
    growth: f64,
    diversification: f64,
    weights: &ScoreWeights,
) -> f64 {
    let blended = consistency * weights.consistency
        + growth.max(0.0) * weights.growth
        + diversification * weights.diversification;
    if blended.is_nan() {
        return 0.0;
    }
    blended.clamp(0.0, 100.0)
}

/// Share of records already received (income) or paid (expense), rounded percent
#[must_use]
pub fn efficiency_score(records: &[Transaction]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let settled = records.iter().filter(|tx| tx.settled).count();
    (settled as f64 / records.len() as f64 * 100.0).round()
}
