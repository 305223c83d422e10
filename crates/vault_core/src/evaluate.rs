//! Snapshot assembly
//!
//! `evaluate` is the single call a view makes: it takes an explicit snapshot of
//! records and a reference date, and returns every metric the panel shows.

use jiff::civil::Date;

use crate::aggregate::{distinct_sources, monthly_buckets, month_total, source_breakdown};
use crate::calendar::MonthKey;
use crate::config::MetricsConfig;
use crate::insights::{InsightInput, generate_insights};
use crate::metrics::{
    blend_performance, consistency_from_monthly, diversification_from_count, efficiency_score,
    growth_between, stability_from_monthly, total_amount,
};
use crate::model::{MetricsSnapshot, MonthlyPoint, PeriodTotals, Transaction, TransactionKind};

/// Compute the metrics snapshot for one evaluation panel.
///
/// - `records`: `None` is treated exactly like an empty list. Records of the
///   other kind are ignored, so a mixed ledger can be passed as-is.
/// - `period_totals`: supplied totals win; otherwise they are derived from records.
/// - `as_of`: reference date for growth and period totals.
#[must_use]
pub fn evaluate(
    kind: TransactionKind,
    records: Option<&[Transaction]>,
    period_totals: Option<PeriodTotals>,
    as_of: Date,
    config: &MetricsConfig,
) -> MetricsSnapshot {
    let records: Vec<Transaction> = records
        .unwrap_or_default()
        .iter()
        .filter(|tx| tx.kind == kind)
        .cloned()
        .collect();

    let period_totals =
        period_totals.unwrap_or_else(|| PeriodTotals::from_records(&records, as_of));

    let buckets = monthly_buckets(&records);
    let monthly: Vec<f64> = buckets.values().copied().collect();

    let current_month = MonthKey::from_date(as_of);
    let growth_rate = growth_between(
        month_total(&records, current_month),
        month_total(&records, current_month.previous()),
    );
    let consistency_score = consistency_from_monthly(&monthly);
    let stability_index = stability_from_monthly(&monthly);
    let diversification_score =
        diversification_from_count(distinct_sources(&records), config.diversification_per_source);
    let achievement_rate = blend_performance(
        consistency_score,
        growth_rate,
        diversification_score,
        &config.weights,
    );
    let efficiency = efficiency_score(&records);

    let total_amount = if records.is_empty() {
        period_totals.year
    } else {
        total_amount(&records)
    };

    let insights = generate_insights(
        &InsightInput {
            kind,
            transaction_count: records.len(),
            period_totals,
            growth_rate,
            diversification_score,
            consistency_score,
        },
        &config.thresholds,
    );

    tracing::debug!(
        kind = %kind,
        records = records.len(),
        months = buckets.len(),
        growth_rate,
        consistency_score,
        diversification_score,
        stability_index,
        achievement_rate,
        "Evaluated metrics snapshot"
    );

    MetricsSnapshot {
        kind,
        as_of,
        total_amount,
        period_totals,
        growth_rate,
        consistency_score,
        diversification_score,
        stability_index,
        achievement_rate,
        efficiency,
        transaction_count: records.len(),
        monthly_series: buckets
            .into_iter()
            .map(|(month, total)| MonthlyPoint { month, total })
            .collect(),
        top_sources: source_breakdown(&records, config.top_sources),
        insights,
    }
}

/// Evaluate both panels of a mixed ledger
#[must_use]
pub fn evaluate_all(
    records: Option<&[Transaction]>,
    as_of: Date,
    config: &MetricsConfig,
) -> [MetricsSnapshot; 2] {
    [
        evaluate(TransactionKind::Income, records, None, as_of, config),
        evaluate(TransactionKind::Expense, records, None, as_of, config),
    ]
}
