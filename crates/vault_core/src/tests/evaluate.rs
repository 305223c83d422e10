//! Tests for snapshot assembly
//!
//! These tests verify:
//! - Snapshot fields agree with the individual metric functions
//! - Missing record lists behave like empty ones
//! - Period totals fallback and override
//! - Mixed ledgers are split by kind

use jiff::civil::date;

use crate::config::{MetricsConfig, ScoreWeights};
use crate::evaluate::{evaluate, evaluate_all};
use crate::metrics::{
    consistency_score, diversification_score, efficiency_score, growth_rate, performance_score,
    stability_index, total_amount,
};
use crate::model::{PeriodTotals, Transaction, TransactionKind};

fn mixed_ledger() -> Vec<Transaction> {
    vec![
        Transaction::income(1, 3000.0, date(2024, 1, 25), "Salary"),
        Transaction::income(2, 400.0, date(2024, 1, 12), "Freelance"),
        Transaction::income(3, 3000.0, date(2024, 2, 25), "Salary"),
        Transaction::income(4, 900.0, date(2024, 2, 14), "Freelance").with_settled(false),
        Transaction::income(5, 120.0, date(2024, 3, 4), "Dividends"),
        Transaction::expense(6, 1200.0, date(2024, 1, 1), "Rent"),
        Transaction::expense(7, 1200.0, date(2024, 2, 1), "Rent"),
        Transaction::expense(8, 310.0, date(2024, 2, 9), "Groceries"),
        Transaction::expense(9, 1200.0, date(2024, 3, 1), "Rent").with_settled(false),
    ]
}

#[test]
fn test_snapshot_matches_metric_functions() {
    let ledger = mixed_ledger();
    let incomes: Vec<Transaction> = ledger
        .iter()
        .filter(|tx| tx.kind == TransactionKind::Income)
        .cloned()
        .collect();
    let as_of = date(2024, 3, 10);

    let snapshot = evaluate(
        TransactionKind::Income,
        Some(ledger.as_slice()),
        None,
        as_of,
        &MetricsConfig::default(),
    );

    assert_eq!(snapshot.kind, TransactionKind::Income);
    assert_eq!(snapshot.as_of, as_of);
    assert_eq!(snapshot.transaction_count, 5);
    assert_eq!(snapshot.total_amount, total_amount(&incomes));
    assert_eq!(snapshot.growth_rate, growth_rate(&incomes, as_of));
    assert_eq!(snapshot.consistency_score, consistency_score(&incomes));
    assert_eq!(snapshot.diversification_score, diversification_score(&incomes));
    assert_eq!(snapshot.stability_index, stability_index(&incomes));
    assert_eq!(snapshot.achievement_rate, performance_score(&incomes, as_of));
    assert_eq!(snapshot.efficiency, efficiency_score(&incomes));
}

#[test]
fn test_worked_example_snapshot() {
    let records = vec![
        Transaction::income(1, 100.0, date(2024, 1, 5), "Salary"),
        Transaction::income(2, 150.0, date(2024, 2, 5), "Freelance"),
    ];
    let snapshot = evaluate(
        TransactionKind::Income,
        Some(records.as_slice()),
        None,
        date(2024, 2, 20),
        &MetricsConfig::default(),
    );

    assert_eq!(snapshot.total_amount, 250.0);
    assert_eq!(snapshot.growth_rate, 50.0);
    assert_eq!(snapshot.diversification_score, 50.0);
    assert_eq!(snapshot.period_totals, PeriodTotals::new(0.0, 0.0, 150.0, 250.0));

    let months: Vec<String> = snapshot
        .monthly_series
        .iter()
        .map(|p| p.month.to_string())
        .collect();
    assert_eq!(months, ["2024-01", "2024-02"]);
    assert_eq!(snapshot.top_sources[0].source, "Freelance");
}

#[test]
fn test_none_behaves_like_empty() {
    let as_of = date(2024, 6, 1);
    let config = MetricsConfig::default();

    let from_none = evaluate(TransactionKind::Expense, None, None, as_of, &config);
    let from_empty = evaluate(TransactionKind::Expense, Some(&[][..]), None, as_of, &config);

    assert_eq!(from_none, from_empty);
    assert_eq!(from_none.total_amount, 0.0);
    assert_eq!(from_none.growth_rate, 0.0);
    assert_eq!(from_none.consistency_score, 100.0);
    assert_eq!(from_none.stability_index, 100.0);
    assert_eq!(from_none.diversification_score, 0.0);
    assert_eq!(from_none.efficiency, 0.0);
    assert!(!from_none.efficiency.is_nan());
    assert!(from_none.insights.is_empty());
    assert!(from_none.monthly_series.is_empty());
    assert!(from_none.top_sources.is_empty());
}

#[test]
fn test_supplied_period_totals_win() {
    let ledger = mixed_ledger();
    let supplied = PeriodTotals::new(1.0, 2.0, 3.0, 4.0);
    let snapshot = evaluate(
        TransactionKind::Expense,
        Some(ledger.as_slice()),
        Some(supplied),
        date(2024, 3, 1),
        &MetricsConfig::default(),
    );
    assert_eq!(snapshot.period_totals, supplied);
    // records exist, so the header total still comes from them
    assert_eq!(snapshot.total_amount, 3910.0);
}

#[test]
fn test_period_totals_fallback_when_records_absent() {
    let supplied = PeriodTotals::new(0.0, 50.0, 400.0, 4_800.0);
    let snapshot = evaluate(
        TransactionKind::Income,
        None,
        Some(supplied),
        date(2024, 3, 1),
        &MetricsConfig::default(),
    );
    assert_eq!(snapshot.total_amount, 4_800.0);
    assert_eq!(snapshot.transaction_count, 0);
}

#[test]
fn test_derived_period_totals_for_expenses() {
    let snapshot = evaluate(
        TransactionKind::Expense,
        Some(mixed_ledger().as_slice()),
        None,
        date(2024, 2, 9), // Friday
        &MetricsConfig::default(),
    );
    assert_eq!(snapshot.period_totals.day, 310.0);
    assert_eq!(snapshot.period_totals.week, 310.0);
    assert_eq!(snapshot.period_totals.month, 1510.0);
    assert_eq!(snapshot.period_totals.year, 3910.0);
}

#[test]
fn test_custom_weights_flow_through() {
    let records = vec![
        Transaction::income(1, 100.0, date(2024, 1, 5), "Salary"),
        Transaction::income(2, 150.0, date(2024, 2, 5), "Freelance"),
    ];
    let config = MetricsConfig::default().with_weights(ScoreWeights {
        consistency: 0.0,
        growth: 0.0,
        diversification: 1.0,
    });
    let snapshot = evaluate(
        TransactionKind::Income,
        Some(records.as_slice()),
        None,
        date(2024, 2, 20),
        &config,
    );
    assert_eq!(snapshot.achievement_rate, 50.0);
}

#[test]
fn test_top_sources_respects_config_limit() {
    let config = MetricsConfig {
        top_sources: 1,
        ..MetricsConfig::default()
    };
    let snapshot = evaluate(
        TransactionKind::Income,
        Some(mixed_ledger().as_slice()),
        None,
        date(2024, 3, 10),
        &config,
    );
    assert_eq!(snapshot.top_sources.len(), 1);
    assert_eq!(snapshot.top_sources[0].source, "Salary");
    assert_eq!(snapshot.top_sources[0].count, 2);
}

#[test]
fn test_evaluate_all_splits_kinds() {
    let [income, expense] = evaluate_all(
        Some(mixed_ledger().as_slice()),
        date(2024, 3, 10),
        &MetricsConfig::default(),
    );
    assert_eq!(income.kind, TransactionKind::Income);
    assert_eq!(income.transaction_count, 5);
    assert_eq!(expense.kind, TransactionKind::Expense);
    assert_eq!(expense.transaction_count, 4);
    assert_eq!(expense.efficiency, 75.0);
}

#[test]
fn test_snapshot_serializes_month_keys_as_strings() {
    let records = vec![Transaction::income(1, 10.0, date(2024, 4, 2), "Salary")];
    let snapshot = evaluate(
        TransactionKind::Income,
        Some(records.as_slice()),
        None,
        date(2024, 4, 3),
        &MetricsConfig::default(),
    );
    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["monthly_series"][0]["month"], "2024-04");
    assert_eq!(json["kind"], "income");
    assert_eq!(json["as_of"], "2024-04-03");
}

#[test]
fn test_evaluate_at_edge_of_date_range() {
    let config = MetricsConfig::default();
    let last = date(9999, 12, 31);
    let records = vec![
        Transaction::income(1, 40.0, date(9999, 12, 30), "Salary"),
        Transaction::income(2, 60.0, date(9999, 11, 2), "Salary"),
    ];

    let snapshot = evaluate(
        TransactionKind::Income,
        Some(records.as_slice()),
        None,
        last,
        &config,
    );
    assert_eq!(snapshot.period_totals, PeriodTotals::new(0.0, 40.0, 40.0, 100.0));

    let empty = evaluate(TransactionKind::Expense, None, None, last, &config);
    assert!(empty.period_totals.is_zero());

    let first = evaluate(TransactionKind::Income, None, None, date(-9999, 1, 1), &config);
    assert!(first.period_totals.is_zero());
}
