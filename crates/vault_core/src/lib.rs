//! Personal finance dashboard metrics
//!
//! This crate turns a list of income or expense records into the scalar
//! metrics and insight cards of the Alpha Vault evaluation panels:
//! - Total amount and day/week/month/year period totals
//! - Month-over-month growth rate
//! - Consistency score (inverse coefficient of variation of monthly totals)
//! - Diversification score (distinct sources, saturating)
//! - Stability index (largest monthly deviation)
//! - Achievement rate (weighted blend) and settlement efficiency
//! - Rule-based insights
//!
//! Every computation is a pure function of an explicit record snapshot and
//! reference date.
//!
//! ```ignore
//! use vault_core::{MetricsConfig, evaluate};
//! use vault_core::model::{Transaction, TransactionKind};
//!
//! let records = vec![
//!     Transaction::income(1, 100.0, jiff::civil::date(2024, 1, 5), "Salary"),
//!     Transaction::income(2, 150.0, jiff::civil::date(2024, 2, 5), "Freelance"),
//! ];
//! let snapshot = evaluate(
//!     TransactionKind::Income,
//!     Some(records.as_slice()),
//!     None,
//!     jiff::civil::date(2024, 2, 20),
//!     &MetricsConfig::default(),
//! );
//! assert_eq!(snapshot.growth_rate, 50.0);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod aggregate;
pub mod calendar;
pub mod error;
pub mod evaluate;
pub mod format;
pub mod insights;
pub mod metrics;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::{InsightThresholds, MetricsConfig, ScoreWeights};
pub use evaluate::{evaluate, evaluate_all};
pub use metrics::{
    consistency_score, diversification_score, efficiency_score, growth_rate, performance_score,
    stability_index, total_amount,
};
