//! Evaluation outputs
//!
//! A snapshot is a pure function of its inputs at the instant it was computed.
//! It carries no identity and is rebuilt whenever the inputs change.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::ids::InsightId;
use super::period::PeriodTotals;
use super::transaction::TransactionKind;
use crate::calendar::MonthKey;

/// Icon hint rendered next to an insight card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightIcon {
    TrendingUp,
    Diversify,
    PieChart,
    Warning,
    CheckCircle,
}

impl InsightIcon {
    /// Single-character glyph for plain-text output
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            InsightIcon::TrendingUp => "↑",
            InsightIcon::Diversify => "+",
            InsightIcon::PieChart => "◔",
            InsightIcon::Warning => "!",
            InsightIcon::CheckCircle => "✓",
        }
    }
}

/// A short rule-derived observation or recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub id: InsightId,
    pub icon: InsightIcon,
    pub title: String,
    pub description: String,
}

/// One point of the monthly trend chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyPoint {
    pub month: MonthKey,
    pub total: f64,
}

/// Total for a single source/category and its share of the overall total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceShare {
    pub source: String,
    pub total: f64,
    pub count: usize,
    /// Percentage of the overall total, 0-100
    pub share: f64,
}

/// Every scalar and list a dashboard evaluation panel displays
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub kind: TransactionKind,
    pub as_of: Date,
    pub total_amount: f64,
    pub period_totals: PeriodTotals,
    /// Signed and unbounded
    pub growth_rate: f64,
    pub consistency_score: f64,
    pub diversification_score: f64,
    pub stability_index: f64,
    /// Weighted blend shown as "achievement rate" / "goal alignment"
    pub achievement_rate: f64,
    pub efficiency: f64,
    pub transaction_count: usize,
    pub monthly_series: Vec<MonthlyPoint>,
    pub top_sources: Vec<SourceShare>,
    pub insights: Vec<Insight>,
}

impl MetricsSnapshot {
    /// The percentage-valued fields that are bounded to [0, 100]
    #[must_use]
    pub fn bounded_scores(&self) -> [(&'static str, f64); 5] {
        [
            ("consistency", self.consistency_score),
            ("diversification", self.diversification_score),
            ("stability", self.stability_index),
            ("achievement", self.achievement_rate),
            ("efficiency", self.efficiency),
        ]
    }
}
