//! Rule-based insight selection
//!
//! Insights are emitted in a fixed order: growth, diversification, consistency.
//! Each rule owns one [`InsightId`] slot so a list renderer can key on it.

use crate::config::InsightThresholds;
use crate::format::format_signed_percentage;
use crate::model::{Insight, InsightIcon, InsightId, PeriodTotals, TransactionKind};

/// The aggregate values the rules read
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InsightInput {
    pub kind: TransactionKind,
    pub transaction_count: usize,
    pub period_totals: PeriodTotals,
    pub growth_rate: f64,
    pub diversification_score: f64,
    pub consistency_score: f64,
}

impl InsightInput {
    /// No records and every period total zero
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transaction_count == 0 && self.period_totals.is_zero()
    }
}

/// Apply the threshold rules in order.
///
/// Returns an empty list for empty input so all-zero data never produces advice.
#[must_use]
pub fn generate_insights(input: &InsightInput, thresholds: &InsightThresholds) -> Vec<Insight> {
    if input.is_empty() {
        return Vec::new();
    }

    let mut insights = Vec::with_capacity(3);

    if input.growth_rate > thresholds.growth_above {
        insights.push(growth_insight(input.kind, input.growth_rate));
    }

    if input.diversification_score < thresholds.diversify_below {
        insights.push(diversify_insight(input.kind));
    } else if input.diversification_score > thresholds.well_diversified_above {
        insights.push(well_diversified_insight(input.kind));
    }

    if input.consistency_score < thresholds.variability_below {
        insights.push(variability_insight(input.kind));
    } else {
        insights.push(stable_insight(input.kind));
    }

    insights
}

fn insight(id: InsightId, icon: InsightIcon, title: &str, description: String) -> Insight {
    Insight {
        id,
        icon,
        title: title.to_string(),
        description,
    }
}

fn growth_insight(kind: TransactionKind, growth_rate: f64) -> Insight {
    let change = format_signed_percentage(growth_rate);
    match kind {
        TransactionKind::Income => insight(
            InsightId::GROWTH,
            InsightIcon::TrendingUp,
            "Positive Growth",
            format!("Your income grew {change} compared to last month. Keep it up!"),
        ),
        TransactionKind::Expense => insight(
            InsightId::GROWTH,
            InsightIcon::Warning,
            "Spending Increased",
            format!("Your spending changed {change} compared to last month. Review recent expenses."),
        ),
    }
}

fn diversify_insight(kind: TransactionKind) -> Insight {
    let description = match kind {
        TransactionKind::Income => {
            "Most of your income comes from few sources. Consider adding new income streams."
        }
        TransactionKind::Expense => {
            "Your spending is concentrated in few categories. Check whether one dominates your budget."
        }
    };
    insight(
        InsightId::DIVERSIFICATION,
        InsightIcon::Diversify,
        "Diversify",
        description.to_string(),
    )
}

fn well_diversified_insight(kind: TransactionKind) -> Insight {
    let description = match kind {
        TransactionKind::Income => "Your income is spread across several sources.",
        TransactionKind::Expense => "Your spending is spread across many categories.",
    };
    insight(
        InsightId::DIVERSIFICATION,
        InsightIcon::PieChart,
        "Well Diversified",
        description.to_string(),
    )
}

fn variability_insight(kind: TransactionKind) -> Insight {
    let noun = match kind {
        TransactionKind::Income => "income",
        TransactionKind::Expense => "spending",
    };
    insight(
        InsightId::CONSISTENCY,
        InsightIcon::Warning,
        "High Variability",
        format!("Your monthly {noun} varies significantly. Building a buffer can smooth it out."),
    )
}

fn stable_insight(kind: TransactionKind) -> Insight {
    let noun = match kind {
        TransactionKind::Income => "income",
        TransactionKind::Expense => "spending",
    };
    insight(
        InsightId::CONSISTENCY,
        InsightIcon::CheckCircle,
        "Stable Pattern",
        format!("Your monthly {noun} follows a consistent pattern."),
    )
}
