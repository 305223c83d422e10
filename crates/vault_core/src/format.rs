//! Display primitives: currency and percentage formatting, score bands.
//!
//! Percentages here are already on a 0-100 scale.

use serde::{Deserialize, Serialize};

fn group_thousands(whole: u64) -> String {
    let digits = whole.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format a currency value with thousands separators and cents, e.g. `-$1,234.50`
pub fn format_currency(value: f64, symbol: &str) -> String {
    let total_cents = (value.abs() * 100.0).round() as u64;
    let whole = total_cents / 100;
    let cents = total_cents % 100;
    let sign = if value < 0.0 && total_cents > 0 { "-" } else { "" };
    format!("{sign}{symbol}{}.{cents:02}", group_thousands(whole))
}

/// Format a percentage with one decimal, e.g. `82.5%`
pub fn format_percentage(value: f64) -> String {
    format!("{value:.1}%")
}

/// Format a signed percentage change, e.g. `+50.0%` or `-12.3%`
pub fn format_signed_percentage(value: f64) -> String {
    if value > 0.0 {
        format!("+{value:.1}%")
    } else {
        format!("{value:.1}%")
    }
}

/// Qualitative band of a 0-100 score, used for metric bar coloring
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl ScoreBand {
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            ScoreBand::Excellent
        } else if score >= 60.0 {
            ScoreBand::Good
        } else if score >= 40.0 {
            ScoreBand::Fair
        } else {
            ScoreBand::Poor
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ScoreBand::Poor => "Poor",
            ScoreBand::Fair => "Fair",
            ScoreBand::Good => "Good",
            ScoreBand::Excellent => "Excellent",
        }
    }

    /// CSS-style color name of the metric bar
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            ScoreBand::Poor => "red",
            ScoreBand::Fair => "orange",
            ScoreBand::Good => "blue",
            ScoreBand::Excellent => "green",
        }
    }
}

/// Color of a signed change; rising expenses are bad news
pub fn trend_color(change: f64, higher_is_better: bool) -> &'static str {
    if change == 0.0 {
        "gray"
    } else if (change > 0.0) == higher_is_better {
        "green"
    } else {
        "red"
    }
}
