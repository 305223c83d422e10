//! Plain-text rendering of a metrics snapshot

use std::fmt::Write;

use vault_core::MetricsConfig;
use vault_core::format::{
    ScoreBand, format_currency, format_percentage, format_signed_percentage, trend_color,
};
use vault_core::model::{MetricsSnapshot, MonthlyPoint, TransactionKind};

const BAR_WIDTH: usize = 20;

/// `[#########-----------]` bar of a 0-100 score
fn score_bar(score: f64) -> String {
    let filled = ((score.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

fn score_line(out: &mut String, label: &str, score: f64) {
    let band = ScoreBand::from_score(score);
    let _ = writeln!(
        out,
        "  {label:<17} {} {:>6}  {}",
        score_bar(score),
        format_percentage(score),
        band.label()
    );
}

/// Render the full evaluation panel
pub fn render_snapshot(snapshot: &MetricsSnapshot, config: &MetricsConfig) -> String {
    let symbol = config.currency_symbol.as_str();
    let higher_is_better = snapshot.kind == TransactionKind::Income;
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} evaluation as of {} ({} transactions)",
        snapshot.kind, snapshot.as_of, snapshot.transaction_count
    );
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "  Total             {}",
        format_currency(snapshot.total_amount, symbol)
    );
    let totals = &snapshot.period_totals;
    let _ = writeln!(
        out,
        "  Today {}  Week {}  Month {}  Year {}",
        format_currency(totals.day, symbol),
        format_currency(totals.week, symbol),
        format_currency(totals.month, symbol),
        format_currency(totals.year, symbol),
    );
    let _ = writeln!(
        out,
        "  Growth (MoM)      {} ({})",
        format_signed_percentage(snapshot.growth_rate),
        trend_color(snapshot.growth_rate, higher_is_better)
    );
    let _ = writeln!(out);

    score_line(&mut out, "Consistency", snapshot.consistency_score);
    score_line(&mut out, "Diversification", snapshot.diversification_score);
    score_line(&mut out, "Stability", snapshot.stability_index);
    score_line(&mut out, "Achievement", snapshot.achievement_rate);
    score_line(&mut out, "Efficiency", snapshot.efficiency);

    if !snapshot.top_sources.is_empty() {
        let heading = match snapshot.kind {
            TransactionKind::Income => "Top sources",
            TransactionKind::Expense => "Top categories",
        };
        let _ = writeln!(out);
        let _ = writeln!(out, "{heading}");
        for share in &snapshot.top_sources {
            let _ = writeln!(
                out,
                "  {:<17} {:>14} {:>7}  ({} tx)",
                share.source,
                format_currency(share.total, symbol),
                format_percentage(share.share),
                share.count
            );
        }
    }

    if !snapshot.insights.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Insights");
        for insight in &snapshot.insights {
            let _ = writeln!(
                out,
                "  {} {}: {}",
                insight.icon.glyph(),
                insight.title,
                insight.description
            );
        }
    }

    out
}

/// Render the monthly buckets as `YYYY-MM  amount` lines
pub fn render_months(series: &[MonthlyPoint], config: &MetricsConfig) -> String {
    let mut out = String::new();
    for point in series {
        let _ = writeln!(
            out,
            "{}  {:>14}",
            point.month,
            format_currency(point.total, &config.currency_symbol)
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;
    use vault_core::evaluate;
    use vault_core::model::Transaction;

    fn snapshot() -> MetricsSnapshot {
        let records = vec![
            Transaction::income(1, 100.0, date(2024, 1, 5), "Salary"),
            Transaction::income(2, 150.0, date(2024, 2, 5), "Freelance"),
        ];
        evaluate(
            TransactionKind::Income,
            Some(records.as_slice()),
            None,
            date(2024, 2, 20),
            &MetricsConfig::default(),
        )
    }

    #[test]
    fn test_score_bar() {
        assert_eq!(score_bar(0.0), format!("[{}]", "-".repeat(20)));
        assert_eq!(score_bar(100.0), format!("[{}]", "#".repeat(20)));
        assert_eq!(score_bar(50.0), format!("[{}{}]", "#".repeat(10), "-".repeat(10)));
    }

    #[test]
    fn test_render_snapshot_contents() {
        let text = render_snapshot(&snapshot(), &MetricsConfig::default());
        assert!(text.starts_with("Income evaluation as of 2024-02-20 (2 transactions)"));
        assert!(text.contains("$250.00"));
        assert!(text.contains("+50.0% (green)"));
        assert!(text.contains("Top sources"));
        assert!(text.contains("Positive Growth"));
        assert!(text.contains("Diversify"));
    }

    #[test]
    fn test_render_uses_configured_currency() {
        let config = MetricsConfig::default().with_currency_symbol("€");
        let text = render_snapshot(&snapshot(), &config);
        assert!(text.contains("€250.00"));
        assert!(!text.contains('$'));
    }

    #[test]
    fn test_render_months() {
        let text = render_months(&snapshot().monthly_series, &MetricsConfig::default());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("2024-01"));
        assert!(lines[1].ends_with("$150.00"));
    }
}
