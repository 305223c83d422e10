//! Day/week/month/year running totals

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::transaction::Transaction;
use crate::calendar::{MonthKey, week_bounds};

/// Running totals for the periods ending at a reference date.
///
/// Normally supplied by the backend alongside the record list. When only
/// records are available they can be derived with [`PeriodTotals::from_records`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PeriodTotals {
    pub day: f64,
    pub week: f64,
    pub month: f64,
    pub year: f64,
}

impl PeriodTotals {
    #[must_use]
    pub fn new(day: f64, week: f64, month: f64, year: f64) -> Self {
        Self {
            day,
            week,
            month,
            year,
        }
    }

    /// Sum records into the day, ISO week, calendar month and calendar year of `as_of`.
    ///
    /// Records dated after `as_of` still count towards the period they fall in.
    #[must_use]
    pub fn from_records(records: &[Transaction], as_of: Date) -> Self {
        let (week_start, week_end) = week_bounds(as_of);
        let month = MonthKey::from_date(as_of);

        records.iter().fold(Self::default(), |mut totals, tx| {
            if tx.date == as_of {
                totals.day += tx.amount;
            }
            if tx.date >= week_start && tx.date <= week_end {
                totals.week += tx.amount;
            }
            if month.contains(tx.date) {
                totals.month += tx.amount;
            }
            if tx.date.year() == as_of.year() {
                totals.year += tx.amount;
            }
            totals
        })
    }

    /// True when every period total is exactly zero
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.day == 0.0 && self.week == 0.0 && self.month == 0.0 && self.year == 0.0
    }
}
