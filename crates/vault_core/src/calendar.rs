//! Calendar helpers for month bucketing and period boundaries.
//!
//! Month keys are compared and hashed as plain `(year, month)` pairs. Day
//! offsets saturate at the ends of jiff's date range instead of failing.

use std::fmt;
use std::str::FromStr;

use jiff::Span;
use jiff::civil::Date;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::MonthKeyError;

/// A calendar month, displayed and parsed as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i16,
    month: i8,
}

impl MonthKey {
    /// Build a key, returning `None` when `month` is outside 1..=12.
    #[must_use]
    pub fn new(year: i16, month: i8) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// The month containing `date`.
    #[must_use]
    pub fn from_date(date: Date) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    #[must_use]
    pub fn year(self) -> i16 {
        self.year
    }

    #[must_use]
    pub fn month(self) -> i8 {
        self.month
    }

    /// The immediately preceding month. January wraps to December of the prior year.
    #[must_use]
    pub fn previous(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Whether `date` falls inside this month.
    #[must_use]
    pub fn contains(self, date: Date) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = MonthKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| MonthKeyError::Malformed(s.to_string()))?;
        if year.len() != 4 || month.len() != 2 {
            return Err(MonthKeyError::Malformed(s.to_string()));
        }
        let year: i16 = year
            .parse()
            .map_err(|_| MonthKeyError::InvalidYear(year.to_string()))?;
        let month: i8 = month
            .parse()
            .map_err(|_| MonthKeyError::InvalidMonth(month.to_string()))?;
        MonthKey::new(year, month).ok_or_else(|| MonthKeyError::InvalidMonth(month.to_string()))
    }
}

impl Serialize for MonthKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Add `n` days to a date, saturating at jiff's supported range.
#[must_use]
pub fn add_days(d: Date, n: i32) -> Date {
    let saturated = if n < 0 { Date::MIN } else { Date::MAX };
    Span::new()
        .try_days(i64::from(n))
        .and_then(|span| d.checked_add(span))
        .unwrap_or(saturated)
}

/// Inclusive Monday..=Sunday bounds of the ISO week containing `date`.
///
/// Near the ends of the supported range the bounds are clamped to
/// `Date::MIN`/`Date::MAX`.
#[must_use]
pub fn week_bounds(date: Date) -> (Date, Date) {
    let offset = i32::from(date.weekday().to_monday_zero_offset());
    let monday = add_days(date, -offset);
    (monday, add_days(monday, 6))
}
