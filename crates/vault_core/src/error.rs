use std::fmt;

/// Errors raised when parsing a `YYYY-MM` month key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthKeyError {
    /// Input did not have the `YYYY-MM` shape
    Malformed(String),
    /// Year component was not a number
    InvalidYear(String),
    /// Month component was not a number in 1..=12
    InvalidMonth(String),
}

impl fmt::Display for MonthKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthKeyError::Malformed(s) => write!(f, "expected YYYY-MM, got {s:?}"),
            MonthKeyError::InvalidYear(s) => write!(f, "invalid year {s:?}"),
            MonthKeyError::InvalidMonth(s) => write!(f, "invalid month {s:?}"),
        }
    }
}

impl std::error::Error for MonthKeyError {}

/// Errors raised when parsing a transaction kind from CLI input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseKindError {
    UnknownTransactionKind(String),
}

impl fmt::Display for ParseKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseKindError::UnknownTransactionKind(s) => {
                write!(f, "unknown transaction kind {s:?} (expected income or expense)")
            }
        }
    }
}

impl std::error::Error for ParseKindError {}
