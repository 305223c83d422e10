//! Income and expense records
//!
//! Records are loaded once from the backend and only ever borrowed by the
//! metric functions.

use std::fmt;
use std::str::FromStr;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::ids::TransactionId;
use crate::calendar::MonthKey;
use crate::error::ParseKindError;

/// Whether a record is money coming in or going out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    #[default]
    Income,
    Expense,
}

impl TransactionKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TransactionKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" | "incomes" => Ok(TransactionKind::Income),
            "expense" | "expenses" => Ok(TransactionKind::Expense),
            _ => Err(ParseKindError::UnknownTransactionKind(s.to_string())),
        }
    }
}

/// How a transaction was paid or received
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    #[default]
    BankTransfer,
    CreditCard,
    DebitCard,
    DigitalWallet,
    Crypto,
    Check,
    Other,
}

/// A single income or expense record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    #[serde(default)]
    pub kind: TransactionKind,
    pub amount: f64,
    pub date: Date,
    /// Income source or expense category
    #[serde(alias = "category")]
    pub source: String,
    #[serde(default)]
    pub payment_method: PaymentMethod,
    /// `isReceived` for incomes, `isPaid` for expenses
    #[serde(default, alias = "received", alias = "paid")]
    pub settled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Transaction {
    /// Minimal record for tests and builders; settled, bank transfer, no description.
    #[must_use]
    pub fn new(
        id: u32,
        kind: TransactionKind,
        amount: f64,
        date: Date,
        source: impl Into<String>,
    ) -> Self {
        Self {
            id: TransactionId(id),
            kind,
            amount,
            date,
            source: source.into(),
            payment_method: PaymentMethod::default(),
            settled: true,
            description: None,
        }
    }

    #[must_use]
    pub fn income(id: u32, amount: f64, date: Date, source: impl Into<String>) -> Self {
        Self::new(id, TransactionKind::Income, amount, date, source)
    }

    #[must_use]
    pub fn expense(id: u32, amount: f64, date: Date, category: impl Into<String>) -> Self {
        Self::new(id, TransactionKind::Expense, amount, date, category)
    }

    #[must_use]
    pub fn with_settled(mut self, settled: bool) -> Self {
        self.settled = settled;
        self
    }

    #[must_use]
    pub fn with_payment_method(mut self, method: PaymentMethod) -> Self {
        self.payment_method = method;
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn month(&self) -> MonthKey {
        MonthKey::from_date(self.date)
    }
}
