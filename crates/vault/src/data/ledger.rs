use std::path::Path;

use serde::{Deserialize, Serialize};
use vault_core::model::{PeriodTotals, Transaction, TransactionKind};

/// Backend-supplied running totals, one set per panel
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerTotals {
    #[serde(default)]
    pub income: Option<PeriodTotals>,
    #[serde(default)]
    pub expense: Option<PeriodTotals>,
}

impl LedgerTotals {
    pub fn for_kind(&self, kind: TransactionKind) -> Option<PeriodTotals> {
        match kind {
            TransactionKind::Income => self.income,
            TransactionKind::Expense => self.expense,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.income.is_none() && self.expense.is_none()
    }
}

/// On-disk ledger: records exported from the backend plus optional running totals
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerData {
    /// Totals supplied by the backend; a panel without its own entry derives
    /// them from records
    #[serde(default)]
    pub period_totals: LedgerTotals,

    /// `null` and a missing key both mean "no records"
    #[serde(default)]
    pub transactions: Option<Vec<Transaction>>,
}

/// File formats a ledger can be stored in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerFormat {
    Yaml,
    Json,
}

impl LedgerFormat {
    /// Pick the format from the file extension; anything but `.json` is YAML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => LedgerFormat::Json,
            _ => LedgerFormat::Yaml,
        }
    }
}

impl LedgerData {
    /// Record slice, or `None` when the file had no usable list
    pub fn records(&self) -> Option<&[Transaction]> {
        self.transactions.as_deref()
    }

    /// Load from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_saphyr::Error> {
        serde_saphyr::from_str(yaml)
    }

    /// Supplied totals for one panel
    pub fn period_totals_for(&self, kind: TransactionKind) -> Option<PeriodTotals> {
        self.period_totals.for_kind(kind)
    }

    /// Load from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
