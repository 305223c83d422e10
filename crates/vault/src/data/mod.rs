//! Ledger and configuration files

pub mod ledger;
pub mod storage;

pub use ledger::{LedgerData, LedgerFormat, LedgerTotals};
pub use storage::{DataDirectory, StorageError, load_ledger};
