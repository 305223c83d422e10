//! Unique identifiers for ledger entities
//!
//! Each entity type has its own ID type to provide type safety and prevent
//! mixing up different kinds of identifiers.

use serde::{Deserialize, Serialize};

/// Unique identifier for a Transaction as assigned by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(pub u32);

/// Stable identifier of an insight slot, used for list-rendering identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InsightId(pub u8);

impl InsightId {
    pub const GROWTH: InsightId = InsightId(1);
    pub const DIVERSIFICATION: InsightId = InsightId(2);
    pub const CONSISTENCY: InsightId = InsightId(3);
}
