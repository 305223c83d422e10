//! Integration tests for the metrics engine
//!
//! Tests are organized by topic:
//! - `metrics` - Individual metric functions against worked examples
//! - `insights` - Insight selection through `evaluate`
//! - `evaluate` - Snapshot assembly, period totals and null handling
//! - `properties` - Range invariants over seeded random ledgers

mod evaluate;
