mod ids;
mod period;
mod snapshot;
mod transaction;

pub use ids::{InsightId, TransactionId};
pub use period::PeriodTotals;
pub use snapshot::{Insight, InsightIcon, MetricsSnapshot, MonthlyPoint, SourceShare};
pub use transaction::{PaymentMethod, Transaction, TransactionKind};
