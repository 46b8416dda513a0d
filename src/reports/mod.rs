//! Reporting layer for cashflow-cli
//!
//! All reports read from the derived views produced by the aggregation
//! engine, which is recomputed from the full transaction snapshot on every
//! invocation, so it is safe to call on every refresh.

pub mod bas;
pub mod profit_loss;
pub mod summary;

pub use bas::BasStatement;
pub use profit_loss::{PlPeriod, PlReport};
pub use summary::{aggregate, AggregateViews, CategoryTotal, MonthlyAggregate, QuarterAggregate, Totals};
