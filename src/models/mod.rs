//! Core data models for commerce-insights
//!
//! This module contains the input-side data structures: the transaction row,
//! its identifiers, money amounts and date ranges.

pub mod ids;
pub mod money;
pub mod range;
pub mod transaction;

pub use ids::{CustomerId, OrderId, ProductId, SellerId};
pub use money::Money;
pub use range::{parse_date, DateRange, Step, YearMonth};
pub use transaction::TransactionRow;
