//! Display formatting for terminal output
//!
//! Renders report tables and the summary cards for the CLI commands.

pub mod report;
pub mod summary;

pub use report::{
    format_customer_counts, format_delivery, format_monthly, format_products, format_rfm,
    format_segments, format_sellers, NO_DATA,
};
pub use summary::{format_summary, SummaryCards};
