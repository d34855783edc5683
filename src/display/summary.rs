//! Summary card formatting
//!
//! The four headline figures shown above every dashboard view.

use tabled::builder::Builder;
use tabled::settings::Style;

use crate::config::CurrencyFormat;
use crate::models::DateRange;
use crate::reports::Dashboard;

/// Headline figures rendered as display strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryCards {
    pub total_orders: String,
    pub total_revenue: String,
    pub customers: String,
    pub order_lines: String,
}

impl SummaryCards {
    pub fn from_dashboard(dashboard: &Dashboard, currency: &CurrencyFormat) -> Self {
        let totals = &dashboard.totals;
        Self {
            total_orders: totals.orders.to_string(),
            total_revenue: currency.format(totals.revenue),
            customers: totals.customers.to_string(),
            order_lines: totals.order_lines.to_string(),
        }
    }
}

/// Format the summary block for `insights summary`
pub fn format_summary(dashboard: &Dashboard, currency: &CurrencyFormat) -> String {
    let cards = SummaryCards::from_dashboard(dashboard, currency);

    let mut builder = Builder::default();
    builder.push_record(["Total Orders", "Total Revenue", "Customers", "Order Lines"]);
    builder.push_record([
        cards.total_orders,
        cards.total_revenue,
        cards.customers,
        cards.order_lines,
    ]);

    let mut table = builder.build();
    table.with(Style::rounded());

    format!("{}\n{}", range_heading(&dashboard.range), table)
}

pub(crate) fn range_heading(range: &DateRange) -> String {
    format!("Commerce Insights: {}", range)
}
