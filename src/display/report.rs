//! Report table formatting
//!
//! Renders the aggregation tables for terminal output with `tabled`.

use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::config::CurrencyFormat;
use crate::reports::{
    status_shares, CustomerCount, DeliveryStatusCount, MonthlyPoint, ProductOrders,
    SegmentCount, SegmentedCustomer, SellerRevenue, SellerRevenueReport,
};

/// Message shown in place of an empty table
pub const NO_DATA: &str = "No data in range.";

fn finish(mut table: Table) -> String {
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()));
    table.to_string()
}

/// Format customer counts keyed by city or state
pub fn format_customer_counts(key_header: &str, counts: &[CustomerCount], top: usize) -> String {
    if counts.is_empty() {
        return NO_DATA.to_string();
    }

    let mut builder = Builder::default();
    builder.push_record(["#", key_header, "Customers"]);
    for (rank, count) in counts.iter().take(top).enumerate() {
        builder.push_record([
            (rank + 1).to_string(),
            count.key.clone(),
            count.customers.to_string(),
        ]);
    }
    finish(builder.build())
}

#[derive(Tabled)]
struct DeliveryLine {
    #[tabled(rename = "Delivery Status")]
    status: String,
    #[tabled(rename = "Orders")]
    orders: usize,
    #[tabled(rename = "Share")]
    share: String,
}

/// Format the delivery status distribution with percentage shares
pub fn format_delivery(counts: &[DeliveryStatusCount]) -> String {
    if counts.is_empty() {
        return NO_DATA.to_string();
    }

    let lines = counts
        .iter()
        .zip(status_shares(counts))
        .map(|(count, (_, share))| DeliveryLine {
            status: count.status.clone(),
            orders: count.orders,
            share: format!("{:.1}%", share),
        });
    finish(Table::new(lines))
}

#[derive(Tabled)]
struct SellerLine {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "Seller")]
    seller: String,
    #[tabled(rename = "Revenue")]
    revenue: String,
}

fn seller_table(sellers: &[SellerRevenue], currency: &CurrencyFormat) -> String {
    let lines = sellers.iter().enumerate().map(|(i, s)| SellerLine {
        rank: i + 1,
        seller: s.seller_id.to_string(),
        revenue: currency.format(s.revenue),
    });
    finish(Table::new(lines))
}

/// Format the best and worst seller views
pub fn format_sellers(report: &SellerRevenueReport, top: usize, currency: &CurrencyFormat) -> String {
    if report.is_empty() {
        return NO_DATA.to_string();
    }

    format!(
        "Best Performing Sellers\n{}\n\nWorst Performing Sellers\n{}",
        seller_table(report.best(top), currency),
        seller_table(report.worst(top), currency)
    )
}

#[derive(Tabled)]
struct ProductLine {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "Product")]
    product: String,
    #[tabled(rename = "Total Order")]
    order_items: u64,
}

/// Format the product popularity ranking
pub fn format_products(products: &[ProductOrders], top: usize) -> String {
    if products.is_empty() {
        return NO_DATA.to_string();
    }

    let lines = products.iter().take(top).enumerate().map(|(i, p)| ProductLine {
        rank: i + 1,
        product: p.product_id.to_string(),
        order_items: p.order_items,
    });
    finish(Table::new(lines))
}

#[derive(Tabled)]
struct MonthLine {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Orders")]
    orders: usize,
    #[tabled(rename = "Revenue")]
    revenue: String,
}

/// Format the monthly orders and revenue series
pub fn format_monthly(points: &[MonthlyPoint], currency: &CurrencyFormat) -> String {
    if points.is_empty() {
        return NO_DATA.to_string();
    }

    let lines = points.iter().map(|p| MonthLine {
        month: p.month.to_string(),
        orders: p.order_count,
        revenue: currency.format(p.revenue),
    });
    finish(Table::new(lines))
}

#[derive(Tabled)]
struct RfmLine {
    #[tabled(rename = "Customer")]
    customer: String,
    #[tabled(rename = "Recency")]
    recency: i64,
    #[tabled(rename = "Frequency")]
    frequency: u32,
    #[tabled(rename = "Monetary")]
    monetary: String,
    #[tabled(rename = "Code")]
    code: String,
    #[tabled(rename = "Segment")]
    segment: String,
}

/// Format per-customer RFM values with their codes
pub fn format_rfm(customers: &[SegmentedCustomer], limit: usize, currency: &CurrencyFormat) -> String {
    if customers.is_empty() {
        return NO_DATA.to_string();
    }

    let lines = customers.iter().take(limit).map(|c| RfmLine {
        customer: c.rfm.customer_id.to_string(),
        recency: c.rfm.recency,
        frequency: c.rfm.frequency,
        monetary: currency.format(c.rfm.monetary),
        code: c.code.clone(),
        segment: c
            .segment
            .map(|s| s.label().to_string())
            .unwrap_or_else(|| "-".to_string()),
    });
    finish(Table::new(lines))
}

#[derive(Tabled)]
struct SegmentLine {
    #[tabled(rename = "Segment")]
    segment: String,
    #[tabled(rename = "Customers")]
    customers: usize,
}

/// Format the named segment counts
pub fn format_segments(counts: &[SegmentCount]) -> String {
    if counts.is_empty() {
        return NO_DATA.to_string();
    }

    let lines = counts.iter().map(|c| SegmentLine {
        segment: c.segment.label().to_string(),
        customers: c.customers,
    });
    finish(Table::new(lines))
}
