//! CSV export of individual report tables
//!
//! Money columns are written as plain decimals ("1234.50") so spreadsheets
//! can sum them; the display currency format is for terminals only.

use std::io::Write;

use serde::Serialize;

use crate::error::InsightsResult;
use crate::reports::{
    CustomerCount, DeliveryStatusCount, MonthlyPoint, ProductOrders, SegmentCount,
    SegmentedCustomer, SellerRevenue,
};

fn write_records<W, R, I>(writer: &mut W, records: I) -> InsightsResult<()>
where
    W: Write,
    R: Serialize,
    I: IntoIterator<Item = R>,
{
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Export customer counts; `key_header` names the grouping column
pub fn export_customer_counts_csv<W: Write>(
    key_header: &str,
    counts: &[CustomerCount],
    writer: &mut W,
) -> InsightsResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record([key_header, "customers"])?;
    for count in counts {
        let customers = count.customers.to_string();
        csv_writer.write_record([count.key.as_str(), customers.as_str()])?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct DeliveryRecord<'a> {
    delivery_status: &'a str,
    orders: usize,
}

/// Export the delivery status distribution
pub fn export_delivery_csv<W: Write>(
    counts: &[DeliveryStatusCount],
    writer: &mut W,
) -> InsightsResult<()> {
    write_records(
        writer,
        counts.iter().map(|c| DeliveryRecord {
            delivery_status: &c.status,
            orders: c.orders,
        }),
    )
}

#[derive(Serialize)]
struct SellerRecord<'a> {
    rank: usize,
    seller_id: &'a str,
    revenue: String,
}

/// Export the seller revenue ranking
pub fn export_sellers_csv<W: Write>(sellers: &[SellerRevenue], writer: &mut W) -> InsightsResult<()> {
    write_records(
        writer,
        sellers.iter().enumerate().map(|(i, s)| SellerRecord {
            rank: i + 1,
            seller_id: s.seller_id.as_str(),
            revenue: s.revenue.to_string(),
        }),
    )
}

#[derive(Serialize)]
struct ProductRecord<'a> {
    rank: usize,
    product_id: &'a str,
    order_items: u64,
}

/// Export the product popularity ranking
pub fn export_products_csv<W: Write>(
    products: &[ProductOrders],
    writer: &mut W,
) -> InsightsResult<()> {
    write_records(
        writer,
        products.iter().enumerate().map(|(i, p)| ProductRecord {
            rank: i + 1,
            product_id: p.product_id.as_str(),
            order_items: p.order_items,
        }),
    )
}

#[derive(Serialize)]
struct MonthRecord {
    month: String,
    order_count: usize,
    revenue: String,
}

/// Export the monthly orders and revenue series
pub fn export_monthly_csv<W: Write>(points: &[MonthlyPoint], writer: &mut W) -> InsightsResult<()> {
    write_records(
        writer,
        points.iter().map(|p| MonthRecord {
            month: p.month.to_string(),
            order_count: p.order_count,
            revenue: p.revenue.to_string(),
        }),
    )
}

#[derive(Serialize)]
struct RfmCsvRecord<'a> {
    customer_id: &'a str,
    recency: i64,
    frequency: u32,
    monetary: String,
    code: &'a str,
    segment: &'a str,
}

/// Export per-customer RFM values, codes and segments
pub fn export_rfm_csv<W: Write>(customers: &[SegmentedCustomer], writer: &mut W) -> InsightsResult<()> {
    write_records(
        writer,
        customers.iter().map(|c| RfmCsvRecord {
            customer_id: c.rfm.customer_id.as_str(),
            recency: c.rfm.recency,
            frequency: c.rfm.frequency,
            monetary: c.rfm.monetary.to_string(),
            code: &c.code,
            segment: c.segment.map(|s| s.label()).unwrap_or(""),
        }),
    )
}

#[derive(Serialize)]
struct SegmentRecord {
    segment: &'static str,
    customers: usize,
}

/// Export the named segment counts
pub fn export_segments_csv<W: Write>(counts: &[SegmentCount], writer: &mut W) -> InsightsResult<()> {
    write_records(
        writer,
        counts.iter().map(|c| SegmentRecord {
            segment: c.segment.label(),
            customers: c.customers,
        }),
    )
}
