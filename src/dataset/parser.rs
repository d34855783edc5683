//! Field parsing for transaction records
//!
//! Converts one CSV record into a `TransactionRow`, reporting the row number
//! and column of the first field that fails to parse.

use chrono::{NaiveDate, NaiveDateTime};
use csv::StringRecord;

use super::columns::{self, ColumnIndex};
use crate::error::{InsightsError, InsightsResult};
use crate::models::{CustomerId, Money, OrderId, ProductId, SellerId, TransactionRow};

/// Timestamp layouts seen in dataframe and spreadsheet exports
const TIMESTAMP_FORMATS: [&str; 5] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse a single CSV record
///
/// `row` is the 1-based data row number (header excluded).
pub fn parse_record(
    record: &StringRecord,
    index: &ColumnIndex,
    row: usize,
) -> InsightsResult<TransactionRow> {
    let fields = RecordFields { record, row };

    let timestamp = fields.get(index.purchase_timestamp, columns::PURCHASE_TIMESTAMP)?;
    let purchased_at = parse_timestamp(timestamp).ok_or_else(|| {
        InsightsError::invalid_field(
            row,
            columns::PURCHASE_TIMESTAMP,
            timestamp,
            "unrecognized timestamp",
        )
    })?;

    let revenue_str = fields.get(index.revenue, columns::REVENUE)?;
    let revenue = Money::parse(revenue_str).map_err(|e| {
        InsightsError::invalid_field(row, columns::REVENUE, revenue_str, e.to_string())
    })?;

    let item_str = fields.get(index.order_item_id, columns::ORDER_ITEM_ID)?;
    let order_item_id = parse_item_number(item_str).ok_or_else(|| {
        InsightsError::invalid_field(
            row,
            columns::ORDER_ITEM_ID,
            item_str,
            "expected a non-negative integer",
        )
    })?;

    Ok(TransactionRow {
        customer_id: CustomerId::new(fields.required(index.customer_id, columns::CUSTOMER_ID)?),
        customer_city: fields.get(index.customer_city, columns::CUSTOMER_CITY)?.to_string(),
        customer_state: fields.get(index.customer_state, columns::CUSTOMER_STATE)?.to_string(),
        order_id: OrderId::new(fields.required(index.order_id, columns::ORDER_ID)?),
        order_item_id,
        product_id: ProductId::new(fields.required(index.product_id, columns::PRODUCT_ID)?),
        seller_id: SellerId::new(fields.required(index.seller_id, columns::SELLER_ID)?),
        purchased_at,
        delivery_status: fields.get(index.delivery_status, columns::DELIVERY_STATUS)?.to_string(),
        revenue,
    })
}

/// Borrowed view of one record that attaches row context to errors
struct RecordFields<'r> {
    record: &'r StringRecord,
    row: usize,
}

impl<'r> RecordFields<'r> {
    fn get(&self, position: usize, column: &'static str) -> InsightsResult<&'r str> {
        self.record.get(position).map(str::trim).ok_or_else(|| {
            InsightsError::invalid_field(self.row, column, "", "field missing from record")
        })
    }

    fn required(&self, position: usize, column: &'static str) -> InsightsResult<String> {
        let value = self.get(position, column)?;
        if value.is_empty() {
            return Err(InsightsError::invalid_field(
                self.row,
                column,
                value,
                "empty value",
            ));
        }
        Ok(value.to_string())
    }
}

/// Parse a purchase timestamp; a bare date means midnight
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    for format in TIMESTAMP_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(s, format) {
            return Some(ts);
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Parse an item line number, tolerating float-typed exports such as "2.0"
fn parse_item_number(s: &str) -> Option<u32> {
    if let Ok(n) = s.parse::<u32>() {
        return Some(n);
    }
    let f: f64 = s.parse().ok()?;
    if f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f <= f64::from(u32::MAX) {
        Some(f as u32)
    } else {
        None
    }
}
