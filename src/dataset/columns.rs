//! Column resolution for the flattened transactions CSV
//!
//! Columns are located by header name, so exports with extra columns or a
//! different column order load the same way.

use csv::StringRecord;

use crate::error::{InsightsError, InsightsResult};

pub const CUSTOMER_ID: &str = "customer_id";
pub const CUSTOMER_CITY: &str = "customer_city";
pub const CUSTOMER_STATE: &str = "customer_state";
pub const ORDER_ID: &str = "order_id";
pub const ORDER_ITEM_ID: &str = "order_item_id";
pub const PRODUCT_ID: &str = "product_id";
pub const SELLER_ID: &str = "seller_id";
pub const PURCHASE_TIMESTAMP: &str = "order_purchase_timestamp";
pub const DELIVERY_STATUS: &str = "delivery_status";
pub const REVENUE: &str = "revenue";

/// Every column the reports need, in documentation order
pub const REQUIRED_COLUMNS: [&str; 10] = [
    CUSTOMER_ID,
    CUSTOMER_CITY,
    CUSTOMER_STATE,
    ORDER_ID,
    ORDER_ITEM_ID,
    PRODUCT_ID,
    SELLER_ID,
    PURCHASE_TIMESTAMP,
    DELIVERY_STATUS,
    REVENUE,
];

/// Positions of the required columns within a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnIndex {
    pub customer_id: usize,
    pub customer_city: usize,
    pub customer_state: usize,
    pub order_id: usize,
    pub order_item_id: usize,
    pub product_id: usize,
    pub seller_id: usize,
    pub purchase_timestamp: usize,
    pub delivery_status: usize,
    pub revenue: usize,
}

impl ColumnIndex {
    /// Resolve every required column from the header record
    ///
    /// Fails on the first required column that is absent.
    pub fn from_headers(headers: &StringRecord) -> InsightsResult<Self> {
        let names: Vec<&str> = headers
            .iter()
            .map(|h| h.trim().trim_start_matches('\u{feff}'))
            .collect();

        let find = |column: &'static str| -> InsightsResult<usize> {
            names
                .iter()
                .position(|name| *name == column)
                .ok_or(InsightsError::MissingColumn { column })
        };

        Ok(Self {
            customer_id: find(CUSTOMER_ID)?,
            customer_city: find(CUSTOMER_CITY)?,
            customer_state: find(CUSTOMER_STATE)?,
            order_id: find(ORDER_ID)?,
            order_item_id: find(ORDER_ITEM_ID)?,
            product_id: find(PRODUCT_ID)?,
            seller_id: find(SELLER_ID)?,
            purchase_timestamp: find(PURCHASE_TIMESTAMP)?,
            delivery_status: find(DELIVERY_STATUS)?,
            revenue: find(REVENUE)?,
        })
    }
}
