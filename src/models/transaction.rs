//! Transaction row model
//!
//! One order-line record of the flattened e-commerce export. Rows are read
//! once and never mutated; every report only groups them.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::ids::{CustomerId, OrderId, ProductId, SellerId};
use super::money::Money;

/// A single order line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRow {
    /// Customer who placed the order
    pub customer_id: CustomerId,

    /// Customer city
    pub customer_city: String,

    /// Customer state
    pub customer_state: String,

    /// Order this line belongs to
    pub order_id: OrderId,

    /// Sequential line number within the order (1, 2, ...)
    pub order_item_id: u32,

    /// Product sold on this line
    pub product_id: ProductId,

    /// Seller fulfilling this line
    pub seller_id: SellerId,

    /// When the order was placed
    pub purchased_at: NaiveDateTime,

    /// Delivery outcome label (e.g. "On Time", "Late")
    pub delivery_status: String,

    /// Revenue of this line
    pub revenue: Money,
}

impl TransactionRow {
    /// Calendar date of the purchase
    pub fn purchase_date(&self) -> NaiveDate {
        self.purchased_at.date()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    //! Compact row builder shared by report tests

    use super::*;

    /// Build a row from the fields reports care about
    pub fn row(
        customer: &str,
        order: &str,
        date: &str,
        revenue_cents: i64,
    ) -> TransactionRow {
        TransactionRow {
            customer_id: CustomerId::from(customer),
            customer_city: "sao paulo".to_string(),
            customer_state: "SP".to_string(),
            order_id: OrderId::from(order),
            order_item_id: 1,
            product_id: ProductId::from("p-1"),
            seller_id: SellerId::from("s-1"),
            purchased_at: NaiveDateTime::parse_from_str(
                &format!("{} 10:00:00", date),
                "%Y-%m-%d %H:%M:%S",
            )
            .unwrap(),
            delivery_status: "On Time".to_string(),
            revenue: Money::from_cents(revenue_cents),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::row;

    #[test]
    fn test_purchase_date_drops_time() {
        let r = row("c1", "o1", "2018-03-04", 100);
        assert_eq!(r.purchase_date().to_string(), "2018-03-04");
    }
}
