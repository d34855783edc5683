//! Recency / Frequency / Monetary scoring
//!
//! Recency is measured against the latest purchase in the filtered set, not
//! against today, so a historical export still yields small recency values
//! for its most active customers.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::{CustomerId, Money, TransactionRow};

/// RFM values of one customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RfmRecord {
    pub customer_id: CustomerId,
    /// Whole days between the set's latest purchase and the customer's latest
    pub recency: i64,
    /// Number of order lines
    pub frequency: u32,
    /// Total revenue
    pub monetary: Money,
}

struct Accumulator {
    last_purchase: NaiveDateTime,
    lines: u32,
    total: Money,
}

/// One record per customer present in `rows`, ordered by customer id
pub fn compute_rfm(rows: &[TransactionRow]) -> Vec<RfmRecord> {
    let Some(analysis_time) = rows.iter().map(|r| r.purchased_at).max() else {
        return Vec::new();
    };

    let mut customers: BTreeMap<&CustomerId, Accumulator> = BTreeMap::new();
    for row in rows {
        customers
            .entry(&row.customer_id)
            .and_modify(|acc| {
                acc.last_purchase = acc.last_purchase.max(row.purchased_at);
                acc.lines += 1;
                acc.total += row.revenue;
            })
            .or_insert(Accumulator {
                last_purchase: row.purchased_at,
                lines: 1,
                total: row.revenue,
            });
    }

    customers
        .into_iter()
        .map(|(customer_id, acc)| RfmRecord {
            customer_id: customer_id.clone(),
            recency: (analysis_time - acc.last_purchase).num_days(),
            frequency: acc.lines,
            monetary: acc.total,
        })
        .collect()
}
