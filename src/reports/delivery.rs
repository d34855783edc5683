//! Delivery status distribution

use serde::{Deserialize, Serialize};

use super::ranking::distinct_per_key;
use crate::models::TransactionRow;

/// Distinct orders carrying one delivery status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryStatusCount {
    pub status: String,
    pub orders: usize,
}

/// Distinct orders per delivery status, most orders first
pub fn group_by_delivery_status(rows: &[TransactionRow]) -> Vec<DeliveryStatusCount> {
    distinct_per_key(rows, |r| r.delivery_status.as_str(), |r| &r.order_id)
        .into_iter()
        .map(|(status, orders)| DeliveryStatusCount { status, orders })
        .collect()
}

/// Share of each status as a percentage of all counted orders
pub fn status_shares(counts: &[DeliveryStatusCount]) -> Vec<(String, f64)> {
    let total: usize = counts.iter().map(|c| c.orders).sum();
    counts
        .iter()
        .map(|c| {
            let share = if total == 0 {
                0.0
            } else {
                c.orders as f64 / total as f64 * 100.0
            };
            (c.status.clone(), share)
        })
        .collect()
}
