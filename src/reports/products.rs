//! Product popularity
//!
//! Products are ranked by the sum of their `order_item_id` values. That
//! column is the line number of an item inside its order, so the total is
//! not a count of orders or units: a product sold once as the third line of
//! an order scores 3. The metric is kept literally so existing dashboards
//! keep their numbers; a switch to counting lines must be a deliberate change.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::ranking::rank_descending;
use crate::models::{ProductId, TransactionRow};

/// Popularity score of one product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductOrders {
    pub product_id: ProductId,
    /// Sum of `order_item_id` over the product's lines
    pub order_items: u64,
}

/// Sum of `order_item_id` per product, highest first
pub fn group_by_product_orders(rows: &[TransactionRow]) -> Vec<ProductOrders> {
    let mut totals: HashMap<&ProductId, u64> = HashMap::new();
    for row in rows {
        *totals.entry(&row.product_id).or_default() += u64::from(row.order_item_id);
    }

    rank_descending(totals)
        .into_iter()
        .map(|(product_id, order_items)| ProductOrders {
            product_id: product_id.clone(),
            order_items,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::transaction::fixtures::row;

    fn line(product: &str, order: &str, item: u32) -> TransactionRow {
        let mut r = row("c1", order, "2018-01-01", 100);
        r.product_id = ProductId::from(product);
        r.order_item_id = item;
        r
    }

    #[test]
    fn test_sums_item_line_numbers_not_orders() {
        // p-a sells on three lines (one order each, always line 1);
        // p-b sells once, as line 4 of a larger order.
        let rows = vec![
            line("p-a", "o1", 1),
            line("p-a", "o2", 1),
            line("p-a", "o3", 1),
            line("p-b", "o4", 4),
        ];

        let ranking = group_by_product_orders(&rows);
        assert_eq!(ranking[0].product_id.as_str(), "p-b");
        assert_eq!(ranking[0].order_items, 4);
        assert_eq!(ranking[1].product_id.as_str(), "p-a");
        assert_eq!(ranking[1].order_items, 3);
    }

    #[test]
    fn test_multi_line_order_accumulates_line_numbers() {
        let rows = vec![line("p-a", "o1", 1), line("p-a", "o1", 2), line("p-a", "o1", 3)];
        let ranking = group_by_product_orders(&rows);
        assert_eq!(ranking.len(), 1);
        assert_eq!(ranking[0].order_items, 6);
    }

    #[test]
    fn test_empty_input() {
        assert!(group_by_product_orders(&[]).is_empty());
    }
}
