//! Monthly orders and revenue trend

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::models::{Money, OrderId, TransactionRow, YearMonth};

/// Orders and revenue for one calendar month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyPoint {
    pub month: YearMonth,
    /// Distinct orders placed in the month
    pub order_count: usize,
    pub revenue: Money,
}

/// One point per calendar month present in `rows`, oldest first
pub fn monthly_orders_revenue(rows: &[TransactionRow]) -> Vec<MonthlyPoint> {
    let mut months: BTreeMap<YearMonth, (HashSet<&OrderId>, Money)> = BTreeMap::new();
    for row in rows {
        let entry = months.entry(YearMonth::of(&row.purchased_at)).or_default();
        entry.0.insert(&row.order_id);
        entry.1 += row.revenue;
    }

    months
        .into_iter()
        .map(|(month, (orders, revenue))| MonthlyPoint {
            month,
            order_count: orders.len(),
            revenue,
        })
        .collect()
}

/// Insert zero points for months missing between the first and last point
///
/// Charts need a contiguous axis; the input must be chronological.
pub fn fill_month_gaps(points: &[MonthlyPoint]) -> Vec<MonthlyPoint> {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return Vec::new();
    };

    let mut filled = Vec::with_capacity(points.len());
    let mut present = points.iter().peekable();
    let mut month = first.month;
    while month <= last.month {
        match present.peek() {
            Some(point) if point.month == month => {
                filled.push((*point).clone());
                present.next();
            }
            _ => filled.push(MonthlyPoint {
                month,
                order_count: 0,
                revenue: Money::zero(),
            }),
        }
        month = month.next();
    }
    filled
}

/// Headline totals over a monthly series
pub fn monthly_totals(points: &[MonthlyPoint]) -> (usize, Money) {
    let orders: usize = points.iter().map(|p| p.order_count).sum();
    let revenue: Money = points.iter().map(|p| p.revenue).sum();
    (orders, revenue)
}
