//! Dashboard snapshot
//!
//! Runs every aggregation once over a filtered set and bundles the tables
//! with the headline totals. The TUI redraws from it and the JSON/YAML
//! exports serialize it as-is.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::customers::{group_by_city_customer_count, group_by_state_customer_count, CustomerCount};
use super::delivery::{group_by_delivery_status, DeliveryStatusCount};
use super::monthly::{monthly_orders_revenue, monthly_totals, MonthlyPoint};
use super::products::{group_by_product_orders, ProductOrders};
use super::rfm::compute_rfm;
use super::segmentation::{
    count_segments, segment_customers, SegmentCount, SegmentationConfig, SegmentedCustomer,
};
use super::sellers::SellerRevenueReport;
use crate::models::{DateRange, Money, TransactionRow};

/// Headline numbers shown as summary cards
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardTotals {
    /// Sum of the monthly distinct-order counts
    pub orders: usize,
    pub revenue: Money,
    /// Distinct customers in the filtered set
    pub customers: usize,
    /// Transaction rows in the filtered set
    pub order_lines: usize,
}

/// Every report table for one filtered set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub range: DateRange,
    pub totals: DashboardTotals,
    pub customers_by_city: Vec<CustomerCount>,
    pub customers_by_state: Vec<CustomerCount>,
    pub delivery: Vec<DeliveryStatusCount>,
    pub sellers: SellerRevenueReport,
    pub products: Vec<ProductOrders>,
    pub monthly: Vec<MonthlyPoint>,
    pub customers: Vec<SegmentedCustomer>,
    pub segments: Vec<SegmentCount>,
}

impl Dashboard {
    /// Generate every table for `rows`, the rows selected by `range`
    pub fn generate(
        rows: &[TransactionRow],
        range: DateRange,
        segmentation: &SegmentationConfig,
    ) -> Self {
        let monthly = monthly_orders_revenue(rows);
        let (orders, revenue) = monthly_totals(&monthly);
        let customers: HashSet<_> = rows.iter().map(|r| &r.customer_id).collect();

        let segmented = segment_customers(&compute_rfm(rows), segmentation);
        let segments = count_segments(&segmented);

        let dashboard = Self {
            range,
            totals: DashboardTotals {
                orders,
                revenue,
                customers: customers.len(),
                order_lines: rows.len(),
            },
            customers_by_city: group_by_city_customer_count(rows),
            customers_by_state: group_by_state_customer_count(rows),
            delivery: group_by_delivery_status(rows),
            sellers: SellerRevenueReport::generate(rows),
            products: group_by_product_orders(rows),
            monthly,
            customers: segmented,
            segments,
        };

        debug!(
            range = %range,
            rows = rows.len(),
            cities = dashboard.customers_by_city.len(),
            sellers = dashboard.sellers.ranking.len(),
            products = dashboard.products.len(),
            months = dashboard.monthly.len(),
            customers = dashboard.customers.len(),
            "generated dashboard"
        );
        dashboard
    }

    /// True when the filtered set had no rows
    pub fn is_empty(&self) -> bool {
        self.totals.order_lines == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use crate::models::transaction::fixtures::row;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dataset() -> Dataset {
        Dataset::from_rows(vec![
            row("c1", "o1", "2018-01-05", 10_000),
            row("c1", "o1", "2018-01-05", 5_000),
            row("c2", "o2", "2018-02-10", 2_500),
            row("c3", "o3", "2018-03-15", 700),
        ])
    }

    #[test]
    fn test_totals_over_filtered_set() {
        let data = dataset();
        let range = DateRange::new(date(2018, 1, 1), date(2018, 2, 28)).unwrap();
        let dashboard = Dashboard::generate(data.filter(&range), range, &SegmentationConfig::default());

        assert_eq!(dashboard.totals.orders, 2);
        assert_eq!(dashboard.totals.revenue, Money::from_cents(17_500));
        assert_eq!(dashboard.totals.customers, 2);
        assert_eq!(dashboard.totals.order_lines, 3);
        assert_eq!(dashboard.monthly.len(), 2);
        assert_eq!(dashboard.customers.len(), 2);
    }

    #[test]
    fn test_empty_range_yields_empty_tables() {
        let data = dataset();
        let range = DateRange::new(date(2019, 1, 1), date(2019, 1, 31)).unwrap();
        let dashboard = Dashboard::generate(data.filter(&range), range, &SegmentationConfig::default());

        assert!(dashboard.is_empty());
        assert_eq!(dashboard.totals, DashboardTotals::default());
        assert!(dashboard.customers_by_city.is_empty());
        assert!(dashboard.customers_by_state.is_empty());
        assert!(dashboard.delivery.is_empty());
        assert!(dashboard.sellers.is_empty());
        assert!(dashboard.products.is_empty());
        assert!(dashboard.monthly.is_empty());
        assert!(dashboard.customers.is_empty());
        assert!(dashboard.segments.is_empty());
    }

    #[test]
    fn test_serializes_to_json() {
        let data = dataset();
        let range = data.bounds().unwrap();
        let dashboard = Dashboard::generate(data.rows(), range, &SegmentationConfig::default());

        let json = serde_json::to_value(&dashboard).unwrap();
        assert_eq!(json["totals"]["orders"], 3);
        assert_eq!(json["monthly"][0]["month"], "2018-01");
        assert_eq!(json["customers"][0]["customer_id"], "c1");
    }
}
