//! Reports module for commerce-insights
//!
//! The aggregation engine: every function takes the filtered transaction
//! rows and returns a fresh table. The functions are independent of one
//! another; `Dashboard` runs them all for one filtered set.

pub mod customers;
pub mod dashboard;
pub mod delivery;
pub mod monthly;
pub mod products;
mod ranking;
pub mod rfm;
pub mod segmentation;
pub mod sellers;

pub use customers::{group_by_city_customer_count, group_by_state_customer_count, CustomerCount};
pub use dashboard::{Dashboard, DashboardTotals};
pub use delivery::{group_by_delivery_status, status_shares, DeliveryStatusCount};
pub use monthly::{fill_month_gaps, monthly_orders_revenue, monthly_totals, MonthlyPoint};
pub use products::{group_by_product_orders, ProductOrders};
pub use rfm::{compute_rfm, RfmRecord};
pub use segmentation::{
    count_segments, segment_customers, BinScheme, CustomerSegment, SegmentCount, SegmentRule,
    SegmentationConfig, SegmentedCustomer,
};
pub use sellers::{group_by_seller_revenue, SellerRevenue, SellerRevenueReport};
