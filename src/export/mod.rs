//! Export module for commerce-insights
//!
//! - CSV: one report table per file (spreadsheet-compatible)
//! - JSON: the whole dashboard, machine-readable
//! - YAML: the whole dashboard, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::{
    export_customer_counts_csv, export_delivery_csv, export_monthly_csv, export_products_csv,
    export_rfm_csv, export_segments_csv, export_sellers_csv,
};
pub use json::{export_dashboard_json, import_from_json, DashboardExport, EXPORT_SCHEMA_VERSION};
pub use yaml::{export_dashboard_yaml, import_from_yaml};
