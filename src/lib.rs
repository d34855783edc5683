//! commerce-insights - sales and RFM segmentation reports for e-commerce data
//!
//! This library loads a flattened e-commerce transactions table, filters it
//! by purchase date and computes the tables behind the `insights` CLI and
//! terminal dashboard.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: Tracing subscriber setup
//! - `models`: Transaction rows, identifiers, money and date ranges
//! - `dataset`: CSV loading, validation and date filtering
//! - `reports`: Aggregations and rule-based RFM segmentation
//! - `display`: Terminal tables
//! - `export`: CSV, JSON and YAML output
//! - `cli`: Command handlers
//! - `tui`: Interactive dashboard
//!
//! # Example
//!
//! ```rust,ignore
//! use commerce_insights::dataset::Dataset;
//! use commerce_insights::models::DateRange;
//! use commerce_insights::reports::{Dashboard, SegmentationConfig};
//!
//! let dataset = Dataset::load("all_data.csv".as_ref())?;
//! let range = DateRange::parse("2018-01-01", "2018-06-30")?;
//! let dashboard = Dashboard::generate(dataset.filter(&range), range, &SegmentationConfig::default());
//! ```

pub mod cli;
pub mod config;
pub mod dataset;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod tui;

pub use error::{InsightsError, InsightsResult};
