//! Configuration module for commerce-insights
//!
//! This module provides configuration management including:
//! - Platform-aware path resolution
//! - User settings persistence (currency, ranking sizes, segmentation)

pub mod paths;
pub mod settings;

pub use paths::InsightsPaths;
pub use settings::{CurrencyFormat, Settings, TopN};
