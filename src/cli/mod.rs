//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the report layer.

pub mod context;
pub mod export;
pub mod report;

pub use context::{resolve_data_file, resolve_range, ReportContext};
pub use export::{handle_export_command, ExportFormat};
pub use report::{handle_report_command, CustomerGrouping, ReportCommands};
