//! YAML export of the full dashboard
//!
//! Same structure as the JSON export, with a comment header for people
//! reading the file.

use std::io::Write;

use crate::error::{InsightsError, InsightsResult};
use crate::export::json::DashboardExport;

/// Export the dashboard to YAML
pub fn export_dashboard_yaml<W: Write>(export: &DashboardExport, writer: &mut W) -> InsightsResult<()> {
    let header = format!(
        "# Commerce Insights Dashboard Export\n\
         # Generated: {}\n\
         # App Version: {}\n\
         # Date Range: {}\n\
         #\n\
         # Money amounts are integer cents.\n\n",
        export.exported_at, export.app_version, export.dashboard.range
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| InsightsError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, export).map_err(|e| InsightsError::Export(e.to_string()))?;

    Ok(())
}

/// Read a YAML export back and validate it
pub fn import_from_yaml(yaml_str: &str) -> InsightsResult<DashboardExport> {
    let export: DashboardExport = serde_yaml::from_str(yaml_str)?;
    export.validate().map_err(InsightsError::Validation)?;
    Ok(export)
}
