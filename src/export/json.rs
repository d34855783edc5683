//! JSON export of the full dashboard
//!
//! Wraps a `Dashboard` with a schema version and metadata so a file can be
//! checked before it is read back.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{InsightsError, InsightsResult};
use crate::reports::Dashboard;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full dashboard export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub metadata: ExportMetadata,

    pub dashboard: Dashboard,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// Transactions file the dashboard was computed from
    pub source: Option<String>,

    /// Rows in the filtered set
    pub row_count: usize,

    pub customer_count: usize,
    pub seller_count: usize,
    pub product_count: usize,

    /// Money amounts are integer cents
    pub money_unit: String,
}

impl DashboardExport {
    pub fn new(dashboard: Dashboard, source: Option<String>) -> Self {
        let metadata = ExportMetadata {
            source,
            row_count: dashboard.totals.order_lines,
            customer_count: dashboard.totals.customers,
            seller_count: dashboard.sellers.ranking.len(),
            product_count: dashboard.products.len(),
            money_unit: "cents".to_string(),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            metadata,
            dashboard,
        }
    }

    /// Validate the export structure
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        if self.metadata.row_count != self.dashboard.totals.order_lines {
            return Err(format!(
                "Metadata lists {} rows but the dashboard covers {}",
                self.metadata.row_count, self.dashboard.totals.order_lines
            ));
        }

        Ok(())
    }
}

/// Export the dashboard to JSON
pub fn export_dashboard_json<W: Write>(
    export: &DashboardExport,
    writer: &mut W,
    pretty: bool,
) -> InsightsResult<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, export)
    } else {
        serde_json::to_writer(&mut *writer, export)
    }
    .map_err(|e| InsightsError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| InsightsError::Export(e.to_string()))?;
    Ok(())
}

/// Read a JSON export back and validate it
pub fn import_from_json(json_str: &str) -> InsightsResult<DashboardExport> {
    let export: DashboardExport = serde_json::from_str(json_str)?;
    export.validate().map_err(InsightsError::Validation)?;
    Ok(export)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::transaction::fixtures::row;
    use crate::models::DateRange;
    use crate::reports::SegmentationConfig;

    fn dashboard() -> Dashboard {
        let rows = vec![
            row("c1", "o1", "2018-01-05", 10_000),
            row("c2", "o2", "2018-01-20", 2_550),
        ];
        let range = DateRange::parse("2018-01-01", "2018-01-31").unwrap();
        Dashboard::generate(&rows, range, &SegmentationConfig::default())
    }

    #[test]
    fn test_export_metadata() {
        let export = DashboardExport::new(dashboard(), Some("all_data.csv".into()));

        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.metadata.row_count, 2);
        assert_eq!(export.metadata.customer_count, 2);
        assert_eq!(export.metadata.seller_count, 1);
        assert!(export.validate().is_ok());
    }

    #[test]
    fn test_json_roundtrip() {
        let export = DashboardExport::new(dashboard(), None);

        let mut out = Vec::new();
        export_dashboard_json(&export, &mut out, true).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\"revenue\": 12550"));

        let imported = import_from_json(&text).unwrap();
        assert_eq!(imported.dashboard, export.dashboard);
    }

    #[test]
    fn test_import_rejects_other_schema_version() {
        let mut export = DashboardExport::new(dashboard(), None);
        export.schema_version = "0.1.0".into();
        let text = serde_json::to_string(&export).unwrap();

        let err = import_from_json(&text).unwrap_err();
        assert!(err.is_validation());
    }
}
