//! CLI command for the full dashboard export

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::ValueEnum;
use tracing::info;

use super::context::ReportContext;
use crate::error::{InsightsError, InsightsResult};
use crate::export::{export_dashboard_json, export_dashboard_yaml, DashboardExport};

/// Serialization format of the full export
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Yaml,
}

/// Handle `insights export`
pub fn handle_export_command(
    ctx: &ReportContext<'_>,
    format: ExportFormat,
    output: Option<PathBuf>,
    compact: bool,
) -> InsightsResult<()> {
    let export = DashboardExport::new(ctx.dashboard(), ctx.source_name());

    match output {
        Some(path) => {
            let file = File::create(&path).map_err(|e| {
                InsightsError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_export(&export, format, compact, &mut writer)?;
            writer.flush()?;

            info!(path = %path.display(), format = ?format, "exported dashboard");
            println!("Dashboard exported to: {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_export(&export, format, compact, &mut writer)?;
            writer.flush()?;
        }
    }

    Ok(())
}

fn write_export<W: Write>(
    export: &DashboardExport,
    format: ExportFormat,
    compact: bool,
    writer: &mut W,
) -> InsightsResult<()> {
    match format {
        ExportFormat::Json => export_dashboard_json(export, writer, !compact),
        ExportFormat::Yaml => export_dashboard_yaml(export, writer),
    }
}
