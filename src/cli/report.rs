//! CLI commands for reports
//!
//! Each command prints one report table for the selected range, or writes it
//! as CSV with `--output`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Subcommand, ValueEnum};
use tracing::info;

use super::context::ReportContext;
use crate::display;
use crate::error::{InsightsError, InsightsResult};
use crate::export;
use crate::reports::{
    fill_month_gaps, group_by_city_customer_count, group_by_delivery_status,
    group_by_product_orders, group_by_state_customer_count, monthly_orders_revenue,
    SellerRevenueReport, SegmentedCustomer,
};

/// Grouping key for the customer distribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CustomerGrouping {
    City,
    State,
}

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Show headline totals for the selected range
    Summary,

    /// Distinct customers per city or state
    Customers {
        /// Grouping key
        #[arg(long, value_enum, default_value_t = CustomerGrouping::City)]
        by: CustomerGrouping,

        /// Show top N rows only
        #[arg(long)]
        top: Option<usize>,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Distinct orders per delivery status
    Delivery {
        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Best and worst sellers by revenue
    Sellers {
        /// Show top N sellers in each view
        #[arg(long)]
        top: Option<usize>,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Most ordered products
    Products {
        /// Show top N products only
        #[arg(long)]
        top: Option<usize>,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Orders and revenue per calendar month
    Monthly {
        /// Include months without orders as zero rows
        #[arg(long)]
        fill_gaps: bool,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Recency, frequency and monetary value per customer
    Rfm {
        /// Number of customers to print
        #[arg(short, long, default_value = "20")]
        limit: usize,

        /// Export every customer to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Customer counts per named segment
    Segments {
        /// Also list the customers in each segment
        #[arg(long)]
        details: bool,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle report commands
pub fn handle_report_command(ctx: &ReportContext<'_>, cmd: ReportCommands) -> InsightsResult<()> {
    match cmd {
        ReportCommands::Summary => {
            println!(
                "{}",
                display::format_summary(&ctx.dashboard(), &ctx.settings.currency)
            );
            Ok(())
        }
        ReportCommands::Customers { by, top, output } => {
            handle_customers_report(ctx, by, top, output)
        }
        ReportCommands::Delivery { output } => handle_delivery_report(ctx, output),
        ReportCommands::Sellers { top, output } => handle_sellers_report(ctx, top, output),
        ReportCommands::Products { top, output } => handle_products_report(ctx, top, output),
        ReportCommands::Monthly { fill_gaps, output } => {
            handle_monthly_report(ctx, fill_gaps, output)
        }
        ReportCommands::Rfm { limit, output } => handle_rfm_report(ctx, limit, output),
        ReportCommands::Segments { details, output } => {
            handle_segments_report(ctx, details, output)
        }
    }
}

/// Create `path` and hand a buffered writer to `write`
fn write_csv_file<F>(path: &Path, label: &str, write: F) -> InsightsResult<()>
where
    F: FnOnce(&mut BufWriter<File>) -> InsightsResult<()>,
{
    let file = File::create(path).map_err(|e| {
        InsightsError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    let mut writer = BufWriter::new(file);
    write(&mut writer)?;
    writer.flush()?;

    info!(path = %path.display(), report = label, "exported report");
    println!("{} exported to: {}", label, path.display());
    Ok(())
}

fn handle_customers_report(
    ctx: &ReportContext<'_>,
    by: CustomerGrouping,
    top: Option<usize>,
    output: Option<PathBuf>,
) -> InsightsResult<()> {
    let rows = ctx.rows();
    let (counts, header, csv_header, default_top) = match by {
        CustomerGrouping::City => (
            group_by_city_customer_count(rows),
            "City",
            "customer_city",
            ctx.settings.top_n.cities,
        ),
        CustomerGrouping::State => (
            group_by_state_customer_count(rows),
            "State",
            "customer_state",
            ctx.settings.top_n.states,
        ),
    };

    if let Some(path) = output {
        write_csv_file(&path, "Customer report", |w| {
            export::export_customer_counts_csv(csv_header, &counts, w)
        })
    } else {
        println!(
            "{}",
            display::format_customer_counts(header, &counts, top.unwrap_or(default_top))
        );
        Ok(())
    }
}

fn handle_delivery_report(ctx: &ReportContext<'_>, output: Option<PathBuf>) -> InsightsResult<()> {
    let counts = group_by_delivery_status(ctx.rows());

    if let Some(path) = output {
        write_csv_file(&path, "Delivery report", |w| {
            export::export_delivery_csv(&counts, w)
        })
    } else {
        println!("{}", display::format_delivery(&counts));
        Ok(())
    }
}

fn handle_sellers_report(
    ctx: &ReportContext<'_>,
    top: Option<usize>,
    output: Option<PathBuf>,
) -> InsightsResult<()> {
    let report = SellerRevenueReport::generate(ctx.rows());

    if let Some(path) = output {
        write_csv_file(&path, "Seller report", |w| {
            export::export_sellers_csv(&report.ranking, w)
        })
    } else {
        let top = top.unwrap_or(ctx.settings.top_n.sellers);
        println!(
            "{}",
            display::format_sellers(&report, top, &ctx.settings.currency)
        );
        Ok(())
    }
}

fn handle_products_report(
    ctx: &ReportContext<'_>,
    top: Option<usize>,
    output: Option<PathBuf>,
) -> InsightsResult<()> {
    let products = group_by_product_orders(ctx.rows());

    if let Some(path) = output {
        write_csv_file(&path, "Product report", |w| {
            export::export_products_csv(&products, w)
        })
    } else {
        let top = top.unwrap_or(ctx.settings.top_n.products);
        println!("{}", display::format_products(&products, top));
        Ok(())
    }
}

fn handle_monthly_report(
    ctx: &ReportContext<'_>,
    fill_gaps: bool,
    output: Option<PathBuf>,
) -> InsightsResult<()> {
    let mut points = monthly_orders_revenue(ctx.rows());
    if fill_gaps {
        points = fill_month_gaps(&points);
    }

    if let Some(path) = output {
        write_csv_file(&path, "Monthly report", |w| {
            export::export_monthly_csv(&points, w)
        })
    } else {
        println!(
            "{}",
            display::format_monthly(&points, &ctx.settings.currency)
        );
        Ok(())
    }
}

fn handle_rfm_report(
    ctx: &ReportContext<'_>,
    limit: usize,
    output: Option<PathBuf>,
) -> InsightsResult<()> {
    let customers = ctx.dashboard().customers;

    if let Some(path) = output {
        write_csv_file(&path, "RFM report", |w| export::export_rfm_csv(&customers, w))
    } else {
        println!(
            "{}",
            display::format_rfm(&customers, limit, &ctx.settings.currency)
        );
        if customers.len() > limit {
            println!("Showing {} of {} customers", limit, customers.len());
        }
        Ok(())
    }
}

fn handle_segments_report(
    ctx: &ReportContext<'_>,
    details: bool,
    output: Option<PathBuf>,
) -> InsightsResult<()> {
    let dashboard = ctx.dashboard();
    let members: Vec<SegmentedCustomer> = dashboard
        .customers
        .iter()
        .filter(|c| c.segment.is_some())
        .cloned()
        .collect();

    if let Some(path) = output {
        return if details {
            write_csv_file(&path, "Segment members", |w| {
                export::export_rfm_csv(&members, w)
            })
        } else {
            write_csv_file(&path, "Segment report", |w| {
                export::export_segments_csv(&dashboard.segments, w)
            })
        };
    }

    println!("{}", display::format_segments(&dashboard.segments));
    if details && !members.is_empty() {
        println!();
        println!(
            "{}",
            display::format_rfm(&members, members.len(), &ctx.settings.currency)
        );
    }
    Ok(())
}
