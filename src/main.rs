use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing::info;

use commerce_insights::cli::{
    handle_export_command, handle_report_command, resolve_data_file, resolve_range, ExportFormat,
    ReportCommands, ReportContext,
};
use commerce_insights::config::{InsightsPaths, Settings};
use commerce_insights::dataset::Dataset;
use commerce_insights::logging::{init_tracing, LogTarget};

#[derive(Parser)]
#[command(
    name = "insights",
    version,
    about = "Sales, customer and RFM segmentation reports from an e-commerce transactions CSV",
    long_about = "commerce-insights loads a flattened e-commerce transactions table, \
                  filters it by purchase date and reports customer distribution, \
                  delivery performance, seller and product rankings, monthly trends \
                  and rule-based RFM customer segments, in the terminal or as an \
                  interactive dashboard."
)]
struct Cli {
    /// Transactions CSV file
    #[arg(long, global = true, env = "INSIGHTS_DATA_FILE")]
    data: Option<PathBuf>,

    /// First purchase date to include (YYYY-MM-DD)
    #[arg(long, global = true)]
    start: Option<String>,

    /// Last purchase date to include (YYYY-MM-DD)
    #[arg(long, global = true)]
    end: Option<String>,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Report(ReportCommands),

    /// Export every report for the range as JSON or YAML
    Export {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Single-line JSON
        #[arg(long)]
        compact: bool,
    },

    /// Launch the interactive dashboard
    #[command(alias = "ui")]
    Dashboard,

    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = InsightsPaths::new()?;

    // The dashboard owns the terminal, so its logs go to a file
    if matches!(cli.command, Some(Commands::Dashboard)) {
        paths.ensure_directories()?;
        init_tracing(cli.verbose, LogTarget::File(&paths.log_file()))?;
    } else {
        init_tracing(cli.verbose, LogTarget::Stderr)?;
    }

    let settings = Settings::load_or_create(&paths)?;

    let command = match cli.command {
        Some(Commands::Init) => {
            if paths.is_initialized() {
                println!(
                    "Settings already exist at: {}",
                    paths.settings_file().display()
                );
            } else {
                settings.save(&paths)?;
                println!("Settings written to: {}", paths.settings_file().display());
                println!();
                println!("Set \"data_file\" there, or pass --data, to choose the transactions CSV.");
            }
            return Ok(());
        }
        Some(Commands::Config) => {
            println!("Commerce Insights Configuration");
            println!("===============================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Dashboard log:    {}", paths.log_file().display());
            println!();
            println!("Effective settings:");
            println!("{}", serde_json::to_string_pretty(&settings)?);
            return Ok(());
        }
        None => {
            println!("Commerce Insights - sales and RFM segmentation reports");
            println!();
            println!("Run 'insights --help' for usage information.");
            println!("Run 'insights dashboard --data FILE' to launch the interactive dashboard.");
            return Ok(());
        }
        Some(command) => command,
    };

    let data_file = resolve_data_file(cli.data, &settings)?;
    let dataset = Dataset::load(&data_file)?;
    let range = resolve_range(&dataset, cli.start.as_deref(), cli.end.as_deref())?;
    info!(range = %range, "selected range");

    match command {
        Commands::Report(cmd) => {
            let ctx = ReportContext::new(&dataset, &settings, range);
            handle_report_command(&ctx, cmd)?;
        }
        Commands::Export {
            format,
            output,
            compact,
        } => {
            let ctx = ReportContext::new(&dataset, &settings, range);
            handle_export_command(&ctx, format, output, compact)?;
        }
        Commands::Dashboard => {
            commerce_insights::tui::run_tui(&dataset, &settings, range)?;
        }
        Commands::Init | Commands::Config => {}
    }

    Ok(())
}
