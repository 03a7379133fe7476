//! riskdash - Command Line Front End for the Fraud-Risk Dashboard
//!
//! Operational entry point for the riskdata_core data service.
//!
//! # Commands
//!
//! - `riskdash dashboard [--hospital H] [--location L] [--specialty S]` - Print the dashboard
//! - `riskdash values <field>` - List distinct values of a record field
//! - `riskdash export --format csv --output <file>` - Write the dataset
//! - `riskdash check` - Validate configuration and report the dataset shape
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate builds one
//! `RiskDataService` at startup and hands it to every command by reference.

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use riskdata_core::service::RiskDataService;
use riskdata_core::types::FilterOptions;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod error;
mod output;

pub use error::{CliError, Result};

use config::RiskDashConfig;
use output::{ExportFormat, ReportFormat};

/// Fraud-risk dashboard data CLI
#[derive(Parser)]
#[command(name = "riskdash")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "riskdash.toml")]
    config: String,

    /// Seed for the synthetic dataset (overrides configuration)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

/// Dropdown-style filter flags; "all" means no constraint
#[derive(Args, Debug, Default)]
struct FilterArgs {
    /// Hospital name
    #[arg(long, default_value = "all")]
    hospital: String,

    /// Location
    #[arg(long, default_value = "all")]
    location: String,

    /// Specialty
    #[arg(long, default_value = "all")]
    specialty: String,
}

impl FilterArgs {
    fn to_options(&self) -> FilterOptions {
        FilterOptions::from_selection(&self.hospital, &self.location, &self.specialty)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print filter choices and chart series for a selection
    Dashboard {
        #[command(flatten)]
        filters: FilterArgs,

        /// Output format (defaults to the configured format)
        #[arg(short, long, value_enum)]
        format: Option<ReportFormat>,
    },

    /// List the distinct values of a record field
    Values {
        /// Field name (hospital, location, specialty, category, date, riskScore, id)
        field: String,
    },

    /// Export records
    Export {
        #[command(flatten)]
        filters: FilterArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check configuration and dataset shape
    Check,
}

/// Load the config file, apply `lookup` overrides and `--seed`, then validate
fn prepare_config<F>(cli: &Cli, lookup: F) -> Result<RiskDashConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = RiskDashConfig::load_or_default(Path::new(&cli.config))?.with_overrides(lookup);
    if let Some(seed) = cli.seed {
        config.dataset.seed = Some(seed);
    }
    config.validate()?;
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = prepare_config(&cli, |key| std::env::var(key).ok())?;

    let level = if cli.verbose { "debug" } else { config.log_level.as_str() };
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let service = RiskDataService::from_config(config.dataset.clone())?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Dashboard { filters, format } => commands::dashboard::run(
            &service,
            &filters.to_options(),
            format.unwrap_or(config.format),
            &mut out,
        )?,
        Commands::Values { field } => commands::values::run(&service, &field, &mut out)?,
        Commands::Export {
            filters,
            format,
            output,
        } => commands::export::run(&service, &filters.to_options(), format, output.as_deref())?,
        Commands::Check => commands::check::run(&config, &service, &mut out)?,
    }

    Ok(())
}
