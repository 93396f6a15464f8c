//! Salesboard CLI
//!
//! Loads a flat sales-transaction CSV, computes one of the catalogued
//! charts, and writes a versioned JSON report.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use salesboard::charts::CHARTS;
use salesboard::commands::{execute_render, validate_args, RenderArgs};
use salesboard::output::read_report;
use salesboard::utils::config::SCHEMA_VERSION;

/// Salesboard - aggregation and chart reports for sales data
#[derive(Parser, Debug)]
#[command(name = "salesboard")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute a chart from a CSV and write a JSON report
    Render {
        /// Path to the source CSV
        #[arg(short, long, default_value = "data.csv")]
        data: PathBuf,

        /// Chart id (see `salesboard charts`)
        #[arg(short, long)]
        chart: String,

        /// Output path for the JSON report
        #[arg(short, long, default_value = "report.json")]
        output: PathBuf,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// List the chart catalogue
    Charts,

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Render {
            data,
            chart,
            output,
            summary,
        } => {
            let args = RenderArgs {
                data,
                chart,
                output,
                print_summary: summary,
            };

            validate_args(&args)?;
            execute_render(args)?;
        }

        Commands::Charts => {
            list_charts();
        }

        Commands::Validate { file } => {
            validate_report_file(file)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

/// List every chart id and title in the catalogue
fn list_charts() {
    println!("Available charts:");
    for def in CHARTS {
        println!("  {:32} {}", def.id, def.title);
    }
}

/// Validate a report JSON file
fn validate_report_file(file_path: PathBuf) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(&file_path)?;

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Chart: {}", report.chart);
    println!("  Title: {}", report.title);
    println!("  Source records: {}", report.record_count);
    println!("  Rows: {}", report.data.row_count());
    println!("  Generated: {}", report.generated_at);

    Ok(())
}

/// Display version information
fn display_version() {
    println!("Salesboard v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Aggregation engine and chart pipeline for sales-transaction data.");
}
