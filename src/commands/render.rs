//! Render command implementation.
//!
//! The render command:
//! 1. Loads and validates the source CSV
//! 2. Builds the requested chart through the registry
//! 3. Writes the JSON report
//! 4. Optionally prints a text summary

use crate::charts::schema::ChartData;
use crate::charts::{build_report, find_chart};
use crate::loader::load_transactions;
use crate::output::write_report;
use anyhow::{bail, Context, Result};
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the render command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct RenderArgs {
    /// Path to the source CSV
    pub data: PathBuf,

    /// Chart id from the registry
    pub chart: String,

    /// Output path for the JSON report
    pub output: PathBuf,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for RenderArgs {
    fn default() -> Self {
        Self {
            data: PathBuf::from("data.csv"),
            chart: String::new(),
            output: PathBuf::from("report.json"),
            print_summary: false,
        }
    }
}

/// Validate render arguments before doing any work
///
/// # Errors
/// * Unknown chart id
/// * Missing input file
pub fn validate_args(args: &RenderArgs) -> Result<()> {
    if find_chart(&args.chart).is_none() {
        bail!(
            "unknown chart '{}' (run `salesboard charts` for the catalogue)",
            args.chart
        );
    }
    if !args.data.exists() {
        bail!("input file not found: {}", args.data.display());
    }
    Ok(())
}

/// Execute the render command
///
/// # Errors
/// * CSV load/validation failures
/// * Chart computation failures
/// * File write errors
pub fn execute_render(args: RenderArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Rendering chart '{}' from {}", args.chart, args.data.display());

    info!("Step 1/3: Loading transactions...");
    let records = load_transactions(&args.data)
        .with_context(|| format!("Failed to load {}", args.data.display()))?;

    debug!("Loaded {} transactions", records.len());

    info!("Step 2/3: Building chart...");
    let report = build_report(&args.chart, &records)
        .with_context(|| format!("Failed to build chart '{}'", args.chart))?;

    info!("Step 3/3: Writing report...");
    write_report(&report, &args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    if args.print_summary {
        println!("{}", summarize(&report.title, &report.data));
    }

    info!(
        "Done in {:.2}s: {}",
        start_time.elapsed().as_secs_f64(),
        args.output.display()
    );

    Ok(())
}

/// Render a short text summary of the computed rows
///
/// At most ten leading rows are shown; the report file holds the rest.
pub fn summarize(title: &str, data: &ChartData) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", title));
    out.push_str(&format!("{} rows\n", data.row_count()));

    let lines: Vec<String> = match data {
        ChartData::ItemRevenue { rows } => rows
            .iter()
            .map(|r| format!("[{}] {} - {:.0}", r.item_code, r.item_name, r.total))
            .collect(),
        ChartData::GroupRevenue { rows } => rows
            .iter()
            .map(|r| format!("[{}] {} - {:.0}", r.group_code, r.group_name, r.total))
            .collect(),
        ChartData::TimeBuckets { rows } => rows
            .iter()
            .map(|r| format!("{} - {:.0}", r.label, r.value))
            .collect(),
        ChartData::GroupProbability { rows } => rows
            .iter()
            .map(|r| format!("[{}] {} - {:.1}%", r.group_code, r.group_name, r.probability * 100.0))
            .collect(),
        ChartData::GroupProbabilityByMonth { rows } => rows
            .iter()
            .map(|r| {
                format!(
                    "Month {:02} [{}] - {:.1}%",
                    r.month,
                    r.group_code,
                    r.probability * 100.0
                )
            })
            .collect(),
        ChartData::ItemProbability { groups } => groups
            .iter()
            .map(|g| format!("[{}] {} - {} items", g.group_code, g.group_name, g.items.len()))
            .collect(),
        ChartData::ItemProbabilityByMonth { groups } => groups
            .iter()
            .map(|g| format!("[{}] {} - {} rows", g.group_code, g.group_name, g.rows.len()))
            .collect(),
        ChartData::Histogram { bins } => bins
            .iter()
            .map(|b| format!("[{:.1}, {:.1}) - {}", b.lower, b.upper, b.count))
            .collect(),
    };

    for line in lines.iter().take(10) {
        out.push_str("  ");
        out.push_str(line);
        out.push('\n');
    }
    if lines.len() > 10 {
        out.push_str(&format!("  ... {} more\n", lines.len() - 10));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::schema::GroupRevenueRow;

    #[test]
    fn test_validate_args_unknown_chart() {
        let args = RenderArgs {
            chart: "nope".to_string(),
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_summarize_truncates() {
        let rows = (0..15)
            .map(|i| GroupRevenueRow {
                group_code: format!("G{}", i),
                group_name: format!("Group {}", i),
                total: i as f64,
            })
            .collect();
        let text = summarize("Revenue", &ChartData::GroupRevenue { rows });

        assert!(text.starts_with("Revenue\n15 rows\n"));
        assert!(text.contains("... 5 more"));
    }
}
