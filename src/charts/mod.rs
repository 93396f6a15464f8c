//! The chart catalogue and its dispatch table.
//!
//! Every chart is a thin composition over the engine: group, reduce,
//! optionally bin or compute probabilities, sort, attach names. The
//! registry maps stable chart ids to builder functions so callers select
//! charts by capability, not by importing chart-specific code.

pub mod basket;
pub mod customers;
pub mod revenue;
pub mod schema;
pub mod tempo;

use crate::loader::schema::Transaction;
use crate::utils::config::SCHEMA_VERSION;
use crate::utils::error::{ChartError, ComputeError};
use log::info;

pub use schema::{ChartData, ChartReport};

/// Builder signature shared by every chart
pub type ChartBuilder = fn(&[Transaction]) -> Result<ChartData, ComputeError>;

/// One registry entry
pub struct ChartDef {
    /// Stable id used on the CLI and in reports
    pub id: &'static str,
    /// Human-readable title
    pub title: &'static str,
    pub build: ChartBuilder,
}

/// The full chart catalogue, in dashboard order
pub const CHARTS: &[ChartDef] = &[
    ChartDef {
        id: "revenue-by-item",
        title: "Revenue by item",
        build: revenue::revenue_by_item,
    },
    ChartDef {
        id: "revenue-by-group",
        title: "Revenue by product group",
        build: revenue::revenue_by_group,
    },
    ChartDef {
        id: "revenue-by-month",
        title: "Revenue by month",
        build: revenue::revenue_by_month,
    },
    ChartDef {
        id: "avg-revenue-by-weekday",
        title: "Average daily revenue by weekday",
        build: tempo::avg_revenue_by_weekday,
    },
    ChartDef {
        id: "avg-revenue-by-day-of-month",
        title: "Average daily revenue by day of month",
        build: tempo::avg_revenue_by_day_of_month,
    },
    ChartDef {
        id: "avg-revenue-by-hour",
        title: "Average daily revenue by hour",
        build: tempo::avg_revenue_by_hour,
    },
    ChartDef {
        id: "group-purchase-probability",
        title: "Purchase probability by product group",
        build: basket::group_purchase_probability,
    },
    ChartDef {
        id: "group-probability-by-month",
        title: "Monthly purchase probability by product group",
        build: basket::group_probability_by_month,
    },
    ChartDef {
        id: "item-probability-within-group",
        title: "Item purchase probability within its group",
        build: basket::item_probability_within_group,
    },
    ChartDef {
        id: "item-probability-by-group-month",
        title: "Monthly item purchase probability within its group",
        build: basket::item_probability_by_group_month,
    },
    ChartDef {
        id: "purchase-frequency",
        title: "Customer purchase frequency",
        build: customers::purchase_frequency,
    },
    ChartDef {
        id: "customer-spend",
        title: "Customer spend distribution",
        build: customers::customer_spend,
    },
];

/// Look up a chart definition by id
pub fn find_chart(id: &str) -> Option<&'static ChartDef> {
    CHARTS.iter().find(|def| def.id == id)
}

/// Build a complete, versioned report for one chart
///
/// # Errors
/// * `ChartError::UnknownChart` - id not present in the registry
/// * `ChartError::Compute` - the chart's aggregation failed
pub fn build_report(id: &str, records: &[Transaction]) -> Result<ChartReport, ChartError> {
    let def = find_chart(id).ok_or_else(|| ChartError::UnknownChart(id.to_string()))?;

    info!("Building chart '{}' from {} records", def.id, records.len());
    let data = (def.build)(records)?;

    Ok(ChartReport {
        version: SCHEMA_VERSION.to_string(),
        chart: def.id.to_string(),
        title: def.title.to_string(),
        record_count: records.len(),
        generated_at: chrono::Utc::now().to_rfc3339(),
        data,
    })
}
