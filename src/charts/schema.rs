//! Output JSON schema for chart reports.
//!
//! This module defines the structure of the report files we write to
//! disk. The schema is versioned to allow future evolution; the `data`
//! payload is tagged by row kind so consumers can dispatch on it.

use serde::{Deserialize, Serialize};

/// Top-level chart report written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Chart id from the registry (e.g. "revenue-by-item")
    pub chart: String,

    /// Human-readable chart title
    pub title: String,

    /// Number of source records the chart was computed from
    pub record_count: usize,

    /// Timestamp when the report was generated (RFC 3339)
    pub generated_at: String,

    /// Computed rows, tagged by kind
    pub data: ChartData,
}

/// Typed row payload of one chart
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartData {
    ItemRevenue { rows: Vec<ItemRevenueRow> },
    GroupRevenue { rows: Vec<GroupRevenueRow> },
    TimeBuckets { rows: Vec<TimeBucketRow> },
    GroupProbability { rows: Vec<GroupProbabilityRow> },
    GroupProbabilityByMonth { rows: Vec<MonthlyGroupProbabilityRow> },
    ItemProbability { groups: Vec<GroupItemProbabilities> },
    ItemProbabilityByMonth { groups: Vec<GroupMonthlyItemProbabilities> },
    Histogram { bins: Vec<HistogramBin> },
}

impl ChartData {
    /// Total number of leaf rows, for summaries and validation output
    pub fn row_count(&self) -> usize {
        match self {
            ChartData::ItemRevenue { rows } => rows.len(),
            ChartData::GroupRevenue { rows } => rows.len(),
            ChartData::TimeBuckets { rows } => rows.len(),
            ChartData::GroupProbability { rows } => rows.len(),
            ChartData::GroupProbabilityByMonth { rows } => rows.len(),
            ChartData::ItemProbability { groups } => {
                groups.iter().map(|g| g.items.len()).sum()
            }
            ChartData::ItemProbabilityByMonth { groups } => {
                groups.iter().map(|g| g.rows.len()).sum()
            }
            ChartData::Histogram { bins } => bins.len(),
        }
    }
}

/// Revenue total for one item, with denormalized display metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemRevenueRow {
    pub item_code: String,
    pub item_name: String,
    pub group_code: String,
    pub group_name: String,
    pub total: f64,
}

/// Revenue total for one group
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GroupRevenueRow {
    pub group_code: String,
    pub group_name: String,
    pub total: f64,
}

/// One time bucket (month, day of month, weekday, or hour)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimeBucketRow {
    /// Numeric bucket key (month 1-12, day 1-31, weekday 0-6 from
    /// Monday, hour 0-23)
    pub bucket: u32,
    /// Display label ("Month 03", "Monday", "08:00-08:59", ...)
    pub label: String,
    pub value: f64,
}

/// Purchase probability of one group against the whole dataset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GroupProbabilityRow {
    pub group_code: String,
    pub group_name: String,
    pub probability: f64,
}

/// Purchase probability of one group within one month's population
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyGroupProbabilityRow {
    pub month: u32,
    pub group_code: String,
    pub group_name: String,
    pub probability: f64,
}

/// Item probabilities within one group's population
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GroupItemProbabilities {
    pub group_code: String,
    pub group_name: String,
    pub items: Vec<ItemProbabilityRow>,
}

/// Probability of one item against its enclosing population
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemProbabilityRow {
    pub item_code: String,
    pub item_name: String,
    pub probability: f64,
}

/// Per-month item probabilities within one group
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GroupMonthlyItemProbabilities {
    pub group_code: String,
    pub group_name: String,
    pub rows: Vec<MonthlyItemProbabilityRow>,
}

/// Probability of one item within one group-month population
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyItemProbabilityRow {
    pub month: u32,
    pub item_code: String,
    pub item_name: String,
    pub probability: f64,
}

/// One histogram bin, `[lower, upper)` (last bin closed)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}
