//! Salesboard
//!
//! Aggregation engine and chart pipeline for flat sales-transaction
//! data.
//!
//! This crate replaces a dashboard of twelve copy-pasted chart scripts
//! with one parametrized engine: stable grouping by derived keys,
//! pluggable reducers (sum, distinct-count, average per distinct day),
//! histogram binning, purchase-probability ratios, and result shaping.
//! The chart catalogue composes these pieces into the twelve analytical
//! views; the CLI loads a CSV and writes versioned JSON reports.
//!
//! ## Getting Started
//!
//! Most users should install and use the CLI:
//!
//! ```bash
//! cargo install salesboard
//! salesboard --help
//! ```

pub mod charts;
pub mod commands;
pub mod engine;
pub mod loader;
pub mod output;
pub mod utils;
