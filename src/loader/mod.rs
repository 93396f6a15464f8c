//! Record schema and CSV ingestion.
//!
//! This module handles:
//! - The canonical `Transaction` record shape
//! - Header-indexed CSV parsing with explicit parse-and-validate

pub mod csv;
pub mod schema;

// Re-export main types
pub use csv::{load_transactions, read_transactions};
pub use schema::Transaction;
