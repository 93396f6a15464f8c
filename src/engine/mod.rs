//! The aggregation engine: grouping, reducers, binning, probabilities,
//! and result shaping.
//!
//! Every call is a pure, synchronous function of its input: records are
//! never mutated, output structures are freshly owned, and a call either
//! completes or fails atomically with no partial results.

pub mod binning;
pub mod grouping;
pub mod probability;
pub mod reducers;
pub mod shaping;

// Re-export main types and functions
pub use binning::{bin_count_based, bin_fixed_width, integer_centered_domain, Bin};
pub use grouping::{aggregate, group_by, try_aggregate, try_group_by, AggregateRow, Groups};
pub use probability::{probability, probability_within, ProbabilityRow, Reference};
pub use reducers::{
    average_per_distinct_day, distinct_count, distinct_orders, sum_amount, sum_by,
};
pub use shaping::{sort_rows, NameIndex, SortPolicy, SortableRow};
