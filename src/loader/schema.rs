//! Canonical record shape shared by the loader, the engine, and the charts.
//!
//! One `Transaction` is one sold line-item. Several records share an
//! `order_id` (one order, many lines), and the `(item_code -> item_name)` /
//! `(group_code -> group_name)` pairs are functional dependencies of the
//! dataset: every record bearing a code is expected to carry the same name.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One sold line-item of the source dataset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    /// Identity of the parent order - NOT unique per record
    pub order_id: String,

    /// Order creation instant
    pub created_at: NaiveDateTime,

    /// Item code (1:1 with item_name within the dataset)
    pub item_code: String,

    /// Item display name
    pub item_name: String,

    /// Group code (many item codes share one group code)
    pub group_code: String,

    /// Group display name
    pub group_name: String,

    /// Customer identity, used by the per-customer histograms
    pub customer_id: String,

    /// Monetary value of this line, non-negative (validated at load)
    pub amount: f64,
}
