//! Configuration and constants for the CLI.

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Timestamp format of the `created_at` column
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// Canonical column names of the source CSV. Columns are resolved by
// name from the header row, so on-disk order is free.
pub const COL_ORDER_ID: &str = "order_id";
pub const COL_CREATED_AT: &str = "created_at";
pub const COL_ITEM_CODE: &str = "item_code";
pub const COL_ITEM_NAME: &str = "item_name";
pub const COL_GROUP_CODE: &str = "group_code";
pub const COL_GROUP_NAME: &str = "group_name";
pub const COL_CUSTOMER_ID: &str = "customer_id";
pub const COL_AMOUNT: &str = "amount";

/// All required columns, used for header validation
pub const REQUIRED_COLUMNS: &[&str] = &[
    COL_ORDER_ID,
    COL_CREATED_AT,
    COL_ITEM_CODE,
    COL_ITEM_NAME,
    COL_GROUP_CODE,
    COL_GROUP_NAME,
    COL_CUSTOMER_ID,
    COL_AMOUNT,
];

/// Display order for the weekday chart (business week first, dataset
/// convention inherited from the dashboard this replaces)
pub const WEEKDAY_ORDER: &[&str] = &[
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Default bin width for the customer-spend histogram (currency units)
pub const DEFAULT_SPEND_BIN_WIDTH: f64 = 50_000.0;
