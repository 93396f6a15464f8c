//! Average daily revenue by weekday, day of month, and hour of day.
//!
//! Each bucket's value is `sum(amount) / distinct calendar dates` within
//! the bucket, so a weekday that occurred on eight distinct dates is
//! averaged over eight, not over its line-item count.

use crate::charts::schema::{ChartData, TimeBucketRow};
use crate::engine::{aggregate, average_per_distinct_day, sort_rows, SortPolicy};
use crate::loader::schema::Transaction;
use crate::utils::config::WEEKDAY_ORDER;
use crate::utils::error::ComputeError;
use chrono::{Datelike, Timelike};

/// Average daily revenue per weekday, business week first
pub fn avg_revenue_by_weekday(records: &[Transaction]) -> Result<ChartData, ComputeError> {
    let mut rows = aggregate(
        records,
        |t| weekday_label(t.created_at.weekday().num_days_from_monday()),
        average_per_distinct_day,
    );

    let order: Vec<String> = WEEKDAY_ORDER.iter().map(|d| d.to_string()).collect();
    sort_rows(&mut rows, &SortPolicy::Priority(order));

    let rows = rows
        .into_iter()
        .map(|row| TimeBucketRow {
            bucket: WEEKDAY_ORDER
                .iter()
                .position(|d| *d == row.key)
                .unwrap_or(0) as u32,
            label: row.key,
            value: row.value,
        })
        .collect();

    Ok(ChartData::TimeBuckets { rows })
}

/// Average daily revenue per day of month (1-31), ascending
pub fn avg_revenue_by_day_of_month(records: &[Transaction]) -> Result<ChartData, ComputeError> {
    let mut rows = aggregate(records, |t| t.created_at.day(), average_per_distinct_day);
    sort_rows(&mut rows, &SortPolicy::KeyAscending);

    let rows = rows
        .into_iter()
        .map(|row| TimeBucketRow {
            bucket: row.key,
            label: format!("Day {:02}", row.key),
            value: row.value,
        })
        .collect();

    Ok(ChartData::TimeBuckets { rows })
}

/// Average daily revenue per hour of day (0-23), ascending
pub fn avg_revenue_by_hour(records: &[Transaction]) -> Result<ChartData, ComputeError> {
    let mut rows = aggregate(records, |t| t.created_at.hour(), average_per_distinct_day);
    sort_rows(&mut rows, &SortPolicy::KeyAscending);

    let rows = rows
        .into_iter()
        .map(|row| TimeBucketRow {
            bucket: row.key,
            label: format!("{:02}:00-{:02}:59", row.key, row.key),
            value: row.value,
        })
        .collect();

    Ok(ChartData::TimeBuckets { rows })
}

fn weekday_label(days_from_monday: u32) -> String {
    WEEKDAY_ORDER[days_from_monday as usize].to_string()
}
