//! Reducers: collapse one group's member slice to a single scalar.
//!
//! Three kinds cover every chart: arithmetic sum of a numeric field,
//! distinct-count of an identity field, and sum divided by the number
//! of distinct calendar dates (guarded against empty groups).

use crate::loader::schema::Transaction;
use std::collections::HashSet;
use std::hash::Hash;

/// Sum a numeric field across all members
pub fn sum_by<T, F>(members: &[&T], field: F) -> f64
where
    F: Fn(&T) -> f64,
{
    members.iter().map(|m| field(m)).sum()
}

/// Count distinct values of an identity field across all members
///
/// Typically used with the order id to count unique orders rather
/// than line-items.
pub fn distinct_count<'m, T, V, F>(members: &[&'m T], identity: F) -> usize
where
    V: Hash + Eq,
    F: Fn(&'m T) -> V,
{
    members.iter().map(|m| identity(m)).collect::<HashSet<V>>().len()
}

/// Sum of line amounts for a group of transactions
pub fn sum_amount(members: &[&Transaction]) -> f64 {
    sum_by(members, |t| t.amount)
}

/// Distinct order count for a group of transactions
pub fn distinct_orders(members: &[&Transaction]) -> usize {
    distinct_count(members, |t| t.order_id.as_str())
}

/// Average revenue per distinct calendar date:
/// `sum(amount) / distinct-count(date-of(created_at))`
///
/// A group spanning zero distinct days (empty group) yields 0, not an
/// error or NaN.
pub fn average_per_distinct_day(members: &[&Transaction]) -> f64 {
    let days = distinct_count(members, |t| t.created_at.date());
    if days == 0 {
        return 0.0;
    }
    sum_amount(members) / days as f64
}
