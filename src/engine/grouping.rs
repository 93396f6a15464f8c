//! Stable grouping of records by derived keys.
//!
//! Partitions preserve first-occurrence order of each key, so a stable
//! sort applied later keeps a deterministic base order for ties. Derived
//! keys are computed exactly once per record. Two-level grouping is just
//! grouping a group's members again.

use crate::utils::error::ComputeError;
use indexmap::IndexMap;
use std::hash::Hash;

/// A partition of borrowed records, keyed by a derived value.
/// Iteration order is first-occurrence order of each key.
pub type Groups<'a, K, T> = IndexMap<K, Vec<&'a T>>;

/// Partition records by a key-extraction closure
///
/// An empty input yields an empty mapping.
///
/// # Example
/// ```ignore
/// let by_group = group_by(&records, |t| t.group_code.clone());
/// ```
pub fn group_by<'a, T, K, F>(records: impl IntoIterator<Item = &'a T>, key: F) -> Groups<'a, K, T>
where
    K: Hash + Eq,
    F: Fn(&T) -> K,
{
    let mut groups: Groups<'a, K, T> = IndexMap::new();
    for record in records {
        groups.entry(key(record)).or_default().push(record);
    }
    groups
}

/// Partition records by a fallible key-extraction closure
///
/// The first failing record aborts the whole call; no partial mapping
/// is returned.
pub fn try_group_by<'a, T, K, F>(
    records: impl IntoIterator<Item = &'a T>,
    key: F,
) -> Result<Groups<'a, K, T>, ComputeError>
where
    K: Hash + Eq,
    F: Fn(&T) -> Result<K, ComputeError>,
{
    let mut groups: Groups<'a, K, T> = IndexMap::new();
    for record in records {
        groups.entry(key(record)?).or_default().push(record);
    }
    Ok(groups)
}

/// One `{key, value}` output row of an aggregation
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateRow<K> {
    pub key: K,
    pub value: f64,
}

/// Group records and reduce each group to one scalar
///
/// Output rows appear in first-occurrence order of their keys.
///
/// # Arguments
/// * `records` - input sequence (never mutated)
/// * `key` - derived-key extraction, computed once per record
/// * `reduce` - reducer applied to each group's member slice
pub fn aggregate<'a, T, K, F, R>(
    records: impl IntoIterator<Item = &'a T>,
    key: F,
    reduce: R,
) -> Vec<AggregateRow<K>>
where
    T: 'a,
    K: Hash + Eq,
    F: Fn(&T) -> K,
    R: Fn(&[&'a T]) -> f64,
{
    group_by(records, key)
        .into_iter()
        .map(|(key, members)| AggregateRow {
            key,
            value: reduce(&members),
        })
        .collect()
}

/// Group records and reduce each group with a fallible reducer
///
/// The first failing group aborts the whole call.
pub fn try_aggregate<'a, T, K, F, R>(
    records: impl IntoIterator<Item = &'a T>,
    key: F,
    reduce: R,
) -> Result<Vec<AggregateRow<K>>, ComputeError>
where
    T: 'a,
    K: Hash + Eq,
    F: Fn(&T) -> K,
    R: Fn(&[&'a T]) -> Result<f64, ComputeError>,
{
    group_by(records, key)
        .into_iter()
        .map(|(key, members)| {
            Ok(AggregateRow {
                key,
                value: reduce(&members)?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_by_first_occurrence_order() {
        let data = vec!["b", "a", "b", "c", "a"];
        let groups = group_by(&data, |s| s.to_string());

        let keys: Vec<&String> = groups.keys().collect();
        assert_eq!(keys, ["b", "a", "c"]);
        assert_eq!(groups["b"].len(), 2);
        assert_eq!(groups["c"].len(), 1);
    }

    #[test]
    fn test_group_by_empty_input() {
        let data: Vec<i32> = vec![];
        let groups = group_by(&data, |n| *n);
        assert!(groups.is_empty());
    }

    #[test]
    fn test_nested_grouping() {
        let data = vec![(1, "x"), (1, "y"), (2, "x"), (1, "x")];
        let outer = group_by(&data, |t| t.0);

        let inner = group_by(outer[&1].iter().copied(), |t| t.1);
        assert_eq!(inner.len(), 2);
        assert_eq!(inner["x"].len(), 2);
        assert_eq!(inner["y"].len(), 1);
    }

    #[test]
    fn test_try_group_by_aborts_on_bad_key() {
        let data = vec![1, 2, 3];
        let result = try_group_by(&data, |n| {
            if *n == 2 {
                Err(ComputeError::Computation("bad key".to_string()))
            } else {
                Ok(*n)
            }
        });
        assert!(matches!(result, Err(ComputeError::Computation(_))));
    }

    #[test]
    fn test_aggregate_counts() {
        let data = vec!["a", "b", "a"];
        let rows = aggregate(&data, |s| s.to_string(), |members| members.len() as f64);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].key, "a");
        assert_eq!(rows[0].value, 2.0);
        assert_eq!(rows[1].value, 1.0);
    }

    #[test]
    fn test_try_aggregate_propagates_reducer_error() {
        let data = vec![1, 1, 2];
        let result = try_aggregate(
            &data,
            |n| *n,
            |_| Err(ComputeError::Computation("reducer failed".to_string())),
        );
        assert!(result.is_err());
    }
}
