//! Ordering of aggregate rows and display-name denormalization.
//!
//! Sorting is stable everywhere, so ties keep the first-occurrence order
//! the grouping engine produced. The `NameIndex` resolves display names
//! from codes with a first-occurrence-wins policy: if the dataset ever
//! maps one code to two names, the name of the earliest record is kept.

use crate::engine::grouping::AggregateRow;
use crate::engine::probability::ProbabilityRow;
use crate::loader::schema::Transaction;
use std::collections::HashMap;

/// A row that can be ordered by its key or its numeric value
pub trait SortableRow {
    type Key;

    fn sort_key(&self) -> &Self::Key;
    fn sort_value(&self) -> f64;
}

impl<K> SortableRow for AggregateRow<K> {
    type Key = K;

    fn sort_key(&self) -> &K {
        &self.key
    }

    fn sort_value(&self) -> f64 {
        self.value
    }
}

impl<K> SortableRow for ProbabilityRow<K> {
    type Key = K;

    fn sort_key(&self) -> &K {
        &self.key
    }

    fn sort_value(&self) -> f64 {
        self.probability
    }
}

/// How to order a sequence of aggregate rows
#[derive(Debug, Clone)]
pub enum SortPolicy<K> {
    /// Largest value first; ties keep first-occurrence order
    ValueDescending,
    /// Smallest key first (chronological for month/day/hour keys)
    KeyAscending,
    /// Keys in the given list sort by list position; keys absent from
    /// the list follow, keeping their first-occurrence order
    Priority(Vec<K>),
}

/// Order rows in place according to a policy
pub fn sort_rows<R>(rows: &mut [R], policy: &SortPolicy<R::Key>)
where
    R: SortableRow,
    R::Key: Ord,
{
    match policy {
        SortPolicy::ValueDescending => {
            rows.sort_by(|a, b| b.sort_value().total_cmp(&a.sort_value()));
        }
        SortPolicy::KeyAscending => {
            rows.sort_by(|a, b| a.sort_key().cmp(b.sort_key()));
        }
        SortPolicy::Priority(order) => {
            rows.sort_by_key(|row| {
                order
                    .iter()
                    .position(|k| k == row.sort_key())
                    .unwrap_or(usize::MAX)
            });
        }
    }
}

/// Code -> display-name lookup built once from the source records.
///
/// First occurrence wins: later records that disagree on a name are
/// ignored. The index is a read-only denormalization aid with no side
/// effects on the records.
#[derive(Debug, Default)]
pub struct NameIndex {
    item_names: HashMap<String, String>,
    group_names: HashMap<String, String>,
    item_groups: HashMap<String, String>,
}

impl NameIndex {
    /// Build the index with a single forward pass over the records
    pub fn build(records: &[Transaction]) -> Self {
        let mut index = Self::default();
        for t in records {
            index
                .item_names
                .entry(t.item_code.clone())
                .or_insert_with(|| t.item_name.clone());
            index
                .group_names
                .entry(t.group_code.clone())
                .or_insert_with(|| t.group_name.clone());
            index
                .item_groups
                .entry(t.item_code.clone())
                .or_insert_with(|| t.group_code.clone());
        }
        index
    }

    /// Display name of an item code
    pub fn item_name(&self, code: &str) -> &str {
        self.item_names.get(code).map(String::as_str).unwrap_or("")
    }

    /// Display name of a group code
    pub fn group_name(&self, code: &str) -> &str {
        self.group_names.get(code).map(String::as_str).unwrap_or("")
    }

    /// Group code an item code belongs to
    pub fn group_of_item(&self, item_code: &str) -> &str {
        self.item_groups
            .get(item_code)
            .map(String::as_str)
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn row(key: &str, value: f64) -> AggregateRow<String> {
        AggregateRow {
            key: key.to_string(),
            value,
        }
    }

    #[test]
    fn test_value_descending_with_stable_ties() {
        let mut rows = vec![row("a", 10.0), row("b", 30.0), row("c", 10.0)];
        sort_rows(&mut rows, &SortPolicy::ValueDescending);

        let keys: Vec<&str> = rows.iter().map(|r| r.key.as_str()).collect();
        // a and c tie at 10; a was seen first and stays first
        assert_eq!(keys, ["b", "a", "c"]);
    }

    #[test]
    fn test_key_ascending() {
        let mut rows = vec![
            AggregateRow { key: 12u32, value: 1.0 },
            AggregateRow { key: 3u32, value: 2.0 },
            AggregateRow { key: 7u32, value: 3.0 },
        ];
        sort_rows(&mut rows, &SortPolicy::KeyAscending);
        let keys: Vec<u32> = rows.iter().map(|r| r.key).collect();
        assert_eq!(keys, [3, 7, 12]);
    }

    #[test]
    fn test_priority_list_with_unlisted_trailing() {
        let mut rows = vec![row("A", 1.0), row("B", 2.0), row("C", 3.0)];
        let policy = SortPolicy::Priority(vec!["B".to_string(), "A".to_string()]);
        sort_rows(&mut rows, &policy);

        let keys: Vec<&str> = rows.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, ["B", "A", "C"]);
    }

    #[test]
    fn test_priority_unlisted_keep_insertion_order() {
        let mut rows = vec![row("x", 1.0), row("y", 2.0), row("B", 3.0), row("z", 4.0)];
        let policy = SortPolicy::Priority(vec!["B".to_string()]);
        sort_rows(&mut rows, &policy);

        let keys: Vec<&str> = rows.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, ["B", "x", "y", "z"]);
    }

    #[test]
    fn test_name_index_first_occurrence_wins() {
        let mk = |item_name: &str| Transaction {
            order_id: "O1".to_string(),
            created_at: NaiveDateTime::parse_from_str(
                "2024-01-05 08:00:00",
                "%Y-%m-%d %H:%M:%S",
            )
            .unwrap(),
            item_code: "I1".to_string(),
            item_name: item_name.to_string(),
            group_code: "G1".to_string(),
            group_name: "Teas".to_string(),
            customer_id: "C1".to_string(),
            amount: 1.0,
        };
        let records = vec![mk("Green tea"), mk("GREEN TEA (renamed)")];
        let index = NameIndex::build(&records);

        assert_eq!(index.item_name("I1"), "Green tea");
        assert_eq!(index.group_name("G1"), "Teas");
        assert_eq!(index.group_of_item("I1"), "G1");
        assert_eq!(index.item_name("missing"), "");
    }
}
