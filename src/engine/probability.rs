//! Purchase-probability ratios over distinct order counts.
//!
//! A member's probability is `distinct orders containing it / distinct
//! orders of the reference population`. The reference is an explicit
//! caller choice, never inferred. Ratios within a partition are NOT
//! normalized: one order can contain items from several members at once,
//! and each member counts that order independently. That is a property
//! of the domain, not a defect.

use crate::engine::grouping::group_by;
use crate::engine::reducers::distinct_orders;
use crate::loader::schema::Transaction;
use std::hash::Hash;

/// One `{key, probability}` output row, probability in [0, 1]
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityRow<K> {
    pub key: K,
    pub probability: f64,
}

/// Denominator population for a two-level probability computation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reference {
    /// Distinct orders across the whole input
    Global,
    /// Distinct orders of the enclosing partition
    Enclosing,
}

/// Probability of each subset against the whole input population
///
/// The denominator is the distinct-order count of `records`; passing an
/// enclosing group's members makes that group the reference population.
/// A zero denominator yields probability 0 for every row.
pub fn probability<'a, K, F>(
    records: impl IntoIterator<Item = &'a Transaction>,
    subset_key: F,
) -> Vec<ProbabilityRow<K>>
where
    K: Hash + Eq,
    F: Fn(&Transaction) -> K,
{
    let population: Vec<&Transaction> = records.into_iter().collect();
    let reference_orders = distinct_orders(&population);

    rows_against(&population, subset_key, reference_orders)
}

/// Probabilities per subset inside each partition of the input
///
/// Partitions appear in first-occurrence order of `parent_key`; rows
/// inside a partition in first-occurrence order of `subset_key`. The
/// `reference` parameter selects the denominator: the whole input
/// (`Global`) or each enclosing partition (`Enclosing`).
pub fn probability_within<'a, P, K, FP, FK>(
    records: impl IntoIterator<Item = &'a Transaction>,
    parent_key: FP,
    subset_key: FK,
    reference: Reference,
) -> Vec<(P, Vec<ProbabilityRow<K>>)>
where
    P: Hash + Eq,
    K: Hash + Eq,
    FP: Fn(&Transaction) -> P,
    FK: Fn(&Transaction) -> K,
{
    let population: Vec<&Transaction> = records.into_iter().collect();
    let global_orders = distinct_orders(&population);

    group_by(population.iter().copied(), parent_key)
        .into_iter()
        .map(|(parent, members)| {
            let reference_orders = match reference {
                Reference::Global => global_orders,
                Reference::Enclosing => distinct_orders(&members),
            };
            let rows = rows_against(&members, &subset_key, reference_orders);
            (parent, rows)
        })
        .collect()
}

fn rows_against<K, F>(
    population: &[&Transaction],
    subset_key: F,
    reference_orders: usize,
) -> Vec<ProbabilityRow<K>>
where
    K: Hash + Eq,
    F: Fn(&Transaction) -> K,
{
    group_by(population.iter().copied(), subset_key)
        .into_iter()
        .map(|(key, members)| {
            let probability = if reference_orders == 0 {
                0.0
            } else {
                distinct_orders(&members) as f64 / reference_orders as f64
            };
            ProbabilityRow { key, probability }
        })
        .collect()
}
