//! Purchase-probability charts over distinct order counts.
//!
//! The reference population differs per chart and is always stated
//! explicitly: the whole dataset for the flat group breakdown, each
//! month's population for the monthly trend, the enclosing group (or
//! group-month) for the item breakdowns.

use crate::charts::schema::{
    ChartData, GroupItemProbabilities, GroupMonthlyItemProbabilities, GroupProbabilityRow,
    ItemProbabilityRow, MonthlyGroupProbabilityRow, MonthlyItemProbabilityRow,
};
use crate::engine::{
    group_by, probability, probability_within, sort_rows, NameIndex, Reference, SortPolicy,
};
use crate::loader::schema::Transaction;
use crate::utils::error::ComputeError;
use chrono::Datelike;
use log::debug;

/// Probability that an order contains each group, against the whole
/// dataset, largest first
pub fn group_purchase_probability(records: &[Transaction]) -> Result<ChartData, ComputeError> {
    let names = NameIndex::build(records);

    let mut rows = probability(records, |t| t.group_code.clone());
    sort_rows(&mut rows, &SortPolicy::ValueDescending);

    let rows = rows
        .into_iter()
        .map(|row| GroupProbabilityRow {
            group_name: names.group_name(&row.key).to_string(),
            group_code: row.key,
            probability: row.probability,
        })
        .collect();

    Ok(ChartData::GroupProbability { rows })
}

/// Group probability per month, each month's own population as reference
pub fn group_probability_by_month(records: &[Transaction]) -> Result<ChartData, ComputeError> {
    let names = NameIndex::build(records);

    let mut partitions = probability_within(
        records,
        |t| t.created_at.month(),
        |t| t.group_code.clone(),
        Reference::Enclosing,
    );
    partitions.sort_by_key(|(month, _)| *month);

    let rows = partitions
        .into_iter()
        .flat_map(|(month, rows)| {
            rows.into_iter()
                .map(move |row| (month, row))
        })
        .map(|(month, row)| MonthlyGroupProbabilityRow {
            month,
            group_name: names.group_name(&row.key).to_string(),
            group_code: row.key,
            probability: row.probability,
        })
        .collect();

    Ok(ChartData::GroupProbabilityByMonth { rows })
}

/// Item probabilities within each group, the group's own distinct-order
/// count as reference, items largest first
pub fn item_probability_within_group(records: &[Transaction]) -> Result<ChartData, ComputeError> {
    let names = NameIndex::build(records);

    let groups = probability_within(
        records,
        |t| t.group_code.clone(),
        |t| t.item_code.clone(),
        Reference::Enclosing,
    )
    .into_iter()
    .map(|(group_code, mut items)| {
        sort_rows(&mut items, &SortPolicy::ValueDescending);
        GroupItemProbabilities {
            group_name: names.group_name(&group_code).to_string(),
            group_code,
            items: items
                .into_iter()
                .map(|row| ItemProbabilityRow {
                    item_name: names.item_name(&row.key).to_string(),
                    item_code: row.key,
                    probability: row.probability,
                })
                .collect(),
        }
    })
    .collect();

    Ok(ChartData::ItemProbability { groups })
}

/// Item probabilities per month within each group, each group-month
/// population as reference
pub fn item_probability_by_group_month(
    records: &[Transaction],
) -> Result<ChartData, ComputeError> {
    let names = NameIndex::build(records);

    let groups = group_by(records, |t| t.group_code.clone())
        .into_iter()
        .map(|(group_code, members)| {
            let mut monthly = probability_within(
                members.iter().copied(),
                |t| t.created_at.month(),
                |t| t.item_code.clone(),
                Reference::Enclosing,
            );
            monthly.sort_by_key(|(month, _)| *month);

            debug!(
                "Group {}: item probabilities over {} months",
                group_code,
                monthly.len()
            );

            let rows = monthly
                .into_iter()
                .flat_map(|(month, rows)| rows.into_iter().map(move |row| (month, row)))
                .map(|(month, row)| MonthlyItemProbabilityRow {
                    month,
                    item_name: names.item_name(&row.key).to_string(),
                    item_code: row.key,
                    probability: row.probability,
                })
                .collect();

            GroupMonthlyItemProbabilities {
                group_name: names.group_name(&group_code).to_string(),
                group_code,
                rows,
            }
        })
        .collect();

    Ok(ChartData::ItemProbabilityByMonth { groups })
}
