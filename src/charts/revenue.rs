//! Revenue totals: by item, by group, and by month.

use crate::charts::schema::{ChartData, GroupRevenueRow, ItemRevenueRow, TimeBucketRow};
use crate::engine::{aggregate, sort_rows, sum_amount, NameIndex, SortPolicy};
use crate::loader::schema::Transaction;
use crate::utils::error::ComputeError;
use chrono::Datelike;
use log::debug;

/// Total revenue per item, largest first
pub fn revenue_by_item(records: &[Transaction]) -> Result<ChartData, ComputeError> {
    let names = NameIndex::build(records);

    let mut rows = aggregate(records, |t| t.item_code.clone(), sum_amount);
    sort_rows(&mut rows, &SortPolicy::ValueDescending);

    debug!("Computed revenue for {} items", rows.len());

    let rows = rows
        .into_iter()
        .map(|row| {
            let group_code = names.group_of_item(&row.key).to_string();
            ItemRevenueRow {
                item_name: names.item_name(&row.key).to_string(),
                group_name: names.group_name(&group_code).to_string(),
                group_code,
                item_code: row.key,
                total: row.value,
            }
        })
        .collect();

    Ok(ChartData::ItemRevenue { rows })
}

/// Total revenue per group, largest first
pub fn revenue_by_group(records: &[Transaction]) -> Result<ChartData, ComputeError> {
    let names = NameIndex::build(records);

    let mut rows = aggregate(records, |t| t.group_code.clone(), sum_amount);
    sort_rows(&mut rows, &SortPolicy::ValueDescending);

    let rows = rows
        .into_iter()
        .map(|row| GroupRevenueRow {
            group_name: names.group_name(&row.key).to_string(),
            group_code: row.key,
            total: row.value,
        })
        .collect();

    Ok(ChartData::GroupRevenue { rows })
}

/// Total revenue per calendar month (1-12), chronological
pub fn revenue_by_month(records: &[Transaction]) -> Result<ChartData, ComputeError> {
    let mut rows = aggregate(records, |t| t.created_at.month(), sum_amount);
    sort_rows(&mut rows, &SortPolicy::KeyAscending);

    let rows = rows
        .into_iter()
        .map(|row| TimeBucketRow {
            bucket: row.key,
            label: format!("Month {:02}", row.key),
            value: row.value,
        })
        .collect();

    Ok(ChartData::TimeBuckets { rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn tx(order_id: &str, item: &str, group: &str, ts: &str, amount: f64) -> Transaction {
        Transaction {
            order_id: order_id.to_string(),
            created_at: NaiveDateTime::parse_from_str(ts, "%Y-%m-%d %H:%M:%S").unwrap(),
            item_code: item.to_string(),
            item_name: format!("{} name", item),
            group_code: group.to_string(),
            group_name: format!("{} name", group),
            customer_id: "C1".to_string(),
            amount,
        }
    }

    #[test]
    fn test_revenue_by_item_sorted_descending() {
        let records = vec![
            tx("O1", "I1", "G1", "2024-01-05 08:00:00", 100.0),
            tx("O2", "I2", "G1", "2024-01-06 08:00:00", 500.0),
            tx("O3", "I1", "G1", "2024-02-01 08:00:00", 150.0),
        ];
        let data = revenue_by_item(&records).unwrap();

        let ChartData::ItemRevenue { rows } = data else {
            panic!("wrong row kind");
        };
        assert_eq!(rows[0].item_code, "I2");
        assert_eq!(rows[0].total, 500.0);
        assert_eq!(rows[1].item_code, "I1");
        assert_eq!(rows[1].total, 250.0);
        assert_eq!(rows[1].item_name, "I1 name");
        assert_eq!(rows[1].group_code, "G1");
    }

    #[test]
    fn test_revenue_by_month_chronological() {
        let records = vec![
            tx("O1", "I1", "G1", "2024-03-05 08:00:00", 10.0),
            tx("O2", "I1", "G1", "2024-01-06 08:00:00", 20.0),
            tx("O3", "I1", "G1", "2024-03-07 08:00:00", 30.0),
        ];
        let data = revenue_by_month(&records).unwrap();

        let ChartData::TimeBuckets { rows } = data else {
            panic!("wrong row kind");
        };
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].bucket, 1);
        assert_eq!(rows[0].value, 20.0);
        assert_eq!(rows[1].bucket, 3);
        assert_eq!(rows[1].value, 40.0);
        assert_eq!(rows[1].label, "Month 03");
    }
}
