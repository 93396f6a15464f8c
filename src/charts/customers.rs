//! Per-customer histograms: purchase frequency and total spend.

use crate::charts::schema::{ChartData, HistogramBin};
use crate::engine::{
    aggregate, bin_count_based, bin_fixed_width, distinct_orders, integer_centered_domain,
    sum_amount, Bin,
};
use crate::loader::schema::Transaction;
use crate::utils::config::DEFAULT_SPEND_BIN_WIDTH;
use crate::utils::error::ComputeError;
use log::debug;

/// Distribution of how many distinct orders each customer placed.
///
/// Frequencies are small integers, so the domain is widened by half a
/// unit on both sides and split into one width-1 bin per frequency,
/// integer-centered.
pub fn purchase_frequency(records: &[Transaction]) -> Result<ChartData, ComputeError> {
    let per_customer = aggregate(
        records,
        |t| t.customer_id.clone(),
        |members| distinct_orders(members) as f64,
    );
    let frequencies: Vec<f64> = per_customer.into_iter().map(|row| row.value).collect();

    let Some(max) = frequencies.iter().cloned().reduce(f64::max) else {
        return Ok(ChartData::Histogram { bins: vec![] });
    };
    let max = max as u64;

    debug!(
        "Binning purchase frequency for {} customers, max {} orders",
        frequencies.len(),
        max
    );

    let (lo, hi) = integer_centered_domain(max);
    let bins = bin_count_based(&frequencies, lo, hi, max as usize)?;

    Ok(ChartData::Histogram {
        bins: to_schema_bins(bins),
    })
}

/// Distribution of each customer's total spend, in fixed-width bins
pub fn customer_spend(records: &[Transaction]) -> Result<ChartData, ComputeError> {
    let per_customer = aggregate(records, |t| t.customer_id.clone(), sum_amount);
    let totals: Vec<f64> = per_customer.into_iter().map(|row| row.value).collect();

    let Some(max) = totals.iter().cloned().reduce(f64::max) else {
        return Ok(ChartData::Histogram { bins: vec![] });
    };

    let bins = bin_fixed_width(&totals, max, DEFAULT_SPEND_BIN_WIDTH)?;

    Ok(ChartData::Histogram {
        bins: to_schema_bins(bins),
    })
}

fn to_schema_bins(bins: Vec<Bin>) -> Vec<HistogramBin> {
    bins.into_iter()
        .map(|bin| HistogramBin {
            lower: bin.lower,
            upper: bin.upper,
            count: bin.len(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn tx(order_id: &str, customer: &str, amount: f64) -> Transaction {
        Transaction {
            order_id: order_id.to_string(),
            created_at: NaiveDateTime::parse_from_str(
                "2024-01-05 08:00:00",
                "%Y-%m-%d %H:%M:%S",
            )
            .unwrap(),
            item_code: "I1".to_string(),
            item_name: "Item".to_string(),
            group_code: "G1".to_string(),
            group_name: "Group".to_string(),
            customer_id: customer.to_string(),
            amount,
        }
    }

    #[test]
    fn test_purchase_frequency_counts_orders_not_lines() {
        // C1: 2 orders (one with two lines), C2: 1 order
        let records = vec![
            tx("O1", "C1", 10.0),
            tx("O1", "C1", 20.0),
            tx("O2", "C1", 30.0),
            tx("O3", "C2", 40.0),
        ];
        let data = purchase_frequency(&records).unwrap();

        let ChartData::Histogram { bins } = data else {
            panic!("wrong row kind");
        };
        // Max frequency 2 -> two integer-centered bins
        assert_eq!(bins.len(), 2);
        assert_eq!(bins[0].lower, 0.5);
        assert_eq!(bins[0].count, 1); // C2 bought once
        assert_eq!(bins[1].count, 1); // C1 bought twice
    }

    #[test]
    fn test_customer_spend_bin_membership() {
        let records = vec![
            tx("O1", "C1", 30_000.0),
            tx("O2", "C2", 60_000.0),
            tx("O3", "C3", 120_000.0),
        ];
        let data = customer_spend(&records).unwrap();

        let ChartData::Histogram { bins } = data else {
            panic!("wrong row kind");
        };
        // max 120k, width 50k -> 3 bins
        assert_eq!(bins.len(), 3);
        let total: usize = bins.iter().map(|b| b.count).sum();
        assert_eq!(total, 3);
        // C3's total sits at the global max -> last bin
        assert_eq!(bins[2].count, 1);
    }

    #[test]
    fn test_empty_input_yields_no_bins() {
        let data = purchase_frequency(&[]).unwrap();
        let ChartData::Histogram { bins } = data else {
            panic!("wrong row kind");
        };
        assert!(bins.is_empty());
    }
}
