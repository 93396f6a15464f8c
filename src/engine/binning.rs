//! Histogram binning of a numeric distribution.
//!
//! Two modes: a target bin count over an explicit domain, and fixed-width
//! bins over `[0, max]`. Bins are half-open `[lower, upper)`; the final
//! bin is closed on both ends so the global maximum is never unassigned.

use crate::utils::error::ComputeError;
use log::debug;

/// One histogram bin over `[lower, upper)` (the last bin of a binning is
/// closed on both ends)
#[derive(Debug, Clone, PartialEq)]
pub struct Bin {
    pub lower: f64,
    pub upper: f64,
    /// Input values assigned to this bin
    pub members: Vec<f64>,
}

impl Bin {
    fn new(lower: f64, upper: f64) -> Self {
        Self {
            lower,
            upper,
            members: Vec::new(),
        }
    }

    /// Count of member values
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Domain for a discrete `[1, max]` distribution, widened by half a unit
/// on both sides so integer observations sit at bin centers instead of on
/// bin boundaries. With `max` bins this gives exactly width-1 bins,
/// integer-centered.
pub fn integer_centered_domain(max: u64) -> (f64, f64) {
    (0.5, max as f64 + 0.5)
}

/// Split values into `count` equal-width bins covering `[min, max]`
///
/// Values at or below `min` land in the first bin; values at or above
/// `max` land in the last bin (closed upper bound). An empty input is
/// valid and yields bins with zero membership.
///
/// # Errors
/// * `ComputeError::InvalidDomain` - `max <= min`, a non-finite bound,
///   or `count == 0`
pub fn bin_count_based(
    values: &[f64],
    min: f64,
    max: f64,
    count: usize,
) -> Result<Vec<Bin>, ComputeError> {
    if count == 0 {
        return Err(ComputeError::InvalidDomain(
            "bin count must be at least 1".to_string(),
        ));
    }
    if !min.is_finite() || !max.is_finite() || max <= min {
        return Err(ComputeError::InvalidDomain(format!(
            "domain [{}, {}] is not a valid interval",
            min, max
        )));
    }

    let width = (max - min) / count as f64;
    let mut bins: Vec<Bin> = (0..count)
        .map(|i| {
            let lower = min + i as f64 * width;
            // Last upper bound is exactly max, avoiding float drift
            let upper = if i + 1 == count { max } else { min + (i + 1) as f64 * width };
            Bin::new(lower, upper)
        })
        .collect();

    for &value in values {
        let idx = assign(value, min, max, width, count);
        bins[idx].members.push(value);
    }

    debug!(
        "Binned {} values into {} bins over [{}, {}]",
        values.len(),
        count,
        min,
        max
    );
    Ok(bins)
}

/// Split values into fixed-width bins covering `[0, max]`
///
/// Produces `ceil(max / width)` bins (at least one); the last bin may be
/// narrower than `width`.
///
/// # Errors
/// * `ComputeError::InvalidDomain` - non-positive or non-finite `width`,
///   or negative/non-finite `max`
pub fn bin_fixed_width(values: &[f64], max: f64, width: f64) -> Result<Vec<Bin>, ComputeError> {
    if !width.is_finite() || width <= 0.0 {
        return Err(ComputeError::InvalidDomain(format!(
            "bin width must be positive, got {}",
            width
        )));
    }
    if !max.is_finite() || max < 0.0 {
        return Err(ComputeError::InvalidDomain(format!(
            "domain maximum must be non-negative, got {}",
            max
        )));
    }

    let count = ((max / width).ceil() as usize).max(1);
    let mut bins: Vec<Bin> = (0..count)
        .map(|i| {
            let lower = i as f64 * width;
            let upper = ((i + 1) as f64 * width).min(max.max(lower));
            Bin::new(lower, upper)
        })
        .collect();

    for &value in values {
        let idx = assign(value, 0.0, max, width, count);
        bins[idx].members.push(value);
    }

    Ok(bins)
}

/// Clamped bin-index arithmetic: values at or beyond the domain edges go
/// to the outermost bins, so membership totals always equal input length.
fn assign(value: f64, min: f64, max: f64, width: f64, count: usize) -> usize {
    if value <= min {
        0
    } else if value >= max {
        count - 1
    } else {
        (((value - min) / width) as usize).min(count - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total_members(bins: &[Bin]) -> usize {
        bins.iter().map(Bin::len).sum()
    }

    #[test]
    fn test_count_based_membership_conservation() {
        let values = vec![1.0, 2.0, 2.0, 3.0, 5.0, 5.0];
        let bins = bin_count_based(&values, 0.5, 5.5, 5).unwrap();
        assert_eq!(bins.len(), 5);
        assert_eq!(total_members(&bins), values.len());
    }

    #[test]
    fn test_integer_centered_bins_have_width_one() {
        let (min, max) = integer_centered_domain(4);
        let bins = bin_count_based(&[1.0, 2.0, 4.0], min, max, 4).unwrap();

        for bin in &bins {
            assert!((bin.upper - bin.lower - 1.0).abs() < 1e-9);
        }
        // Value 2 sits at the center of its bin
        assert_eq!(bins[1].lower, 1.5);
        assert_eq!(bins[1].upper, 2.5);
        assert_eq!(bins[1].len(), 1);
    }

    #[test]
    fn test_global_max_lands_in_last_bin() {
        let bins = bin_count_based(&[10.0], 0.0, 10.0, 4).unwrap();
        assert_eq!(bins[3].len(), 1);
    }

    #[test]
    fn test_empty_input_yields_empty_bins() {
        let bins = bin_count_based(&[], 0.0, 10.0, 2).unwrap();
        assert_eq!(bins.len(), 2);
        assert!(bins.iter().all(Bin::is_empty));
    }

    #[test]
    fn test_invalid_domain_rejected() {
        assert!(matches!(
            bin_count_based(&[1.0], 5.0, 5.0, 3),
            Err(ComputeError::InvalidDomain(_))
        ));
        assert!(matches!(
            bin_count_based(&[1.0], 8.0, 5.0, 3),
            Err(ComputeError::InvalidDomain(_))
        ));
        assert!(matches!(
            bin_count_based(&[1.0], 0.0, 5.0, 0),
            Err(ComputeError::InvalidDomain(_))
        ));
    }

    #[test]
    fn test_fixed_width_bin_count_and_last_bin() {
        // max = 120, width = 50 -> 3 bins, last narrower: [100, 120]
        let values = vec![10.0, 60.0, 115.0, 120.0];
        let bins = bin_fixed_width(&values, 120.0, 50.0).unwrap();

        assert_eq!(bins.len(), 3);
        assert_eq!(bins[2].lower, 100.0);
        assert_eq!(bins[2].upper, 120.0);
        assert_eq!(bins[2].len(), 2);
        assert_eq!(total_members(&bins), values.len());
    }

    #[test]
    fn test_fixed_width_exact_multiple() {
        let bins = bin_fixed_width(&[0.0, 99.9, 100.0], 100.0, 50.0).unwrap();
        assert_eq!(bins.len(), 2);
        assert_eq!(bins[1].upper, 100.0);
        // 100.0 == max goes to the last bin
        assert_eq!(bins[1].len(), 2);
    }

    #[test]
    fn test_fixed_width_all_zero_values() {
        let bins = bin_fixed_width(&[0.0, 0.0], 0.0, 50.0).unwrap();
        assert_eq!(bins.len(), 1);
        assert_eq!(bins[0].len(), 2);
    }

    #[test]
    fn test_fixed_width_negative_width_rejected() {
        assert!(matches!(
            bin_fixed_width(&[1.0], 100.0, -50.0),
            Err(ComputeError::InvalidDomain(_))
        ));
    }
}
