//! Fixed-width histogram anchored on integer bounds.

use tracing::warn;

/// Upper bound on the number of bins. A wider span yields an empty histogram.
pub const MAX_HIST_BINS: usize = 10_000;

/// Bin centers and counts, same length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Histogram {
    pub centers: Vec<f64>,
    pub counts: Vec<u64>,
}

/// Bucket `values` into bins of `bin_width` spanning `[floor(min), ceil(max)]`.
///
/// There is always at least one bin when any value is finite; values on the
/// upper edge fall into the last bin. Non-finite values are not counted, and
/// input without finite values produces an empty histogram. So does a span
/// needing more than `MAX_HIST_BINS` bins.
pub fn histogram(values: &[f64], bin_width: f64) -> Histogram {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() || !(bin_width.is_finite() && bin_width > 0.0) {
        return Histogram::default();
    }

    let lo = finite.iter().copied().fold(f64::INFINITY, f64::min).floor();
    let hi = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max).ceil();
    let span = ((hi - lo) / bin_width).round();
    if !span.is_finite() || span > MAX_HIST_BINS as f64 {
        warn!(lo, hi, max_bins = MAX_HIST_BINS, "histogram span too wide; skipping");
        return Histogram::default();
    }
    let bins = (span as usize).max(1);

    let mut counts = vec![0u64; bins];
    let last = (bins - 1) as f64;
    for v in &finite {
        let idx = ((v - lo) / bin_width).floor().clamp(0.0, last) as usize;
        counts[idx] += 1;
    }

    let centers = (0..bins)
        .map(|i| lo + bin_width * i as f64 + bin_width / 2.0)
        .collect();

    Histogram { centers, counts }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_bins_cover_range() {
        let h = histogram(&[4.2, 5.0, 5.9, 7.0], 1.0);
        // floor(min)=4, ceil(max)=7 -> 3 bins: [4,5) [5,6) [6,7]
        assert_eq!(h.centers, vec![4.5, 5.5, 6.5]);
        assert_eq!(h.counts, vec![1, 2, 1]);
    }

    #[test]
    fn single_value_gets_one_bin() {
        let h = histogram(&[3.0, 3.0], 1.0);
        assert_eq!(h.centers, vec![3.5]);
        assert_eq!(h.counts, vec![2]);
    }

    #[test]
    fn negative_values() {
        let h = histogram(&[-0.69, 2.06], 1.0);
        assert_eq!(h.centers.first(), Some(&-0.5));
        assert_eq!(h.counts.iter().sum::<u64>(), 2);
    }

    #[test]
    fn empty_and_nan_only() {
        assert_eq!(histogram(&[], 1.0), Histogram::default());
        assert_eq!(histogram(&[f64::NAN], 1.0), Histogram::default());
    }

    #[test]
    fn huge_span_is_empty_instead_of_allocating() {
        assert_eq!(histogram(&[0.0, 1e20], 1.0), Histogram::default());
        assert_eq!(histogram(&[-f64::MAX, f64::MAX], 1.0), Histogram::default());

        let edge = histogram(&[0.0, MAX_HIST_BINS as f64], 1.0);
        assert_eq!(edge.counts.len(), MAX_HIST_BINS);
        assert_eq!(edge.counts.iter().sum::<u64>(), 2);
    }

    #[test]
    fn nan_entries_are_skipped() {
        let h = histogram(&[1.5, f64::NAN, 2.5], 1.0);
        assert_eq!(h.counts.iter().sum::<u64>(), 2);
    }
}
