//! Snapshot comparison: percentiles of the bin-wise difference mass
//!
//! Given two same-shaped histograms sampled at two points in time, the delta
//! distribution `D[i] = later.bins[i] - earlier.bins[i]` describes only the
//! observations that arrived between the snapshots. The percentile is
//! estimated by walking cumulative delta mass and linearly interpolating a
//! bin position, then mapping that position back into the raw value domain
//! through the inverse transform.

use crate::types::Histogram;

impl Histogram {
    /// Estimate the value at percentile `pctile` of the difference
    /// distribution between `self` (the earlier snapshot) and `later`.
    ///
    /// The two histograms must have the same capacity, and `later` must
    /// dominate `self` bin-wise: every bin's count must be at least as
    /// large in `later`. That holds for cumulative counters sampled twice
    /// from the same histogram, and is a hard precondition: a negative
    /// delta means the caller's counters went backwards (e.g. a reset
    /// between snapshots) and panics rather than producing a silently
    /// wrong estimate.
    ///
    /// Returns `0.0` for degenerate inputs: an empty difference mass, or a
    /// target that lands at the very first bin or inside a single-bin mass
    /// concentration where interpolation is undefined. These are meaningful
    /// "no data" / "at the edge" outcomes, not errors.
    pub fn delta_percentile(&self, later: &Histogram, pctile: f64) -> f64 {
        assert!(
            (0.0..=1.0).contains(&pctile),
            "delta-percentile: percentile {pctile} outside [0, 1]"
        );
        assert_eq!(
            self.capacity(),
            later.capacity(),
            "delta-percentile: capacity mismatch"
        );

        let mut deltas = vec![0u64; self.capacity()];
        for (i, d) in deltas.iter_mut().enumerate() {
            let (earlier, later) = (self.bins()[i], later.bins()[i]);
            assert!(
                later >= earlier,
                "delta-percentile: bin {i} went backwards ({earlier} -> {later})"
            );
            *d = later - earlier;
        }

        let total: u64 = deltas.iter().sum();
        if total == 0 {
            // No observations between snapshots.
            return 0.0;
        }

        // Target mass, truncated.
        let target = (total as f64 * pctile) as u64;

        // Walk cumulative mass until the current bin's interval contains
        // the target: `below` is the cumulative sum through the previous
        // bin, `through` the cumulative sum through the current one.
        let mut below = 0u64;
        let mut through = 0u64;
        let mut prev = 0usize;
        let mut cur = self.capacity();
        for (i, &d) in deltas.iter().enumerate() {
            cur = i;
            through += d;
            if below <= target && target <= through {
                break;
            }
            prev = i;
            below += d;
        }

        // Target at the first bin, a zero-mass stopping interval, or a
        // single-bin concentration: no interpolation interval exists.
        if below > target || below >= through || prev >= cur {
            return 0.0;
        }

        let frac = (target - below) as f64 / (through - below) as f64;
        let pos = (frac * (cur - prev) as f64 + prev as f64).floor() as usize;

        self.value(pos)
    }

    /// Median of the difference distribution between two snapshots.
    ///
    /// Shorthand for [`delta_percentile`](Self::delta_percentile) at 0.5.
    pub fn delta_median(&self, later: &Histogram) -> f64 {
        self.delta_percentile(later, 0.5)
    }
}

#[cfg(test)]
mod tests {
    use crate::builders::int_histogram;
    use crate::transform::IDENTITY;
    use crate::types::Histogram;

    fn with_bins(capacity: usize, counts: &[u64]) -> Histogram {
        let mut h = Histogram::new(capacity, &IDENTITY, 0.0, capacity as f64).unwrap();
        for (bin, &n) in counts.iter().enumerate() {
            for _ in 0..n {
                h.count(bin as f64);
            }
        }
        assert_eq!(h.bins(), counts);
        h
    }

    #[test]
    fn identical_snapshots_return_zero() {
        let a = with_bins(10, &[1, 2, 3, 0, 0, 0, 0, 0, 0, 4]);
        let b = a.clone();
        assert_eq!(a.delta_percentile(&b, 0.5), 0.0);
        assert_eq!(a.delta_percentile(&b, 0.0), 0.0);
        assert_eq!(a.delta_percentile(&b, 1.0), 0.0);
    }

    #[test]
    fn uniform_delta_median_lands_mid_range() {
        let a = with_bins(4, &[0, 0, 0, 0]);
        let b = with_bins(4, &[2, 2, 2, 2]);
        let median = a.delta_median(&b);
        // Interpolated position must fall on bin 1 or 2.
        let lo = a.value(1);
        let hi = a.value(2);
        assert!(
            median >= lo && median <= hi,
            "median {median} outside [{lo}, {hi}]"
        );
    }

    #[test]
    fn extreme_percentiles_track_mass_ends() {
        let a = with_bins(10, &[0; 10]);
        let b = with_bins(10, &[0, 5, 5, 5, 5, 5, 5, 5, 5, 0]);
        let p0 = a.delta_percentile(&b, 0.0);
        let p1 = a.delta_percentile(&b, 1.0);
        // p=0 degenerates to the sentinel (target at the first massed bin),
        // p=1 must land at the top of the mass.
        assert_eq!(p0, 0.0);
        assert!(p1 >= a.value(8), "p1 = {p1} below value({})", 8);
    }

    #[test]
    fn skewed_mass_pulls_the_median() {
        let a = with_bins(10, &[0; 10]);
        let b = with_bins(10, &[0, 1, 1, 1, 1, 1, 1, 1, 1, 92]);
        // Nearly all mass sits in the last bin.
        let median = a.delta_median(&b);
        assert!(median >= a.value(8), "median {median} not in the top bins");
    }

    #[test]
    fn median_of_symmetric_mass_is_central() {
        let a = with_bins(9, &[0; 9]);
        let b = with_bins(9, &[1, 2, 4, 8, 10, 8, 4, 2, 1]);
        let median = a.delta_median(&b);
        assert!(
            median >= a.value(3) && median <= a.value(5),
            "median {median} not near the center"
        );
    }

    #[test]
    fn delta_median_matches_half_percentile() {
        let a = with_bins(6, &[1, 0, 0, 2, 0, 0]);
        let b = with_bins(6, &[3, 1, 4, 2, 0, 5]);
        assert_eq!(a.delta_median(&b), a.delta_percentile(&b, 0.5));
    }

    #[test]
    #[should_panic(expected = "went backwards")]
    fn negative_delta_panics() {
        let a = with_bins(4, &[0, 3, 0, 0]);
        let b = with_bins(4, &[0, 1, 0, 0]);
        a.delta_percentile(&b, 0.5);
    }

    #[test]
    #[should_panic(expected = "capacity mismatch")]
    fn capacity_mismatch_panics() {
        let a = int_histogram(4).unwrap();
        let b = int_histogram(8).unwrap();
        a.delta_percentile(&b, 0.5);
    }

    #[test]
    #[should_panic(expected = "outside [0, 1]")]
    fn percentile_out_of_range_panics() {
        let a = int_histogram(4).unwrap();
        let b = int_histogram(4).unwrap();
        a.delta_percentile(&b, 1.5);
    }

    #[test]
    fn mass_in_first_bin_returns_sentinel() {
        let a = with_bins(4, &[0; 4]);
        let b = with_bins(4, &[7, 0, 0, 0]);
        // The scan stops on the bin it started at, so there is no
        // interpolation interval.
        assert_eq!(a.delta_percentile(&b, 0.5), 0.0);
    }
}
