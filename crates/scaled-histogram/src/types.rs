//! The fixed-capacity histogram type
//!
//! A [`Histogram`] owns a zero-initialized bin array whose shape (capacity,
//! value domain, transform pair) is fixed at construction. Observations are
//! folded in one at a time with [`Histogram::count`]; values at or below the
//! domain floor collapse into the first bin and values at or above the
//! ceiling into the last, so counting is total over all finite inputs.

use crate::transform::Transform;
use scaled_core::{Error, Result};
use tracing::debug;

/// Scales must agree to within this absolute tolerance for two histograms
/// to be considered shape-compatible.
pub const SCALE_TOLERANCE: f64 = 1e-7;

/// A fixed-capacity histogram over a transformed value domain.
///
/// Bin spacing is controlled by the transform pair: raw values are offset by
/// the domain minimum, pushed through `forward`, and scaled into bin units.
/// The derived `scale` constant is computed once at construction and never
/// changes.
#[derive(Debug, Clone)]
pub struct Histogram {
    capacity: usize,
    bins: Vec<u64>,
    min: f64,
    max: f64,
    scale: f64,
    transform: &'static dyn Transform,
}

impl Histogram {
    /// Construct a histogram with `capacity` zero-initialized bins spanning
    /// `[min, max]` under the given transform pair.
    ///
    /// Fails if the capacity is zero, the domain is not a finite interval
    /// with `min < max`, or the transform pair does not satisfy its
    /// contract on this domain. The transform is probed at both domain
    /// ends: `min` must map to bin 0, `max` to the last bin, and the
    /// inverse must recover a value within one unit of `min` for bin 0.
    /// A pair that fails any probe would corrupt every future lookup, so
    /// construction refuses rather than producing a usable value.
    pub fn new(
        capacity: usize,
        transform: &'static dyn Transform,
        min: f64,
        max: f64,
    ) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::invalid_capacity(capacity));
        }
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(Error::invalid_domain(min, max));
        }
        // Check before we divide to get scale.
        let span = transform.forward(max - min);
        if span <= 0.0 {
            return Err(Error::InvalidTransform(format!(
                "forward({}) = {span} is not positive",
                max - min
            )));
        }

        let hist = Self {
            capacity,
            bins: vec![0; capacity],
            min,
            max,
            scale: capacity as f64 / span,
            transform,
        };

        // A min value must go into bin 0.
        if hist.bin_index(min) != 0 {
            return Err(Error::transform_probe("min value did not map to bin 0"));
        }
        // A max value must go into the last bin.
        if hist.bin_index(max) != capacity - 1 {
            return Err(Error::transform_probe("max value did not map to the last bin"));
        }
        // The inverse is hard to test; here is a crude round-trip check.
        if (0.99 + hist.value(0) - min).floor() as i64 != 0 {
            return Err(Error::transform_probe(
                "inverse did not recover the domain minimum at bin 0",
            ));
        }

        debug!(
            capacity,
            min,
            max,
            scale = hist.scale,
            transform = transform.name(),
            "constructed histogram"
        );
        Ok(hist)
    }

    /// Map a raw value to its bin index. Pure: no side effects.
    ///
    /// Values at or below `min` return 0; values at or above `max` return
    /// `capacity - 1`. Interior values round half-up (`floor(x + 0.5)`),
    /// and that tie-break is kept stable so dumps stay bit-for-bit
    /// comparable across versions.
    pub fn bin_index(&self, v: f64) -> usize {
        let v = v - self.min; // offset

        if v <= 0.0 {
            // too small
            return 0;
        }

        let bin = (self.scale * self.transform.forward(v) + 0.5).floor();

        if bin < 0.0 {
            // should not happen with a conforming transform
            0
        } else if bin >= self.capacity as f64 {
            // too big
            self.capacity - 1
        } else {
            bin as usize
        }
    }

    /// Fold one observation into the histogram.
    pub fn count(&mut self, v: f64) {
        let bin = self.bin_index(v);
        self.bins[bin] += 1;
    }

    /// Raw-value representative of a bin boundary.
    ///
    /// `bin == capacity` is legal and yields the upper edge of the last bin.
    pub fn value(&self, bin: usize) -> f64 {
        self.transform.inverse(bin as f64 / self.scale) + self.min
    }

    /// Replace this histogram's bin contents with `src`'s.
    ///
    /// This is a "refresh an existing compatible histogram" operation, not a
    /// conversion: the two histograms must agree on capacity, domain bounds,
    /// scale (within [`SCALE_TOLERANCE`]) and transform pair. Any mismatch
    /// is a caller bug and panics.
    pub fn copy_from(&mut self, src: &Histogram) {
        debug!(
            dest_capacity = self.capacity,
            src_capacity = src.capacity,
            "copying histogram bins"
        );
        // Better be safe than sorry.
        assert_eq!(self.capacity, src.capacity, "histogram copy: capacity mismatch");
        assert_eq!(self.min, src.min, "histogram copy: domain minimum mismatch");
        assert_eq!(self.max, src.max, "histogram copy: domain maximum mismatch");
        assert!(
            (self.scale - src.scale).abs() < SCALE_TOLERANCE,
            "histogram copy: scale mismatch ({} vs {})",
            self.scale,
            src.scale
        );
        assert_eq!(
            self.transform.name(),
            src.transform.name(),
            "histogram copy: transform pair mismatch"
        );
        self.bins.copy_from_slice(&src.bins);
    }

    /// Like [`copy_from`](Self::copy_from), but a no-op when capacities
    /// differ.
    ///
    /// Capacity drift legitimately happens when the number of tracked
    /// categories changes across a reconfiguration, so it is tolerated
    /// rather than treated as an error. Once capacities do match, the
    /// remaining shape checks still apply and still panic on mismatch.
    pub fn safe_copy_from(&mut self, src: &Histogram) {
        if self.capacity != src.capacity {
            debug!(
                dest_capacity = self.capacity,
                src_capacity = src.capacity,
                "safe copy skipped: capacity mismatch"
            );
            return;
        }
        self.copy_from(src);
    }

    /// Whether `other` has the same shape: capacity, bounds, scale (within
    /// tolerance) and transform pair.
    pub fn is_compatible(&self, other: &Histogram) -> bool {
        self.capacity == other.capacity
            && self.min == other.min
            && self.max == other.max
            && (self.scale - other.scale).abs() < SCALE_TOLERANCE
            && self.transform.name() == other.transform.name()
    }

    /// Number of bins.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Domain floor.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Domain ceiling.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Derived bin-units-per-transformed-unit constant.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// The configured transform pair.
    pub fn transform(&self) -> &'static dyn Transform {
        self.transform
    }

    /// Bin counts, in bin-index order.
    pub fn bins(&self) -> &[u64] {
        &self.bins
    }

    /// Total number of observations counted so far.
    pub fn total_count(&self) -> u64 {
        self.bins.iter().sum()
    }
}
