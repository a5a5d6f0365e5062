//! Convenience constructors for the common histogram shapes

use crate::transform::{IDENTITY, LOG};
use crate::types::Histogram;
use scaled_core::Result;

/// Logarithmically spaced histogram over `[min, max)`.
///
/// Narrow bins near `min`, wide bins near `max`: the usual choice for
/// latency- or size-style metrics whose interesting detail sits at the
/// low end.
pub fn log_histogram(capacity: usize, min: f64, max: f64) -> Result<Histogram> {
    Histogram::new(capacity, &LOG, min, max)
}

/// Linear histogram sized for an enumeration with variants `0..=last_enum`.
///
/// The domain is widened to `[-1, last_enum + 2]` with `last_enum + 3` bins,
/// so out-of-range values below 0 collapse into the first bin and values
/// above `last_enum` into the last, and both stay distinguishable from the
/// real variants.
pub fn enum_histogram(last_enum: usize) -> Result<Histogram> {
    Histogram::new(last_enum + 3, &IDENTITY, -1.0, (last_enum + 2) as f64)
}

/// Plain integer-bucket histogram over `[0, n)`: one unit-wide bin per
/// integer.
pub fn int_histogram(n: usize) -> Result<Histogram> {
    Histogram::new(n, &IDENTITY, 0.0, n as f64)
}
