//! Scaling transforms that control how raw values are spaced across bins
//!
//! A transform is a matched pair of functions: `forward` maps a raw offset
//! into transformed units (applied after offsetting by the domain minimum,
//! before scaling into bin units), and `inverse` undoes it when a bin index
//! is mapped back to a raw value.
//!
//! # Contract
//!
//! - `forward` is non-decreasing on `[0, ∞)` and `forward(0) == 0`
//! - `inverse(forward(x)) == x` wherever `forward(x)` is defined
//!
//! In practice the requirements are a little looser, but anything weaker is
//! hard to state without math notation. The contract is a documented
//! precondition, not a type-system guarantee; [`Histogram::new`] probes both
//! domain ends at construction time and refuses a pair that fails.
//!
//! [`Histogram::new`]: crate::Histogram::new

use std::fmt;

/// A matched forward/inverse function pair defining bin spacing.
///
/// Implementations must be stateless: the stock instances are shared as
/// `&'static` references across every histogram that uses them.
pub trait Transform: Send + Sync {
    /// Map a raw offset (value minus domain minimum) into transformed units.
    fn forward(&self, x: f64) -> f64;

    /// Map transformed units back to a raw offset.
    fn inverse(&self, y: f64) -> f64;

    /// Stable identifier for this pair.
    ///
    /// Two histograms are shape-compatible only if their transforms report
    /// the same name, so every distinct pair must pick a distinct one.
    fn name(&self) -> &'static str;
}

impl fmt::Debug for dyn Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Transform").field(&self.name()).finish()
    }
}

/// Linear spacing: both directions are `x ↦ x`.
///
/// Used by the enumeration and plain-integer histogram constructors.
#[derive(Debug, Clone, Copy)]
pub struct Identity;

impl Transform for Identity {
    fn forward(&self, x: f64) -> f64 {
        x
    }

    fn inverse(&self, y: f64) -> f64 {
        y
    }

    fn name(&self) -> &'static str {
        "identity"
    }
}

/// Logarithmic spacing: forward `x ↦ ln(x + 1)`, inverse `y ↦ eʸ - 1`.
///
/// The `+ 1` shift keeps `forward(0) == 0` so the contract holds at the
/// domain floor. Panics if called with `x + 1 < 0`, which is outside the
/// valid domain.
#[derive(Debug, Clone, Copy)]
pub struct Logarithmic;

impl Transform for Logarithmic {
    fn forward(&self, x: f64) -> f64 {
        assert!(x + 1.0 >= 0.0, "log transform domain requires x + 1 >= 0, got x = {x}");
        (x + 1.0).ln()
    }

    fn inverse(&self, y: f64) -> f64 {
        y.exp() - 1.0
    }

    fn name(&self) -> &'static str {
        "log"
    }
}

/// Shared identity transform instance.
pub static IDENTITY: Identity = Identity;

/// Shared logarithmic transform instance.
pub static LOG: Logarithmic = Logarithmic;
