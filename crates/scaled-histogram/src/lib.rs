//! Fixed-capacity histograms with pluggable scaling transforms
//!
//! This crate provides a bounded counting histogram: a fixed number of bins
//! spread across a value domain by an invertible transform pair. Linear
//! spacing suits enumerations and small integer buckets; logarithmic spacing
//! suits latencies and sizes where low-end resolution matters most.
//!
//! # Key Features
//!
//! - **Fixed shape**: capacity, domain and transform are set once at
//!   construction and validated by probing both domain ends
//! - **Total counting**: every finite observation lands in a bin; values
//!   outside the domain clamp into the first or last one
//! - **Snapshot comparison**: percentiles of the bin-wise difference between
//!   two snapshots of the same cumulative histogram
//! - **Sparse dumping**: pluggable per-bin sinks with three stock text
//!   record shapes that skip empty bins
//!
//! # Examples
//!
//! ## Counting and dumping
//!
//! ```rust
//! use scaled_histogram::{int_histogram, GenericDumper};
//!
//! let mut hist = int_histogram(10).unwrap();
//! for v in [0.0, 0.0, 1.0, 5.0, 9.0, 9.0, 9.0] {
//!     hist.count(v);
//! }
//! assert_eq!(hist.bins(), &[2, 1, 0, 0, 0, 1, 0, 0, 0, 3]);
//!
//! let mut dumper = GenericDumper::new(Vec::new());
//! hist.dump(&mut dumper).unwrap();
//! let text = String::from_utf8(dumper.into_inner()).unwrap();
//! assert_eq!(text.lines().count(), 4); // empty bins are skipped
//! ```
//!
//! ## Median of the change between two snapshots
//!
//! ```rust
//! use scaled_histogram::log_histogram;
//!
//! let earlier = log_histogram(50, 0.0, 10_000.0).unwrap();
//! let mut later = earlier.clone();
//! for v in [3.0, 40.0, 500.0] {
//!     later.count(v);
//! }
//!
//! let median = earlier.delta_median(&later);
//! assert!(median > 0.0);
//! ```
//!
//! ## Custom transforms
//!
//! A transform pair must be non-decreasing on `[0, ∞)` with
//! `forward(0) == 0` and `inverse(forward(x)) == x`; see [`Transform`] for
//! the full contract. Construction refuses pairs that fail their probes.

pub mod builders;
pub mod dump;
pub mod ops;
pub mod transform;
pub mod types;

// Re-export main types and traits
pub use builders::{enum_histogram, int_histogram, log_histogram};
pub use dump::{BinSink, EnumDumper, GenericDumper, IntDumper};
pub use transform::{Identity, Logarithmic, Transform, IDENTITY, LOG};
pub use types::{Histogram, SCALE_TOLERANCE};

pub use scaled_core::{Error, Result};
