//! Fixed-capacity scaled histograms with snapshot delta statistics
//!
//! This is the umbrella crate for the `scaled-stats` workspace. It re-exports
//! the member crates so applications can depend on a single package:
//!
//! - [`scaled_core`]: shared error type and `Result` alias
//! - [`scaled_histogram`]: the histogram itself, covering counting, bin
//!   lookup, copy/safe-copy, delta-percentile comparison, and bin dumping
//!
//! # Example
//!
//! ```rust
//! use scaled_stats::histogram::{int_histogram, GenericDumper};
//!
//! let mut hist = int_histogram(10).unwrap();
//! for v in [0.0, 0.0, 1.0, 5.0, 9.0, 9.0, 9.0] {
//!     hist.count(v);
//! }
//!
//! let mut out = GenericDumper::new(Vec::new());
//! hist.dump(&mut out).unwrap();
//! ```

pub use scaled_core as core;
pub use scaled_histogram as histogram;

pub use scaled_core::{Error, Result};
pub use scaled_histogram::{Histogram, Transform, IDENTITY, LOG};
