//! Shared types for the scaled-stats workspace
//!
//! Currently this crate only hosts the unified error type. Keeping it in its
//! own crate lets every workspace member (and downstream callers) agree on a
//! single `Result` alias without depending on the histogram implementation.

pub mod error;

pub use error::{Error, Result};
