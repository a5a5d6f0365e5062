//! Error types for histogram configuration and reporting
//!
//! Provides a unified error type for all scaled-stats crates.

use thiserror::Error;

/// Core error type for histogram operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// A transform pair failed its construction-time sanity checks
    #[error("Invalid transform: {0}")]
    InvalidTransform(String),

    /// IO error (for dump sinks)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a non-positive histogram capacity
    pub fn invalid_capacity(capacity: usize) -> Self {
        Self::InvalidParameter(format!("Capacity {capacity} must be positive"))
    }

    /// Create an error for a bad value domain
    pub fn invalid_domain(min: f64, max: f64) -> Self {
        Self::InvalidParameter(format!(
            "Domain [{min}, {max}] must be finite with min < max"
        ))
    }

    /// Create an error for a transform that failed a construction probe
    pub fn transform_probe(context: &str) -> Self {
        Self::InvalidTransform(format!("construction probe failed: {context}"))
    }
}
