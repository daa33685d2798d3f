//! Error types for Compass operations.
//!
//! Scoring itself is total and never fails. Errors only arise when a
//! [`SimilarityEngine`](crate::SimilarityEngine) is created from an invalid
//! [`CompassConfig`](crate::config::CompassConfig).

use thiserror::Error;

/// The main error type for Compass operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompassError {
    #[error("weight `{field}` must be a finite value in [0, 1], got {value}")]
    InvalidWeight { field: &'static str, value: f64 },

    #[error("threshold `{field}` must be a finite value in [0, 1], got {value}")]
    InvalidThreshold { field: &'static str, value: f64 },
}
