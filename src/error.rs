//! Error types for risk tier resolution, input validation, and I/O

use thiserror::Error;

/// Errors raised at the edges of a projection (key lookup, validation, loading, writing).
///
/// The projection math itself never fails.
#[derive(Debug, Error)]
pub enum ProjectionError {
    #[error("unknown risk level `{0}` (expected one of: low, moderate, high, aggressive)")]
    UnknownRiskLevel(String),

    #[error("{field} must not be negative, got {value}")]
    NegativeAmount { field: &'static str, value: f64 },

    #[error("{field} must be a finite number")]
    NonFiniteAmount { field: &'static str },

    #[error("investment period must not be negative, got {0}")]
    NegativePeriod(i32),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON request: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
