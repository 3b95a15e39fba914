// src/simulation/error.rs

use thiserror::Error;

/// Everything that can stop a simulation run from producing a result table.
#[derive(Error, Debug)]
pub enum SimulationError {
    /// A parameter violated its invariant (positivity, non-negativity, minimum length).
    #[error("invalid parameter `{field}`: {reason}")]
    InvalidParameters { field: &'static str, reason: String },

    /// The ordering policy selector did not name a known policy.
    #[error("unknown ordering policy `{0}` (expected `simple` or `lead-time-aware`)")]
    InvalidPolicy(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SimulationError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameters {
            field,
            reason: reason.into(),
        }
    }
}
