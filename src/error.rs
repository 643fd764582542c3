// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Engine error types surfaced to the embedding request layer.

/// Error type for all engine operations.
///
/// The request layer maps these onto its own wire format; the engine only
/// distinguishes caller faults (`Validation`, `NotFound`, `InvalidMetric`)
/// from collaborator failures (`StoreUnavailable`, `Persistence`).
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    Validation(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid metric: {0}")]
    InvalidMetric(String),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Whether the caller may retry the same operation unchanged.
    ///
    /// Caller faults are never retryable; collaborator failures are.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AppError::StoreUnavailable(_) | AppError::Persistence(_)
        )
    }
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, AppError>;
