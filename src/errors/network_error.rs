//! Network-related error types.

use thiserror::Error;

/// Errors that can occur while building, training or restoring a network.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("Size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("Unknown activation function `{name}`")]
    UnknownActivation { name: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
