//! Error types for the frame-nms library.

use thiserror::Error;

/// Result type for frame-nms operations.
pub type Result<T> = std::result::Result<T, SuppressionError>;

/// Error types that can occur while loading or suppressing detections.
#[derive(Error, Debug)]
pub enum SuppressionError {
    /// Error during JSON parsing or serialization.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Error during I/O operations.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Parallel input sequences (boxes, class ids, scores) disagree in length.
    #[error("Length mismatch: {0}")]
    LengthMismatch(String),
}
