//! Error types for eigenear.

use thiserror::Error;

/// Eigenear error types.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EigenearError {
    /// Rejected configuration at construction time
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Frame shorter than one unit's input window
    #[error("frame too short: got {got} samples, need at least {required}")]
    InvalidFrameLength { got: usize, required: usize },
}

/// Result type alias for eigenear operations.
pub type Result<T> = std::result::Result<T, EigenearError>;
