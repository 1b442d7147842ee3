//! Error types for Pigment.

use thiserror::Error;

/// Main error type for Pigment core operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PigmentError {
    #[error("Transform is not invertible (determinant {determinant})")]
    NonInvertible { determinant: f32 },

    #[error("Degenerate bounding box: {width}x{height}")]
    DegenerateBounds { width: f32, height: f32 },
}

/// Result type alias for Pigment operations.
pub type Result<T> = std::result::Result<T, PigmentError>;
