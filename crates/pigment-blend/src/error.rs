//! Blend subsystem errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlendError {
    #[error("unknown blend mode: {0}")]
    UnknownMode(String),
    #[error("unknown hsx model: {0}")]
    UnknownModel(String),
    #[error("buffer length mismatch: expected {expected}, got {got}")]
    LengthMismatch { expected: usize, got: usize },
    #[error("buffer of {len} channels is not interleaved rgb")]
    NotRgb { len: usize },
    #[error("row width {width} does not divide buffer of {len} pixels")]
    RowMismatch { width: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, BlendError>;
