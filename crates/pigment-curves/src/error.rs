//! Curve adjustment errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    #[error("curve needs at least 2 points, got {0}")]
    TooFewPoints(usize),
    #[error("control point ({x}, {y}) is outside the unit square")]
    OutOfRange { x: f64, y: f64 },
    #[error("control points share x = {0}")]
    DuplicateX(f64),
    #[error("channel count mismatch: expected {expected}, got {got}")]
    ChannelMismatch { expected: usize, got: usize },
    #[error("buffer of {len} values is not a whole number of {channels}-channel pixels")]
    Misaligned { len: usize, channels: usize },
    #[error("no curve for channel {0}")]
    NoSuchChannel(usize),
    #[error("parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, CurveError>;
