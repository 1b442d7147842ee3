//! Pigment Curves — per-channel tone curves applied through transfer tables.

pub mod curve;
pub mod error;
pub mod transfer;

pub use curve::Curve;
pub use error::CurveError;
pub use transfer::{BitDepth, PerChannelConfig, PerChannelFilter};
