//! Pigment Core - Foundation types for channel compositing
//!
//! This crate provides the fundamental types used throughout Pigment:
//! - Normalized channel arithmetic (Channel, Real)
//! - Colour triples (Rgb)
//! - Gradient coordinate transforms (Rect, GradientTransform)

pub mod channel;
pub mod error;
pub mod geometry;
pub mod rgb;

pub use channel::{Channel, Real};
pub use error::{PigmentError, Result};
pub use geometry::{Affine2, GradientTransform, GradientUnits, Rect, Vec2};
pub use rgb::Rgb;
