//! Pigment Blend — channel blend operators, HSX policies and the blend-mode registry.

pub mod composite;
pub mod error;
pub mod hsx;
pub mod mode;
pub mod nonseparable;
pub mod registry;
pub mod separable;

pub use composite::{composite_channels, composite_rows};
pub use error::BlendError;
pub use hsx::{Hsi, Hsl, HsxKind, HsxModel, Hsv, Hsy};
pub use mode::BlendMode;
pub use registry::{BlendOp, BlendRegistry, LayerBlend, TripleFn};
