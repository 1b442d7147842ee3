//! Gradient coordinate transforms.
//!
//! Mesh-gradient handles are stored in gradient space. Editing tools need
//! them in device space, and edited positions must go back the other way,
//! so [`GradientTransform`] always carries both directions.

use bytemuck::{Pod, Zeroable};
pub use glam::Affine2;
use glam::Vec2 as GlamVec2;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{PigmentError, Result};

/// 2D vector.
pub type Vec2 = GlamVec2;

/// Determinants at or below this magnitude are treated as singular.
const SINGULAR_EPSILON: f32 = 1e-10;

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, Pod, Zeroable)]
#[repr(C)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from two corners.
    pub fn from_corners(min: Vec2, max: Vec2) -> Self {
        Self {
            x: min.x,
            y: min.y,
            width: max.x - min.x,
            height: max.y - min.y,
        }
    }

    /// Minimum corner (top-left).
    #[inline]
    pub fn min(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Maximum corner (bottom-right).
    #[inline]
    pub fn max(self) -> Vec2 {
        Vec2::new(self.x + self.width, self.y + self.height)
    }

    /// Size as a vector.
    #[inline]
    pub fn size(self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Affine map from the unit square onto this rectangle.
    ///
    /// `(0, 0)` lands on [`Rect::min`] and `(1, 1)` on [`Rect::max`].
    pub fn unit_square_map(self) -> Affine2 {
        Affine2::from_scale_angle_translation(self.size(), 0.0, self.min())
    }
}

/// Coordinate system a gradient's geometry is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradientUnits {
    /// Coordinates are in the shape's user space.
    UserSpaceOnUse,
    /// Coordinates are fractions of the shape's bounding box.
    #[default]
    ObjectBoundingBox,
}

/// Invertible map between gradient space and device space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientTransform {
    forward: Affine2,
    inverse: Affine2,
}

impl GradientTransform {
    /// Build the gradient-to-device transform for a shape.
    ///
    /// `shape_to_device` is the shape's local-to-absolute transform and
    /// `outline` its outline rectangle in local coordinates. In
    /// bounding-box mode the unit square is first mapped onto `outline`.
    pub fn new(shape_to_device: Affine2, outline: Rect, units: GradientUnits) -> Result<Self> {
        let forward = match units {
            GradientUnits::UserSpaceOnUse => shape_to_device,
            GradientUnits::ObjectBoundingBox => {
                if outline.width == 0.0 || outline.height == 0.0 {
                    warn!(?outline, "Rejecting gradient on degenerate bounding box");
                    return Err(PigmentError::DegenerateBounds {
                        width: outline.width,
                        height: outline.height,
                    });
                }
                shape_to_device * outline.unit_square_map()
            }
        };
        Self::from_affine(forward)
    }

    /// Wrap an existing affine, rejecting singular matrices.
    pub fn from_affine(forward: Affine2) -> Result<Self> {
        let determinant = forward.matrix2.determinant();
        if !determinant.is_finite() || determinant.abs() <= SINGULAR_EPSILON {
            warn!(determinant, "Rejecting non-invertible gradient transform");
            return Err(PigmentError::NonInvertible { determinant });
        }
        Ok(Self {
            forward,
            inverse: forward.inverse(),
        })
    }

    /// Gradient space to device space.
    #[inline]
    pub fn map_out(&self, point: Vec2) -> Vec2 {
        self.forward.transform_point2(point)
    }

    /// Device space back to gradient space.
    #[inline]
    pub fn map_back(&self, point: Vec2) -> Vec2 {
        self.inverse.transform_point2(point)
    }

    /// Map a batch of handle positions out to device space.
    pub fn map_out_all(&self, points: &[Vec2]) -> Vec<Vec2> {
        points.iter().map(|&p| self.map_out(p)).collect()
    }

    #[inline]
    pub fn forward(&self) -> Affine2 {
        self.forward
    }

    #[inline]
    pub fn inverse(&self) -> Affine2 {
        self.inverse
    }
}
