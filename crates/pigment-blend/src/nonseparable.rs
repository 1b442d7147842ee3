//! Whole-triple blend operators.
//!
//! Each function takes the HSX policy explicitly, then `src` and `dst`, and
//! returns the blended triple. Channels are floats in `[0, 1]`; integer
//! buffers reach these through [`crate::registry::BlendOp::apply_rgb`].
//! The normal-map operators ignore the policy.

use pigment_core::{Real, Rgb};

use crate::hsx::HsxModel;

#[inline]
pub fn color<M: HsxModel, R: Real>(model: M, src: Rgb<R>, dst: Rgb<R>) -> Rgb<R> {
    model.set_lightness(src, model.lightness(dst))
}

#[inline]
pub fn lightness<M: HsxModel, R: Real>(model: M, src: Rgb<R>, dst: Rgb<R>) -> Rgb<R> {
    model.set_lightness(dst, model.lightness(src))
}

#[inline]
pub fn increase_lightness<M: HsxModel, R: Real>(model: M, src: Rgb<R>, dst: Rgb<R>) -> Rgb<R> {
    model.add_lightness(dst, model.lightness(src))
}

#[inline]
pub fn decrease_lightness<M: HsxModel, R: Real>(model: M, src: Rgb<R>, dst: Rgb<R>) -> Rgb<R> {
    model.add_lightness(dst, model.lightness(src) - R::UNIT)
}

#[inline]
pub fn saturation<M: HsxModel, R: Real>(model: M, src: Rgb<R>, dst: Rgb<R>) -> Rgb<R> {
    let light = model.lightness(dst);
    let out = model.set_saturation(dst, model.saturation(src));
    model.set_lightness(out, light)
}

/// Move dst saturation toward one, by src saturation.
#[inline]
pub fn increase_saturation<M: HsxModel, R: Real>(model: M, src: Rgb<R>, dst: Rgb<R>) -> Rgb<R> {
    let sd = model.saturation(dst);
    let sat = sd + model.saturation(src) * (R::UNIT - sd);
    let light = model.lightness(dst);
    let out = model.set_saturation(dst, sat);
    model.set_lightness(out, light)
}

/// Move dst saturation toward zero, by src saturation.
#[inline]
pub fn decrease_saturation<M: HsxModel, R: Real>(model: M, src: Rgb<R>, dst: Rgb<R>) -> Rgb<R> {
    let sat = model.saturation(src) * model.saturation(dst);
    let light = model.lightness(dst);
    let out = model.set_saturation(dst, sat);
    model.set_lightness(out, light)
}

#[inline]
pub fn hue<M: HsxModel, R: Real>(model: M, src: Rgb<R>, dst: Rgb<R>) -> Rgb<R> {
    let sat = model.saturation(dst);
    let light = model.lightness(dst);
    let out = model.set_saturation(src, sat);
    model.set_lightness(out, light)
}

/// Keep whichever triple is darker. Ties keep dst.
#[inline]
pub fn darker_color<M: HsxModel, R: Real>(model: M, src: Rgb<R>, dst: Rgb<R>) -> Rgb<R> {
    if model.lightness(dst) <= model.lightness(src) {
        dst
    } else {
        src
    }
}

/// Keep whichever triple is lighter. Ties keep dst.
#[inline]
pub fn lighter_color<M: HsxModel, R: Real>(model: M, src: Rgb<R>, dst: Rgb<R>) -> Rgb<R> {
    if model.lightness(dst) >= model.lightness(src) {
        dst
    } else {
        src
    }
}

/// Reoriented normal mapping: rotate the dst detail normal onto src.
///
/// Not defined for `src.b == 0`; the division by `t.z` yields NaN channels.
/// The result is not clamped to `[0, 1]`; [`BlendOp::apply_rgb`] clamps it.
///
/// [`BlendOp::apply_rgb`]: crate::BlendOp::apply_rgb
#[inline]
pub fn reoriented_normal_map_combine<M: HsxModel, R: Real>(
    _model: M,
    src: Rgb<R>,
    dst: Rgb<R>,
) -> Rgb<R> {
    let two = R::UNIT + R::UNIT;
    let t = Rgb::new(
        src.r * two - R::UNIT,
        src.g * two - R::UNIT,
        src.b * two,
    );
    let u = Rgb::new(
        -dst.r * two + R::UNIT,
        -dst.g * two + R::UNIT,
        dst.b * two - R::UNIT,
    );
    let k = (t.r * u.r + t.g * u.g + t.b * u.b) / t.b;
    let r = t.zip_with(u, |t, u| t * k - u);
    let len = (r.r * r.r + r.g * r.g + r.b * r.b).sqrt();
    r.map(|v| v / len * R::HALF + R::HALF)
}

/// Add src to dst treating dst as a tangent-space offset from flat.
///
/// The sum can leave `[0, 1]`. It is clamped only when applied through
/// [`BlendOp::apply_rgb`].
///
/// [`BlendOp::apply_rgb`]: crate::BlendOp::apply_rgb
#[inline]
pub fn tangent_normalmap<M: HsxModel, R: Real>(_model: M, src: Rgb<R>, dst: Rgb<R>) -> Rgb<R> {
    Rgb::new(
        src.r + (dst.r - R::HALF),
        src.g + (dst.g - R::HALF),
        src.b + (dst.b - R::UNIT),
    )
}
