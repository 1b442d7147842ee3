//! Separable blend operators.
//!
//! Each function combines one source and one destination channel value.
//! All of them are total over `[ZERO, UNIT]`: every denominator that can
//! reach zero is checked first and answered with a saturated boundary, and
//! every result passes through [`Channel::saturate`] (or is provably in
//! range) before it is returned.
//!
//! Formulas that need transcendental functions work in the `f64` float
//! domain regardless of storage type, scaling in and out with
//! [`Channel::to_f64`] / [`Channel::from_f64`].
//!
//! Several operators are defined by composition with their arguments
//! swapped (`reflect(s, d) == glow(d, s)` and friends). Those calls are kept
//! literal; the operators are not symmetric.

use std::f64::consts::PI;

use pigment_core::channel::{abs_wide, max_of, min_of, Channel};

/// Source replaces destination.
#[inline]
pub fn over<T: Channel>(src: T, _dst: T) -> T {
    src
}

#[inline]
pub fn multiply<T: Channel>(src: T, dst: T) -> T {
    src.mul(dst)
}

/// `unit - (unit - src) * (unit - dst)`, computed as `src + dst - src * dst`.
#[inline]
pub fn screen<T: Channel>(src: T, dst: T) -> T {
    T::saturate(src.wide() + dst.wide() - src.mul(dst).wide())
}

/// Hard light with the layers swapped.
#[inline]
pub fn overlay<T: Channel>(src: T, dst: T) -> T {
    hard_light(dst, src)
}

#[inline]
pub fn darken<T: Channel>(src: T, dst: T) -> T {
    min_of(src, dst)
}

#[inline]
pub fn lighten<T: Channel>(src: T, dst: T) -> T {
    max_of(src, dst)
}

#[inline]
pub fn difference<T: Channel>(src: T, dst: T) -> T {
    T::saturate(max_of(src, dst).wide() - min_of(src, dst).wide())
}

#[inline]
pub fn color_dodge<T: Channel>(src: T, dst: T) -> T {
    if dst == T::ZERO {
        return T::ZERO;
    }

    let inv_src = src.inv();
    if inv_src < dst {
        return T::UNIT;
    }

    T::saturate(dst.div(inv_src))
}

#[inline]
pub fn color_burn<T: Channel>(src: T, dst: T) -> T {
    if dst == T::UNIT {
        return T::UNIT;
    }

    let inv_dst = dst.inv();
    if src < inv_dst {
        return T::ZERO;
    }

    T::saturate(inv_dst.div(src)).inv()
}

#[inline]
pub fn linear_burn<T: Channel>(src: T, dst: T) -> T {
    T::saturate(src.wide() + dst.wide() - T::UNIT.wide())
}

/// Linear dodge.
#[inline]
pub fn addition<T: Channel>(src: T, dst: T) -> T {
    T::saturate(src.wide() + dst.wide())
}

#[inline]
pub fn subtract<T: Channel>(src: T, dst: T) -> T {
    T::saturate(dst.wide() - src.wide())
}

#[inline]
pub fn inverse_subtract<T: Channel>(src: T, dst: T) -> T {
    T::saturate(dst.wide() - src.inv().wide())
}

#[inline]
pub fn exclusion<T: Channel>(src: T, dst: T) -> T {
    let x = src.mul(dst).wide();
    T::saturate(dst.wide() + src.wide() - (x + x))
}

#[inline]
pub fn divide<T: Channel>(src: T, dst: T) -> T {
    if src == T::ZERO {
        return if dst == T::ZERO { T::ZERO } else { T::UNIT };
    }

    T::saturate(dst.div(src))
}

#[inline]
pub fn hard_light<T: Channel>(src: T, dst: T) -> T {
    let src2 = src.wide() + src.wide();

    if src > T::HALF {
        // screen(2 * src - 1, dst)
        return screen(T::saturate(src2 - T::UNIT.wide()), dst);
    }

    // src2 <= UNIT here
    T::saturate(src2).mul(dst)
}

/// Soft light using the W3C `D(dst)` helper.
#[inline]
pub fn soft_light_svg<T: Channel>(src: T, dst: T) -> T {
    let fsrc = src.to_f64();
    let fdst = dst.to_f64();

    if fsrc > 0.5 {
        let d = if fdst > 0.25 {
            fdst.sqrt()
        } else {
            ((16.0 * fdst - 12.0) * fdst + 4.0) * fdst
        };
        return T::from_f64(fdst + (2.0 * fsrc - 1.0) * (d - fdst));
    }

    T::from_f64(fdst - (1.0 - 2.0 * fsrc) * fdst * (1.0 - fdst))
}

/// Soft light as Photoshop computes it.
#[inline]
pub fn soft_light<T: Channel>(src: T, dst: T) -> T {
    let fsrc = src.to_f64();
    let fdst = dst.to_f64();

    if fsrc > 0.5 {
        return T::from_f64(fdst + (2.0 * fsrc - 1.0) * (fdst.sqrt() - fdst));
    }

    T::from_f64(fdst - (1.0 - 2.0 * fsrc) * fdst * (1.0 - fdst))
}

/// Pegtop soft light: `dst * screen(src, dst) + src * dst * (1 - dst)`.
#[inline]
pub fn soft_light_pegtop_delphi<T: Channel>(src: T, dst: T) -> T {
    addition(dst.mul(screen(src, dst)), src.mul(dst).mul(dst.inv()))
}

#[inline]
pub fn hard_overlay<T: Channel>(src: T, dst: T) -> T {
    let fsrc = src.to_f64();
    let fdst = dst.to_f64();

    if fsrc > 0.5 {
        return T::from_f64(divide::<f64>((2.0 * fsrc - 1.0).inv(), fdst));
    }

    T::from_f64(2.0 * fsrc * fdst)
}

#[inline]
pub fn vivid_light<T: Channel>(src: T, dst: T) -> T {
    if src < T::HALF {
        if src == T::ZERO {
            return if dst == T::UNIT { T::UNIT } else { T::ZERO };
        }

        // 1 - (1 - dst) / (2 * src)
        let src2 = src.wide() + src.wide();
        let dsti = dst.inv().wide();
        return T::saturate(T::UNIT.wide() - dsti * T::UNIT.wide() / src2);
    }

    if src == T::UNIT {
        return if dst == T::ZERO { T::ZERO } else { T::UNIT };
    }

    // dst / (2 * (1 - src))
    let srci = src.inv().wide();
    T::saturate(dst.wide() * T::UNIT.wide() / (srci + srci))
}

/// `max(2 * src - 1, min(dst, 2 * src))`.
#[inline]
pub fn pin_light<T: Channel>(src: T, dst: T) -> T {
    let src2 = src.wide() + src.wide();
    let a = min_of(dst.wide(), src2);
    let b = max_of(src2 - T::UNIT.wide(), a);
    T::saturate(b)
}

#[inline]
pub fn linear_light<T: Channel>(src: T, dst: T) -> T {
    T::saturate(src.wide() + src.wide() + dst.wide() - T::UNIT.wide())
}

#[inline]
pub fn hard_mix<T: Channel>(src: T, dst: T) -> T {
    if dst > T::HALF {
        color_dodge(src, dst)
    } else {
        color_burn(src, dst)
    }
}

/// Thresholds the sum: white when `src + dst` exceeds unit.
#[inline]
pub fn hard_mix_photoshop<T: Channel>(src: T, dst: T) -> T {
    if src.wide() + dst.wide() > T::UNIT.wide() {
        T::UNIT
    } else {
        T::ZERO
    }
}

// Quadratic modes, after the Pegtop definitions.

#[inline]
pub fn glow<T: Channel>(src: T, dst: T) -> T {
    if dst == T::UNIT {
        return T::UNIT;
    }

    T::saturate(src.mul(src).div(dst.inv()))
}

#[inline]
pub fn reflect<T: Channel>(src: T, dst: T) -> T {
    glow(dst, src)
}

#[inline]
pub fn heat<T: Channel>(src: T, dst: T) -> T {
    if dst == T::ZERO {
        return T::ZERO;
    }

    let inv_src = src.inv();
    T::saturate(inv_src.mul(inv_src).div(dst)).inv()
}

#[inline]
pub fn freeze<T: Channel>(src: T, dst: T) -> T {
    heat(dst, src)
}

#[inline]
pub fn helow<T: Channel>(src: T, dst: T) -> T {
    if hard_mix_photoshop(src, dst) == T::UNIT {
        return heat(src, dst);
    }

    glow(src, dst)
}

#[inline]
pub fn frect<T: Channel>(src: T, dst: T) -> T {
    if hard_mix_photoshop(src, dst) == T::UNIT {
        return freeze(src, dst);
    }

    reflect(src, dst)
}

#[inline]
pub fn gleat<T: Channel>(src: T, dst: T) -> T {
    if dst == T::UNIT {
        return T::UNIT;
    }

    if hard_mix_photoshop(src, dst) == T::UNIT {
        return glow(src, dst);
    }

    heat(src, dst)
}

#[inline]
pub fn reeze<T: Channel>(src: T, dst: T) -> T {
    gleat(dst, src)
}

/// `dst ^ (1 / src)`.
#[inline]
pub fn gamma_dark<T: Channel>(src: T, dst: T) -> T {
    if src == T::ZERO {
        return T::ZERO;
    }

    T::from_f64(dst.to_f64().powf(1.0 / src.to_f64()))
}

/// `dst ^ src`.
#[inline]
pub fn gamma_light<T: Channel>(src: T, dst: T) -> T {
    T::from_f64(dst.to_f64().powf(src.to_f64()))
}

#[inline]
pub fn geometric_mean<T: Channel>(src: T, dst: T) -> T {
    T::from_f64((dst.to_f64() * src.to_f64()).sqrt())
}

#[inline]
pub fn grain_merge<T: Channel>(src: T, dst: T) -> T {
    T::saturate(dst.wide() + src.wide() - T::HALF.wide())
}

#[inline]
pub fn grain_extract<T: Channel>(src: T, dst: T) -> T {
    T::saturate(dst.wide() - src.wide() + T::HALF.wide())
}

/// `|dst - src|`.
#[inline]
pub fn equivalence<T: Channel>(src: T, dst: T) -> T {
    T::saturate(abs_wide::<T>(dst.wide() - src.wide()))
}

/// `unit - |unit - src - dst|`.
#[inline]
pub fn negation<T: Channel>(src: T, dst: T) -> T {
    let unit = T::UNIT.wide();
    let a = unit - src.wide() - dst.wide();
    T::saturate(unit - abs_wide::<T>(a))
}

#[inline]
pub fn phoenix<T: Channel>(src: T, dst: T) -> T {
    difference(src, dst).inv()
}

/// `(src - dst) / 2 + half`.
#[inline]
pub fn signed_difference<T: Channel>(src: T, dst: T) -> T {
    T::saturate((src.wide() - dst.wide()) / T::TWO + T::HALF.wide())
}

/// Average, scaled by `half / unit`.
#[inline]
pub fn allanon<T: Channel>(src: T, dst: T) -> T {
    T::saturate((src.wide() + dst.wide()) * T::HALF.wide() / T::UNIT.wide())
}

/// Harmonic mean `2 / (1/dst + 1/src)`; a zero operand contributes `unit`.
#[inline]
pub fn parallel<T: Channel>(src: T, dst: T) -> T {
    let unit = T::UNIT.wide();
    let s = if src != T::ZERO { T::UNIT.div(src) } else { unit };
    let d = if dst != T::ZERO { T::UNIT.div(dst) } else { unit };
    T::saturate((unit + unit) * unit / (d + s))
}

/// `0.5 - cos(pi * src) / 4 - cos(pi * dst) / 4`.
#[inline]
pub fn interpolate<T: Channel>(src: T, dst: T) -> T {
    let a = (PI * src.to_f64()).cos();
    let b = (PI * dst.to_f64()).cos();
    T::from_f64(0.5 - 0.25 * a - 0.25 * b)
}

#[inline]
pub fn arc_tangent<T: Channel>(src: T, dst: T) -> T {
    if dst == T::ZERO {
        return if src == T::ZERO { T::ZERO } else { T::UNIT };
    }

    T::from_f64(2.0 * (src.to_f64() / dst.to_f64()).atan() / PI)
}

/// `|sqrt(dst) - sqrt(src)|`.
#[inline]
pub fn additive_subtractive<T: Channel>(src: T, dst: T) -> T {
    T::from_f64((dst.to_f64().sqrt() - src.to_f64().sqrt()).abs())
}

#[inline]
pub fn penumbra_b<T: Channel>(src: T, dst: T) -> T {
    if dst == T::UNIT {
        return T::UNIT;
    }

    if dst.wide() + src.wide() < T::UNIT.wide() {
        return T::saturate(color_dodge(dst, src).wide() / T::TWO);
    }

    if src == T::ZERO {
        return T::ZERO;
    }

    T::saturate(dst.inv().div(src) / T::TWO).inv()
}

#[inline]
pub fn penumbra_a<T: Channel>(src: T, dst: T) -> T {
    penumbra_b(dst, src)
}
