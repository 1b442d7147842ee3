//! Hue/saturation/lightness policies.
//!
//! The non-separable operators never hard-code what "lightness" or
//! "saturation" mean. They are written against [`HsxModel`] and the caller
//! passes a policy value: [`Hsy`] (luma), [`Hsi`] (intensity), [`Hsl`] or
//! [`Hsv`]. [`HsxKind`] selects one of them at runtime.
//!
//! Only [`HsxModel::lightness`] and [`HsxModel::saturation`] differ between
//! policies. Setting saturation rescales the chroma of the sorted channels;
//! adding lightness shifts all three channels and then pulls any channel
//! that left `[0, 1]` back toward the new lightness.

use pigment_core::{Real, Rgb};
use serde::{Deserialize, Serialize};

/// Lightness and saturation capability used by the HSX blend modes.
pub trait HsxModel: Copy {
    fn lightness<R: Real>(self, c: Rgb<R>) -> R;

    fn saturation<R: Real>(self, c: Rgb<R>) -> R;

    /// Shift every channel by `delta`, then clip back into gamut while
    /// keeping the lightness.
    fn add_lightness<R: Real>(self, c: Rgb<R>, delta: R) -> Rgb<R> {
        let c = c.map(|v| v + delta);
        let l = self.lightness(c);
        let n = c.r.min(c.g).min(c.b);
        let x = c.r.max(c.g).max(c.b);
        let mut out = c;

        if n < R::ZERO && (l - n) > R::EPSILON {
            let iln = R::UNIT / (l - n);
            out = out.map(|v| l + (v - l) * l * iln);
        }

        if x > R::UNIT && (x - l) > R::EPSILON {
            let il = R::UNIT - l;
            let ixl = R::UNIT / (x - l);
            out = out.map(|v| l + (v - l) * il * ixl);
        }

        out
    }

    fn set_lightness<R: Real>(self, c: Rgb<R>, value: R) -> Rgb<R> {
        self.add_lightness(c, value - self.lightness(c))
    }

    /// Rescale chroma so the largest channel equals `sat` and the smallest
    /// is zero. Achromatic input collapses to black.
    fn set_saturation<R: Real>(self, c: Rgb<R>, sat: R) -> Rgb<R> {
        let mut rgb = c.to_array();
        let (mut min, mut mid, mut max) = (0usize, 1usize, 2usize);

        if rgb[mid] < rgb[min] {
            std::mem::swap(&mut mid, &mut min);
        }
        if rgb[max] < rgb[mid] {
            std::mem::swap(&mut max, &mut mid);
        }
        if rgb[mid] < rgb[min] {
            std::mem::swap(&mut mid, &mut min);
        }

        let chroma = rgb[max] - rgb[min];
        if chroma > R::ZERO {
            rgb[mid] = (rgb[mid] - rgb[min]) * sat / chroma;
            rgb[max] = sat;
            rgb[min] = R::ZERO;
            Rgb::from(rgb)
        } else {
            Rgb::splat(R::ZERO)
        }
    }
}

#[inline]
fn max3<R: Real>(c: Rgb<R>) -> R {
    c.r.max(c.g).max(c.b)
}

#[inline]
fn min3<R: Real>(c: Rgb<R>) -> R {
    c.r.min(c.g).min(c.b)
}

/// Luma-based lightness (Rec. 601 weights), chroma as saturation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hsy;

impl HsxModel for Hsy {
    #[inline]
    fn lightness<R: Real>(self, c: Rgb<R>) -> R {
        R::of(0.299) * c.r + R::of(0.587) * c.g + R::of(0.114) * c.b
    }

    #[inline]
    fn saturation<R: Real>(self, c: Rgb<R>) -> R {
        max3(c) - min3(c)
    }
}

/// Intensity: the plain channel average.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hsi;

impl HsxModel for Hsi {
    #[inline]
    fn lightness<R: Real>(self, c: Rgb<R>) -> R {
        (c.r + c.g + c.b) * R::of(1.0 / 3.0)
    }

    #[inline]
    fn saturation<R: Real>(self, c: Rgb<R>) -> R {
        let max = max3(c);
        let min = min3(c);
        if max - min > R::EPSILON {
            R::UNIT - min / self.lightness(c)
        } else {
            R::ZERO
        }
    }
}

/// Lightness as the midpoint of the extreme channels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hsl;

impl HsxModel for Hsl {
    #[inline]
    fn lightness<R: Real>(self, c: Rgb<R>) -> R {
        (max3(c) + min3(c)) * R::HALF
    }

    #[inline]
    fn saturation<R: Real>(self, c: Rgb<R>) -> R {
        let max = max3(c);
        let min = min3(c);
        let div = R::UNIT - (max + min - R::UNIT).abs();
        if div > R::EPSILON {
            (max - min) / div
        } else {
            R::UNIT
        }
    }
}

/// Value: lightness is the largest channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hsv;

impl HsxModel for Hsv {
    #[inline]
    fn lightness<R: Real>(self, c: Rgb<R>) -> R {
        max3(c)
    }

    #[inline]
    fn saturation<R: Real>(self, c: Rgb<R>) -> R {
        let max = max3(c);
        let min = min3(c);
        if max > R::EPSILON {
            (max - min) / max
        } else {
            R::ZERO
        }
    }
}

/// Runtime choice of HSX policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HsxKind {
    #[default]
    Hsy,
    Hsi,
    Hsl,
    Hsv,
}

impl HsxKind {
    pub const ALL: [HsxKind; 4] = [Self::Hsy, Self::Hsi, Self::Hsl, Self::Hsv];

    /// Parse `"hsy"`, `"hsi"`, `"hsl"` or `"hsv"`, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "hsy" => Some(Self::Hsy),
            "hsi" => Some(Self::Hsi),
            "hsl" => Some(Self::Hsl),
            "hsv" => Some(Self::Hsv),
            _ => None,
        }
    }
}

impl HsxModel for HsxKind {
    #[inline]
    fn lightness<R: Real>(self, c: Rgb<R>) -> R {
        match self {
            Self::Hsy => Hsy.lightness(c),
            Self::Hsi => Hsi.lightness(c),
            Self::Hsl => Hsl.lightness(c),
            Self::Hsv => Hsv.lightness(c),
        }
    }

    #[inline]
    fn saturation<R: Real>(self, c: Rgb<R>) -> R {
        match self {
            Self::Hsy => Hsy.saturation(c),
            Self::Hsi => Hsi.saturation(c),
            Self::Hsl => Hsl.saturation(c),
            Self::Hsv => Hsv.saturation(c),
        }
    }
}
