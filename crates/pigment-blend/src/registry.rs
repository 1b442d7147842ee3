//! Blend-mode lookup and operator dispatch.
//!
//! [`BlendMode::operator`] maps the closed set of modes onto plain function
//! pointers, monomorphised for one channel type. [`BlendRegistry::global`]
//! resolves persisted string ids (and a few legacy aliases) back to modes.

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::OnceLock;

use pigment_core::{Channel, Rgb};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{BlendError, Result};
use crate::hsx::HsxKind;
use crate::mode::BlendMode;
use crate::nonseparable as ns;
use crate::separable as sep;

/// Triple operator evaluated in the `f64` domain.
pub type TripleFn = fn(HsxKind, Rgb<f64>, Rgb<f64>) -> Rgb<f64>;

/// A resolved blend operator for channel type `T`.
#[derive(Debug, Clone, Copy)]
pub enum BlendOp<T> {
    /// Applied to each channel independently.
    Separable(fn(T, T) -> T),
    /// Needs the whole RGB triple and an HSX policy.
    NonSeparable(TripleFn),
}

impl<T: Channel> BlendOp<T> {
    /// Blend one pixel.
    ///
    /// Triple operators run on floats; the result is clamped back into
    /// `T`'s range on the way out.
    #[inline]
    pub fn apply_rgb(self, model: HsxKind, src: Rgb<T>, dst: Rgb<T>) -> Rgb<T> {
        match self {
            Self::Separable(f) => src.zip_with(dst, f),
            Self::NonSeparable(f) => f(model, src.convert(), dst.convert()).convert(),
        }
    }

    /// The per-channel function, if this operator has one.
    pub fn separable(self) -> Option<fn(T, T) -> T> {
        match self {
            Self::Separable(f) => Some(f),
            Self::NonSeparable(_) => None,
        }
    }
}

impl BlendMode {
    /// Resolve the operator for channel type `T`.
    pub fn operator<T: Channel>(self) -> BlendOp<T> {
        use BlendOp::{NonSeparable, Separable};

        match self {
            Self::Over => Separable(sep::over::<T>),
            Self::Addition => Separable(sep::addition::<T>),
            Self::Subtract => Separable(sep::subtract::<T>),
            Self::InverseSubtract => Separable(sep::inverse_subtract::<T>),
            Self::Multiply => Separable(sep::multiply::<T>),
            Self::Divide => Separable(sep::divide::<T>),
            Self::Darken => Separable(sep::darken::<T>),
            Self::ColorBurn => Separable(sep::color_burn::<T>),
            Self::LinearBurn => Separable(sep::linear_burn::<T>),
            Self::GammaDark => Separable(sep::gamma_dark::<T>),
            Self::Lighten => Separable(sep::lighten::<T>),
            Self::Screen => Separable(sep::screen::<T>),
            Self::ColorDodge => Separable(sep::color_dodge::<T>),
            Self::GammaLight => Separable(sep::gamma_light::<T>),
            Self::Overlay => Separable(sep::overlay::<T>),
            Self::SoftLight => Separable(sep::soft_light::<T>),
            Self::SoftLightSvg => Separable(sep::soft_light_svg::<T>),
            Self::SoftLightPegtopDelphi => Separable(sep::soft_light_pegtop_delphi::<T>),
            Self::HardLight => Separable(sep::hard_light::<T>),
            Self::HardOverlay => Separable(sep::hard_overlay::<T>),
            Self::VividLight => Separable(sep::vivid_light::<T>),
            Self::LinearLight => Separable(sep::linear_light::<T>),
            Self::PinLight => Separable(sep::pin_light::<T>),
            Self::HardMix => Separable(sep::hard_mix::<T>),
            Self::HardMixPhotoshop => Separable(sep::hard_mix_photoshop::<T>),
            Self::GrainMerge => Separable(sep::grain_merge::<T>),
            Self::GrainExtract => Separable(sep::grain_extract::<T>),
            Self::GeometricMean => Separable(sep::geometric_mean::<T>),
            Self::Allanon => Separable(sep::allanon::<T>),
            Self::Parallel => Separable(sep::parallel::<T>),
            Self::Interpolate => Separable(sep::interpolate::<T>),
            Self::PenumbraA => Separable(sep::penumbra_a::<T>),
            Self::PenumbraB => Separable(sep::penumbra_b::<T>),
            Self::Difference => Separable(sep::difference::<T>),
            Self::Exclusion => Separable(sep::exclusion::<T>),
            Self::Equivalence => Separable(sep::equivalence::<T>),
            Self::Negation => Separable(sep::negation::<T>),
            Self::Phoenix => Separable(sep::phoenix::<T>),
            Self::SignedDifference => Separable(sep::signed_difference::<T>),
            Self::ArcTangent => Separable(sep::arc_tangent::<T>),
            Self::AdditiveSubtractive => Separable(sep::additive_subtractive::<T>),
            Self::Glow => Separable(sep::glow::<T>),
            Self::Reflect => Separable(sep::reflect::<T>),
            Self::Heat => Separable(sep::heat::<T>),
            Self::Freeze => Separable(sep::freeze::<T>),
            Self::Helow => Separable(sep::helow::<T>),
            Self::Frect => Separable(sep::frect::<T>),
            Self::Gleat => Separable(sep::gleat::<T>),
            Self::Reeze => Separable(sep::reeze::<T>),

            Self::DarkerColor => NonSeparable(ns::darker_color::<HsxKind, f64>),
            Self::LighterColor => NonSeparable(ns::lighter_color::<HsxKind, f64>),
            Self::Hue => NonSeparable(ns::hue::<HsxKind, f64>),
            Self::Saturation => NonSeparable(ns::saturation::<HsxKind, f64>),
            Self::IncreaseSaturation => NonSeparable(ns::increase_saturation::<HsxKind, f64>),
            Self::DecreaseSaturation => NonSeparable(ns::decrease_saturation::<HsxKind, f64>),
            Self::Color => NonSeparable(ns::color::<HsxKind, f64>),
            Self::Lightness => NonSeparable(ns::lightness::<HsxKind, f64>),
            Self::IncreaseLightness => NonSeparable(ns::increase_lightness::<HsxKind, f64>),
            Self::DecreaseLightness => NonSeparable(ns::decrease_lightness::<HsxKind, f64>),
            Self::ReorientedNormalMapCombine => {
                NonSeparable(ns::reoriented_normal_map_combine::<HsxKind, f64>)
            }
            Self::TangentNormalmap => NonSeparable(ns::tangent_normalmap::<HsxKind, f64>),
        }
    }
}

/// Alternative ids accepted on lookup.
const ALIASES: &[(&str, BlendMode)] = &[
    ("normal", BlendMode::Over),
    ("add", BlendMode::Addition),
    ("linear_dodge", BlendMode::Addition),
    ("soft_light_photoshop", BlendMode::SoftLight),
    ("combine_normal", BlendMode::ReorientedNormalMapCombine),
];

/// Immutable id → mode table.
#[derive(Debug)]
pub struct BlendRegistry {
    by_id: HashMap<&'static str, BlendMode>,
}

impl BlendRegistry {
    /// The process-wide registry, built on first use.
    pub fn global() -> &'static BlendRegistry {
        static INSTANCE: OnceLock<BlendRegistry> = OnceLock::new();
        INSTANCE.get_or_init(BlendRegistry::build)
    }

    fn build() -> Self {
        let mut by_id = HashMap::with_capacity(BlendMode::ALL.len() + ALIASES.len());
        for mode in BlendMode::ALL {
            by_id.insert(mode.id(), mode);
        }
        for &(alias, mode) in ALIASES {
            by_id.insert(alias, mode);
        }
        debug!(
            modes = BlendMode::ALL.len(),
            aliases = ALIASES.len(),
            "Built blend mode registry"
        );
        Self { by_id }
    }

    /// Find a mode by id or alias. Case, surrounding whitespace and `-`
    /// versus `_` are not significant.
    pub fn lookup(&self, id: &str) -> Option<BlendMode> {
        let key = id.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        self.by_id.get(key.as_str()).copied()
    }

    /// Like [`lookup`](Self::lookup), but unknown ids are an error.
    pub fn resolve(&self, id: &str) -> Result<BlendMode> {
        self.lookup(id)
            .ok_or_else(|| BlendError::UnknownMode(id.to_string()))
    }

    /// Canonical ids in display order.
    pub fn ids(&self) -> impl Iterator<Item = &'static str> {
        BlendMode::ALL.iter().map(|m| m.id())
    }

    /// Modes grouped by category, both in display order.
    pub fn by_category(&self) -> Vec<(&'static str, Vec<BlendMode>)> {
        let mut groups: Vec<(&'static str, Vec<BlendMode>)> = Vec::new();
        for mode in BlendMode::ALL {
            match groups.iter().position(|(c, _)| *c == mode.category()) {
                Some(i) => groups[i].1.push(mode),
                None => groups.push((mode.category(), vec![mode])),
            }
        }
        groups
    }

    /// Number of accepted ids, aliases included.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

impl FromStr for BlendMode {
    type Err = BlendError;

    fn from_str(s: &str) -> Result<Self> {
        BlendRegistry::global().resolve(s)
    }
}

impl FromStr for HsxKind {
    type Err = BlendError;

    fn from_str(s: &str) -> Result<Self> {
        HsxKind::from_name(s.trim()).ok_or_else(|| BlendError::UnknownModel(s.to_string()))
    }
}

/// A layer's blending setup, as persisted in documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerBlend {
    pub mode: BlendMode,
    pub model: HsxKind,
}

impl LayerBlend {
    pub fn new(mode: BlendMode, model: HsxKind) -> Self {
        Self { mode, model }
    }

    /// Blend one pixel with this layer's mode and model.
    #[inline]
    pub fn blend<T: Channel>(&self, src: Rgb<T>, dst: Rgb<T>) -> Rgb<T> {
        self.mode.operator::<T>().apply_rgb(self.model, src, dst)
    }
}
