//! Blend mode definitions for compositing.
//!
//! Lists every supported blend mode with its stable id, display name and
//! menu category. The id is what configuration files persist and what the
//! registry resolves; it never changes once published.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Blend mode for compositing layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendMode {
    // ── Normal ──────────────────────────────────
    #[default]
    #[serde(alias = "normal")]
    Over,

    // ── Arithmetic ──────────────────────────────
    #[serde(alias = "add", alias = "linear_dodge")]
    Addition,
    Subtract,
    InverseSubtract,
    Multiply,
    Divide,

    // ── Darken ──────────────────────────────────
    Darken,
    ColorBurn,
    LinearBurn,
    GammaDark,
    DarkerColor,

    // ── Lighten ─────────────────────────────────
    Lighten,
    Screen,
    ColorDodge,
    GammaLight,
    LighterColor,

    // ── Mix ─────────────────────────────────────
    Overlay,
    #[serde(alias = "soft_light_photoshop")]
    SoftLight,
    SoftLightSvg,
    SoftLightPegtopDelphi,
    HardLight,
    HardOverlay,
    VividLight,
    LinearLight,
    PinLight,
    HardMix,
    HardMixPhotoshop,
    GrainMerge,
    GrainExtract,
    GeometricMean,
    Allanon,
    Parallel,
    Interpolate,
    PenumbraA,
    PenumbraB,

    // ── Negative ────────────────────────────────
    Difference,
    Exclusion,
    Equivalence,
    Negation,
    Phoenix,
    SignedDifference,
    ArcTangent,
    AdditiveSubtractive,

    // ── Quadratic ───────────────────────────────
    Glow,
    Reflect,
    Heat,
    Freeze,
    Helow,
    Frect,
    Gleat,
    Reeze,

    // ── HSX ─────────────────────────────────────
    Hue,
    Saturation,
    IncreaseSaturation,
    DecreaseSaturation,
    Color,
    Lightness,
    IncreaseLightness,
    DecreaseLightness,

    // ── Normal maps ─────────────────────────────
    #[serde(alias = "combine_normal")]
    ReorientedNormalMapCombine,
    TangentNormalmap,
}

impl BlendMode {
    /// All blend modes in display order.
    pub const ALL: [BlendMode; 61] = [
        Self::Over,
        Self::Addition,
        Self::Subtract,
        Self::InverseSubtract,
        Self::Multiply,
        Self::Divide,
        Self::Darken,
        Self::ColorBurn,
        Self::LinearBurn,
        Self::GammaDark,
        Self::DarkerColor,
        Self::Lighten,
        Self::Screen,
        Self::ColorDodge,
        Self::GammaLight,
        Self::LighterColor,
        Self::Overlay,
        Self::SoftLight,
        Self::SoftLightSvg,
        Self::SoftLightPegtopDelphi,
        Self::HardLight,
        Self::HardOverlay,
        Self::VividLight,
        Self::LinearLight,
        Self::PinLight,
        Self::HardMix,
        Self::HardMixPhotoshop,
        Self::GrainMerge,
        Self::GrainExtract,
        Self::GeometricMean,
        Self::Allanon,
        Self::Parallel,
        Self::Interpolate,
        Self::PenumbraA,
        Self::PenumbraB,
        Self::Difference,
        Self::Exclusion,
        Self::Equivalence,
        Self::Negation,
        Self::Phoenix,
        Self::SignedDifference,
        Self::ArcTangent,
        Self::AdditiveSubtractive,
        Self::Glow,
        Self::Reflect,
        Self::Heat,
        Self::Freeze,
        Self::Helow,
        Self::Frect,
        Self::Gleat,
        Self::Reeze,
        Self::Hue,
        Self::Saturation,
        Self::IncreaseSaturation,
        Self::DecreaseSaturation,
        Self::Color,
        Self::Lightness,
        Self::IncreaseLightness,
        Self::DecreaseLightness,
        Self::ReorientedNormalMapCombine,
        Self::TangentNormalmap,
    ];

    /// Stable identifier, identical to the serde representation.
    pub fn id(self) -> &'static str {
        match self {
            Self::Over => "over",
            Self::Addition => "addition",
            Self::Subtract => "subtract",
            Self::InverseSubtract => "inverse_subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
            Self::Darken => "darken",
            Self::ColorBurn => "color_burn",
            Self::LinearBurn => "linear_burn",
            Self::GammaDark => "gamma_dark",
            Self::DarkerColor => "darker_color",
            Self::Lighten => "lighten",
            Self::Screen => "screen",
            Self::ColorDodge => "color_dodge",
            Self::GammaLight => "gamma_light",
            Self::LighterColor => "lighter_color",
            Self::Overlay => "overlay",
            Self::SoftLight => "soft_light",
            Self::SoftLightSvg => "soft_light_svg",
            Self::SoftLightPegtopDelphi => "soft_light_pegtop_delphi",
            Self::HardLight => "hard_light",
            Self::HardOverlay => "hard_overlay",
            Self::VividLight => "vivid_light",
            Self::LinearLight => "linear_light",
            Self::PinLight => "pin_light",
            Self::HardMix => "hard_mix",
            Self::HardMixPhotoshop => "hard_mix_photoshop",
            Self::GrainMerge => "grain_merge",
            Self::GrainExtract => "grain_extract",
            Self::GeometricMean => "geometric_mean",
            Self::Allanon => "allanon",
            Self::Parallel => "parallel",
            Self::Interpolate => "interpolate",
            Self::PenumbraA => "penumbra_a",
            Self::PenumbraB => "penumbra_b",
            Self::Difference => "difference",
            Self::Exclusion => "exclusion",
            Self::Equivalence => "equivalence",
            Self::Negation => "negation",
            Self::Phoenix => "phoenix",
            Self::SignedDifference => "signed_difference",
            Self::ArcTangent => "arc_tangent",
            Self::AdditiveSubtractive => "additive_subtractive",
            Self::Glow => "glow",
            Self::Reflect => "reflect",
            Self::Heat => "heat",
            Self::Freeze => "freeze",
            Self::Helow => "helow",
            Self::Frect => "frect",
            Self::Gleat => "gleat",
            Self::Reeze => "reeze",
            Self::Hue => "hue",
            Self::Saturation => "saturation",
            Self::IncreaseSaturation => "increase_saturation",
            Self::DecreaseSaturation => "decrease_saturation",
            Self::Color => "color",
            Self::Lightness => "lightness",
            Self::IncreaseLightness => "increase_lightness",
            Self::DecreaseLightness => "decrease_lightness",
            Self::ReorientedNormalMapCombine => "reoriented_normal_map_combine",
            Self::TangentNormalmap => "tangent_normalmap",
        }
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Over => "Normal",
            Self::Addition => "Addition (Linear Dodge)",
            Self::Subtract => "Subtract",
            Self::InverseSubtract => "Inverse Subtract",
            Self::Multiply => "Multiply",
            Self::Divide => "Divide",
            Self::Darken => "Darken",
            Self::ColorBurn => "Color Burn",
            Self::LinearBurn => "Linear Burn",
            Self::GammaDark => "Gamma Dark",
            Self::DarkerColor => "Darker Color",
            Self::Lighten => "Lighten",
            Self::Screen => "Screen",
            Self::ColorDodge => "Color Dodge",
            Self::GammaLight => "Gamma Light",
            Self::LighterColor => "Lighter Color",
            Self::Overlay => "Overlay",
            Self::SoftLight => "Soft Light (Photoshop)",
            Self::SoftLightSvg => "Soft Light (SVG)",
            Self::SoftLightPegtopDelphi => "Soft Light (Pegtop-Delphi)",
            Self::HardLight => "Hard Light",
            Self::HardOverlay => "Hard Overlay",
            Self::VividLight => "Vivid Light",
            Self::LinearLight => "Linear Light",
            Self::PinLight => "Pin Light",
            Self::HardMix => "Hard Mix",
            Self::HardMixPhotoshop => "Hard Mix (Photoshop)",
            Self::GrainMerge => "Grain Merge",
            Self::GrainExtract => "Grain Extract",
            Self::GeometricMean => "Geometric Mean",
            Self::Allanon => "Allanon",
            Self::Parallel => "Parallel",
            Self::Interpolate => "Interpolate",
            Self::PenumbraA => "Penumbra A",
            Self::PenumbraB => "Penumbra B",
            Self::Difference => "Difference",
            Self::Exclusion => "Exclusion",
            Self::Equivalence => "Equivalence",
            Self::Negation => "Negation",
            Self::Phoenix => "Phoenix",
            Self::SignedDifference => "Signed Difference",
            Self::ArcTangent => "Arc Tangent",
            Self::AdditiveSubtractive => "Additive-Subtractive",
            Self::Glow => "Glow",
            Self::Reflect => "Reflect",
            Self::Heat => "Heat",
            Self::Freeze => "Freeze",
            Self::Helow => "Heat-Glow",
            Self::Frect => "Freeze-Reflect",
            Self::Gleat => "Glow-Heat",
            Self::Reeze => "Reflect-Freeze",
            Self::Hue => "Hue",
            Self::Saturation => "Saturation",
            Self::IncreaseSaturation => "Increase Saturation",
            Self::DecreaseSaturation => "Decrease Saturation",
            Self::Color => "Color",
            Self::Lightness => "Lightness",
            Self::IncreaseLightness => "Increase Lightness",
            Self::DecreaseLightness => "Decrease Lightness",
            Self::ReorientedNormalMapCombine => "Combine Normal Map",
            Self::TangentNormalmap => "Tangent Normalmap",
        }
    }

    /// Category for UI grouping.
    pub fn category(self) -> &'static str {
        match self {
            Self::Over => "Normal",
            Self::Addition | Self::Subtract | Self::InverseSubtract | Self::Multiply | Self::Divide => {
                "Arithmetic"
            }
            Self::Darken | Self::ColorBurn | Self::LinearBurn | Self::GammaDark | Self::DarkerColor => {
                "Darken"
            }
            Self::Lighten
            | Self::Screen
            | Self::ColorDodge
            | Self::GammaLight
            | Self::LighterColor => "Lighten",
            Self::Overlay
            | Self::SoftLight
            | Self::SoftLightSvg
            | Self::SoftLightPegtopDelphi
            | Self::HardLight
            | Self::HardOverlay
            | Self::VividLight
            | Self::LinearLight
            | Self::PinLight
            | Self::HardMix
            | Self::HardMixPhotoshop
            | Self::GrainMerge
            | Self::GrainExtract
            | Self::GeometricMean
            | Self::Allanon
            | Self::Parallel
            | Self::Interpolate
            | Self::PenumbraA
            | Self::PenumbraB => "Mix",
            Self::Difference
            | Self::Exclusion
            | Self::Equivalence
            | Self::Negation
            | Self::Phoenix
            | Self::SignedDifference
            | Self::ArcTangent
            | Self::AdditiveSubtractive => "Negative",
            Self::Glow
            | Self::Reflect
            | Self::Heat
            | Self::Freeze
            | Self::Helow
            | Self::Frect
            | Self::Gleat
            | Self::Reeze => "Quadratic",
            Self::Hue
            | Self::Saturation
            | Self::IncreaseSaturation
            | Self::DecreaseSaturation
            | Self::Color
            | Self::Lightness
            | Self::IncreaseLightness
            | Self::DecreaseLightness => "HSX",
            Self::ReorientedNormalMapCombine | Self::TangentNormalmap => "Normal Map",
        }
    }

    /// Whether the mode works on each channel independently.
    ///
    /// Non-separable modes need the whole RGB triple.
    pub fn is_separable(self) -> bool {
        !matches!(
            self,
            Self::Hue
                | Self::Saturation
                | Self::IncreaseSaturation
                | Self::DecreaseSaturation
                | Self::Color
                | Self::Lightness
                | Self::IncreaseLightness
                | Self::DecreaseLightness
                | Self::DarkerColor
                | Self::LighterColor
                | Self::ReorientedNormalMapCombine
                | Self::TangentNormalmap
        )
    }
}

impl fmt::Display for BlendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
