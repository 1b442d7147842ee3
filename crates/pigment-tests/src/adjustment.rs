//! Integration tests combining blending, curves and gradient geometry.

use pigment_blend::{composite_channels, BlendMode, HsxKind, LayerBlend};
use pigment_core::{Affine2, GradientTransform, GradientUnits, Rect, Vec2};
use pigment_curves::{BitDepth, Curve, PerChannelConfig, PerChannelFilter};

// ── Helpers ────────────────────────────────────────────────────

/// Horizontal ramp across `width` pixels, sampled through a gradient
/// transform in bounding-box units.
fn ramp(width: usize, transform: &GradientTransform) -> Vec<u8> {
    let mut out = Vec::with_capacity(width * 3);
    for x in 0..width {
        let device = Vec2::new(x as f32 + 0.5, 0.5);
        let t = transform.map_back(device).x.clamp(0.0, 1.0);
        let v = (t * 255.0).round() as u8;
        out.extend_from_slice(&[v, v, v]);
    }
    out
}

// ── Gradient geometry ──────────────────────────────────────────

#[test]
fn bounding_box_ramp_spans_outline() {
    let outline = Rect::new(0.0, 0.0, 16.0, 1.0);
    let transform =
        GradientTransform::new(Affine2::IDENTITY, outline, GradientUnits::ObjectBoundingBox).unwrap();
    let pixels = ramp(16, &transform);
    assert_eq!(pixels.len(), 48);
    assert!(pixels[0] < 16);
    assert!(pixels[45] > 239);
    assert!(pixels.chunks(3).zip(pixels.chunks(3).skip(1)).all(|(a, b)| a[0] <= b[0]));
}

#[test]
fn handles_round_trip_through_device_space() {
    let shape = Affine2::from_scale_angle_translation(Vec2::new(3.0, 2.0), 0.3, Vec2::new(40.0, -8.0));
    let outline = Rect::new(5.0, 5.0, 20.0, 10.0);
    let transform = GradientTransform::new(shape, outline, GradientUnits::ObjectBoundingBox).unwrap();
    let handles = [Vec2::ZERO, Vec2::new(0.5, 0.5), Vec2::ONE];
    for (device, original) in transform.map_out_all(&handles).into_iter().zip(handles) {
        assert!((transform.map_back(device) - original).length() < 1e-4);
    }
}

// ── Curves after blending ──────────────────────────────────────

#[test]
fn curves_then_blend_pipeline() {
    let outline = Rect::new(0.0, 0.0, 8.0, 1.0);
    let transform =
        GradientTransform::new(Affine2::IDENTITY, outline, GradientUnits::ObjectBoundingBox).unwrap();
    let src = ramp(8, &transform);
    let mut dst = vec![128u8; src.len()];

    composite_channels(LayerBlend::new(BlendMode::Multiply, HsxKind::Hsy), &src, &mut dst).unwrap();
    // Multiply by mid grey at most halves the ramp.
    assert!(dst.iter().all(|&v| v <= 128));

    let invert = Curve::new([(0.0, 1.0), (1.0, 0.0)]).unwrap();
    let config = PerChannelConfig {
        curves: vec![invert.clone(), Curve::identity(), invert],
    };
    let filter = PerChannelFilter::new(config);
    let before = dst.clone();
    filter.apply_u8(&mut dst, 3).unwrap();
    assert!(filter.is_cached(BitDepth::U8));

    for (a, b) in before.chunks(3).zip(dst.chunks(3)) {
        assert_eq!(b[0], 255 - a[0]);
        assert_eq!(b[1], a[1]);
        assert_eq!(b[2], 255 - a[2]);
    }
}

#[test]
fn curve_config_loads_from_json() {
    let json = r#"{"curves":[[[0.0,0.0],[0.5,0.7],[1.0,1.0]]]}"#;
    let config: PerChannelConfig = serde_json::from_str(json).unwrap();
    assert!(config.is_compatible(1));
    let filter = PerChannelFilter::new(config);

    let mut px = [0u16, 32768, 65535];
    filter.apply_u16(&mut px, 1).unwrap();
    assert_eq!(px[0], 0);
    assert_eq!(px[2], 65535);
    // Curve lifts the mid-tones.
    assert!(px[1] > 40_000);
}
