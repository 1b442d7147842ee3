//! Integration tests for buffer compositing.
//!
//! Exercises pigment-blend's buffer entry points with layers resolved from
//! persisted ids, the way a document loader would.

use pigment_blend::{
    composite_channels, composite_rows, BlendError, BlendMode, BlendRegistry, HsxKind, LayerBlend,
};
use pigment_core::Rgb;

// ── Helpers ────────────────────────────────────────────────────

fn gradient_u8(pixels: usize) -> Vec<u8> {
    (0..pixels * 3).map(|i| ((i * 7) % 256) as u8).collect()
}

fn layer_from_json(json: &str) -> LayerBlend {
    serde_json::from_str(json).unwrap()
}

// ── Persistence ────────────────────────────────────────────────

#[test]
fn layer_settings_round_trip_through_json() {
    for mode in BlendMode::ALL {
        for model in HsxKind::ALL {
            let layer = LayerBlend::new(mode, model);
            let json = serde_json::to_string(&layer).unwrap();
            assert_eq!(layer_from_json(&json), layer);
        }
    }
}

#[test]
fn persisted_ids_resolve_through_registry() {
    let registry = BlendRegistry::global();
    for id in registry.ids() {
        let mode = registry.resolve(id).unwrap();
        let json = format!(r#"{{"mode":"{id}"}}"#);
        assert_eq!(layer_from_json(&json).mode, mode);
    }
}

#[test]
fn unknown_mode_is_reported() {
    let err = "vivid-darkness".parse::<BlendMode>().unwrap_err();
    assert!(matches!(err, BlendError::UnknownMode(ref id) if id == "vivid-darkness"));
    assert!(serde_json::from_str::<LayerBlend>(r#"{"mode":"vivid_darkness"}"#).is_err());
}

// ── Buffers ────────────────────────────────────────────────────

#[test]
fn over_copies_source() {
    let src = gradient_u8(10);
    let mut dst = vec![0u8; src.len()];
    composite_channels(LayerBlend::default(), &src, &mut dst).unwrap();
    assert_eq!(dst, src);
}

#[test]
fn buffer_matches_per_pixel_blend() {
    let src = gradient_u8(64);
    let base: Vec<u8> = gradient_u8(64).into_iter().rev().collect();

    for mode in [BlendMode::SoftLight, BlendMode::Color, BlendMode::PinLight, BlendMode::DarkerColor] {
        let layer = LayerBlend::new(mode, HsxKind::Hsl);
        let mut dst = base.clone();
        composite_rows(layer, 8, &src, &mut dst).unwrap();

        for ((s, d), out) in src.chunks(3).zip(base.chunks(3)).zip(dst.chunks(3)) {
            let expected = layer.blend(Rgb::new(s[0], s[1], s[2]), Rgb::new(d[0], d[1], d[2]));
            assert_eq!(out, expected.to_array(), "{mode:?}");
        }
    }
}

#[test]
fn sixteen_bit_and_float_buffers() {
    let src = [65535u16, 0, 32768];
    let mut dst = [0u16, 65535, 32768];
    composite_channels(LayerBlend::new(BlendMode::Difference, HsxKind::Hsy), &src, &mut dst)
        .unwrap();
    assert_eq!(dst, [65535, 65535, 0]);

    let src = [0.25f32, 0.5, 1.0, 0.0, 0.0, 0.0];
    let mut dst = [0.5f32; 6];
    composite_rows(LayerBlend::new(BlendMode::Addition, HsxKind::Hsy), 1, &src, &mut dst)
        .unwrap();
    assert_eq!(dst, [0.75, 1.0, 1.0, 0.5, 0.5, 0.5]);
}

#[test]
fn malformed_buffers_are_rejected_untouched() {
    let layer = LayerBlend::new(BlendMode::Multiply, HsxKind::Hsy);
    let mut dst = vec![9u8; 7];
    assert_eq!(
        composite_channels(layer, &[0u8; 7], &mut dst),
        Err(BlendError::NotRgb { len: 7 })
    );
    assert_eq!(dst, vec![9u8; 7]);

    let mut dst = vec![9u8; 6];
    assert_eq!(
        composite_rows(layer, 2, &[0u8; 3], &mut dst),
        Err(BlendError::LengthMismatch { expected: 6, got: 3 })
    );
    assert_eq!(dst, vec![9u8; 6]);
}
