//! Applying a blend mode to whole buffers.
//!
//! Buffers are interleaved RGB with no alpha. The result is written into
//! `dst`; `src` is the layer being blended on top.

use pigment_core::Channel;
use tracing::debug;

use crate::error::{BlendError, Result};
use crate::hsx::HsxKind;
use crate::registry::{BlendOp, LayerBlend};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

fn pixels<T: Channel>(buf: &[T]) -> Result<&[[T; 3]]> {
    bytemuck::try_cast_slice(buf).map_err(|_| BlendError::NotRgb { len: buf.len() })
}

fn pixels_mut<T: Channel>(buf: &mut [T]) -> Result<&mut [[T; 3]]> {
    let len = buf.len();
    bytemuck::try_cast_slice_mut(buf).map_err(|_| BlendError::NotRgb { len })
}

fn check_lengths<T>(src: &[T], dst: &[T]) -> Result<()> {
    if src.len() != dst.len() {
        return Err(BlendError::LengthMismatch {
            expected: dst.len(),
            got: src.len(),
        });
    }
    Ok(())
}

#[inline]
fn blend_pixels<T: Channel>(op: BlendOp<T>, model: HsxKind, src: &[[T; 3]], dst: &mut [[T; 3]]) {
    for (d, s) in dst.iter_mut().zip(src) {
        *d = op.apply_rgb(model, (*s).into(), (*d).into()).into();
    }
}

/// Blend `src` onto `dst` in place.
pub fn composite_channels<T: Channel>(layer: LayerBlend, src: &[T], dst: &mut [T]) -> Result<()> {
    check_lengths(src, dst)?;
    let src = pixels(src)?;
    let dst = pixels_mut(dst)?;

    debug!(mode = layer.mode.id(), pixels = dst.len(), "Compositing buffer");
    blend_pixels(layer.mode.operator::<T>(), layer.model, src, dst);
    Ok(())
}

/// Blend `src` onto `dst` row by row. `width` is in pixels.
///
/// With the `parallel` feature rows are spread over the rayon pool.
pub fn composite_rows<T: Channel>(
    layer: LayerBlend,
    width: usize,
    src: &[T],
    dst: &mut [T],
) -> Result<()> {
    check_lengths(src, dst)?;
    let src = pixels(src)?;
    let dst = pixels_mut(dst)?;

    if width == 0 || dst.len() % width != 0 {
        return Err(BlendError::RowMismatch {
            width,
            len: dst.len(),
        });
    }

    let op = layer.mode.operator::<T>();
    let model = layer.model;
    debug!(
        mode = layer.mode.id(),
        width,
        rows = dst.len() / width,
        "Compositing rows"
    );

    #[cfg(feature = "parallel")]
    dst.par_chunks_mut(width)
        .zip(src.par_chunks(width))
        .for_each(|(d, s)| blend_pixels(op, model, s, d));

    #[cfg(not(feature = "parallel"))]
    for (d, s) in dst.chunks_mut(width).zip(src.chunks(width)) {
        blend_pixels(op, model, s, d);
    }

    Ok(())
}
