//! Source-over compositing of same-canvas layers.
//!
//! Layers are stacked in the order they are added: each new layer is blended
//! over the accumulated canvas with straight (non-premultiplied) alpha,
//! `out_a = src_a + dst_a * (1 - src_a)` and
//! `out_c = (src_c * src_a + dst_c * dst_a * (1 - src_a)) / out_a`.
//! Results are rounded to the nearest 8-bit value, so an opaque destination
//! stays opaque under any source.

use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};

use crate::error::{Error, Result};

/// Accumulates layers over a base canvas.
#[derive(Debug, Clone)]
pub struct Compositor {
    canvas: RgbaImage,
    layers: usize,
}

impl Compositor {
    /// Start from `base` as the bottom layer.
    pub fn new(base: RgbaImage) -> Self {
        Self {
            canvas: base,
            layers: 1,
        }
    }

    pub fn layer_count(&self) -> usize {
        self.layers
    }

    /// Blend `layer` over the current canvas. `source` only names the layer
    /// in the error when its canvas size differs from the base.
    pub fn add_layer(&mut self, layer: &RgbaImage, source: &Path) -> Result<()> {
        if layer.dimensions() != self.canvas.dimensions() {
            return Err(Error::CanvasMismatch {
                path: source.to_path_buf(),
                expected: self.canvas.dimensions(),
                found: layer.dimensions(),
            });
        }
        for (dst, src) in self.canvas.pixels_mut().zip(layer.pixels()) {
            *dst = source_over(*dst, *src);
        }
        self.layers += 1;
        Ok(())
    }

    pub fn finish(self) -> RgbaImage {
        self.canvas
    }
}

/// Blend one straight-alpha pixel `src` over `dst`.
pub fn source_over(dst: Rgba<u8>, src: Rgba<u8>) -> Rgba<u8> {
    let src_a = src[3];
    let dst_a = dst[3];
    if src_a == 0 {
        return dst;
    }
    if src_a == u8::MAX || dst_a == 0 {
        return src;
    }

    let sa = f32::from(src_a) / 255.0;
    let da = f32::from(dst_a) / 255.0;
    let dst_weight = da * (1.0 - sa);
    let out_a = sa + dst_weight;

    let mut out = [0u8; 4];
    for c in 0..3 {
        let v = (f32::from(src[c]) * sa + f32::from(dst[c]) * dst_weight) / out_a;
        out[c] = v.round().clamp(0.0, 255.0) as u8;
    }
    out[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
    Rgba(out)
}

/// Composite in-memory layers bottom to top. Returns `Ok(None)` for an empty
/// sequence.
pub fn composite_layers<'a, I>(layers: I) -> Result<Option<RgbaImage>>
where
    I: IntoIterator<Item = &'a RgbaImage>,
{
    let mut iter = layers.into_iter();
    let Some(first) = iter.next() else {
        return Ok(None);
    };

    let mut compositor = Compositor::new(first.clone());
    for (i, layer) in iter.enumerate() {
        let label = PathBuf::from(format!("layer {}", i + 1));
        compositor.add_layer(layer, &label)?;
    }
    Ok(Some(compositor.finish()))
}
