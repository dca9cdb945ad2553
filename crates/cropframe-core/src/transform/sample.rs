//! Resampling a source rectangle onto an output grid of any size.
//!
//! Output pixel `(dx, dy)` takes its value from the source point at the same
//! relative position inside the rectangle, measured between pixel centers:
//!
//! ```text
//! src_x = rect.x + (dx + 0.5) * rect.width / out_width - 0.5
//! ```
//!
//! Sample positions outside the image are clamped to the nearest edge pixel,
//! so borders never bleed in black.

use serde::{Deserialize, Serialize};

use crate::adjustments::ColorTransform;
use crate::decode::DecodedImage;
use crate::region::SourceRect;

/// Interpolation filter used when the output is not pixel-aligned with the
/// source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterpolationFilter {
    /// Closest source pixel. Crisp, blocky when upscaling.
    Nearest,
    /// Weighted average of the four surrounding pixels.
    #[default]
    Bilinear,
}

/// Resample `rect` of `image` into an `out_width` x `out_height` RGB buffer,
/// applying `color` to every sampled pixel.
///
/// Returns an empty buffer if the output is empty, or if the image is empty or
/// its pixel data does not match its dimensions.
pub fn resample(
    image: &DecodedImage,
    rect: SourceRect,
    out_width: u32,
    out_height: u32,
    filter: InterpolationFilter,
    color: &ColorTransform,
) -> Vec<u8> {
    if image.is_empty() || !image.has_valid_buffer() || out_width == 0 || out_height == 0 {
        return Vec::new();
    }

    let scale_x = rect.width / out_width as f64;
    let scale_y = rect.height / out_height as f64;

    let mut output = Vec::with_capacity(out_width as usize * out_height as usize * 3);
    for dy in 0..out_height {
        let sy = rect.y + (dy as f64 + 0.5) * scale_y - 0.5;
        for dx in 0..out_width {
            let sx = rect.x + (dx as f64 + 0.5) * scale_x - 0.5;
            let px = match filter {
                InterpolationFilter::Nearest => sample_nearest(image, sx, sy),
                InterpolationFilter::Bilinear => sample_bilinear(image, sx, sy),
            };
            output.extend_from_slice(&color.apply(px));
        }
    }
    output
}

#[inline]
fn get_pixel_f32(image: &DecodedImage, px: usize, py: usize) -> [f32; 3] {
    let idx = (py * image.width as usize + px) * 3;
    [
        image.pixels[idx] as f32,
        image.pixels[idx + 1] as f32,
        image.pixels[idx + 2] as f32,
    ]
}

fn clamp_index(v: f64, len: u32) -> usize {
    let max = (len - 1) as f64;
    if v.is_nan() {
        0
    } else {
        v.clamp(0.0, max) as usize
    }
}

fn sample_nearest(image: &DecodedImage, x: f64, y: f64) -> [u8; 3] {
    let px = clamp_index(x.round(), image.width);
    let py = clamp_index(y.round(), image.height);
    let idx = (py * image.width as usize + px) * 3;
    [image.pixels[idx], image.pixels[idx + 1], image.pixels[idx + 2]]
}

fn sample_bilinear(image: &DecodedImage, x: f64, y: f64) -> [u8; 3] {
    let x = x.clamp(0.0, (image.width - 1) as f64);
    let y = y.clamp(0.0, (image.height - 1) as f64);

    let x0 = clamp_index(x.floor(), image.width);
    let y0 = clamp_index(y.floor(), image.height);
    let x1 = (x0 + 1).min(image.width as usize - 1);
    let y1 = (y0 + 1).min(image.height as usize - 1);

    let fx = (x - x0 as f64) as f32;
    let fy = (y - y0 as f64) as f32;

    let p00 = get_pixel_f32(image, x0, y0);
    let p10 = get_pixel_f32(image, x1, y0);
    let p01 = get_pixel_f32(image, x0, y1);
    let p11 = get_pixel_f32(image, x1, y1);

    let mut result = [0u8; 3];
    for i in 0..3 {
        let top = p00[i] + (p10[i] - p00[i]) * fx;
        let bottom = p01[i] + (p11[i] - p01[i]) * fx;
        result[i] = (top + (bottom - top) * fy).clamp(0.0, 255.0).round() as u8;
    }
    result
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::AdjustmentParams;
    use proptest::prelude::*;

    proptest! {
        /// The buffer always has exactly `out_width * out_height` pixels.
        #[test]
        fn prop_output_length(
            (w, h) in (1u32..=20, 1u32..=20),
            (ow, oh) in (1u32..=30, 1u32..=30),
            (x, y, rw, rh) in (-5.0f64..25.0, -5.0f64..25.0, 0.0f64..30.0, 0.0f64..30.0),
            nearest in any::<bool>(),
        ) {
            let img = DecodedImage::filled(w, h, [1, 2, 3]);
            let filter = if nearest {
                InterpolationFilter::Nearest
            } else {
                InterpolationFilter::Bilinear
            };
            let color = ColorTransform::new(&AdjustmentParams::default());
            let out = resample(&img, SourceRect::new(x, y, rw, rh), ow, oh, filter, &color);
            prop_assert_eq!(out.len(), (ow * oh * 3) as usize);
        }

        /// Resampling a flat image yields the same flat color.
        #[test]
        fn prop_flat_image_stays_flat(
            rgb in any::<[u8; 3]>(),
            (ow, oh) in (1u32..=16, 1u32..=16),
        ) {
            let img = DecodedImage::filled(5, 7, rgb);
            let color = ColorTransform::new(&AdjustmentParams::default());
            let rect = SourceRect::full(5, 7);
            let out = resample(&img, rect, ow, oh, InterpolationFilter::Bilinear, &color);
            prop_assert!(out.chunks_exact(3).all(|p| p == rgb));
        }
    }
}
