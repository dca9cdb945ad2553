//! Global color adjustments: brightness, contrast and saturation.
//!
//! All three parameters are percentages where 100 is the identity. They follow
//! the CSS filter functions `brightness()`, `contrast()` and `saturate()` and
//! are applied in that order, each step clamping to the displayable range:
//!
//! 1. Brightness: `v * b`
//! 2. Contrast: `(v - 0.5) * c + 0.5`
//! 3. Saturation: luminance-preserving saturate matrix with factor `s`
//!
//! Brightness and contrast act on each channel independently, so they are
//! folded into one 256-entry lookup table. Saturation mixes channels and is
//! applied as a 3x3 matrix afterwards.

use crate::AdjustmentParams;

/// ITU-R BT.709 luminance weights.
const LUMINANCE_R: f32 = 0.2126;
const LUMINANCE_G: f32 = 0.7152;
const LUMINANCE_B: f32 = 0.0722;

/// Per-render color transform built once from [`AdjustmentParams`].
#[derive(Debug, Clone)]
pub struct ColorTransform {
    /// Brightness then contrast, indexed by the 8-bit input level.
    tone: [f32; 256],
    /// Saturate matrix, `None` when saturation is at identity.
    saturation: Option<[[f32; 3]; 3]>,
    identity: bool,
}

impl ColorTransform {
    /// Build the transform for the given parameters.
    pub fn new(params: &AdjustmentParams) -> Self {
        let params = params.clamped();
        let brightness = params.brightness as f32 / 100.0;
        let contrast = params.contrast as f32 / 100.0;

        let mut tone = [0.0f32; 256];
        for (level, out) in tone.iter_mut().enumerate() {
            let v = (level as f32 / 255.0 * brightness).clamp(0.0, 1.0);
            *out = ((v - 0.5) * contrast + 0.5).clamp(0.0, 1.0);
        }

        let saturation = (params.saturation != AdjustmentParams::IDENTITY)
            .then(|| saturate_matrix(params.saturation as f32 / 100.0));

        Self {
            tone,
            saturation,
            identity: params.is_identity(),
        }
    }

    /// True when applying this transform leaves every pixel unchanged.
    pub fn is_identity(&self) -> bool {
        self.identity
    }

    /// Transform a single RGB pixel.
    #[inline]
    pub fn apply(&self, px: [u8; 3]) -> [u8; 3] {
        if self.identity {
            return px;
        }

        let rgb = [
            self.tone[px[0] as usize],
            self.tone[px[1] as usize],
            self.tone[px[2] as usize],
        ];

        let rgb = match &self.saturation {
            Some(m) => {
                let mut out = [0.0f32; 3];
                for (row, value) in m.iter().zip(out.iter_mut()) {
                    *value = row[0] * rgb[0] + row[1] * rgb[1] + row[2] * rgb[2];
                }
                out
            }
            None => rgb,
        };

        [to_u8(rgb[0]), to_u8(rgb[1]), to_u8(rgb[2])]
    }
}

/// Apply the adjustments to RGB pixel data in place.
///
/// # Arguments
/// * `pixels` - RGB pixel data (3 bytes per pixel, row-major order)
/// * `params` - The adjustment values to apply
pub fn apply_adjustments(pixels: &mut [u8], params: &AdjustmentParams) {
    let transform = ColorTransform::new(params);
    if transform.is_identity() {
        return;
    }

    for chunk in pixels.chunks_exact_mut(3) {
        let out = transform.apply([chunk[0], chunk[1], chunk[2]]);
        chunk.copy_from_slice(&out);
    }
}

/// CSS `saturate()` filter matrix with BT.709 weights.
fn saturate_matrix(s: f32) -> [[f32; 3]; 3] {
    let (lr, lg, lb) = (LUMINANCE_R, LUMINANCE_G, LUMINANCE_B);
    [
        [lr + (1.0 - lr) * s, lg - lg * s, lb - lb * s],
        [lr - lr * s, lg + (1.0 - lg) * s, lb - lb * s],
        [lr - lr * s, lg - lg * s, lb + (1.0 - lb) * s],
    ]
}

#[inline]
fn to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}
