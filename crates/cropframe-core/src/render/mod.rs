//! The compositor: source image + crop + adjustments + text -> output buffer.
//!
//! Rendering is a pure function of its inputs ([`composite`]). The stateful
//! [`Compositor`] keeps the last finished buffer around for export and drops
//! results that arrive after a newer render was requested.

mod compositor;

pub use compositor::{Compositor, RenderOutcome, RenderTicket};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::adjustments::{apply_adjustments, ColorTransform};
use crate::decode::DecodedImage;
use crate::region::SourceRect;
use crate::text::{TextOverlay, DEFAULT_FONT_SIZE};
use crate::transform::{crop_pixels, resample, InterpolationFilter};
use crate::AdjustmentParams;

/// A finished render: packed RGB8, row-major, no padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl OutputBuffer {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(pixels.len(), (width as usize) * (height as usize) * 3);
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 3;
        let px = self.pixels.get(idx..idx + 3)?;
        Some([px[0], px[1], px[2]])
    }

    pub fn to_rgb_image(&self) -> Option<image::RgbImage> {
        image::RgbImage::from_raw(self.width, self.height, self.pixels.clone())
    }
}

/// How big the output buffer is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum OutputSize {
    /// One output pixel per source pixel of the crop.
    #[default]
    Source,
    /// Resample the crop into a fixed size, e.g. the on-screen preview size.
    Exact { width: u32, height: u32 },
}

/// Render settings that are not part of the edit itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub output: OutputSize,
    pub filter: InterpolationFilter,
    /// Em size of the overlay text in output pixels.
    pub text_size: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            output: OutputSize::Source,
            filter: InterpolationFilter::Bilinear,
            text_size: DEFAULT_FONT_SIZE,
        }
    }
}

/// Render one frame.
///
/// Returns `None` when there is nothing to draw: an empty or malformed image,
/// an unset or zero-area crop, or a zero output size.
#[tracing::instrument(
    level = "trace",
    skip_all,
    fields(image_width = image.width, image_height = image.height)
)]
pub fn composite(
    image: &DecodedImage,
    crop: &SourceRect,
    adjustments: &AdjustmentParams,
    overlay: &TextOverlay,
    options: &RenderOptions,
) -> Option<OutputBuffer> {
    if image.is_empty() {
        debug!("render skipped: no image");
        return None;
    }
    if !image.has_valid_buffer() {
        debug!(
            width = image.width,
            height = image.height,
            bytes = image.pixels.len(),
            "render skipped: pixel buffer does not match dimensions"
        );
        return None;
    }

    let rect = crop.to_pixel_rect(image.width, image.height);
    if crop.is_empty() || rect.is_empty() {
        debug!(?crop, "render skipped: empty crop");
        return None;
    }

    let (width, height, mut pixels) = match options.output {
        OutputSize::Source => {
            let mut cropped = crop_pixels(image, rect);
            apply_adjustments(&mut cropped.pixels, adjustments);
            (cropped.width, cropped.height, cropped.pixels)
        }
        OutputSize::Exact { width, height } => {
            if width == 0 || height == 0 {
                debug!(width, height, "render skipped: zero output size");
                return None;
            }
            let color = ColorTransform::new(adjustments);
            let pixels = resample(image, *crop, width, height, options.filter, &color);
            (width, height, pixels)
        }
    };

    overlay.draw(&mut pixels, width, height, options.text_size);

    Some(OutputBuffer::new(width, height, pixels))
}
