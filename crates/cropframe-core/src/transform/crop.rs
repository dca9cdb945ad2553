//! Whole-pixel cropping.
//!
//! Used when the output is rendered at source resolution: the crop rectangle
//! maps one-to-one onto output pixels, so rows are copied directly.

use crate::decode::DecodedImage;
use crate::region::PixelRect;

/// Copy the pixels inside `rect` out of `image`.
///
/// The rectangle is clamped to the image. An empty or fully outside
/// rectangle yields an empty image.
///
/// # Example
///
/// ```
/// use cropframe_core::decode::DecodedImage;
/// use cropframe_core::region::PixelRect;
/// use cropframe_core::transform::crop_pixels;
///
/// let image = DecodedImage::filled(100, 100, [128, 128, 128]);
/// let cropped = crop_pixels(&image, PixelRect { x: 25, y: 25, width: 50, height: 50 });
/// assert_eq!(cropped.dimensions(), (50, 50));
/// ```
pub fn crop_pixels(image: &DecodedImage, rect: PixelRect) -> DecodedImage {
    let rect = clamp_rect(rect, image.width, image.height);
    if rect.is_empty() || !image.has_valid_buffer() {
        return DecodedImage::new(0, 0, Vec::new());
    }
    if rect.x == 0 && rect.y == 0 && rect.width == image.width && rect.height == image.height {
        return image.clone();
    }

    let src_stride = image.width as usize * 3;
    let row_bytes = rect.width as usize * 3;
    let mut pixels = Vec::with_capacity(row_bytes * rect.height as usize);

    for y in rect.y..rect.y + rect.height {
        let start = y as usize * src_stride + rect.x as usize * 3;
        pixels.extend_from_slice(&image.pixels[start..start + row_bytes]);
    }

    DecodedImage::new(rect.width, rect.height, pixels)
}

fn clamp_rect(rect: PixelRect, width: u32, height: u32) -> PixelRect {
    let x = rect.x.min(width);
    let y = rect.y.min(height);
    PixelRect {
        x,
        y,
        width: rect.width.min(width - x),
        height: rect.height.min(height - y),
    }
}
