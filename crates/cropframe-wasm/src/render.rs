//! Stateless compositing binding.

use cropframe_core::region::SourceRect;
use cropframe_core::render::{self, RenderOptions};
use wasm_bindgen::prelude::*;

use crate::adjustments::JsAdjustments;
use crate::text::JsTextOverlay;
use crate::types::JsDecodedImage;

/// Render the crop `(crop_x, crop_y, crop_width, crop_height)` of `image`
/// (source pixels) with the given adjustments and text.
///
/// Returns `undefined` when there is nothing to draw, e.g. a zero-area crop.
#[wasm_bindgen]
pub fn composite(
    image: &JsDecodedImage,
    crop_x: f64,
    crop_y: f64,
    crop_width: f64,
    crop_height: f64,
    adjustments: &JsAdjustments,
    overlay: &JsTextOverlay,
) -> Option<JsDecodedImage> {
    let crop = SourceRect::new(crop_x, crop_y, crop_width, crop_height);
    render::composite(
        &image.to_decoded(),
        &crop,
        adjustments.inner(),
        overlay.inner(),
        &RenderOptions::default(),
    )
    .map(JsDecodedImage::from_output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composite_crops() {
        let image = JsDecodedImage::new(10, 10, vec![50u8; 10 * 10 * 3]);
        let out = composite(
            &image,
            2.0,
            3.0,
            4.0,
            5.0,
            &JsAdjustments::new(),
            &JsTextOverlay::new(),
        )
        .unwrap();
        assert_eq!((out.width(), out.height()), (4, 5));
        assert!(out.pixels().iter().all(|&v| v == 50));
    }

    #[test]
    fn test_zero_area_is_undefined() {
        let image = JsDecodedImage::new(10, 10, vec![50u8; 10 * 10 * 3]);
        assert!(composite(
            &image,
            2.0,
            3.0,
            0.0,
            5.0,
            &JsAdjustments::new(),
            &JsTextOverlay::new()
        )
        .is_none());
    }

    #[test]
    fn test_short_buffer_is_undefined() {
        let image = JsDecodedImage::new(10, 10, vec![0u8; 30]);
        let out = composite(
            &image,
            2.0,
            2.0,
            5.0,
            5.0,
            &JsAdjustments::new(),
            &JsTextOverlay::new(),
        );
        assert!(out.is_none());
    }
}
