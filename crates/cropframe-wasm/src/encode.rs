//! JPEG encoding bindings.
//!
//! ```typescript
//! import { encode_jpeg_from_image, export_filename } from '@cropframe/wasm';
//!
//! const bytes = encode_jpeg_from_image(output, 92);
//! const blob = new Blob([bytes], { type: 'image/jpeg' });
//! ```

use cropframe_core::encode;
use wasm_bindgen::prelude::*;

use crate::types::JsDecodedImage;

/// Encode packed RGB data as JPEG. `quality` is clamped to 1-100.
///
/// Fails if either dimension is zero or the data length is not
/// `width * height * 3`.
#[wasm_bindgen]
pub fn encode_jpeg(
    pixels: &[u8],
    width: u32,
    height: u32,
    quality: u8,
) -> Result<Vec<u8>, JsValue> {
    encode::encode_jpeg(pixels, width, height, quality)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode an image or rendered output as JPEG.
#[wasm_bindgen]
pub fn encode_jpeg_from_image(image: &JsDecodedImage, quality: u8) -> Result<Vec<u8>, JsValue> {
    encode_jpeg(&image.pixels(), image.width(), image.height(), quality)
}

/// File name used for downloads.
#[wasm_bindgen]
pub fn export_filename() -> String {
    encode::EXPORT_FILENAME.to_string()
}

/// Default export quality.
#[wasm_bindgen]
pub fn default_jpeg_quality() -> u8 {
    encode::DEFAULT_JPEG_QUALITY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_constants() {
        assert_eq!(export_filename(), "edited-image.jpg");
        assert_eq!(default_jpeg_quality(), 92);
    }

    #[test]
    fn test_encode_from_image() {
        let img = JsDecodedImage::new(8, 8, vec![128u8; 8 * 8 * 3]);
        let jpeg = encode_jpeg_from_image(&img, default_jpeg_quality()).unwrap();
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_encode_jpeg_basic() {
        let pixels = vec![128u8; 100 * 100 * 3];
        let jpeg = encode_jpeg(&pixels, 100, 100, 90).unwrap();
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
    }

    #[wasm_bindgen_test]
    fn test_encode_jpeg_invalid_dimensions() {
        assert!(encode_jpeg(&[128u8; 100], 0, 100, 90).is_err());
    }

    #[wasm_bindgen_test]
    fn test_encode_jpeg_invalid_pixel_data() {
        let pixels = vec![128u8; 50 * 50 * 3];
        assert!(encode_jpeg(&pixels, 100, 100, 90).is_err());
    }
}
