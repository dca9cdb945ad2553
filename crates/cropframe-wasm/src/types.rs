//! WASM-compatible wrapper types for image data.
//!
//! Source images and rendered buffers share one JavaScript shape: width,
//! height and packed RGB bytes.

use cropframe_core::decode::DecodedImage;
use cropframe_core::render::OutputBuffer;
use wasm_bindgen::prelude::*;

/// An RGB8 image held in WASM memory.
///
/// `pixels()` copies the data out as a `Uint8Array`; keep the image on the
/// WASM side when it is only passed back into other bindings.
#[wasm_bindgen]
pub struct JsDecodedImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsDecodedImage {
    /// Create an image from dimensions and packed RGB data.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsDecodedImage {
        JsDecodedImage {
            width,
            height,
            pixels,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes in the pixel buffer (`width * height * 3`).
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Copy of the RGB pixel data.
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Copy of the pixel data expanded to RGBA, ready for `new ImageData(...)`.
    pub fn rgba_pixels(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len() / 3 * 4);
        for px in self.pixels.chunks_exact(3) {
            out.extend_from_slice(&[px[0], px[1], px[2], 255]);
        }
        out
    }

    /// Release WASM memory now instead of waiting for the finalizer.
    pub fn free(self) {}
}

impl JsDecodedImage {
    pub(crate) fn from_decoded(img: DecodedImage) -> Self {
        Self {
            width: img.width,
            height: img.height,
            pixels: img.pixels,
        }
    }

    pub(crate) fn from_output(buffer: OutputBuffer) -> Self {
        Self {
            width: buffer.width,
            height: buffer.height,
            pixels: buffer.pixels,
        }
    }

    /// Clone into a core image for functions that take ownership.
    pub(crate) fn to_decoded(&self) -> DecodedImage {
        DecodedImage {
            width: self.width,
            height: self.height,
            pixels: self.pixels.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_decoded_image_creation() {
        let img = JsDecodedImage::new(100, 50, vec![0u8; 100 * 50 * 3]);
        assert_eq!(img.width(), 100);
        assert_eq!(img.height(), 50);
        assert_eq!(img.byte_length(), 15000);
    }

    #[test]
    fn test_rgba_pixels() {
        let img = JsDecodedImage::new(2, 1, vec![255, 128, 64, 32, 16, 8]);
        assert_eq!(img.rgba_pixels(), vec![255, 128, 64, 255, 32, 16, 8, 255]);
    }

    #[test]
    fn test_core_conversions() {
        let decoded = DecodedImage::filled(20, 10, [1, 2, 3]);
        let js_img = JsDecodedImage::from_decoded(decoded.clone());
        assert_eq!(js_img.to_decoded(), decoded);

        let buffer = OutputBuffer::new(1, 1, vec![9, 8, 7]);
        let js_out = JsDecodedImage::from_output(buffer);
        assert_eq!(js_out.pixels(), vec![9, 8, 7]);
    }
}
