//! Image decoding bindings.
//!
//! # Example
//!
//! ```typescript
//! import { decode_image, decode_data_url } from '@cropframe/wasm';
//!
//! const image = decode_image(new Uint8Array(await file.arrayBuffer()));
//! // or, from a FileReader result:
//! const same = decode_data_url(reader.result as string);
//! ```

use cropframe_core::decode;
use wasm_bindgen::prelude::*;

use crate::types::JsDecodedImage;

/// Decode JPEG, PNG, GIF, WebP or BMP bytes to RGB, applying EXIF
/// orientation.
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsDecodedImage, JsValue> {
    decode::decode_image(bytes)
        .map(JsDecodedImage::from_decoded)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Decode a base64 `data:` URL as produced by `FileReader.readAsDataURL`.
#[wasm_bindgen]
pub fn decode_data_url(url: &str) -> Result<JsDecodedImage, JsValue> {
    decode::decode_data_url(url)
        .map(JsDecodedImage::from_decoded)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// EXIF orientation tag (1-8) of the file, 1 when absent.
#[wasm_bindgen]
pub fn image_orientation(bytes: &[u8]) -> u8 {
    decode::get_orientation(bytes) as u8
}
