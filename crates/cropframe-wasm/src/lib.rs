//! Cropframe WASM - WebAssembly bindings for Cropframe
//!
//! Exposes `cropframe-core` to the browser front end.
//!
//! # Module Structure
//!
//! - `types` - `JsDecodedImage`, used for sources and rendered output
//! - `decode` - decoding from bytes or `data:` URLs
//! - `region` - default crop regions and display -> source conversion
//! - `adjustments` - brightness / contrast / saturation
//! - `text` - text overlay parameters
//! - `render` - stateless compositing
//! - `encode` - JPEG encoding for download
//! - `editor` - `JsEditor`, the stateful session used by the UI
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsEditor, JsAdjustments } from '@cropframe/wasm';
//!
//! await init();
//!
//! const editor = new JsEditor(undefined);
//! editor.load_bytes(new Uint8Array(await file.arrayBuffer()), 800, 600);
//!
//! const adj = new JsAdjustments();
//! adj.brightness = 120;
//! editor.set_adjustments(adj);
//! ```

use wasm_bindgen::prelude::*;

mod adjustments;
mod decode;
mod editor;
mod encode;
mod region;
mod render;
mod text;
mod types;

pub use adjustments::{apply_adjustments, JsAdjustments};
pub use decode::{decode_data_url, decode_image, image_orientation};
pub use editor::JsEditor;
pub use encode::{default_jpeg_quality, encode_jpeg, encode_jpeg_from_image, export_filename};
pub use region::{default_region, fit_display, to_source_space};
pub use render::composite;
pub use text::{font_families, JsTextOverlay};
pub use types::JsDecodedImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Log a warning to the browser console. A no-op off the web.
pub(crate) fn console_warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&JsValue::from_str(message));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }

    #[test]
    fn test_console_warn_off_web() {
        console_warn("ignored");
    }
}
