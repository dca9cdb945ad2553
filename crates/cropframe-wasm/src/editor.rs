//! Stateful editor binding.
//!
//! ```typescript
//! const editor = new JsEditor({ aspect: 16 / 9 });
//! editor.load_bytes(bytes, container.clientWidth, container.clientHeight);
//!
//! editor.begin_drag();
//! editor.drag_resize('se', dx, dy);
//! editor.commit_drag();
//!
//! const output = editor.output();          // JsDecodedImage | undefined
//! const jpeg = editor.export_jpeg();       // Uint8Array
//! ```

use cropframe_core::config::EditorConfig;
use cropframe_core::decode;
use cropframe_core::region::{AspectRatio, CropInteraction, DisplayGeometry, Handle};
use cropframe_core::render::RenderOutcome;
use cropframe_core::session::EditorSession;
use wasm_bindgen::prelude::*;

use crate::adjustments::JsAdjustments;
use crate::console_warn;
use crate::text::JsTextOverlay;
use crate::types::JsDecodedImage;

/// One editing session: an image, its crop, adjustments and caption.
///
/// Every mutator re-renders and returns `true` when a new output buffer was
/// produced.
#[wasm_bindgen]
pub struct JsEditor {
    session: EditorSession,
}

#[wasm_bindgen]
impl JsEditor {
    /// Create an editor. `config` is an optional partial `EditorConfig`
    /// object; omitted fields keep their defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<JsEditor, JsValue> {
        let config: EditorConfig = if config.is_undefined() || config.is_null() {
            EditorConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config).map_err(|e| JsValue::from_str(&e.to_string()))?
        };
        Ok(Self::with_config(config))
    }

    /// Use an already decoded image laid out at `display_width x
    /// display_height`.
    pub fn load_image(
        &mut self,
        image: &JsDecodedImage,
        display_width: f64,
        display_height: f64,
    ) -> bool {
        let geometry = DisplayGeometry::new(display_width, display_height);
        rendered(self.session.load_image(image.to_decoded(), geometry))
    }

    /// Decode `bytes` and display them contained in a `max_width x max_height`
    /// box.
    pub fn load_bytes(
        &mut self,
        bytes: &[u8],
        max_width: f64,
        max_height: f64,
    ) -> Result<bool, JsValue> {
        let image = decode::decode_image(bytes).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let geometry = DisplayGeometry::fit(image.width, image.height, max_width, max_height);
        Ok(rendered(self.session.load_image(image, geometry)))
    }

    /// Same as `load_bytes` for a `data:` URL.
    pub fn load_data_url(
        &mut self,
        url: &str,
        max_width: f64,
        max_height: f64,
    ) -> Result<bool, JsValue> {
        let image = decode::decode_data_url(url).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let geometry = DisplayGeometry::fit(image.width, image.height, max_width, max_height);
        Ok(rendered(self.session.load_image(image, geometry)))
    }

    #[wasm_bindgen(getter)]
    pub fn has_image(&self) -> bool {
        self.session.image().is_some()
    }

    /// `[width, height]` the image is displayed at.
    pub fn display_size(&self) -> Vec<f64> {
        let geometry = self.session.display_geometry();
        vec![geometry.width, geometry.height]
    }

    pub fn set_display_size(&mut self, width: f64, height: f64) -> bool {
        let geometry = DisplayGeometry::new(width, height);
        rendered(self.session.set_display_geometry(geometry))
    }

    /// Lock the crop to `ratio` (width / height), or unlock with `undefined`.
    pub fn set_aspect(&mut self, ratio: Option<f64>) -> bool {
        let aspect = match ratio {
            Some(value) => match AspectRatio::new(value) {
                Some(aspect) => Some(aspect),
                None => {
                    console_warn(&format!("Invalid aspect ratio {value}; using free-form"));
                    None
                }
            },
            None => None,
        };
        rendered(self.session.set_aspect(aspect))
    }

    pub fn begin_drag(&mut self) {
        self.session.begin_crop_drag();
    }

    pub fn drag_move(&mut self, dx: f64, dy: f64) -> bool {
        rendered(self.session.drag_crop(CropInteraction::Move { dx, dy }))
    }

    /// Drag a handle: `"n"`, `"s"`, `"e"`, `"w"`, `"ne"`, `"nw"`, `"se"` or
    /// `"sw"`.
    pub fn drag_resize(&mut self, handle: &str, dx: f64, dy: f64) -> Result<bool, JsValue> {
        let handle = handle
            .parse::<Handle>()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let interaction = CropInteraction::Resize { handle, dx, dy };
        Ok(rendered(self.session.drag_crop(interaction)))
    }

    /// Draw a new rectangle from `(x, y)` in display pixels.
    pub fn drag_select(&mut self, x: f64, y: f64, width: f64, height: f64) -> bool {
        rendered(self.session.drag_crop(CropInteraction::Select {
            x,
            y,
            width,
            height,
        }))
    }

    pub fn commit_drag(&mut self) -> bool {
        rendered(self.session.commit_crop())
    }

    pub fn clear_crop(&mut self) -> bool {
        rendered(self.session.clear_crop())
    }

    /// Current region as `{ unit, x, y, width, height }`, or `undefined`.
    pub fn crop_region(&self) -> Result<JsValue, JsValue> {
        match self.session.crop_region() {
            Some(region) => {
                serde_wasm_bindgen::to_value(&region).map_err(|e| JsValue::from_str(&e.to_string()))
            }
            None => Ok(JsValue::UNDEFINED),
        }
    }

    /// Current crop in source pixels as `[x, y, width, height]`.
    pub fn source_rect(&self) -> Option<Vec<f64>> {
        self.session
            .source_rect()
            .map(|rect| vec![rect.x, rect.y, rect.width, rect.height])
    }

    pub fn set_adjustments(&mut self, adjustments: &JsAdjustments) -> bool {
        rendered(self.session.set_adjustments(*adjustments.inner()))
    }

    pub fn set_text(&mut self, overlay: &JsTextOverlay) -> bool {
        rendered(self.session.set_text_overlay(overlay.inner().clone()))
    }

    /// Copy of the latest render, or `undefined` before the first one.
    pub fn output(&self) -> Option<JsDecodedImage> {
        self.session
            .output()
            .cloned()
            .map(JsDecodedImage::from_output)
    }

    /// Whether the download button should be enabled.
    #[wasm_bindgen(getter)]
    pub fn can_export(&self) -> bool {
        self.session.can_export()
    }

    /// Encode the latest render as JPEG.
    pub fn export_jpeg(&self) -> Result<Vec<u8>, JsValue> {
        self.session
            .export()
            .map(|file| file.bytes)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Encode the latest render as `{ filename, mimeType, bytes }`.
    pub fn export_file(&self) -> Result<js_sys::Object, JsValue> {
        let file = self
            .session
            .export()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let object = js_sys::Object::new();
        js_sys::Reflect::set(&object, &"filename".into(), &file.filename.into())?;
        js_sys::Reflect::set(&object, &"mimeType".into(), &file.mime_type.into())?;
        js_sys::Reflect::set(
            &object,
            &"bytes".into(),
            &js_sys::Uint8Array::from(file.bytes.as_slice()).into(),
        )?;
        Ok(object)
    }

    #[wasm_bindgen(getter)]
    pub fn export_filename(&self) -> String {
        self.session.config().export_filename.clone()
    }
}

impl JsEditor {
    pub(crate) fn with_config(config: EditorConfig) -> Self {
        Self {
            session: EditorSession::new(config),
        }
    }
}

fn rendered(outcome: RenderOutcome) -> bool {
    outcome == RenderOutcome::Rendered
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_export_without_image_fails() {
        let editor = JsEditor::new(JsValue::UNDEFINED).unwrap();
        assert!(editor.export_jpeg().is_err());
    }

    #[wasm_bindgen_test]
    fn test_export_file_object() {
        let mut editor = JsEditor::new(JsValue::UNDEFINED).unwrap();
        let image = JsDecodedImage::new(32, 18, vec![80u8; 32 * 18 * 3]);
        editor.load_image(&image, 32.0, 18.0);

        let file = editor.export_file().unwrap();
        let name = js_sys::Reflect::get(&file, &"filename".into()).unwrap();
        assert_eq!(name.as_string().as_deref(), Some("edited-image.jpg"));
        let mime = js_sys::Reflect::get(&file, &"mimeType".into()).unwrap();
        assert_eq!(mime.as_string().as_deref(), Some("image/jpeg"));
    }

    #[wasm_bindgen_test]
    fn test_config_from_js_object() {
        let config = js_sys::Object::new();
        js_sys::Reflect::set(&config, &"jpeg_quality".into(), &JsValue::from(70)).unwrap();
        let editor = JsEditor::new(config.into()).unwrap();
        assert_eq!(editor.export_filename(), "edited-image.jpg");
    }

    #[wasm_bindgen_test]
    fn test_unknown_handle_is_error() {
        let mut editor = JsEditor::new(JsValue::NULL).unwrap();
        assert!(editor.drag_resize("up", 1.0, 1.0).is_err());
    }
}
