//! Text overlay bindings.
//!
//! Font and color arrive as strings from form controls. Unknown values fall
//! back to Arial and black, the way a canvas context ignores a bad `font` or
//! `fillStyle`, and a warning goes to the browser console.

use cropframe_core::text::{FontFamily, Rgb, TextOverlay};
use wasm_bindgen::prelude::*;

use crate::console_warn;

#[wasm_bindgen]
#[derive(Debug, Clone, Default)]
pub struct JsTextOverlay {
    inner: TextOverlay,
}

#[wasm_bindgen]
impl JsTextOverlay {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.inner.text.clone()
    }

    #[wasm_bindgen(setter)]
    pub fn set_text(&mut self, value: String) {
        self.inner.text = value;
    }

    /// CSS family name, e.g. `"Times New Roman"`.
    #[wasm_bindgen(getter)]
    pub fn font(&self) -> String {
        self.inner.font.css_name().to_string()
    }

    #[wasm_bindgen(setter)]
    pub fn set_font(&mut self, value: String) {
        self.inner.font = value.parse::<FontFamily>().unwrap_or_else(|e| {
            console_warn(&format!("{e}; using Arial"));
            FontFamily::Arial
        });
    }

    /// `#rrggbb`.
    #[wasm_bindgen(getter)]
    pub fn color(&self) -> String {
        self.inner.color.to_hex()
    }

    #[wasm_bindgen(setter)]
    pub fn set_color(&mut self, value: String) {
        self.inner.color = Rgb::from_hex(&value).unwrap_or_else(|e| {
            console_warn(&format!("{e}; using black"));
            Rgb::BLACK
        });
    }

    /// Horizontal center, 0-100% of the output width.
    #[wasm_bindgen(getter)]
    pub fn x(&self) -> f64 {
        self.inner.x_percent
    }

    #[wasm_bindgen(setter)]
    pub fn set_x(&mut self, value: f64) {
        self.inner.x_percent = value;
        self.inner = self.inner.clamped();
    }

    /// Top edge, 0-100% of the output height.
    #[wasm_bindgen(getter)]
    pub fn y(&self) -> f64 {
        self.inner.y_percent
    }

    #[wasm_bindgen(setter)]
    pub fn set_y(&mut self, value: f64) {
        self.inner.y_percent = value;
        self.inner = self.inner.clamped();
    }

    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn from_json(value: JsValue) -> Result<JsTextOverlay, JsValue> {
        let inner: TextOverlay =
            serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self {
            inner: inner.clamped(),
        })
    }
}

impl JsTextOverlay {
    pub(crate) fn inner(&self) -> &TextOverlay {
        &self.inner
    }
}

/// Names accepted by the `font` setter.
#[wasm_bindgen]
pub fn font_families() -> Vec<String> {
    FontFamily::ALL
        .iter()
        .map(|family| family.css_name().to_string())
        .collect()
}
