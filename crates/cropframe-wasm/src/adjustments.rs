//! Brightness / contrast / saturation bindings.

use cropframe_core::AdjustmentParams;
use wasm_bindgen::prelude::*;

use crate::types::JsDecodedImage;

/// Adjustment sliders for JavaScript. Values are percentages (0-200, 100 =
/// unchanged) and are clamped on assignment.
#[wasm_bindgen]
#[derive(Debug, Clone, Default)]
pub struct JsAdjustments {
    inner: AdjustmentParams,
}

#[wasm_bindgen]
impl JsAdjustments {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    #[wasm_bindgen(getter)]
    pub fn brightness(&self) -> u16 {
        self.inner.brightness
    }

    #[wasm_bindgen(setter)]
    pub fn set_brightness(&mut self, value: u16) {
        self.inner.brightness = value.min(AdjustmentParams::MAX);
    }

    #[wasm_bindgen(getter)]
    pub fn contrast(&self) -> u16 {
        self.inner.contrast
    }

    #[wasm_bindgen(setter)]
    pub fn set_contrast(&mut self, value: u16) {
        self.inner.contrast = value.min(AdjustmentParams::MAX);
    }

    #[wasm_bindgen(getter)]
    pub fn saturation(&self) -> u16 {
        self.inner.saturation
    }

    #[wasm_bindgen(setter)]
    pub fn set_saturation(&mut self, value: u16) {
        self.inner.saturation = value.min(AdjustmentParams::MAX);
    }

    pub fn is_identity(&self) -> bool {
        self.inner.is_identity()
    }

    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Missing fields default to 100.
    pub fn from_json(value: JsValue) -> Result<JsAdjustments, JsValue> {
        let inner: AdjustmentParams =
            serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self {
            inner: inner.clamped(),
        })
    }
}

impl JsAdjustments {
    pub(crate) fn inner(&self) -> &AdjustmentParams {
        &self.inner
    }
}

/// Apply the adjustments to a copy of `image`.
#[wasm_bindgen]
pub fn apply_adjustments(image: &JsDecodedImage, adjustments: &JsAdjustments) -> JsDecodedImage {
    let mut pixels = image.pixels();
    cropframe_core::apply_adjustments(&mut pixels, adjustments.inner());
    JsDecodedImage::new(image.width(), image.height(), pixels)
}
