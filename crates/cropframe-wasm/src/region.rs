//! Crop region bindings.
//!
//! Regions cross the boundary as plain objects
//! `{ unit: "percent" | "pixels", x, y, width, height }`.

use cropframe_core::region::{self, AspectRatio, CropRegion, DisplayGeometry};
use wasm_bindgen::prelude::*;

/// Default crop region for an image displayed at `display_width x
/// display_height`. Pass `undefined` (or a non-positive ratio) for free-form.
#[wasm_bindgen]
pub fn default_region(
    display_width: f64,
    display_height: f64,
    aspect: Option<f64>,
) -> Result<JsValue, JsValue> {
    let geometry = DisplayGeometry::new(display_width, display_height);
    let region = region::default_region(&geometry, aspect.and_then(AspectRatio::new));
    serde_wasm_bindgen::to_value(&region).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Convert a display-space region to source pixels, returned as
/// `[x, y, width, height]`.
#[wasm_bindgen]
pub fn to_source_space(
    region: JsValue,
    natural_width: u32,
    natural_height: u32,
    display_width: f64,
    display_height: f64,
) -> Result<Vec<f64>, JsValue> {
    let region: CropRegion =
        serde_wasm_bindgen::from_value(region).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(source_rect_array(
        &region,
        natural_width,
        natural_height,
        DisplayGeometry::new(display_width, display_height),
    ))
}

/// Contained on-screen size for an image inside a `max_width x max_height`
/// box, as `[width, height]`. Never upscales.
#[wasm_bindgen]
pub fn fit_display(
    natural_width: u32,
    natural_height: u32,
    max_width: f64,
    max_height: f64,
) -> Vec<f64> {
    let geometry = DisplayGeometry::fit(natural_width, natural_height, max_width, max_height);
    vec![geometry.width, geometry.height]
}

pub(crate) fn source_rect_array(
    region: &CropRegion,
    natural_width: u32,
    natural_height: u32,
    geometry: DisplayGeometry,
) -> Vec<f64> {
    let rect = region::to_source_space(region, natural_width, natural_height, &geometry);
    vec![rect.x, rect.y, rect.width, rect.height]
}
