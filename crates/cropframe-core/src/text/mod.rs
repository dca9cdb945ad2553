//! Text overlay: content, styling, layout and drawing.
//!
//! The overlay is anchored horizontally at its center and vertically at the
//! top of the em box, both expressed as percentages of the output size.

mod color;
mod font;
mod raster;

pub use color::{ColorParseError, Rgb};
pub use font::{FontFamily, FontParseError, DEFAULT_FONT_SIZE};

use serde::{Deserialize, Serialize};

use raster::{draw_run, TextRun};

/// A single line of text drawn over the composited image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextOverlay {
    pub text: String,
    pub font: FontFamily,
    pub color: Rgb,
    /// Horizontal center, 0-100% of the output width.
    pub x_percent: f64,
    /// Top of the text box, 0-100% of the output height.
    pub y_percent: f64,
}

impl Default for TextOverlay {
    fn default() -> Self {
        Self {
            text: String::new(),
            font: FontFamily::Arial,
            color: Rgb::BLACK,
            x_percent: 50.0,
            y_percent: 50.0,
        }
    }
}

/// Pixel-space placement of an overlay on a specific output size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextLayout {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl TextLayout {
    pub fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }
}

impl TextOverlay {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Clamp positions to 0-100, mapping NaN to the center.
    pub fn clamped(&self) -> Self {
        let clamp = |v: f64| if v.is_nan() { 50.0 } else { v.clamp(0.0, 100.0) };
        Self {
            x_percent: clamp(self.x_percent),
            y_percent: clamp(self.y_percent),
            ..self.clone()
        }
    }

    /// Where the text lands on a `width` x `height` output at `size` pixels.
    pub fn layout(&self, width: u32, height: u32, size: f64) -> TextLayout {
        let pos = self.clamped();
        let text_width = self.font.measure(&self.text, size);
        TextLayout {
            left: pos.x_percent / 100.0 * width as f64 - text_width / 2.0,
            top: pos.y_percent / 100.0 * height as f64,
            width: text_width,
            height: size,
        }
    }

    /// Draw the overlay into a packed RGB buffer. Empty text is a no-op and
    /// anything outside the buffer is clipped.
    pub fn draw(&self, pixels: &mut [u8], width: u32, height: u32, size: f64) {
        if self.is_empty() {
            return;
        }
        let layout = self.layout(width, height, size);
        draw_run(
            pixels,
            width,
            height,
            &TextRun {
                text: &self.text,
                left: layout.left,
                top: layout.top,
                advance: self.font.advance(size),
                size,
                color: self.color,
            },
        );
    }
}
