//! Font families offered for the text overlay and their metrics.
//!
//! Glyph shapes come from the 8x8 bitmap font in [`super::raster`]; each
//! family only changes the horizontal advance, so text set in Courier is wider
//! than the same text in Times New Roman, as in the browser.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Em size the overlay text is rendered at, in output pixels.
pub const DEFAULT_FONT_SIZE: f64 = 20.0;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown font family: {0:?}")]
pub struct FontParseError(pub String);

/// The fixed set of font families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FontFamily {
    #[default]
    Arial,
    Verdana,
    #[serde(rename = "Times New Roman")]
    TimesNewRoman,
    Courier,
}

impl FontFamily {
    pub const ALL: [FontFamily; 4] = [
        FontFamily::Arial,
        FontFamily::Verdana,
        FontFamily::TimesNewRoman,
        FontFamily::Courier,
    ];

    /// The family name as it appears in a CSS `font` declaration.
    pub fn css_name(self) -> &'static str {
        match self {
            FontFamily::Arial => "Arial",
            FontFamily::Verdana => "Verdana",
            FontFamily::TimesNewRoman => "Times New Roman",
            FontFamily::Courier => "Courier",
        }
    }

    /// Average advance per character, in ems.
    pub fn advance_em(self) -> f64 {
        match self {
            FontFamily::Arial => 0.55,
            FontFamily::Verdana => 0.62,
            FontFamily::TimesNewRoman => 0.5,
            FontFamily::Courier => 0.6,
        }
    }

    /// Advance per character at `size` pixels.
    pub fn advance(self, size: f64) -> f64 {
        self.advance_em() * size
    }

    /// Rendered width of `text` at `size` pixels.
    pub fn measure(self, text: &str, size: f64) -> f64 {
        text.chars().count() as f64 * self.advance(size)
    }
}

impl FromStr for FontFamily {
    type Err = FontParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().trim_matches(|c| c == '"' || c == '\'');
        FontFamily::ALL
            .into_iter()
            .find(|family| family.css_name().eq_ignore_ascii_case(name))
            .ok_or_else(|| FontParseError(s.to_string()))
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_name())
    }
}
