//! Editor configuration.
//!
//! Everything here has a default matching the stock editor, so callers only
//! need to send the fields they want to change.

use serde::{Deserialize, Serialize};

use crate::encode::{DEFAULT_JPEG_QUALITY, EXPORT_FILENAME};
use crate::region::{AspectRatio, DEFAULT_COVERAGE};
use crate::render::{OutputSize, RenderOptions};
use crate::text::DEFAULT_FONT_SIZE;
use crate::transform::InterpolationFilter;

/// Resolution the output buffer is rendered at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputSizing {
    /// Full source resolution of the crop.
    #[default]
    Source,
    /// The crop's on-screen size, like a canvas sized to the selection.
    Display,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Aspect lock applied to new images. `None` is free-form.
    pub aspect: Option<AspectRatio>,
    /// Fraction of the display width the default region covers.
    pub coverage: f64,
    /// Overlay em size in output pixels.
    pub text_size: f64,
    pub jpeg_quality: u8,
    pub export_filename: String,
    pub filter: InterpolationFilter,
    pub output: OutputSizing,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            aspect: Some(AspectRatio::WIDESCREEN),
            coverage: DEFAULT_COVERAGE,
            text_size: DEFAULT_FONT_SIZE,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            export_filename: EXPORT_FILENAME.to_string(),
            filter: InterpolationFilter::Bilinear,
            output: OutputSizing::Source,
        }
    }
}

impl EditorConfig {
    /// Copy with out-of-range values replaced by their defaults.
    pub fn sanitized(&self) -> Self {
        let defaults = Self::default();
        let coverage = if self.coverage.is_finite() && self.coverage > 0.0 && self.coverage <= 1.0 {
            self.coverage
        } else {
            defaults.coverage
        };
        let text_size = if self.text_size.is_finite() && self.text_size > 0.0 {
            self.text_size
        } else {
            defaults.text_size
        };
        let export_filename = if self.export_filename.trim().is_empty() {
            defaults.export_filename
        } else {
            self.export_filename.clone()
        };
        Self {
            aspect: self.aspect,
            coverage,
            text_size,
            jpeg_quality: self.jpeg_quality.clamp(1, 100),
            export_filename,
            filter: self.filter,
            output: self.output,
        }
    }

    /// Render options for a crop that is `display_size` on screen.
    pub fn render_options(&self, display_size: Option<(f64, f64)>) -> RenderOptions {
        let output = match (self.output, display_size) {
            (OutputSizing::Display, Some((w, h))) => OutputSize::Exact {
                width: w.round().max(0.0) as u32,
                height: h.round().max(0.0) as u32,
            },
            _ => OutputSize::Source,
        };
        RenderOptions {
            output,
            filter: self.filter,
            text_size: self.text_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EditorConfig::default();
        assert_eq!(config.aspect, Some(AspectRatio::WIDESCREEN));
        assert_eq!(config.coverage, 0.9);
        assert_eq!(config.text_size, 20.0);
        assert_eq!(config.jpeg_quality, 92);
        assert_eq!(config.export_filename, "edited-image.jpg");
        assert_eq!(config.filter, InterpolationFilter::Bilinear);
        assert_eq!(config.output, OutputSizing::Source);
    }

    #[test]
    fn test_sanitized_replaces_bad_values() {
        let config = EditorConfig {
            coverage: 1.5,
            text_size: f64::NAN,
            jpeg_quality: 0,
            export_filename: "  ".into(),
            ..EditorConfig::default()
        }
        .sanitized();
        assert_eq!(config.coverage, DEFAULT_COVERAGE);
        assert_eq!(config.text_size, DEFAULT_FONT_SIZE);
        assert_eq!(config.jpeg_quality, 1);
        assert_eq!(config.export_filename, EXPORT_FILENAME);
    }

    #[test]
    fn test_render_options_follow_sizing() {
        let source = EditorConfig::default().render_options(Some((320.4, 180.0)));
        assert_eq!(source.output, OutputSize::Source);

        let display = EditorConfig {
            output: OutputSizing::Display,
            ..EditorConfig::default()
        };
        assert_eq!(
            display.render_options(Some((320.4, 180.0))).output,
            OutputSize::Exact {
                width: 320,
                height: 180,
            }
        );
        assert_eq!(display.render_options(None).output, OutputSize::Source);
    }
}
