//! Cropframe Core - crop, adjust, caption and export
//!
//! This crate holds everything behind the single-image editor: decoding the
//! uploaded file, the interactive crop region, the compositor that turns
//! (image, crop, adjustments, text) into an output buffer, and JPEG export.
//!
//! # Pipeline
//!
//! 1. [`decode`] turns bytes or a data URL into an RGB8 [`DecodedImage`].
//! 2. [`region`] tracks the crop rectangle in display space and converts it to
//!    source pixels.
//! 3. [`render`] resamples the crop, applies [`AdjustmentParams`] and draws the
//!    [`TextOverlay`].
//! 4. [`encode`] serializes the output buffer as `edited-image.jpg`.
//!
//! [`session::EditorSession`] wires the stages together and re-renders on every
//! change.

pub mod adjustments;
pub mod config;
pub mod decode;
pub mod encode;
pub mod region;
pub mod render;
pub mod session;
pub mod text;
pub mod transform;

pub use adjustments::{apply_adjustments, ColorTransform};
pub use config::EditorConfig;
pub use decode::{DecodeError, DecodedImage};
pub use encode::{export_jpeg, EncodeError, ExportError, ExportedFile};
pub use region::{AspectRatio, CropInteraction, CropRegion, DisplayGeometry, SourceRect};
pub use render::{composite, Compositor, OutputBuffer, RenderOptions, RenderOutcome};
pub use session::EditorSession;
pub use text::{FontFamily, Rgb, TextOverlay};
pub use transform::InterpolationFilter;

/// Brightness, contrast and saturation as integer percentages.
///
/// Each value ranges from 0 to 200 with 100 meaning "unchanged".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AdjustmentParams {
    pub brightness: u16,
    pub contrast: u16,
    pub saturation: u16,
}

impl Default for AdjustmentParams {
    fn default() -> Self {
        Self {
            brightness: Self::IDENTITY,
            contrast: Self::IDENTITY,
            saturation: Self::IDENTITY,
        }
    }
}

impl AdjustmentParams {
    pub const MIN: u16 = 0;
    pub const MAX: u16 = 200;
    pub const IDENTITY: u16 = 100;

    /// Create params, clamping each value to `MIN..=MAX`.
    pub fn new(brightness: u16, contrast: u16, saturation: u16) -> Self {
        Self {
            brightness,
            contrast,
            saturation,
        }
        .clamped()
    }

    /// Copy with every value clamped to `MIN..=MAX`.
    pub fn clamped(&self) -> Self {
        Self {
            brightness: self.brightness.clamp(Self::MIN, Self::MAX),
            contrast: self.contrast.clamp(Self::MIN, Self::MAX),
            saturation: self.saturation.clamp(Self::MIN, Self::MAX),
        }
    }

    /// Check if all values are at identity (after clamping)
    pub fn is_identity(&self) -> bool {
        self.clamped() == Self::default()
    }
}
