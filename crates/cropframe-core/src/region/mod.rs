//! Crop region model.
//!
//! Produces and updates the crop rectangle over the displayed image and
//! converts it to source pixels for sampling:
//!
//! - [`geometry`]: display geometry, source rectangles and the one rounding
//!   policy used to turn them into pixels
//! - [`crop`]: regions, aspect ratios, default regions and interactive updates
//! - [`state`]: the selection state machine driven by pointer events
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner of the displayed image
//! - Regions are kept in percent of the display size unless built in pixels
//! - Source rectangles are in natural image pixels

pub mod crop;
pub mod geometry;
pub mod state;

pub use crop::{
    default_region, default_region_with_coverage, update_region, AspectRatio, CropInteraction,
    CropRegion, CropUnit, Handle, HandleParseError, DEFAULT_COVERAGE,
};
pub use geometry::{to_source_space, DisplayGeometry, PixelRect, SourceRect};
pub use state::{CropSelection, CropState};
