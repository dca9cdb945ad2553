//! Geometry stage of the render pipeline: picking source pixels for each
//! output pixel.
//!
//! - [`crop_pixels`] copies a whole-pixel rectangle when the output is at
//!   source resolution.
//! - [`resample`] maps a fractional source rectangle onto an output of any
//!   size, applying the color transform as it goes.

mod crop;
mod sample;

pub use crop::crop_pixels;
pub use sample::{resample, InterpolationFilter};
