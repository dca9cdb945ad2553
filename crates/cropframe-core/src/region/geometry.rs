//! Display space and source space.
//!
//! The crop region lives in display space: the size the image is laid out at
//! on screen. Sampling happens in source space: the natural pixel grid of the
//! decoded image. [`to_source_space`] is the only place that converts between
//! the two, and [`SourceRect::to_pixel_rect`] is the only place that rounds.
//!
//! # Rounding policy
//!
//! Source rectangles stay in `f64` until they are turned into whole pixels.
//! At that point each *edge* is rounded to the nearest integer and clamped to
//! the image, and the pixel width is `right - left`. Rounding edges instead of
//! `(x, width)` pairs keeps neighbouring regions tiling without gaps and gives
//! the same answer no matter how often the region is recomputed.

use serde::{Deserialize, Serialize};

use super::CropRegion;

/// On-screen size of the displayed image, in display pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DisplayGeometry {
    pub width: f64,
    pub height: f64,
}

impl DisplayGeometry {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Lay out an image of natural size `natural_width x natural_height` inside
    /// a `max_width x max_height` box, preserving aspect ratio and never
    /// upscaling (`max-width`/`max-height` with `object-fit: contain`).
    pub fn fit(natural_width: u32, natural_height: u32, max_width: f64, max_height: f64) -> Self {
        if natural_width == 0 || natural_height == 0 {
            return Self::new(0.0, 0.0);
        }

        let (w, h) = (natural_width as f64, natural_height as f64);
        let scale = (max_width / w).min(max_height / h).min(1.0).max(0.0);
        Self::new(w * scale, h * scale)
    }

    /// True if either side is zero, negative or not finite.
    pub fn is_empty(&self) -> bool {
        let finite = self.width.is_finite() && self.height.is_finite();
        !(finite && self.width > 0.0 && self.height > 0.0)
    }

    /// Source pixels per display pixel, `(scale_x, scale_y)`.
    pub fn scale_to(&self, natural_width: u32, natural_height: u32) -> Option<(f64, f64)> {
        if self.is_empty() {
            return None;
        }
        Some((
            natural_width as f64 / self.width,
            natural_height as f64 / self.height,
        ))
    }
}

/// A crop rectangle in source pixels, not yet rounded.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SourceRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl SourceRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The whole of an image.
    pub fn full(width: u32, height: u32) -> Self {
        Self::new(0.0, 0.0, width as f64, height as f64)
    }

    /// True for a zero-area (or nonsensical) rectangle.
    pub fn is_empty(&self) -> bool {
        let finite = self.width.is_finite() && self.height.is_finite();
        !(finite && self.width > 0.0 && self.height > 0.0)
    }

    /// Round to whole source pixels inside an `image_width x image_height`
    /// image. See the module docs for the rounding policy.
    pub fn to_pixel_rect(&self, image_width: u32, image_height: u32) -> PixelRect {
        if self.is_empty() || !self.x.is_finite() || !self.y.is_finite() {
            return PixelRect::default();
        }

        let (left, right) = round_edges(self.x, self.width, image_width);
        let (top, bottom) = round_edges(self.y, self.height, image_height);

        PixelRect {
            x: left,
            y: top,
            width: right - left,
            height: bottom - top,
        }
    }
}

fn round_edges(start: f64, extent: f64, limit: u32) -> (u32, u32) {
    let limit_f = limit as f64;
    let lo = start.round().clamp(0.0, limit_f) as u32;
    let hi = (start + extent).round().clamp(0.0, limit_f) as u32;
    (lo, hi.max(lo))
}

/// A crop rectangle in whole source pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Convert a display-space crop region to source space.
///
/// Every coordinate is multiplied by `scale_x = natural_width / display_width`
/// or `scale_y = natural_height / display_height`. An empty display geometry
/// yields an empty rectangle.
pub fn to_source_space(
    region: &CropRegion,
    natural_width: u32,
    natural_height: u32,
    geometry: &DisplayGeometry,
) -> SourceRect {
    let Some((scale_x, scale_y)) = geometry.scale_to(natural_width, natural_height) else {
        return SourceRect::default();
    };

    let px = region.to_pixels(geometry);
    SourceRect {
        x: px.x * scale_x,
        y: px.y * scale_y,
        width: px.width * scale_x,
        height: px.height * scale_y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_landscape_into_box() {
        let g = DisplayGeometry::fit(1000, 500, 600.0, 400.0);
        assert_eq!(g, DisplayGeometry::new(600.0, 300.0));
    }

    #[test]
    fn test_fit_portrait_limited_by_height() {
        let g = DisplayGeometry::fit(500, 1000, 600.0, 400.0);
        assert_eq!(g, DisplayGeometry::new(200.0, 400.0));
    }

    #[test]
    fn test_fit_never_upscales() {
        let g = DisplayGeometry::fit(100, 50, 600.0, 400.0);
        assert_eq!(g, DisplayGeometry::new(100.0, 50.0));
    }

    #[test]
    fn test_fit_empty_image() {
        assert!(DisplayGeometry::fit(0, 50, 600.0, 400.0).is_empty());
    }

    #[test]
    fn test_scale_factors() {
        let g = DisplayGeometry::new(500.0, 250.0);
        assert_eq!(g.scale_to(1000, 500), Some((2.0, 2.0)));
        assert_eq!(DisplayGeometry::new(0.0, 10.0).scale_to(10, 10), None);
    }

    #[test]
    fn test_to_source_space_scales_percent_region() {
        let g = DisplayGeometry::new(500.0, 250.0);
        let region = CropRegion::percent(10.0, 20.0, 50.0, 40.0);
        let rect = to_source_space(&region, 1000, 500, &g);

        assert!((rect.x - 100.0).abs() < 1e-9);
        assert!((rect.y - 100.0).abs() < 1e-9);
        assert!((rect.width - 500.0).abs() < 1e-9);
        assert!((rect.height - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_to_source_space_scales_pixel_region() {
        let g = DisplayGeometry::new(400.0, 300.0);
        let region = CropRegion::pixels(40.0, 30.0, 200.0, 150.0);
        let rect = to_source_space(&region, 800, 900, &g);

        assert_eq!(rect, SourceRect::new(80.0, 90.0, 400.0, 450.0));
    }

    #[test]
    fn test_to_source_space_empty_geometry() {
        let region = CropRegion::percent(0.0, 0.0, 100.0, 100.0);
        let rect = to_source_space(&region, 100, 100, &DisplayGeometry::new(0.0, 0.0));
        assert!(rect.is_empty());
    }

    #[test]
    fn test_pixel_rect_rounds_edges() {
        let rect = SourceRect::new(10.4, 0.6, 20.2, 9.8);
        // left 10, right round(30.6) = 31; top 1, bottom round(10.4) = 10
        assert_eq!(
            rect.to_pixel_rect(100, 100),
            PixelRect {
                x: 10,
                y: 1,
                width: 21,
                height: 9
            }
        );
    }

    #[test]
    fn test_pixel_rect_clamps_to_image() {
        let rect = SourceRect::new(-5.0, 90.0, 50.0, 50.0);
        assert_eq!(
            rect.to_pixel_rect(100, 100),
            PixelRect {
                x: 0,
                y: 90,
                width: 45,
                height: 10
            }
        );
    }

    #[test]
    fn test_pixel_rect_outside_image_is_empty() {
        let rect = SourceRect::new(150.0, 0.0, 10.0, 10.0);
        assert!(rect.to_pixel_rect(100, 100).is_empty());
    }

    #[test]
    fn test_empty_source_rect() {
        assert!(SourceRect::new(0.0, 0.0, 0.0, 10.0).is_empty());
        assert!(SourceRect::new(0.0, 0.0, f64::NAN, 10.0).is_empty());
        assert!(SourceRect::new(0.0, 0.0, 10.0, 10.0)
            .to_pixel_rect(100, 100)
            .width
            == 10);
    }

    #[test]
    fn test_adjacent_rects_tile_without_gaps() {
        let a = SourceRect::new(0.0, 0.0, 33.3, 10.0).to_pixel_rect(100, 10);
        let b = SourceRect::new(33.3, 0.0, 33.3, 10.0).to_pixel_rect(100, 10);
        assert_eq!(a.x + a.width, b.x);
    }
}
