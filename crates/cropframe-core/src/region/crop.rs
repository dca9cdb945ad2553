//! Crop regions in display space and the operations that produce them.
//!
//! Regions are normally kept in percent of the displayed size so they survive
//! the image being laid out at a different size. All geometry below is done in
//! display pixels and converted back to the region's unit at the end.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::DisplayGeometry;

/// Share of the display width covered by the default aspect-locked region.
pub const DEFAULT_COVERAGE: f64 = 0.9;

/// Unit of a [`CropRegion`]'s coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CropUnit {
    /// Percent (0-100) of the display width or height.
    #[default]
    Percent,
    /// Display pixels.
    Pixels,
}

/// Width / height ratio that constrains the crop rectangle.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct AspectRatio(f64);

impl AspectRatio {
    /// 16:9, the editor's default.
    pub const WIDESCREEN: AspectRatio = AspectRatio(16.0 / 9.0);
    /// 1:1.
    pub const SQUARE: AspectRatio = AspectRatio(1.0);

    /// `None` unless `ratio` is finite and positive.
    pub fn new(ratio: f64) -> Option<Self> {
        (ratio.is_finite() && ratio > 0.0).then_some(Self(ratio))
    }

    /// Ratio of `width` to `height`.
    pub fn from_dimensions(width: f64, height: f64) -> Option<Self> {
        Self::new(width / height)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for AspectRatio {
    type Error = String;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        AspectRatio::new(value).ok_or_else(|| format!("invalid aspect ratio: {value}"))
    }
}

impl From<AspectRatio> for f64 {
    fn from(value: AspectRatio) -> Self {
        value.0
    }
}

/// Rectangle selected over the displayed image.
///
/// A region with zero (or negative) width or height is *unset*: there is
/// nothing to render for it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CropRegion {
    #[serde(default)]
    pub unit: CropUnit,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl CropRegion {
    /// Region in percent of the display size.
    pub fn percent(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            unit: CropUnit::Percent,
            x,
            y,
            width,
            height,
        }
    }

    /// Region in display pixels.
    pub fn pixels(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            unit: CropUnit::Pixels,
            x,
            y,
            width,
            height,
        }
    }

    /// The unset region.
    pub fn unset() -> Self {
        Self::percent(0.0, 0.0, 0.0, 0.0)
    }

    /// True for a zero-area region (or one with non-finite coordinates).
    pub fn is_unset(&self) -> bool {
        let finite = [self.x, self.y, self.width, self.height]
            .iter()
            .all(|v| v.is_finite());
        !finite || self.width <= 0.0 || self.height <= 0.0
    }

    /// The same region in display pixels.
    pub fn to_pixels(&self, geometry: &DisplayGeometry) -> CropRegion {
        match self.unit {
            CropUnit::Pixels => *self,
            CropUnit::Percent => CropRegion::pixels(
                self.x / 100.0 * geometry.width,
                self.y / 100.0 * geometry.height,
                self.width / 100.0 * geometry.width,
                self.height / 100.0 * geometry.height,
            ),
        }
    }

    /// The same region in percent of the display size.
    pub fn to_percent(&self, geometry: &DisplayGeometry) -> CropRegion {
        match self.unit {
            CropUnit::Percent => *self,
            CropUnit::Pixels if geometry.is_empty() => CropRegion::unset(),
            CropUnit::Pixels => CropRegion::percent(
                self.x / geometry.width * 100.0,
                self.y / geometry.height * 100.0,
                self.width / geometry.width * 100.0,
                self.height / geometry.height * 100.0,
            ),
        }
    }

    /// Convert to `unit`.
    pub fn in_unit(&self, unit: CropUnit, geometry: &DisplayGeometry) -> CropRegion {
        match unit {
            CropUnit::Percent => self.to_percent(geometry),
            CropUnit::Pixels => self.to_pixels(geometry),
        }
    }
}

/// Resize handle on the crop rectangle, named by compass direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Handle {
    N,
    S,
    E,
    W,
    NE,
    NW,
    SE,
    SW,
}

impl Handle {
    fn moves_left(self) -> bool {
        matches!(self, Handle::W | Handle::NW | Handle::SW)
    }

    fn moves_right(self) -> bool {
        matches!(self, Handle::E | Handle::NE | Handle::SE)
    }

    fn moves_top(self) -> bool {
        matches!(self, Handle::N | Handle::NE | Handle::NW)
    }

    fn moves_bottom(self) -> bool {
        matches!(self, Handle::S | Handle::SE | Handle::SW)
    }

    /// Handles on the top or bottom edge only.
    fn is_vertical_edge(self) -> bool {
        matches!(self, Handle::N | Handle::S)
    }

    fn is_corner(self) -> bool {
        matches!(self, Handle::NE | Handle::NW | Handle::SE | Handle::SW)
    }

    /// Position of the point that stays fixed while this handle is dragged,
    /// as fractions of the rectangle's width and height.
    fn anchor(self) -> (f64, f64) {
        let fx = if self.moves_left() {
            1.0
        } else if self.moves_right() {
            0.0
        } else {
            0.5
        };
        let fy = if self.moves_top() {
            1.0
        } else if self.moves_bottom() {
            0.0
        } else {
            0.5
        };
        (fx, fy)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown resize handle: {0:?}")]
pub struct HandleParseError(pub String);

impl FromStr for Handle {
    type Err = HandleParseError;

    /// Compass names, case-insensitive: `"n"`, `"se"`, ...
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "n" => Ok(Handle::N),
            "s" => Ok(Handle::S),
            "e" => Ok(Handle::E),
            "w" => Ok(Handle::W),
            "ne" => Ok(Handle::NE),
            "nw" => Ok(Handle::NW),
            "se" => Ok(Handle::SE),
            "sw" => Ok(Handle::SW),
            _ => Err(HandleParseError(s.to_string())),
        }
    }
}

/// One step of pointer interaction, in display pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CropInteraction {
    /// Drag the whole rectangle.
    Move { dx: f64, dy: f64 },
    /// Drag one handle.
    Resize { handle: Handle, dx: f64, dy: f64 },
    /// Draw a fresh rectangle from `(x, y)`; width and height may be negative
    /// when the pointer moved up or left of the start point.
    Select {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
}

/// Default crop region for a freshly displayed image.
///
/// With an aspect ratio the region covers 90% of the display width, shrunk to
/// fit the height if needed, and is centered. Without one it covers the whole
/// display. The result is in percent.
pub fn default_region(geometry: &DisplayGeometry, aspect: Option<AspectRatio>) -> CropRegion {
    default_region_with_coverage(geometry, aspect, DEFAULT_COVERAGE)
}

/// [`default_region`] with a configurable width coverage (0-1].
pub fn default_region_with_coverage(
    geometry: &DisplayGeometry,
    aspect: Option<AspectRatio>,
    coverage: f64,
) -> CropRegion {
    if geometry.is_empty() {
        return CropRegion::unset();
    }

    let Some(aspect) = aspect else {
        return CropRegion::percent(0.0, 0.0, 100.0, 100.0);
    };

    let (dw, dh) = (geometry.width, geometry.height);
    let a = aspect.value();
    let coverage = if coverage.is_finite() {
        coverage.clamp(0.0, 1.0)
    } else {
        DEFAULT_COVERAGE
    };

    let mut width = dw * coverage;
    let mut height = width / a;
    if height > dh {
        height = dh;
        width = height * a;
    }
    if width > dw {
        width = dw;
        height = width / a;
    }

    CropRegion::pixels((dw - width) / 2.0, (dh - height) / 2.0, width, height).to_percent(geometry)
}

/// Apply one interaction step to `current`.
///
/// The result stays inside `[0, display_width] x [0, display_height]` and, when
/// `aspect` is set, keeps its ratio: east/west and corner handles drive the
/// width, north/south handles drive the height. The returned region uses the
/// same unit as `current`.
pub fn update_region(
    current: &CropRegion,
    interaction: CropInteraction,
    geometry: &DisplayGeometry,
    aspect: Option<AspectRatio>,
) -> CropRegion {
    if geometry.is_empty() {
        return *current;
    }

    let bounds = (geometry.width, geometry.height);
    let r = contain(current.to_pixels(geometry), bounds);

    let updated = match interaction {
        CropInteraction::Move { dx, dy } => move_rect(r, dx, dy, bounds),
        CropInteraction::Select {
            x,
            y,
            width,
            height,
        } => select_rect(x, y, width, height, bounds, aspect),
        CropInteraction::Resize { handle, dx, dy } => {
            resize_rect(r, handle, dx, dy, bounds, aspect)
        }
    };

    updated.in_unit(current.unit, geometry)
}

/// Pull a pixel rectangle inside the display; non-finite input collapses to
/// an empty rectangle at the origin.
fn contain(r: CropRegion, (dw, dh): (f64, f64)) -> CropRegion {
    let finite = [r.x, r.y, r.width, r.height].iter().all(|v| v.is_finite());
    if !finite {
        return CropRegion::pixels(0.0, 0.0, 0.0, 0.0);
    }

    let left = r.x.clamp(0.0, dw);
    let top = r.y.clamp(0.0, dh);
    let right = (r.x + r.width.max(0.0)).clamp(left, dw);
    let bottom = (r.y + r.height.max(0.0)).clamp(top, dh);
    CropRegion::pixels(left, top, right - left, bottom - top)
}

fn move_rect(r: CropRegion, dx: f64, dy: f64, (dw, dh): (f64, f64)) -> CropRegion {
    let width = r.width.clamp(0.0, dw);
    let height = r.height.clamp(0.0, dh);
    CropRegion::pixels(
        (r.x + dx).clamp(0.0, dw - width),
        (r.y + dy).clamp(0.0, dh - height),
        width,
        height,
    )
}

fn select_rect(
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    (dw, dh): (f64, f64),
    aspect: Option<AspectRatio>,
) -> CropRegion {
    // Normalise a drag that went up or left of its start point.
    let (left, right) = ordered(x, x + width);
    let (top, bottom) = ordered(y, y + height);
    let (left, right) = (left.clamp(0.0, dw), right.clamp(0.0, dw));
    let (top, bottom) = (top.clamp(0.0, dh), bottom.clamp(0.0, dh));

    let Some(aspect) = aspect else {
        return CropRegion::pixels(left, top, right - left, bottom - top);
    };

    // Grow from the start corner, keeping the ratio.
    let fx = if width < 0.0 { 1.0 } else { 0.0 };
    let fy = if height < 0.0 { 1.0 } else { 0.0 };
    let anchor = (x.clamp(0.0, dw), y.clamp(0.0, dh));
    fit_locked(anchor, (fx, fy), right - left, aspect, (dw, dh))
}

fn resize_rect(
    r: CropRegion,
    handle: Handle,
    dx: f64,
    dy: f64,
    (dw, dh): (f64, f64),
    aspect: Option<AspectRatio>,
) -> CropRegion {
    let (mut left, mut top) = (r.x, r.y);
    let (mut right, mut bottom) = (r.x + r.width, r.y + r.height);

    if handle.moves_left() {
        left = (left + dx).clamp(0.0, right);
    }
    if handle.moves_right() {
        right = (right + dx).clamp(left, dw);
    }
    if handle.moves_top() {
        top = (top + dy).clamp(0.0, bottom);
    }
    if handle.moves_bottom() {
        bottom = (bottom + dy).clamp(top, dh);
    }

    let Some(aspect) = aspect else {
        return CropRegion::pixels(left, top, right - left, bottom - top);
    };

    let (fx, fy) = handle.anchor();
    let anchor = (r.x + fx * r.width, r.y + fy * r.height);
    let width_delta = (right - left) - r.width;
    let height_delta = ((bottom - top) - r.height) * aspect.value();
    let desired_width = if handle.is_vertical_edge() {
        (bottom - top) * aspect.value()
    } else if handle.is_corner() && height_delta.abs() > width_delta.abs() {
        // Corners follow whichever axis moved further.
        r.width + height_delta
    } else {
        right - left
    };
    fit_locked(anchor, (fx, fy), desired_width, aspect, (dw, dh))
}

/// Largest rectangle of ratio `aspect`, at most `desired_width` wide, whose
/// point at fractions `(fx, fy)` sits on `anchor` and which fits the display.
fn fit_locked(
    (ax, ay): (f64, f64),
    (fx, fy): (f64, f64),
    desired_width: f64,
    aspect: AspectRatio,
    (dw, dh): (f64, f64),
) -> CropRegion {
    let a = aspect.value();
    let mut width = desired_width.max(0.0);

    if fx > 0.0 {
        width = width.min(ax / fx);
    }
    if fx < 1.0 {
        width = width.min((dw - ax) / (1.0 - fx));
    }
    if fy > 0.0 {
        width = width.min(ay / fy * a);
    }
    if fy < 1.0 {
        width = width.min((dh - ay) / (1.0 - fy) * a);
    }
    let width = width.max(0.0);
    let height = width / a;

    CropRegion::pixels(ax - fx * width, ay - fy * height, width, height)
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    fn assert_rect(r: &CropRegion, x: f64, y: f64, w: f64, h: f64) {
        assert!(
            close(r.x, x) && close(r.y, y) && close(r.width, w) && close(r.height, h),
            "expected ({x}, {y}, {w}, {h}), got ({}, {}, {}, {})",
            r.x,
            r.y,
            r.width,
            r.height
        );
    }

    fn display() -> DisplayGeometry {
        DisplayGeometry::new(800.0, 600.0)
    }

    #[test]
    fn test_handle_from_str() {
        assert_eq!("se".parse::<Handle>().unwrap(), Handle::SE);
        assert_eq!("NW".parse::<Handle>().unwrap(), Handle::NW);
        assert!("north".parse::<Handle>().is_err());
    }

    #[test]
    fn test_aspect_ratio_validation() {
        assert!(AspectRatio::new(0.0).is_none());
        assert!(AspectRatio::new(-1.0).is_none());
        assert!(AspectRatio::new(f64::INFINITY).is_none());
        let ratio = AspectRatio::from_dimensions(16.0, 9.0).unwrap();
        assert!(close(ratio.value(), 16.0 / 9.0));
    }

    #[test]
    fn test_unset_region() {
        assert!(CropRegion::unset().is_unset());
        assert!(CropRegion::pixels(5.0, 5.0, 0.0, 10.0).is_unset());
        assert!(CropRegion::pixels(5.0, 5.0, 10.0, -1.0).is_unset());
        assert!(CropRegion::pixels(f64::NAN, 5.0, 10.0, 10.0).is_unset());
        assert!(!CropRegion::pixels(5.0, 5.0, 10.0, 10.0).is_unset());
    }

    #[test]
    fn test_unit_conversion() {
        let g = display();
        let px = CropRegion::percent(10.0, 50.0, 25.0, 50.0).to_pixels(&g);
        assert_eq!(px.unit, CropUnit::Pixels);
        assert_rect(&px, 80.0, 300.0, 200.0, 300.0);

        let back = px.to_percent(&g);
        assert_eq!(back.unit, CropUnit::Percent);
        assert_rect(&back, 10.0, 50.0, 25.0, 50.0);
    }

    #[test]
    fn test_default_region_without_aspect_is_full() {
        let r = default_region(&display(), None);
        assert_rect(&r, 0.0, 0.0, 100.0, 100.0);
    }

    #[test]
    fn test_default_region_widescreen_fits_width() {
        // 800x600 display: 720 wide, 405 tall, centered.
        let g = display();
        let r = default_region(&g, Some(AspectRatio::WIDESCREEN)).to_pixels(&g);
        assert_rect(&r, 40.0, 97.5, 720.0, 405.0);
    }

    #[test]
    fn test_default_region_1000x500_widescreen_is_height_limited() {
        // 90% of 1000 is 900, which would need 506.25 rows; the display has 500.
        let g = DisplayGeometry::new(1000.0, 500.0);
        let r = default_region(&g, Some(AspectRatio::WIDESCREEN)).to_pixels(&g);

        assert!(close(r.height, 500.0));
        assert!(close(r.width, 500.0 * 16.0 / 9.0));
        assert!(close(r.x, (1000.0 - r.width) / 2.0));
        assert!(close(r.y, 0.0));
    }

    #[test]
    fn test_default_region_empty_geometry_is_unset() {
        let r = default_region(&DisplayGeometry::new(0.0, 0.0), Some(AspectRatio::SQUARE));
        assert!(r.is_unset());
    }

    #[test]
    fn test_default_region_custom_coverage() {
        let g = DisplayGeometry::new(100.0, 100.0);
        let r = default_region_with_coverage(&g, Some(AspectRatio::SQUARE), 0.5);
        assert_rect(&r, 25.0, 25.0, 50.0, 50.0);
    }

    #[test]
    fn test_move_clamps_inside_display() {
        let g = display();
        let start = CropRegion::pixels(100.0, 100.0, 200.0, 100.0);

        let moved = update_region(
            &start,
            CropInteraction::Move {
                dx: 50.0,
                dy: -20.0,
            },
            &g,
            None,
        );
        assert_rect(&moved, 150.0, 80.0, 200.0, 100.0);

        let pushed = update_region(
            &start,
            CropInteraction::Move {
                dx: 1000.0,
                dy: -1000.0,
            },
            &g,
            None,
        );
        assert_rect(&pushed, 600.0, 0.0, 200.0, 100.0);
    }

    #[test]
    fn test_move_keeps_unit() {
        let g = display();
        let start = CropRegion::percent(0.0, 0.0, 50.0, 50.0);
        let move_right = CropInteraction::Move { dx: 80.0, dy: 0.0 };
        let moved = update_region(&start, move_right, &g, None);
        assert_eq!(moved.unit, CropUnit::Percent);
        assert_rect(&moved, 10.0, 0.0, 50.0, 50.0);
    }

    #[test]
    fn test_free_resize_east() {
        let g = display();
        let start = CropRegion::pixels(100.0, 100.0, 200.0, 100.0);
        let r = update_region(
            &start,
            CropInteraction::Resize {
                handle: Handle::E,
                dx: 50.0,
                dy: 30.0,
            },
            &g,
            None,
        );
        assert_rect(&r, 100.0, 100.0, 250.0, 100.0);
    }

    #[test]
    fn test_free_resize_northwest_clamps_at_origin() {
        let g = display();
        let start = CropRegion::pixels(100.0, 100.0, 200.0, 100.0);
        let r = update_region(
            &start,
            CropInteraction::Resize {
                handle: Handle::NW,
                dx: -500.0,
                dy: -500.0,
            },
            &g,
            None,
        );
        assert_rect(&r, 0.0, 0.0, 300.0, 200.0);
    }

    #[test]
    fn test_free_resize_cannot_invert() {
        let g = display();
        let start = CropRegion::pixels(100.0, 100.0, 200.0, 100.0);
        let r = update_region(
            &start,
            CropInteraction::Resize {
                handle: Handle::E,
                dx: -400.0,
                dy: 0.0,
            },
            &g,
            None,
        );
        assert!(close(r.width, 0.0));
        assert!(r.is_unset());
    }

    #[test]
    fn test_locked_resize_east_recomputes_height() {
        let g = display();
        let aspect = AspectRatio::new(2.0);
        let start = CropRegion::pixels(100.0, 100.0, 200.0, 100.0);
        let r = update_region(
            &start,
            CropInteraction::Resize {
                handle: Handle::E,
                dx: 100.0,
                dy: 0.0,
            },
            &g,
            aspect,
        );
        // Width 300 -> height 150, centered on the old vertical center (150).
        assert_rect(&r, 100.0, 75.0, 300.0, 150.0);
    }

    #[test]
    fn test_locked_resize_south_recomputes_width() {
        let g = display();
        let aspect = AspectRatio::new(2.0);
        let start = CropRegion::pixels(100.0, 100.0, 200.0, 100.0);
        let r = update_region(
            &start,
            CropInteraction::Resize {
                handle: Handle::S,
                dx: 0.0,
                dy: 50.0,
            },
            &g,
            aspect,
        );
        // Height 150 -> width 300, centered on the old horizontal center (200).
        assert_rect(&r, 50.0, 100.0, 300.0, 150.0);
    }

    #[test]
    fn test_locked_resize_corner_anchors_opposite_corner() {
        let g = display();
        let aspect = AspectRatio::new(2.0);
        let start = CropRegion::pixels(300.0, 300.0, 200.0, 100.0);
        let r = update_region(
            &start,
            CropInteraction::Resize {
                handle: Handle::NW,
                dx: -100.0,
                dy: 0.0,
            },
            &g,
            aspect,
        );
        // Bottom-right corner (500, 400) stays put.
        assert_rect(&r, 200.0, 250.0, 300.0, 150.0);
    }

    #[test]
    fn test_locked_resize_corner_follows_vertical_drag() {
        let g = display();
        let aspect = AspectRatio::new(16.0 / 9.0);
        let start = CropRegion::pixels(100.0, 100.0, 160.0, 90.0);
        let r = update_region(
            &start,
            CropInteraction::Resize {
                handle: Handle::SE,
                dx: 0.0,
                dy: 200.0,
            },
            &g,
            aspect,
        );
        // Height 290 -> width 290 * 16/9, top-left corner anchored.
        assert_rect(&r, 100.0, 100.0, 290.0 * 16.0 / 9.0, 290.0);

        // The larger horizontal move wins on a diagonal drag.
        let r = update_region(
            &start,
            CropInteraction::Resize {
                handle: Handle::SE,
                dx: 80.0,
                dy: 10.0,
            },
            &g,
            aspect,
        );
        assert_rect(&r, 100.0, 100.0, 240.0, 135.0);
    }

    #[test]
    fn test_locked_resize_shrinks_to_fit_bounds() {
        let g = display();
        let aspect = AspectRatio::new(2.0);
        let start = CropRegion::pixels(400.0, 500.0, 100.0, 50.0);
        let r = update_region(
            &start,
            CropInteraction::Resize {
                handle: Handle::SE,
                dx: 300.0,
                dy: 0.0,
            },
            &g,
            aspect,
        );
        // 100 rows remain below the anchored top edge, so the bottom of the
        // display caps the width at 200.
        assert!(r.y + r.height <= 600.0 + EPS);
        assert!(r.x + r.width <= 800.0 + EPS);
        assert!(close(r.width / r.height, 2.0));
        assert_rect(&r, 400.0, 500.0, 200.0, 100.0);
    }

    #[test]
    fn test_free_select_normalises_negative_drag() {
        let g = display();
        let r = update_region(
            &CropRegion::unset(),
            CropInteraction::Select {
                x: 300.0,
                y: 200.0,
                width: -100.0,
                height: -50.0,
            },
            &g,
            None,
        );
        // `unset()` is a percent region, so the result comes back in percent.
        let px = r.to_pixels(&g);
        assert_rect(&px, 200.0, 150.0, 100.0, 50.0);
    }

    #[test]
    fn test_locked_select_keeps_ratio() {
        let g = display();
        let r = update_region(
            &CropRegion::pixels(0.0, 0.0, 0.0, 0.0),
            CropInteraction::Select {
                x: 100.0,
                y: 100.0,
                width: 160.0,
                height: 20.0,
            },
            &g,
            Some(AspectRatio::WIDESCREEN),
        );
        assert_rect(&r, 100.0, 100.0, 160.0, 90.0);
    }

    #[test]
    fn test_update_with_empty_geometry_is_noop() {
        let start = CropRegion::percent(10.0, 10.0, 10.0, 10.0);
        let r = update_region(
            &start,
            CropInteraction::Move { dx: 5.0, dy: 5.0 },
            &DisplayGeometry::new(0.0, 0.0),
            None,
        );
        assert_eq!(r, start);
    }

    #[test]
    fn test_handle_anchors() {
        assert_eq!(Handle::NE.anchor(), (0.0, 1.0));
        assert_eq!(Handle::W.anchor(), (1.0, 0.5));
        assert_eq!(Handle::S.anchor(), (0.5, 0.0));
    }

    #[test]
    fn test_out_of_bounds_region_is_pulled_inside() {
        let g = display();
        let start = CropRegion::pixels(-100.0, 500.0, 300.0, 300.0);
        let r = update_region(&start, CropInteraction::Move { dx: 0.0, dy: 0.0 }, &g, None);
        assert_rect(&r, 0.0, 500.0, 200.0, 100.0);
    }

    #[test]
    fn test_aspect_ratio_serde_rejects_invalid() {
        assert!(AspectRatio::try_from(-2.0).is_err());
        assert_eq!(f64::from(AspectRatio::SQUARE), 1.0);
    }
}
