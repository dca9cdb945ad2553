//! Interactive crop selection.
//!
//! ```text
//!            begin_drag              commit
//!   Unset ───────────────► FreeDrag ──────────► Committed
//!     ▲                    AspectLockedDrag        │
//!     │        clear             ▲   begin_drag    │
//!     └──────────────────────────┴─────────────────┘
//! ```
//!
//! Which drag state is entered depends on whether an aspect ratio is locked.
//! Committing an empty region returns to `Unset`.

use serde::{Deserialize, Serialize};

use super::{
    default_region_with_coverage, update_region, AspectRatio, CropInteraction, CropRegion,
    DisplayGeometry, DEFAULT_COVERAGE,
};

/// Where the selection is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "region", rename_all = "snake_case")]
pub enum CropState {
    /// No region selected; nothing is rendered.
    #[default]
    Unset,
    /// Pointer is down, free-form.
    FreeDrag(CropRegion),
    /// Pointer is down, ratio locked.
    AspectLockedDrag(CropRegion),
    /// Pointer released.
    Committed(CropRegion),
}

impl CropState {
    /// Region for this state, if any.
    pub fn region(&self) -> Option<&CropRegion> {
        match self {
            CropState::Unset => None,
            CropState::FreeDrag(r) | CropState::AspectLockedDrag(r) | CropState::Committed(r) => {
                Some(r)
            }
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(
            self,
            CropState::FreeDrag(_) | CropState::AspectLockedDrag(_)
        )
    }
}

/// Crop selection over the displayed image: current state plus the aspect
/// lock that governs interaction.
#[derive(Debug, Clone, PartialEq)]
pub struct CropSelection {
    state: CropState,
    aspect: Option<AspectRatio>,
    coverage: f64,
}

impl Default for CropSelection {
    fn default() -> Self {
        Self::new(Some(AspectRatio::WIDESCREEN))
    }
}

impl CropSelection {
    pub fn new(aspect: Option<AspectRatio>) -> Self {
        Self {
            state: CropState::Unset,
            aspect,
            coverage: DEFAULT_COVERAGE,
        }
    }

    /// Use `coverage` (0-1] of the display width for default regions.
    pub fn with_coverage(mut self, coverage: f64) -> Self {
        self.coverage = coverage;
        self
    }

    pub fn state(&self) -> CropState {
        self.state
    }

    pub fn aspect(&self) -> Option<AspectRatio> {
        self.aspect
    }

    /// Region to render: the in-flight region while dragging, otherwise the
    /// committed one. `None` when unset or empty.
    pub fn current(&self) -> Option<&CropRegion> {
        self.state.region().filter(|r| !r.is_unset())
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    /// Commit the default region for a newly displayed image.
    pub fn reset(&mut self, geometry: &DisplayGeometry) {
        let region = default_region_with_coverage(geometry, self.aspect, self.coverage);
        self.state = if region.is_unset() {
            CropState::Unset
        } else {
            CropState::Committed(region)
        };
    }

    /// Change the aspect lock. The region is re-derived from the display so
    /// it satisfies the new ratio.
    pub fn set_aspect(&mut self, aspect: Option<AspectRatio>, geometry: &DisplayGeometry) {
        if self.aspect == aspect {
            return;
        }
        self.aspect = aspect;
        self.reset(geometry);
    }

    /// Press on the image. A committed region becomes the drag region; from
    /// `Unset` an empty region is started, to be shaped by a `Select`.
    pub fn begin_drag(&mut self) {
        let region = match self.state {
            CropState::Unset => CropRegion::unset(),
            CropState::Committed(r) => r,
            CropState::FreeDrag(_) | CropState::AspectLockedDrag(_) => return,
        };
        self.state = self.drag_state(region);
    }

    /// Apply one pointer step. Returns false (and changes nothing) unless a
    /// drag is in progress.
    pub fn drag(&mut self, interaction: CropInteraction, geometry: &DisplayGeometry) -> bool {
        let Some(region) = self.state.region().copied().filter(|_| self.is_dragging()) else {
            return false;
        };

        let updated = update_region(&region, interaction, geometry, self.aspect);
        self.state = self.drag_state(updated);
        true
    }

    /// Release the pointer.
    pub fn commit(&mut self) {
        let region = match self.state {
            CropState::FreeDrag(r) | CropState::AspectLockedDrag(r) => r,
            CropState::Unset | CropState::Committed(_) => return,
        };
        self.state = if region.is_unset() {
            CropState::Unset
        } else {
            CropState::Committed(region)
        };
    }

    /// Drop the selection.
    pub fn clear(&mut self) {
        self.state = CropState::Unset;
    }

    fn drag_state(&self, region: CropRegion) -> CropState {
        if self.aspect.is_some() {
            CropState::AspectLockedDrag(region)
        } else {
            CropState::FreeDrag(region)
        }
    }
}
