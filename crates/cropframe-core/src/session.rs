//! A single editing session: one source image and the edit applied to it.
//!
//! Every mutator stores the new value and re-runs the compositor, so
//! [`EditorSession::output`] always reflects the latest parameters.

use std::sync::Arc;

use tracing::debug;

use crate::config::EditorConfig;
use crate::decode::DecodedImage;
use crate::encode::{export_jpeg, ExportError, ExportedFile};
use crate::region::{
    to_source_space, AspectRatio, CropInteraction, CropRegion, CropSelection, DisplayGeometry,
    SourceRect,
};
use crate::render::{Compositor, OutputBuffer, RenderOutcome};
use crate::text::TextOverlay;
use crate::AdjustmentParams;

#[derive(Debug)]
pub struct EditorSession {
    config: EditorConfig,
    image: Option<Arc<DecodedImage>>,
    geometry: DisplayGeometry,
    selection: CropSelection,
    adjustments: AdjustmentParams,
    overlay: TextOverlay,
    compositor: Compositor,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl EditorSession {
    pub fn new(config: EditorConfig) -> Self {
        let config = config.sanitized();
        let selection = CropSelection::new(config.aspect).with_coverage(config.coverage);
        Self {
            config,
            image: None,
            geometry: DisplayGeometry::default(),
            selection,
            adjustments: AdjustmentParams::default(),
            overlay: TextOverlay::default(),
            compositor: Compositor::new(),
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Replace the source image. The crop is reset to the default region for
    /// `geometry` and the previous output is discarded.
    pub fn load_image(
        &mut self,
        image: impl Into<Arc<DecodedImage>>,
        geometry: DisplayGeometry,
    ) -> RenderOutcome {
        let image = image.into();
        debug!(
            width = image.width,
            height = image.height,
            display_width = geometry.width,
            display_height = geometry.height,
            "image loaded"
        );
        self.image = Some(image);
        self.geometry = geometry;
        self.selection.reset(&self.geometry);
        self.compositor.clear();
        self.refresh()
    }

    pub fn image(&self) -> Option<&DecodedImage> {
        self.image.as_deref()
    }

    pub fn display_geometry(&self) -> DisplayGeometry {
        self.geometry
    }

    /// The image was laid out again at a new on-screen size. The region is
    /// kept in percent, so it covers the same part of the image.
    pub fn set_display_geometry(&mut self, geometry: DisplayGeometry) -> RenderOutcome {
        let was_empty = self.geometry.is_empty();
        self.geometry = geometry;
        if was_empty && self.selection.current().is_none() && !self.selection.is_dragging() {
            self.selection.reset(&self.geometry);
        }
        self.refresh()
    }

    pub fn selection(&self) -> &CropSelection {
        &self.selection
    }

    pub fn crop_region(&self) -> Option<CropRegion> {
        self.selection.current().copied()
    }

    pub fn set_aspect(&mut self, aspect: Option<AspectRatio>) -> RenderOutcome {
        self.selection.set_aspect(aspect, &self.geometry);
        self.refresh()
    }

    pub fn begin_crop_drag(&mut self) {
        self.selection.begin_drag();
    }

    /// Apply a pointer step to the active drag. Outside a drag nothing changes
    /// and the render is skipped.
    pub fn drag_crop(&mut self, interaction: CropInteraction) -> RenderOutcome {
        if !self.selection.drag(interaction, &self.geometry) {
            return RenderOutcome::Skipped;
        }
        self.refresh()
    }

    pub fn commit_crop(&mut self) -> RenderOutcome {
        self.selection.commit();
        self.refresh()
    }

    pub fn clear_crop(&mut self) -> RenderOutcome {
        self.selection.clear();
        self.refresh()
    }

    pub fn adjustments(&self) -> AdjustmentParams {
        self.adjustments
    }

    pub fn set_adjustments(&mut self, adjustments: AdjustmentParams) -> RenderOutcome {
        self.adjustments = adjustments.clamped();
        self.refresh()
    }

    pub fn text_overlay(&self) -> &TextOverlay {
        &self.overlay
    }

    pub fn set_text_overlay(&mut self, overlay: TextOverlay) -> RenderOutcome {
        self.overlay = overlay.clamped();
        self.refresh()
    }

    /// The current crop in source pixels, if an image is loaded and the
    /// region is non-empty.
    pub fn source_rect(&self) -> Option<SourceRect> {
        let image = self.image.as_deref()?;
        let region = self.selection.current()?;
        let rect = to_source_space(region, image.width, image.height, &self.geometry);
        (!rect.is_empty()).then_some(rect)
    }

    pub fn output(&self) -> Option<&OutputBuffer> {
        self.compositor.output()
    }

    /// Whether the download action should be enabled.
    pub fn can_export(&self) -> bool {
        self.image.is_some() && self.output().is_some()
    }

    pub fn export(&self) -> Result<ExportedFile, ExportError> {
        if self.image.is_none() {
            debug!("export skipped: no image loaded");
            return Err(ExportError::NotAvailable);
        }
        export_jpeg(
            self.output(),
            self.config.jpeg_quality,
            &self.config.export_filename,
        )
    }

    fn refresh(&mut self) -> RenderOutcome {
        let crop = self.source_rect();
        let display_size = self.selection.current().map(|region| {
            let px = region.to_pixels(&self.geometry);
            (px.width, px.height)
        });
        let options = self.config.render_options(display_size);

        self.compositor.render(
            self.image.as_deref(),
            crop.as_ref(),
            &self.adjustments,
            &self.overlay,
            &options,
        )
    }
}
