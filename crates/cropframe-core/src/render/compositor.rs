//! Holds the most recent render and arbitrates between overlapping requests.

use tracing::debug;

use super::{composite, OutputBuffer, RenderOptions};
use crate::decode::DecodedImage;
use crate::region::SourceRect;
use crate::text::TextOverlay;
use crate::AdjustmentParams;

/// Identifies one render request. Later requests have larger tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RenderTicket(u64);

/// What happened to a render request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// A new buffer replaced the previous one.
    Rendered,
    /// Nothing to draw. The previous buffer is kept.
    Skipped,
    /// A newer request was submitted first; this result was dropped.
    Superseded,
}

/// Owner of the current output buffer.
///
/// Synchronous callers use [`Compositor::render`]. Callers that render off
/// the main loop call [`Compositor::submit`] before starting and
/// [`Compositor::complete`] with the result; only the latest ticket's result
/// is kept, so the last submitted parameters always win.
#[derive(Debug, Default)]
pub struct Compositor {
    output: Option<OutputBuffer>,
    latest: u64,
}

impl Compositor {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last rendered buffer, if any.
    pub fn output(&self) -> Option<&OutputBuffer> {
        self.output.as_ref()
    }

    /// Drop the current buffer and invalidate outstanding tickets.
    pub fn clear(&mut self) {
        self.output = None;
        self.latest += 1;
    }

    /// Start a new render request.
    pub fn submit(&mut self) -> RenderTicket {
        self.latest += 1;
        RenderTicket(self.latest)
    }

    /// Whether `ticket` is still the newest request.
    pub fn is_current(&self, ticket: RenderTicket) -> bool {
        ticket.0 == self.latest
    }

    /// Deliver the result of the request identified by `ticket`.
    pub fn complete(
        &mut self,
        ticket: RenderTicket,
        buffer: Option<OutputBuffer>,
    ) -> RenderOutcome {
        if !self.is_current(ticket) {
            debug!(ticket = ticket.0, latest = self.latest, "render superseded");
            return RenderOutcome::Superseded;
        }
        match buffer {
            Some(buffer) => {
                self.output = Some(buffer);
                RenderOutcome::Rendered
            }
            None => RenderOutcome::Skipped,
        }
    }

    /// Render synchronously and keep the result.
    ///
    /// Without an image or a crop the request is skipped and the previous
    /// buffer stays as it was.
    pub fn render(
        &mut self,
        image: Option<&DecodedImage>,
        crop: Option<&SourceRect>,
        adjustments: &AdjustmentParams,
        overlay: &TextOverlay,
        options: &RenderOptions,
    ) -> RenderOutcome {
        let ticket = self.submit();
        let buffer = match (image, crop) {
            (Some(image), Some(crop)) => composite(image, crop, adjustments, overlay, options),
            _ => {
                debug!(
                    has_image = image.is_some(),
                    has_crop = crop.is_some(),
                    "render skipped: missing input"
                );
                None
            }
        };
        self.complete(ticket, buffer)
    }
}
