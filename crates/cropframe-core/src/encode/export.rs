//! Packaging the current render as a downloadable file.

use thiserror::Error;
use tracing::debug;

use super::jpeg::{encode_buffer, EncodeError};
use crate::render::OutputBuffer;

/// Name the exported file is saved under.
pub const EXPORT_FILENAME: &str = "edited-image.jpg";

pub const JPEG_MIME_TYPE: &str = "image/jpeg";

#[derive(Debug, Error)]
pub enum ExportError {
    /// No image is loaded or nothing has been rendered yet.
    #[error("Nothing to export: no rendered image is available")]
    NotAvailable,

    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// An encoded file ready to hand to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub filename: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Encode `buffer` as a JPEG named `filename`.
///
/// A missing or empty buffer reports [`ExportError::NotAvailable`] without
/// encoding anything.
pub fn export_jpeg(
    buffer: Option<&OutputBuffer>,
    quality: u8,
    filename: &str,
) -> Result<ExportedFile, ExportError> {
    let Some(buffer) = buffer.filter(|b| !b.is_empty()) else {
        debug!("export skipped: no output buffer");
        return Err(ExportError::NotAvailable);
    };

    let bytes = encode_buffer(buffer, quality)?;
    debug!(
        width = buffer.width,
        height = buffer.height,
        size = bytes.len(),
        "exported JPEG"
    );

    Ok(ExportedFile {
        filename: filename.to_string(),
        mime_type: JPEG_MIME_TYPE,
        bytes,
    })
}
