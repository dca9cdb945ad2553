//! JPEG encoding and export.
//!
//! [`encode_jpeg`] works on raw RGB buffers; [`export_jpeg`] wraps the current
//! render into an [`ExportedFile`] with the download name and MIME type.

mod export;
mod jpeg;

pub use export::{export_jpeg, ExportError, ExportedFile, EXPORT_FILENAME, JPEG_MIME_TYPE};
pub use jpeg::{encode_buffer, encode_jpeg, EncodeError, DEFAULT_JPEG_QUALITY};
