//! JPEG encoding of packed RGB8 buffers via the `image` crate.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder};
use thiserror::Error;

use crate::render::OutputBuffer;

/// Quality used when none is given: the browser `toBlob` default of 0.92.
pub const DEFAULT_JPEG_QUALITY: u8 = 92;

/// Errors that can occur during JPEG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match `width * height * 3`
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The encoder itself failed
    #[error("JPEG encoding failed: {0}")]
    EncodingFailed(#[from] image::ImageError),
}

/// Encode RGB pixel data as a baseline JPEG.
///
/// `quality` is clamped to 1-100.
pub fn encode_jpeg(
    pixels: &[u8],
    width: u32,
    height: u32,
    quality: u8,
) -> Result<Vec<u8>, EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected = (width as usize) * (height as usize) * 3;
    if pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: pixels.len(),
        });
    }

    let mut out = Cursor::new(Vec::with_capacity(expected / 8));
    JpegEncoder::new_with_quality(&mut out, quality.clamp(1, 100)).write_image(
        pixels,
        width,
        height,
        ExtendedColorType::Rgb8,
    )?;

    Ok(out.into_inner())
}

/// Encode a rendered buffer.
pub fn encode_buffer(buffer: &OutputBuffer, quality: u8) -> Result<Vec<u8>, EncodeError> {
    encode_jpeg(&buffer.pixels, buffer.width, buffer.height, quality)
}
