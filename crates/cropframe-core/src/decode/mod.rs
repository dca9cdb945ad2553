//! Image decoding for Cropframe.
//!
//! This module provides functionality for:
//! - Decoding common raster formats (JPEG, PNG, GIF, WebP, BMP) to RGB8
//! - Applying EXIF orientation the way browsers do for `<img>` elements
//! - Unpacking base64 `data:` URLs handed over by file pickers
//!
//! Decoding is synchronous; the decoded image is immutable afterwards and
//! shared by every render.

mod data_url;
mod raster;
mod types;

pub use data_url::{data_url_bytes, decode_data_url};
pub use raster::{decode_image, get_orientation};
pub use types::{DecodeError, DecodedImage, Orientation};
