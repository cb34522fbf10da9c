//! JPEG encoding for the confirmed crop.
//!
//! Once the user confirms, the host usually wants bytes it can upload or
//! share rather than a raw pixel buffer. This module encodes a [`Photo`]
//! with the `image` crate's JPEG encoder at a configurable quality.

use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use std::io::Cursor;
use thiserror::Error;

use crate::photo::Photo;

/// Errors that can occur during JPEG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The photo has no pixels to encode.
    #[error("Cannot encode an empty photo")]
    EmptyPhoto,

    /// Pixel data length doesn't match the photo's dimensions.
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// JPEG encoding failed.
    #[error("JPEG encoding failed: {0}")]
    EncodingFailed(String),
}

/// Encode a photo to JPEG bytes.
///
/// # Arguments
///
/// * `photo` - The photo to encode (typically a confirmed crop)
/// * `quality` - JPEG quality (1-100, clamped; 85 is a good default for
///   upload-sized homework pages)
///
/// # Errors
///
/// Returns `EncodeError::EmptyPhoto` for a zero-sized photo and
/// `EncodeError::InvalidPixelData` when the buffer length disagrees with
/// the dimensions.
pub fn encode_jpeg(photo: &Photo, quality: u8) -> Result<Vec<u8>, EncodeError> {
    if photo.is_empty() {
        return Err(EncodeError::EmptyPhoto);
    }

    let expected_len = (photo.width as usize) * (photo.height as usize) * 3;
    if photo.pixels.len() != expected_len {
        return Err(EncodeError::InvalidPixelData {
            expected: expected_len,
            actual: photo.pixels.len(),
        });
    }

    let quality = quality.clamp(1, 100);
    let mut buffer = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);

    encoder
        .write_image(&photo.pixels, photo.width, photo.height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}
