//! Captured-photo decoding with EXIF orientation extraction.
//!
//! The capture layer hands over encoded photo bytes (JPEG from the camera,
//! PNG in tests and tooling). Decoding produces a [`Photo`] whose
//! orientation tag comes from the EXIF data; the pixels are left in sensor
//! order and the tag rides along through cropping, so the display layer
//! decides when to re-orient.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::ImageReader;
use thiserror::Error;

use crate::photo::{Orientation, Photo};

/// Error types for photo decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The byte stream is not a recognized image format.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The image data is corrupted or incomplete.
    #[error("Corrupted or incomplete image data: {0}")]
    CorruptedData(String),

    /// The supplied pixel scale factor is unusable.
    #[error("Pixel scale must be finite and positive, got {0}")]
    InvalidScale(f64),
}

/// Decode captured photo bytes into a [`Photo`].
///
/// # Arguments
///
/// * `bytes` - Encoded image bytes (JPEG or PNG)
/// * `scale` - Pixel scale factor the capture layer reports for this photo
///
/// # Errors
///
/// Returns `DecodeError::InvalidScale` for a non-finite or non-positive
/// scale, `DecodeError::InvalidFormat` when the bytes are not a recognized
/// image container, and `DecodeError::CorruptedData` when decoding fails.
pub fn decode_photo(bytes: &[u8], scale: f64) -> Result<Photo, DecodeError> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(DecodeError::InvalidScale(scale));
    }

    // Pull the orientation tag out before decoding; absence is not an error
    let orientation = extract_orientation(bytes);

    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedData(e.to_string()))?;
    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedData(e.to_string()))?;

    let mut photo = Photo::from_rgb_image(img.into_rgb8(), scale);
    photo.orientation = orientation;

    log::debug!(
        "decoded {}x{} photo at scale {} (orientation {:?})",
        photo.width,
        photo.height,
        photo.scale,
        photo.orientation
    );
    Ok(photo)
}

/// Read the EXIF orientation tag from encoded photo bytes.
///
/// Returns `Orientation::Normal` when there is no EXIF data or the tag
/// cannot be read.
pub fn photo_orientation(bytes: &[u8]) -> Orientation {
    extract_orientation(bytes)
}

fn extract_orientation(bytes: &[u8]) -> Orientation {
    let exif_reader = Reader::new();
    let mut cursor = Cursor::new(bytes);

    match exif_reader.read_from_container(&mut cursor) {
        Ok(exif) => {
            if let Some(field) = exif.get_field(Tag::Orientation, In::PRIMARY) {
                if let Some(value) = field.value.get_uint(0) {
                    return Orientation::from(value);
                }
            }
            Orientation::Normal
        }
        Err(_) => Orientation::Normal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimal valid JPEG bytes (1x1 pixel) for decoder tests
    const MINIMAL_JPEG: &[u8] = &[
        0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46, 0x00, 0x01, 0x01, 0x00, 0x00,
        0x01, 0x00, 0x01, 0x00, 0x00, 0xFF, 0xDB, 0x00, 0x43, 0x00, 0x08, 0x06, 0x06, 0x07, 0x06,
        0x05, 0x08, 0x07, 0x07, 0x07, 0x09, 0x09, 0x08, 0x0A, 0x0C, 0x14, 0x0D, 0x0C, 0x0B, 0x0B,
        0x0C, 0x19, 0x12, 0x13, 0x0F, 0x14, 0x1D, 0x1A, 0x1F, 0x1E, 0x1D, 0x1A, 0x1C, 0x1C, 0x20,
        0x24, 0x2E, 0x27, 0x20, 0x22, 0x2C, 0x23, 0x1C, 0x1C, 0x28, 0x37, 0x29, 0x2C, 0x30, 0x31,
        0x34, 0x34, 0x34, 0x1F, 0x27, 0x39, 0x3D, 0x38, 0x32, 0x3C, 0x2E, 0x33, 0x34, 0x32, 0xFF,
        0xC0, 0x00, 0x0B, 0x08, 0x00, 0x01, 0x00, 0x01, 0x01, 0x01, 0x11, 0x00, 0xFF, 0xC4, 0x00,
        0x1F, 0x00, 0x00, 0x01, 0x05, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B,
        0xFF, 0xC4, 0x00, 0xB5, 0x10, 0x00, 0x02, 0x01, 0x03, 0x03, 0x02, 0x04, 0x03, 0x05, 0x05,
        0x04, 0x04, 0x00, 0x00, 0x01, 0x7D, 0x01, 0x02, 0x03, 0x00, 0x04, 0x11, 0x05, 0x12, 0x21,
        0x31, 0x41, 0x06, 0x13, 0x51, 0x61, 0x07, 0x22, 0x71, 0x14, 0x32, 0x81, 0x91, 0xA1, 0x08,
        0x23, 0x42, 0xB1, 0xC1, 0x15, 0x52, 0xD1, 0xF0, 0x24, 0x33, 0x62, 0x72, 0x82, 0x09, 0x0A,
        0x16, 0x17, 0x18, 0x19, 0x1A, 0x25, 0x26, 0x27, 0x28, 0x29, 0x2A, 0x34, 0x35, 0x36, 0x37,
        0x38, 0x39, 0x3A, 0x43, 0x44, 0x45, 0x46, 0x47, 0x48, 0x49, 0x4A, 0x53, 0x54, 0x55, 0x56,
        0x57, 0x58, 0x59, 0x5A, 0x63, 0x64, 0x65, 0x66, 0x67, 0x68, 0x69, 0x6A, 0x73, 0x74, 0x75,
        0x76, 0x77, 0x78, 0x79, 0x7A, 0x83, 0x84, 0x85, 0x86, 0x87, 0x88, 0x89, 0x8A, 0x92, 0x93,
        0x94, 0x95, 0x96, 0x97, 0x98, 0x99, 0x9A, 0xA2, 0xA3, 0xA4, 0xA5, 0xA6, 0xA7, 0xA8, 0xA9,
        0xAA, 0xB2, 0xB3, 0xB4, 0xB5, 0xB6, 0xB7, 0xB8, 0xB9, 0xBA, 0xC2, 0xC3, 0xC4, 0xC5, 0xC6,
        0xC7, 0xC8, 0xC9, 0xCA, 0xD2, 0xD3, 0xD4, 0xD5, 0xD6, 0xD7, 0xD8, 0xD9, 0xDA, 0xE1, 0xE2,
        0xE3, 0xE4, 0xE5, 0xE6, 0xE7, 0xE8, 0xE9, 0xEA, 0xF1, 0xF2, 0xF3, 0xF4, 0xF5, 0xF6, 0xF7,
        0xF8, 0xF9, 0xFA, 0xFF, 0xDA, 0x00, 0x08, 0x01, 0x01, 0x00, 0x00, 0x3F, 0x00, 0xFB, 0xD5,
        0xDB, 0x20, 0xA8, 0xF1, 0x7E, 0xFF, 0xD9,
    ];

    #[test]
    fn test_decode_valid_jpeg() {
        let photo = decode_photo(MINIMAL_JPEG, 2.0).unwrap();
        assert_eq!(photo.width, 1);
        assert_eq!(photo.height, 1);
        assert_eq!(photo.pixels.len(), 3); // 1x1 RGB = 3 bytes
        assert_eq!(photo.scale, 2.0);
        assert_eq!(photo.orientation, Orientation::Normal);
    }

    #[test]
    fn test_decode_png() {
        let img = image::RgbImage::from_pixel(3, 2, image::Rgb([10, 20, 30]));
        let mut bytes = Vec::new();
        img.write_to(
            &mut Cursor::new(&mut bytes),
            image::ImageFormat::Png,
        )
        .unwrap();

        let photo = decode_photo(&bytes, 1.0).unwrap();
        assert_eq!(photo.width, 3);
        assert_eq!(photo.height, 2);
        assert_eq!(&photo.pixels[0..3], &[10, 20, 30]);
    }

    #[test]
    fn test_decode_garbage_bytes() {
        let result = decode_photo(&[0x00, 0x01, 0x02, 0x03], 1.0);
        assert!(matches!(
            result,
            Err(DecodeError::InvalidFormat) | Err(DecodeError::CorruptedData(_))
        ));
    }

    #[test]
    fn test_decode_truncated_jpeg() {
        let result = decode_photo(&MINIMAL_JPEG[..40], 1.0);
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_rejects_bad_scale() {
        assert!(matches!(
            decode_photo(MINIMAL_JPEG, 0.0),
            Err(DecodeError::InvalidScale(_))
        ));
        assert!(matches!(
            decode_photo(MINIMAL_JPEG, -1.0),
            Err(DecodeError::InvalidScale(_))
        ));
        assert!(matches!(
            decode_photo(MINIMAL_JPEG, f64::NAN),
            Err(DecodeError::InvalidScale(_))
        ));
    }

    #[test]
    fn test_orientation_defaults_to_normal_without_exif() {
        assert_eq!(photo_orientation(MINIMAL_JPEG), Orientation::Normal);
        assert_eq!(photo_orientation(&[1, 2, 3]), Orientation::Normal);
    }

    #[test]
    fn test_decode_error_display() {
        let err = DecodeError::InvalidScale(0.0);
        assert_eq!(err.to_string(), "Pixel scale must be finite and positive, got 0");

        let err = DecodeError::InvalidFormat;
        assert_eq!(err.to_string(), "Invalid or unsupported image format");
    }
}
