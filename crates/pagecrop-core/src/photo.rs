//! The captured-photo data model.
//!
//! A [`Photo`] is the immutable raster the capture layer delivers: RGB pixel
//! data plus the two display attributes that ride along with it, the pixel
//! scale factor (pixels per logical point) and the EXIF orientation tag.
//! The orientation is carried as a tag, never baked into the pixels; the
//! crop pipeline preserves it end to end.

use crate::geometry::{Rect, Size};
use serde::{Deserialize, Serialize};

/// EXIF orientation values (1-8).
/// See: https://exiftool.org/TagNames/EXIF.html
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Orientation {
    /// Normal (no transformation needed).
    #[default]
    Normal = 1,
    /// Horizontal flip.
    FlipHorizontal = 2,
    /// Rotate 180 degrees.
    Rotate180 = 3,
    /// Vertical flip.
    FlipVertical = 4,
    /// Transpose (flip horizontal + rotate 270 CW).
    Transpose = 5,
    /// Rotate 90 degrees clockwise.
    Rotate90CW = 6,
    /// Transverse (flip horizontal + rotate 90 CW).
    Transverse = 7,
    /// Rotate 270 degrees clockwise (90 CCW).
    Rotate270CW = 8,
}

impl Orientation {
    /// Returns true if this orientation swaps width and height when the
    /// image is displayed.
    #[inline]
    pub fn swaps_dimensions(self) -> bool {
        matches!(
            self,
            Orientation::Transpose
                | Orientation::Rotate90CW
                | Orientation::Transverse
                | Orientation::Rotate270CW
        )
    }
}

impl From<u32> for Orientation {
    fn from(value: u32) -> Self {
        match value {
            1 => Orientation::Normal,
            2 => Orientation::FlipHorizontal,
            3 => Orientation::Rotate180,
            4 => Orientation::FlipVertical,
            5 => Orientation::Transpose,
            6 => Orientation::Rotate90CW,
            7 => Orientation::Transverse,
            8 => Orientation::Rotate270CW,
            _ => Orientation::Normal,
        }
    }
}

/// A captured photo with RGB pixel data.
#[derive(Debug, Clone)]
pub struct Photo {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGB pixel data in row-major order (3 bytes per pixel).
    /// Length should be width * height * 3.
    pub pixels: Vec<u8>,
    /// Pixel scale factor: raw pixels per logical point.
    pub scale: f64,
    /// EXIF orientation tag, preserved through cropping.
    pub orientation: Orientation,
}

impl Photo {
    /// Create a new Photo at scale 1.0 with normal orientation.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self::with_scale(width, height, pixels, 1.0)
    }

    /// Create a new Photo with an explicit pixel scale factor.
    ///
    /// A non-finite or non-positive scale is replaced with 1.0.
    pub fn with_scale(width: u32, height: u32, pixels: Vec<u8>, scale: f64) -> Self {
        debug_assert_eq!(
            pixels.len(),
            (width * height * 3) as usize,
            "Pixel buffer size mismatch"
        );
        let scale = if scale.is_finite() && scale > 0.0 {
            scale
        } else {
            log::warn!("invalid pixel scale {scale}, falling back to 1.0");
            1.0
        };
        Self {
            width,
            height,
            pixels,
            scale,
            orientation: Orientation::default(),
        }
    }

    /// Create a Photo from an image::RgbImage.
    pub fn from_rgb_image(img: image::RgbImage, scale: f64) -> Self {
        let (width, height) = img.dimensions();
        Self::with_scale(width, height, img.into_raw(), scale)
    }

    /// Convert to an image::RgbImage for further processing.
    pub fn to_rgb_image(&self) -> Option<image::RgbImage> {
        image::RgbImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    /// Size of the photo in logical points (pixel dimensions divided by the
    /// scale factor).
    pub fn logical_size(&self) -> Size {
        Size::new(self.width as f64 / self.scale, self.height as f64 / self.scale)
    }

    /// The photo's bounds in pixel space, origin (0, 0).
    pub fn pixel_bounds(&self) -> Rect {
        Rect::from_size(Size::new(self.width as f64, self.height as f64))
    }

    /// Get the size of the pixel buffer in bytes.
    pub fn byte_size(&self) -> usize {
        self.pixels.len()
    }

    /// Check if this is an empty/invalid photo.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }
}
