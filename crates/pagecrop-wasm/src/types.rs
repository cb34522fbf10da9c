//! WASM-compatible wrapper types for photo data.
//!
//! This module provides the JavaScript-friendly photo type that wraps the
//! core `Photo`, handling the conversion between Rust and JavaScript data
//! representations.

use pagecrop_core::photo::{Orientation, Photo};
use wasm_bindgen::prelude::*;

/// A captured photo wrapper for JavaScript.
///
/// Wraps the core `Photo` type: RGB pixel data plus the pixel scale factor
/// and EXIF orientation tag the capture layer reported.
///
/// # Memory Management
///
/// The pixel data lives in WASM memory; `pixels()` copies it out as a
/// `Uint8Array`. The `free()` method can be called to release WASM memory
/// eagerly, but wasm-bindgen's finalizer handles cleanup automatically.
#[wasm_bindgen]
pub struct JsPhoto {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    scale: f64,
    orientation: u32,
}

#[wasm_bindgen]
impl JsPhoto {
    /// Create a new JsPhoto from dimensions, pixel data and scale.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `pixels` - RGB pixel data (3 bytes per pixel, row-major order)
    /// * `scale` - Pixel scale factor (pixels per logical point)
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>, scale: f64) -> JsPhoto {
        let photo = Photo::with_scale(width, height, pixels, scale);
        Self::from_photo(photo)
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the pixel scale factor
    #[wasm_bindgen(getter)]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Get the EXIF orientation tag (1-8)
    #[wasm_bindgen(getter)]
    pub fn orientation(&self) -> u32 {
        self.orientation
    }

    /// Get the number of bytes in the pixel buffer (width * height * 3)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGB pixel data as Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Explicitly free WASM memory.
    ///
    /// Optional - wasm-bindgen's finalizer will handle cleanup automatically.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsPhoto {
    /// Create a JsPhoto from a core Photo.
    pub(crate) fn from_photo(photo: Photo) -> Self {
        Self {
            width: photo.width,
            height: photo.height,
            scale: photo.scale,
            orientation: photo.orientation as u32,
            pixels: photo.pixels,
        }
    }

    /// Convert back to a core Photo. Clones the pixel data.
    pub(crate) fn to_photo(&self) -> Photo {
        let mut photo = Photo::with_scale(self.width, self.height, self.pixels.clone(), self.scale);
        photo.orientation = Orientation::from(self.orientation);
        photo
    }
}
