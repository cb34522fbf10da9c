//! Photo decoding WASM bindings.
//!
//! The host captures a frame in JavaScript (canvas, file input, or a
//! `getUserMedia` still) and passes the encoded bytes here along with the
//! device pixel ratio, getting back a `JsPhoto` ready for the crop editor.

use crate::types::JsPhoto;
use pagecrop_core::decode;
use wasm_bindgen::prelude::*;

/// Decode captured photo bytes (JPEG or PNG) into a photo.
///
/// # Arguments
///
/// * `bytes` - Encoded image bytes as a `Uint8Array`
/// * `scale` - Pixel scale factor for this photo (e.g. `devicePixelRatio`)
///
/// # Errors
///
/// Returns an error if the bytes are not a recognized image format, the
/// data is corrupted, or the scale is not a positive finite number.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const bytes = new Uint8Array(await blob.arrayBuffer());
/// const photo = decode_photo(bytes, window.devicePixelRatio);
/// console.log(`Decoded ${photo.width}x${photo.height} at scale ${photo.scale}`);
/// ```
#[wasm_bindgen]
pub fn decode_photo(bytes: &[u8], scale: f64) -> Result<JsPhoto, JsValue> {
    decode::decode_photo(bytes, scale)
        .map(JsPhoto::from_photo)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Read the EXIF orientation tag (1-8) from encoded photo bytes.
///
/// Returns 1 (normal) when there is no EXIF data.
#[wasm_bindgen]
pub fn photo_orientation(bytes: &[u8]) -> u32 {
    decode::photo_orientation(bytes) as u32
}
