//! JPEG encoding WASM bindings.

use crate::types::JsPhoto;
use pagecrop_core::encode;
use wasm_bindgen::prelude::*;

/// Encode a photo to JPEG bytes.
///
/// # Arguments
///
/// * `photo` - The photo to encode (typically the confirmed crop)
/// * `quality` - JPEG quality (1-100, clamped)
///
/// # Returns
///
/// A `Uint8Array` of JPEG bytes, or an error for an empty or inconsistent
/// photo.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const cropped = editor.crop();
/// if (cropped) {
///   const jpeg = encode_jpeg(cropped, 85);
///   await upload(new Blob([jpeg], { type: 'image/jpeg' }));
/// }
/// ```
#[wasm_bindgen]
pub fn encode_jpeg(photo: &JsPhoto, quality: u8) -> Result<Vec<u8>, JsValue> {
    encode::encode_jpeg(&photo.to_photo(), quality).map_err(|e| JsValue::from_str(&e.to_string()))
}
