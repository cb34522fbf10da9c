//! Pagecrop WASM - WebAssembly bindings for the crop-review flow
//!
//! This crate exposes the pagecrop-core functionality to
//! JavaScript/TypeScript hosts: a web UI captures the homework photo,
//! decodes it through these bindings, drives the crop editor with drag
//! events, and encodes the confirmed crop for upload.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper type for photo data
//! - `editor` - The interactive crop-rectangle editor
//! - `decode` - Photo decoding bindings (JPEG/PNG + EXIF orientation)
//! - `encode` - JPEG encoding bindings for the confirmed crop
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_photo, JsCropEditor, encode_jpeg } from '@pagecrop/wasm';
//!
//! await init();
//!
//! const bytes = new Uint8Array(await captured.arrayBuffer());
//! const photo = decode_photo(bytes, window.devicePixelRatio);
//! const editor = new JsCropEditor(photo);
//! ```

use wasm_bindgen::prelude::*;

mod decode;
mod editor;
mod encode;
mod types;

// Re-export public types
pub use decode::{decode_photo, photo_orientation};
pub use editor::JsCropEditor;
pub use encode::encode_jpeg;
pub use types::JsPhoto;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
