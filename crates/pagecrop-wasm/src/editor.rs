//! Crop editor WASM bindings.
//!
//! Exposes the interactive crop-rectangle editor to JavaScript. The host UI
//! draws the image and the four corner handles, forwards drag events to
//! [`JsCropEditor::move_corner`], and reads the handle positions back from
//! [`JsCropEditor::corner_points`] after every change.
//!
//! # Corner Convention
//!
//! Corner indices are 0 = top-left, 1 = top-right, 2 = bottom-left,
//! 3 = bottom-right, matching the core editor.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! const editor = new JsCropEditor(photo);
//!
//! onDrag((handleIndex, x, y) => {
//!   editor.move_corner(handleIndex, x, y);
//!   redrawHandles(editor.corner_points());
//! });
//!
//! onConfirm(() => {
//!   const cropped = editor.crop();
//!   if (cropped) upload(cropped);
//! });
//! ```

use crate::types::JsPhoto;
use pagecrop_core::editor::CropEditor;
use pagecrop_core::geometry::{Point, Rect};
use wasm_bindgen::prelude::*;

/// Interactive crop-rectangle editor for JavaScript.
#[wasm_bindgen]
pub struct JsCropEditor {
    inner: CropEditor,
}

#[wasm_bindgen]
impl JsCropEditor {
    /// Create an editor over a photo with the default inset rectangle.
    ///
    /// The photo is copied into the editor; the editor owns it for the
    /// duration of the review session.
    #[wasm_bindgen(constructor)]
    pub fn new(photo: &JsPhoto) -> JsCropEditor {
        Self {
            inner: CropEditor::new(photo.to_photo()),
        }
    }

    /// Create an editor with a caller-supplied initial rectangle, in
    /// logical coordinates. The rectangle is sanitized to the editor's
    /// minimum-size invariant.
    pub fn with_rect(photo: &JsPhoto, x: f64, y: f64, width: f64, height: f64) -> JsCropEditor {
        Self {
            inner: CropEditor::with_rect(photo.to_photo(), Rect::new(x, y, width, height)),
        }
    }

    /// The current crop rectangle as `{ origin: { x, y }, size: { width, height } }`.
    pub fn rect(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.rect()).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// The four corner handle positions as 8 floats, x/y interleaved in
    /// corner-index order: `[x0, y0, x1, y1, x2, y2, x3, y3]`.
    pub fn corner_points(&self) -> Vec<f64> {
        self.inner
            .corner_points()
            .iter()
            .flat_map(|p| [p.x, p.y])
            .collect()
    }

    /// Move one corner handle to a point in logical coordinates.
    ///
    /// Out-of-range indices and non-finite points are ignored; the
    /// diagonally opposite corner stays fixed and the rectangle never
    /// shrinks below the minimum edge length.
    pub fn move_corner(&mut self, index: usize, x: f64, y: f64) {
        self.inner.move_corner(index, Point::new(x, y));
    }

    /// Restore the default inset rectangle.
    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// Render the photo cropped to the current rectangle.
    ///
    /// Returns `undefined` when there is nothing to crop (empty photo or a
    /// rectangle that misses the image entirely).
    pub fn crop(&self) -> Option<JsPhoto> {
        self.inner.crop().map(JsPhoto::from_photo)
    }
}
