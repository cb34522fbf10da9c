//! The interactive crop-rectangle editor.
//!
//! A [`CropEditor`] owns one photo for the duration of a review session and
//! maintains the crop rectangle the user shapes by dragging corner handles.
//! The rectangle lives in logical (point) coordinates; [`CropEditor::crop`]
//! scales it into pixel space before rendering.
//!
//! # Clamp Policy
//!
//! Every mutation keeps both edges at least [`MIN_EDGE`] logical points
//! long: a dragged corner stops [`MIN_EDGE`] short of the opposite edge and
//! never crosses it, and coordinates are floored at zero. The rectangle is
//! not forced to stay inside the image bounds while dragging; the crop step
//! intersects with the pixel bounds instead.
//!
//! # Observers
//!
//! Rendering layers register a callback with [`CropEditor::observe`] and are
//! notified synchronously after each rectangle change. All mutation goes
//! through the gesture entry points on the owning thread; the editor itself
//! holds no locks.

use crate::crop;
use crate::geometry::{Corner, Point, Rect};
use crate::photo::Photo;

/// Minimum length of a crop edge, in logical points.
pub const MIN_EDGE: f64 = 50.0;

/// Padding between the image bounds and the default crop rectangle, in
/// logical points.
pub const DEFAULT_PADDING: f64 = 20.0;

type RectObserver = Box<dyn FnMut(&Rect)>;

/// Interactive editor for a crop rectangle over a captured photo.
pub struct CropEditor {
    photo: Photo,
    rect: Rect,
    corners: [Point; 4],
    observers: Vec<RectObserver>,
}

impl CropEditor {
    /// Create an editor with the default rectangle: the photo's logical
    /// bounds inset by [`DEFAULT_PADDING`] on each side.
    pub fn new(photo: Photo) -> Self {
        let rect = default_rect(&photo);
        Self::with_rect(photo, rect)
    }

    /// Create an editor with a caller-supplied initial rectangle.
    ///
    /// The rectangle is sanitized to the editor invariant: finite,
    /// non-negative origin, both edges at least [`MIN_EDGE`] long.
    pub fn with_rect(photo: Photo, rect: Rect) -> Self {
        let rect = sanitized(rect);
        Self {
            photo,
            rect,
            corners: rect.corners(),
            observers: Vec::new(),
        }
    }

    /// The photo under review.
    pub fn photo(&self) -> &Photo {
        &self.photo
    }

    /// The current crop rectangle in logical coordinates.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// The four corner handle positions, in index order (top-left,
    /// top-right, bottom-left, bottom-right).
    ///
    /// Always consistent with [`rect`](Self::rect): the corners are
    /// recomputed synchronously on every mutation.
    pub fn corner_points(&self) -> [Point; 4] {
        self.corners
    }

    /// Restore the default inset rectangle.
    pub fn reset(&mut self) {
        log::debug!("resetting crop rectangle to default inset");
        self.set_rect(default_rect(&self.photo));
    }

    /// Register an observer called synchronously after every rectangle
    /// change.
    pub fn observe(&mut self, observer: impl FnMut(&Rect) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Move one corner handle, holding the diagonally opposite corner fixed.
    ///
    /// `index` follows the corner convention (0 = top-left, 1 = top-right,
    /// 2 = bottom-left, 3 = bottom-right); an out-of-range index is a
    /// no-op, as is a non-finite target point. On the axes where the corner
    /// is the minimum the origin moves and the size compensates; on the
    /// axes where it is the maximum the size moves. The clamp policy keeps
    /// both edges at least [`MIN_EDGE`] long.
    pub fn move_corner(&mut self, index: usize, to: Point) {
        let Some(corner) = Corner::from_index(index) else {
            log::warn!("ignoring drag for out-of-range corner index {index}");
            return;
        };
        if !to.is_finite() {
            log::warn!("ignoring drag to non-finite point for corner {index}");
            return;
        }

        let opposite = self.rect.corner(corner.opposite());

        let (x, width) = if corner.is_left() {
            let x = to.x.clamp(0.0, (opposite.x - MIN_EDGE).max(0.0));
            (x, opposite.x - x)
        } else {
            let max_x = to.x.max(opposite.x + MIN_EDGE);
            (opposite.x, max_x - opposite.x)
        };
        let (y, height) = if corner.is_top() {
            let y = to.y.clamp(0.0, (opposite.y - MIN_EDGE).max(0.0));
            (y, opposite.y - y)
        } else {
            let max_y = to.y.max(opposite.y + MIN_EDGE);
            (opposite.y, max_y - opposite.y)
        };

        self.set_rect(Rect::new(x, y, width, height));
    }

    /// Render the photo cropped to the current rectangle.
    ///
    /// The rectangle is scaled from logical to pixel space with the photo's
    /// scale factor, then intersected with the pixel bounds. Returns `None`
    /// when the photo is empty or the scaled rectangle misses it entirely;
    /// the output photo carries the source's scale and orientation.
    pub fn crop(&self) -> Option<Photo> {
        let pixel_rect = self.rect.scaled(self.photo.scale);
        crop::crop_photo(&self.photo, &pixel_rect)
    }

    fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
        self.corners = rect.corners();
        for observer in &mut self.observers {
            observer(&self.rect);
        }
    }
}

/// Logical bounds inset by the default padding, sanitized for small photos.
fn default_rect(photo: &Photo) -> Rect {
    sanitized(Rect::from_size(photo.logical_size()).inset(DEFAULT_PADDING))
}

/// Force a rectangle onto the editor invariant: finite, origin at or above
/// zero, both edges at least [`MIN_EDGE`].
fn sanitized(rect: Rect) -> Rect {
    if !rect.is_finite() {
        return Rect::new(0.0, 0.0, MIN_EDGE, MIN_EDGE);
    }
    Rect::new(
        rect.origin.x.max(0.0),
        rect.origin.y.max(0.0),
        rect.size.width.max(MIN_EDGE),
        rect.size.height.max(MIN_EDGE),
    )
}


// ============================================================================
// Property-Based Tests
// ============================================================================
