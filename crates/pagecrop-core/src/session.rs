//! One photo-review session: a crop editor plus the confirm sink.
//!
//! The host creates a [`ReviewSession`] when a captured photo arrives,
//! routes corner drags to the embedded editor, and ends the session with
//! [`ReviewSession::confirm`] or [`ReviewSession::cancel`]. Both consume
//! the session; the photo and rectangle do not outlive it.

use crate::editor::CropEditor;
use crate::geometry::Rect;
use crate::photo::Photo;

type ConfirmSink = Box<dyn FnMut(Photo)>;

/// A single review pass over one captured photo.
pub struct ReviewSession {
    editor: CropEditor,
    on_confirm: ConfirmSink,
}

impl ReviewSession {
    /// Start a session with the default crop rectangle.
    ///
    /// `on_confirm` receives the cropped photo when the user confirms.
    pub fn new(photo: Photo, on_confirm: impl FnMut(Photo) + 'static) -> Self {
        Self {
            editor: CropEditor::new(photo),
            on_confirm: Box::new(on_confirm),
        }
    }

    /// Start a session with a caller-supplied initial rectangle.
    pub fn with_rect(photo: Photo, rect: Rect, on_confirm: impl FnMut(Photo) + 'static) -> Self {
        Self {
            editor: CropEditor::with_rect(photo, rect),
            on_confirm: Box::new(on_confirm),
        }
    }

    pub fn editor(&self) -> &CropEditor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut CropEditor {
        &mut self.editor
    }

    /// Render the crop and hand it to the confirm sink.
    ///
    /// Returns true when a photo was delivered. A crop that yields nothing
    /// (empty photo, rectangle off the image) ends the session without a
    /// delivery.
    pub fn confirm(mut self) -> bool {
        match self.editor.crop() {
            Some(cropped) => {
                log::debug!(
                    "confirming crop: {}x{} px at scale {}",
                    cropped.width,
                    cropped.height,
                    cropped.scale
                );
                (self.on_confirm)(cropped);
                true
            }
            None => {
                log::debug!("confirm produced no crop, ending session");
                false
            }
        }
    }

    /// Discard the session without delivering anything.
    pub fn cancel(self) {
        log::debug!("review session cancelled");
    }
}
