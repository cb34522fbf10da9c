//! Capture-session seam and the one-shot photo handoff.
//!
//! Camera hardware is an external collaborator behind the
//! [`CaptureSession`] trait. A capture request hands the adapter a
//! [`PhotoSender`]; the adapter's callback thread delivers the decoded
//! photo through it exactly once, and the main thread picks it up from the
//! paired [`PhotoReceiver`]. The channel holds one element and the sender
//! is consumed on delivery, so "at most once per capture request" is
//! enforced by construction.

use crate::photo::Photo;
use crossbeam_channel::{bounded, Receiver, Sender};

/// Create a connected sender/receiver pair for one capture request.
pub fn photo_handoff() -> (PhotoSender, PhotoReceiver) {
    let (tx, rx) = bounded(1);
    (PhotoSender { tx }, PhotoReceiver { rx })
}

/// Producer half of the handoff, held by the capture adapter.
pub struct PhotoSender {
    tx: Sender<Photo>,
}

impl PhotoSender {
    /// Deliver the captured photo. Consumes the sender; delivery is
    /// fire-and-forget, so a receiver that already went away is not an
    /// error.
    pub fn deliver(self, photo: Photo) {
        if self.tx.send(photo).is_err() {
            log::debug!("photo receiver dropped before delivery");
        }
    }
}

/// Consumer half of the handoff, held by the main thread.
pub struct PhotoReceiver {
    rx: Receiver<Photo>,
}

impl PhotoReceiver {
    /// Take the photo if it has been delivered. Yields a photo at most
    /// once; subsequent calls return `None`.
    pub fn try_take(&mut self) -> Option<Photo> {
        self.rx.try_recv().ok()
    }

    /// Block until the photo arrives, or return `None` when the sender was
    /// dropped without delivering (capture failed or was abandoned).
    pub fn take(&mut self) -> Option<Photo> {
        self.rx.recv().ok()
    }
}

/// A camera capture session, as seen by the review flow.
///
/// Implementations wrap the platform media-capture API. Permission
/// negotiation happens behind [`start`](CaptureSession::start): a session
/// without a granted permission stays stopped.
pub trait CaptureSession {
    /// Begin producing frames. Idempotent; starting a running session is a
    /// no-op.
    fn start(&mut self);

    /// Whether the session is currently producing frames.
    fn is_running(&self) -> bool;

    /// Request a single photo, to be delivered through `sender` exactly
    /// once when the hardware callback fires.
    fn request_photo(&mut self, sender: PhotoSender);
}
