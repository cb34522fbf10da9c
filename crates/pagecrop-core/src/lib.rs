//! Pagecrop Core - Crop-review library for the homework capture flow
//!
//! This crate implements the flow behind "take a photo of a homework page,
//! adjust the crop, confirm": the photo data model, the interactive
//! crop-rectangle editor with draggable corner handles, the one-shot
//! handoff that carries a captured photo from the camera callback thread
//! to the main thread, and JPEG decode/encode at the two ends of the
//! pipeline.
//!
//! # Flow
//!
//! 1. A [`capture::CaptureSession`] adapter produces a photo, delivered
//!    through [`capture::photo_handoff`]
//! 2. A [`session::ReviewSession`] wraps the photo in a
//!    [`editor::CropEditor`]; the gesture layer drives
//!    [`editor::CropEditor::move_corner`] and renders from
//!    [`editor::CropEditor::corner_points`]
//! 3. On confirm, the editor crops the photo in pixel space and the result
//!    goes to the session's sink

pub mod capture;
pub mod crop;
pub mod decode;
pub mod editor;
pub mod encode;
pub mod geometry;
pub mod photo;
pub mod session;

pub use crop::crop_photo;
pub use editor::{CropEditor, DEFAULT_PADDING, MIN_EDGE};
pub use geometry::{Corner, Point, Rect, Size};
pub use photo::{Orientation, Photo};
pub use session::ReviewSession;
