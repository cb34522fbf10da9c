//! Pixel-space cropping.
//!
//! The crop kernel takes an absolute rectangle in pixel coordinates,
//! intersects it with the photo's bounds, and copies the covered rows into
//! a fresh buffer. A rectangle that misses the photo entirely yields `None`
//! rather than an error; the review flow treats that as "nothing to crop".

use crate::geometry::Rect;
use crate::photo::Photo;

/// Crop a photo to a pixel-space rectangle.
///
/// # Arguments
///
/// * `photo` - Source photo to crop
/// * `pixel_rect` - Crop region in pixel coordinates (may extend beyond
///   the photo; the overlap is what gets rendered)
///
/// # Returns
///
/// A new `Photo` containing the covered region, carrying the source's
/// scale factor and orientation tag. `None` when the photo is empty or the
/// rectangle does not intersect the photo's pixel bounds.
///
/// # Behavior
///
/// - Edges are rounded to whole pixels after intersection
/// - When the overlap rounds below one pixel, the output is floored at 1x1
pub fn crop_photo(photo: &Photo, pixel_rect: &Rect) -> Option<Photo> {
    if photo.is_empty() {
        return None;
    }

    let region = pixel_rect.intersect(&photo.pixel_bounds())?;

    // Round the intersection to whole pixels, keeping edges inside bounds
    let left = (region.min_x().round() as u32).min(photo.width.saturating_sub(1));
    let top = (region.min_y().round() as u32).min(photo.height.saturating_sub(1));
    let right = (region.max_x().round() as u32).min(photo.width);
    let bottom = (region.max_y().round() as u32).min(photo.height);

    let out_width = right.saturating_sub(left).max(1);
    let out_height = bottom.saturating_sub(top).max(1);

    let row_bytes = (out_width * 3) as usize;
    let src_stride = (photo.width * 3) as usize;
    let mut output = vec![0u8; (out_width * out_height * 3) as usize];

    for y in 0..out_height {
        let src_start = ((top + y) as usize) * src_stride + (left * 3) as usize;
        let dst_start = (y as usize) * row_bytes;
        output[dst_start..dst_start + row_bytes]
            .copy_from_slice(&photo.pixels[src_start..src_start + row_bytes]);
    }

    Some(Photo {
        width: out_width,
        height: out_height,
        pixels: output,
        scale: photo.scale,
        orientation: photo.orientation,
    })
}


// ============================================================================
// Property-Based Tests
// ============================================================================
