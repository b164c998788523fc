use image::RgbaImage;

use crate::types::BoundingBox;

/// Find the inclusive bounding box of all pixels with alpha > 0.
///
/// Returns `None` when no pixel qualifies, including for zero-sized canvases.
/// A single opaque pixel gives a box with `min == max`, which is distinct
/// from `None`.
pub fn find_bounding_box(image: &RgbaImage) -> Option<BoundingBox> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return None;
    }

    let mut min_x = u32::MAX;
    let mut min_y = u32::MAX;
    let mut max_x = 0u32;
    let mut max_y = 0u32;
    let mut found = false;

    // Scan rows as slices of raw RGBA to avoid per-pixel bounds checks
    let row_len = width as usize * 4;
    for (y, row) in image.as_raw().chunks_exact(row_len).enumerate() {
        let mut first = None;
        let mut last = None;
        for (x, px) in row.chunks_exact(4).enumerate() {
            if px[3] > 0 {
                if first.is_none() {
                    first = Some(x as u32);
                }
                last = Some(x as u32);
            }
        }

        if let (Some(first), Some(last)) = (first, last) {
            let y = y as u32;
            if !found {
                min_y = y;
                found = true;
            }
            max_y = y;
            min_x = min_x.min(first);
            max_x = max_x.max(last);
        }
    }

    found.then(|| BoundingBox::new(min_x, min_y, max_x, max_y))
}

/// Alpha coverage of the opaque region: number of pixels with alpha > 0.
pub fn count_visible_pixels(image: &RgbaImage) -> usize {
    image.pixels().filter(|p| p[3] > 0).count()
}
