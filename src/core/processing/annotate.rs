use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;

use crate::types::{BoundingBox, OutlineStyle};

/// Return a copy of `image` with `bbox` outlined.
///
/// The outermost stroke runs along the inclusive box edge; further strokes
/// step one pixel inward each, up to `style.width` strokes or until the box
/// is used up.
pub fn draw_bounding_box(
    image: &RgbaImage,
    bbox: &BoundingBox,
    style: &OutlineStyle,
) -> RgbaImage {
    let mut annotated = image.clone();
    let color = Rgba(style.color);

    let outer_w = bbox.max_x - bbox.min_x + 1;
    let outer_h = bbox.max_y - bbox.min_y + 1;

    for inset in 0..style.width {
        let w = outer_w.saturating_sub(2 * inset);
        let h = outer_h.saturating_sub(2 * inset);
        if w == 0 || h == 0 {
            break;
        }
        let rect =
            Rect::at((bbox.min_x + inset) as i32, (bbox.min_y + inset) as i32).of_size(w, h);
        draw_hollow_rect_mut(&mut annotated, rect, color);
    }

    annotated
}
