use image::{RgbaImage, imageops};

use crate::types::CropRect;

/// Cut `rect` out of `image`.
///
/// The output is always exactly `rect.width x rect.height`. Any part of the
/// region that falls outside the source stays fully transparent, so every
/// image cropped with the same rect comes out the same size. A rect with zero
/// width or height gives an empty (0x0-area) raster.
pub fn crop_to_rect(image: &RgbaImage, rect: CropRect) -> RgbaImage {
    let mut output = RgbaImage::new(rect.width, rect.height);
    if rect.is_empty() {
        return output;
    }

    let (src_w, src_h) = image.dimensions();
    if rect.x >= src_w || rect.y >= src_h {
        return output;
    }

    let copy_w = rect.width.min(src_w - rect.x);
    let copy_h = rect.height.min(src_h - rect.y);

    let view = imageops::crop_imm(image, rect.x, rect.y, copy_w, copy_h);
    // replace, not overlay: source pixels keep their exact alpha
    imageops::replace(&mut output, &view.to_image(), 0, 0);
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    /// Create a test image where each pixel encodes its own position.
    fn test_image(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| Rgba([x as u8, y as u8, 0, 255]))
    }

    fn rect(x: u32, y: u32, width: u32, height: u32) -> CropRect {
        CropRect {
            x,
            y,
            width,
            height,
        }
    }

    #[test]
    fn test_full_crop() {
        let img = test_image(10, 8);
        let out = crop_to_rect(&img, rect(0, 0, 10, 8));
        assert_eq!(out, img);
    }

    #[test]
    fn test_inner_crop() {
        let img = test_image(10, 10);
        let out = crop_to_rect(&img, rect(2, 3, 4, 5));
        assert_eq!(out.dimensions(), (4, 5));
        assert_eq!(out.get_pixel(0, 0), &Rgba([2, 3, 0, 255]));
        assert_eq!(out.get_pixel(3, 4), &Rgba([5, 7, 0, 255]));
    }

    #[test]
    fn test_zero_area_crop() {
        let img = test_image(10, 10);
        let out = crop_to_rect(&img, rect(5, 5, 0, 0));
        assert_eq!(out.dimensions(), (0, 0));
        let out = crop_to_rect(&img, rect(5, 5, 3, 0));
        assert_eq!(out.width() * out.height(), 0);
    }

    #[test]
    fn test_overhanging_crop_is_padded() {
        let img = test_image(4, 4);
        let out = crop_to_rect(&img, rect(2, 2, 5, 3));
        assert_eq!(out.dimensions(), (5, 3));
        assert_eq!(out.get_pixel(1, 1), &Rgba([3, 3, 0, 255]));
        assert_eq!(out.get_pixel(2, 0), &Rgba([0, 0, 0, 0]));
        assert_eq!(out.get_pixel(0, 2), &Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_crop_entirely_outside() {
        let img = test_image(4, 4);
        let out = crop_to_rect(&img, rect(10, 10, 2, 2));
        assert_eq!(out.dimensions(), (2, 2));
        assert!(out.pixels().all(|p| p[3] == 0));
    }
}
