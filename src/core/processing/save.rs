use std::path::Path;

use image::RgbaImage;
use tracing::{debug, info};

use crate::core::processing::annotate::draw_bounding_box;
use crate::core::processing::bbox::find_bounding_box;
use crate::core::processing::crop::crop_to_rect;
use crate::error::{Error, Result};
use crate::io::images::load_rgba;
use crate::io::writers::png::write_rgba_png;
use crate::types::{BoundingBox, CropRect, OutlineStyle};

/// Write the composite with `bbox` outlined, or unannotated when the
/// composite had no visible pixels.
pub fn save_annotated_composite(
    composite: &RgbaImage,
    bbox: Option<&BoundingBox>,
    style: &OutlineStyle,
    output: &Path,
) -> Result<()> {
    match bbox {
        Some(bbox) => write_rgba_png(output, &draw_bounding_box(composite, bbox, style))?,
        None => write_rgba_png(output, composite)?,
    }
    info!("Saved: {:?}", output);
    Ok(())
}

/// Load `source`, cut `rect` out of it and write the result to `output`.
///
/// Returns the written dimensions. The decoded source is dropped before
/// returning, whether or not the write succeeds.
pub fn save_cropped_image(source: &Path, rect: CropRect, output: &Path) -> Result<(u32, u32)> {
    let cropped = {
        let image = load_rgba(source)?;
        crop_to_rect(&image, rect)
    };
    write_rgba_png(output, &cropped)?;
    info!("Trimmed: {:?} -> {:?}", source, output);
    Ok(cropped.dimensions())
}

/// Load `source`, crop it to its own opaque pixels and write to `output`.
///
/// Fails with `Error::NoQualifyingPixels` (and writes nothing) when the image
/// is fully transparent. Returns the tight crop that was applied.
pub fn save_tight_crop(source: &Path, output: &Path) -> Result<CropRect> {
    let image = load_rgba(source)?;
    let bbox = find_bounding_box(&image).ok_or_else(|| Error::NoQualifyingPixels {
        path: source.to_path_buf(),
    })?;
    let rect = bbox.tight_crop();
    let trimmed = crop_to_rect(&image, rect);
    write_rgba_png(output, &trimmed)?;

    info!("Trimmed and saved: {:?}", output);
    debug!(
        "  Original size: {:?}, trimmed size: {:?}, bounding box: {:?}",
        image.dimensions(),
        trimmed.dimensions(),
        bbox.exclusive()
    );
    Ok(rect)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn write_fixture(path: &Path, image: &RgbaImage) {
        image.save(path).unwrap();
    }

    #[test]
    fn test_tight_crop_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("in.png");
        let out = dir.path().join("out.png");

        let mut img = RgbaImage::new(10, 10);
        img.put_pixel(2, 3, Rgba([1, 1, 1, 255]));
        img.put_pixel(6, 4, Rgba([1, 1, 1, 255]));
        write_fixture(&src, &img);

        let rect = save_tight_crop(&src, &out).unwrap();
        assert_eq!(
            rect,
            CropRect {
                x: 2,
                y: 3,
                width: 5,
                height: 2
            }
        );
        let written = image::open(&out).unwrap().to_rgba8();
        assert_eq!(written.dimensions(), (5, 2));
        assert_eq!(written.get_pixel(0, 0)[3], 255);
        assert_eq!(written.get_pixel(4, 1)[3], 255);
    }

    #[test]
    fn test_tight_crop_of_transparent_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("empty.png");
        let out = dir.path().join("out.png");
        write_fixture(&src, &RgbaImage::new(4, 4));

        let err = save_tight_crop(&src, &out).unwrap_err();
        assert!(matches!(err, Error::NoQualifyingPixels { .. }));
        assert!(!out.exists());
    }

    #[test]
    fn test_zero_area_crop_is_refused() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("in.png");
        let out = dir.path().join("out.png");
        write_fixture(&src, &RgbaImage::new(8, 8));

        let rect = CropRect {
            x: 5,
            y: 5,
            width: 0,
            height: 0,
        };
        let err = save_cropped_image(&src, rect, &out).unwrap_err();
        assert!(matches!(err, Error::EmptyCrop { .. }));
        assert!(!out.exists());
    }

    #[test]
    fn test_annotated_composite_without_box() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("hair.png");
        let composite = RgbaImage::new(3, 3);
        save_annotated_composite(&composite, None, &OutlineStyle::default(), &out).unwrap();
        let written = image::open(&out).unwrap().to_rgba8();
        assert!(written.pixels().all(|p| p[3] == 0));
    }
}
