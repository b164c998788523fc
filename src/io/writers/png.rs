use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};

use crate::error::{Error, Result};

/// Encode `image` as an 8-bit RGBA PNG at `output`, replacing any existing file.
///
/// PNG cannot hold a zero-width or zero-height raster; such images are
/// refused with `Error::EmptyCrop` before the file is created.
pub fn write_rgba_png(output: &Path, image: &RgbaImage) -> Result<()> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::EmptyCrop {
            path: output.to_path_buf(),
        });
    }

    let file = File::create(output)?;
    let writer = BufWriter::new(file);
    let encoder = PngEncoder::new(writer);
    encoder.write_image(image.as_raw(), width, height, ExtendedColorType::Rgba8)?;
    Ok(())
}
