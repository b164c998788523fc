#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};
use spritecrop::PipelineConfig;

pub fn transparent(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0]))
}

/// Transparent canvas with the given pixels set opaque.
pub fn with_pixels(width: u32, height: u32, opaque: &[(u32, u32)]) -> RgbaImage {
    let mut img = transparent(width, height);
    for &(x, y) in opaque {
        img.put_pixel(x, y, Rgba([200, 100, 50, 255]));
    }
    img
}

pub fn write_png(path: &Path, image: &RgbaImage) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dir");
    }
    image.save(path).expect("write png file");
}

pub fn read_png(path: &Path) -> RgbaImage {
    image::open(path).expect("open png").to_rgba8()
}

/// Config rooted in `root`: inputs under `root/input`, outputs under `root/output`.
pub fn config_in(root: &Path, categories: &[&str]) -> PipelineConfig {
    PipelineConfig {
        input_dir: root.join("input"),
        categories: categories.iter().map(|c| c.to_string()).collect(),
        ..PipelineConfig::default()
    }
    .with_output_root(&root.join("output"))
}

pub fn files_under(dir: &Path) -> Vec<PathBuf> {
    let mut out = Vec::new();
    if let Ok(entries) = fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                out.extend(files_under(&path));
            } else {
                out.push(path);
            }
        }
    }
    out.sort();
    out
}
