use std::fs;
use std::path::{Path, PathBuf};

use image::RgbaImage;
use tracing::debug;

use crate::error::{Error, Result};

/// True for regular files whose extension is `png`, in any ASCII case.
pub fn is_png_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
}

/// List the PNG files directly inside `dir`, sorted by file name.
///
/// The sort makes compositing order independent of how the filesystem
/// happens to enumerate entries.
pub fn list_category_images(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(Error::MissingInputDirectory {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if is_png_file(&path) {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    debug!("Found {} image(s) in {:?}", files.len(), dir);
    Ok(files)
}

/// Decode any supported raster and normalize it to 8-bit RGBA.
///
/// The file handle lives only for the duration of the call.
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let image = image::open(path)?;
    Ok(image.to_rgba8())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_is_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.png", "a.PNG", "c.png", "notes.txt", "d.png.bak"] {
            fs::write(dir.path().join(name), b"").unwrap();
        }
        fs::create_dir(dir.path().join("nested.png")).unwrap();

        let files = list_category_images(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.PNG", "b.png", "c.png"]);
    }

    #[test]
    fn test_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = list_category_images(&dir.path().join("absent")).unwrap_err();
        assert!(matches!(err, Error::MissingInputDirectory { .. }));
    }

    #[test]
    fn test_load_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        fs::write(&path, b"not a png").unwrap();
        assert!(load_rgba(&path).is_err());
    }
}
