//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O and image codec errors, and provides semantic variants
//! for the category-, image- and run-level failures of the pipelines.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Input directory does not exist: {}", path.display())]
    MissingInputDirectory { path: PathBuf },

    #[error("No visible content in {}", path.display())]
    NoQualifyingPixels { path: PathBuf },

    #[error("Coordinate document not found: {}. Run `analyze` first", path.display())]
    CoordinatesNotFound { path: PathBuf },

    #[error("Invalid coordinate document {}: {source}", path.display())]
    CoordinatesMalformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write coordinate document {}: {source}", path.display())]
    CoordinatesWrite {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(
        "Canvas size mismatch in {}: expected {}x{}, found {}x{}",
        path.display(), expected.0, expected.1, found.0, found.1
    )]
    CanvasMismatch {
        path: PathBuf,
        expected: (u32, u32),
        found: (u32, u32),
    },

    #[error("Crop region is empty, nothing to write to {}", path.display())]
    EmptyCrop { path: PathBuf },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
