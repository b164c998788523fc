use std::path::PathBuf;

use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Config file not found: {}", path.display())]
    MissingConfig { path: PathBuf },

    #[error("Failed to serialize configuration: {0}")]
    ConfigSerialize(#[from] serde_json::Error),

    #[error("Failed to initialize logging: {0}")]
    Logging(String),

    #[error(transparent)]
    Pipeline(#[from] spritecrop::Error),
}
