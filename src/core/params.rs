use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::OutlineStyle;

/// Category directories processed when no list is configured.
pub const DEFAULT_CATEGORIES: [&str; 8] = [
    "01-skin",
    "02-hair",
    "03-eye",
    "04-tops",
    "05-bottoms",
    "06-face-skin",
    "07-upper-skin",
    "08-lower-skin",
];

/// Pipeline configuration suitable for config files and CLI overrides.
///
/// Every field has a default, so a config file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Root holding one subdirectory per category
    pub input_dir: PathBuf,
    /// Annotated composites land here
    pub analyze_dir: PathBuf,
    /// Output root of the shared-box cropper
    pub trim_dir: PathBuf,
    /// Output root of the per-image cropper
    pub individual_dir: PathBuf,
    pub coordinates_file: PathBuf,
    /// Category directory names, processed in this order
    pub categories: Vec<String>,
    pub outline: OutlineStyle,
    /// Apply `BoundingBox::centered_horizontally` before recording
    pub center_horizontally: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("./input"),
            analyze_dir: PathBuf::from("./output/analyze"),
            trim_dir: PathBuf::from("./output/trim"),
            individual_dir: PathBuf::from("./output/individual_trim"),
            coordinates_file: PathBuf::from("./output/analyze/coordinates.json"),
            categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
            outline: OutlineStyle::default(),
            center_horizontally: false,
        }
    }
}

impl PipelineConfig {
    /// Lay all outputs out under `output_root` the way the defaults do under
    /// `./output`.
    pub fn with_output_root(mut self, output_root: &Path) -> Self {
        self.analyze_dir = output_root.join("analyze");
        self.trim_dir = output_root.join("trim");
        self.individual_dir = output_root.join("individual_trim");
        self.coordinates_file = self.analyze_dir.join("coordinates.json");
        self
    }

    /// Read a JSON config file; absent keys keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: PipelineConfig = serde_json::from_str(&text)
            .map_err(|e| Error::InvalidConfig(format!("{}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        for name in &self.categories {
            if !is_plain_dir_name(name) {
                return Err(Error::InvalidConfig(format!(
                    "category name must be a plain directory name, got {name:?}"
                )));
            }
        }
        if self.outline.width == 0 {
            return Err(Error::InvalidConfig(
                "outline width must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    pub fn category_input_dir(&self, category: &str) -> PathBuf {
        self.input_dir.join(category)
    }
}

/// True when `name` joins onto a directory as exactly one child component.
pub fn is_plain_dir_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(['/', '\\']) && name != "." && name != ".."
}
