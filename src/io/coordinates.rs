//! The coordinate document: one `{x, y, width, height}` entry per category,
//! stored as pretty-printed UTF-8 JSON so reruns produce readable diffs.
//!
//! ```json
//! {
//!   "02-hair": {
//!     "x": 5,
//!     "y": 5,
//!     "width": 0,
//!     "height": 0
//!   }
//! }
//! ```
//!
//! Keys are written in sorted order, so the same table always serializes to
//! the same bytes.
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};
use crate::types::CategoryBox;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoordinateTable {
    entries: BTreeMap<String, CategoryBox>,
}

impl CoordinateTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, category: impl Into<String>, entry: CategoryBox) {
        self.entries.insert(category.into(), entry);
    }

    pub fn get(&self, category: &str) -> Option<&CategoryBox> {
        self.entries.get(category)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CategoryBox)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Parse a document. A missing file and a malformed document are
    /// reported as distinct errors.
    pub fn load(path: &Path) -> Result<Self> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(Error::CoordinatesNotFound {
                    path: path.to_path_buf(),
                });
            }
            Err(e) => return Err(Error::Io(e)),
        };

        serde_json::from_str(&text).map_err(|source| Error::CoordinatesMalformed {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write the whole table, replacing any previous document.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut json =
            serde_json::to_string_pretty(self).map_err(|source| Error::CoordinatesWrite {
                path: path.to_path_buf(),
                source,
            })?;
        json.push('\n');
        fs::write(path, json)?;

        info!("Coordinates saved to: {:?}", path);
        Ok(())
    }
}
