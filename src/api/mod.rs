//! High-level, ergonomic library API: the three batch pipelines (analyze,
//! shared-box trim, individual trim) plus the per-directory helpers they are
//! built from. Prefer these entrypoints over the low-level processing modules
//! when integrating spritecrop.
use std::fs;
use std::path::Path;

use image::RgbaImage;
use tracing::{debug, info, warn};

use crate::core::params::{PipelineConfig, is_plain_dir_name};
use crate::core::processing::bbox::{count_visible_pixels, find_bounding_box};
use crate::core::processing::composite::Compositor;
use crate::core::processing::save::{save_annotated_composite, save_cropped_image, save_tight_crop};
use crate::error::{Error, Result};
use crate::io::coordinates::CoordinateTable;
use crate::io::images::{list_category_images, load_rgba};
use crate::types::{BoundingBox, CategoryBox};

/// Batch processing report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
}

/// What the analyzer ended up doing with one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryOutcome {
    /// Input directory absent
    NotFound,
    /// Directory present but nothing decodable in it
    NoImages,
    /// Composite written, but it has no visible pixels; no table entry
    Empty,
    /// Composite written and box recorded
    Recorded { bbox: BoundingBox, entry: CategoryBox },
    /// Composite could not be written
    Failed(String),
}

/// Result of an analyzer run.
#[derive(Debug, Clone, Default)]
pub struct AnalyzeReport {
    /// Outcome per configured category, in configuration order
    pub outcomes: Vec<(String, CategoryOutcome)>,
    /// The table that was written to the coordinate document
    pub table: CoordinateTable,
}

impl AnalyzeReport {
    pub fn outcome(&self, category: &str) -> Option<&CategoryOutcome> {
        self.outcomes
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, outcome)| outcome)
    }
}

/// Composite every image in `dir` bottom to top in file-name order.
///
/// Images that fail to decode, or whose canvas differs from the first
/// decodable one, are left out with a warning. Returns `Ok(None)` when no
/// image could be used.
pub fn composite_directory(dir: &Path) -> Result<Option<RgbaImage>> {
    let mut compositor: Option<Compositor> = None;

    for path in list_category_images(dir)? {
        let layer = match load_rgba(&path) {
            Ok(layer) => layer,
            Err(e) => {
                warn!("Skipping layer {:?}: {}", path, e);
                continue;
            }
        };

        match compositor.as_mut() {
            None => compositor = Some(Compositor::new(layer)),
            Some(c) => {
                if let Err(e) = c.add_layer(&layer, &path) {
                    warn!("Skipping layer: {}", e);
                }
            }
        }
    }

    Ok(compositor.map(|c| {
        debug!("Composited {} layer(s) from {:?}", c.layer_count(), dir);
        c.finish()
    }))
}

/// Run the analyzer for a single category.
///
/// Writes `<analyze_dir>/<category>.png` whenever at least one image could
/// be composited. The returned outcome says whether a box should be recorded.
pub fn analyze_category(config: &PipelineConfig, category: &str) -> Result<CategoryOutcome> {
    let dir = config.category_input_dir(category);
    if !dir.is_dir() {
        warn!("Directory {:?} does not exist", dir);
        return Ok(CategoryOutcome::NotFound);
    }

    info!("Processing {}...", category);

    let Some(composite) = composite_directory(&dir)? else {
        warn!("No images found in {:?}", dir);
        return Ok(CategoryOutcome::NoImages);
    };

    let mut bbox = find_bounding_box(&composite);
    if config.center_horizontally {
        bbox = bbox.map(|b| b.centered_horizontally(composite.width()));
    }

    let output = config.analyze_dir.join(format!("{category}.png"));
    save_annotated_composite(&composite, bbox.as_ref(), &config.outline, &output)?;

    match bbox {
        Some(bbox) => {
            info!("Bounding box: {}", bbox);
            debug!("Visible pixels: {}", count_visible_pixels(&composite));
            Ok(CategoryOutcome::Recorded {
                bbox,
                entry: bbox.to_category_box(),
            })
        }
        None => {
            debug!("Composite for {} is fully transparent", category);
            Ok(CategoryOutcome::Empty)
        }
    }
}

/// Analyze every configured category and write the coordinate document.
///
/// The document is regenerated from scratch on every run and is written even
/// when no category produced a box. Category-level failures are logged and
/// reported in the outcome list; they never stop the remaining categories.
pub fn analyze_categories(config: &PipelineConfig) -> Result<AnalyzeReport> {
    config.validate()?;
    fs::create_dir_all(&config.analyze_dir)?;

    let mut report = AnalyzeReport::default();

    for category in &config.categories {
        let outcome = match analyze_category(config, category) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!("Error processing {}: {}", category, e);
                CategoryOutcome::Failed(e.to_string())
            }
        };

        if let CategoryOutcome::Recorded { entry, .. } = &outcome {
            report.table.insert(category.clone(), *entry);
        }
        report.outcomes.push((category.clone(), outcome));
    }

    report.table.save(&config.coordinates_file)?;
    info!(
        "Analysis complete: {} of {} categories recorded",
        report.table.len(),
        config.categories.len()
    );
    Ok(report)
}

/// Crop every image of every category in the coordinate document to that
/// category's stored box, writing `<trim_dir>/<category>/<file name>`.
///
/// A missing or malformed document aborts before anything is written.
/// Categories whose input directory is gone, or whose name is not a plain
/// directory name, are skipped; per-image failures are counted and the run
/// continues.
pub fn trim_categories(config: &PipelineConfig) -> Result<BatchReport> {
    trim_table(config, None)
}

/// Like [`trim_categories`], restricted to the categories named in `only`.
/// Names without an entry in the document are skipped with a warning.
pub fn trim_selected_categories(config: &PipelineConfig, only: &[String]) -> Result<BatchReport> {
    trim_table(config, Some(only))
}

fn trim_table(config: &PipelineConfig, only: Option<&[String]>) -> Result<BatchReport> {
    let table = CoordinateTable::load(&config.coordinates_file)?;
    fs::create_dir_all(&config.trim_dir)?;

    let mut report = BatchReport::default();

    if let Some(only) = only {
        for name in only.iter().filter(|name| table.get(name).is_none()) {
            warn!("No coordinates recorded for {}", name);
            report.skipped += 1;
        }
    }

    let selected = table.iter().filter(|(category, _)| {
        only.is_none_or(|only| only.iter().any(|name| name.as_str() == *category))
    });

    for (category, entry) in selected {
        if !is_plain_dir_name(category) {
            warn!("Ignoring coordinate entry with unusable name {:?}", category);
            report.skipped += 1;
            continue;
        }

        info!("Processing {}...", category);

        let input_dir = config.category_input_dir(category);
        if !input_dir.is_dir() {
            warn!("Directory {:?} does not exist", input_dir);
            report.skipped += 1;
            continue;
        }

        let images = match list_category_images(&input_dir) {
            Ok(images) => images,
            Err(e) => {
                warn!("Error listing {:?}: {}", input_dir, e);
                report.errors += 1;
                continue;
            }
        };
        if images.is_empty() {
            info!("No PNG files found in {:?}", input_dir);
            continue;
        }

        let output_dir = config.trim_dir.join(category);
        if let Err(e) = fs::create_dir_all(&output_dir) {
            warn!("Error creating {:?}: {}", output_dir, e);
            report.errors += 1;
            continue;
        }

        let rect = entry.crop_rect();
        for image_path in images {
            let Some(file_name) = image_path.file_name() else {
                continue;
            };
            let output_path = output_dir.join(file_name);
            match save_cropped_image(&image_path, rect, &output_path) {
                Ok(_) => report.processed += 1,
                Err(e) => {
                    warn!("Error trimming {:?}: {}", image_path, e);
                    report.errors += 1;
                }
            }
        }
    }

    info!(
        "Trimming completed! processed={} skipped={} errors={}",
        report.processed, report.skipped, report.errors
    );
    Ok(report)
}

/// Crop every image of every configured category to its own opaque pixels,
/// writing `<individual_dir>/<category>/<file name>`. Ignores the coordinate
/// document entirely.
pub fn trim_individually(config: &PipelineConfig) -> Result<BatchReport> {
    config.validate()?;
    fs::create_dir_all(&config.individual_dir)?;

    let mut report = BatchReport::default();

    for category in &config.categories {
        let input_dir = config.category_input_dir(category);
        if !input_dir.is_dir() {
            warn!("Directory {:?} does not exist", input_dir);
            report.skipped += 1;
            continue;
        }

        info!("Processing {}...", category);

        let images = match list_category_images(&input_dir) {
            Ok(images) => images,
            Err(e) => {
                warn!("Error listing {:?}: {}", input_dir, e);
                report.errors += 1;
                continue;
            }
        };
        if images.is_empty() {
            warn!("No images found in {:?}", input_dir);
            continue;
        }

        let output_dir = config.individual_dir.join(category);
        if let Err(e) = fs::create_dir_all(&output_dir) {
            warn!("Error creating {:?}: {}", output_dir, e);
            report.errors += 1;
            continue;
        }

        for image_path in images {
            let Some(file_name) = image_path.file_name() else {
                continue;
            };
            let output_path = output_dir.join(file_name);
            match save_tight_crop(&image_path, &output_path) {
                Ok(_) => report.processed += 1,
                Err(e @ Error::NoQualifyingPixels { .. }) => {
                    warn!("{}", e);
                    report.skipped += 1;
                }
                Err(e) => {
                    warn!("Error trimming {:?}: {}", image_path, e);
                    report.errors += 1;
                }
            }
        }
    }

    info!(
        "Individual trimming completed! processed={} skipped={} errors={}",
        report.processed, report.skipped, report.errors
    );
    Ok(report)
}
