#![doc = r#"
spritecrop — bounding-box analysis and uniform cropping for layered sprite assets.

Character customization assets (skin, hair, eyes, clothing, ...) are usually
authored as full-canvas PNG layers. This crate finds where the visible pixels of
each category live and cuts every variant of that category to the same
rectangle, so layers stay aligned in a sprite sheet. It powers the `spritecrop`
CLI and can be embedded in your own Rust tools.

Pipelines
---------
- **analyze**: composite every image of a category (source-over, file-name
  order), find the bounding box of non-transparent pixels, save the composite
  with the box outlined, and record `{x, y, width, height}` per category in a
  JSON coordinate document.
- **trim**: crop every image of every recorded category to its stored box.
  All outputs of a category share the same dimensions.
- **individual-trim**: crop each image to its own tight box, ignoring the
  coordinate document.

Box conventions
---------------
[`BoundingBox`] corners are inclusive. The coordinate document stores
`width = max_x - min_x` and `height = max_y - min_y`, and the trim pipeline
uses those values directly as the crop span from `(x, y)`, so shared-box crops
are one pixel narrower and shorter than the opaque extent. Individual crops use
the exclusive form (`max + 1`) and keep every opaque pixel. Existing coordinate
documents depend on this, so both are kept as-is.

Quick start
-----------
```rust,no_run
use std::path::Path;
use spritecrop::{PipelineConfig, analyze_categories, trim_categories};

fn main() -> spritecrop::Result<()> {
    let config = PipelineConfig {
        input_dir: "./assets".into(),
        categories: vec!["01-skin".to_string(), "02-hair".to_string()],
        ..PipelineConfig::default()
    }
    .with_output_root(Path::new("./out"));

    let analysis = analyze_categories(&config)?;
    for (category, entry) in analysis.table.iter() {
        println!("{category}: {entry:?}");
    }

    let report = trim_categories(&config)?;
    println!("processed={} skipped={} errors={}", report.processed, report.skipped, report.errors);
    Ok(())
}
```

In-memory primitives
--------------------
```rust
use image::{Rgba, RgbaImage};
use spritecrop::{BoundingBox, composite_layers, crop_to_rect, find_bounding_box};

let mut top = RgbaImage::new(16, 16);
top.put_pixel(5, 5, Rgba([255, 0, 0, 255]));
let bottom = RgbaImage::new(16, 16);

let composite = composite_layers([&bottom, &top]).unwrap().unwrap();
let bbox = find_bounding_box(&composite).unwrap();
assert_eq!(bbox, BoundingBox::new(5, 5, 5, 5));

let tight = crop_to_rect(&composite, bbox.tight_crop());
assert_eq!(tight.dimensions(), (1, 1));
```

Error handling
--------------
All public functions return `spritecrop::Result<T>`; match on `spritecrop::Error`
to tell run-level failures (e.g. a missing coordinate document) from the
per-image ones the pipelines log and count.

```rust,no_run
use spritecrop::{Error, PipelineConfig, trim_categories};

match trim_categories(&PipelineConfig::default()) {
    Ok(report) => println!("{report:?}"),
    Err(Error::CoordinatesNotFound { path }) => eprintln!("run analyze first: {}", path.display()),
    Err(Error::CoordinatesMalformed { path, source }) => {
        eprintln!("bad document {}: {source}", path.display())
    }
    Err(other) => eprintln!("{other}"),
}
```

Useful modules
--------------
- [`api`] — the pipelines and per-directory helpers.
- [`core`] — configuration and raster primitives.
- [`io`] — image enumeration/decoding, the coordinate document, PNG writer.
- [`types`] — geometry types.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use crate::core::params::{DEFAULT_CATEGORIES, PipelineConfig, is_plain_dir_name};
pub use error::{Error, Result};
pub use types::{BoundingBox, CategoryBox, CropRect, OutlineStyle};

// Primitives
pub use crate::core::processing::annotate::draw_bounding_box;
pub use crate::core::processing::bbox::find_bounding_box;
pub use crate::core::processing::composite::{Compositor, composite_layers, source_over};
pub use crate::core::processing::crop::crop_to_rect;
pub use io::coordinates::CoordinateTable;
pub use io::images::{list_category_images, load_rgba};

// High-level API re-exports
pub use api::{
    AnalyzeReport, BatchReport, CategoryOutcome, analyze_categories, analyze_category,
    composite_directory, trim_categories, trim_individually, trim_selected_categories,
};
