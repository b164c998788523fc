//! Shared geometry types used across spritecrop.
//! Includes the alpha `BoundingBox` (inclusive corners), the `CropRect` span
//! used when cutting rasters, the persisted `CategoryBox`, and `OutlineStyle`.
use serde::{Deserialize, Serialize};

/// Smallest axis-aligned rectangle enclosing every pixel with alpha > 0.
///
/// Both corners are inclusive: `max_x`/`max_y` are the coordinates of the last
/// opaque column/row, so a single opaque pixel yields `min == max`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
}

impl BoundingBox {
    pub fn new(min_x: u32, min_y: u32, max_x: u32, max_y: u32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Corners in exclusive form: `(min_x, min_y, max_x + 1, max_y + 1)`.
    pub fn exclusive(&self) -> (u32, u32, u32, u32) {
        (self.min_x, self.min_y, self.max_x + 1, self.max_y + 1)
    }

    /// Tight crop covering exactly the opaque pixels (exclusive upper bound).
    pub fn tight_crop(&self) -> CropRect {
        CropRect {
            x: self.min_x,
            y: self.min_y,
            width: self.max_x - self.min_x + 1,
            height: self.max_y - self.min_y + 1,
        }
    }

    /// Entry for the coordinate document. Width and height are `max - min`
    /// on the inclusive corners, so they are one short of the opaque extent
    /// when later reused as a crop span. Existing documents rely on this.
    pub fn to_category_box(&self) -> CategoryBox {
        CategoryBox {
            x: self.min_x,
            y: self.min_y,
            width: self.max_x - self.min_x,
            height: self.max_y - self.min_y,
        }
    }

    /// Widen the box horizontally so the transparent margins to its left and
    /// right become equal on a canvas `canvas_width` pixels wide.
    ///
    /// The right margin is measured as `canvas_width - max_x`. Not applied
    /// unless `PipelineConfig::center_horizontally` is set.
    pub fn centered_horizontally(&self, canvas_width: u32) -> BoundingBox {
        let left_space = self.min_x;
        let right_space = canvas_width.saturating_sub(self.max_x);

        let mut centered = *self;
        if left_space > right_space {
            centered.min_x = self.min_x - (left_space - right_space);
        } else {
            centered.max_x = self.max_x + (right_space - left_space);
        }
        centered
    }
}

impl std::fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {}, {})", self.min_x, self.min_y, self.max_x, self.max_y)
    }
}

/// A crop region as origin plus span: covers `[x, x + width) x [y, y + height)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRect {
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Per-category entry of the coordinate document.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CategoryBox {
    /// The stored width/height are used directly as the crop span.
    pub fn crop_rect(&self) -> CropRect {
        CropRect {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }
}

/// Stroke used when annotating composites.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineStyle {
    /// RGBA stroke color
    pub color: [u8; 4],
    /// Stroke width in pixels, drawn inward from the box edge
    pub width: u32,
}

impl Default for OutlineStyle {
    fn default() -> Self {
        Self {
            color: [255, 0, 0, 255],
            width: 2,
        }
    }
}
