//! I/O layer: enumerating and decoding category images, the coordinate
//! document, and `writers` for PNG output.
pub mod coordinates;
pub use coordinates::CoordinateTable;

pub mod images;
pub use images::{is_png_file, list_category_images, load_rgba};

pub mod writers;
