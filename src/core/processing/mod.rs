//! Raster primitives shared by the three pipelines: alpha bounding boxes,
//! source-over compositing, cropping, outline annotation and saving.
pub mod annotate;
pub mod bbox;
pub mod composite;
pub mod crop;
pub mod save;
