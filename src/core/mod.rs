//! Core building blocks: pipeline configuration and the raster primitives
//! (bounding box, compositing, crop, annotate, save). These are internal
//! primitives consumed by the high-level `api` module.
pub mod params;
pub mod processing;
