//! Command Line Interface (CLI) layer for spritecrop.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) that resolves the configuration and
//! dispatches to one of the batch pipelines exposed via `spritecrop::api`.
//!
//! If you are embedding spritecrop into another application, prefer using
//! the high-level `spritecrop::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
