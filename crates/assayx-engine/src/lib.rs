//! AssayX Engine - Orchestration layer
//!
//! Coordinates the in-memory reasoning of `assayx-core` with the file
//! loaders of `assayx-store`, and owns operation lifecycle logging.

pub mod commands;
pub mod report;

pub use report::{AxiomEffect, AxiomReport};
