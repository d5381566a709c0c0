//! Command orchestration layer.
//!
//! Provides high-level command functions that coordinate between
//! the reasoning core and the file loaders.

pub mod assess;
pub mod vocabulary;
