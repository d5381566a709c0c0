//! AssayX Core - axiom winnowing engine
//!
//! This crate holds the in-memory reasoning layer for assay curation:
//! - Term, Keyword, Rule and AxiomVocabulary models with construction-time validation
//! - Indexed value trees behind the `TreeContext` / `SchemaTrees` seams
//! - The winnowing engine (LIMIT aggregation with exclusive override)
//! - Violation detection and justification tracing
//! - The error and logging facilities shared by the other AssayX crates
//!
//! Everything here is synchronous and free of I/O. Loading vocabularies and
//! schemas from disk lives in `assayx-store`.

pub mod axiom_engine;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod rules;
pub mod tree;

// Macros resolve canonical field names through this path
pub use assayx_core_types;

// Re-export commonly used types
pub use axiom_engine::{Restriction, WinnowingEngine};
pub use errors::{AxiomError, ExError, ExErrorKind, Result};
pub use model::{
    Annotation, Assignment, AxiomVocabulary, Conclusion, Evidence, Keyword, KeywordContent, Rule,
    RuleKind, SubjectContent, Term,
};
pub use rules::{JustificationTracer, Target, ViolationDetector};
pub use tree::{Schema, SchemaTrees, TreeContext, ValueTree};
