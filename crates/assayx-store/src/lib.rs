//! AssayX Store - vocabulary, schema and record files
//!
//! Provides:
//! - Vocabulary Format v0 with YAML/JSON parser, writer and digest
//! - Schema tree Format v0 building indexed value trees
//! - Record Format v0 for annotation state handed over by the record subsystem
//! - TOML configuration for the AssayX tools
//!
//! Every loader validates fully before returning: a vocabulary with one bad
//! rule is rejected as a whole.

pub mod config;
pub mod encoding;
pub mod errors;
pub mod record;
pub mod schema;
pub mod vocab;

// Re-export key types
pub use config::{AssayxConfig, ConfigError};
pub use encoding::Encoding;
pub use errors::Result;
pub use record::{parse_record_file, parse_record_str, RecordV0};
pub use schema::{parse_schema_file, parse_schema_str};
pub use vocab::{
    compute_vocabulary_digest, parse_vocabulary_file, parse_vocabulary_str, write_vocabulary_file,
    write_vocabulary_str, ParsedVocabulary,
};
