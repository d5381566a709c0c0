//! Axiom vocabulary files
//!
//! Provides:
//! - Vocabulary Format v0 schema
//! - YAML/JSON parser with validation
//! - Writer producing the same format
//! - Digest canonicalization

pub mod digest;
pub mod format_v0;
pub mod parser;
pub mod writer;

pub use digest::compute_vocabulary_digest;
pub use format_v0::VocabularyV0;
pub use parser::{
    parse_vocabulary_document, parse_vocabulary_file, parse_vocabulary_str, ParsedVocabulary,
};
pub use writer::{write_vocabulary_file, write_vocabulary_str};
