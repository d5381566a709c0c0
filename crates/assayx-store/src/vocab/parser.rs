//! Vocabulary parser with validation
//!
//! Decodes a vocabulary document, checks its schema version and builds the
//! validated `AxiomVocabulary`. Any invalid rule fails the whole load.

use assayx_core::AxiomVocabulary;
use std::path::Path;

use super::format_v0::{VocabularyV0, VOCABULARY_SCHEMA_VERSION};
use crate::encoding::{read_document, Encoding};
use crate::errors::{at_path, from_axiom, unsupported_schema_version, Result};

const OP: &str = "vocab_parse";

/// A parsed vocabulary with its document metadata
#[derive(Debug, Clone)]
pub struct ParsedVocabulary {
    pub name: Option<String>,
    pub vocabulary: AxiomVocabulary,
}

/// Decode a vocabulary document without validating its rules
pub fn parse_vocabulary_document(content: &str, encoding: Encoding) -> Result<VocabularyV0> {
    let doc: VocabularyV0 = encoding.decode(OP, content)?;
    if doc.schema_version != VOCABULARY_SCHEMA_VERSION {
        return Err(unsupported_schema_version(OP, doc.schema_version));
    }
    Ok(doc)
}

/// Parse and validate a vocabulary from a string
pub fn parse_vocabulary_str(content: &str, encoding: Encoding) -> Result<ParsedVocabulary> {
    let doc = parse_vocabulary_document(content, encoding)?;
    let rule_count = doc.rules.len();
    let vocabulary = AxiomVocabulary::new(doc.rules).map_err(|e| from_axiom(OP, e))?;

    tracing::debug!(
        rule_count,
        encoding = encoding.name(),
        "vocabulary document parsed"
    );

    Ok(ParsedVocabulary {
        name: doc.name,
        vocabulary,
    })
}

/// Parse and validate a vocabulary file; encoding follows the extension
pub fn parse_vocabulary_file(path: &Path) -> Result<ParsedVocabulary> {
    let (content, encoding) = read_document(OP, path)?;
    parse_vocabulary_str(&content, encoding).map_err(|e| at_path(e, path))
}
