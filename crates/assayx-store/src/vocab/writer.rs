//! Vocabulary writer
//!
//! Emits the same v0 document the parser reads, so a vocabulary survives
//! write → parse unchanged.

use assayx_core::AxiomVocabulary;
use std::path::Path;

use super::format_v0::VocabularyV0;
use crate::encoding::{write_document, Encoding};
use crate::errors::{at_path, Result};

const OP: &str = "vocab_write";

/// Serialize a vocabulary document
pub fn write_vocabulary_str(
    vocabulary: &AxiomVocabulary,
    name: Option<&str>,
    encoding: Encoding,
) -> Result<String> {
    let doc = VocabularyV0::new(name.map(str::to_string), vocabulary.rules().to_vec());
    encoding.encode(OP, &doc)
}

/// Write a vocabulary file; encoding follows the extension
pub fn write_vocabulary_file(
    vocabulary: &AxiomVocabulary,
    name: Option<&str>,
    path: &Path,
) -> Result<()> {
    let encoding = Encoding::from_path(path)?;
    let content = write_vocabulary_str(vocabulary, name, encoding).map_err(|e| at_path(e, path))?;
    write_document(OP, path, &content)?;

    tracing::debug!(
        rule_count = vocabulary.len(),
        path = %path.display(),
        "vocabulary written"
    );
    Ok(())
}
