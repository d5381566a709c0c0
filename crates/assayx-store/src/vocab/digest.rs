//! Vocabulary digest canonicalization
//!
//! Computes stable SHA256 digests of vocabularies so a deployment can tell
//! which rule set it is running. The digest covers the rules only, in
//! vocabulary order, and is independent of encoding and whitespace.

use assayx_core::{AxiomVocabulary, Rule};
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::errors::{serialization_error, Result};

/// Canonical representation of a vocabulary for digest calculation
#[derive(Debug, Serialize)]
struct CanonicalVocabulary<'a> {
    schema_version: u32,
    rules: &'a [Rule],
}

/// Compute a stable digest for a vocabulary
///
/// Returns a SHA256 hex digest of the canonical JSON representation.
pub fn compute_vocabulary_digest(vocabulary: &AxiomVocabulary) -> Result<String> {
    let canonical = CanonicalVocabulary {
        schema_version: super::format_v0::VOCABULARY_SCHEMA_VERSION,
        rules: vocabulary.rules(),
    };

    let json = serde_json::to_string(&canonical)
        .map_err(|e| serialization_error("vocab_digest", e))?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    Ok(hex::encode(hasher.finalize()))
}
