//! Vocabulary command handlers with boundary logging.
//!
//! ## Logging Ownership
//!
//! The engine layer owns lifecycle logging for vocabulary operations:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! The store loaders underneath use only `tracing::debug!()`.

use assayx_core::model::{AxiomVocabulary, VocabularyStats};
use assayx_core::{log_op_end, log_op_error, log_op_start};
use assayx_store::errors::Result;
use assayx_store::vocab::{compute_vocabulary_digest, parse_vocabulary_file, write_vocabulary_file};
use chrono::{DateTime, Utc};
use std::path::Path;

/// A validated vocabulary ready to be shared across evaluations
#[derive(Debug, Clone)]
pub struct LoadedVocabulary {
    pub name: Option<String>,
    pub vocabulary: AxiomVocabulary,
    /// SHA-256 of the canonical rule list
    pub digest: String,
    pub rule_counts: VocabularyStats,
    pub loaded_at: DateTime<Utc>,
}

/// Load and validate a vocabulary file
///
/// ## Errors
///
/// - `Io`: file missing or unreadable
/// - `Parse`: malformed YAML or JSON
/// - `UnsupportedSchemaVersion`: document version other than 0
/// - `InvalidTerm`, `InvalidRule`, `EmptyAntecedent`, `EmptyConsequent`:
///   a rule breaks its contract; the error carries the rule index
pub fn load_vocabulary(path: &Path) -> Result<LoadedVocabulary> {
    let path_label = path.display().to_string();
    log_op_start!("vocab_load", path = %path_label);
    let start = std::time::Instant::now();

    let loaded = load_vocabulary_impl(path).map_err(|e| {
        log_op_error!(
            "vocab_load",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "vocab_load",
        duration_ms = start.elapsed().as_millis() as u64,
        rule_count = loaded.vocabulary.len(),
        vocab_digest = %loaded.digest
    );

    Ok(loaded)
}

fn load_vocabulary_impl(path: &Path) -> Result<LoadedVocabulary> {
    let parsed = parse_vocabulary_file(path)?;
    let digest = compute_vocabulary_digest(&parsed.vocabulary)?;
    Ok(LoadedVocabulary {
        rule_counts: parsed.vocabulary.stats(),
        name: parsed.name,
        vocabulary: parsed.vocabulary,
        digest,
        loaded_at: Utc::now(),
    })
}

/// Re-encode a vocabulary file; encodings follow the file extensions
///
/// The input is fully validated before anything is written.
///
/// ## Errors
///
/// Any error from [`load_vocabulary`], plus `InvalidInput` for an output
/// path without a `.yaml`, `.yml` or `.json` extension and `Io` when the
/// output cannot be written.
pub fn convert_vocabulary(input: &Path, output: &Path) -> Result<LoadedVocabulary> {
    let loaded = load_vocabulary(input)?;

    let output_label = output.display().to_string();
    log_op_start!("vocab_convert", output = %output_label);
    let start = std::time::Instant::now();

    write_vocabulary_file(&loaded.vocabulary, loaded.name.as_deref(), output).map_err(|e| {
        log_op_error!(
            "vocab_convert",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "vocab_convert",
        duration_ms = start.elapsed().as_millis() as u64,
        rule_count = loaded.vocabulary.len()
    );

    Ok(loaded)
}
