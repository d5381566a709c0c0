//! Vocabulary Format v0 schema
//!
//! Defines the document structure for persisted axiom vocabularies. Rules
//! and terms use the core model's serde shape directly:
//!
//! ```yaml
//! schema_version: 0
//! name: bioassay axioms
//! rules:
//!   - kind: LIMIT
//!     subject:
//!       - value_uri: bao:BAO_0000190
//!         whole_branch: true
//!     impact:
//!       - value_uri: bao:BAO_0000101
//!         whole_branch: true
//!         prop_uri: bao:BAO_0002874
//!   - kind: LIMIT
//!     keyword:
//!       text: not applicable
//!     impact:
//!       - value_label: not applicable
//!         prop_uri: bao:BAO_0002874
//!     exclusive: true
//! ```

use assayx_core::Rule;
use serde::{Deserialize, Serialize};

/// Only version this crate reads or writes
pub const VOCABULARY_SCHEMA_VERSION: u32 = 0;

/// Top-level vocabulary file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabularyV0 {
    /// Schema version (must be 0 for this format)
    pub schema_version: u32,

    /// Optional human-readable name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Rules in vocabulary order
    #[serde(default)]
    pub rules: Vec<Rule>,
}

impl VocabularyV0 {
    pub fn new(name: Option<String>, rules: Vec<Rule>) -> Self {
        Self {
            schema_version: VOCABULARY_SCHEMA_VERSION,
            name,
            rules,
        }
    }
}
