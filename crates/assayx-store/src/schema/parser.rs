//! Schema tree parser
//!
//! Builds one indexed `ValueTree` per assignment. Fails on duplicate
//! assignments or on any tree that does not index cleanly.

use assayx_core::{Schema, ValueTree};
use std::collections::BTreeSet;
use std::path::Path;

use super::format_v0::{SchemaV0, SCHEMA_SCHEMA_VERSION};
use crate::encoding::{read_document, Encoding};
use crate::errors::{at_path, document_validation, from_axiom, unsupported_schema_version, Result};

const OP: &str = "schema_parse";

/// Parse a schema from a string
pub fn parse_schema_str(content: &str, encoding: Encoding) -> Result<Schema> {
    let doc: SchemaV0 = encoding.decode(OP, content)?;
    if doc.schema_version != SCHEMA_SCHEMA_VERSION {
        return Err(unsupported_schema_version(OP, doc.schema_version));
    }

    let mut seen = BTreeSet::new();
    let mut schema = Schema::new();
    for entry in doc.assignments {
        let assignment = entry.assignment();
        if !seen.insert(assignment.clone()) {
            return Err(document_validation(
                OP,
                &format!("Duplicate assignment in schema: {}", assignment),
            ));
        }
        let tree = ValueTree::build(assignment, entry.nodes).map_err(|e| from_axiom(OP, e))?;
        schema.insert(tree);
    }

    tracing::debug!(assignment_count = schema.len(), "schema document parsed");
    Ok(schema)
}

/// Parse a schema file; encoding follows the extension
pub fn parse_schema_file(path: &Path) -> Result<Schema> {
    let (content, encoding) = read_document(OP, path)?;
    parse_schema_str(&content, encoding).map_err(|e| at_path(e, path))
}
