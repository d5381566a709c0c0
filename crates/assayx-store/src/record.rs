//! Record files
//!
//! A record is the annotation state of one assay as handed over by the
//! record subsystem:
//!
//! ```yaml
//! record_id: AID1234
//! text: Dose response of compound X in HeLa cells
//! annotations:
//!   - prop_uri: bao:BAO_0002854
//!     value_uri: bao:BAO_0000190
//!   - prop_uri: bao:BAO_0002874
//!     value_label: not applicable
//! ```

use assayx_core::Annotation;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::encoding::{read_document, Encoding};
use crate::errors::{at_path, unsupported_schema_version, Result};

const OP: &str = "record_parse";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordV0 {
    /// Schema version; 0 when omitted
    #[serde(default)]
    pub schema_version: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record_id: Option<String>,

    /// Free text describing the record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

/// Parse a record from a string
pub fn parse_record_str(content: &str, encoding: Encoding) -> Result<RecordV0> {
    let record: RecordV0 = encoding.decode(OP, content)?;
    if record.schema_version != 0 {
        return Err(unsupported_schema_version(OP, record.schema_version));
    }
    tracing::debug!(
        annotation_count = record.annotations.len(),
        "record document parsed"
    );
    Ok(record)
}

/// Parse a record file; encoding follows the extension
pub fn parse_record_file(path: &Path) -> Result<RecordV0> {
    let (content, encoding) = read_document(OP, path)?;
    parse_record_str(&content, encoding).map_err(|e| at_path(e, path))
}
