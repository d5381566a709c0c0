//! Document encodings
//!
//! Every file format in this crate is accepted as YAML or JSON. The encoding
//! is chosen by file extension.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

use crate::errors::{document_validation, io_error, parse_error, serialization_error, Result};

/// Read a document and detect its encoding
pub(crate) fn read_document(op: &str, path: &Path) -> Result<(String, Encoding)> {
    let encoding = Encoding::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|e| io_error(op, path, e))?;
    Ok((content, encoding))
}

/// Write a document, replacing any existing file
pub(crate) fn write_document(op: &str, path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).map_err(|e| io_error(op, path, e))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Yaml,
    Json,
}

impl Encoding {
    /// Pick the encoding from `.yaml`/`.yml` or `.json`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for any other or missing extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("yaml") | Some("yml") => Ok(Encoding::Yaml),
            Some("json") => Ok(Encoding::Json),
            _ => Err(document_validation(
                "detect_encoding",
                &format!(
                    "Cannot infer encoding of {}: expected .yaml, .yml or .json",
                    path.display()
                ),
            )
            .with_path(path.display().to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Encoding::Yaml => "YAML",
            Encoding::Json => "JSON",
        }
    }

    pub(crate) fn decode<T: DeserializeOwned>(&self, op: &str, content: &str) -> Result<T> {
        match self {
            Encoding::Yaml => {
                serde_yaml::from_str(content).map_err(|e| parse_error(op, self.name(), e))
            }
            Encoding::Json => {
                serde_json::from_str(content).map_err(|e| parse_error(op, self.name(), e))
            }
        }
    }

    pub(crate) fn encode<T: Serialize>(&self, op: &str, value: &T) -> Result<String> {
        match self {
            Encoding::Yaml => serde_yaml::to_string(value).map_err(|e| serialization_error(op, e)),
            Encoding::Json => serde_json::to_string_pretty(value)
                .map(|mut json| {
                    json.push('\n');
                    json
                })
                .map_err(|e| serialization_error(op, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assayx_core::errors::ExErrorKind;

    #[test]
    fn test_encoding_from_extension() {
        assert_eq!(Encoding::from_path(Path::new("a/rules.yaml")).unwrap(), Encoding::Yaml);
        assert_eq!(Encoding::from_path(Path::new("rules.YML")).unwrap(), Encoding::Yaml);
        assert_eq!(Encoding::from_path(Path::new("rules.json")).unwrap(), Encoding::Json);

        let err = Encoding::from_path(Path::new("rules.txt")).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidInput);
        assert_eq!(err.path(), Some("rules.txt"));
    }
}
