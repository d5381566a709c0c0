//! Engine output unit

use serde::{Deserialize, Serialize};
use std::fmt;

/// A value the engine concludes about: a tree node or a free-text literal
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Conclusion {
    Uri(String),
    Literal(String),
}

impl Conclusion {
    pub fn uri(value: impl Into<String>) -> Self {
        Conclusion::Uri(value.into())
    }

    pub fn literal(value: impl Into<String>) -> Self {
        Conclusion::Literal(value.into())
    }

    pub fn as_uri(&self) -> Option<&str> {
        match self {
            Conclusion::Uri(uri) => Some(uri),
            Conclusion::Literal(_) => None,
        }
    }

    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Conclusion::Literal(label) => Some(label),
            Conclusion::Uri(_) => None,
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Conclusion::Literal(_))
    }
}

impl fmt::Display for Conclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conclusion::Uri(uri) => f.write_str(uri),
            Conclusion::Literal(label) => write!(f, "\"{}\"", label),
        }
    }
}
