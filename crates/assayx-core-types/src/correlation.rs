//! Correlation types for request tracking
//!
//! Every assessment runs under a `RequestContext` so that its log lines can
//! be tied back to the caller's request and the record being curated.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a single request or operation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(String);

impl RequestId {
    /// Generate a new random RequestId using UUIDv7
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Create from an existing string (e.g. an upstream request header)
    pub fn from_string(s: String) -> Self {
        Self(s)
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Context carried through one evaluation request
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub request_id: RequestId,
    /// Identifier of the record under assessment, when the caller has one
    pub record_id: Option<String>,
}

impl RequestContext {
    /// Create a new context with a fresh RequestId
    pub fn new() -> Self {
        Self {
            request_id: RequestId::new(),
            record_id: None,
        }
    }

    /// Create a context with an existing RequestId
    pub fn with_request_id(request_id: RequestId) -> Self {
        Self {
            request_id,
            record_id: None,
        }
    }

    /// Attach the record identifier
    pub fn with_record_id(mut self, record_id: impl Into<String>) -> Self {
        self.record_id = Some(record_id.into());
        self
    }

    /// Record id for logging, `"-"` when absent
    pub fn record_label(&self) -> &str {
        self.record_id.as_deref().unwrap_or("-")
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}
