//! Record annotations as supplied by the record subsystem

use serde::{Deserialize, Serialize};

use super::conclusion::Conclusion;
use super::term::Assignment;

/// One property→value assertion on a record
///
/// Semantic annotations carry a value URI; text annotations carry only a
/// label. When both are present the URI wins.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Annotation {
    #[serde(flatten)]
    pub assignment: Assignment,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_uri: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_label: Option<String>,
}

impl Annotation {
    pub fn uri(assignment: Assignment, value_uri: impl Into<String>) -> Self {
        Self {
            assignment,
            value_uri: Some(value_uri.into()),
            value_label: None,
        }
    }

    pub fn label(assignment: Assignment, value_label: impl Into<String>) -> Self {
        Self {
            assignment,
            value_uri: None,
            value_label: Some(value_label.into()),
        }
    }

    pub fn with_label(mut self, value_label: impl Into<String>) -> Self {
        self.value_label = Some(value_label.into());
        self
    }

    pub fn is_semantic(&self) -> bool {
        self.value_uri.is_some()
    }

    /// The conclusion this annotation asserts, if it carries any value
    pub fn conclusion(&self) -> Option<Conclusion> {
        match (&self.value_uri, &self.value_label) {
            (Some(uri), _) => Some(Conclusion::Uri(uri.clone())),
            (None, Some(label)) => Some(Conclusion::Literal(label.clone())),
            (None, None) => None,
        }
    }

    /// Text used when this annotation is named as a trigger
    pub fn trigger_text(&self) -> Option<&str> {
        self.value_uri.as_deref().or(self.value_label.as_deref())
    }
}
