//! Per-evaluation evidence
//!
//! Built fresh from a record's annotations and free text for each call and
//! dropped afterwards. Every item remembers which annotation it came from so
//! violation checks can leave that annotation out.

use std::collections::BTreeSet;
use std::fmt;

use super::annotation::Annotation;
use super::term::Assignment;
use crate::tree::{SchemaTrees, TreeContext};

/// One asserted semantic value
#[derive(Clone)]
pub struct SubjectContent<'a> {
    pub value_uri: String,
    pub assignment: Assignment,
    /// Tree the value lives in; without one, branch terms fall back to
    /// exact matching
    pub tree: Option<&'a dyn TreeContext>,
    /// Index of the originating annotation
    pub source: Option<usize>,
}

impl<'a> SubjectContent<'a> {
    pub fn new(value_uri: impl Into<String>, assignment: Assignment) -> Self {
        Self {
            value_uri: value_uri.into(),
            assignment,
            tree: None,
            source: None,
        }
    }

    pub fn with_tree(mut self, tree: &'a dyn TreeContext) -> Self {
        self.tree = Some(tree);
        self
    }

    pub fn with_source(mut self, source: usize) -> Self {
        self.source = Some(source);
        self
    }
}

impl fmt::Debug for SubjectContent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubjectContent")
            .field("value_uri", &self.value_uri)
            .field("assignment", &self.assignment)
            .field("tree", &self.tree.map(|t| t.assignment().to_string()))
            .field("source", &self.source)
            .finish()
    }
}

/// One piece of free text: a field label or the record body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordContent {
    pub text: String,
    /// Field the text was entered for; `None` for the record body
    pub prop_uri: Option<String>,
    pub source: Option<usize>,
}

impl KeywordContent {
    /// Text entered for a specific field
    pub fn field(text: impl Into<String>, prop_uri: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            prop_uri: Some(prop_uri.into()),
            source: None,
        }
    }

    /// The record's general free text
    pub fn body(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            prop_uri: None,
            source: None,
        }
    }

    pub fn with_source(mut self, source: usize) -> Self {
        self.source = Some(source);
        self
    }

    pub fn is_record_body(&self) -> bool {
        self.source.is_none() && self.prop_uri.is_none()
    }
}

/// The complete evidence set for one evaluation
#[derive(Debug, Clone, Default)]
pub struct Evidence<'a> {
    pub subjects: Vec<SubjectContent<'a>>,
    pub keywords: Vec<KeywordContent>,
}

impl<'a> Evidence<'a> {
    pub fn new(subjects: Vec<SubjectContent<'a>>, keywords: Vec<KeywordContent>) -> Self {
        Self { subjects, keywords }
    }

    /// Build evidence from a record
    ///
    /// Annotations with a value URI become subject content, resolved against
    /// the schema's tree for their assignment. Label-only annotations become
    /// field text. The record body, when present and non-blank, becomes
    /// unscoped text.
    pub fn from_record(
        annotations: &[Annotation],
        text: Option<&str>,
        schema: &'a dyn SchemaTrees,
    ) -> Self {
        let mut evidence = Evidence::default();

        for (index, annotation) in annotations.iter().enumerate() {
            if let Some(uri) = annotation.value_uri.as_deref() {
                evidence.subjects.push(SubjectContent {
                    value_uri: uri.to_string(),
                    assignment: annotation.assignment.clone(),
                    tree: schema.tree_for(&annotation.assignment),
                    source: Some(index),
                });
            } else if let Some(label) = annotation.value_label.as_deref() {
                evidence.keywords.push(
                    KeywordContent::field(label, annotation.assignment.prop_uri.clone())
                        .with_source(index),
                );
            }
        }

        if let Some(body) = text.filter(|t| !t.trim().is_empty()) {
            evidence.keywords.push(KeywordContent::body(body));
        }

        evidence
    }

    /// The evidence with every item from annotation `index` removed
    pub fn without(&self, index: usize) -> Self {
        Self {
            subjects: self
                .subjects
                .iter()
                .filter(|s| s.source != Some(index))
                .cloned()
                .collect(),
            keywords: self
                .keywords
                .iter()
                .filter(|k| k.source != Some(index))
                .cloned()
                .collect(),
        }
    }

    /// Only the items from the given annotations, plus unsourced text when
    /// `keep_unsourced` is set
    pub fn restricted_to(&self, sources: &BTreeSet<usize>, keep_unsourced: bool) -> Self {
        let keep = |source: Option<usize>| match source {
            Some(index) => sources.contains(&index),
            None => keep_unsourced,
        };
        Self {
            subjects: self
                .subjects
                .iter()
                .filter(|s| keep(s.source))
                .cloned()
                .collect(),
            keywords: self
                .keywords
                .iter()
                .filter(|k| keep(k.source))
                .cloned()
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty() && self.keywords.is_empty()
    }
}
