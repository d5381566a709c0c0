//! Term, Keyword and Assignment value objects
//!
//! A `Term` is one matching condition on the semantic side of a rule: a value
//! URI (optionally covering its whole branch) or, on the impact side only, a
//! literal label. A `Keyword` is the free-text counterpart. Both may be
//! scoped to an `Assignment` (property URI plus group nesting) or left
//! unscoped.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::conclusion::Conclusion;

fn is_false(b: &bool) -> bool {
    !*b
}

fn non_blank(s: &Option<String>) -> Option<&str> {
    s.as_deref().filter(|v| !v.trim().is_empty())
}

/// Identity of an annotatable field: property URI plus nested group path
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Assignment {
    pub prop_uri: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub group_nest: Vec<String>,
}

impl Assignment {
    /// Create an assignment at the top level of the schema
    pub fn new(prop_uri: impl Into<String>) -> Self {
        Self {
            prop_uri: prop_uri.into(),
            group_nest: Vec::new(),
        }
    }

    /// Set the nested group path (innermost group first)
    pub fn with_group_nest(mut self, group_nest: Vec<String>) -> Self {
        self.group_nest = group_nest;
        self
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.prop_uri)?;
        if !self.group_nest.is_empty() {
            write!(f, " [{}]", self.group_nest.join(" > "))?;
        }
        Ok(())
    }
}

/// A single matching condition within a rule
///
/// Equality is structural: two terms are equal when URI, label, branch flag
/// and scope all agree, which is what lets a vocabulary compare equal after
/// a serialize/parse round trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Term {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_uri: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_label: Option<String>,

    /// Match the node and every descendant, rather than the node alone
    #[serde(default, skip_serializing_if = "is_false")]
    pub whole_branch: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prop_uri: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_nest: Option<Vec<String>>,
}

impl Term {
    /// Exact-node term
    pub fn uri(value_uri: impl Into<String>) -> Self {
        Self {
            value_uri: Some(value_uri.into()),
            value_label: None,
            whole_branch: false,
            prop_uri: None,
            group_nest: None,
        }
    }

    /// Term covering the node and all of its descendants
    pub fn branch(value_uri: impl Into<String>) -> Self {
        Self {
            whole_branch: true,
            ..Self::uri(value_uri)
        }
    }

    /// Literal (label-only) term; valid only as an impact
    pub fn literal(value_label: impl Into<String>) -> Self {
        Self {
            value_uri: None,
            value_label: Some(value_label.into()),
            whole_branch: false,
            prop_uri: None,
            group_nest: None,
        }
    }

    /// Attach a display label to a URI term
    pub fn with_label(mut self, value_label: impl Into<String>) -> Self {
        self.value_label = Some(value_label.into());
        self
    }

    /// Scope the term to a property (any group nesting)
    pub fn scoped(mut self, prop_uri: impl Into<String>) -> Self {
        self.prop_uri = Some(prop_uri.into());
        self
    }

    /// Scope the term to an exact assignment
    pub fn scoped_to(mut self, assignment: &Assignment) -> Self {
        self.prop_uri = Some(assignment.prop_uri.clone());
        self.group_nest = Some(assignment.group_nest.clone());
        self
    }

    pub fn has_value(&self) -> bool {
        non_blank(&self.value_uri).is_some() || non_blank(&self.value_label).is_some()
    }

    /// Label set, URI absent
    pub fn is_literal(&self) -> bool {
        non_blank(&self.value_uri).is_none() && non_blank(&self.value_label).is_some()
    }

    pub fn is_scoped(&self) -> bool {
        self.prop_uri.is_some()
    }

    /// Whether this term applies to the given field
    ///
    /// Unscoped terms apply everywhere. A property scope without a group
    /// nest matches that property under any nesting; a group nest, with or
    /// without a property, must equal the field's nest.
    pub fn scope_matches(&self, assignment: &Assignment) -> bool {
        if let Some(prop_uri) = self.prop_uri.as_deref() {
            if prop_uri != assignment.prop_uri {
                return false;
            }
        }
        match &self.group_nest {
            Some(nest) => *nest == assignment.group_nest,
            None => true,
        }
    }

    /// The literal conclusion this term implies, for label-only terms
    pub fn literal_conclusion(&self) -> Option<Conclusion> {
        if self.is_literal() {
            self.value_label.clone().map(Conclusion::Literal)
        } else {
            None
        }
    }

    /// The assignment a scoped term targets; a missing group nest maps to
    /// the top level
    pub fn target_assignment(&self) -> Option<Assignment> {
        self.prop_uri.as_ref().map(|prop_uri| Assignment {
            prop_uri: prop_uri.clone(),
            group_nest: self.group_nest.clone().unwrap_or_default(),
        })
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.value_uri, &self.value_label) {
            (Some(uri), _) => f.write_str(uri)?,
            (None, Some(label)) => write!(f, "\"{}\"", label)?,
            (None, None) => f.write_str("?")?,
        }
        if self.whole_branch {
            f.write_str("*")?;
        }
        if let Some(prop_uri) = &self.prop_uri {
            write!(f, "@{}", prop_uri)?;
        }
        Ok(())
    }
}

/// Free-text antecedent condition
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Keyword {
    pub text: String,
    /// Field whose text label is searched; `None` searches all text evidence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prop_uri: Option<String>,
}

impl Keyword {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            prop_uri: None,
        }
    }

    pub fn scoped(mut self, prop_uri: impl Into<String>) -> Self {
        self.prop_uri = Some(prop_uri.into());
        self
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}
