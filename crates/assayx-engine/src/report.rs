//! Assessment report
//!
//! The curator-facing result of assessing one record. Field names follow
//! the camelCase convention of the annotation front end.

use assayx_core::model::{Annotation, Assignment, Conclusion};
use assayx_core::rules::{Justification, Violation, ViolationCause};
use serde::Serialize;

/// One annotation-level effect of the axioms on a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxiomEffect {
    #[serde(rename = "propURI")]
    pub prop_uri: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub group_nest: Vec<String>,

    #[serde(rename = "valueURI", skip_serializing_if = "Option::is_none")]
    pub value_uri: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_label: Option<String>,

    /// Evidence that brings the effect about
    pub triggers: Vec<String>,

    /// Set for violations only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<ViolationCause>,

    /// Vocabulary positions of the rules involved
    pub rule_indices: Vec<usize>,
}

impl AxiomEffect {
    /// An existing annotation the axioms actively support
    pub fn supported(annotation: &Annotation, justification: Justification) -> Self {
        Self {
            prop_uri: annotation.assignment.prop_uri.clone(),
            group_nest: annotation.assignment.group_nest.clone(),
            value_uri: annotation.value_uri.clone(),
            value_label: annotation.value_label.clone(),
            triggers: justification.triggers,
            cause: None,
            rule_indices: justification.rule_indices,
        }
    }

    /// An existing annotation the axioms reject
    pub fn violation(violation: Violation, triggers: Vec<String>) -> Self {
        let Violation {
            annotation,
            cause,
            rule_indices,
            ..
        } = violation;
        Self {
            prop_uri: annotation.assignment.prop_uri,
            group_nest: annotation.assignment.group_nest,
            value_uri: annotation.value_uri,
            value_label: annotation.value_label,
            triggers,
            cause: Some(cause),
            rule_indices,
        }
    }

    /// A value proposed for a field the record leaves empty
    pub fn proposed(
        assignment: &Assignment,
        conclusion: &Conclusion,
        node_label: Option<&str>,
        justification: Justification,
    ) -> Self {
        let (value_uri, value_label) = match conclusion {
            Conclusion::Uri(uri) => (Some(uri.clone()), node_label.map(str::to_string)),
            Conclusion::Literal(label) => (None, Some(label.clone())),
        };
        Self {
            prop_uri: assignment.prop_uri.clone(),
            group_nest: assignment.group_nest.clone(),
            value_uri,
            value_label,
            triggers: justification.triggers,
            cause: None,
            rule_indices: justification.rule_indices,
        }
    }
}

/// Everything the axioms have to say about one record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxiomReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_id: Option<String>,

    /// Annotations supported by a restriction that names them
    pub justifications: Vec<AxiomEffect>,

    /// Annotations contradicting the rest of the record
    pub violations: Vec<AxiomEffect>,

    /// Values implied for fields the record leaves empty
    pub additional: Vec<AxiomEffect>,
}

impl AxiomReport {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}
