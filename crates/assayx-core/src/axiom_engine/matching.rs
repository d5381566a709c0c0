//! Rule matching primitive
//!
//! Everything here is a pure predicate over one rule and the evidence; the
//! winnowing, violation and justification passes all build on it.

use crate::model::{Annotation, Keyword, KeywordContent, Rule, SubjectContent, Term};
use crate::tree::TreeContext;

/// Whether one subject term is satisfied by one evidence item
pub fn subject_term_matches(term: &Term, subject: &SubjectContent<'_>) -> bool {
    let Some(term_uri) = term.value_uri.as_deref() else {
        return false;
    };
    if !term.scope_matches(&subject.assignment) {
        return false;
    }
    if subject.value_uri == term_uri {
        return true;
    }
    term.whole_branch
        && subject
            .tree
            .is_some_and(|tree| tree.is_descendant_or_self(term_uri, &subject.value_uri))
}

/// Case-insensitive substring match within the keyword's scope
pub fn keyword_matches(keyword: &Keyword, content: &KeywordContent) -> bool {
    if let Some(prop_uri) = keyword.prop_uri.as_deref() {
        if content.prop_uri.as_deref() != Some(prop_uri) {
            return false;
        }
    }
    content
        .text
        .to_lowercase()
        .contains(&keyword.text.to_lowercase())
}

/// A rule fires iff every subject term matches some subject content and the
/// keyword (if any) matches some text content
pub fn rule_fires(rule: &Rule, subjects: &[SubjectContent<'_>], keywords: &[KeywordContent]) -> bool {
    let subjects_hold = rule
        .subject
        .iter()
        .all(|term| subjects.iter().any(|s| subject_term_matches(term, s)));
    if !subjects_hold {
        return false;
    }
    match &rule.keyword {
        Some(keyword) => keywords.iter().any(|k| keyword_matches(keyword, k)),
        None => true,
    }
}

/// Whether an impact term names the value an annotation asserts
///
/// URI terms follow branch semantics within `tree`; literal terms compare
/// labels case-insensitively against label-only annotations.
pub fn impact_matches_annotation(
    term: &Term,
    annotation: &Annotation,
    tree: Option<&dyn TreeContext>,
) -> bool {
    if !term.scope_matches(&annotation.assignment) {
        return false;
    }

    if term.is_literal() {
        return match (&annotation.value_uri, &term.value_label, &annotation.value_label) {
            (None, Some(wanted), Some(label)) => wanted.to_lowercase() == label.to_lowercase(),
            _ => false,
        };
    }

    let (Some(term_uri), Some(value_uri)) =
        (term.value_uri.as_deref(), annotation.value_uri.as_deref())
    else {
        return false;
    };
    if term_uri == value_uri {
        return true;
    }
    term.whole_branch && tree.is_some_and(|tree| tree.is_descendant_or_self(term_uri, value_uri))
}

/// One piece of evidence that satisfied part of a rule's antecedent
#[derive(Debug, Clone, Copy)]
pub enum Trigger<'e, 'a> {
    Subject(&'e SubjectContent<'a>),
    Text {
        content: &'e KeywordContent,
        keyword: &'e str,
    },
}

impl Trigger<'_, '_> {
    /// Originating annotation, if any
    pub fn source(&self) -> Option<usize> {
        match self {
            Trigger::Subject(subject) => subject.source,
            Trigger::Text { content, .. } => content.source,
        }
    }

    /// Name shown to curators: the value URI, the field label, or the
    /// matched keyword for record body text
    pub fn display_text(&self) -> &str {
        match self {
            Trigger::Subject(subject) => &subject.value_uri,
            Trigger::Text { content, keyword } => {
                if content.source.is_some() {
                    &content.text
                } else {
                    keyword
                }
            }
        }
    }
}

/// Every evidence item that satisfies some part of `rule`'s antecedent
///
/// Over-approximates: all matching items are returned, not a minimal cover.
pub fn matching_triggers<'e, 'a>(
    rule: &'e Rule,
    subjects: &'e [SubjectContent<'a>],
    keywords: &'e [KeywordContent],
) -> Vec<Trigger<'e, 'a>> {
    let mut triggers = Vec::new();
    for term in &rule.subject {
        triggers.extend(
            subjects
                .iter()
                .filter(|s| subject_term_matches(term, s))
                .map(Trigger::Subject),
        );
    }
    if let Some(keyword) = &rule.keyword {
        triggers.extend(
            keywords
                .iter()
                .filter(|k| keyword_matches(keyword, k))
                .map(|content| Trigger::Text {
                    content,
                    keyword: keyword.text.as_str(),
                }),
        );
    }
    triggers
}
