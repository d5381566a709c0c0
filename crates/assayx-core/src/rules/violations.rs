//! Violation detection
//!
//! Scans a record's annotations for values that contradict the rest of the
//! record: values named by a firing EXCLUDE rule, and values outside the
//! restriction the firing LIMIT rules impose on their field. Each annotation
//! is checked against the evidence with that annotation removed, so it can
//! never condemn itself.

use serde::Serialize;

use crate::axiom_engine::{impact_matches_annotation, Restriction, WinnowingEngine};
use crate::model::{Annotation, AxiomVocabulary, Conclusion, Evidence, RuleKind};
use crate::tree::{SchemaTrees, TreeContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationCause {
    /// A firing EXCLUDE rule names this value
    Excluded,
    /// The field is restricted and this value is not among the allowed ones
    OutsideRestriction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub annotation_index: usize,
    pub annotation: Annotation,
    pub cause: ViolationCause,
    /// Vocabulary positions of the rules responsible
    pub rule_indices: Vec<usize>,
}

/// Whether a restriction rejects the value an annotation asserts
///
/// Label annotations are only judged when the restriction names literals.
pub(crate) fn restriction_rejects(restriction: &Restriction, annotation: &Annotation) -> bool {
    let Restriction::RestrictedTo(members) = restriction else {
        return false;
    };
    match annotation.conclusion() {
        Some(Conclusion::Uri(uri)) => !members.contains(&Conclusion::Uri(uri)),
        Some(Conclusion::Literal(label)) => {
            let literals = restriction.literals();
            let wanted = label.to_lowercase();
            !literals.is_empty() && !literals.iter().any(|l| l.to_lowercase() == wanted)
        }
        None => false,
    }
}

pub struct ViolationDetector<'v> {
    engine: WinnowingEngine<'v>,
}

impl<'v> ViolationDetector<'v> {
    pub fn new(vocabulary: &'v AxiomVocabulary) -> Self {
        Self {
            engine: WinnowingEngine::new(vocabulary),
        }
    }

    /// EXCLUDE rules that fire on `evidence` and name `annotation`'s value
    pub fn excluding_rules(
        &self,
        evidence: &Evidence<'_>,
        annotation: &Annotation,
        tree: Option<&dyn TreeContext>,
    ) -> Vec<usize> {
        self.engine
            .fired(RuleKind::Exclude, &evidence.subjects, &evidence.keywords)
            .into_iter()
            .filter(|(_, rule)| {
                rule.impact
                    .iter()
                    .any(|term| impact_matches_annotation(term, annotation, tree))
            })
            .map(|(index, _)| index)
            .collect()
    }

    /// LIMIT rules whose restriction on `annotation`'s field rejects it
    ///
    /// Empty when the field is unrestricted or the value is allowed.
    pub fn restricting_rules(
        &self,
        evidence: &Evidence<'_>,
        annotation: &Annotation,
        tree: Option<&dyn TreeContext>,
    ) -> Vec<usize> {
        let contributions = self.engine.contributions_for(
            &evidence.subjects,
            &evidence.keywords,
            &annotation.assignment,
            tree,
        );
        let restriction = Restriction::from_contributions(&contributions);
        if restriction_rejects(&restriction, annotation) {
            contributions.into_iter().map(|c| c.rule_index).collect()
        } else {
            Vec::new()
        }
    }

    /// Every annotation inconsistent with the rest of the record
    ///
    /// An annotation can be reported once per cause. Results are ordered by
    /// annotation index, `Excluded` before `OutsideRestriction`.
    pub fn violating_axioms(
        &self,
        evidence: &Evidence<'_>,
        annotations: &[Annotation],
        schema: &dyn SchemaTrees,
    ) -> Vec<Violation> {
        let mut violations = Vec::new();

        for (index, annotation) in annotations.iter().enumerate() {
            let rest = evidence.without(index);
            let tree = schema.tree_for(&annotation.assignment);

            let excluding = self.excluding_rules(&rest, annotation, tree);
            if !excluding.is_empty() {
                violations.push(Violation {
                    annotation_index: index,
                    annotation: annotation.clone(),
                    cause: ViolationCause::Excluded,
                    rule_indices: excluding,
                });
            }

            let restricting = self.restricting_rules(&rest, annotation, tree);
            if !restricting.is_empty() {
                violations.push(Violation {
                    annotation_index: index,
                    annotation: annotation.clone(),
                    cause: ViolationCause::OutsideRestriction,
                    rule_indices: restricting,
                });
            }
        }

        tracing::debug!(
            annotation_count = annotations.len(),
            violation_count = violations.len(),
            "violation scan complete"
        );
        violations
    }
}
