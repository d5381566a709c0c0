//! Justification tracing
//!
//! Explains a conclusion by naming the evidence that triggers it. For each
//! rule that could have produced the conclusion, every evidence item that
//! satisfies part of the rule's antecedent is collected. The result may
//! include more than strictly necessary but never leaves out a trigger the
//! conclusion depends on.

use std::collections::BTreeSet;

use super::violations::restriction_rejects;
use crate::axiom_engine::{
    impact_matches_annotation, matching_triggers, Restriction, WinnowingEngine,
};
use crate::model::{Annotation, Assignment, AxiomVocabulary, Conclusion, Evidence, RuleKind};
use crate::tree::SchemaTrees;

/// The conclusion being explained
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// A value the LIMIT rules allow or imply for a field
    Implied {
        assignment: Assignment,
        conclusion: Conclusion,
    },
    /// An annotation reported as violating
    Violation { annotation_index: usize },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Justification {
    /// Curator-facing trigger names, first-seen order, no duplicates
    pub triggers: Vec<String>,
    /// Indices of the annotations among the triggers
    pub sources: BTreeSet<usize>,
    /// Whether the record body text is among the triggers
    pub uses_record_text: bool,
    /// Vocabulary positions of the rules traced
    pub rule_indices: Vec<usize>,
}

impl Justification {
    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }

    /// The evidence subset this justification names
    pub fn evidence<'a>(&self, evidence: &Evidence<'a>) -> Evidence<'a> {
        evidence.restricted_to(&self.sources, self.uses_record_text)
    }
}

pub struct JustificationTracer<'v> {
    engine: WinnowingEngine<'v>,
}

impl<'v> JustificationTracer<'v> {
    pub fn new(vocabulary: &'v AxiomVocabulary) -> Self {
        Self {
            engine: WinnowingEngine::new(vocabulary),
        }
    }

    /// Rules that produce `target` on `evidence`, plus the evidence they
    /// should be traced against
    fn producing_rules<'a>(
        &self,
        evidence: &Evidence<'a>,
        annotations: &[Annotation],
        schema: &dyn SchemaTrees,
        target: &Target,
    ) -> (Vec<usize>, Evidence<'a>) {
        match target {
            Target::Implied {
                assignment,
                conclusion,
            } => {
                let tree = schema.tree_for(assignment);
                let rules = self
                    .engine
                    .contributions_for(&evidence.subjects, &evidence.keywords, assignment, tree)
                    .into_iter()
                    .filter(|c| c.conclusions.contains(conclusion))
                    .map(|c| c.rule_index)
                    .collect();
                (rules, evidence.clone())
            }
            Target::Violation { annotation_index } => {
                let Some(annotation) = annotations.get(*annotation_index) else {
                    return (Vec::new(), Evidence::default());
                };
                let rest = evidence.without(*annotation_index);
                let tree = schema.tree_for(&annotation.assignment);

                let mut rules: Vec<usize> = self
                    .engine
                    .fired(RuleKind::Exclude, &rest.subjects, &rest.keywords)
                    .into_iter()
                    .filter(|(_, rule)| {
                        rule.impact
                            .iter()
                            .any(|term| impact_matches_annotation(term, annotation, tree))
                    })
                    .map(|(index, _)| index)
                    .collect();

                let contributions = self.engine.contributions_for(
                    &rest.subjects,
                    &rest.keywords,
                    &annotation.assignment,
                    tree,
                );
                if restriction_rejects(&Restriction::from_contributions(&contributions), annotation)
                {
                    rules.extend(contributions.iter().map(|c| c.rule_index));
                }
                (rules, rest)
            }
        }
    }

    /// Trace `target` back to the evidence that triggers it
    ///
    /// An empty justification means nothing in `evidence` produces the
    /// target.
    pub fn justify(
        &self,
        evidence: &Evidence<'_>,
        annotations: &[Annotation],
        schema: &dyn SchemaTrees,
        target: &Target,
    ) -> Justification {
        let (rule_indices, traced) = self.producing_rules(evidence, annotations, schema, target);

        let mut justification = Justification {
            rule_indices,
            ..Justification::default()
        };
        let mut seen = BTreeSet::new();

        for &rule_index in &justification.rule_indices {
            let Some(rule) = self.engine.vocabulary().get(rule_index) else {
                continue;
            };
            for trigger in matching_triggers(rule, &traced.subjects, &traced.keywords) {
                match trigger.source() {
                    Some(source) => {
                        justification.sources.insert(source);
                    }
                    None => justification.uses_record_text = true,
                }
                let text = trigger.display_text();
                if seen.insert(text.to_string()) {
                    justification.triggers.push(text.to_string());
                }
            }
        }

        tracing::debug!(
            rule_count = justification.rule_indices.len(),
            trigger_count = justification.triggers.len(),
            "justification traced"
        );
        justification
    }

    /// Trigger names for `target`
    pub fn find_triggers(
        &self,
        evidence: &Evidence<'_>,
        annotations: &[Annotation],
        schema: &dyn SchemaTrees,
        target: &Target,
    ) -> Vec<String> {
        self.justify(evidence, annotations, schema, target).triggers
    }
}
