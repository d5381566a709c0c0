//! Winnowing: aggregate LIMIT rule impacts into a restriction per field

use std::collections::BTreeSet;

use super::matching::rule_fires;
use crate::model::{
    Annotation, Assignment, AxiomVocabulary, Conclusion, KeywordContent, Rule, RuleKind,
    SubjectContent,
};
use crate::tree::TreeContext;

/// Outcome of winnowing one field
///
/// `Unrestricted` means no rule narrowed the field and every value remains a
/// candidate. It is never the same thing as an empty restriction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Restriction {
    Unrestricted,
    RestrictedTo(BTreeSet<Conclusion>),
}

impl Restriction {
    /// Union of the given contributions; `Unrestricted` when there are none
    pub fn from_contributions(contributions: &[Contribution]) -> Self {
        if contributions.is_empty() {
            return Restriction::Unrestricted;
        }
        let members = contributions
            .iter()
            .flat_map(|c| c.conclusions.iter().cloned())
            .collect();
        Restriction::RestrictedTo(members)
    }

    pub fn is_unrestricted(&self) -> bool {
        matches!(self, Restriction::Unrestricted)
    }

    pub fn members(&self) -> Option<&BTreeSet<Conclusion>> {
        match self {
            Restriction::Unrestricted => None,
            Restriction::RestrictedTo(members) => Some(members),
        }
    }

    /// Whether `conclusion` is still an acceptable value
    pub fn allows(&self, conclusion: &Conclusion) -> bool {
        match self {
            Restriction::Unrestricted => true,
            Restriction::RestrictedTo(members) => members.contains(conclusion),
        }
    }

    /// URI members only; `None` when unrestricted
    pub fn filter_uri(&self) -> Option<BTreeSet<String>> {
        self.members().map(|members| {
            members
                .iter()
                .filter_map(|c| c.as_uri().map(str::to_string))
                .collect()
        })
    }

    /// Literal members only; empty when unrestricted
    pub fn literals(&self) -> BTreeSet<&str> {
        self.members()
            .map(|members| members.iter().filter_map(Conclusion::as_literal).collect())
            .unwrap_or_default()
    }

    /// The member an annotation asserts, if the restriction names it
    ///
    /// URIs must match exactly; labels match literal members ignoring case.
    /// Always `None` when unrestricted.
    pub fn supporting(&self, annotation: &Annotation) -> Option<&Conclusion> {
        let members = self.members()?;
        match annotation.conclusion()? {
            uri @ Conclusion::Uri(_) => members.get(&uri),
            Conclusion::Literal(label) => members.iter().find(|member| {
                member
                    .as_literal()
                    .is_some_and(|literal| literal.to_lowercase() == label.to_lowercase())
            }),
        }
    }

    /// The sole member, when the restriction pins the field to one value
    pub fn single(&self) -> Option<&Conclusion> {
        match self.members() {
            Some(members) if members.len() == 1 => members.iter().next(),
            _ => None,
        }
    }
}

/// What one firing LIMIT rule contributes to one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contribution {
    pub rule_index: usize,
    pub exclusive: bool,
    pub conclusions: BTreeSet<Conclusion>,
}

/// Keep only exclusive contributions when any exist
fn effective(contributions: Vec<Contribution>) -> Vec<Contribution> {
    if contributions.iter().any(|c| c.exclusive) {
        contributions.into_iter().filter(|c| c.exclusive).collect()
    } else {
        contributions
    }
}

/// Impacts of `rule` that land in `tree`
fn tree_contribution(rule_index: usize, rule: &Rule, tree: &dyn TreeContext) -> BTreeSet<Conclusion> {
    let mut conclusions = BTreeSet::new();
    for term in rule.impact.iter().filter(|t| t.scope_matches(tree.assignment())) {
        if let Some(literal) = term.literal_conclusion() {
            conclusions.insert(literal);
            continue;
        }
        let Some(uri) = term.value_uri.as_deref() else {
            continue;
        };
        if !tree.node_exists(uri) {
            tracing::debug!(
                rule_index,
                value_uri = uri,
                prop_uri = %tree.assignment().prop_uri,
                "impact URI absent from value tree"
            );
            continue;
        }
        if term.whole_branch {
            conclusions.extend(
                tree.descendants_of(uri)
                    .into_iter()
                    .map(|u| Conclusion::Uri(u.to_string())),
            );
        } else {
            conclusions.insert(Conclusion::Uri(uri.to_string()));
        }
    }
    conclusions
}

/// Literal impacts of `rule` that apply to `assignment`
fn literal_contribution(rule: &Rule, assignment: &Assignment) -> BTreeSet<Conclusion> {
    rule.impact
        .iter()
        .filter(|t| t.scope_matches(assignment))
        .filter_map(|t| t.literal_conclusion())
        .collect()
}

/// Evaluates LIMIT rules of one vocabulary against per-call evidence
///
/// Holds nothing but the vocabulary reference; build one per request.
#[derive(Debug, Clone, Copy)]
pub struct WinnowingEngine<'v> {
    vocabulary: &'v AxiomVocabulary,
}

impl<'v> WinnowingEngine<'v> {
    pub fn new(vocabulary: &'v AxiomVocabulary) -> Self {
        Self { vocabulary }
    }

    pub fn vocabulary(&self) -> &'v AxiomVocabulary {
        self.vocabulary
    }

    /// Firing rules of `kind`, with their positions
    pub fn fired(
        &self,
        kind: RuleKind,
        subjects: &[SubjectContent<'_>],
        keywords: &[KeywordContent],
    ) -> Vec<(usize, &'v Rule)> {
        self.vocabulary
            .rules_of_kind(kind)
            .filter(|(_, rule)| rule_fires(rule, subjects, keywords))
            .collect()
    }

    fn collect_contributions<F>(
        &self,
        subjects: &[SubjectContent<'_>],
        keywords: &[KeywordContent],
        contribute: F,
    ) -> Vec<Contribution>
    where
        F: Fn(usize, &Rule) -> BTreeSet<Conclusion>,
    {
        let contributions: Vec<Contribution> = self
            .fired(RuleKind::Limit, subjects, keywords)
            .into_iter()
            .filter_map(|(rule_index, rule)| {
                let conclusions = contribute(rule_index, rule);
                (!conclusions.is_empty()).then_some(Contribution {
                    rule_index,
                    exclusive: rule.exclusive,
                    conclusions,
                })
            })
            .collect();
        effective(contributions)
    }

    /// Contributions that determine the restriction of `tree`, after the
    /// exclusivity override
    pub fn contributions(
        &self,
        subjects: &[SubjectContent<'_>],
        keywords: &[KeywordContent],
        tree: &dyn TreeContext,
    ) -> Vec<Contribution> {
        self.collect_contributions(subjects, keywords, |rule_index, rule| {
            tree_contribution(rule_index, rule, tree)
        })
    }

    /// Literal contributions for `assignment`, after the exclusivity override
    pub fn literal_contributions(
        &self,
        subjects: &[SubjectContent<'_>],
        keywords: &[KeywordContent],
        assignment: &Assignment,
    ) -> Vec<Contribution> {
        self.collect_contributions(subjects, keywords, |_, rule| {
            literal_contribution(rule, assignment)
        })
    }

    /// Contributions for a field with or without a value tree
    pub fn contributions_for(
        &self,
        subjects: &[SubjectContent<'_>],
        keywords: &[KeywordContent],
        assignment: &Assignment,
        tree: Option<&dyn TreeContext>,
    ) -> Vec<Contribution> {
        match tree {
            Some(tree) => self.contributions(subjects, keywords, tree),
            None => self.literal_contributions(subjects, keywords, assignment),
        }
    }

    /// Narrow the values of `tree` to those the firing LIMIT rules allow
    ///
    /// # Arguments
    /// * `subjects` - semantic evidence
    /// * `keywords` - free-text evidence
    /// * `tree` - value tree of the field being winnowed
    ///
    /// # Returns
    /// `Unrestricted` when no firing rule lands anything in this field;
    /// otherwise the union of the exclusive contributions if any exclusive
    /// rule contributed, else the union of all contributions.
    pub fn winnow_branch(
        &self,
        subjects: &[SubjectContent<'_>],
        keywords: &[KeywordContent],
        tree: &dyn TreeContext,
    ) -> Restriction {
        Restriction::from_contributions(&self.contributions(subjects, keywords, tree))
    }

    /// Literal values implied for `assignment`
    pub fn implied_literals(
        &self,
        subjects: &[SubjectContent<'_>],
        keywords: &[KeywordContent],
        assignment: &Assignment,
    ) -> BTreeSet<Conclusion> {
        self.literal_contributions(subjects, keywords, assignment)
            .into_iter()
            .flat_map(|c| c.conclusions)
            .collect()
    }

    /// Winnow a field that may or may not have a value tree
    ///
    /// Without a tree only literal impacts can apply.
    pub fn winnow_assignment(
        &self,
        subjects: &[SubjectContent<'_>],
        keywords: &[KeywordContent],
        assignment: &Assignment,
        tree: Option<&dyn TreeContext>,
    ) -> Restriction {
        Restriction::from_contributions(&self.contributions_for(subjects, keywords, assignment, tree))
    }
}
