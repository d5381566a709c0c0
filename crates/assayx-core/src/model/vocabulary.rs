//! Axiom vocabulary: the validated, immutable rule set
//!
//! Built once per process (or per configuration reload) and shared by
//! reference across evaluations. Rule order has no semantic effect beyond
//! giving duplicates a deterministic order.

use serde::Serialize;
use std::collections::BTreeSet;

use super::rule::{Rule, RuleKind};
use super::term::{Assignment, Term};
use crate::errors::Result;

/// Rule counts for reporting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct VocabularyStats {
    pub limit: usize,
    pub exclude: usize,
    pub exclusive: usize,
    pub keyword_rules: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AxiomVocabulary {
    rules: Vec<Rule>,
    limit_positions: Vec<usize>,
    exclude_positions: Vec<usize>,
}

impl AxiomVocabulary {
    /// Validate and index a rule list
    ///
    /// # Errors
    ///
    /// Returns the first contract violation found, tagged with the rule's
    /// position (see [`Rule::validate`]).
    pub fn new(rules: Vec<Rule>) -> Result<Self> {
        for (index, rule) in rules.iter().enumerate() {
            rule.validate(index)?;
        }

        let mut limit_positions = Vec::new();
        let mut exclude_positions = Vec::new();
        for (index, rule) in rules.iter().enumerate() {
            match rule.kind {
                RuleKind::Limit => limit_positions.push(index),
                RuleKind::Exclude => exclude_positions.push(index),
            }
        }

        tracing::debug!(
            rule_count = rules.len(),
            limit = limit_positions.len(),
            exclude = exclude_positions.len(),
            "axiom vocabulary indexed"
        );

        Ok(Self {
            rules,
            limit_positions,
            exclude_positions,
        })
    }

    /// A vocabulary with no rules; every evaluation is unrestricted
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn get(&self, index: usize) -> Option<&Rule> {
        self.rules.get(index)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules of one kind with their vocabulary positions, in order
    pub fn rules_of_kind(&self, kind: RuleKind) -> impl Iterator<Item = (usize, &Rule)> + '_ {
        let positions = match kind {
            RuleKind::Limit => &self.limit_positions,
            RuleKind::Exclude => &self.exclude_positions,
        };
        positions.iter().map(move |&index| (index, &self.rules[index]))
    }

    pub fn stats(&self) -> VocabularyStats {
        VocabularyStats {
            limit: self.limit_positions.len(),
            exclude: self.exclude_positions.len(),
            exclusive: self.rules.iter().filter(|r| r.exclusive).count(),
            keyword_rules: self.rules.iter().filter(|r| r.keyword.is_some()).count(),
        }
    }

    /// Assignments targeted by scoped literal impacts of LIMIT rules
    ///
    /// These are the free-text fields the vocabulary can fill in on its own
    /// (e.g. "not applicable"), whether or not the schema has a tree for them.
    pub fn literal_assignments(&self) -> BTreeSet<Assignment> {
        self.literal_impacts()
            .filter_map(Term::target_assignment)
            .collect()
    }

    /// Scoped literal impact terms of LIMIT rules
    pub fn literal_impacts(&self) -> impl Iterator<Item = &Term> + '_ {
        self.rules_of_kind(RuleKind::Limit)
            .flat_map(|(_, rule)| rule.impact.iter())
            .filter(|term| term.is_literal() && term.is_scoped())
    }

    pub fn into_rules(self) -> Vec<Rule> {
        self.rules
    }
}
