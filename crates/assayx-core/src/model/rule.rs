//! Axiom rule model
//!
//! A rule is a single antecedent (every subject term AND the optional
//! keyword) paired with a list of impact terms. LIMIT rules narrow the values
//! a field may take; EXCLUDE rules flag values as contradictory.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::term::{Keyword, Term};
use crate::errors::{AxiomError, Result, TermSide};

fn is_false(b: &bool) -> bool {
    !*b
}

/// What a firing rule does to its impact terms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RuleKind {
    /// Impacts are the only acceptable values
    Limit,
    /// Impacts are contradictory values
    Exclude,
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleKind::Limit => f.write_str("LIMIT"),
            RuleKind::Exclude => f.write_str("EXCLUDE"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rule {
    pub kind: RuleKind,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subject: Vec<Term>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword: Option<Keyword>,

    #[serde(default)]
    pub impact: Vec<Term>,

    /// When this rule fires, general rules' contributions are discarded
    #[serde(default, skip_serializing_if = "is_false")]
    pub exclusive: bool,
}

impl Rule {
    pub fn new(kind: RuleKind, subject: Vec<Term>, impact: Vec<Term>) -> Self {
        Self {
            kind,
            subject,
            keyword: None,
            impact,
            exclusive: false,
        }
    }

    pub fn limit(subject: Vec<Term>, impact: Vec<Term>) -> Self {
        Self::new(RuleKind::Limit, subject, impact)
    }

    pub fn exclude(subject: Vec<Term>, impact: Vec<Term>) -> Self {
        Self::new(RuleKind::Exclude, subject, impact)
    }

    pub fn with_keyword(mut self, keyword: Keyword) -> Self {
        self.keyword = Some(keyword);
        self
    }

    pub fn exclusive(mut self) -> Self {
        self.exclusive = true;
        self
    }

    /// Check the construction-time contract for a rule at `rule_index`
    ///
    /// # Errors
    ///
    /// - `EmptyAntecedent` when there are no subject terms and no keyword
    /// - `EmptyConsequent` when there are no impact terms
    /// - `TermWithoutValue` for a term with neither URI nor label
    /// - `LiteralSubject` for a label-only subject term
    /// - `BlankKeyword` for a keyword with no text
    pub fn validate(&self, rule_index: usize) -> Result<()> {
        if self.subject.is_empty() && self.keyword.is_none() {
            return Err(AxiomError::EmptyAntecedent { rule_index });
        }
        if self.impact.is_empty() {
            return Err(AxiomError::EmptyConsequent { rule_index });
        }

        for (term_index, term) in self.subject.iter().enumerate() {
            if !term.has_value() {
                return Err(AxiomError::TermWithoutValue {
                    rule_index,
                    side: TermSide::Subject,
                    term_index,
                });
            }
            if term.is_literal() {
                return Err(AxiomError::LiteralSubject {
                    rule_index,
                    label: term.value_label.clone().unwrap_or_default(),
                });
            }
        }

        for (term_index, term) in self.impact.iter().enumerate() {
            if !term.has_value() {
                return Err(AxiomError::TermWithoutValue {
                    rule_index,
                    side: TermSide::Impact,
                    term_index,
                });
            }
        }

        if self.keyword.as_ref().is_some_and(Keyword::is_blank) {
            return Err(AxiomError::BlankKeyword { rule_index });
        }

        Ok(())
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if self.exclusive {
            f.write_str("!")?;
        }
        f.write_str(" [")?;
        let subjects: Vec<String> = self.subject.iter().map(|t| t.to_string()).collect();
        f.write_str(&subjects.join(", "))?;
        if let Some(keyword) = &self.keyword {
            if !subjects.is_empty() {
                f.write_str(", ")?;
            }
            write!(f, "~\"{}\"", keyword.text)?;
        }
        f.write_str("] => [")?;
        let impacts: Vec<String> = self.impact.iter().map(|t| t.to_string()).collect();
        f.write_str(&impacts.join(", "))?;
        f.write_str("]")
    }
}
