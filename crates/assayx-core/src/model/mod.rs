//! Axiom domain model

pub mod annotation;
pub mod conclusion;
pub mod evidence;
pub mod rule;
pub mod term;
pub mod vocabulary;

pub use annotation::Annotation;
pub use conclusion::Conclusion;
pub use evidence::{Evidence, KeywordContent, SubjectContent};
pub use rule::{Rule, RuleKind};
pub use term::{Assignment, Keyword, Term};
pub use vocabulary::{AxiomVocabulary, VocabularyStats};
