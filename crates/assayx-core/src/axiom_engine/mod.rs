//! Axiom evaluation engine
//!
//! Matches rule antecedents against per-call evidence and aggregates LIMIT
//! impacts into field restrictions. The engine is a pure function of the
//! borrowed vocabulary and its arguments: no I/O, no caching, nothing
//! retained between calls.

pub mod matching;
pub mod winnow;

pub use matching::{
    impact_matches_annotation, keyword_matches, matching_triggers, rule_fires,
    subject_term_matches, Trigger,
};
pub use winnow::{Contribution, Restriction, WinnowingEngine};
