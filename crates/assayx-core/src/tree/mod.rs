//! Value trees: the hierarchy of permissible values for each assignment
//!
//! The engine only talks to trees through [`TreeContext`] and to the schema
//! through [`SchemaTrees`]; [`ValueTree`] and [`Schema`] are the indexed
//! in-memory implementations.

pub mod schema;
pub mod value_tree;

pub use schema::Schema;
pub use value_tree::{NodeSpec, TreeNode, ValueTree};

use crate::model::Assignment;

/// Queryable hierarchy for one assignment's value space
pub trait TreeContext: Send + Sync {
    /// The field this tree supplies values for
    fn assignment(&self) -> &Assignment;

    fn node_exists(&self, uri: &str) -> bool;

    /// True when `uri` is `ancestor` or lies beneath it; false when either
    /// is absent from the tree
    fn is_descendant_or_self(&self, ancestor: &str, uri: &str) -> bool;

    /// `uri` followed by all of its descendants; empty when absent
    fn descendants_of(&self, uri: &str) -> Vec<&str>;
}

/// Lookup of value trees by assignment
pub trait SchemaTrees {
    fn tree_for(&self, assignment: &Assignment) -> Option<&dyn TreeContext>;

    /// Every assignment that has a tree, in a stable order
    fn assignments(&self) -> Vec<&Assignment>;
}
