//! Schema: the set of value trees keyed by assignment

use std::collections::BTreeMap;

use super::{SchemaTrees, TreeContext, ValueTree};
use crate::model::Assignment;

#[derive(Debug, Clone, Default)]
pub struct Schema {
    trees: BTreeMap<Assignment, ValueTree>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tree, replacing and returning any tree for the same assignment
    pub fn insert(&mut self, tree: ValueTree) -> Option<ValueTree> {
        let assignment = tree.assignment().clone();
        let replaced = self.trees.insert(assignment, tree);
        if let Some(old) = &replaced {
            tracing::warn!(
                prop_uri = %old.assignment().prop_uri,
                "value tree replaced for assignment"
            );
        }
        replaced
    }

    pub fn get(&self, assignment: &Assignment) -> Option<&ValueTree> {
        self.trees.get(assignment)
    }

    pub fn len(&self) -> usize {
        self.trees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }

    pub fn trees(&self) -> impl Iterator<Item = &ValueTree> {
        self.trees.values()
    }
}

impl FromIterator<ValueTree> for Schema {
    fn from_iter<I: IntoIterator<Item = ValueTree>>(iter: I) -> Self {
        let mut schema = Schema::new();
        for tree in iter {
            schema.insert(tree);
        }
        schema
    }
}

impl SchemaTrees for Schema {
    fn tree_for(&self, assignment: &Assignment) -> Option<&dyn TreeContext> {
        self.trees
            .get(assignment)
            .map(|tree| tree as &dyn TreeContext)
    }

    fn assignments(&self) -> Vec<&Assignment> {
        self.trees.keys().collect()
    }
}
