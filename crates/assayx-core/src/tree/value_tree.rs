//! Arena-backed value tree
//!
//! Nodes are stored in pre-order, each with the size of its subtree, so a
//! subtree is the contiguous range `[pos, pos + size)`. Ancestry tests are
//! two comparisons and descendant enumeration is a slice.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::TreeContext;
use crate::errors::{AxiomError, Result};
use crate::model::Assignment;

/// Input description of one node, parent given by URI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeSpec {
    pub uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

impl NodeSpec {
    pub fn root(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            label: None,
            parent: None,
        }
    }

    pub fn child(uri: impl Into<String>, parent: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            label: None,
            parent: Some(parent.into()),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub uri: String,
    pub label: Option<String>,
    /// Pre-order position of the parent
    pub parent: Option<usize>,
    pub depth: usize,
    subtree_size: usize,
}

impl TreeNode {
    pub fn subtree_size(&self) -> usize {
        self.subtree_size
    }
}

#[derive(Debug, Clone)]
pub struct ValueTree {
    assignment: Assignment,
    nodes: Vec<TreeNode>,
    position: HashMap<String, usize>,
}

impl ValueTree {
    /// Build and index a tree from node specs
    ///
    /// Roots and siblings keep their input order. Construction is iterative,
    /// so arbitrarily deep chains are fine.
    ///
    /// # Errors
    ///
    /// * `DuplicateTreeNode` - two specs share a URI
    /// * `UnknownParentNode` - a parent URI names no spec
    /// * `TreeCycle` - a node cannot be reached from any root
    pub fn build(assignment: Assignment, specs: Vec<NodeSpec>) -> Result<Self> {
        let mut spec_pos: HashMap<&str, usize> = HashMap::with_capacity(specs.len());
        for (i, spec) in specs.iter().enumerate() {
            if spec_pos.insert(spec.uri.as_str(), i).is_some() {
                return Err(AxiomError::DuplicateTreeNode {
                    uri: spec.uri.clone(),
                });
            }
        }

        let mut children: Vec<Vec<usize>> = vec![Vec::new(); specs.len()];
        let mut roots = Vec::new();
        for (i, spec) in specs.iter().enumerate() {
            match &spec.parent {
                None => roots.push(i),
                Some(parent_uri) => {
                    let parent = spec_pos.get(parent_uri.as_str()).copied().ok_or_else(|| {
                        AxiomError::UnknownParentNode {
                            uri: spec.uri.clone(),
                            parent_uri: parent_uri.clone(),
                        }
                    })?;
                    children[parent].push(i);
                }
            }
        }

        // Pre-order walk: (spec index, parent pre-order position, depth)
        let mut order: Vec<(usize, Option<usize>, usize)> = Vec::with_capacity(specs.len());
        let mut visited = vec![false; specs.len()];
        let mut stack: Vec<(usize, Option<usize>, usize)> =
            roots.iter().rev().map(|&r| (r, None, 0)).collect();
        while let Some((spec_idx, parent, depth)) = stack.pop() {
            visited[spec_idx] = true;
            let here = order.len();
            order.push((spec_idx, parent, depth));
            for &child in children[spec_idx].iter().rev() {
                stack.push((child, Some(here), depth + 1));
            }
        }

        if let Some(stranded) = visited.iter().position(|seen| !seen) {
            return Err(AxiomError::TreeCycle {
                uri: specs[stranded].uri.clone(),
            });
        }

        let mut sizes = vec![1usize; order.len()];
        for pos in (0..order.len()).rev() {
            if let Some(parent) = order[pos].1 {
                sizes[parent] += sizes[pos];
            }
        }

        let mut slots: Vec<Option<NodeSpec>> = specs.into_iter().map(Some).collect();
        let mut nodes = Vec::with_capacity(order.len());
        let mut position = HashMap::with_capacity(order.len());
        for (pos, (spec_idx, parent, depth)) in order.into_iter().enumerate() {
            let spec = slots[spec_idx].take().ok_or_else(|| AxiomError::Internal {
                message: "value tree node visited twice".to_string(),
            })?;
            position.insert(spec.uri.clone(), pos);
            nodes.push(TreeNode {
                uri: spec.uri,
                label: spec.label,
                parent,
                depth,
                subtree_size: sizes[pos],
            });
        }

        tracing::debug!(
            prop_uri = %assignment.prop_uri,
            node_count = nodes.len(),
            "value tree indexed"
        );

        Ok(Self {
            assignment,
            nodes,
            position,
        })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in pre-order
    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    pub fn get(&self, uri: &str) -> Option<&TreeNode> {
        self.position.get(uri).map(|&pos| &self.nodes[pos])
    }

    pub fn label_of(&self, uri: &str) -> Option<&str> {
        self.get(uri).and_then(|node| node.label.as_deref())
    }

    pub fn parent_of(&self, uri: &str) -> Option<&TreeNode> {
        self.get(uri)
            .and_then(|node| node.parent)
            .map(|pos| &self.nodes[pos])
    }

    fn subtree(&self, uri: &str) -> &[TreeNode] {
        match self.position.get(uri) {
            Some(&pos) => &self.nodes[pos..pos + self.nodes[pos].subtree_size],
            None => &[],
        }
    }
}

impl TreeContext for ValueTree {
    fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    fn node_exists(&self, uri: &str) -> bool {
        self.position.contains_key(uri)
    }

    fn is_descendant_or_self(&self, ancestor: &str, uri: &str) -> bool {
        match (self.position.get(ancestor), self.position.get(uri)) {
            (Some(&a), Some(&u)) => a <= u && u < a + self.nodes[a].subtree_size,
            _ => false,
        }
    }

    fn descendants_of(&self, uri: &str) -> Vec<&str> {
        self.subtree(uri).iter().map(|node| node.uri.as_str()).collect()
    }
}
