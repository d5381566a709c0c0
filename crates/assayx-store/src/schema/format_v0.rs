//! Schema tree Format v0 schema
//!
//! One entry per assignment, each with its value tree as a flat node list:
//!
//! ```yaml
//! schema_version: 0
//! assignments:
//!   - prop_uri: bao:BAO_0002874
//!     nodes:
//!       - uri: bao:BAO_0000101
//!         label: concentration unit
//!       - uri: obo:UO_0000064
//!         label: micromolar
//!         parent: bao:BAO_0000101
//! ```

use assayx_core::tree::NodeSpec;
use assayx_core::Assignment;
use serde::{Deserialize, Serialize};

pub const SCHEMA_SCHEMA_VERSION: u32 = 0;

/// Top-level schema file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaV0 {
    /// Schema version (must be 0 for this format)
    pub schema_version: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default)]
    pub assignments: Vec<AssignmentTreeV0>,
}

/// The value tree of one assignment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentTreeV0 {
    pub prop_uri: String,

    /// Enclosing groups, innermost first
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub group_nest: Vec<String>,

    /// Nodes in any order; parents are referenced by URI
    #[serde(default)]
    pub nodes: Vec<NodeSpec>,
}

impl AssignmentTreeV0 {
    pub fn assignment(&self) -> Assignment {
        Assignment::new(self.prop_uri.clone()).with_group_nest(self.group_nest.clone())
    }
}
