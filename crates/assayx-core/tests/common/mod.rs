use assayx_core::tree::NodeSpec;
use assayx_core::{Assignment, AxiomVocabulary, Rule, Schema, ValueTree};

pub const ASSAY_TYPE: &str = "bao:assay_type";
pub const UNIT: &str = "bao:unit";
pub const RESULT_NOTE: &str = "bao:result_note";

#[allow(dead_code)]
pub fn field(prop_uri: &str) -> Assignment {
    Assignment::new(prop_uri)
}

/// Two trees:
///
/// assay_type: A { A1, A2 }, Q
/// unit:       B { B1, B2 }, C { C1 }, X { X1 }, Y, Z
///
/// `RESULT_NOTE` is a free-text field with no tree.
#[allow(dead_code)]
pub fn sample_schema() -> Schema {
    let assay_type = ValueTree::build(
        field(ASSAY_TYPE),
        vec![
            NodeSpec::root("A").with_label("A-text"),
            NodeSpec::child("A1", "A"),
            NodeSpec::child("A2", "A"),
            NodeSpec::root("Q"),
        ],
    )
    .unwrap();

    let unit = ValueTree::build(
        field(UNIT),
        vec![
            NodeSpec::root("B"),
            NodeSpec::child("B1", "B"),
            NodeSpec::child("B2", "B"),
            NodeSpec::root("C"),
            NodeSpec::child("C1", "C"),
            NodeSpec::root("X"),
            NodeSpec::child("X1", "X"),
            NodeSpec::root("Y"),
            NodeSpec::root("Z"),
        ],
    )
    .unwrap();

    [assay_type, unit].into_iter().collect()
}

#[allow(dead_code)]
pub fn vocabulary(rules: Vec<Rule>) -> AxiomVocabulary {
    AxiomVocabulary::new(rules).unwrap()
}

#[allow(dead_code)]
pub fn uris(items: &[&str]) -> std::collections::BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}
