// Shared fixtures for engine tests

#![allow(dead_code)]

use assayx_core::model::{Annotation, Assignment, AxiomVocabulary, Keyword, Rule, Term};
use assayx_core::tree::{NodeSpec, Schema, ValueTree};
use assayx_store::RecordV0;

pub const RESULT: &str = "bao:result";
pub const UNIT: &str = "bao:unit";
pub const FORMAT: &str = "bao:format";
pub const BIOLOGY: &str = "bao:biology";
pub const DETECTION_NOTE: &str = "bao:detection_note";

pub fn field(prop_uri: &str) -> Assignment {
    Assignment::new(prop_uri)
}

fn tree(prop_uri: &str, nodes: Vec<NodeSpec>) -> ValueTree {
    ValueTree::build(field(prop_uri), nodes).unwrap()
}

/// result: half_max{IC50, EC50}, percent_inhibition
/// unit: concentration{uM, nM}, percent
/// format: cell_free{biochemical}, cell_based
/// biology: cell_line{HeLa}, organism
pub fn schema() -> Schema {
    [
        tree(
            RESULT,
            vec![
                NodeSpec::root("bao:half_max"),
                NodeSpec::child("bao:IC50", "bao:half_max"),
                NodeSpec::child("bao:EC50", "bao:half_max"),
                NodeSpec::root("bao:percent_inhibition"),
            ],
        ),
        tree(
            UNIT,
            vec![
                NodeSpec::root("bao:concentration"),
                NodeSpec::child("bao:uM", "bao:concentration").with_label("micromolar"),
                NodeSpec::child("bao:nM", "bao:concentration").with_label("nanomolar"),
                NodeSpec::root("bao:percent").with_label("percent"),
            ],
        ),
        tree(
            FORMAT,
            vec![
                NodeSpec::root("bao:cell_free"),
                NodeSpec::child("bao:biochemical", "bao:cell_free"),
                NodeSpec::root("bao:cell_based"),
            ],
        ),
        tree(
            BIOLOGY,
            vec![
                NodeSpec::root("bao:cell_line"),
                NodeSpec::child("bao:HeLa", "bao:cell_line"),
                NodeSpec::root("bao:organism"),
            ],
        ),
    ]
    .into_iter()
    .collect()
}

/// 0: IC50@result        => concentration*@unit
/// 1: ~"qualitative"     => "not applicable"@unit (exclusive)
/// 2: EXCLUDE cell_free* => cell_line*@biology
/// 3: percent_inhibition@result => percent@unit
/// 4: ~"qualitative"     => "not applicable"@detection_note
pub fn vocabulary() -> AxiomVocabulary {
    AxiomVocabulary::new(vec![
        Rule::limit(
            vec![Term::uri("bao:IC50").scoped(RESULT)],
            vec![Term::branch("bao:concentration").scoped(UNIT)],
        ),
        Rule::limit(vec![], vec![Term::literal("not applicable").scoped(UNIT)])
            .with_keyword(Keyword::new("qualitative"))
            .exclusive(),
        Rule::exclude(
            vec![Term::branch("bao:cell_free")],
            vec![Term::branch("bao:cell_line").scoped(BIOLOGY)],
        ),
        Rule::limit(
            vec![Term::uri("bao:percent_inhibition").scoped(RESULT)],
            vec![Term::uri("bao:percent").scoped(UNIT)],
        ),
        Rule::limit(
            vec![],
            vec![Term::literal("not applicable").scoped(DETECTION_NOTE)],
        )
        .with_keyword(Keyword::new("qualitative")),
    ])
    .unwrap()
}

pub fn record(record_id: &str, text: Option<&str>, annotations: Vec<Annotation>) -> RecordV0 {
    RecordV0 {
        schema_version: 0,
        record_id: Some(record_id.to_string()),
        text: text.map(str::to_string),
        annotations,
    }
}

pub fn uri(prop_uri: &str, value_uri: &str) -> Annotation {
    Annotation::uri(field(prop_uri), value_uri)
}

pub fn label(prop_uri: &str, value_label: &str) -> Annotation {
    Annotation::label(field(prop_uri), value_label)
}

pub const VOCABULARY_YAML: &str = r#"schema_version: 0
name: engine test axioms
rules:
  - kind: LIMIT
    subject:
      - value_uri: bao:IC50
        prop_uri: bao:result
    impact:
      - value_uri: bao:concentration
        whole_branch: true
        prop_uri: bao:unit
  - kind: EXCLUDE
    keyword:
      text: cell-free
    impact:
      - value_uri: bao:cell_line
        whole_branch: true
"#;
