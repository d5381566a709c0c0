use assayx_core::errors::{AxiomError, ExError, ExErrorKind};
use assayx_core_types::RequestId;

#[test]
fn test_tree_errors_carry_uri() {
    let ex: ExError = AxiomError::DuplicateTreeNode {
        uri: "bao:dup".to_string(),
    }
    .into();

    assert_eq!(ex.kind(), ExErrorKind::DuplicateNode);
    assert_eq!(ex.code(), "ERR_DUPLICATE_NODE");
    assert_eq!(ex.uri(), Some("bao:dup"));
}

#[test]
fn test_unknown_parent_message_names_parent() {
    let ex: ExError = AxiomError::UnknownParentNode {
        uri: "child".to_string(),
        parent_uri: "ghost".to_string(),
    }
    .into();

    assert_eq!(ex.kind(), ExErrorKind::UnknownParent);
    assert!(ex.message().contains("ghost"));
}

#[test]
fn test_cycle_maps_to_cycle_detected() {
    let ex: ExError = AxiomError::TreeCycle {
        uri: "loop".to_string(),
    }
    .into();
    assert_eq!(ex.code(), "ERR_CYCLE_DETECTED");
}

#[test]
fn test_error_kind_code_mapping() {
    let kinds = vec![
        (ExErrorKind::InvalidInput, "ERR_INVALID_INPUT"),
        (ExErrorKind::InvalidRule, "ERR_INVALID_RULE"),
        (ExErrorKind::Io, "ERR_IO"),
        (ExErrorKind::Parse, "ERR_PARSE"),
        (ExErrorKind::Config, "ERR_CONFIG"),
        (ExErrorKind::Internal, "ERR_INTERNAL"),
    ];

    for (kind, expected_code) in kinds {
        assert_eq!(kind.code(), expected_code);
    }
}

#[test]
fn test_context_builders_round_trip() {
    let request_id = RequestId::new();
    let ex = ExError::new(ExErrorKind::Parse)
        .with_op("vocab_load")
        .with_path("/tmp/rules.yaml")
        .with_request_id(request_id.clone())
        .with_message("unexpected key");

    assert_eq!(ex.op(), Some("vocab_load"));
    assert_eq!(ex.path(), Some("/tmp/rules.yaml"));
    assert_eq!(ex.request_id(), Some(&request_id));
    assert_eq!(
        ex.to_string(),
        "[ERR_PARSE] in operation 'vocab_load': unexpected key (path: /tmp/rules.yaml)"
    );
}

#[test]
fn test_serde_json_error_converts() {
    let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let axiom: AxiomError = err.into();
    let ex: ExError = axiom.into();
    assert_eq!(ex.kind(), ExErrorKind::Serialization);
}
