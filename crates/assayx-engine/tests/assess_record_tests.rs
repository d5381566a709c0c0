// Integration tests for record assessment

mod common;

use assayx_core::errors::ExErrorKind;
use assayx_core::logging_facility::test_capture::init_test_capture;
use assayx_core::model::Annotation;
use assayx_core::rules::ViolationCause;
use assayx_core_types::RequestContext;
use assayx_engine::commands::assess::assess_record;
use common::*;

#[test]
fn test_supported_annotation_is_justified() {
    let record = record(
        "AID1",
        None,
        vec![uri(RESULT, "bao:IC50"), uri(UNIT, "bao:uM")],
    );
    let report = assess_record(&RequestContext::new(), &vocabulary(), &schema(), &record).unwrap();

    assert_eq!(report.record_id.as_deref(), Some("AID1"));
    assert!(report.is_clean());
    assert_eq!(report.justifications.len(), 1);
    let effect = &report.justifications[0];
    assert_eq!(effect.prop_uri, UNIT);
    assert_eq!(effect.value_uri.as_deref(), Some("bao:uM"));
    assert_eq!(effect.triggers, vec!["bao:IC50".to_string()]);
    assert_eq!(effect.rule_indices, vec![0]);
    assert!(report.additional.is_empty());
}

#[test]
fn test_single_value_restriction_is_proposed() {
    let record = record("AID2", None, vec![uri(RESULT, "bao:percent_inhibition")]);
    let report = assess_record(&RequestContext::new(), &vocabulary(), &schema(), &record).unwrap();

    assert!(report.justifications.is_empty());
    assert_eq!(report.additional.len(), 1);
    let effect = &report.additional[0];
    assert_eq!(effect.prop_uri, UNIT);
    assert_eq!(effect.value_uri.as_deref(), Some("bao:percent"));
    assert_eq!(effect.value_label.as_deref(), Some("percent"));
    assert_eq!(effect.triggers, vec!["bao:percent_inhibition".to_string()]);
}

#[test]
fn test_value_outside_restriction_is_violation() {
    let record = record(
        "AID3",
        None,
        vec![uri(RESULT, "bao:IC50"), uri(UNIT, "bao:percent")],
    );
    let report = assess_record(&RequestContext::new(), &vocabulary(), &schema(), &record).unwrap();

    assert!(report.justifications.is_empty());
    assert_eq!(report.violations.len(), 1);
    let effect = &report.violations[0];
    assert_eq!(effect.value_uri.as_deref(), Some("bao:percent"));
    assert_eq!(effect.cause, Some(ViolationCause::OutsideRestriction));
    assert_eq!(effect.triggers, vec!["bao:IC50".to_string()]);
    assert_eq!(effect.rule_indices, vec![0]);
}

#[test]
fn test_excluded_value_names_the_triggering_annotation() {
    let record = record(
        "AID4",
        None,
        vec![uri(FORMAT, "bao:biochemical"), uri(BIOLOGY, "bao:HeLa")],
    );
    let report = assess_record(&RequestContext::new(), &vocabulary(), &schema(), &record).unwrap();

    assert_eq!(report.violations.len(), 1);
    let effect = &report.violations[0];
    assert_eq!(effect.prop_uri, BIOLOGY);
    assert_eq!(effect.cause, Some(ViolationCause::Excluded));
    assert_eq!(effect.triggers, vec!["bao:biochemical".to_string()]);
    assert!(report.additional.is_empty());
}

#[test]
fn test_exclusive_keyword_rule_proposes_literals() {
    let record = record(
        "AID5",
        Some("Qualitative binding screen"),
        vec![uri(RESULT, "bao:IC50")],
    );
    let report = assess_record(&RequestContext::new(), &vocabulary(), &schema(), &record).unwrap();

    // The exclusive rule overrides the IC50 concentration restriction,
    // leaving one literal for the unit field; the note field has no tree
    let proposed: Vec<(&str, Option<&str>, Option<&str>)> = report
        .additional
        .iter()
        .map(|e| {
            (
                e.prop_uri.as_str(),
                e.value_uri.as_deref(),
                e.value_label.as_deref(),
            )
        })
        .collect();
    assert_eq!(
        proposed,
        vec![
            (UNIT, None, Some("not applicable")),
            (DETECTION_NOTE, None, Some("not applicable")),
        ]
    );
    for effect in &report.additional {
        assert_eq!(effect.triggers, vec!["qualitative".to_string()]);
    }
}

#[test]
fn test_free_text_annotation_judged_against_literals() {
    let ctx = RequestContext::new();
    let text = Some("A qualitative assay");

    let agreeing = record("AID6", text, vec![label(DETECTION_NOTE, "Not Applicable")]);
    let report = assess_record(&ctx, &vocabulary(), &schema(), &agreeing).unwrap();
    assert!(report.is_clean());
    assert_eq!(report.justifications.len(), 1);
    assert_eq!(report.justifications[0].triggers, vec!["qualitative".to_string()]);
    assert_eq!(report.justifications[0].rule_indices, vec![4]);

    let disagreeing = record("AID7", text, vec![label(DETECTION_NOTE, "n/a")]);
    let report = assess_record(&ctx, &vocabulary(), &schema(), &disagreeing).unwrap();
    assert_eq!(report.violations.len(), 1);
    assert_eq!(
        report.violations[0].cause,
        Some(ViolationCause::OutsideRestriction)
    );
    assert_eq!(report.violations[0].triggers, vec!["qualitative".to_string()]);
}

#[test]
fn test_nested_free_text_annotation_fills_property_scoped_literal() {
    let nested_note = field(DETECTION_NOTE).with_group_nest(vec!["g1".into()]);
    let record = record(
        "AID9",
        Some("A qualitative assay"),
        vec![Annotation::label(nested_note, "percent")],
    );
    let report = assess_record(&RequestContext::new(), &vocabulary(), &schema(), &record).unwrap();

    assert_eq!(report.violations.len(), 1);
    assert_eq!(report.violations[0].prop_uri, DETECTION_NOTE);
    assert_eq!(report.violations[0].group_nest, vec!["g1".to_string()]);
    assert_eq!(
        report.violations[0].cause,
        Some(ViolationCause::OutsideRestriction)
    );

    let proposed: Vec<&str> = report.additional.iter().map(|e| e.prop_uri.as_str()).collect();
    assert_eq!(proposed, vec![UNIT]);
}

#[test]
fn test_empty_record_has_no_effects() {
    let report = assess_record(
        &RequestContext::new(),
        &vocabulary(),
        &schema(),
        &record("AID8", None, vec![]),
    )
    .unwrap();
    assert!(report.justifications.is_empty());
    assert!(report.violations.is_empty());
    assert!(report.additional.is_empty());
}

#[test]
fn test_annotation_without_value_is_rejected() {
    let capture = init_test_capture();
    let ctx = RequestContext::new();
    let blank = Annotation {
        assignment: field(UNIT),
        value_uri: None,
        value_label: None,
    };

    let err = assess_record(
        &ctx,
        &vocabulary(),
        &schema(),
        &record("AID9", None, vec![uri(RESULT, "bao:IC50"), blank]),
    )
    .unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::InvalidInput);
    assert_eq!(err.request_id(), Some(&ctx.request_id));
    assert!(err.message().contains("Annotation 1"));

    let request_id = ctx.request_id.to_string();
    let errors = capture.count_events(|e| {
        e.op.as_deref() == Some("assess_record")
            && e.event.as_deref() == Some("end_error")
            && e.fields.get("request_id") == Some(&request_id)
    });
    assert_eq!(errors, 1);
}

#[test]
fn test_assessment_logs_lifecycle_with_counts() {
    let capture = init_test_capture();
    let ctx = RequestContext::new().with_record_id("caller-record");
    let record = assayx_store::RecordV0 {
        record_id: None,
        ..record(
            "unused",
            None,
            vec![uri(RESULT, "bao:IC50"), uri(UNIT, "bao:percent")],
        )
    };

    let report = assess_record(&ctx, &vocabulary(), &schema(), &record).unwrap();
    assert_eq!(report.record_id.as_deref(), Some("caller-record"));

    let request_id = ctx.request_id.to_string();
    let ends: Vec<_> = capture
        .find("assess_record", "end")
        .into_iter()
        .filter(|e| e.fields.get("request_id") == Some(&request_id))
        .collect();
    assert_eq!(ends.len(), 1);
    let end = &ends[0];
    assert_eq!(end.fields.get("record_id").map(String::as_str), Some("caller-record"));
    assert_eq!(end.fields.get("violation_count").map(String::as_str), Some("1"));
    assert!(end.fields.contains_key("duration_ms"));

    let starts = capture.count_events(|e| {
        e.op.as_deref() == Some("assess_record")
            && e.event.as_deref() == Some("start")
            && e.fields.get("request_id") == Some(&request_id)
    });
    assert_eq!(starts, 1);
}
