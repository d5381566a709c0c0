//! Record assessment
//!
//! Runs the winnowing engine, violation detector and justification tracer
//! over one record and gathers the results into an [`AxiomReport`]:
//!
//! - **justifications**: annotations that the rest of the record restricts
//!   their field to, with the evidence responsible
//! - **violations**: annotations that an EXCLUDE rule forbids or that fall
//!   outside their field's restriction
//! - **additional**: values implied for fields the record leaves empty,
//!   either because the restriction pins the field to a single value or
//!   because a literal impact names a free-text field
//!
//! Every rule is evaluated against the record's own evidence; nothing is
//! cached between records.

use assayx_core::errors::{ExError, ExErrorKind};
use assayx_core::model::{Annotation, Assignment, AxiomVocabulary, Conclusion, Evidence};
use assayx_core::rules::{JustificationTracer, Target, ViolationDetector};
use assayx_core::tree::{Schema, SchemaTrees, TreeContext};
use assayx_core::{log_op_end, log_op_error, log_op_start, WinnowingEngine};
use assayx_core_types::RequestContext;
use assayx_store::errors::Result;
use assayx_store::{parse_record_file, parse_schema_file, RecordV0};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use crate::report::{AxiomEffect, AxiomReport};

/// Assess one record against a vocabulary and schema
///
/// ## Errors
///
/// - `InvalidInput`: an annotation carries neither a value URI nor a
///   value label
pub fn assess_record(
    ctx: &RequestContext,
    vocabulary: &AxiomVocabulary,
    schema: &Schema,
    record: &RecordV0,
) -> Result<AxiomReport> {
    let record_id = record
        .record_id
        .as_deref()
        .unwrap_or_else(|| ctx.record_label());
    log_op_start!(
        "assess_record",
        request_id = %ctx.request_id,
        record_id = record_id,
        annotation_count = record.annotations.len()
    );
    let start = std::time::Instant::now();

    let report = assess_record_impl(ctx, vocabulary, schema, record).map_err(|e| {
        log_op_error!(
            "assess_record",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            request_id = %ctx.request_id
        );
        e
    })?;

    log_op_end!(
        "assess_record",
        duration_ms = start.elapsed().as_millis() as u64,
        request_id = %ctx.request_id,
        record_id = record_id,
        justification_count = report.justifications.len(),
        violation_count = report.violations.len(),
        additional_count = report.additional.len()
    );

    Ok(report)
}

fn validate_annotations(ctx: &RequestContext, annotations: &[Annotation]) -> Result<()> {
    match annotations.iter().position(|a| a.conclusion().is_none()) {
        Some(index) => Err(ExError::new(ExErrorKind::InvalidInput)
            .with_op("assess_record")
            .with_request_id(ctx.request_id.clone())
            .with_message(format!(
                "Annotation {} has neither value URI nor value label",
                index
            ))),
        None => Ok(()),
    }
}

fn assess_record_impl(
    ctx: &RequestContext,
    vocabulary: &AxiomVocabulary,
    schema: &Schema,
    record: &RecordV0,
) -> Result<AxiomReport> {
    validate_annotations(ctx, &record.annotations)?;

    let annotations = record.annotations.as_slice();
    let evidence = Evidence::from_record(annotations, record.text.as_deref(), schema);

    Ok(AxiomReport {
        record_id: record.record_id.clone().or_else(|| ctx.record_id.clone()),
        justifications: justifications(vocabulary, schema, annotations, &evidence),
        violations: violations(vocabulary, schema, annotations, &evidence),
        additional: additional(vocabulary, schema, annotations, &evidence),
    })
}

/// Annotations whose field the rest of the record restricts to include them
fn justifications(
    vocabulary: &AxiomVocabulary,
    schema: &Schema,
    annotations: &[Annotation],
    evidence: &Evidence<'_>,
) -> Vec<AxiomEffect> {
    let engine = WinnowingEngine::new(vocabulary);
    let tracer = JustificationTracer::new(vocabulary);
    let mut effects = Vec::new();

    for (index, annotation) in annotations.iter().enumerate() {
        let rest = evidence.without(index);
        let assignment = &annotation.assignment;
        let restriction = engine.winnow_assignment(
            &rest.subjects,
            &rest.keywords,
            assignment,
            schema.tree_for(assignment),
        );
        let Some(conclusion) = restriction.supporting(annotation) else {
            continue;
        };

        let target = Target::Implied {
            assignment: assignment.clone(),
            conclusion: conclusion.clone(),
        };
        let justification = tracer.justify(&rest, annotations, schema, &target);
        effects.push(AxiomEffect::supported(annotation, justification));
    }

    effects
}

fn violations(
    vocabulary: &AxiomVocabulary,
    schema: &Schema,
    annotations: &[Annotation],
    evidence: &Evidence<'_>,
) -> Vec<AxiomEffect> {
    let detector = ViolationDetector::new(vocabulary);
    let tracer = JustificationTracer::new(vocabulary);

    detector
        .violating_axioms(evidence, annotations, schema)
        .into_iter()
        .map(|violation| {
            let target = Target::Violation {
                annotation_index: violation.annotation_index,
            };
            let triggers = tracer.find_triggers(evidence, annotations, schema, &target);
            AxiomEffect::violation(violation, triggers)
        })
        .collect()
}

/// Values the axioms imply for fields with no annotation
fn additional(
    vocabulary: &AxiomVocabulary,
    schema: &Schema,
    annotations: &[Annotation],
    evidence: &Evidence<'_>,
) -> Vec<AxiomEffect> {
    let engine = WinnowingEngine::new(vocabulary);
    let tracer = JustificationTracer::new(vocabulary);
    let annotated: BTreeSet<&Assignment> = annotations.iter().map(|a| &a.assignment).collect();
    let mut effects = Vec::new();

    let mut propose = |assignment: &Assignment, conclusion: &Conclusion| {
        let node_label = conclusion
            .as_uri()
            .and_then(|uri| schema.get(assignment)?.label_of(uri));
        let target = Target::Implied {
            assignment: assignment.clone(),
            conclusion: conclusion.clone(),
        };
        let justification = tracer.justify(evidence, annotations, schema, &target);
        effects.push(AxiomEffect::proposed(
            assignment,
            conclusion,
            node_label,
            justification,
        ));
    };

    // Fields with a tree: only a restriction down to one value is a proposal
    for tree in schema.trees() {
        let assignment = tree.assignment();
        if annotated.contains(assignment) {
            continue;
        }
        let restriction = engine.winnow_branch(&evidence.subjects, &evidence.keywords, tree);
        if let Some(conclusion) = restriction.single() {
            propose(assignment, conclusion);
        }
    }

    // Free-text fields the schema has no tree for. A field counts as filled
    // when any annotation sits within an impact's scope, so a property-only
    // impact is satisfied by that property under any group nest.
    let mut literal_fields: BTreeMap<Assignment, bool> = BTreeMap::new();
    for term in vocabulary.literal_impacts() {
        let Some(assignment) = term.target_assignment() else {
            continue;
        };
        let filled = annotations.iter().any(|a| term.scope_matches(&a.assignment));
        *literal_fields.entry(assignment).or_default() |= filled;
    }
    for (assignment, filled) in literal_fields {
        if filled || schema.get(&assignment).is_some() {
            continue;
        }
        for conclusion in engine.implied_literals(&evidence.subjects, &evidence.keywords, &assignment)
        {
            propose(&assignment, &conclusion);
        }
    }

    effects
}

/// Load a schema tree file
///
/// ## Errors
///
/// `Io`, `Parse`, `UnsupportedSchemaVersion`, `InvalidInput` for a
/// duplicated assignment, and the tree build errors `DuplicateNode`,
/// `UnknownParent` and `CycleDetected`.
pub fn load_schema(path: &Path) -> Result<Schema> {
    let path_label = path.display().to_string();
    log_op_start!("schema_load", path = %path_label);
    let start = std::time::Instant::now();

    let schema = parse_schema_file(path).map_err(|e| {
        log_op_error!(
            "schema_load",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "schema_load",
        duration_ms = start.elapsed().as_millis() as u64,
        assignment_count = schema.len()
    );
    Ok(schema)
}

/// Load a record file
///
/// ## Errors
///
/// `Io`, `Parse` and `UnsupportedSchemaVersion`.
pub fn load_record(path: &Path) -> Result<RecordV0> {
    let path_label = path.display().to_string();
    log_op_start!("record_load", path = %path_label);
    let start = std::time::Instant::now();

    let record = parse_record_file(path).map_err(|e| {
        log_op_error!(
            "record_load",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "record_load",
        duration_ms = start.elapsed().as_millis() as u64,
        annotation_count = record.annotations.len()
    );
    Ok(record)
}
