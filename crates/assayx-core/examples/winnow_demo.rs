//! Winnowing walkthrough
//!
//! Builds a small unit tree and vocabulary, then shows how the restriction
//! on the unit field changes as evidence is added.
//!
//! Run with: cargo run -p assayx-core --example winnow_demo

use assayx_core::model::{Annotation, Assignment, AxiomVocabulary, Evidence, Keyword, Rule, Term};
use assayx_core::tree::{NodeSpec, Schema, SchemaTrees, ValueTree};
use assayx_core::{JustificationTracer, Target, ViolationDetector, WinnowingEngine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let result = Assignment::new("bao:result");
    let unit = Assignment::new("bao:unit");

    let schema: Schema = [
        ValueTree::build(
            result.clone(),
            vec![
                NodeSpec::root("bao:half_max"),
                NodeSpec::child("bao:IC50", "bao:half_max"),
            ],
        )?,
        ValueTree::build(
            unit.clone(),
            vec![
                NodeSpec::root("bao:concentration"),
                NodeSpec::child("bao:uM", "bao:concentration"),
                NodeSpec::child("bao:nM", "bao:concentration"),
                NodeSpec::root("bao:percent"),
            ],
        )?,
    ]
    .into_iter()
    .collect();

    let vocabulary = AxiomVocabulary::new(vec![
        Rule::limit(
            vec![Term::branch("bao:half_max").scoped("bao:result")],
            vec![Term::branch("bao:concentration").scoped("bao:unit")],
        ),
        Rule::limit(vec![], vec![Term::literal("not applicable").scoped("bao:unit")])
            .with_keyword(Keyword::new("qualitative"))
            .exclusive(),
    ])?;
    println!("Vocabulary: {:?}\n", vocabulary.stats());

    let engine = WinnowingEngine::new(&vocabulary);
    let unit_tree = schema.tree_for(&unit).ok_or("unit tree missing")?;

    println!("1. Empty record");
    let empty = Evidence::default();
    println!(
        "   unit: {:?}\n",
        engine.winnow_branch(&empty.subjects, &empty.keywords, unit_tree)
    );

    println!("2. Result annotated as IC50");
    let annotations = vec![
        Annotation::uri(result.clone(), "bao:IC50"),
        Annotation::uri(unit.clone(), "bao:percent"),
    ];
    let evidence = Evidence::from_record(&annotations, None, &schema);
    let rest = evidence.without(1);
    println!(
        "   unit: {:?}",
        engine.winnow_branch(&rest.subjects, &rest.keywords, unit_tree)
    );

    let detector = ViolationDetector::new(&vocabulary);
    let tracer = JustificationTracer::new(&vocabulary);
    for violation in detector.violating_axioms(&evidence, &annotations, &schema) {
        let triggers = tracer.find_triggers(
            &evidence,
            &annotations,
            &schema,
            &Target::Violation {
                annotation_index: violation.annotation_index,
            },
        );
        println!(
            "   ✗ {} = {:?} ({:?}, triggered by {:?})\n",
            violation.annotation.assignment,
            violation.annotation.value_uri,
            violation.cause,
            triggers
        );
    }

    println!("3. Same record, described as a qualitative screen");
    let evidence = Evidence::from_record(&annotations[..1], Some("Qualitative screen"), &schema);
    println!(
        "   unit: {:?}",
        engine.winnow_branch(&evidence.subjects, &evidence.keywords, unit_tree)
    );

    Ok(())
}
