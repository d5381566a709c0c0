mod common;

use common::{field, sample_schema, uris, vocabulary, ASSAY_TYPE, RESULT_NOTE, UNIT};
use assayx_core::{
    Annotation, Conclusion, Evidence, Keyword, KeywordContent, Restriction, Rule, SchemaTrees,
    SubjectContent, Term, WinnowingEngine,
};

fn record(annotations: &[Annotation]) -> Vec<Annotation> {
    annotations.to_vec()
}

// ===== DEFAULTS =====

#[test]
fn test_nothing_fires_is_unrestricted() {
    let schema = sample_schema();
    let vocab = vocabulary(vec![Rule::limit(
        vec![Term::uri("A")],
        vec![Term::branch("B")],
    )]);
    let engine = WinnowingEngine::new(&vocab);

    let annotations = record(&[Annotation::uri(field(ASSAY_TYPE), "Q")]);
    let evidence = Evidence::from_record(&annotations, None, &schema);
    let unit_tree = schema.tree_for(&field(UNIT)).unwrap();

    let restriction = engine.winnow_branch(&evidence.subjects, &evidence.keywords, unit_tree);
    assert_eq!(restriction, Restriction::Unrestricted);
    assert_eq!(restriction.filter_uri(), None);
}

#[test]
fn test_empty_evidence_is_unrestricted_for_every_tree() {
    let schema = sample_schema();
    let vocab = vocabulary(vec![
        Rule::limit(vec![Term::uri("A")], vec![Term::branch("B")]),
        Rule::limit(vec![], vec![Term::uri("Z")]).with_keyword(Keyword::new("anything")),
    ]);
    let engine = WinnowingEngine::new(&vocab);

    for assignment in schema.assignments() {
        let tree = schema.tree_for(assignment).unwrap();
        assert!(engine.winnow_branch(&[], &[], tree).is_unrestricted());
    }
}

// ===== BRANCH RESTRICTION =====

#[test]
fn test_branch_impact_covers_descendants_only() {
    let schema = sample_schema();
    let vocab = vocabulary(vec![Rule::limit(
        vec![Term::uri("A")],
        vec![Term::branch("B")],
    )]);
    let engine = WinnowingEngine::new(&vocab);

    let annotations = record(&[Annotation::uri(field(ASSAY_TYPE), "A")]);
    let evidence = Evidence::from_record(&annotations, None, &schema);
    let unit_tree = schema.tree_for(&field(UNIT)).unwrap();

    let allowed = engine
        .winnow_branch(&evidence.subjects, &evidence.keywords, unit_tree)
        .filter_uri()
        .unwrap();
    assert_eq!(allowed, uris(&["B", "B1", "B2"]));
    assert!(!allowed.contains("C"));
}

#[test]
fn test_exact_subject_does_not_match_descendant() {
    let schema = sample_schema();
    let vocab = vocabulary(vec![Rule::limit(
        vec![Term::uri("A")],
        vec![Term::branch("B")],
    )]);
    let engine = WinnowingEngine::new(&vocab);

    let annotations = record(&[Annotation::uri(field(ASSAY_TYPE), "A1")]);
    let evidence = Evidence::from_record(&annotations, None, &schema);
    let unit_tree = schema.tree_for(&field(UNIT)).unwrap();

    assert!(engine
        .winnow_branch(&evidence.subjects, &evidence.keywords, unit_tree)
        .is_unrestricted());
}

#[test]
fn test_branch_subject_matches_descendant_evidence() {
    let schema = sample_schema();
    let vocab = vocabulary(vec![Rule::limit(
        vec![Term::branch("A")],
        vec![Term::uri("C")],
    )]);
    let engine = WinnowingEngine::new(&vocab);

    let annotations = record(&[Annotation::uri(field(ASSAY_TYPE), "A2")]);
    let evidence = Evidence::from_record(&annotations, None, &schema);
    let unit_tree = schema.tree_for(&field(UNIT)).unwrap();

    assert_eq!(
        engine
            .winnow_branch(&evidence.subjects, &evidence.keywords, unit_tree)
            .filter_uri(),
        Some(uris(&["C"]))
    );
}

// ===== KEYWORD EQUIVALENCE =====

#[test]
fn test_keyword_antecedent_matches_semantic_equivalent() {
    let schema = sample_schema();
    let unit_tree = schema.tree_for(&field(UNIT)).unwrap();

    let semantic = vocabulary(vec![Rule::limit(
        vec![Term::uri("A")],
        vec![Term::branch("B")],
    )]);
    let subjects = vec![SubjectContent::new("A", field(ASSAY_TYPE))];
    let by_term = WinnowingEngine::new(&semantic).winnow_branch(&subjects, &[], unit_tree);

    let textual = vocabulary(vec![Rule::limit(vec![], vec![Term::branch("B")])
        .with_keyword(Keyword::new("A-text").scoped("fieldX"))]);
    let keywords = vec![KeywordContent::field("a-TEXT", "fieldX")];
    let by_keyword = WinnowingEngine::new(&textual).winnow_branch(&[], &keywords, unit_tree);

    assert_eq!(by_term.filter_uri(), by_keyword.filter_uri());
    assert_eq!(by_keyword.filter_uri(), Some(uris(&["B", "B1", "B2"])));
}

#[test]
fn test_scoped_keyword_ignores_other_fields() {
    let schema = sample_schema();
    let unit_tree = schema.tree_for(&field(UNIT)).unwrap();
    let vocab = vocabulary(vec![Rule::limit(vec![], vec![Term::branch("B")])
        .with_keyword(Keyword::new("A-text").scoped("fieldX"))]);
    let engine = WinnowingEngine::new(&vocab);

    let elsewhere = vec![
        KeywordContent::field("A-text", "fieldY"),
        KeywordContent::body("A-text in the description"),
    ];
    assert!(engine.winnow_branch(&[], &elsewhere, unit_tree).is_unrestricted());
}

// ===== SCOPED EXACT MATCH =====

#[test]
fn test_scoped_rule_implies_single_literal() {
    let schema = sample_schema();
    let vocab = vocabulary(vec![Rule::limit(
        vec![Term::uri("Q").scoped(ASSAY_TYPE)],
        vec![Term::literal("not applicable").scoped(UNIT)],
    )]);
    let engine = WinnowingEngine::new(&vocab);

    let annotations = record(&[Annotation::uri(field(ASSAY_TYPE), "Q")]);
    let evidence = Evidence::from_record(&annotations, None, &schema);
    let unit_tree = schema.tree_for(&field(UNIT)).unwrap();

    let restriction = engine.winnow_branch(&evidence.subjects, &evidence.keywords, unit_tree);
    let members = restriction.members().unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(
        restriction.single(),
        Some(&Conclusion::literal("not applicable"))
    );
    assert_eq!(restriction.filter_uri(), Some(uris(&[])));
}

#[test]
fn test_scoped_subject_ignores_value_from_other_field() {
    let schema = sample_schema();
    let vocab = vocabulary(vec![Rule::limit(
        vec![Term::uri("Q").scoped(ASSAY_TYPE)],
        vec![Term::uri("Z")],
    )]);
    let engine = WinnowingEngine::new(&vocab);

    let subjects = vec![SubjectContent::new("Q", field("bao:other"))];
    let unit_tree = schema.tree_for(&field(UNIT)).unwrap();
    assert!(engine.winnow_branch(&subjects, &[], unit_tree).is_unrestricted());
}

#[test]
fn test_implied_literals_for_free_text_field() {
    let vocab = vocabulary(vec![
        Rule::limit(
            vec![Term::uri("Q")],
            vec![Term::literal("not applicable").scoped(RESULT_NOTE)],
        ),
        Rule::limit(vec![Term::uri("Q")], vec![Term::uri("Z").scoped(UNIT)]),
    ]);
    let engine = WinnowingEngine::new(&vocab);
    let subjects = vec![SubjectContent::new("Q", field(ASSAY_TYPE))];

    let literals = engine.implied_literals(&subjects, &[], &field(RESULT_NOTE));
    assert_eq!(
        literals.into_iter().collect::<Vec<_>>(),
        vec![Conclusion::literal("not applicable")]
    );
    assert!(engine.implied_literals(&subjects, &[], &field(UNIT)).is_empty());
    assert!(matches!(
        engine.winnow_assignment(&subjects, &[], &field(RESULT_NOTE), None),
        Restriction::RestrictedTo(_)
    ));
}

// ===== EXCLUSIVITY =====

#[test]
fn test_exclusive_rule_overrides_general_rules() {
    let schema = sample_schema();
    let unit_tree = schema.tree_for(&field(UNIT)).unwrap();
    let general = vec![
        Rule::limit(vec![Term::uri("A")], vec![Term::branch("X")]),
        Rule::limit(vec![Term::uri("A")], vec![Term::branch("Y")]),
    ];
    let annotations = record(&[Annotation::uri(field(ASSAY_TYPE), "A")]);
    let evidence = Evidence::from_record(&annotations, Some("with Z-specific detail"), &schema);

    let vocab = vocabulary(general.clone());
    let before = WinnowingEngine::new(&vocab).winnow_branch(
        &evidence.subjects,
        &evidence.keywords,
        unit_tree,
    );
    assert_eq!(before.filter_uri(), Some(uris(&["X", "X1", "Y"])));

    let mut with_exclusive = general;
    with_exclusive.push(
        Rule::limit(vec![Term::uri("A")], vec![Term::uri("Z")])
            .with_keyword(Keyword::new("z-specific"))
            .exclusive(),
    );
    let vocab = vocabulary(with_exclusive);
    let after = WinnowingEngine::new(&vocab).winnow_branch(
        &evidence.subjects,
        &evidence.keywords,
        unit_tree,
    );
    assert_eq!(after.filter_uri(), Some(uris(&["Z"])));
}

#[test]
fn test_multiple_exclusive_rules_take_union() {
    let schema = sample_schema();
    let unit_tree = schema.tree_for(&field(UNIT)).unwrap();
    let vocab = vocabulary(vec![
        Rule::limit(vec![Term::uri("A")], vec![Term::branch("X")]),
        Rule::limit(vec![Term::uri("A")], vec![Term::uri("Y")]).exclusive(),
        Rule::limit(vec![Term::uri("A")], vec![Term::uri("Z")]).exclusive(),
    ]);
    let subjects = vec![SubjectContent::new("A", field(ASSAY_TYPE))];

    let restriction = WinnowingEngine::new(&vocab).winnow_branch(&subjects, &[], unit_tree);
    assert_eq!(restriction.filter_uri(), Some(uris(&["Y", "Z"])));
}

#[test]
fn test_exclusive_rule_for_other_field_does_not_suppress() {
    let schema = sample_schema();
    let unit_tree = schema.tree_for(&field(UNIT)).unwrap();
    let vocab = vocabulary(vec![
        Rule::limit(vec![Term::uri("A")], vec![Term::branch("B")]),
        Rule::limit(vec![Term::uri("A")], vec![Term::uri("Q").scoped(ASSAY_TYPE)]).exclusive(),
    ]);
    let subjects = vec![SubjectContent::new("A", field(ASSAY_TYPE))];

    let restriction = WinnowingEngine::new(&vocab).winnow_branch(&subjects, &[], unit_tree);
    assert_eq!(restriction.filter_uri(), Some(uris(&["B", "B1", "B2"])));
}

// ===== STALE REFERENCES =====

#[test]
fn test_impact_absent_from_tree_contributes_nothing() {
    let schema = sample_schema();
    let unit_tree = schema.tree_for(&field(UNIT)).unwrap();
    let vocab = vocabulary(vec![
        Rule::limit(vec![Term::uri("A")], vec![Term::branch("bao:retired")]),
        Rule::limit(vec![Term::uri("A")], vec![Term::uri("C"), Term::uri("bao:gone")]),
    ]);
    let subjects = vec![SubjectContent::new("A", field(ASSAY_TYPE))];

    let restriction = WinnowingEngine::new(&vocab).winnow_branch(&subjects, &[], unit_tree);
    assert_eq!(restriction.filter_uri(), Some(uris(&["C"])));
}
