//! Tests for the mimizuku-learner crate

use mimizuku_core::{
    ConceptExpression, Engine, InclusionAxiom, LeftTerminology, Node, OracleError,
    RightTerminology, Teacher,
};
use mimizuku_learner::{ExactLearner, Learner, LearnerConfig, LearnerError};
use mimizuku_reasoner::ElReasoner;
use mimizuku_teacher::OntologyTeacher;
use serde_json::json;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn expr(value: serde_json::Value) -> Node {
    Node::from_json(&value).unwrap()
}

fn learner_for(target: Vec<InclusionAxiom>) -> Learner<ElReasoner, OntologyTeacher> {
    let teacher = OntologyTeacher::with_signature_concepts(target);
    Learner::new(ElReasoner::new(), teacher)
}

#[test]
fn test_learns_right_terminologies() -> anyhow::Result<()> {
    init_tracing();
    let mut learner = learner_for(vec![
        RightTerminology::new("Woman", Node::concept("Human")).inclusion_axiom(),
        RightTerminology::new("Human", expr(json!({"hasParent": ["Human"]}))).inclusion_axiom(),
    ]);

    let hypothesis = learner.run_learner()?;

    assert_eq!(
        hypothesis,
        vec![
            RightTerminology::new("Human", expr(json!({"hasParent": ["Human"]}))).inclusion_axiom(),
            RightTerminology::new("Woman", Node::concept("Human")).inclusion_axiom(),
        ]
    );
    assert_eq!(learner.stats().rounds, 2);
    assert_eq!(learner.stats().equivalence_queries, 3);
    Ok(())
}

#[test]
fn test_learns_left_terminology() -> anyhow::Result<()> {
    init_tracing();
    let mut learner = learner_for(vec![
        RightTerminology::new("Mother", Node::concept("Parent")).inclusion_axiom(),
        LeftTerminology::new(expr(json!({"hasChild": []})), "Parent").inclusion_axiom(),
    ]);

    let hypothesis = learner.run_learner()?;

    assert_eq!(hypothesis.len(), 2);
    assert!(hypothesis.contains(
        &LeftTerminology::new(expr(json!({"hasChild": []})), "Parent").inclusion_axiom()
    ));
    assert_eq!(learner.teacher().equivalence_query(&hypothesis)?, None);
    Ok(())
}

#[test]
fn test_learns_general_inclusion() -> anyhow::Result<()> {
    init_tracing();
    // Woman ⊓ ∃hasChild.⊤ ⊑ Mother ⊓ Human
    let target = vec![InclusionAxiom::new(
        expr(json!(["Woman", {"hasChild": []}])),
        expr(json!(["Mother", "Human"])),
    )];
    let mut learner = learner_for(target);

    let hypothesis = learner.run_learner()?;

    assert_eq!(learner.stats().rounds, 2);
    assert_eq!(
        hypothesis,
        vec![
            LeftTerminology::new(expr(json!(["Woman", "Mother", {"hasChild": []}])), "Human")
                .inclusion_axiom(),
            LeftTerminology::new(expr(json!(["Woman", {"hasChild": []}])), "Mother").inclusion_axiom(),
        ]
    );
    Ok(())
}

#[test]
fn test_existing_definition_is_refined() -> anyhow::Result<()> {
    init_tracing();
    let mut learner = learner_for(vec![
        RightTerminology::new("Human", Node::concept("Mammal")).inclusion_axiom(),
        RightTerminology::new("Human", expr(json!({"hasParent": ["Human"]}))).inclusion_axiom(),
    ]);

    let hypothesis = learner.run_learner()?;

    assert_eq!(
        hypothesis,
        vec![RightTerminology::new(
            "Human",
            expr(json!(["Mammal", {"hasParent": ["Human", "Mammal"]}]))
        )
        .inclusion_axiom()]
    );
    Ok(())
}

#[test]
fn test_round_limit_from_config() {
    init_tracing();
    let teacher = OntologyTeacher::with_signature_concepts(vec![
        RightTerminology::new("Woman", Node::concept("Human")).inclusion_axiom(),
        RightTerminology::new("Human", expr(json!({"hasParent": ["Human"]}))).inclusion_axiom(),
    ]);
    let config = LearnerConfig::from_json(r#"{"max_rounds": 1}"#).unwrap();
    let mut learner = Learner::with_config(ElReasoner::new(), teacher, config);

    assert_eq!(learner.run_learner(), Err(LearnerError::RoundLimit(1)));
}

#[test]
fn test_non_canonical_counter_example_is_surfaced() {
    init_tracing();
    let axiom = InclusionAxiom::new(
        expr(json!(["Woman", {"hasChild": []}])),
        expr(json!(["Mother", "Human"])),
    );
    let teacher = OntologyTeacher::new(vec![axiom.clone()], vec![ConceptExpression::new("Cat")]);
    let mut learner = Learner::new(ElReasoner::new(), teacher);

    assert_eq!(
        learner.run_learner(),
        Err(LearnerError::NonCanonicalCounterExample(axiom))
    );
}

#[test]
fn test_unsound_hypothesis_is_surfaced() {
    init_tracing();
    let mut learner = learner_for(vec![
        RightTerminology::new("Woman", Node::concept("Human")).inclusion_axiom(),
    ]);
    let wrong = RightTerminology::new("Human", Node::concept("Woman"));
    learner.engine_mut().add_axiom(wrong.clone().into()).unwrap();

    assert_eq!(
        learner.run_learner(),
        Err(LearnerError::Oracle(OracleError::UnsoundHypothesis(
            wrong.inclusion_axiom()
        )))
    );
}

#[test]
fn test_learner_can_be_boxed() -> anyhow::Result<()> {
    init_tracing();
    let engine: Box<dyn Engine> = Box::new(ElReasoner::new());
    let teacher: Box<dyn Teacher> = Box::new(OntologyTeacher::with_signature_concepts(vec![
        RightTerminology::new("Woman", Node::concept("Human")).inclusion_axiom(),
    ]));
    let mut learner = Learner::new(engine, teacher);

    let hypothesis = learner.run_learner()?;
    let (engine, _teacher) = learner.into_parts();

    assert_eq!(hypothesis.len(), 1);
    assert_eq!(engine.hypothesis().len(), 1);
    Ok(())
}
