//! # Mimizuku Teacher
//!
//! A [`Teacher`] that knows a target ontology of general inclusions and
//! answers queries about it with the EL reasoner.

use mimizuku_core::{ConceptExpression, InclusionAxiom, OracleError, Teacher, Terminology};
use mimizuku_reasoner::{ReasonerConfig, Tbox};
use tracing::{debug, info};

/// Teacher backed by a target ontology
#[derive(Debug, Clone)]
pub struct OntologyTeacher {
    target: Tbox,
    concepts: Vec<ConceptExpression>,
}

impl OntologyTeacher {
    /// Target axioms with an explicit vocabulary
    pub fn new(target: Vec<InclusionAxiom>, concepts: Vec<ConceptExpression>) -> Self {
        Self::with_config(target, concepts, ReasonerConfig::default())
    }

    pub fn with_config(
        target: Vec<InclusionAxiom>,
        concepts: Vec<ConceptExpression>,
        config: ReasonerConfig,
    ) -> Self {
        Self {
            target: Tbox::from_axioms(target, config),
            concepts,
        }
    }

    /// Target axioms with the vocabulary taken from their labels
    pub fn with_signature_concepts(target: Vec<InclusionAxiom>) -> Self {
        let target = Tbox::from_axioms(target, ReasonerConfig::default());
        let concepts = target.concept_names();
        Self { target, concepts }
    }

    pub fn from_terminologies<I>(target: I, concepts: Vec<ConceptExpression>) -> Self
    where
        I: IntoIterator<Item = Terminology>,
    {
        let axioms = target.into_iter().map(|t| t.inclusion_axiom()).collect();
        Self::new(axioms, concepts)
    }

    pub fn target(&self) -> &[InclusionAxiom] {
        self.target.axioms()
    }
}

impl Teacher for OntologyTeacher {
    fn membership_query(&self, axiom: &InclusionAxiom) -> Result<bool, OracleError> {
        let holds = self.target.entails(axiom)?;
        debug!(axiom = %axiom, holds, "membership query");
        Ok(holds)
    }

    fn equivalence_query(
        &self,
        hypothesis: &[InclusionAxiom],
    ) -> Result<Option<InclusionAxiom>, OracleError> {
        for axiom in hypothesis {
            if !self.target.entails(axiom)? {
                return Err(OracleError::UnsoundHypothesis(axiom.clone()));
            }
        }

        let learned = Tbox::from_axioms(hypothesis.iter().cloned(), self.target.config().clone());
        for axiom in self.target.axioms() {
            if !learned.entails(axiom)? {
                info!(counter_example = %axiom, "hypothesis is not equivalent");
                return Ok(Some(axiom.clone()));
            }
        }

        info!(axioms = hypothesis.len(), "hypothesis is equivalent to the target");
        Ok(None)
    }

    fn concepts(&self) -> Vec<ConceptExpression> {
        self.concepts.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mimizuku_core::{LeftTerminology, Node, RightTerminology};
    use serde_json::json;

    fn expr(value: serde_json::Value) -> Node {
        Node::from_json(&value).unwrap()
    }

    fn family() -> OntologyTeacher {
        OntologyTeacher::from_terminologies(
            vec![
                RightTerminology::new("Mother", Node::concept("Parent")).into(),
                LeftTerminology::new(expr(json!([{"eats": []}])), "Animal").into(),
            ],
            vec![
                ConceptExpression::new("Mother"),
                ConceptExpression::new("Parent"),
                ConceptExpression::new("Animal"),
            ],
        )
    }

    #[test]
    fn test_membership_query() {
        let teacher = family();

        let mother_parent = RightTerminology::new("Mother", Node::concept("Parent")).inclusion_axiom();
        assert!(teacher.membership_query(&mother_parent).unwrap());

        let eats_meat = LeftTerminology::new(expr(json!([{"eats": ["Meat"]}])), "Animal").inclusion_axiom();
        assert!(teacher.membership_query(&eats_meat).unwrap());

        let parent_mother = RightTerminology::new("Parent", Node::concept("Mother")).inclusion_axiom();
        assert!(!teacher.membership_query(&parent_mother).unwrap());
    }

    #[test]
    fn test_general_membership_query() {
        let teacher = family();
        // Mother ⊓ ∃eats.⊤ ⊑ Parent ⊓ Animal
        let axiom = InclusionAxiom::new(
            expr(json!(["Mother", {"eats": []}])),
            expr(json!(["Parent", "Animal"])),
        );
        assert!(teacher.membership_query(&axiom).unwrap());
    }

    #[test]
    fn test_equivalence_query_returns_first_missing_axiom() {
        let teacher = family();

        let counter_example = teacher.equivalence_query(&[]).unwrap().unwrap();
        assert_eq!(counter_example, teacher.target()[0]);

        let partial = vec![teacher.target()[0].clone()];
        let counter_example = teacher.equivalence_query(&partial).unwrap().unwrap();
        assert_eq!(counter_example, teacher.target()[1]);

        let complete = teacher.target().to_vec();
        assert_eq!(teacher.equivalence_query(&complete).unwrap(), None);
    }

    #[test]
    fn test_equivalence_query_accepts_equivalent_restatement() {
        let teacher = OntologyTeacher::new(
            vec![RightTerminology::new("Human", expr(json!([{"hasParent": ["Human"]}]))).inclusion_axiom()],
            vec![ConceptExpression::new("Human")],
        );
        // Human ⊑ ∃hasParent.Human ⊓ ∃hasParent.⊤
        let hypothesis = vec![RightTerminology::new(
            "Human",
            expr(json!([{"hasParent": ["Human"]}, {"hasParent": []}])),
        )
        .inclusion_axiom()];
        assert_eq!(teacher.equivalence_query(&hypothesis).unwrap(), None);
    }

    #[test]
    fn test_unsound_hypothesis_is_rejected() {
        let teacher = family();
        let wrong = RightTerminology::new("Parent", Node::concept("Mother")).inclusion_axiom();

        let err = teacher.equivalence_query(&[wrong.clone()]).unwrap_err();
        assert_eq!(err, OracleError::UnsoundHypothesis(wrong));
    }

    #[test]
    fn test_signature_concepts() {
        let teacher = OntologyTeacher::with_signature_concepts(vec![
            RightTerminology::new("Woman", Node::concept("Human")).inclusion_axiom(),
            RightTerminology::new("Human", expr(json!([{"hasParent": ["Human"]}]))).inclusion_axiom(),
        ]);
        assert_eq!(
            teacher.concepts(),
            vec![ConceptExpression::new("Woman"), ConceptExpression::new("Human")]
        );
    }
}
