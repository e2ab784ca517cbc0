//! Oracle contracts consumed by the learner
//!
//! The [`Engine`] holds the learner's hypothesis and answers entailment
//! questions about it. The [`Teacher`] knows the hidden target ontology.
//! Terminology arguments are passed through their lossless
//! `inclusion_axiom()` conversion.

use crate::concept::ConceptExpression;
use crate::terminology::{InclusionAxiom, RightTerminology, Terminology};
use thiserror::Error;

/// Oracle contract violations and collaborator failures
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OracleError {
    #[error("Hypothesis axiom not entailed by the target: {0}")]
    UnsoundHypothesis(InclusionAxiom),

    #[error("Reasoning error: {0}")]
    ReasoningError(String),
}

/// Reasoner over the learner's hypothesis
pub trait Engine {
    /// Whether `axiom` follows from the current hypothesis
    fn entails(&self, axiom: &InclusionAxiom) -> Result<bool, OracleError>;

    /// Incorporate `axiom`, indexed by its defining concept
    fn add_axiom(&mut self, axiom: Terminology) -> Result<(), OracleError>;

    /// Owned copy of the hypothesis
    fn hypothesis(&self) -> Vec<Terminology>;

    /// Owned copy of the right definition of `concept`, if any
    fn right_from_hypothesis(&self, concept: &ConceptExpression) -> Option<RightTerminology>;
}

/// Holder of the hidden target ontology
pub trait Teacher {
    /// Whether `axiom` holds in the target
    fn membership_query(&self, axiom: &InclusionAxiom) -> Result<bool, OracleError>;

    /// `None` when `hypothesis` is equivalent to the target, a counterexample otherwise
    fn equivalence_query(
        &self,
        hypothesis: &[InclusionAxiom],
    ) -> Result<Option<InclusionAxiom>, OracleError>;

    /// Vocabulary the learner may use to build candidate terminologies
    fn concepts(&self) -> Vec<ConceptExpression>;
}

impl<E: Engine + ?Sized> Engine for Box<E> {
    fn entails(&self, axiom: &InclusionAxiom) -> Result<bool, OracleError> {
        (**self).entails(axiom)
    }

    fn add_axiom(&mut self, axiom: Terminology) -> Result<(), OracleError> {
        (**self).add_axiom(axiom)
    }

    fn hypothesis(&self) -> Vec<Terminology> {
        (**self).hypothesis()
    }

    fn right_from_hypothesis(&self, concept: &ConceptExpression) -> Option<RightTerminology> {
        (**self).right_from_hypothesis(concept)
    }
}

impl<T: Teacher + ?Sized> Teacher for Box<T> {
    fn membership_query(&self, axiom: &InclusionAxiom) -> Result<bool, OracleError> {
        (**self).membership_query(axiom)
    }

    fn equivalence_query(
        &self,
        hypothesis: &[InclusionAxiom],
    ) -> Result<Option<InclusionAxiom>, OracleError> {
        (**self).equivalence_query(hypothesis)
    }

    fn concepts(&self) -> Vec<ConceptExpression> {
        (**self).concepts()
    }
}
