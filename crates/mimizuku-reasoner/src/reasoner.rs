//! Hypothesis engine
//!
//! Keeps the learner's hypothesis as terminologies indexed by their defining
//! concept and answers entailment queries over it.

use crate::config::ReasonerConfig;
use crate::tbox::Tbox;
use mimizuku_core::{
    ConceptExpression, Engine, InclusionAxiom, LeftTerminology, Node, OracleError,
    RightTerminology, Terminology,
};
use std::collections::BTreeMap;
use tracing::debug;

/// Terminologies indexed by defining concept
#[derive(Debug, Clone, Default)]
struct OntologyMap {
    /// `C ⊑ A`, keyed by `A`
    left_map: BTreeMap<ConceptExpression, Vec<LeftTerminology>>,
    /// `A ⊑ C`, keyed by `A`
    right_map: BTreeMap<ConceptExpression, RightTerminology>,
}

impl OntologyMap {
    fn add_right(&mut self, axiom: RightTerminology) {
        match self.right_map.get_mut(&axiom.left) {
            // the new definition already says everything the old one did
            Some(existing) if axiom.right.implies(&existing.right) => {
                *existing = axiom;
            }
            Some(existing) => {
                for label in axiom.right.labels() {
                    existing.right.add_label(label.clone());
                }
                for edge in axiom.right.edges() {
                    if !existing.right.edges().contains(edge) {
                        existing.right.push_edge(edge.clone());
                    }
                }
            }
            None => {
                self.right_map.insert(axiom.left.clone(), axiom);
            }
        }
    }

    fn add_left(&mut self, axiom: LeftTerminology) {
        let definitions = self.left_map.entry(axiom.right.clone()).or_default();
        if definitions.iter().any(|d| d.left == axiom.left) {
            return;
        }
        // `C ⊑ A` is superseded by a new `D ⊑ A` whenever `C ⊑ D`
        definitions.retain(|d| !d.left.implies(&axiom.left));
        definitions.push(axiom);
    }

    fn to_list(&self) -> Vec<Terminology> {
        let mut list: Vec<Terminology> = self
            .left_map
            .values()
            .flatten()
            .cloned()
            .map(Terminology::Left)
            .collect();
        list.extend(self.right_map.values().cloned().map(Terminology::Right));
        list
    }
}

/// EL reasoner holding the learner's hypothesis
#[derive(Debug, Clone)]
pub struct ElReasoner {
    ontology: OntologyMap,
    tbox: Tbox,
    config: ReasonerConfig,
}

impl ElReasoner {
    pub fn new() -> Self {
        Self::with_config(ReasonerConfig::default())
    }

    pub fn with_config(config: ReasonerConfig) -> Self {
        Self {
            ontology: OntologyMap::default(),
            tbox: Tbox::new(config.clone()),
            config,
        }
    }

    /// Hypothesis as a TBox of general inclusions
    pub fn tbox(&self) -> &Tbox {
        &self.tbox
    }

    pub fn len(&self) -> usize {
        self.ontology.left_map.values().map(Vec::len).sum::<usize>() + self.ontology.right_map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn rebuild(&mut self) {
        let axioms = self.ontology.to_list().into_iter().map(|t| t.inclusion_axiom());
        self.tbox = Tbox::from_axioms(axioms, self.config.clone());
    }
}

impl Default for ElReasoner {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for ElReasoner {
    fn entails(&self, axiom: &InclusionAxiom) -> Result<bool, OracleError> {
        Ok(self.tbox.entails(axiom)?)
    }

    /// Right definitions of the same concept are merged, left definitions
    /// are kept side by side. A left terminology with an atomic left side is
    /// stored as the equivalent right terminology.
    fn add_axiom(&mut self, axiom: Terminology) -> Result<(), OracleError> {
        debug!(axiom = %axiom, "adding axiom to hypothesis");
        match axiom {
            Terminology::Left(left) => match left.left.as_concept().cloned() {
                Some(concept) => {
                    let right = RightTerminology::new(concept, Node::concept(left.right));
                    self.ontology.add_right(right);
                }
                None => self.ontology.add_left(left),
            },
            Terminology::Right(right) => self.ontology.add_right(right),
        }
        self.rebuild();
        Ok(())
    }

    fn hypothesis(&self) -> Vec<Terminology> {
        self.ontology.to_list()
    }

    fn right_from_hypothesis(&self, concept: &ConceptExpression) -> Option<RightTerminology> {
        self.ontology.right_map.get(concept).cloned()
    }
}
