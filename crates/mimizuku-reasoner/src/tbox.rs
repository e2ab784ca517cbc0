//! Set of general inclusions with entailment checking

use crate::completion::Completion;
use crate::config::ReasonerConfig;
use crate::normalize::NormalizedTbox;
use crate::ReasonerError;
use mimizuku_core::{ConceptExpression, InclusionAxiom};
use std::collections::{BTreeMap, BTreeSet};
use tracing::trace;

/// General EL TBox
#[derive(Debug, Clone)]
pub struct Tbox {
    axioms: Vec<InclusionAxiom>,
    normalized: NormalizedTbox,
    config: ReasonerConfig,
}

impl Tbox {
    pub fn new(config: ReasonerConfig) -> Self {
        Self {
            axioms: Vec::new(),
            normalized: NormalizedTbox::new(),
            config,
        }
    }

    pub fn from_axioms<I>(axioms: I, config: ReasonerConfig) -> Self
    where
        I: IntoIterator<Item = InclusionAxiom>,
    {
        let mut tbox = Self::new(config);
        for axiom in axioms {
            tbox.insert(axiom);
        }
        tbox
    }

    pub fn insert(&mut self, axiom: InclusionAxiom) {
        trace!(axiom = %axiom, "normalizing inclusion");
        self.normalized.add_inclusion(&axiom);
        self.axioms.push(axiom);
    }

    pub fn axioms(&self) -> &[InclusionAxiom] {
        &self.axioms
    }

    pub fn config(&self) -> &ReasonerConfig {
        &self.config
    }

    /// Whether `axiom.left ⊑ axiom.right` follows from this TBox.
    ///
    /// Adds fresh `X ⊑ left` and `right ⊑ Y` to a copy of the normalized
    /// TBox and checks `Y ∈ S(X)`.
    pub fn entails(&self, axiom: &InclusionAxiom) -> Result<bool, ReasonerError> {
        if axiom.right.is_top() {
            return Ok(true);
        }

        let mut query = self.normalized.clone();
        let x = query.signature.fresh();
        query.add_subsumed_by(vec![x], &axiom.left);
        let conjuncts = query.left_conjuncts(&axiom.right);
        let y = query.signature.fresh();
        query.conjunctions.push((conjuncts, y));

        let completion = Completion::saturate(&query, self.config.max_iterations)?;
        Ok(completion.subsumes(x, y))
    }

    /// Named subsumers of every named concept, excluding the concept itself
    pub fn classify(&self) -> Result<BTreeMap<ConceptExpression, BTreeSet<ConceptExpression>>, ReasonerError> {
        let completion = Completion::saturate(&self.normalized, self.config.max_iterations)?;
        let signature = &self.normalized.signature;

        let mut hierarchy = BTreeMap::new();
        for (id, name) in signature.named() {
            let supers: BTreeSet<ConceptExpression> = completion
                .subsumers(id)
                .into_iter()
                .flatten()
                .filter(|&&s| s != id)
                .filter_map(|&s| signature.name(s).cloned())
                .collect();
            hierarchy.insert(name.clone(), supers);
        }
        Ok(hierarchy)
    }

    /// Concept names in order of first appearance
    pub fn concept_names(&self) -> Vec<ConceptExpression> {
        let mut names = Vec::new();
        for axiom in &self.axioms {
            for side in [&axiom.left, &axiom.right] {
                for node in side.iter() {
                    for label in node.labels() {
                        if !names.contains(label) {
                            names.push(label.clone());
                        }
                    }
                }
            }
        }
        names
    }
}

impl Default for Tbox {
    fn default() -> Self {
        Self::new(ReasonerConfig::default())
    }
}
