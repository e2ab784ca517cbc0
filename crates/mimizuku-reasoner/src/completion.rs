//! 完備化アルゴリズム
//!
//! Saturates a normalized TBox with the EL completion rules until fixpoint:
//!
//! - CR1/CR2: `A1..An ∈ S(X)` and `A1 ⊓ … ⊓ An ⊑ B` → `B ∈ S(X)`
//! - CR3: `A ∈ S(X)` and `A ⊑ ∃r.B` → `(X, B) ∈ R(r)`
//! - CR4: `(X, Y) ∈ R(r)`, `A ∈ S(Y)` and `∃r.A ⊑ B` → `B ∈ S(X)`

use crate::normalize::{ConceptId, NormalizedTbox, TOP};
use crate::ReasonerError;
use std::collections::HashSet;
use tracing::debug;

/// Subsumer sets and role links of a saturated TBox
#[derive(Debug, Clone)]
pub struct Completion {
    subsumers: Vec<HashSet<ConceptId>>,
    links: Vec<HashSet<(ConceptId, ConceptId)>>,
    iterations: usize,
}

impl Completion {
    pub fn saturate(tbox: &NormalizedTbox, max_iterations: usize) -> Result<Self, ReasonerError> {
        let concept_count = tbox.signature.concept_count();
        let mut completion = Self {
            subsumers: (0..concept_count)
                .map(|id| [id, TOP].into_iter().collect())
                .collect(),
            links: vec![HashSet::new(); tbox.signature.role_count()],
            iterations: 0,
        };

        let mut changed = true;
        while changed {
            if completion.iterations >= max_iterations {
                return Err(ReasonerError::IterationLimit(max_iterations));
            }
            completion.iterations += 1;
            changed = false;

            for x in 0..concept_count {
                changed |= completion.apply_conjunction_rule(tbox, x);
                changed |= completion.apply_existential_rule(tbox, x);
            }
            changed |= completion.apply_restriction_rule(tbox);
        }

        debug!(
            concepts = concept_count,
            axioms = tbox.len(),
            iterations = completion.iterations,
            "completion reached fixpoint"
        );
        Ok(completion)
    }

    /// CR1/CR2
    fn apply_conjunction_rule(&mut self, tbox: &NormalizedTbox, x: ConceptId) -> bool {
        let mut changed = false;
        for (lhs, b) in &tbox.conjunctions {
            let holds = lhs.iter().all(|a| self.subsumers[x].contains(a));
            if holds && self.subsumers[x].insert(*b) {
                changed = true;
            }
        }
        changed
    }

    /// CR3
    fn apply_existential_rule(&mut self, tbox: &NormalizedTbox, x: ConceptId) -> bool {
        let mut changed = false;
        for &(a, r, b) in &tbox.existentials_right {
            if self.subsumers[x].contains(&a) && self.links[r].insert((x, b)) {
                changed = true;
            }
        }
        changed
    }

    /// CR4
    fn apply_restriction_rule(&mut self, tbox: &NormalizedTbox) -> bool {
        let mut changed = false;
        for &(r, a, b) in &tbox.existentials_left {
            let sources: Vec<ConceptId> = self.links[r]
                .iter()
                .filter(|(_, y)| self.subsumers[*y].contains(&a))
                .map(|(x, _)| *x)
                .collect();
            for x in sources {
                if self.subsumers[x].insert(b) {
                    changed = true;
                }
            }
        }
        changed
    }

    /// `x ⊑ y` holds in the saturated TBox
    pub fn subsumes(&self, x: ConceptId, y: ConceptId) -> bool {
        self.subsumers
            .get(x)
            .map(|s| s.contains(&y))
            .unwrap_or(false)
    }

    pub fn subsumers(&self, x: ConceptId) -> Option<&HashSet<ConceptId>> {
        self.subsumers.get(x)
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mimizuku_core::{ConceptExpression, LeftTerminology, Node, RightTerminology};
    use serde_json::json;

    fn expr(value: serde_json::Value) -> Node {
        Node::from_json(&value).unwrap()
    }

    #[test]
    fn test_transitive_subsumption() {
        let mut tbox = NormalizedTbox::new();
        tbox.add_inclusion(&RightTerminology::new("Student", Node::concept("Person")).inclusion_axiom());
        tbox.add_inclusion(&RightTerminology::new("Person", Node::concept("Animal")).inclusion_axiom());

        let completion = Completion::saturate(&tbox, 100).unwrap();
        let student = tbox.signature.lookup(&ConceptExpression::new("Student")).unwrap();
        let animal = tbox.signature.lookup(&ConceptExpression::new("Animal")).unwrap();

        assert!(completion.subsumes(student, animal));
        assert!(!completion.subsumes(animal, student));
        assert!(completion.subsumes(animal, TOP));
    }

    #[test]
    fn test_existential_propagation() {
        // Mother ⊑ ∃parentOf.Person, ∃parentOf.Person ⊑ Parent
        let mut tbox = NormalizedTbox::new();
        tbox.add_inclusion(
            &RightTerminology::new("Mother", expr(json!([{"parentOf": ["Person"]}]))).inclusion_axiom(),
        );
        tbox.add_inclusion(
            &LeftTerminology::new(expr(json!([{"parentOf": ["Person"]}])), "Parent").inclusion_axiom(),
        );

        let completion = Completion::saturate(&tbox, 100).unwrap();
        let mother = tbox.signature.lookup(&ConceptExpression::new("Mother")).unwrap();
        let parent = tbox.signature.lookup(&ConceptExpression::new("Parent")).unwrap();

        assert!(completion.subsumes(mother, parent));
    }

    #[test]
    fn test_iteration_limit() {
        let mut tbox = NormalizedTbox::new();
        tbox.add_inclusion(&RightTerminology::new("A", Node::concept("B")).inclusion_axiom());

        let result = Completion::saturate(&tbox, 1);
        assert_eq!(result.unwrap_err(), ReasonerError::IterationLimit(1));
    }
}
