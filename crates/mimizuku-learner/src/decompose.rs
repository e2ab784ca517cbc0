//! Decomposition: shrink a counterexample to a smaller one that is still
//! true in the target and not yet entailed by the hypothesis.

use crate::learner::{node_at, node_at_mut, Learner};
use crate::LearnerError;
use mimizuku_core::{
    ConceptExpression, Engine, InclusionAxiom, LeftTerminology, Node, RightTerminology, Teacher,
    Traversal,
};
use tracing::debug;

impl<E: Engine, T: Teacher> Learner<E, T> {
    /// For every labelled node `n` and edge `e` of `n`, `c ⊑ ∃e` with `c` a
    /// label of `n` is tested against the target. Edges the hypothesis
    /// already derives from `c` are dropped; an edge it does not derive
    /// becomes the new, smaller counterexample.
    pub fn decompose_right(
        &mut self,
        mut axiom: RightTerminology,
    ) -> Result<RightTerminology, LearnerError> {
        let mut cursor = Traversal::new();
        while let Some(path) = cursor.advance(&axiom.right) {
            let labels = node_at(&axiom.right, &path)?.labels().to_vec();
            for label in labels {
                if path.is_root() && label == axiom.left {
                    continue;
                }

                let edge_count = node_at(&axiom.right, &path)?.edges().len();
                for i in (0..edge_count).rev() {
                    let edge = node_at(&axiom.right, &path)?.edges()[i].clone();
                    let candidate = RightTerminology::new(label.clone(), Node::new(Vec::new(), vec![edge]));
                    let inclusion = candidate.inclusion_axiom();

                    if !self.membership(&inclusion)? {
                        continue;
                    }
                    if self.entails(&inclusion)? {
                        debug!(path = %path, edge = i, "dropping derivable edge");
                        node_at_mut(&mut axiom.right, &path)?.remove_edge(i);
                    } else {
                        debug!(candidate = %candidate, "decomposing into smaller counterexample");
                        return self.decompose_right(candidate);
                    }
                }
            }
        }
        Ok(axiom)
    }

    /// Sub-nodes that already imply a known concept become the new
    /// counterexample. Otherwise each edge is dropped when the remaining
    /// left side still implies some concept the hypothesis misses.
    pub fn decompose_left(
        &mut self,
        mut axiom: LeftTerminology,
    ) -> Result<LeftTerminology, LearnerError> {
        let concepts = self.concepts();
        let mut cursor = Traversal::new();

        while let Some(path) = cursor.advance(&axiom.left) {
            if !path.is_root() {
                let sub_node = node_at(&axiom.left, &path)?.clone();
                for concept in &concepts {
                    let candidate = LeftTerminology::new(sub_node.clone(), concept.clone());
                    if self.is_counter_example(&candidate.inclusion_axiom())? {
                        debug!(candidate = %candidate, "decomposing into smaller counterexample");
                        return self.decompose_left(candidate);
                    }
                }
            }

            let mut i = 0;
            while i < node_at(&axiom.left, &path)?.edges().len() {
                let removed = node_at_mut(&mut axiom.left, &path)?.edges_mut().remove(i);
                match self.implied_concept(&axiom.left, &concepts)? {
                    Some(concept) => {
                        debug!(path = %path, edge = i, concept = %concept, "dropping edge");
                        axiom.right = concept;
                    }
                    None => {
                        node_at_mut(&mut axiom.left, &path)?.edges_mut().insert(i, removed);
                        i += 1;
                    }
                }
            }
        }
        Ok(axiom)
    }

    /// First concept `c` making `left ⊑ c` a counterexample
    fn implied_concept(
        &mut self,
        left: &Node,
        concepts: &[ConceptExpression],
    ) -> Result<Option<ConceptExpression>, LearnerError> {
        for concept in concepts {
            let inclusion = InclusionAxiom::new(left.clone(), Node::concept(concept.clone()));
            if self.is_counter_example(&inclusion)? {
                return Ok(Some(concept.clone()));
            }
        }
        Ok(None)
    }
}
