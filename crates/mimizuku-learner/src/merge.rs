//! Sibling merge

use crate::learner::{node_at, node_at_mut, Learner};
use crate::LearnerError;
use mimizuku_core::{Edge, Engine, RightTerminology, Teacher, Traversal};
use tracing::debug;

impl<E: Engine, T: Teacher> Learner<E, T> {
    /// Fold same-role edges of each node into one edge whose target is the
    /// merge of both targets, keeping a fold only when the target ontology
    /// still holds the merged axiom.
    pub fn sibling_merge(
        &mut self,
        mut axiom: RightTerminology,
    ) -> Result<RightTerminology, LearnerError> {
        let mut cursor = Traversal::new();

        while let Some(path) = cursor.advance(&axiom.right) {
            let edge_count = node_at(&axiom.right, &path)?.edges().len();
            for i in (0..edge_count.saturating_sub(1)).rev() {
                let current_count = node_at(&axiom.right, &path)?.edges().len();
                for j in (i + 1..current_count).rev() {
                    let node = node_at_mut(&mut axiom.right, &path)?;
                    let edges = node.edges_mut();
                    if edges[i].label != edges[j].label {
                        continue;
                    }

                    let merged = Edge::new(edges[i].label.clone(), edges[i].target.merge(&edges[j].target));
                    let removed = edges.remove(j);
                    let original = std::mem::replace(&mut edges[i], merged);

                    if self.membership(&axiom.inclusion_axiom())? {
                        debug!(path = %path, role = %removed.label, "merged sibling edges");
                    } else {
                        let edges = node_at_mut(&mut axiom.right, &path)?.edges_mut();
                        edges[i] = original;
                        edges.insert(j, removed);
                    }
                }
            }
        }
        Ok(axiom)
    }
}
