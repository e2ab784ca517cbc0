//! Saturation: extend a counterexample with every known concept that can
//! be added in one breadth-first pass.

use crate::learner::{node_at, node_at_mut, Learner};
use crate::LearnerError;
use mimizuku_core::{
    Engine, InclusionAxiom, LeftTerminology, RightTerminology, Teacher, Traversal,
};
use tracing::debug;

impl<E: Engine, T: Teacher> Learner<E, T> {
    /// Label each node of the right side with every concept that keeps the
    /// axiom a genuine counterexample.
    pub fn saturate_right(
        &mut self,
        mut axiom: RightTerminology,
    ) -> Result<RightTerminology, LearnerError> {
        let concepts = self.concepts();
        let mut cursor = Traversal::new();

        while let Some(path) = cursor.advance(&axiom.right) {
            for concept in &concepts {
                if path.is_root() && *concept == axiom.left {
                    continue;
                }
                if !node_at_mut(&mut axiom.right, &path)?.add_label(concept.clone()) {
                    continue;
                }

                if self.is_counter_example(&axiom.inclusion_axiom())? {
                    debug!(path = %path, concept = %concept, "saturated right side");
                } else {
                    node_at_mut(&mut axiom.right, &path)?.pop_label();
                }
            }
        }
        Ok(axiom)
    }

    /// Label each node of the left side with every concept the hypothesis
    /// already derives from it.
    pub fn saturate_left(
        &mut self,
        mut axiom: LeftTerminology,
    ) -> Result<LeftTerminology, LearnerError> {
        let concepts = self.concepts();
        let mut snapshot = axiom.left.clone();
        let mut cursor = Traversal::new();

        while let Some(path) = cursor.advance(&axiom.left) {
            for concept in &concepts {
                if path.is_root() && *concept == axiom.right {
                    continue;
                }
                if node_at(&axiom.left, &path)?.has_label(concept) {
                    continue;
                }
                node_at_mut(&mut axiom.left, &path)?.add_label(concept.clone());

                let strengthening = InclusionAxiom::new(snapshot.clone(), axiom.left.clone());
                if self.entails(&strengthening)? {
                    debug!(path = %path, concept = %concept, "saturated left side");
                    snapshot = axiom.left.clone();
                } else {
                    node_at_mut(&mut axiom.left, &path)?.pop_label();
                }
            }
        }
        Ok(axiom)
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::{expr, learner};
    use mimizuku_core::{ConceptExpression, Engine, LeftTerminology, RightTerminology};
    use serde_json::json;

    #[test]
    fn test_right_saturation() {
        // Human ⊑ ∃hasParent.Human
        let mut learner = learner(
            vec![RightTerminology::new("Human", expr(json!({"hasParent": ["Human"]}))).into()],
            &["Human", "Dog"],
        );

        let counter_example =
            RightTerminology::new("Human", expr(json!({"hasParent": ["Human", {"hasParent": []}]})));
        let axiom = learner.saturate_right(counter_example).unwrap();

        assert_eq!(
            axiom,
            RightTerminology::new("Human", expr(json!({"hasParent": ["Human", {"hasParent": ["Human"]}]})))
        );
    }

    #[test]
    fn test_right_saturation_with_redundant_target() {
        // Human ⊑ ∃hasParent.Human, Human ⊑ ∃hasParent.∃hasParent.⊤
        let mut learner = learner(
            vec![
                RightTerminology::new("Human", expr(json!({"hasParent": ["Human"]}))).into(),
                RightTerminology::new("Human", expr(json!({"hasParent": [{"hasParent": []}]}))).into(),
            ],
            &["Human"],
        );

        let counter_example =
            RightTerminology::new("Human", expr(json!({"hasParent": ["Human", {"hasParent": []}]})));
        let axiom = learner.saturate_right(counter_example).unwrap();

        assert_eq!(
            axiom.right,
            expr(json!({"hasParent": ["Human", {"hasParent": ["Human"]}]}))
        );
    }

    #[test]
    fn test_right_saturation_only_grows() {
        // Woman ⊑ Human ⊓ ∃hasParent.Human
        let mut learner = learner(
            vec![RightTerminology::new("Woman", expr(json!(["Human", {"hasParent": ["Human"]}]))).into()],
            &["Woman", "Human", "Dog"],
        );

        let counter_example = RightTerminology::new("Woman", expr(json!({"hasParent": []})));
        let axiom = learner.saturate_right(counter_example.clone()).unwrap();

        assert!(axiom.right.implies(&counter_example.right));
        assert_eq!(axiom.right, expr(json!(["Human", {"hasParent": ["Human"]}])));
        assert!(learner.is_counter_example(&axiom.inclusion_axiom()).unwrap());
    }

    #[test]
    fn test_left_saturation() {
        // ∃hasParent.⊤ ⊑ Human, ∃hasChild.Human ⊑ Human
        let mut learner = learner(
            vec![
                LeftTerminology::new(expr(json!({"hasParent": []})), "Human").into(),
                LeftTerminology::new(expr(json!({"hasChild": ["Human"]})), "Human").into(),
            ],
            &["Cat", "Human"],
        );
        learner
            .engine_mut()
            .add_axiom(LeftTerminology::new(expr(json!({"hasParent": []})), "Human").into())
            .unwrap();

        let counter_example = LeftTerminology::new(expr(json!({"hasChild": [{"hasParent": []}]})), "Human");
        let axiom = learner.saturate_left(counter_example).unwrap();

        assert!(axiom.left.labels().is_empty());
        assert_eq!(axiom.left.edges().len(), 1);
        assert_eq!(axiom.left.edges()[0].target.labels(), &[ConceptExpression::new("Human")]);
        assert_eq!(axiom.right, ConceptExpression::new("Human"));
    }

    #[test]
    fn test_left_saturation_without_hypothesis_is_identity() {
        let mut learner = learner(
            vec![LeftTerminology::new(expr(json!({"eats": []})), "Animal").into()],
            &["Animal", "Plant"],
        );

        let counter_example = LeftTerminology::new(expr(json!({"eats": ["Plant"]})), "Animal");
        let axiom = learner.saturate_left(counter_example.clone()).unwrap();
        assert_eq!(axiom, counter_example);
        assert_eq!(learner.stats().membership_queries, 0);
        assert!(learner.engine().hypothesis().is_empty());
    }
}
