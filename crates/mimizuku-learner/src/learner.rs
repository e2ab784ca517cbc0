//! Learner state, oracle bookkeeping and the learning loop

use crate::config::LearnerConfig;
use crate::stats::QueryStats;
use crate::{ExactLearner, LearnerError};
use mimizuku_core::{
    ConceptExpression, Engine, InclusionAxiom, LeftTerminology, Node, NodePath, RightTerminology,
    Teacher, Terminology,
};
use tracing::{debug, info};

/// Exact learner owning one hypothesis engine and one teacher
#[derive(Debug)]
pub struct Learner<E, T> {
    engine: E,
    teacher: T,
    config: LearnerConfig,
    stats: QueryStats,
}

impl<E: Engine, T: Teacher> Learner<E, T> {
    pub fn new(engine: E, teacher: T) -> Self {
        Self::with_config(engine, teacher, LearnerConfig::default())
    }

    pub fn with_config(engine: E, teacher: T, config: LearnerConfig) -> Self {
        Self {
            engine,
            teacher,
            config,
            stats: QueryStats::default(),
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Direct access to the hypothesis, bypassing the learning loop
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn teacher(&self) -> &T {
        &self.teacher
    }

    pub fn config(&self) -> &LearnerConfig {
        &self.config
    }

    pub fn stats(&self) -> QueryStats {
        self.stats
    }

    pub fn into_parts(self) -> (E, T) {
        (self.engine, self.teacher)
    }

    /// Current hypothesis as general inclusions
    pub fn hypothesis_axioms(&self) -> Vec<InclusionAxiom> {
        self.engine
            .hypothesis()
            .iter()
            .map(Terminology::inclusion_axiom)
            .collect()
    }

    pub(crate) fn membership(&mut self, axiom: &InclusionAxiom) -> Result<bool, LearnerError> {
        self.stats.membership_queries += 1;
        Ok(self.teacher.membership_query(axiom)?)
    }

    pub(crate) fn entails(&mut self, axiom: &InclusionAxiom) -> Result<bool, LearnerError> {
        self.stats.entailment_queries += 1;
        Ok(self.engine.entails(axiom)?)
    }

    pub(crate) fn concepts(&self) -> Vec<ConceptExpression> {
        self.teacher.concepts()
    }

    /// True in the target but not yet entailed by the hypothesis
    pub fn is_counter_example(&mut self, axiom: &InclusionAxiom) -> Result<bool, LearnerError> {
        if self.entails(axiom)? {
            return Ok(false);
        }
        self.membership(axiom)
    }

    /// Turn a counterexample into a terminology.
    ///
    /// Atomic sides are used directly. Otherwise every sub-node of the right
    /// side, then of the left side, is paired with every known concept and
    /// the first genuine counterexample wins.
    pub fn terminology_counter_example(
        &mut self,
        counter_example: &InclusionAxiom,
    ) -> Result<Terminology, LearnerError> {
        if let Some(terminology) = counter_example.as_terminology() {
            return Ok(terminology);
        }

        let concepts = self.concepts();
        for node in counter_example.right.iter() {
            for concept in &concepts {
                let candidate = RightTerminology::new(concept.clone(), node.clone());
                if self.is_counter_example(&candidate.inclusion_axiom())? {
                    return Ok(candidate.into());
                }
            }
        }
        for node in counter_example.left.iter() {
            for concept in &concepts {
                let candidate = LeftTerminology::new(node.clone(), concept.clone());
                if self.is_counter_example(&candidate.inclusion_axiom())? {
                    return Ok(candidate.into());
                }
            }
        }

        Err(LearnerError::NonCanonicalCounterExample(counter_example.clone()))
    }

    /// Minimize, saturate, minimize again and merge siblings. When the
    /// hypothesis already defines the same concept, that definition is
    /// conjoined in and the passes run once more.
    pub fn right_o_essential(
        &mut self,
        axiom: RightTerminology,
    ) -> Result<RightTerminology, LearnerError> {
        let mut axiom = self.right_passes(axiom)?;

        if let Some(known) = self.engine.right_from_hypothesis(&axiom.left) {
            debug!(concept = %axiom.left, known = %known.right, "conjoining existing definition");
            axiom.right.union_with(known.right);
            axiom = self.right_passes(axiom)?;
        }
        Ok(axiom)
    }

    fn right_passes(&mut self, axiom: RightTerminology) -> Result<RightTerminology, LearnerError> {
        let axiom = self.decompose_right(axiom)?;
        let axiom = self.saturate_right(axiom)?;
        let axiom = self.decompose_right(axiom)?;
        self.sibling_merge(axiom)
    }

    pub fn left_o_essential(
        &mut self,
        axiom: LeftTerminology,
    ) -> Result<LeftTerminology, LearnerError> {
        let axiom = self.decompose_left(axiom)?;
        self.saturate_left(axiom)
    }
}

impl<E: Engine, T: Teacher> ExactLearner for Learner<E, T> {
    fn run_learner(&mut self) -> Result<Vec<InclusionAxiom>, LearnerError> {
        loop {
            let hypothesis = self.hypothesis_axioms();
            self.stats.equivalence_queries += 1;
            let Some(counter_example) = self.teacher.equivalence_query(&hypothesis)? else {
                info!(
                    axioms = hypothesis.len(),
                    rounds = self.stats.rounds,
                    queries = self.stats.total_queries(),
                    "hypothesis is equivalent to the target"
                );
                return Ok(hypothesis);
            };

            if let Some(max_rounds) = self.config.max_rounds {
                if self.stats.rounds >= max_rounds {
                    return Err(LearnerError::RoundLimit(max_rounds));
                }
            }
            self.stats.rounds += 1;
            info!(round = self.stats.rounds, counter_example = %counter_example, "received counterexample");

            let learned: Terminology = match self.terminology_counter_example(&counter_example)? {
                Terminology::Right(axiom) => self.right_o_essential(axiom)?.into(),
                Terminology::Left(axiom) => self.left_o_essential(axiom)?.into(),
            };
            info!(round = self.stats.rounds, axiom = %learned, "learned axiom");
            self.engine.add_axiom(learned)?;
        }
    }
}

pub(crate) fn node_at<'a>(root: &'a Node, path: &NodePath) -> Result<&'a Node, LearnerError> {
    root.at(path)
        .ok_or_else(|| LearnerError::DetachedPath(path.clone()))
}

pub(crate) fn node_at_mut<'a>(
    root: &'a mut Node,
    path: &NodePath,
) -> Result<&'a mut Node, LearnerError> {
    root.at_mut(path)
        .ok_or_else(|| LearnerError::DetachedPath(path.clone()))
}
