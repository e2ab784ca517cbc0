//! # Mimizuku Learner
//!
//! Exact learning of EL terminologies. The learner asks a [`Teacher`] for
//! counterexamples to its hypothesis, rewrites each one into a terminology,
//! minimizes and saturates it against both oracles and commits the result
//! to its [`Engine`].
//!
//! [`Teacher`]: mimizuku_core::Teacher
//! [`Engine`]: mimizuku_core::Engine

pub mod config;
pub mod stats;
pub mod learner;
mod decompose;
mod saturate;
mod merge;

pub use config::LearnerConfig;
pub use learner::Learner;
pub use stats::QueryStats;

use mimizuku_core::{InclusionAxiom, NodePath, OracleError};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LearnerError {
    #[error("Counterexample could not be made into a terminology: {0}")]
    NonCanonicalCounterExample(InclusionAxiom),

    #[error("No equivalent hypothesis within {0} rounds")]
    RoundLimit(usize),

    #[error("Traversal path {0} does not resolve in the working expression")]
    DetachedPath(NodePath),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Oracle error: {0}")]
    Oracle(#[from] OracleError),
}

/// Query-based learning protocol
pub trait ExactLearner {
    /// Refine the hypothesis until the teacher reports equivalence and
    /// return it as general inclusions.
    fn run_learner(&mut self) -> Result<Vec<InclusionAxiom>, LearnerError>;
}
