//! # Mimizuku Core
//!
//! EL concept expressions as mutable trees, the two terminology forms the
//! hypothesis engine accepts, and the oracle contracts (`Engine`, `Teacher`)
//! consumed by the learner.

pub mod concept;
pub mod node;
pub mod traversal;
pub mod terminology;
pub mod oracle;
mod display;

pub use concept::{ConceptExpression, Role};
pub use node::{Edge, Node};
pub use traversal::{Iter, NodePath, Traversal};
pub use terminology::{InclusionAxiom, LeftTerminology, RightTerminology, Terminology};
pub use oracle::{Engine, OracleError, Teacher};

use thiserror::Error;

/// Core model errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid expression: {0}")]
    InvalidExpression(String),
}
