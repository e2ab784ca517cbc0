//! # 🦉 Mimizuku - Exact Learning of EL Ontologies
//!
//! Mimizuku learns an EL terminology by asking questions. A teacher knows
//! the hidden target ontology and answers membership and equivalence
//! queries; an engine reasons over the learner's hypothesis. The learner
//! refines its hypothesis until the teacher has no counterexample left.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mimizuku::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let target = vec![
//!         RightTerminology::new("Woman", Node::concept("Human")).inclusion_axiom(),
//!         RightTerminology::new("Human", Node::exists("hasParent", Node::concept("Human")))
//!             .inclusion_axiom(),
//!     ];
//!     let teacher = OntologyTeacher::with_signature_concepts(target);
//!
//!     let mut learner = Learner::new(ElReasoner::new(), teacher);
//!     for axiom in learner.run_learner()? {
//!         println!("{}", axiom);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **`mimizuku-core`**: expression trees, terminology forms, oracle traits
//! - **`mimizuku-reasoner`**: EL normalization and completion, the hypothesis engine
//! - **`mimizuku-teacher`**: teacher backed by a target ontology
//! - **`mimizuku-learner`**: the exact learner
//!
//! ## Feature Flags
//!
//! - `full` (default): All crates included
//! - `core`: Only the expression model
//! - `reasoner`: EL reasoner
//! - `teacher`: Ontology teacher
//! - `learner`: Learner

// Re-export all public APIs from sub-crates (feature-gated)

#[cfg(feature = "mimizuku-core")]
pub use mimizuku_core as core;

#[cfg(feature = "mimizuku-reasoner")]
pub use mimizuku_reasoner as reasoner;

#[cfg(feature = "mimizuku-teacher")]
pub use mimizuku_teacher as teacher;

#[cfg(feature = "mimizuku-learner")]
pub use mimizuku_learner as learner;

// Convenience re-exports for common types (feature-gated)
#[cfg(feature = "mimizuku-core")]
pub use mimizuku_core::{
    ConceptExpression, Engine, InclusionAxiom, LeftTerminology, Node, OracleError, RightTerminology,
    Role, Teacher, Terminology,
};

#[cfg(feature = "mimizuku-reasoner")]
pub use mimizuku_reasoner::{ElReasoner, ReasonerConfig, ReasonerError};

#[cfg(feature = "mimizuku-teacher")]
pub use mimizuku_teacher::OntologyTeacher;

#[cfg(feature = "mimizuku-learner")]
pub use mimizuku_learner::{ExactLearner, Learner, LearnerConfig, LearnerError, QueryStats};

// Commonly used external dependencies
pub use serde;
pub use serde_json;
pub use anyhow;

/// Prelude module for convenient imports
///
/// ```rust
/// use mimizuku::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "mimizuku-core")]
    pub use crate::{
        ConceptExpression, Engine, InclusionAxiom, LeftTerminology, Node, RightTerminology, Teacher,
        Terminology,
    };

    #[cfg(feature = "mimizuku-reasoner")]
    pub use crate::{ElReasoner, ReasonerConfig};

    #[cfg(feature = "mimizuku-teacher")]
    pub use crate::OntologyTeacher;

    #[cfg(feature = "mimizuku-learner")]
    pub use crate::{ExactLearner, Learner, LearnerConfig};

    // Common external types
    pub use serde::{Deserialize, Serialize};
    pub use serde_json::Value;
    pub use anyhow::Result;
}

/// Current version of Mimizuku
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
