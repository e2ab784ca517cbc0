//! Inclusion axioms and the two terminology forms
//!
//! - `RightTerminology`: `A ⊑ C` (EL_rhs, atomic subsumed by complex)
//! - `LeftTerminology`: `C ⊑ A` (EL_lhs, complex subsumed by atomic)

use crate::concept::ConceptExpression;
use crate::node::Node;
use serde::{Deserialize, Serialize};

/// General inclusion `left ⊑ right`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InclusionAxiom {
    pub left: Node,
    pub right: Node,
}

impl InclusionAxiom {
    pub fn new(left: Node, right: Node) -> Self {
        Self { left, right }
    }

    /// Terminology form of an axiom with an atomic side, left side first
    pub fn as_terminology(&self) -> Option<Terminology> {
        if let Some(concept) = self.left.as_concept() {
            return Some(Terminology::Right(RightTerminology::new(
                concept.clone(),
                self.right.clone(),
            )));
        }
        self.right.as_concept().map(|concept| {
            Terminology::Left(LeftTerminology::new(self.left.clone(), concept.clone()))
        })
    }
}

/// `left ⊑ right` with an atomic left side
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RightTerminology {
    pub left: ConceptExpression,
    pub right: Node,
}

impl RightTerminology {
    pub fn new(left: impl Into<ConceptExpression>, right: Node) -> Self {
        Self {
            left: left.into(),
            right,
        }
    }

    pub fn inclusion_axiom(&self) -> InclusionAxiom {
        InclusionAxiom::new(Node::concept(self.left.clone()), self.right.clone())
    }
}

/// `left ⊑ right` with an atomic right side
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeftTerminology {
    pub left: Node,
    pub right: ConceptExpression,
}

impl LeftTerminology {
    pub fn new(left: Node, right: impl Into<ConceptExpression>) -> Self {
        Self {
            left,
            right: right.into(),
        }
    }

    pub fn inclusion_axiom(&self) -> InclusionAxiom {
        InclusionAxiom::new(self.left.clone(), Node::concept(self.right.clone()))
    }
}

/// Either terminology form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "form", rename_all = "snake_case")]
pub enum Terminology {
    Right(RightTerminology),
    Left(LeftTerminology),
}

impl Terminology {
    pub fn inclusion_axiom(&self) -> InclusionAxiom {
        match self {
            Terminology::Right(t) => t.inclusion_axiom(),
            Terminology::Left(t) => t.inclusion_axiom(),
        }
    }

    /// The atomic concept the axiom is indexed by
    pub fn defining_concept(&self) -> &ConceptExpression {
        match self {
            Terminology::Right(t) => &t.left,
            Terminology::Left(t) => &t.right,
        }
    }
}

impl From<RightTerminology> for Terminology {
    fn from(t: RightTerminology) -> Self {
        Terminology::Right(t)
    }
}

impl From<LeftTerminology> for Terminology {
    fn from(t: LeftTerminology) -> Self {
        Terminology::Left(t)
    }
}
