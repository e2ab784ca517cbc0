//! DL notation: `Human ⊓ ∃hasParent.(Human ⊓ Male) ⊑ Person`

use crate::node::Node;
use crate::terminology::{InclusionAxiom, LeftTerminology, RightTerminology, Terminology};
use std::fmt;

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_top() {
            return write!(f, "⊤");
        }

        let mut first = true;
        for label in self.labels() {
            if !first {
                write!(f, " ⊓ ")?;
            }
            write!(f, "{}", label)?;
            first = false;
        }
        for edge in self.edges() {
            if !first {
                write!(f, " ⊓ ")?;
            }
            let target = &edge.target;
            if target.is_top() || target.as_concept().is_some() {
                write!(f, "∃{}.{}", edge.label, target)?;
            } else {
                write!(f, "∃{}.({})", edge.label, target)?;
            }
            first = false;
        }
        Ok(())
    }
}

impl fmt::Display for InclusionAxiom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ⊑ {}", self.left, self.right)
    }
}

impl fmt::Display for RightTerminology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ⊑ {}", self.left, self.right)
    }
}

impl fmt::Display for LeftTerminology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ⊑ {}", self.left, self.right)
    }
}

impl fmt::Display for Terminology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Terminology::Right(t) => t.fmt(f),
            Terminology::Left(t) => t.fmt(f),
        }
    }
}
