//! 正規化
//!
//! Rewrites general inclusions `C ⊑ D` into the EL normal forms
//!
//! - NF1: `A1 ⊓ … ⊓ An ⊑ B`
//! - NF2: `A ⊑ ∃r.B`
//! - NF3: `∃r.A ⊑ B`
//!
//! over interned concept ids. Complex sub-expressions get fresh names:
//! `X ⊒ sub` on the left-hand side and `X ⊑ sub` on the right-hand side.

use mimizuku_core::{ConceptExpression, InclusionAxiom, Node, Role};
use std::collections::HashMap;

pub type ConceptId = usize;
pub type RoleId = usize;

/// Id of ⊤
pub const TOP: ConceptId = 0;

/// Concept and role interning table
#[derive(Debug, Clone)]
pub struct Signature {
    concept_ids: HashMap<ConceptExpression, ConceptId>,
    /// Name per id; `None` for ⊤ and fresh names
    concept_names: Vec<Option<ConceptExpression>>,
    role_ids: HashMap<Role, RoleId>,
}

impl Signature {
    pub fn new() -> Self {
        Self {
            concept_ids: HashMap::new(),
            concept_names: vec![None],
            role_ids: HashMap::new(),
        }
    }

    pub fn concept_id(&mut self, concept: &ConceptExpression) -> ConceptId {
        if let Some(&id) = self.concept_ids.get(concept) {
            return id;
        }
        let id = self.concept_names.len();
        self.concept_names.push(Some(concept.clone()));
        self.concept_ids.insert(concept.clone(), id);
        id
    }

    pub fn lookup(&self, concept: &ConceptExpression) -> Option<ConceptId> {
        self.concept_ids.get(concept).copied()
    }

    pub fn fresh(&mut self) -> ConceptId {
        self.concept_names.push(None);
        self.concept_names.len() - 1
    }

    pub fn role_id(&mut self, role: &Role) -> RoleId {
        let next = self.role_ids.len();
        *self.role_ids.entry(role.clone()).or_insert(next)
    }

    pub fn name(&self, id: ConceptId) -> Option<&ConceptExpression> {
        self.concept_names.get(id).and_then(|n| n.as_ref())
    }

    pub fn concept_count(&self) -> usize {
        self.concept_names.len()
    }

    pub fn role_count(&self) -> usize {
        self.role_ids.len()
    }

    /// Named concepts with their ids
    pub fn named(&self) -> impl Iterator<Item = (ConceptId, &ConceptExpression)> {
        self.concept_names
            .iter()
            .enumerate()
            .filter_map(|(id, name)| name.as_ref().map(|n| (id, n)))
    }
}

impl Default for Signature {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalized TBox
#[derive(Debug, Clone, Default)]
pub struct NormalizedTbox {
    pub signature: Signature,
    /// NF1: conjunction of ids ⊑ id
    pub conjunctions: Vec<(Vec<ConceptId>, ConceptId)>,
    /// NF2: `A ⊑ ∃r.B` as `(A, r, B)`
    pub existentials_right: Vec<(ConceptId, RoleId, ConceptId)>,
    /// NF3: `∃r.A ⊑ B` as `(r, A, B)`
    pub existentials_left: Vec<(RoleId, ConceptId, ConceptId)>,
}

impl NormalizedTbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.conjunctions.len() + self.existentials_right.len() + self.existentials_left.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn add_inclusion(&mut self, axiom: &InclusionAxiom) {
        let lhs = self.left_conjuncts(&axiom.left);
        self.add_subsumed_by(lhs, &axiom.right);
    }

    /// `A1 ⊓ … ⊓ An ⊑ right`
    pub fn add_subsumed_by(&mut self, lhs: Vec<ConceptId>, right: &Node) {
        for label in right.labels() {
            let b = self.signature.concept_id(label);
            self.conjunctions.push((lhs.clone(), b));
        }
        if right.edges().is_empty() {
            return;
        }

        let a = match lhs.as_slice() {
            [single] => *single,
            _ => {
                let z = self.signature.fresh();
                self.conjunctions.push((lhs, z));
                z
            }
        };
        for edge in right.edges() {
            let r = self.signature.role_id(&edge.label);
            let b = self.right_atom(&edge.target);
            self.existentials_right.push((a, r, b));
        }
    }

    /// Fresh `X ⊑ complex`, or the id itself for ⊤ and single concepts
    fn right_atom(&mut self, node: &Node) -> ConceptId {
        if node.is_top() {
            return TOP;
        }
        if let Some(concept) = node.as_concept() {
            return self.signature.concept_id(concept);
        }
        let w = self.signature.fresh();
        self.add_subsumed_by(vec![w], node);
        w
    }

    /// Conjunct ids of a left-hand side, `[TOP]` for ⊤
    pub fn left_conjuncts(&mut self, node: &Node) -> Vec<ConceptId> {
        let mut ids: Vec<ConceptId> = node
            .labels()
            .iter()
            .map(|label| self.signature.concept_id(label))
            .collect();
        for edge in node.edges() {
            let r = self.signature.role_id(&edge.label);
            let a = self.left_atom(&edge.target);
            let f = self.signature.fresh();
            self.existentials_left.push((r, a, f));
            ids.push(f);
        }
        if ids.is_empty() {
            ids.push(TOP);
        }
        ids
    }

    /// Fresh `X ⊒ complex`, or the id itself for ⊤ and single concepts
    fn left_atom(&mut self, node: &Node) -> ConceptId {
        if node.is_top() {
            return TOP;
        }
        if let Some(concept) = node.as_concept() {
            return self.signature.concept_id(concept);
        }
        let ids = self.left_conjuncts(node);
        let y = self.signature.fresh();
        self.conjunctions.push((ids, y));
        y
    }
}
