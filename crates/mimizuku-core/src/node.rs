//! EL concept expression tree
//!
//! A [`Node`] is a conjunction of concept labels and existential edges
//! (`∃role.target`). The empty node is ⊤.

use crate::concept::{ConceptExpression, Role};
use crate::traversal::{Iter, NodePath};
use crate::CoreError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{HashMap, HashSet};

/// Existential restriction `∃label.target`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub label: Role,
    pub target: Node,
}

impl Edge {
    pub fn new(label: impl Into<Role>, target: Node) -> Self {
        Self {
            label: label.into(),
            target,
        }
    }
}

/// Conjunction of labels and edges
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Node {
    labels: Vec<ConceptExpression>,
    edges: Vec<Edge>,
}

impl Node {
    /// Build a node, collapsing duplicate labels
    pub fn new(labels: Vec<ConceptExpression>, edges: Vec<Edge>) -> Self {
        let mut node = Self {
            labels: Vec::with_capacity(labels.len()),
            edges,
        };
        for label in labels {
            node.add_label(label);
        }
        node
    }

    /// ⊤
    pub fn top() -> Self {
        Self::default()
    }

    /// Singleton node holding one concept label
    pub fn concept(name: impl Into<ConceptExpression>) -> Self {
        Self {
            labels: vec![name.into()],
            edges: Vec::new(),
        }
    }

    /// `∃role.target`
    pub fn exists(role: impl Into<Role>, target: Node) -> Self {
        Self {
            labels: Vec::new(),
            edges: vec![Edge::new(role, target)],
        }
    }

    /// Parse the compact JSON form used by fixtures.
    ///
    /// A string is a label, an array is a conjunction of items and an object
    /// maps each role name to the items of its target:
    /// `["Human", {"hasParent": ["Human", {"hasParent": []}]}]`
    pub fn from_json(value: &Value) -> Result<Self, CoreError> {
        let mut node = Self::top();
        node.extend_from_json(value)?;
        Ok(node)
    }

    fn extend_from_json(&mut self, value: &Value) -> Result<(), CoreError> {
        match value {
            Value::String(name) => {
                self.add_label(ConceptExpression::new(name.as_str()));
            }
            Value::Array(items) => {
                for item in items {
                    self.extend_from_json(item)?;
                }
            }
            Value::Object(map) => {
                for (role, target) in map {
                    self.edges
                        .push(Edge::new(Role::new(role.as_str()), Self::from_json(target)?));
                }
            }
            other => {
                return Err(CoreError::InvalidExpression(format!(
                    "expected a concept name, a role object or a list, found {}",
                    other
                )))
            }
        }
        Ok(())
    }

    pub fn labels(&self) -> &[ConceptExpression] {
        &self.labels
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Edge list of this node. Edges carry no invariant, so callers may
    /// remove, replace or reorder them freely.
    pub fn edges_mut(&mut self) -> &mut Vec<Edge> {
        &mut self.edges
    }

    pub fn has_label(&self, label: &ConceptExpression) -> bool {
        self.labels.contains(label)
    }

    /// Add a label; returns `false` when it was already present
    pub fn add_label(&mut self, label: ConceptExpression) -> bool {
        if self.has_label(&label) {
            return false;
        }
        self.labels.push(label);
        true
    }

    /// Remove the most recently added label
    pub fn pop_label(&mut self) -> Option<ConceptExpression> {
        self.labels.pop()
    }

    pub fn push_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    pub fn remove_edge(&mut self, index: usize) -> Option<Edge> {
        if index < self.edges.len() {
            Some(self.edges.remove(index))
        } else {
            None
        }
    }

    /// Empty node, semantically ⊤
    pub fn is_top(&self) -> bool {
        self.labels.is_empty() && self.edges.is_empty()
    }

    /// The label of a node made of exactly one label and no edges
    pub fn as_concept(&self) -> Option<&ConceptExpression> {
        match (self.labels.as_slice(), self.edges.is_empty()) {
            ([label], true) => Some(label),
            _ => None,
        }
    }

    /// Number of nodes in the tree
    pub fn size(&self) -> usize {
        1 + self.edges.iter().map(|e| e.target.size()).sum::<usize>()
    }

    /// Label union and edge concatenation of two nodes
    pub fn merge(&self, other: &Node) -> Node {
        let mut merged = self.clone();
        for label in &other.labels {
            merged.add_label(label.clone());
        }
        merged.edges.extend(other.edges.iter().cloned());
        merged
    }

    /// Conjoin `other` into this node in place
    pub fn union_with(&mut self, other: Node) {
        for label in other.labels {
            self.add_label(label);
        }
        self.edges.extend(other.edges);
    }

    /// Structural subsumption `self ⊑ other` without any background axioms:
    /// every label of `other` labels `self` and every edge of `other` is
    /// matched by a same-role edge of `self` whose target implies it.
    pub fn implies(&self, other: &Node) -> bool {
        other.labels.iter().all(|l| self.has_label(l))
            && other.edges.iter().all(|wanted| {
                self.edges
                    .iter()
                    .any(|e| e.label == wanted.label && e.target.implies(&wanted.target))
            })
    }

    /// Resolve a path produced by [`Traversal`](crate::Traversal)
    pub fn at(&self, path: &NodePath) -> Option<&Node> {
        let mut node = self;
        for &index in path.indices() {
            node = &node.edges.get(index)?.target;
        }
        Some(node)
    }

    pub fn at_mut(&mut self, path: &NodePath) -> Option<&mut Node> {
        let mut node = self;
        for &index in path.indices() {
            node = &mut node.edges.get_mut(index)?.target;
        }
        Some(node)
    }

    /// Read-only breadth-first iteration over all sub-nodes, root first
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    fn edges_by_role(&self) -> HashMap<&Role, Vec<&Node>> {
        let mut grouped: HashMap<&Role, Vec<&Node>> = HashMap::new();
        for edge in &self.edges {
            grouped.entry(&edge.label).or_default().push(&edge.target);
        }
        grouped
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        if self.edges.len() != other.edges.len() {
            return false;
        }

        let mine: HashSet<&ConceptExpression> = self.labels.iter().collect();
        let theirs: HashSet<&ConceptExpression> = other.labels.iter().collect();
        if mine != theirs {
            return false;
        }

        let grouped = other.edges_by_role();
        for (role, targets) in self.edges_by_role() {
            let Some(candidates) = grouped.get(role) else {
                return false;
            };
            if candidates.len() != targets.len() {
                return false;
            }

            // Structural equality is an equivalence, so greedy matching is exact.
            let mut used = vec![false; candidates.len()];
            for target in targets {
                let matched = candidates
                    .iter()
                    .enumerate()
                    .find(|(i, candidate)| !used[*i] && **candidate == target)
                    .map(|(i, _)| i);
                match matched {
                    Some(i) => used[i] = true,
                    None => return false,
                }
            }
        }

        true
    }
}

impl Eq for Node {}

impl<'a> IntoIterator for &'a Node {
    type Item = &'a Node;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
