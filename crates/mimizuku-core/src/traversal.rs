//! Breadth-first traversal of expression trees
//!
//! [`Traversal`] hands out [`NodePath`]s instead of references so the caller
//! keeps the only handle on the tree. The children of a visited node are read
//! when the cursor advances past it, not when the node is enqueued: edges
//! removed, replaced or added on the last visited node decide which sub-nodes
//! are visited next.

use crate::node::Node;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Edge indices leading from the root to a sub-node
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn child(&self, edge: usize) -> Self {
        let mut indices = Vec::with_capacity(self.0.len() + 1);
        indices.extend_from_slice(&self.0);
        indices.push(edge);
        Self(indices)
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }
}

impl std::fmt::Display for NodePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            return write!(f, "/");
        }
        for index in &self.0 {
            write!(f, "/{}", index)?;
        }
        Ok(())
    }
}

/// Mutation-tolerant breadth-first cursor.
///
/// Not restartable: a fresh traversal needs a new cursor.
#[derive(Debug, Clone)]
pub struct Traversal {
    queue: VecDeque<NodePath>,
    current: Option<NodePath>,
}

impl Traversal {
    pub fn new() -> Self {
        let mut queue = VecDeque::new();
        queue.push_back(NodePath::root());
        Self {
            queue,
            current: None,
        }
    }

    /// Expand the previously returned node using its edges as they are now,
    /// then return the next path in breadth-first order. Every call must be
    /// given the same tree.
    pub fn advance(&mut self, root: &Node) -> Option<NodePath> {
        if let Some(current) = self.current.take() {
            if let Some(node) = root.at(&current) {
                self.queue
                    .extend((0..node.edges().len()).map(|i| current.child(i)));
            }
        }

        while let Some(next) = self.queue.pop_front() {
            if root.at(&next).is_some() {
                self.current = Some(next.clone());
                return Some(next);
            }
        }
        None
    }
}

impl Default for Traversal {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only breadth-first iterator
pub struct Iter<'a> {
    queue: VecDeque<&'a Node>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(root: &'a Node) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back(root);
        Self { queue }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.edges().iter().map(|e| &e.target));
        Some(node)
    }
}
