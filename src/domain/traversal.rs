//! Depth-first, pre-order traversal with visitor callbacks.
//!
//! Both strategies produce the same callback sequence: one `visit` per node
//! reachable from the start, and one `on_absent` per missing child reference
//! (plus one for an absent start). For N nodes that is N visits and N + 1
//! absent checks.

use generational_arena::Index;
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

use crate::domain::arena::{BinaryTree, NodeData};

/// Receives traversal callbacks. Callback methods other than `visit` are optional.
pub trait Visit {
    fn visit(&mut self, node: &NodeData);

    /// Called whenever the traversal hits an absent child reference.
    fn on_absent(&mut self) {}
}

impl<F> Visit for F
where
    F: FnMut(&NodeData),
{
    fn visit(&mut self, node: &NodeData) {
        self(node)
    }
}

/// How the depth-first walk is carried out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    #[default]
    Recursive,
    Iterative,
}

/// Recursive pre-order traversal starting at `node`.
#[instrument(level = "trace", skip(tree, visitor))]
pub fn dfs<V: Visit + ?Sized>(tree: &BinaryTree, node: Option<Index>, visitor: &mut V) {
    let Some(node) = node.and_then(|idx| tree.get_node(idx)) else {
        visitor.on_absent();
        return;
    };

    visitor.visit(&node.data);
    dfs(tree, node.left, visitor);
    dfs(tree, node.right, visitor);
}

/// Pre-order traversal with an explicit stack; same callbacks as [`dfs`].
#[instrument(level = "trace", skip(tree, visitor))]
pub fn dfs_iterative<V: Visit + ?Sized>(tree: &BinaryTree, node: Option<Index>, visitor: &mut V) {
    let mut stack = vec![node];

    while let Some(current) = stack.pop() {
        match current.and_then(|idx| tree.get_node(idx)) {
            Some(node) => {
                visitor.visit(&node.data);
                stack.push(node.right);
                stack.push(node.left);
            }
            None => visitor.on_absent(),
        }
    }
}

/// Runs the traversal selected by `strategy` from `node`.
pub fn traverse<V: Visit + ?Sized>(
    tree: &BinaryTree,
    node: Option<Index>,
    strategy: Strategy,
    visitor: &mut V,
) {
    trace!(?strategy, "starting traversal");
    match strategy {
        Strategy::Recursive => dfs(tree, node, visitor),
        Strategy::Iterative => dfs_iterative(tree, node, visitor),
    }
}

/// Visitor that remembers what it saw.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Recorder {
    /// Visited node names in visit order
    pub visited: Vec<String>,
    /// Number of absent child references encountered
    pub absent: usize,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Visit for Recorder {
    fn visit(&mut self, node: &NodeData) {
        self.visited.push(node.name.clone());
    }

    fn on_absent(&mut self) {
        self.absent += 1;
    }
}
