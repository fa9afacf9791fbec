use generational_arena::{Arena, Index};
use std::fmt;
use tracing::{instrument, trace};

use crate::domain::error::{DomainError, DomainResult};

/// Data payload for tree nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeData {
    /// Label identifying the node in visit output
    pub name: String,
}

impl NodeData {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for NodeData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Which child slot of a parent a link targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// Binary tree node in the arena.
///
/// Children are arena indices. There is no parent reference; `attached` only
/// records that some node already links to this one.
#[derive(Debug)]
pub struct TreeNode {
    pub data: NodeData,
    /// Index of the left child, None when absent
    pub left: Option<Index>,
    /// Index of the right child, None when absent
    pub right: Option<Index>,
    attached: bool,
}

impl TreeNode {
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    fn slot_mut(&mut self, side: Side) -> &mut Option<Index> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// Arena-based binary tree.
///
/// Every node is owned by the arena and lives as long as the tree. Links are
/// validated when they are made, so a tree reachable from `root` is always
/// finite and acyclic and every node in it has exactly one path from the root.
#[derive(Debug)]
pub struct BinaryTree {
    arena: Arena<TreeNode>,
    root: Option<Index>,
}

impl Default for BinaryTree {
    fn default() -> Self {
        Self::new()
    }
}

impl BinaryTree {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Adds an unlinked, childless node.
    #[instrument(level = "trace", skip(self))]
    pub fn insert(&mut self, data: NodeData) -> Index {
        self.arena.insert(TreeNode {
            data,
            left: None,
            right: None,
            attached: false,
        })
    }

    /// Makes `child` the `side` child of `parent`.
    ///
    /// The cycle check walks the subtree below `child`, so wiring a tree
    /// bottom-up costs O(n²) overall.
    #[instrument(level = "trace", skip(self))]
    pub fn link(&mut self, parent: Index, side: Side, child: Index) -> DomainResult<()> {
        let parent_node = self
            .arena
            .get(parent)
            .ok_or(DomainError::UnknownNode(parent))?;
        let child_node = self.arena.get(child).ok_or(DomainError::UnknownNode(child))?;

        let parent_name = parent_node.data.name.clone();
        let child_name = child_node.data.name.clone();

        if parent == child {
            return Err(DomainError::SelfReference(child_name));
        }
        let slot_taken = match side {
            Side::Left => parent_node.left.is_some(),
            Side::Right => parent_node.right.is_some(),
        };
        if slot_taken {
            return Err(DomainError::SlotOccupied {
                parent: parent_name,
                side,
            });
        }
        if child_node.attached {
            return Err(DomainError::AlreadyAttached(child_name));
        }
        if self.root == Some(child) {
            return Err(DomainError::RootAsChild(child_name));
        }
        if self.is_reachable(child, parent) {
            return Err(DomainError::CycleDetected {
                parent: parent_name,
                child: child_name,
            });
        }

        if let Some(node) = self.arena.get_mut(parent) {
            *node.slot_mut(side) = Some(child);
        }
        if let Some(node) = self.arena.get_mut(child) {
            node.attached = true;
        }
        trace!("linked '{}' as {} child of '{}'", child_name, side, parent_name);
        Ok(())
    }

    /// Marks an unattached node as the traversal entry point.
    #[instrument(level = "trace", skip(self))]
    pub fn set_root(&mut self, idx: Index) -> DomainResult<()> {
        let node = self.arena.get(idx).ok_or(DomainError::UnknownNode(idx))?;
        if node.attached {
            return Err(DomainError::NotARoot(node.data.name.clone()));
        }
        self.root = Some(idx);
        Ok(())
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn get_node(&self, idx: Index) -> Option<&TreeNode> {
        self.arena.get(idx)
    }

    /// Number of nodes in the arena, linked or not.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Pre-order iteration from the root.
    pub fn iter(&self) -> PreOrderIter<'_> {
        PreOrderIter::new(self, self.root)
    }

    /// Pre-order iteration of the subtree below `idx`.
    pub fn iter_from(&self, idx: Index) -> PreOrderIter<'_> {
        PreOrderIter::new(self, Some(idx))
    }

    pub fn iter_postorder(&self) -> PostOrderIter<'_> {
        PostOrderIter::new(self, self.root)
    }

    /// Height of the tree counted in nodes; 0 for a tree without root.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        self.calculate_depth(self.root)
    }

    fn calculate_depth(&self, node_idx: Option<Index>) -> usize {
        let mut max_depth = 0;
        let mut stack: Vec<(Index, usize)> = node_idx.into_iter().map(|idx| (idx, 1)).collect();

        while let Some((idx, depth)) = stack.pop() {
            if let Some(node) = self.get_node(idx) {
                max_depth = max_depth.max(depth);
                stack.extend(node.left.map(|child| (child, depth + 1)));
                stack.extend(node.right.map(|child| (child, depth + 1)));
            }
        }
        max_depth
    }

    /// Names of all nodes without children, left to right.
    #[instrument(level = "debug", skip(self))]
    pub fn leaf_nodes(&self) -> Vec<String> {
        self.iter()
            .filter(|(_, node)| node.is_leaf())
            .map(|(_, node)| node.data.name.clone())
            .collect()
    }

    fn is_reachable(&self, from: Index, target: Index) -> bool {
        self.iter_from(from).any(|(idx, _)| idx == target)
    }
}

/// Pre-order iterator driven by an explicit stack.
pub struct PreOrderIter<'a> {
    tree: &'a BinaryTree,
    stack: Vec<Index>,
}

impl<'a> PreOrderIter<'a> {
    fn new(tree: &'a BinaryTree, start: Option<Index>) -> Self {
        let mut stack = Vec::new();
        if let Some(start) = start {
            stack.push(start);
        }
        Self { tree, stack }
    }
}

impl<'a> Iterator for PreOrderIter<'a> {
    type Item = (Index, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.tree.get_node(current_idx) {
                // right first so that left is popped next
                self.stack.extend(node.right);
                self.stack.extend(node.left);
                return Some((current_idx, node));
            }
        }
        None
    }
}

/// Post-order iterator: both subtrees before their parent.
pub struct PostOrderIter<'a> {
    tree: &'a BinaryTree,
    stack: Vec<(Index, bool)>,
}

impl<'a> PostOrderIter<'a> {
    fn new(tree: &'a BinaryTree, start: Option<Index>) -> Self {
        let mut stack = Vec::new();
        if let Some(start) = start {
            stack.push((start, false));
        }
        Self { tree, stack }
    }
}

impl<'a> Iterator for PostOrderIter<'a> {
    type Item = (Index, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current_idx, expanded)) = self.stack.pop() {
            if let Some(node) = self.tree.get_node(current_idx) {
                if expanded {
                    return Some((current_idx, node));
                }
                self.stack.push((current_idx, true));
                self.stack.extend(node.right.map(|idx| (idx, false)));
                self.stack.extend(node.left.map(|idx| (idx, false)));
            }
        }
        None
    }
}
