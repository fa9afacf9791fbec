//! Name-addressed construction of binary trees.

use std::collections::HashMap;

use generational_arena::Index;
use tracing::{debug, instrument};

use crate::domain::arena::{BinaryTree, NodeData, Side};
use crate::domain::error::{DomainError, DomainResult};

/// Builds a [`BinaryTree`] from node names.
///
/// Names are unique within a builder. Every link goes through
/// [`BinaryTree::link`], so the finished tree upholds the same invariants.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    tree: BinaryTree,
    by_name: HashMap<String, Index>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a childless node.
    pub fn node(mut self, name: &str) -> DomainResult<Self> {
        if self.by_name.contains_key(name) {
            return Err(DomainError::DuplicateName(name.to_string()));
        }
        let idx = self.tree.insert(NodeData::new(name));
        self.by_name.insert(name.to_string(), idx);
        Ok(self)
    }

    /// Declares several childless nodes in order.
    pub fn nodes<'a>(self, names: impl IntoIterator<Item = &'a str>) -> DomainResult<Self> {
        names.into_iter().try_fold(self, |builder, name| builder.node(name))
    }

    pub fn left(self, parent: &str, child: &str) -> DomainResult<Self> {
        self.link(parent, Side::Left, child)
    }

    pub fn right(self, parent: &str, child: &str) -> DomainResult<Self> {
        self.link(parent, Side::Right, child)
    }

    pub fn link(mut self, parent: &str, side: Side, child: &str) -> DomainResult<Self> {
        let parent = self.lookup(parent)?;
        let child = self.lookup(child)?;
        self.tree.link(parent, side, child)?;
        Ok(self)
    }

    pub fn root(mut self, name: &str) -> DomainResult<Self> {
        let idx = self.lookup(name)?;
        self.tree.set_root(idx)?;
        Ok(self)
    }

    pub fn build(self) -> BinaryTree {
        self.tree
    }

    fn lookup(&self, name: &str) -> DomainResult<Index> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| DomainError::UnknownName(name.to_string()))
    }
}

/// The fixed seven-node tree searched by the binary.
///
/// ```text
/// root
/// ├── left: a
/// │   ├── left: c
/// │   └── right: d
/// │       └── left: e
/// └── right: b
///     └── right: f
/// ```
#[instrument(level = "debug")]
pub fn sample_tree() -> DomainResult<BinaryTree> {
    let tree = TreeBuilder::new()
        .nodes(["root", "a", "b", "c", "d", "e", "f"])?
        .left("root", "a")?
        .right("root", "b")?
        .left("a", "c")?
        .right("a", "d")?
        .left("d", "e")?
        .right("b", "f")?
        .root("root")?
        .build();
    debug!("sample tree built with {} nodes", tree.len());
    Ok(tree)
}
