/*
Rendering of a BinaryTree with termtree.
Child labels carry the slot they hang from, so one-child nodes stay unambiguous.
 */
use generational_arena::Index;
use termtree::Tree;
use tracing::instrument;

use crate::domain::arena::{BinaryTree, Side};

/// Builds a printable tree.
///
/// Rendering recurses once per level, so it is meant for shallow trees; deep
/// chains (tens of thousands of levels) exceed the default thread stack.
pub trait TreeRender {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeRender for BinaryTree {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        match self.root().and_then(|idx| self.get_node(idx).map(|node| (idx, node))) {
            Some((root_idx, root)) => {
                let mut tree = Tree::new(root.data.name.clone());
                build_tree(self, root_idx, &mut tree);
                tree
            }
            None => Tree::new("Empty tree".to_string()),
        }
    }
}

fn build_tree(arena: &BinaryTree, node_idx: Index, parent_tree: &mut Tree<String>) {
    let Some(node) = arena.get_node(node_idx) else {
        return;
    };
    for (side, child_idx) in [(Side::Left, node.left), (Side::Right, node.right)] {
        let Some(child_idx) = child_idx else {
            continue;
        };
        if let Some(child) = arena.get_node(child_idx) {
            let mut child_tree = Tree::new(format!("{}: {}", side, child.data.name));
            build_tree(arena, child_idx, &mut child_tree);
            parent_tree.push(child_tree);
        }
    }
}
