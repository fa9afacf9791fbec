//! Domain layer: the binary tree, its construction and traversal
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod builder;
pub mod error;
pub mod render;
pub mod traversal;

pub use arena::{BinaryTree, NodeData, PostOrderIter, PreOrderIter, Side, TreeNode};
pub use builder::{sample_tree, TreeBuilder};
pub use error::{DomainError, DomainResult};
pub use render::TreeRender;
pub use traversal::{dfs, dfs_iterative, traverse, Recorder, Strategy, Visit};
