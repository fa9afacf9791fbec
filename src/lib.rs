//! Depth-first, pre-order traversal of a fixed binary tree.
//!
//! The tree lives in an index-addressed arena ([`domain::BinaryTree`]); links are
//! checked when they are made, so traversal never has to guard against cycles.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;
