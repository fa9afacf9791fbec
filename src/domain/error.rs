//! Domain-level errors (no external dependencies)

use generational_arena::Index;
use thiserror::Error;

use crate::domain::arena::Side;

/// Domain errors represent violations of the tree invariant during wiring.
/// Traversal never produces them.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("node not in tree: {0:?}")]
    UnknownNode(Index),

    #[error("unknown node name: {0}")]
    UnknownName(String),

    #[error("duplicate node name: {0}")]
    DuplicateName(String),

    #[error("node '{0}' cannot be its own child")]
    SelfReference(String),

    #[error("{side} child of '{parent}' is already set")]
    SlotOccupied { parent: String, side: Side },

    #[error("node '{0}' already has a parent")]
    AlreadyAttached(String),

    #[error("root node '{0}' cannot be linked as a child")]
    RootAsChild(String),

    #[error("linking '{child}' under '{parent}' would create a cycle")]
    CycleDetected { parent: String, child: String },

    #[error("node '{0}' has a parent and cannot be the root")]
    NotARoot(String),
}

/// Result type for tree construction.
pub type DomainResult<T> = Result<T, DomainError>;
