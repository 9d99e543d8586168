//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::node::NodeId;

/// Precondition violations detected before a tree operation is applied.
///
/// The tree operations themselves are total; these errors let a caller report
/// an edit that would have been a silent no-op.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("node not found: {0}")]
    NodeNotFound(NodeId),

    #[error("the root node cannot be deleted")]
    RootNotDeletable,

    #[error("no node at position: {0}")]
    InvalidPosition(String),
}

/// Result type for domain precondition checks.
pub type DomainResult<T> = Result<T, DomainError>;
