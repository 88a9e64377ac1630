//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of the forest contract.
///
/// `ParentOutOfRange` and `SelfParent` are malformed references in the input;
/// `CycleDetected` is a structural violation of the forest property.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid input: node {node} references parent {parent}, expected an index below {len}")]
    ParentOutOfRange {
        node: usize,
        parent: usize,
        len: usize,
    },

    #[error("invalid input: node {node} is its own parent")]
    SelfParent { node: usize },

    #[error("structural error: cycle detected through node {node}")]
    CycleDetected { node: usize },
}

impl DomainError {
    /// Malformed parent reference, rejected before any node is built.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            DomainError::ParentOutOfRange { .. } | DomainError::SelfParent { .. }
        )
    }

    /// The parent links do not form a forest.
    pub fn is_structural(&self) -> bool {
        matches!(self, DomainError::CycleDetected { .. })
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
