use std::fmt;

use thiserror::Error;

/// The error returned when constructing a graph with zero nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("graph must have at least one node")]
pub struct EmptyGraphError;

#[derive(Debug, Error, PartialEq)]
#[error("adding edge failed: {kind}")]
pub struct AddEdgeError<E> {
    /// The edge that could not be added, handed back to the caller.
    pub edge: E,
    pub kind: AddEdgeErrorKind,
}

impl<E> AddEdgeError<E> {
    pub fn new(edge: E, kind: AddEdgeErrorKind) -> Self {
        Self { edge, kind }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddEdgeErrorKind {
    SourceOutOfBounds,
}

impl fmt::Display for AddEdgeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            AddEdgeErrorKind::SourceOutOfBounds => "source node index is out of bounds",
        };
        f.write_str(reason)
    }
}
