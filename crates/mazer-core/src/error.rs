//! The [`MazeError`] type shared by every mazer crate.

use std::fmt;

/// Errors raised while building or solving a maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// Rows or columns below 2, or a cell count that overflows.
    InvalidDimension { rows: usize, cols: usize },
    /// The goal cannot be reached from the start. On a generated maze this
    /// means the graph is not a spanning tree.
    NoPathFound { from: usize, to: usize },
    /// A vertex ID outside `[0, count)`.
    VertexOutOfRange { vertex: usize, count: usize },
    /// An edge from a vertex to itself.
    SelfLoop { vertex: usize },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { rows, cols } => {
                write!(f, "rows and cols must both be >= 2 (got {rows}x{cols})")
            }
            Self::NoPathFound { from, to } => {
                write!(f, "no path from {from} to {to} exists in the graph")
            }
            Self::VertexOutOfRange { vertex, count } => {
                write!(f, "vertex {vertex} is not between 0 and {}", count.saturating_sub(1))
            }
            Self::SelfLoop { vertex } => write!(f, "self-loop on vertex {vertex}"),
        }
    }
}

impl std::error::Error for MazeError {}
