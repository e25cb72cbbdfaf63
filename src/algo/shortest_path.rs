//! Find the shortest path between two nodes of a weighted directed graph.
//!
//! The search is Dijkstra's algorithm over a min-priority frontier of
//! partial paths, which requires all edge weights to be non-negative. A
//! negative weight encountered during the search is reported as an error.
//!
//! # Examples
//!
//! ```
//! use pathspan::{algo::ShortestPath, storage::AdjList};
//!
//! let mut graph = AdjList::new(4);
//!
//! graph.add_edge((0, 1, 1u32));
//! graph.add_edge((1, 2, 2u32));
//! graph.add_edge((0, 2, 5u32));
//! graph.add_edge((2, 3, 1u32));
//!
//! let path = ShortestPath::on(&graph).run(0, 3).unwrap().expect("route exists");
//!
//! assert_eq!(path.distance(), &4);
//! assert_eq!(path.len(), 3);
//! ```

use thiserror::Error;

use crate::{core::edge::Edge, storage::AdjList};

mod builder;
mod dijkstra;

pub use builder::ShortestPathBuilder;

/// Shortest path found between two nodes.
///
/// The path borrows its edges from the graph it was found on. Consuming it
/// with [`IntoIterator`] yields the edges from `source` to `goal` in route
/// order; a path from a node to itself has no edges and zero distance.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug)]
pub struct ShortestPath<'a, E>
where
    E: Edge,
{
    source: usize,
    goal: usize,
    edges: Vec<&'a E>,
    distance: E::Weight,
}

impl<'a, E> ShortestPath<'a, E>
where
    E: Edge,
{
    /// Node the search was started from.
    pub fn source(&self) -> usize {
        self.source
    }

    /// Node the path leads to.
    pub fn goal(&self) -> usize {
        self.goal
    }

    /// Sum of the weights of the edges on the path.
    pub fn distance(&self) -> &E::Weight {
        &self.distance
    }

    /// The edges of the path, in route order.
    pub fn edges(&self) -> &[&'a E] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl<'a, E> IntoIterator for ShortestPath<'a, E>
where
    E: Edge,
{
    type Item = &'a E;
    type IntoIter = std::vec::IntoIter<&'a E>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.into_iter()
    }
}

/// The error encountered during a [`ShortestPath`] run.
///
/// An unreachable goal is not an error; it is reported as `Ok(None)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The source node index is outside the node range of the graph.
    #[error("source node index is out of bounds")]
    SourceOutOfBounds,

    /// The goal node index is outside the node range of the graph.
    #[error("goal node index is out of bounds")]
    GoalOutOfBounds,

    /// An edge with negative weight encountered.
    #[error("edge with negative weight encountered")]
    NegativeWeight,

    /// A stored edge points outside the node range of the graph.
    ///
    /// This indicates that an edge with an out-of-bounds destination was
    /// inserted; the store does not validate destinations.
    #[error("edge destination is out of bounds")]
    DestinationOutOfBounds,
}

/// Finds the shortest path between two nodes of the graph.
///
/// Convenience for [`ShortestPath::on`] followed by
/// [`run`](ShortestPathBuilder::run).
pub fn shortest_path<E>(
    graph: &AdjList<E>,
    source: usize,
    goal: usize,
) -> Result<Option<ShortestPath<'_, E>>, Error>
where
    E: Edge,
{
    ShortestPath::on(graph).run(source, goal)
}
