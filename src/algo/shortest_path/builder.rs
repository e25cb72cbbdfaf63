use crate::{core::edge::Edge, storage::AdjList};

use super::{dijkstra::dijkstra, Error, ShortestPath};

/// Builder for [`ShortestPath`].
pub struct ShortestPathBuilder<'a, E> {
    graph: &'a AdjList<E>,
}

impl<'a, E> ShortestPath<'a, E>
where
    E: Edge,
{
    /// Creates the algorithm builder for the given graph.
    pub fn on(graph: &'a AdjList<E>) -> ShortestPathBuilder<'a, E> {
        ShortestPathBuilder { graph }
    }
}

impl<'a, E> ShortestPathBuilder<'a, E>
where
    E: Edge,
{
    /// Runs the search from `source` to `goal`.
    ///
    /// Returns `Ok(None)` if no route exists. Fails before any search work
    /// if either node index is out of bounds.
    pub fn run(self, source: usize, goal: usize) -> Result<Option<ShortestPath<'a, E>>, Error> {
        dijkstra(self.graph, source, goal)
    }
}
