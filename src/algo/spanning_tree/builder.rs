use crate::{core::edge::Edge, storage::AdjList};

use super::{kruskal::kruskal, Error, SpanningTree};

/// Builder for [`SpanningTree`].
pub struct SpanningTreeBuilder<'a, E> {
    graph: &'a AdjList<E>,
}

impl<'a, E> SpanningTree<'a, E>
where
    E: Edge,
{
    /// Creates the algorithm builder for the given graph.
    pub fn on(graph: &'a AdjList<E>) -> SpanningTreeBuilder<'a, E> {
        SpanningTreeBuilder { graph }
    }
}

impl<'a, E> SpanningTreeBuilder<'a, E>
where
    E: Edge,
{
    /// Builds the tree.
    ///
    /// Returns `Ok(None)` if the graph, viewed as undirected, is
    /// disconnected.
    pub fn run(self) -> Result<Option<SpanningTree<'a, E>>, Error> {
        kruskal(self.graph)
    }
}
