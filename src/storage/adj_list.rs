use crate::core::{
    edge::Edge,
    error::{AddEdgeError, AddEdgeErrorKind, EmptyGraphError},
};

/// Weighted directed graph with a node set fixed at construction.
///
/// Nodes are the indices `0..node_count`. Each node owns an
/// insertion-ordered bucket of its outgoing edges; edges are any type
/// implementing [`Edge`] and are moved into the graph on insertion. The
/// graph never shrinks and edges cannot be removed.
///
/// Insertion must be finished before querying. The borrow checker enforces
/// this: [`try_add_edge`](AdjList::try_add_edge) borrows the graph
/// exclusively while queries borrow it shared, so a frozen graph can serve
/// any number of concurrent queries.
///
/// # Examples
///
/// ```
/// use pathspan::{algo::ShortestPath, storage::AdjList};
///
/// let mut graph = AdjList::new(3);
///
/// graph.add_edge((0, 1, 2u32));
/// graph.add_edge((1, 2, 3u32));
///
/// let path = ShortestPath::on(&graph).run(0, 2).unwrap().unwrap();
/// assert_eq!(path.distance(), &5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjList<E> {
    buckets: Vec<Vec<E>>,
    edge_count: usize,
}

impl<E> AdjList<E> {
    /// Creates a graph with the given number of nodes and no edges.
    ///
    /// # Panics
    ///
    /// Panics if `node_count` is zero.
    pub fn new(node_count: usize) -> Self {
        match Self::try_new(node_count) {
            Ok(graph) => graph,
            Err(error) => panic!("{error}"),
        }
    }

    /// Creates a graph with the given number of nodes and no edges, or fails
    /// if `node_count` is zero.
    pub fn try_new(node_count: usize) -> Result<Self, EmptyGraphError> {
        if node_count < 1 {
            return Err(EmptyGraphError);
        }

        Ok(Self {
            buckets: std::iter::repeat_with(Vec::new).take(node_count).collect(),
            edge_count: 0,
        })
    }

    pub fn node_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Iterates over all edges of the graph, in bucket order and insertion
    /// order within a bucket.
    pub fn edges(&self) -> impl Iterator<Item = &E> {
        self.buckets.iter().flatten()
    }
}

impl<E> AdjList<E>
where
    E: Edge,
{
    /// Adds an edge to the bucket of its source node.
    ///
    /// # Panics
    ///
    /// Panics if the edge's source index is out of bounds. Use
    /// [`try_add_edge`](Self::try_add_edge) for a non-panicking variant.
    pub fn add_edge(&mut self, edge: E) {
        match self.try_add_edge(edge) {
            Ok(()) => {}
            Err(error) => panic!("{error}"),
        }
    }

    /// Adds an edge to the bucket of its source node, or hands it back if
    /// its source index is out of bounds. A failed insertion leaves the
    /// graph unchanged.
    ///
    /// The destination index is not validated here. An out-of-bounds
    /// destination is reported by the query that encounters the edge.
    pub fn try_add_edge(&mut self, edge: E) -> Result<(), AddEdgeError<E>> {
        let source = edge.source();

        match self.buckets.get_mut(source) {
            Some(bucket) => {
                bucket.push(edge);
                self.edge_count += 1;
                Ok(())
            }
            None => Err(AddEdgeError::new(edge, AddEdgeErrorKind::SourceOutOfBounds)),
        }
    }

    /// Returns the outgoing edges of a node, in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if `node` is out of bounds.
    pub fn outgoing(&self, node: usize) -> &[E] {
        &self.buckets[node]
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use crate::core::error::AddEdgeErrorKind;

    use super::*;

    #[test]
    fn try_new_zero_nodes() {
        assert_matches!(AdjList::<(usize, usize, u32)>::try_new(0), Err(EmptyGraphError));
    }

    #[test]
    #[should_panic]
    fn new_zero_nodes() {
        AdjList::<(usize, usize, u32)>::new(0);
    }

    #[test]
    fn add_edge_appends_to_source_bucket() {
        let mut graph = AdjList::new(3);

        graph.add_edge((0, 1, 1u32));
        graph.add_edge((2, 0, 2u32));
        graph.add_edge((0, 2, 3u32));

        assert_eq!(graph.outgoing(0), &[(0, 1, 1), (0, 2, 3)]);
        assert!(graph.outgoing(1).is_empty());
        assert_eq!(graph.outgoing(2), &[(2, 0, 2)]);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn add_edge_source_out_of_bounds() {
        let mut graph = AdjList::new(2);

        graph.add_edge((0, 1, 1u32));

        let error = graph.try_add_edge((2, 0, 1)).unwrap_err();
        assert_eq!(error.kind, AddEdgeErrorKind::SourceOutOfBounds);
        // The offending edge is handed back and the graph is unchanged.
        assert_eq!(error.edge, (2, 0, 1));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn edges_in_bucket_order() {
        let mut graph = AdjList::new(3);

        graph.add_edge((2, 0, 1u32));
        graph.add_edge((0, 1, 2u32));
        graph.add_edge((0, 2, 3u32));

        let edges = graph.edges().collect::<Vec<_>>();
        assert_eq!(edges, vec![&(0, 1, 2), &(0, 2, 3), &(2, 0, 1)]);
    }

    #[test]
    fn destination_not_validated_on_insertion() {
        let mut graph = AdjList::new(2);

        assert_matches!(graph.try_add_edge((0, 7, 1u32)), Ok(()));
        assert_eq!(graph.edge_count(), 1);
    }
}
