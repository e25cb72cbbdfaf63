//! Build a minimum spanning tree of a weighted graph.
//!
//! Edge direction is ignored for connectivity: every edge connects its two
//! endpoints regardless of which one is the source. The construction is
//! Kruskal's algorithm with connectivity tracked by merging component
//! groups, smaller into larger by committed-edge count.
//!
//! # Examples
//!
//! ```
//! use pathspan::{algo::SpanningTree, storage::AdjList};
//!
//! let mut graph = AdjList::new(4);
//!
//! graph.add_edge((0, 1, 1u32));
//! graph.add_edge((1, 2, 2u32));
//! graph.add_edge((0, 2, 5u32));
//! graph.add_edge((2, 3, 1u32));
//!
//! let tree = SpanningTree::on(&graph).run().unwrap().expect("graph is connected");
//!
//! assert_eq!(tree.len(), 3);
//! assert_eq!(tree.weight(), &4);
//! ```

use thiserror::Error;

use crate::{core::edge::Edge, storage::AdjList};

mod builder;
mod kruskal;

pub use builder::SpanningTreeBuilder;

/// Minimum spanning tree of a graph, treated as undirected.
///
/// The tree borrows its edges from the graph it was built on and always
/// holds exactly `node_count - 1` of them. The order in which consuming it
/// with [`IntoIterator`] yields the edges is unspecified.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug)]
pub struct SpanningTree<'a, E>
where
    E: Edge,
{
    edges: Vec<&'a E>,
    weight: E::Weight,
}

impl<'a, E> SpanningTree<'a, E>
where
    E: Edge,
{
    /// Sum of the weights of the tree edges.
    pub fn weight(&self) -> &E::Weight {
        &self.weight
    }

    /// The edges of the tree, in unspecified order.
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

impl<'a, E> IntoIterator for SpanningTree<'a, E>
where
    E: Edge,
{
    type Item = &'a E;
    type IntoIter = std::vec::IntoIter<&'a E>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.into_iter()
    }
}

/// The error encountered during a [`SpanningTree`] run.
///
/// A disconnected graph is not an error; it is reported as `Ok(None)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A stored edge points outside the node range of the graph.
    ///
    /// This indicates that an edge with an out-of-bounds destination was
    /// inserted; the store does not validate destinations.
    #[error("edge destination is out of bounds")]
    DestinationOutOfBounds,
}

/// Builds a minimum spanning tree of the graph.
///
/// Convenience for [`SpanningTree::on`] followed by
/// [`run`](SpanningTreeBuilder::run).
pub fn minimum_spanning_tree<E>(
    graph: &AdjList<E>,
) -> Result<Option<SpanningTree<'_, E>>, Error>
where
    E: Edge,
{
    SpanningTree::on(graph).run()
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use proptest::prelude::*;
    use rustc_hash::FxHashSet;

    use crate::infra::proptest as strategy;

    use super::*;

    fn create_basic_graph() -> AdjList<(usize, usize, u32)> {
        let mut graph = AdjList::new(4);

        graph.add_edge((0, 1, 1));
        graph.add_edge((1, 2, 2));
        graph.add_edge((0, 2, 5));
        graph.add_edge((2, 3, 1));

        graph
    }

    #[test]
    fn kruskal_basic() {
        let graph = create_basic_graph();
        let tree = SpanningTree::on(&graph).run().unwrap().unwrap();

        assert_eq!(tree.len(), 3);
        assert_eq!(tree.weight(), &4);
        // The only edge not in the tree is the expensive one.
        assert!(!tree.edges().contains(&&(0, 2, 5)));
    }

    #[test]
    fn kruskal_ignores_edge_direction() {
        let mut graph = AdjList::new(3);

        // No node is reachable from node 2, but the undirected form is
        // connected.
        graph.add_edge((0, 2, 1u32));
        graph.add_edge((1, 2, 2u32));

        let tree = minimum_spanning_tree(&graph).unwrap().unwrap();
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.weight(), &3);
    }

    #[test]
    fn kruskal_disconnected() {
        let mut graph = AdjList::new(4);

        graph.add_edge((0, 1, 1u32));
        graph.add_edge((2, 3, 1u32));

        assert_matches!(SpanningTree::on(&graph).run(), Ok(None));
    }

    #[test]
    fn kruskal_single_node() {
        let graph = AdjList::<(usize, usize, u32)>::new(1);
        let tree = SpanningTree::on(&graph).run().unwrap().unwrap();

        assert!(tree.is_empty());
        assert_eq!(tree.weight(), &0);
    }

    #[test]
    fn kruskal_single_node_with_self_loop() {
        let mut graph = AdjList::new(1);
        graph.add_edge((0, 0, 7u32));

        let tree = SpanningTree::on(&graph).run().unwrap().unwrap();
        assert!(tree.is_empty());
    }

    #[test]
    fn kruskal_two_nodes_no_edges() {
        let graph = AdjList::<(usize, usize, u32)>::new(2);

        assert_matches!(SpanningTree::on(&graph).run(), Ok(None));
    }

    #[test]
    fn kruskal_self_loops_discarded() {
        let mut graph = AdjList::new(2);

        graph.add_edge((0, 0, 1u32));
        graph.add_edge((0, 1, 3u32));

        let tree = minimum_spanning_tree(&graph).unwrap().unwrap();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.weight(), &3);
    }

    #[test]
    fn kruskal_parallel_edges() {
        let mut graph = AdjList::new(2);

        graph.add_edge((0, 1, 5u32));
        graph.add_edge((1, 0, 2u32));
        graph.add_edge((0, 1, 9u32));

        let tree = minimum_spanning_tree(&graph).unwrap().unwrap();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.weight(), &2);
    }

    #[test]
    fn kruskal_equal_weights() {
        let mut graph = AdjList::new(3);

        graph.add_edge((0, 1, 1u32));
        graph.add_edge((1, 2, 1u32));
        graph.add_edge((2, 0, 1u32));

        // Which two of the three tied edges are committed is unspecified;
        // the count and total weight are guaranteed.
        let tree = minimum_spanning_tree(&graph).unwrap().unwrap();
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.weight(), &2);
    }

    #[test]
    fn kruskal_destination_out_of_bounds() {
        let mut graph = AdjList::new(2);

        graph.add_edge((0, 7, 1u32));

        assert_matches!(
            SpanningTree::on(&graph).run(),
            Err(Error::DestinationOutOfBounds)
        );
    }

    #[test]
    fn kruskal_negative_weights_allowed() {
        let mut graph = AdjList::new(3);

        graph.add_edge((0, 1, -2i32));
        graph.add_edge((1, 2, 4i32));
        graph.add_edge((0, 2, 3i32));

        let tree = minimum_spanning_tree(&graph).unwrap().unwrap();
        assert_eq!(tree.weight(), &1);
    }

    #[test]
    fn kruskal_repeated_runs_agree() {
        let graph = create_basic_graph();

        let first = minimum_spanning_tree(&graph).unwrap().unwrap();
        let second = minimum_spanning_tree(&graph).unwrap().unwrap();

        assert_eq!(first.weight(), second.weight());
        assert_eq!(first.len(), second.len());
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_tree_spans_connected_graph(graph in strategy::graph_connected(16, 0u32..100)) {
            let n = graph.node_count();
            let tree = SpanningTree::on(&graph).run().unwrap().unwrap();

            prop_assert_eq!(tree.len(), n - 1);

            // A cycle-free edge set of size n - 1 touching all n nodes spans
            // the graph.
            let mut touched = FxHashSet::default();
            touched.insert(0);
            for edge in tree.edges() {
                touched.insert(edge.source());
                touched.insert(edge.destination());
            }
            prop_assert_eq!(touched.len(), n);
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_tree_size_on_any_graph(graph in strategy::graph(16, 0u32..100)) {
            let n = graph.node_count();

            if let Some(tree) = SpanningTree::on(&graph).run().unwrap() {
                prop_assert_eq!(tree.len(), n - 1);
            }
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_repeated_runs_agree(graph in strategy::graph(16, 0u32..100)) {
            let first = minimum_spanning_tree(&graph).unwrap().map(|tree| *tree.weight());
            let second = minimum_spanning_tree(&graph).unwrap().map(|tree| *tree.weight());

            prop_assert_eq!(first, second);
        }
    }
}
