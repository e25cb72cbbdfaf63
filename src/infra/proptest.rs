use std::fmt;

use proptest::{collection::vec, prelude::*};

use crate::{core::weight::Weight, storage::AdjList};

/// Strategy producing graphs with `1..=max_nodes` nodes and random edges
/// whose weights are drawn from `weight`.
pub fn graph<W>(
    max_nodes: usize,
    weight: impl Strategy<Value = W> + Clone,
) -> impl Strategy<Value = AdjList<(usize, usize, W)>>
where
    W: Weight + fmt::Debug,
{
    (1..=max_nodes).prop_flat_map(move |n| {
        vec((0..n, 0..n, weight.clone()), 0..=4 * n).prop_map(move |edges| {
            let mut graph = AdjList::new(n);

            for edge in edges {
                graph.add_edge(edge);
            }

            graph
        })
    })
}

/// Strategy producing graphs whose undirected form is connected: a chain
/// backbone `i -> i + 1` plus random extra edges.
///
/// The backbone also guarantees a directed route from any node to every
/// higher-indexed node.
pub fn graph_connected<W>(
    max_nodes: usize,
    weight: impl Strategy<Value = W> + Clone,
) -> impl Strategy<Value = AdjList<(usize, usize, W)>>
where
    W: Weight + fmt::Debug,
{
    (1..=max_nodes).prop_flat_map(move |n| {
        let backbone = vec(weight.clone(), n - 1);
        let extras = vec((0..n, 0..n, weight.clone()), 0..=2 * n);

        (backbone, extras).prop_map(move |(chain, extras)| {
            let mut graph = AdjList::new(n);

            for (node, weight) in chain.into_iter().enumerate() {
                graph.add_edge((node, node + 1, weight));
            }

            for edge in extras {
                graph.add_edge(edge);
            }

            graph
        })
    })
}
