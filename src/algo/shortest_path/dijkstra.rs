use std::{cmp::Reverse, collections::BinaryHeap};

use fixedbitset::FixedBitSet;

use crate::{
    core::{
        edge::Edge,
        weight::{Weight, Weighted},
    },
    storage::AdjList,
};

use super::{Error, ShortestPath};

// Partial route from the search origin. Invariants: `terminal` is the
// destination of the last edge (or the origin for an empty route) and
// `distance` is the sum of the edge weights.
#[derive(Debug)]
struct Path<'a, E>
where
    E: Edge,
{
    edges: Vec<&'a E>,
    terminal: usize,
    distance: E::Weight,
}

impl<'a, E> Path<'a, E>
where
    E: Edge,
{
    fn start(origin: usize) -> Self {
        Self {
            edges: Vec::new(),
            terminal: origin,
            distance: E::Weight::zero(),
        }
    }

    fn extended(&self, edge: &'a E) -> Self {
        let mut edges = Vec::with_capacity(self.edges.len() + 1);
        edges.extend_from_slice(&self.edges);
        edges.push(edge);

        Self {
            edges,
            terminal: edge.destination(),
            distance: self.distance.clone() + edge.weight(),
        }
    }
}

pub fn dijkstra<'a, E>(
    graph: &'a AdjList<E>,
    source: usize,
    goal: usize,
) -> Result<Option<ShortestPath<'a, E>>, Error>
where
    E: Edge,
{
    let n = graph.node_count();

    if source >= n {
        return Err(Error::SourceOutOfBounds);
    }

    if goal >= n {
        return Err(Error::GoalOutOfBounds);
    }

    let mut finalized = FixedBitSet::with_capacity(n);
    let mut frontier = BinaryHeap::new();

    frontier.push(Reverse(Weighted(
        Path::start(source),
        <E::Weight as Weight>::Ord::from(E::Weight::zero()),
    )));

    while let Some(Reverse(Weighted(path, _))) = frontier.pop() {
        let node = path.terminal;

        // A cheaper path to this node has already been finalized. With
        // non-negative weights this one cannot improve on it.
        if finalized.contains(node) {
            continue;
        }

        finalized.insert(node);

        if node == goal {
            let Path { edges, distance, .. } = path;
            return Ok(Some(ShortestPath {
                source,
                goal,
                edges,
                distance,
            }));
        }

        for edge in graph.outgoing(node) {
            let next = edge.destination();

            if next >= n {
                return Err(Error::DestinationOutOfBounds);
            }

            if finalized.contains(next) {
                continue;
            }

            // The check for unsignedness should eliminate the negativity
            // check, because the implementation of `is_unsigned` is always a
            // constant boolean in practice.
            if !E::Weight::is_unsigned() && edge.weight() < E::Weight::zero() {
                return Err(Error::NegativeWeight);
            }

            let extended = path.extended(edge);
            let ord = <E::Weight as Weight>::Ord::from(extended.distance.clone());
            frontier.push(Reverse(Weighted(extended, ord)));
        }
    }

    Ok(None)
}
