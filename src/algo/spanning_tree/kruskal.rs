use std::{cmp::Reverse, collections::BinaryHeap, mem};

use crate::{
    core::{
        edge::Edge,
        weight::{Weight, Weighted},
    },
    storage::AdjList,
};

use super::{Error, SpanningTree};

// Partition of the node indices into groups connected by committed edges.
// Merging moves the smaller group into the larger one, measured by
// committed-edge count, and repoints every node of the absorbed group.
#[derive(Debug)]
struct ComponentSets<'a, E> {
    group: Vec<usize>,
    members: Vec<Vec<usize>>,
    committed: Vec<Vec<&'a E>>,
}

impl<'a, E> ComponentSets<'a, E>
where
    E: Edge,
{
    fn new(node_count: usize) -> Self {
        Self {
            group: (0..node_count).collect(),
            members: (0..node_count).map(|node| vec![node]).collect(),
            committed: (0..node_count).map(|_| Vec::new()).collect(),
        }
    }

    fn same(&self, u: usize, v: usize) -> bool {
        self.group[u] == self.group[v]
    }

    // Merges the groups of the edge's endpoints, commits the edge into the
    // surviving group and returns it together with its committed-edge count.
    fn merge(&mut self, edge: &'a E) -> (usize, usize) {
        let a = self.group[edge.source()];
        let b = self.group[edge.destination()];

        let (surviving, absorbed) = if self.committed[a].len() >= self.committed[b].len() {
            (a, b)
        } else {
            (b, a)
        };

        let moved = mem::take(&mut self.members[absorbed]);
        for &node in &moved {
            self.group[node] = surviving;
        }
        self.members[surviving].extend(moved);

        let edges = mem::take(&mut self.committed[absorbed]);
        self.committed[surviving].extend(edges);
        self.committed[surviving].push(edge);

        (surviving, self.committed[surviving].len())
    }

    fn take_committed(&mut self, group: usize) -> Vec<&'a E> {
        mem::take(&mut self.committed[group])
    }
}

pub fn kruskal<'a, E>(graph: &'a AdjList<E>) -> Result<Option<SpanningTree<'a, E>>, Error>
where
    E: Edge,
{
    let n = graph.node_count();

    // A single node is spanned by the empty tree. The general loop below
    // cannot terminate successfully when zero committed edges are required.
    if n == 1 {
        return Ok(Some(SpanningTree {
            edges: Vec::new(),
            weight: E::Weight::zero(),
        }));
    }

    let mut candidates = BinaryHeap::with_capacity(graph.edge_count());

    for edge in graph.edges() {
        let ord = <E::Weight as Weight>::Ord::from(edge.weight());
        candidates.push(Reverse(Weighted(edge, ord)));
    }

    let mut components = ComponentSets::new(n);

    while let Some(Reverse(Weighted(edge, _))) = candidates.pop() {
        if edge.destination() >= n {
            return Err(Error::DestinationOutOfBounds);
        }

        // Endpoints in the same group: the edge would close a cycle.
        if components.same(edge.source(), edge.destination()) {
            continue;
        }

        let (group, committed) = components.merge(edge);

        if committed == n - 1 {
            let edges = components.take_committed(group);
            let weight = edges
                .iter()
                .fold(E::Weight::zero(), |total, edge| total + edge.weight());

            return Ok(Some(SpanningTree { edges, weight }));
        }
    }

    Ok(None)
}
