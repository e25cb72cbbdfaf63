#![allow(dead_code)]

use fastrand::Rng;
use pathspan::storage::AdjList;

pub const RANDOM_SEED: u64 = 0x7c3a1d5b9e40f261;

/// Random directed graph with `node_count` nodes and roughly
/// `density * node_count * (node_count - 1)` edges.
pub fn random_graph(node_count: usize, density: f32, rng: &mut Rng) -> AdjList<(usize, usize, u32)> {
    let mut graph = AdjList::new(node_count);

    let edge_count = ((node_count * (node_count - 1)) as f32 * density) as usize;

    for _ in 0..edge_count {
        let source = rng.usize(0..node_count);
        let destination = rng.usize(0..node_count);

        graph.add_edge((source, destination, rng.u32(1..100)));
    }

    graph
}
