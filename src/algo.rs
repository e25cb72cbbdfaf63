pub mod shortest_path;
pub mod spanning_tree;

pub use shortest_path::{shortest_path, ShortestPath};
pub use spanning_tree::{minimum_spanning_tree, SpanningTree};
