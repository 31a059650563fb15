//! Set-valued graph structures.
//!
//! - `edge_set`: the generic `(vertices, edges)` store shared by both graph kinds
//! - `undirected`: [`Graph`], symmetric adjacency and clique queries
//! - `directed`: [`DirectedGraph`], arc-aware queries and mutual-adjacency cliques
//! - `tree`: [`Tree`], a rooted directed graph with cascading deletion

pub mod directed;
pub mod edge_set;
pub mod tree;
pub mod undirected;
mod invariant;

pub use directed::DirectedGraph;
pub use edge_set::EdgeSetGraph;
pub use tree::Tree;
pub use undirected::Graph;
