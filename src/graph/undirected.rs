//! Undirected graphs.

use std::collections::HashSet;

use super::edge_set::EdgeSetGraph;
use crate::clique::{self, CliqueEnumerator};
use crate::edge::{Edge, Vertex};

/// An undirected simple graph: a vertex set and a set of [`Edge`]s.
///
/// All structural operations come from [`EdgeSetGraph`]; this alias adds
/// clique queries over symmetric adjacency.
pub type Graph<V> = EdgeSetGraph<V, Edge<V>>;

impl<V: Vertex> EdgeSetGraph<V, Edge<V>> {
    /// Returns a clique enumerator over this graph's current adjacency.
    ///
    /// The enumerator is a snapshot; later mutations of the graph do not
    /// affect it.
    pub fn clique_enumerator(&self) -> CliqueEnumerator<V> {
        CliqueEnumerator::from_adjacency(self.adjacency_map())
    }

    /// Returns every maximal clique of the graph.
    ///
    /// Exponential in the worst case; intended for small to moderate graphs.
    pub fn cliques(&self) -> Vec<HashSet<V>> {
        self.clique_enumerator().cliques()
    }

    /// Returns a maximal clique of largest cardinality.
    ///
    /// When several maximum cliques exist, which one is returned is
    /// unspecified.
    pub fn maximum_clique(&self) -> HashSet<V> {
        self.clique_enumerator().maximum_clique()
    }

    /// Returns `true` if every two distinct members of `vertices` share an edge.
    pub fn is_clique(&self, vertices: &HashSet<V>) -> bool {
        vertices.iter().all(|v| self.contains_vertex(v))
            && clique::is_clique(vertices, |v| self.neighbors(v))
    }
}
