//! Directed graphs.
//!
//! Besides the direction-agnostic queries inherited from [`EdgeSetGraph`]
//! (`incident_edges`, `neighbors`, `degree`), a directed graph answers
//! arc-aware ones: outgoing arcs, out/in neighbors and degrees, and mutual
//! neighbors.
//!
//! Cliques in a directed graph are taken over *mutual* adjacency: `u` and `v`
//! are adjacent iff both `u -> v` and `v -> u` are arcs. A single arc does not
//! make two vertices part of the same clique.

use std::collections::{HashMap, HashSet};

use super::edge_set::EdgeSetGraph;
use crate::clique::{self, CliqueEnumerator};
use crate::edge::{DirectedEdge, Vertex};

/// A directed simple graph: a vertex set and a set of [`DirectedEdge`]s.
///
/// `contains_edge_between(a, b)` and `remove_edge_between(a, b)` only look at
/// the arc `a -> b`; `connect_graph` adds the bridging arc `vertex1 -> vertex2`.
pub type DirectedGraph<V> = EdgeSetGraph<V, DirectedEdge<V>>;

impl<V: Vertex> EdgeSetGraph<V, DirectedEdge<V>> {
    /// Iterates over the arcs leaving `vertex`.
    pub fn incident_arcs<'a>(&'a self, vertex: &'a V) -> impl Iterator<Item = &'a DirectedEdge<V>> + 'a {
        self.edges().iter().filter(move |arc| arc.source() == vertex)
    }

    /// Iterates over the arcs entering `vertex`.
    pub fn incoming_arcs<'a>(&'a self, vertex: &'a V) -> impl Iterator<Item = &'a DirectedEdge<V>> + 'a {
        self.edges().iter().filter(move |arc| arc.target() == vertex)
    }

    /// Returns the targets of all arcs leaving `vertex`.
    pub fn out_neighbors(&self, vertex: &V) -> HashSet<V> {
        self.incident_arcs(vertex).map(|arc| arc.target().clone()).collect()
    }

    /// Returns the sources of all arcs entering `vertex`.
    pub fn in_neighbors(&self, vertex: &V) -> HashSet<V> {
        self.incoming_arcs(vertex).map(|arc| arc.source().clone()).collect()
    }

    /// Returns the vertices joined to `vertex` by arcs in both directions.
    pub fn mutual_neighbors(&self, vertex: &V) -> HashSet<V> {
        let outgoing = self.out_neighbors(vertex);
        self.incoming_arcs(vertex)
            .map(DirectedEdge::source)
            .filter(|source| outgoing.contains(*source))
            .cloned()
            .collect()
    }

    /// Returns the number of arcs leaving `vertex`.
    pub fn out_degree(&self, vertex: &V) -> usize {
        self.incident_arcs(vertex).count()
    }

    /// Returns the number of arcs entering `vertex`.
    pub fn in_degree(&self, vertex: &V) -> usize {
        self.incoming_arcs(vertex).count()
    }

    /// Builds the mutual-adjacency map of every vertex in one pass over the arcs.
    fn mutual_adjacency_map(&self) -> HashMap<V, HashSet<V>> {
        let mut adjacency: HashMap<V, HashSet<V>> = self
            .vertices()
            .iter()
            .map(|v| (v.clone(), HashSet::new()))
            .collect();
        for arc in self.edges() {
            if self.contains_edge(&arc.reversed()) {
                if let Some(adjacent) = adjacency.get_mut(arc.source()) {
                    adjacent.insert(arc.target().clone());
                }
            }
        }
        adjacency
    }

    /// Returns a clique enumerator over mutual adjacency.
    pub fn clique_enumerator(&self) -> CliqueEnumerator<V> {
        CliqueEnumerator::from_adjacency(self.mutual_adjacency_map())
    }

    /// Returns every maximal set of pairwise mutually adjacent vertices.
    pub fn cliques(&self) -> Vec<HashSet<V>> {
        self.clique_enumerator().cliques()
    }

    /// Returns a largest set of pairwise mutually adjacent vertices.
    ///
    /// When several exist, which one is returned is unspecified.
    pub fn maximum_clique(&self) -> HashSet<V> {
        self.clique_enumerator().maximum_clique()
    }

    /// Returns `true` if every two distinct members of `vertices` are joined
    /// by arcs in both directions.
    pub fn is_clique(&self, vertices: &HashSet<V>) -> bool {
        vertices.iter().all(|v| self.contains_vertex(v))
            && clique::is_clique(vertices, |v| self.mutual_neighbors(v))
    }
}
