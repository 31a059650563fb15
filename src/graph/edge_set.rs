//! The generic `(vertices, edges)` store behind [`Graph`](crate::Graph) and
//! [`DirectedGraph`](crate::DirectedGraph).
//!
//! The graph exclusively owns both sets. Every mutator keeps the edge set
//! closed over the vertex set: inserting an edge inserts its endpoints, and
//! removing a vertex removes every incident edge before returning.

use core::fmt;
use core::hash::{Hash, Hasher};
use std::collections::{HashMap, HashSet};

use super::invariant::invariant_assert_msg;
use crate::edge::{EdgeLike, Vertex};
use crate::error::{ConnectionSide, GraphError, Result};
use crate::hash::StructuralHasher;
use crate::macros::trace_event;

/// A vertex set plus a set of edges of kind `E` over it.
///
/// Equality is set equality of both components; insertion order and the
/// internal hash state play no part. [`Hash`] is derived from
/// [`structural_hash`](Self::structural_hash) and therefore agrees with it.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_vertex` / `insert_edge` | \(O(1)\) expected | hash-set insert |
/// | `remove_vertex` | \(O(m)\) | scans the edge set for incident edges |
/// | `remove_edge` | \(O(1)\) expected | endpoints are kept |
/// | `degree` / `neighbors` | \(O(m)\) | no adjacency index is maintained |
/// | `is_subgraph_of` | \(O(n + m)\) expected | |
/// | `structural_hash` | \(O((n + m) \log(n + m))\) | sorts element hashes |
#[derive(Debug)]
pub struct EdgeSetGraph<V, E> {
    vertices: HashSet<V>,
    edges: HashSet<E>,
}

impl<V: Vertex, E: EdgeLike<V>> EdgeSetGraph<V, E> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            vertices: HashSet::new(),
            edges: HashSet::new(),
        }
    }

    /// Creates an empty graph with room for the given number of vertices and edges.
    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        Self {
            vertices: HashSet::with_capacity(vertices),
            edges: HashSet::with_capacity(edges),
        }
    }

    /// Returns the vertex set.
    #[inline]
    pub fn vertices(&self) -> &HashSet<V> {
        &self.vertices
    }

    /// Returns the edge set.
    #[inline]
    pub fn edges(&self) -> &HashSet<E> {
        &self.edges
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the graph has neither vertices nor edges.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.edges.is_empty()
    }

    /// Removes every vertex and edge.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
    }

    /// Adds a vertex. Returns `true` if it was not already present.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        self.vertices.insert(vertex)
    }

    /// Adds every vertex of `vertices`. Returns how many were new.
    pub fn add_vertices<I>(&mut self, vertices: I) -> usize
    where
        I: IntoIterator<Item = V>,
    {
        vertices
            .into_iter()
            .map(|v| self.vertices.insert(v))
            .filter(|&inserted| inserted)
            .count()
    }

    /// Inserts `edge` and both of its endpoints.
    ///
    /// Returns `true` if the edge was not already present. Inserting an edge
    /// twice leaves the edge set unchanged.
    pub fn insert_edge(&mut self, edge: E) -> bool {
        self.vertices.insert(edge.vertex1().clone());
        self.vertices.insert(edge.vertex2().clone());
        let inserted = self.edges.insert(edge);
        self.debug_validate();
        inserted
    }

    /// Builds the edge `vertex1 - vertex2` and inserts it with its endpoints.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidEdge`] if `vertex1 == vertex2`; the graph
    /// is left unchanged.
    pub fn add_edge(&mut self, vertex1: V, vertex2: V) -> Result<bool> {
        let edge = E::from_endpoints(vertex1, vertex2)?;
        Ok(self.insert_edge(edge))
    }

    /// Inserts every edge of `edges`. Returns how many were new.
    pub fn add_edges<I>(&mut self, edges: I) -> usize
    where
        I: IntoIterator<Item = E>,
    {
        edges
            .into_iter()
            .map(|e| self.insert_edge(e))
            .filter(|&inserted| inserted)
            .count()
    }

    /// Merges all vertices and edges of `other` into `self`.
    pub fn add_graph(&mut self, other: &Self) {
        self.vertices.extend(other.vertices.iter().cloned());
        self.edges.extend(other.edges.iter().cloned());
        self.debug_validate();
    }

    /// Merges `other` into `self` and adds the bridging edge `vertex1 - vertex2`.
    ///
    /// The bridge must be anchored on both sides: at least one of its
    /// endpoints must already be a vertex of `self`, and at least one must be
    /// a vertex of `other`. The other endpoint may be brand new.
    ///
    /// # Errors
    /// - [`GraphError::InvalidEdge`] if `vertex1 == vertex2`.
    /// - [`GraphError::DisjointConnection`] if either graph contains neither
    ///   endpoint.
    ///
    /// On error neither graph is modified.
    pub fn connect_graph(&mut self, other: &Self, vertex1: V, vertex2: V) -> Result<()> {
        let bridge = E::from_endpoints(vertex1, vertex2)?;
        let (a, b) = bridge.as_pair();

        let side = if !(self.contains_vertex(a) || self.contains_vertex(b)) {
            Some(ConnectionSide::Existing)
        } else if !(other.contains_vertex(a) || other.contains_vertex(b)) {
            Some(ConnectionSide::Incoming)
        } else {
            None
        };
        if let Some(side) = side {
            trace_event!(debug, side = %side, "graph connection rejected");
            return Err(GraphError::DisjointConnection { side });
        }

        self.add_graph(other);
        self.insert_edge(bridge);
        Ok(())
    }

    /// Removes `vertex` together with every edge incident to it.
    ///
    /// Returns `true` if the vertex was present.
    pub fn remove_vertex(&mut self, vertex: &V) -> bool {
        if !self.vertices.remove(vertex) {
            return false;
        }
        self.edges.retain(|e| !e.contains(vertex));
        self.debug_validate();
        true
    }

    /// Removes every vertex of `vertices` and their incident edges. Returns how
    /// many were present.
    pub fn remove_vertices<'a, I>(&mut self, vertices: I) -> usize
    where
        I: IntoIterator<Item = &'a V>,
        V: 'a,
    {
        let doomed: HashSet<&V> = vertices
            .into_iter()
            .filter(|v| self.vertices.contains(*v))
            .collect();
        if doomed.is_empty() {
            return 0;
        }
        self.edges
            .retain(|e| !doomed.contains(e.vertex1()) && !doomed.contains(e.vertex2()));
        for v in &doomed {
            self.vertices.remove(*v);
        }
        self.debug_validate();
        doomed.len()
    }

    /// Removes `edge`. Its endpoints stay, even if left isolated.
    ///
    /// Returns `true` if the edge was present.
    pub fn remove_edge(&mut self, edge: &E) -> bool {
        self.edges.remove(edge)
    }

    /// Removes the edge between `vertex1` and `vertex2`, if any.
    ///
    /// For directed graphs only the arc `vertex1 -> vertex2` is removed.
    pub fn remove_edge_between(&mut self, vertex1: &V, vertex2: &V) -> bool {
        match E::from_endpoints(vertex1.clone(), vertex2.clone()) {
            Ok(edge) => self.edges.remove(&edge),
            Err(_) => false,
        }
    }

    /// Removes every edge of `edges`. Returns how many were present.
    pub fn remove_edges<'a, I>(&mut self, edges: I) -> usize
    where
        I: IntoIterator<Item = &'a E>,
        E: 'a,
    {
        edges
            .into_iter()
            .filter(|e| self.edges.remove(*e))
            .count()
    }

    /// Removes every vertex and every edge of `other` from `self`.
    pub fn remove_graph(&mut self, other: &Self) {
        self.remove_vertices(other.vertices.iter());
        self.remove_edges(other.edges.iter());
    }

    /// Returns `true` if `vertex` is in the vertex set.
    #[inline]
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.vertices.contains(vertex)
    }

    /// Returns `true` if `edge` is in the edge set.
    #[inline]
    pub fn contains_edge(&self, edge: &E) -> bool {
        self.edges.contains(edge)
    }

    /// Returns `true` if the edge `vertex1 - vertex2` exists.
    ///
    /// Direction-sensitive for directed graphs. Always `false` for
    /// `vertex1 == vertex2`, since self-loops cannot exist.
    pub fn contains_edge_between(&self, vertex1: &V, vertex2: &V) -> bool {
        E::from_endpoints(vertex1.clone(), vertex2.clone()).is_ok_and(|edge| self.edges.contains(&edge))
    }

    /// Alias of [`is_supergraph_of`](Self::is_supergraph_of).
    #[inline]
    pub fn contains_graph(&self, other: &Self) -> bool {
        self.is_supergraph_of(other)
    }

    /// Returns `true` if both the vertex set and the edge set of `self` are
    /// subsets of those of `other`.
    ///
    /// A graph whose edges all appear in `other` but which has an extra
    /// isolated vertex is not a subgraph.
    pub fn is_subgraph_of(&self, other: &Self) -> bool {
        self.vertices.is_subset(&other.vertices) && self.edges.is_subset(&other.edges)
    }

    /// Returns `true` if both the vertex set and the edge set of `self` are
    /// supersets of those of `other`.
    pub fn is_supergraph_of(&self, other: &Self) -> bool {
        other.is_subgraph_of(self)
    }

    /// Iterates over every edge that has `vertex` as an endpoint.
    pub fn incident_edges<'a>(&'a self, vertex: &'a V) -> impl Iterator<Item = &'a E> + 'a {
        self.edges.iter().filter(move |e| e.contains(vertex))
    }

    /// Returns every vertex that shares an edge with `vertex`.
    ///
    /// Direction is ignored; a vertex reached by several edges is listed once.
    pub fn neighbors(&self, vertex: &V) -> HashSet<V> {
        self.incident_edges(vertex)
            .filter_map(|e| e.other_endpoint(vertex))
            .cloned()
            .collect()
    }

    /// Returns the number of edges incident to `vertex`.
    pub fn degree(&self, vertex: &V) -> usize {
        self.incident_edges(vertex).count()
    }

    /// Returns `true` if `vertex` is in the graph and has no incident edge.
    pub fn is_isolated_vertex(&self, vertex: &V) -> bool {
        self.contains_vertex(vertex) && self.degree(vertex) == 0
    }

    /// Returns `true` if `vertex` is in the graph and has exactly one incident edge.
    pub fn is_end_vertex(&self, vertex: &V) -> bool {
        self.contains_vertex(vertex) && self.degree(vertex) == 1
    }

    /// Returns `true` if `vertex` is in the graph and its degree equals the
    /// number of other vertices.
    pub fn is_universal_vertex(&self, vertex: &V) -> bool {
        self.contains_vertex(vertex) && self.degree(vertex) == self.vertices.len() - 1
    }

    /// Builds the undirected neighbor map of every vertex in one pass over the edges.
    pub(crate) fn adjacency_map(&self) -> HashMap<V, HashSet<V>> {
        let mut adjacency: HashMap<V, HashSet<V>> = self
            .vertices
            .iter()
            .map(|v| (v.clone(), HashSet::new()))
            .collect();
        for edge in &self.edges {
            let (a, b) = edge.as_pair();
            if let Some(adjacent) = adjacency.get_mut(a) {
                adjacent.insert(b.clone());
            }
            if let Some(adjacent) = adjacency.get_mut(b) {
                adjacent.insert(a.clone());
            }
        }
        adjacency
    }

    /// Order-independent hash of the graph's content.
    ///
    /// Vertices are folded in ascending order of their element hash with
    /// `h = h * 31 + hash(v)` from seed 17, then edges the same way into the
    /// same accumulator. Equal graphs always produce equal values.
    pub fn structural_hash(&self) -> u64 {
        let mut hasher = StructuralHasher::new();
        hasher.fold_sorted(&self.vertices);
        hasher.fold_sorted(&self.edges);
        hasher.finish()
    }

    /// Validates the structural invariants of the graph.
    ///
    /// This method checks that:
    /// 1. Every edge endpoint is a member of the vertex set
    /// 2. No edge connects a vertex to itself
    ///
    /// Returns `true` if all invariants hold.
    pub fn validate_invariants(&self) -> bool {
        self.edges.iter().all(|e| {
            let (a, b) = e.as_pair();
            a != b && self.vertices.contains(a) && self.vertices.contains(b)
        })
    }

    #[inline]
    fn debug_validate(&self) {
        if cfg!(debug_assertions) {
            invariant_assert_msg(self.validate_invariants(), "edge endpoints must be graph vertices");
        }
    }
}

impl<V: Vertex, E: EdgeLike<V>> Default for EdgeSetGraph<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex, E: EdgeLike<V>> Clone for EdgeSetGraph<V, E> {
    /// Deep copy: the clone owns fresh vertex and edge sets.
    fn clone(&self) -> Self {
        Self {
            vertices: self.vertices.clone(),
            edges: self.edges.clone(),
        }
    }
}

impl<V: Vertex, E: EdgeLike<V>> PartialEq for EdgeSetGraph<V, E> {
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices && self.edges == other.edges
    }
}

impl<V: Vertex, E: EdgeLike<V>> Eq for EdgeSetGraph<V, E> {}

impl<V: Vertex, E: EdgeLike<V>> Hash for EdgeSetGraph<V, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.structural_hash());
    }
}

impl<V, E> fmt::Display for EdgeSetGraph<V, E>
where
    V: fmt::Display,
    E: fmt::Display,
{
    /// Renders `V = {..}, E = {..}` with elements sorted by their rendering,
    /// so equal graphs display identically.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "V = {{{}}}, E = {{{}}}",
            sorted_rendering(&self.vertices),
            sorted_rendering(&self.edges)
        )
    }
}

fn sorted_rendering<T: fmt::Display>(items: &HashSet<T>) -> String {
    let mut rendered: Vec<String> = items.iter().map(ToString::to_string).collect();
    rendered.sort_unstable();
    rendered.join(", ")
}

impl<V: Vertex, E: EdgeLike<V>> FromIterator<E> for EdgeSetGraph<V, E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.add_edges(iter);
        graph
    }
}

impl<V: Vertex, E: EdgeLike<V>> Extend<E> for EdgeSetGraph<V, E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.add_edges(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edge::{DirectedEdge, Edge};

    type UGraph = EdgeSetGraph<u32, Edge<u32>>;
    type DGraph = EdgeSetGraph<u32, DirectedEdge<u32>>;

    fn path(n: u32) -> UGraph {
        (1..n).map(|i| Edge::new(i, i + 1).unwrap()).collect()
    }

    #[test]
    fn edge_set_insert_adds_endpoints() {
        let mut g = UGraph::new();
        assert!(g.add_edge(1, 2).unwrap());
        assert!(!g.add_edge(2, 1).unwrap());
        assert_eq!(g.vertex_count(), 2);
        assert_eq!(g.edge_count(), 1);
        assert!(g.validate_invariants());
    }

    #[test]
    fn edge_set_self_loop_is_rejected_without_mutation() {
        let mut g = UGraph::new();
        assert_eq!(g.add_edge(3, 3), Err(GraphError::InvalidEdge));
        assert!(g.is_empty());
    }

    #[test]
    fn edge_set_remove_vertex_drops_incident_edges() {
        let mut g = path(4);
        assert!(g.remove_vertex(&2));
        assert!(!g.remove_vertex(&2));
        assert_eq!(g.edges(), &HashSet::from([Edge::new(3, 4).unwrap()]));
        assert!(g.contains_vertex(&1));
        assert!(g.is_isolated_vertex(&1));
    }

    #[test]
    fn edge_set_remove_vertices_in_bulk() {
        let mut g = path(5);
        assert_eq!(g.remove_vertices([2, 4, 9].iter()), 2);
        assert_eq!(g.vertices(), &HashSet::from([1, 3, 5]));
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn edge_set_remove_edge_keeps_endpoints() {
        let mut g = path(3);
        assert!(g.remove_edge(&Edge::new(2, 1).unwrap()));
        assert!(g.contains_vertex(&1));
        assert!(g.is_isolated_vertex(&1));
        assert!(g.is_end_vertex(&2));
        assert!(!g.remove_edge_between(&1, &2));
        assert!(!g.remove_edge_between(&1, &1));
    }

    #[test]
    fn edge_set_vertex_predicates() {
        let mut g = UGraph::new();
        g.add_edges([Edge::new(1, 2).unwrap(), Edge::new(1, 3).unwrap()]);
        g.add_vertex(4);

        assert_eq!(g.degree(&1), 2);
        assert!(g.is_end_vertex(&2));
        assert!(g.is_isolated_vertex(&4));
        assert!(!g.is_universal_vertex(&1));
        g.add_edge(1, 4).unwrap();
        assert!(g.is_universal_vertex(&1));

        // Vertices outside the graph satisfy no predicate.
        assert_eq!(g.degree(&42), 0);
        assert!(!g.is_isolated_vertex(&42));
        assert!(!g.is_universal_vertex(&42));
    }

    #[test]
    fn edge_set_neighbors_ignore_direction() {
        let mut g = DGraph::new();
        g.add_edge(1, 2).unwrap();
        g.add_edge(2, 1).unwrap();
        g.add_edge(3, 1).unwrap();
        assert_eq!(g.neighbors(&1), HashSet::from([2, 3]));
        assert_eq!(g.degree(&1), 3);
    }

    #[test]
    fn edge_set_subgraph_requires_vertices_too() {
        let small = path(2);
        let mut big = path(3);
        assert!(small.is_subgraph_of(&big));
        assert!(big.is_supergraph_of(&small));
        assert!(big.contains_graph(&small));

        let mut with_isolated = small.clone();
        with_isolated.add_vertex(99);
        assert!(!with_isolated.is_subgraph_of(&big));
        big.add_vertex(99);
        assert!(with_isolated.is_subgraph_of(&big));
    }

    #[test]
    fn edge_set_connect_graph_requires_anchor_on_both_sides() {
        let mut left = path(2);
        let right: UGraph = [Edge::new(10, 11).unwrap()].into_iter().collect();

        let before_left = left.clone();
        assert_eq!(
            left.connect_graph(&right, 20, 21),
            Err(GraphError::DisjointConnection {
                side: ConnectionSide::Existing
            })
        );
        assert_eq!(
            left.connect_graph(&right, 1, 21),
            Err(GraphError::DisjointConnection {
                side: ConnectionSide::Incoming
            })
        );
        assert_eq!(left.connect_graph(&right, 1, 1), Err(GraphError::InvalidEdge));
        assert_eq!(left, before_left);

        left.connect_graph(&right, 2, 10).unwrap();
        assert!(left.contains_edge_between(&10, &2));
        assert!(left.is_supergraph_of(&right));
        assert_eq!(left.edge_count(), 3);
    }

    #[test]
    fn edge_set_connect_graph_through_new_vertex() {
        let mut left = path(2);
        let mut right = UGraph::new();
        right.add_vertex(7);

        // 7 anchors the incoming side; 1 anchors the existing side.
        left.connect_graph(&right, 7, 1).unwrap();
        assert!(left.contains_edge_between(&1, &7));
    }

    #[test]
    fn edge_set_remove_graph() {
        let mut g = path(4);
        let part = path(2);
        g.remove_graph(&part);
        assert_eq!(g.vertices(), &HashSet::from([3, 4]));
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn edge_set_adjacency_map_matches_neighbors() {
        let g = path(5);
        let adj = g.adjacency_map();
        for v in g.vertices() {
            assert_eq!(adj[v], g.neighbors(v));
        }
    }

    #[test]
    fn edge_set_structural_hash_ignores_insertion_order() {
        let forward = path(20);
        let mut backward = UGraph::new();
        for i in (1..20).rev() {
            backward.add_edge(i + 1, i).unwrap();
        }
        assert_eq!(forward, backward);
        assert_eq!(forward.structural_hash(), backward.structural_hash());
    }

    #[test]
    fn edge_set_clear_and_display() {
        let mut g = path(3);
        assert_eq!(g.to_string(), "V = {1, 2, 3}, E = {(1 <-> 2), (2 <-> 3)}");
        g.clear();
        assert!(g.is_empty());
        assert_eq!(g.to_string(), "V = {}, E = {}");
    }
}
