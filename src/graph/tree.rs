//! Rooted trees.
//!
//! A [`Tree`] is a root plus a [`DirectedGraph`] of parent-to-child arcs, with
//! a mutation API that can only ever produce a tree:
//! - a new vertex with no parent is attached directly under the root,
//! - an arc is accepted only if its source is already in the tree and its
//!   target is not, which rules out cycles and second parents,
//! - removing a vertex or an arc removes the whole subtree below it, so no
//!   vertex is ever left unreachable from the root,
//! - the root itself can never be removed.
//!
//! Subtree removal walks an explicit worklist instead of recursing, so deep
//! trees cannot exhaust the call stack.

use core::fmt;
use core::hash::{Hash, Hasher};
use std::collections::{HashMap, HashSet, VecDeque};

use super::directed::DirectedGraph;
use super::invariant::invariant_assert_msg;
use crate::edge::{DirectedEdge, Vertex};
use crate::error::{GraphError, Result};
use crate::hash::{element_hash, StructuralHasher};
use crate::macros::trace_event;

/// A rooted tree over vertices of type `V`.
///
/// Equality compares the root as well as the vertex and arc sets.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_vertex` | \(O(1)\) expected | attaches under the root |
/// | `add_edge` | \(O(1)\) expected | two membership checks |
/// | `remove_vertex` / `remove_edge` | \(O(n + m)\) | indexes children once, then drops arcs in one pass |
/// | `parent` | \(O(m)\) | scans arcs |
/// | `children` | \(O(m)\) | scans arcs |
#[derive(Debug)]
pub struct Tree<V> {
    root: V,
    graph: DirectedGraph<V>,
}

impl<V: Vertex> Clone for Tree<V> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            graph: self.graph.clone(),
        }
    }
}

impl<V: Vertex> Tree<V> {
    /// Creates a tree containing only `root`.
    pub fn new(root: V) -> Self {
        let mut graph = DirectedGraph::new();
        graph.add_vertex(root.clone());
        Self { root, graph }
    }

    /// Creates a tree rooted at `root` and offers it each arc of `edges` in
    /// order.
    ///
    /// Arcs that the tree rule rejects at the moment they are offered are
    /// skipped, so a child arc listed before its parent's arc is dropped.
    pub fn from_edges<I>(root: V, edges: I) -> Self
    where
        I: IntoIterator<Item = DirectedEdge<V>>,
    {
        let mut tree = Self::new(root);
        tree.add_edges(edges);
        tree
    }

    /// Returns the root vertex.
    #[inline]
    pub fn root(&self) -> &V {
        &self.root
    }

    /// Returns the vertex set.
    #[inline]
    pub fn vertices(&self) -> &HashSet<V> {
        self.graph.vertices()
    }

    /// Returns the arc set.
    #[inline]
    pub fn edges(&self) -> &HashSet<DirectedEdge<V>> {
        self.graph.edges()
    }

    /// Returns the number of vertices, root included.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    /// Returns the number of arcs; always `vertex_count() - 1`.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Read-only view of the underlying directed graph.
    ///
    /// All structural queries of [`DirectedGraph`] (degrees, neighbors,
    /// subgraph tests) are available through it.
    #[inline]
    pub fn as_graph(&self) -> &DirectedGraph<V> {
        &self.graph
    }

    /// Consumes the tree, returning its directed graph.
    pub fn into_graph(self) -> DirectedGraph<V> {
        self.graph
    }

    /// Returns `true` if `vertex` is in the tree.
    #[inline]
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.graph.contains_vertex(vertex)
    }

    /// Returns `true` if `edge` is one of the tree's arcs.
    #[inline]
    pub fn contains_edge(&self, edge: &DirectedEdge<V>) -> bool {
        self.graph.contains_edge(edge)
    }

    /// Returns the parent of `vertex`, or `None` for the root and for vertices
    /// outside the tree.
    pub fn parent<'a>(&'a self, vertex: &'a V) -> Option<&'a V> {
        self.graph
            .incoming_arcs(vertex)
            .next()
            .map(DirectedEdge::source)
    }

    /// Returns the direct children of `vertex`.
    pub fn children(&self, vertex: &V) -> HashSet<V> {
        self.graph.out_neighbors(vertex)
    }

    /// Iterates over the arcs that continue below `edge`, i.e. the arcs whose
    /// source is `edge`'s target.
    pub fn lower_branches<'a>(
        &'a self,
        edge: &'a DirectedEdge<V>,
    ) -> impl Iterator<Item = &'a DirectedEdge<V>> + 'a {
        self.graph.incident_arcs(edge.target())
    }

    /// Adds `vertex` under the root if it is not already in the tree.
    ///
    /// Returns `true` if the vertex was added.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.graph.contains_vertex(&vertex) {
            return false;
        }
        let arc = DirectedEdge::from_distinct(self.root.clone(), vertex);
        self.graph.insert_edge(arc);
        self.debug_validate();
        true
    }

    /// Adds every vertex of `vertices` under the root. Returns how many were new.
    pub fn add_vertices<I>(&mut self, vertices: I) -> usize
    where
        I: IntoIterator<Item = V>,
    {
        vertices
            .into_iter()
            .map(|v| self.add_vertex(v))
            .filter(|&added| added)
            .count()
    }

    /// Offers the arc `edge` to the tree.
    ///
    /// The arc is accepted only if its source is already in the tree and its
    /// target is not. Otherwise nothing changes and `false` is returned; this
    /// is not an error.
    pub fn insert_edge(&mut self, edge: DirectedEdge<V>) -> bool {
        if !self.graph.contains_vertex(edge.source()) || self.graph.contains_vertex(edge.target()) {
            trace_event!(trace, "tree arc rejected");
            return false;
        }
        self.graph.insert_edge(edge);
        self.debug_validate();
        true
    }

    /// Builds the arc `from -> to` and offers it to the tree.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidEdge`] if `from == to`.
    pub fn add_edge(&mut self, from: V, to: V) -> Result<bool> {
        let arc = DirectedEdge::new(from, to)?;
        Ok(self.insert_edge(arc))
    }

    /// Offers every arc of `edges` in order. Returns how many were accepted.
    pub fn add_edges<I>(&mut self, edges: I) -> usize
    where
        I: IntoIterator<Item = DirectedEdge<V>>,
    {
        edges
            .into_iter()
            .map(|e| self.insert_edge(e))
            .filter(|&accepted| accepted)
            .count()
    }

    /// Grafts `other` onto this tree.
    ///
    /// `other`'s root is added first (under this root, unless already
    /// present), then `other`'s arcs are offered parent-before-child. Arcs
    /// whose target is already in this tree are rejected; the subtrees below
    /// them are still grafted onto the existing vertex.
    pub fn add_tree(&mut self, other: &Self) {
        self.add_vertex(other.root.clone());

        let mut queue = VecDeque::from([&other.root]);
        while let Some(parent) = queue.pop_front() {
            for arc in other.graph.incident_arcs(parent) {
                self.insert_edge(arc.clone());
                queue.push_back(arc.target());
            }
        }
    }

    /// Grafts the arcs and vertices of a directed graph onto this tree.
    ///
    /// Arcs are offered repeatedly until no further arc is accepted, so the
    /// result does not depend on the graph's iteration order. Vertices left
    /// unattached afterwards are added under the root.
    pub fn add_graph(&mut self, graph: &DirectedGraph<V>) {
        let mut pending: Vec<&DirectedEdge<V>> = graph.edges().iter().collect();
        loop {
            let before = pending.len();
            pending.retain(|arc| {
                if self.graph.contains_vertex(arc.target()) {
                    return false;
                }
                if self.graph.contains_vertex(arc.source()) {
                    self.graph.insert_edge((*arc).clone());
                    return false;
                }
                true
            });
            if pending.len() == before {
                break;
            }
        }
        self.add_vertices(graph.vertices().iter().cloned());
        self.debug_validate();
    }

    /// Removes `vertex` and its entire subtree, along with every arc touching
    /// them.
    ///
    /// Returns `Ok(true)` if the vertex was in the tree and `Ok(false)` if it
    /// was not.
    ///
    /// # Errors
    /// Returns [`GraphError::RootRemoval`] if `vertex` is the root; the tree is
    /// left unchanged.
    pub fn remove_vertex(&mut self, vertex: &V) -> Result<bool> {
        if *vertex == self.root {
            return Err(GraphError::RootRemoval);
        }
        if !self.graph.contains_vertex(vertex) {
            return Ok(false);
        }
        self.remove_subtree(vertex.clone());
        Ok(true)
    }

    /// Removes every vertex of `vertices` with its subtree. Returns how many of
    /// the listed vertices were still present when their turn came.
    ///
    /// # Errors
    /// Returns [`GraphError::RootRemoval`] if the root is listed; in that case
    /// nothing is removed.
    pub fn remove_vertices<'a, I>(&mut self, vertices: I) -> Result<usize>
    where
        I: IntoIterator<Item = &'a V>,
        V: 'a,
    {
        let vertices: Vec<&V> = vertices.into_iter().collect();
        if vertices.iter().any(|v| **v == self.root) {
            return Err(GraphError::RootRemoval);
        }
        let mut removed = 0usize;
        for v in vertices {
            if self.remove_vertex(v)? {
                removed += 1;
            }
        }
        Ok(removed)
    }

    /// Removes `edge` and the entire subtree below its target.
    ///
    /// Returns `true` if the arc was in the tree.
    pub fn remove_edge(&mut self, edge: &DirectedEdge<V>) -> bool {
        if !self.graph.contains_edge(edge) {
            return false;
        }
        // Arcs never target the root, so this cannot detach it.
        invariant_assert_msg(*edge.target() != self.root, "no arc may target the root");
        self.remove_subtree(edge.target().clone());
        true
    }

    /// Removes every arc of `edges` with the subtrees below them. Returns how
    /// many were still present when their turn came.
    pub fn remove_edges<'a, I>(&mut self, edges: I) -> usize
    where
        I: IntoIterator<Item = &'a DirectedEdge<V>>,
        V: 'a,
    {
        edges
            .into_iter()
            .filter(|e| self.remove_edge(e))
            .count()
    }

    /// Removes every vertex except the root.
    pub fn clear(&mut self) {
        self.graph.clear();
        self.graph.add_vertex(self.root.clone());
    }

    /// Maps every vertex with children to its child list, in one pass over the arcs.
    fn child_map(&self) -> HashMap<&V, Vec<&V>> {
        let mut children: HashMap<&V, Vec<&V>> = HashMap::with_capacity(self.graph.vertex_count());
        for arc in self.graph.edges() {
            children.entry(arc.source()).or_default().push(arc.target());
        }
        children
    }

    /// Removes `top` and all of its descendants.
    fn remove_subtree(&mut self, top: V) {
        let doomed: HashSet<V> = {
            let children = self.child_map();
            let mut doomed = HashSet::from([top.clone()]);
            let mut worklist = vec![&top];
            while let Some(vertex) = worklist.pop() {
                for &child in children.get(vertex).into_iter().flatten() {
                    doomed.insert(child.clone());
                    worklist.push(child);
                }
            }
            doomed
        };
        let removed = self.graph.remove_vertices(doomed.iter());
        trace_event!(debug, removed, "tree subtree removed");
        let _ = removed;
        self.debug_validate();
    }

    /// Order-independent hash: the graph's structural hash with the root's
    /// element hash folded in last.
    pub fn structural_hash(&self) -> u64 {
        let mut hasher = StructuralHasher::new();
        hasher.fold(self.graph.structural_hash());
        hasher.fold(element_hash(&self.root));
        hasher.finish()
    }

    /// Validates the tree invariants.
    ///
    /// This method checks that:
    /// 1. The underlying graph is closed over its vertex set
    /// 2. The root is a vertex and no arc targets it
    /// 3. Every other vertex has exactly one incoming arc
    /// 4. Every vertex is reachable from the root
    ///
    /// Returns `true` if all invariants hold.
    pub fn validate_invariants(&self) -> bool {
        if !self.graph.validate_invariants() || !self.graph.contains_vertex(&self.root) {
            return false;
        }
        if self.graph.edge_count() + 1 != self.graph.vertex_count() {
            return false;
        }
        let children = self.child_map();
        let mut seen: HashSet<&V> = HashSet::from([&self.root]);
        let mut worklist = vec![&self.root];
        while let Some(vertex) = worklist.pop() {
            for &child in children.get(vertex).into_iter().flatten() {
                // A second visit means a second parent or an arc into the root.
                if !seen.insert(child) {
                    return false;
                }
                worklist.push(child);
            }
        }
        seen.len() == self.graph.vertex_count()
    }

    #[inline]
    fn debug_validate(&self) {
        if cfg!(debug_assertions) {
            invariant_assert_msg(self.validate_invariants(), "tree must stay rooted and single-parented");
        }
    }
}

impl<V: Vertex> PartialEq for Tree<V> {
    fn eq(&self, other: &Self) -> bool {
        self.root == other.root && self.graph == other.graph
    }
}

impl<V: Vertex> Eq for Tree<V> {}

impl<V: Vertex> Hash for Tree<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.structural_hash());
    }
}

impl<V: Vertex + fmt::Display> fmt::Display for Tree<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "root = {}, {}", self.root, self.graph)
    }
}
