//! # `setgraph` - Value-Typed Graph Algebra
//!
//! Undirected graphs, directed graphs and rooted trees over any hashable vertex
//! type, together with an exact maximal-clique enumerator. Every structure owns
//! its vertex and edge sets outright, compares by set content, and hashes in an
//! insertion-order independent way, so graphs can themselves be stored in hash
//! based collections.
//!
//! ## Structural Guarantees
//!
//! ### Closed edge sets
//! - **No dangling edges**: every endpoint of every edge is a member of the
//!   vertex set. Removing a vertex removes its incident edges within the same
//!   `&mut self` call.
//! - **No self-loops**: edge constructors reject equal endpoints with
//!   [`GraphError::InvalidEdge`].
//!
//! ### Value semantics
//! - **Set equality**: two graphs are equal iff their vertex sets and edge sets
//!   are equal, independent of how they were built.
//! - **Order-independent hashing**: [`Graph::structural_hash`] sorts element
//!   hashes before folding them, so equal graphs always hash equal.
//! - **Deep clones**: `Clone` copies both sets; clones never share storage.
//!
//! ### Trees
//! - **Single parent**: every non-root vertex of a [`Tree`] has exactly one
//!   incoming arc and is reachable from the root.
//! - **Cascading deletion**: removing a vertex or arc removes the whole subtree
//!   below it. The root itself can never be removed.
//!
//! ## Architecture
//!
//! 1. **Edges** ([`Edge`], [`DirectedEdge`]): two concrete pair types behind the
//!    [`EdgeLike`] capability trait, differing only in equality and hashing.
//!
//! 2. **Edge-set graphs** ([`EdgeSetGraph`]): one generic store of
//!    `(vertices, edges)`; [`Graph`] and [`DirectedGraph`] are its undirected and
//!    directed instantiations.
//!
//! 3. **Trees** ([`Tree`]): a root plus a [`DirectedGraph`] whose mutation API is
//!    restricted to parent-to-child arcs.
//!
//! 4. **Clique enumeration** ([`CliqueEnumerator`]): Bron–Kerbosch without
//!    pivoting over an arbitrary vertex set and neighbor function. Directed
//!    graphs enumerate over mutual adjacency.
//!
//! ## Logging
//!
//! With the `tracing` feature enabled, clique searches, cascading deletions,
//! rejected tree arcs and failed graph connections emit `tracing` events.
//!
//! ## Example
//!
//! ```rust
//! use setgraph::Graph;
//!
//! let mut graph = Graph::new();
//! for (a, b) in [(1, 2), (2, 3), (3, 1), (3, 4), (4, 5), (5, 3)] {
//!     graph.add_edge(a, b)?;
//! }
//!
//! assert_eq!(graph.degree(&3), 4);
//! assert_eq!(graph.cliques().len(), 2);
//! assert_eq!(graph.maximum_clique().len(), 3);
//! # Ok::<(), setgraph::GraphError>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

mod macros;

pub mod clique;
pub mod edge;
pub mod error;
pub mod graph;
pub mod hash;

pub use clique::CliqueEnumerator;
pub use edge::{DirectedEdge, Edge, EdgeLike, Vertex};
pub use error::{GraphError, Result};
pub use graph::{DirectedGraph, EdgeSetGraph, Graph, Tree};

// Compile-time assertions for edge layout
const _: () = {
    use core::mem;

    // Edges are plain pairs: no tag, no indirection.
    assert!(mem::size_of::<Edge<u32>>() == 2 * mem::size_of::<u32>());
    assert!(mem::size_of::<DirectedEdge<u32>>() == 2 * mem::size_of::<u32>());
    assert!(mem::size_of::<Edge<u64>>() == mem::size_of::<DirectedEdge<u64>>());
};
