//! Edge types.
//!
//! Two concrete pair types share one capability set:
//! - [`Edge`]: unordered pair; `Edge(a, b) == Edge(b, a)`, hashed with a
//!   commutative combinator so equality and hash agree.
//! - [`DirectedEdge`]: ordered pair (an *arc*); equality and hash are positional.
//!
//! Neither type admits self-loops.

pub mod directed;
pub mod undirected;

pub use directed::DirectedEdge;
pub use undirected::Edge;

use core::hash::Hash;

use crate::error::Result;

/// A value usable as a graph vertex.
///
/// Blanket-implemented for every `Eq + Hash + Clone` type; vertices are stored
/// by value in sets and cloned when an operation returns them.
pub trait Vertex: Eq + Hash + Clone {}

impl<T: Eq + Hash + Clone> Vertex for T {}

/// Capabilities shared by undirected and directed edges.
///
/// The two implementors differ only in what equality and hashing mean; every
/// accessor here reports endpoints in construction order.
pub trait EdgeLike<V: Vertex>: Clone + Eq + Hash {
    /// Builds an edge between two distinct vertices.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidEdge`](crate::GraphError::InvalidEdge) when
    /// `vertex1 == vertex2`.
    fn from_endpoints(vertex1: V, vertex2: V) -> Result<Self>;

    /// First endpoint as given at construction.
    fn vertex1(&self) -> &V;

    /// Second endpoint as given at construction.
    fn vertex2(&self) -> &V;

    /// Consumes the edge, returning `(vertex1, vertex2)`.
    fn into_pair(self) -> (V, V);

    /// Returns `true` iff `vertex` is one of the two endpoints.
    #[inline]
    fn contains(&self, vertex: &V) -> bool {
        self.vertex1() == vertex || self.vertex2() == vertex
    }

    /// Returns the endpoint that is not `vertex`, or `None` if `vertex` is not
    /// an endpoint at all.
    #[inline]
    fn other_endpoint(&self, vertex: &V) -> Option<&V> {
        if self.vertex1() == vertex {
            Some(self.vertex2())
        } else if self.vertex2() == vertex {
            Some(self.vertex1())
        } else {
            None
        }
    }

    /// Borrows both endpoints in construction order.
    #[inline]
    fn as_pair(&self) -> (&V, &V) {
        (self.vertex1(), self.vertex2())
    }

    /// Iterates over both endpoints in construction order.
    #[inline]
    fn endpoints(&self) -> core::array::IntoIter<&V, 2> {
        [self.vertex1(), self.vertex2()].into_iter()
    }
}
