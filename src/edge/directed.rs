//! Directed edges (arcs).

use core::fmt;

use super::{EdgeLike, Vertex};
use crate::error::{GraphError, Result};

/// An ordered pair of distinct vertices, `from -> to`.
///
/// Equality and hashing are positional, so `DirectedEdge(a, b)` and
/// `DirectedEdge(b, a)` are different arcs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DirectedEdge<V> {
    from: V,
    to: V,
}

impl<V: Vertex> DirectedEdge<V> {
    /// Creates the arc `from -> to`.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidEdge`] if `from == to`.
    pub fn new(from: V, to: V) -> Result<Self> {
        if from == to {
            return Err(GraphError::InvalidEdge);
        }
        Ok(Self { from, to })
    }

    /// Builds an arc whose endpoints the caller has already proven distinct.
    #[inline]
    pub(crate) fn from_distinct(from: V, to: V) -> Self {
        debug_assert!(from != to, "arc endpoints must be distinct");
        Self { from, to }
    }

    /// Source vertex.
    #[inline]
    pub fn source(&self) -> &V {
        &self.from
    }

    /// Target vertex.
    #[inline]
    pub fn target(&self) -> &V {
        &self.to
    }

    /// Returns the arc pointing the other way, `to -> from`.
    pub fn reversed(&self) -> Self {
        Self {
            from: self.to.clone(),
            to: self.from.clone(),
        }
    }
}

impl<V: Vertex> EdgeLike<V> for DirectedEdge<V> {
    fn from_endpoints(vertex1: V, vertex2: V) -> Result<Self> {
        Self::new(vertex1, vertex2)
    }

    #[inline]
    fn vertex1(&self) -> &V {
        &self.from
    }

    #[inline]
    fn vertex2(&self) -> &V {
        &self.to
    }

    fn into_pair(self) -> (V, V) {
        (self.from, self.to)
    }
}

impl<V: Vertex> TryFrom<(V, V)> for DirectedEdge<V> {
    type Error = GraphError;

    fn try_from((from, to): (V, V)) -> Result<Self> {
        Self::new(from, to)
    }
}

impl<V: fmt::Display> fmt::Display for DirectedEdge<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} -> {})", self.from, self.to)
    }
}
