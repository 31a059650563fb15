//! Undirected edges.

use core::fmt;
use core::hash::{Hash, Hasher};

use super::{EdgeLike, Vertex};
use crate::error::{GraphError, Result};
use crate::hash::element_hash;

/// An unordered pair of distinct vertices.
///
/// Endpoint order is kept for display and [`EdgeLike::as_pair`], but equality
/// ignores it: `Edge(a, b) == Edge(b, a)`. The `Hash` impl feeds the XOR of
/// the two element hashes, which is commutative and therefore consistent with
/// that equality.
#[derive(Debug, Clone, Copy)]
pub struct Edge<V> {
    vertex1: V,
    vertex2: V,
}

impl<V: Vertex> Edge<V> {
    /// Creates an edge between two distinct vertices.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidEdge`] if `vertex1 == vertex2`.
    pub fn new(vertex1: V, vertex2: V) -> Result<Self> {
        if vertex1 == vertex2 {
            return Err(GraphError::InvalidEdge);
        }
        Ok(Self { vertex1, vertex2 })
    }

    /// First endpoint as given at construction.
    #[inline]
    pub fn vertex1(&self) -> &V {
        &self.vertex1
    }

    /// Second endpoint as given at construction.
    #[inline]
    pub fn vertex2(&self) -> &V {
        &self.vertex2
    }

    /// Returns the same edge with its endpoints listed the other way round.
    ///
    /// The result compares equal to `self`.
    pub fn reversed(&self) -> Self {
        Self {
            vertex1: self.vertex2.clone(),
            vertex2: self.vertex1.clone(),
        }
    }
}

impl<V: Vertex> EdgeLike<V> for Edge<V> {
    fn from_endpoints(vertex1: V, vertex2: V) -> Result<Self> {
        Self::new(vertex1, vertex2)
    }

    #[inline]
    fn vertex1(&self) -> &V {
        &self.vertex1
    }

    #[inline]
    fn vertex2(&self) -> &V {
        &self.vertex2
    }

    fn into_pair(self) -> (V, V) {
        (self.vertex1, self.vertex2)
    }
}

impl<V: PartialEq> PartialEq for Edge<V> {
    fn eq(&self, other: &Self) -> bool {
        (self.vertex1 == other.vertex1 && self.vertex2 == other.vertex2)
            || (self.vertex1 == other.vertex2 && self.vertex2 == other.vertex1)
    }
}

impl<V: Eq> Eq for Edge<V> {}

impl<V: Hash> Hash for Edge<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(element_hash(&self.vertex1) ^ element_hash(&self.vertex2));
    }
}

impl<V: Vertex> TryFrom<(V, V)> for Edge<V> {
    type Error = GraphError;

    fn try_from((vertex1, vertex2): (V, V)) -> Result<Self> {
        Self::new(vertex1, vertex2)
    }
}

impl<V: fmt::Display> fmt::Display for Edge<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} <-> {})", self.vertex1, self.vertex2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::element_hash;

    #[test]
    fn edge_rejects_self_loop() {
        assert_eq!(Edge::new(1, 1), Err(GraphError::InvalidEdge));
        assert_eq!(Edge::try_from(("a", "a")), Err(GraphError::InvalidEdge));
    }

    #[test]
    fn edge_equality_is_symmetric() {
        let e1 = Edge::new(1, 2).unwrap();
        let e2 = Edge::new(2, 1).unwrap();
        assert_eq!(e1, e2);
        assert_eq!(element_hash(&e1), element_hash(&e2));
        assert_ne!(e1, Edge::new(1, 3).unwrap());
    }

    #[test]
    fn edge_keeps_construction_order() {
        let e = Edge::new("x", "y").unwrap();
        assert_eq!(e.as_pair(), (&"x", &"y"));
        assert_eq!(e.reversed().as_pair(), (&"y", &"x"));
        assert_eq!(e.into_pair(), ("x", "y"));
    }

    #[test]
    fn edge_endpoint_queries() {
        let e = Edge::new(1, 2).unwrap();
        assert!(e.contains(&1));
        assert!(e.contains(&2));
        assert!(!e.contains(&3));
        assert_eq!(e.other_endpoint(&1), Some(&2));
        assert_eq!(e.other_endpoint(&2), Some(&1));
        assert_eq!(e.other_endpoint(&3), None);
        assert_eq!(e.endpoints().copied().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn edge_display() {
        assert_eq!(Edge::new(1, 2).unwrap().to_string(), "(1 <-> 2)");
    }
}
