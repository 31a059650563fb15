//! Bron–Kerbosch enumeration without pivoting.
//!
//! ```text
//! search(R, P, X):
//!     if P and X are both empty: report R
//!     for each v in a snapshot of P:
//!         search(R ∪ {v}, P ∩ N(v), X ∩ N(v))
//!         P := P \ {v}
//!         X := X ∪ {v}
//! ```
//!
//! `R` is the clique under construction, `P` the candidates that may still
//! extend it, `X` the vertices already tried on this branch. A set is reported
//! iff it is maximal, and each maximal clique is reported exactly once.
//! Recursion depth is bounded by the vertex count because every recursive call
//! strictly shrinks `P`.

use std::collections::{HashMap, HashSet};

use crate::edge::Vertex;
use crate::macros::trace_event;

/// Enumerates the maximal cliques of a vertex set under a fixed adjacency.
///
/// The neighbor function is evaluated once per vertex at construction and
/// cached, so enumeration never calls back into the source graph.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `new` | \(O(n \cdot c_N)\) | \(c_N\) = cost of one neighbor lookup |
/// | `for_each_clique` | \(O(3^{n/3})\) worst case | Moon–Moser bound on maximal cliques |
/// | `maximum_clique` | same as enumeration | keeps the first largest clique |
#[derive(Debug, Clone)]
pub struct CliqueEnumerator<V> {
    vertices: HashSet<V>,
    adjacency: HashMap<V, HashSet<V>>,
}

impl<V: Vertex> CliqueEnumerator<V> {
    /// Builds an enumerator over `vertices` using `neighbors` as adjacency.
    ///
    /// For a meaningful result the neighbor function must be symmetric. A
    /// vertex listed as its own neighbor is ignored.
    pub fn new<I, F>(vertices: I, mut neighbors: F) -> Self
    where
        I: IntoIterator<Item = V>,
        F: FnMut(&V) -> HashSet<V>,
    {
        let vertices: HashSet<V> = vertices.into_iter().collect();
        let adjacency = vertices
            .iter()
            .map(|v| {
                let mut adjacent = neighbors(v);
                adjacent.remove(v);
                (v.clone(), adjacent)
            })
            .collect();
        Self {
            vertices,
            adjacency,
        }
    }

    /// Builds an enumerator from a prebuilt adjacency map.
    ///
    /// Every key is a vertex; vertices that only appear as neighbors are not.
    pub fn from_adjacency(adjacency: HashMap<V, HashSet<V>>) -> Self {
        let vertices = adjacency.keys().cloned().collect();
        let adjacency = adjacency
            .into_iter()
            .map(|(v, mut adjacent)| {
                adjacent.remove(&v);
                (v, adjacent)
            })
            .collect();
        Self {
            vertices,
            adjacency,
        }
    }

    /// Returns the vertex set being searched.
    pub fn vertices(&self) -> &HashSet<V> {
        &self.vertices
    }

    /// Returns the cached neighbors of `vertex`, or `None` if it is not searched.
    pub fn neighbors(&self, vertex: &V) -> Option<&HashSet<V>> {
        self.adjacency.get(vertex)
    }

    /// Calls `visit` once for every maximal clique.
    ///
    /// An empty vertex set has exactly one maximal clique, the empty set.
    pub fn for_each_clique<F>(&self, mut visit: F)
    where
        F: FnMut(&HashSet<V>),
    {
        trace_event!(debug, vertices = self.vertices.len(), "clique search started");
        let mut clique = HashSet::with_capacity(self.vertices.len());
        self.search(&mut clique, self.vertices.clone(), HashSet::new(), &mut visit);
    }

    /// Collects every maximal clique.
    pub fn cliques(&self) -> Vec<HashSet<V>> {
        let mut found = Vec::new();
        self.for_each_clique(|clique| found.push(clique.clone()));
        trace_event!(debug, cliques = found.len(), "clique search finished");
        found
    }

    /// Counts the maximal cliques without storing them.
    pub fn clique_count(&self) -> usize {
        let mut count = 0usize;
        self.for_each_clique(|_| count += 1);
        count
    }

    /// Returns a maximal clique of largest cardinality.
    ///
    /// When several cliques tie, the first one reported by the search wins.
    /// That order follows `HashSet` iteration and is not stable across
    /// instances, so callers must not rely on which of the tied cliques they
    /// get.
    pub fn maximum_clique(&self) -> HashSet<V> {
        let mut best: Option<HashSet<V>> = None;
        self.for_each_clique(|clique| {
            if best.as_ref().map_or(true, |b| clique.len() > b.len()) {
                best = Some(clique.clone());
            }
        });
        let best = best.unwrap_or_default();
        trace_event!(debug, size = best.len(), "maximum clique selected");
        best
    }

    fn search<F>(&self, clique: &mut HashSet<V>, mut candidates: HashSet<V>, mut excluded: HashSet<V>, visit: &mut F)
    where
        F: FnMut(&HashSet<V>),
    {
        if candidates.is_empty() && excluded.is_empty() {
            trace_event!(trace, size = clique.len(), "maximal clique found");
            visit(clique);
            return;
        }

        let snapshot: Vec<V> = candidates.iter().cloned().collect();
        for v in snapshot {
            let (next_candidates, next_excluded): (HashSet<V>, HashSet<V>) = match self.adjacency.get(&v) {
                Some(adjacent) => (
                    candidates.intersection(adjacent).cloned().collect(),
                    excluded.intersection(adjacent).cloned().collect(),
                ),
                None => (HashSet::new(), HashSet::new()),
            };

            clique.insert(v.clone());
            self.search(clique, next_candidates, next_excluded, visit);
            clique.remove(&v);

            candidates.remove(&v);
            excluded.insert(v);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn undirected(edges: &[(u32, u32)]) -> HashMap<u32, HashSet<u32>> {
        let mut adj: HashMap<u32, HashSet<u32>> = HashMap::new();
        for &(a, b) in edges {
            adj.entry(a).or_default().insert(b);
            adj.entry(b).or_default().insert(a);
        }
        adj
    }

    fn sorted(cliques: Vec<HashSet<u32>>) -> Vec<Vec<u32>> {
        let mut out: Vec<Vec<u32>> = cliques
            .into_iter()
            .map(|c| {
                let mut v: Vec<u32> = c.into_iter().collect();
                v.sort_unstable();
                v
            })
            .collect();
        out.sort();
        out
    }

    #[test]
    fn enumerator_two_triangles() {
        let adj = undirected(&[(1, 2), (2, 3), (3, 1), (3, 4), (4, 5), (5, 3)]);
        let e = CliqueEnumerator::from_adjacency(adj);

        assert_eq!(sorted(e.cliques()), vec![vec![1, 2, 3], vec![3, 4, 5]]);
        assert_eq!(e.clique_count(), 2);
        assert_eq!(e.maximum_clique().len(), 3);
    }

    #[test]
    fn enumerator_unique_four_clique() {
        let adj = undirected(&[
            (1, 2),
            (2, 3),
            (3, 4),
            (4, 1),
            (2, 4),
            (1, 3),
            (4, 5),
            (2, 6),
            (5, 6),
        ]);
        let e = CliqueEnumerator::from_adjacency(adj);

        assert_eq!(e.maximum_clique(), HashSet::from([1, 2, 3, 4]));
        assert_eq!(
            sorted(e.cliques()),
            vec![vec![1, 2, 3, 4], vec![2, 6], vec![4, 5], vec![5, 6]]
        );
    }

    #[test]
    fn enumerator_empty_vertex_set_reports_empty_clique() {
        let e = CliqueEnumerator::<u32>::new(Vec::new(), |_| HashSet::new());
        assert_eq!(e.cliques(), vec![HashSet::new()]);
        assert!(e.maximum_clique().is_empty());
    }

    #[test]
    fn enumerator_isolated_vertices_are_singleton_cliques() {
        let e = CliqueEnumerator::new([1u32, 2, 3], |_| HashSet::new());
        assert_eq!(sorted(e.cliques()), vec![vec![1], vec![2], vec![3]]);
        assert_eq!(e.maximum_clique().len(), 1);
    }

    #[test]
    fn enumerator_ignores_self_adjacency() {
        let e = CliqueEnumerator::new([1u32, 2], |v| HashSet::from([*v, 3 - *v]));
        assert_eq!(e.neighbors(&1), Some(&HashSet::from([2])));
        assert_eq!(sorted(e.cliques()), vec![vec![1, 2]]);
    }

    #[test]
    fn enumerator_neighbors_outside_vertex_set_are_not_candidates() {
        // 9 is adjacent to everything but is not part of the searched set.
        let e = CliqueEnumerator::new([1u32, 2], |v| match v {
            1 => HashSet::from([2, 9]),
            2 => HashSet::from([1, 9]),
            _ => HashSet::new(),
        });
        assert_eq!(sorted(e.cliques()), vec![vec![1, 2]]);
    }

    #[test]
    fn enumerator_complete_graph_has_one_clique() {
        let n = 7u32;
        let e = CliqueEnumerator::new(0..n, |v| (0..n).filter(|u| u != v).collect());
        let cliques = e.cliques();
        assert_eq!(cliques.len(), 1);
        assert_eq!(cliques[0].len(), n as usize);
    }
}
