//! Maximal-clique enumeration.
//!
//! [`CliqueEnumerator`] runs Bron–Kerbosch without pivoting over any vertex set
//! and neighbor function; it knows nothing about how the graph is stored.
//! [`Graph`](crate::Graph) feeds it symmetric adjacency and
//! [`DirectedGraph`](crate::DirectedGraph) feeds it *mutual* adjacency
//! (`u ~ v` iff both `u -> v` and `v -> u` exist).

mod enumerator;

pub use enumerator::CliqueEnumerator;

use std::collections::HashSet;

use crate::edge::Vertex;

/// Returns `true` iff every two distinct members of `vertices` are adjacent
/// under `neighbors`.
///
/// The empty set and singletons are cliques.
pub fn is_clique<V, F>(vertices: &HashSet<V>, mut neighbors: F) -> bool
where
    V: Vertex,
    F: FnMut(&V) -> HashSet<V>,
{
    vertices.iter().all(|v| {
        let adjacent = neighbors(v);
        vertices.iter().all(|u| u == v || adjacent.contains(u))
    })
}

/// Returns `true` iff `clique` is a clique that no vertex of `universe` can
/// extend.
pub fn is_maximal_clique<V, F>(clique: &HashSet<V>, universe: &HashSet<V>, mut neighbors: F) -> bool
where
    V: Vertex,
    F: FnMut(&V) -> HashSet<V>,
{
    if !is_clique(clique, &mut neighbors) {
        return false;
    }
    universe
        .iter()
        .filter(|candidate| !clique.contains(*candidate))
        .all(|candidate| {
            let adjacent = neighbors(candidate);
            !clique.iter().all(|member| adjacent.contains(member))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn triangle_with_tail() -> HashMap<u32, HashSet<u32>> {
        // 1-2, 2-3, 3-1, 3-4
        let mut adj: HashMap<u32, HashSet<u32>> = HashMap::new();
        for (a, b) in [(1, 2), (2, 3), (3, 1), (3, 4)] {
            adj.entry(a).or_default().insert(b);
            adj.entry(b).or_default().insert(a);
        }
        adj
    }

    #[test]
    fn is_clique_checks_pairwise_adjacency() {
        let adj = triangle_with_tail();
        let lookup = |v: &u32| adj.get(v).cloned().unwrap_or_default();

        assert!(is_clique(&HashSet::from([1, 2, 3]), lookup));
        assert!(is_clique(&HashSet::from([3, 4]), lookup));
        assert!(!is_clique(&HashSet::from([1, 2, 4]), lookup));
        assert!(is_clique(&HashSet::new(), lookup));
        assert!(is_clique(&HashSet::from([4]), lookup));
    }

    #[test]
    fn is_maximal_clique_rejects_extendable_sets() {
        let adj = triangle_with_tail();
        let lookup = |v: &u32| adj.get(v).cloned().unwrap_or_default();
        let universe: HashSet<u32> = adj.keys().copied().collect();

        assert!(is_maximal_clique(&HashSet::from([1, 2, 3]), &universe, lookup));
        assert!(is_maximal_clique(&HashSet::from([3, 4]), &universe, lookup));
        assert!(!is_maximal_clique(&HashSet::from([1, 2]), &universe, lookup));
        assert!(!is_maximal_clique(&HashSet::from([1, 4]), &universe, lookup));
    }
}
