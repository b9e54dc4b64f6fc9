//! Neighborhood partition for the tabu search.
//!
//! Every live vertex outside the solution is bucketed by how many of its
//! neighbors are currently in S. Buckets are rebuilt from scratch after
//! every move; nothing is patched incrementally.

use crate::{graph::Graph, solution::Solution};

/// A non-solution vertex together with its current solution-neighbors,
/// i.e. exactly the vertices a swap on `vertex` would evict.
#[derive(Clone, Debug)]
pub struct Candidate {
    pub vertex: usize,
    pub sol_neighbors: Vec<usize>,
}

/// The four buckets: k = 0, 1, 2 and k > 2 solution-neighbors.
/// Together they partition `vertices(G) \ S`.
#[derive(Clone, Debug, Default)]
pub struct Buckets {
    pub v0: Vec<Candidate>,
    pub v1: Vec<Candidate>,
    pub v2: Vec<Candidate>,
    pub v_gt2: Vec<Candidate>,
}

/// Classify every live non-solution vertex of `graph` against `sol`.
pub fn classify(graph: &Graph, sol: &Solution<'_>) -> Buckets {
    let mut buckets = Buckets::default();
    for v in graph.vertices() {
        if sol.contains(v) {
            continue;
        }
        let sol_neighbors: Vec<usize> =
            graph.neighbors(v).filter(|&u| sol.contains(u)).collect();
        let bucket = match sol_neighbors.len() {
            0 => &mut buckets.v0,
            1 => &mut buckets.v1,
            2 => &mut buckets.v2,
            _ => &mut buckets.v_gt2,
        };
        bucket.push(Candidate { vertex: v, sol_neighbors });
    }
    buckets
}

/// Number of neighbors of `v` outside the current solution. Higher means
/// the vertex reaches further away from S; used for move tie-breaking.
pub fn diversifying_degree(graph: &Graph, sol: &Solution<'_>, v: usize) -> usize {
    graph.neighbors(v).filter(|&u| !sol.contains(u)).count()
}

/*────────────────── tests ──────────────────*/
#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn buckets_partition_the_non_solution_vertices() {
        let g = Graph::from_edge_list(
            8,
            &[(0, 1), (0, 2), (0, 3), (1, 2), (2, 3), (3, 4), (4, 5), (5, 6)],
        );
        let sol = Solution::from_vertices(&g, [1, 3, 6]);
        let b = classify(&g, &sol);

        let mut seen = BTreeSet::new();
        for c in b.v0.iter().chain(&b.v1).chain(&b.v2).chain(&b.v_gt2) {
            assert!(seen.insert(c.vertex), "vertex {} in two buckets", c.vertex);
            assert!(!sol.contains(c.vertex));
        }
        let outside: BTreeSet<usize> =
            g.vertices().filter(|&v| !sol.contains(v)).collect();
        assert_eq!(seen, outside);
    }

    #[test]
    fn candidates_carry_their_eviction_set() {
        // star: hub 0 in S, leaves all have exactly the hub as sol-neighbor
        let g = Graph::from_edge_list(4, &[(0, 1), (0, 2), (0, 3)]);
        let sol = Solution::from_vertices(&g, [0]);
        let b = classify(&g, &sol);

        assert!(b.v0.is_empty() && b.v2.is_empty() && b.v_gt2.is_empty());
        assert_eq!(b.v1.len(), 3);
        for c in &b.v1 {
            assert_eq!(c.sol_neighbors, vec![0]);
        }
    }

    #[test]
    fn classification_counts_match() {
        // 0 in S; 1 adjacent once, 2 twice via {0}? build explicit counts
        let g = Graph::from_edge_list(
            6,
            &[(0, 2), (1, 2), (0, 3), (1, 3), (4, 0), (4, 1), (4, 5)],
        );
        let sol = Solution::from_vertices(&g, [0, 1]);
        let b = classify(&g, &sol);

        assert_eq!(b.v0.iter().map(|c| c.vertex).collect::<Vec<_>>(), vec![5]);
        assert!(b.v1.is_empty());
        let v2: Vec<usize> = b.v2.iter().map(|c| c.vertex).collect();
        assert_eq!(v2, vec![2, 3, 4]);
    }

    #[test]
    fn diversifying_degree_ignores_solution_neighbors() {
        let g = Graph::from_edge_list(5, &[(0, 1), (0, 2), (0, 3), (3, 4)]);
        let sol = Solution::from_vertices(&g, [1, 2]);
        // 0's neighbors: 1,2 in S; 3 outside
        assert_eq!(diversifying_degree(&g, &sol, 0), 1);
        assert_eq!(diversifying_degree(&g, &sol, 4), 1);
    }
}
