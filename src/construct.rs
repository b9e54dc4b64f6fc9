//! Constructor for an initial independent set.
//!
//! Lowest-degree-first greedy: scan vertices by ascending degree and take
//! every vertex with no already-taken neighbor. The result is maximal and,
//! with ties broken by vertex id, fully deterministic.

use crate::{graph::Graph, solution::Solution};

/// Greedy maximal independent set, lowest degree first.
pub fn greedy_min_degree(graph: &Graph) -> Solution<'_> {
    let mut order: Vec<usize> = graph.vertices().collect();
    order.sort_by_key(|&v| graph.degree(v)); // stable: equal degrees stay in id order

    let mut sol = Solution::new(graph);
    for v in order {
        if graph.neighbors(v).all(|u| !sol.contains(u)) {
            sol.add(v);
        }
    }
    sol
}

/*──────────────────────── tests ───────────────────────────*/

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greedy_is_maximal_and_independent() {
        let g = Graph::from_edge_list(
            7,
            &[(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 5), (5, 6), (6, 3)],
        );
        let sol = greedy_min_degree(&g);
        assert!(sol.is_independent());
        assert!(sol.is_maximal());
    }

    #[test]
    fn greedy_prefers_low_degree_vertices() {
        // star: all leaves beat the hub
        let g = Graph::from_edge_list(5, &[(0, 1), (0, 2), (0, 3), (0, 4)]);
        let sol = greedy_min_degree(&g);
        assert_eq!(sol.to_vec(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn greedy_on_empty_graph() {
        let g = Graph::with_vertices(0);
        assert!(greedy_min_degree(&g).is_empty());
    }
}
