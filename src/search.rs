//! Tabu search driver: greedy start, then a fixed budget of iterations
//! alternating intensification and diversification by eligibility.

use crate::buckets::{classify, Candidate};
use crate::construct::greedy_min_degree;
use crate::diversify::diversification_move;
use crate::graph::Graph;
use crate::intensify::{intensify_k0, intensify_k1};
use crate::params::Params;
use crate::solution::Solution;
use crate::tabu::TabuList;
use log::{debug, trace};
use rand::Rng;

/// Run the tabu search on `graph` and return the best solution seen.
///
/// The working solution starts from the lowest-degree-first greedy set and
/// is mutated by every move; only intensification moves compete for the
/// recorded best (ties accepted, so plateaus keep moving). Diversification
/// reshapes the working solution without ever touching the best.
pub fn tabu_search<'g, R>(graph: &'g Graph, p: &Params, rng: &mut R) -> Solution<'g>
where
    R: Rng + ?Sized,
{
    let mut state = SearchState::new(graph, p);
    debug!(
        "tabu search: n={} m={} greedy start size={}",
        graph.n(),
        graph.m(),
        state.best.size()
    );
    for _ in 0..p.max_iter {
        state.step(rng);
    }
    debug!("tabu search: done, best size={}", state.best.size());
    state.into_best()
}

/// One-run search state; `step` advances a single iteration.
struct SearchState<'g> {
    sol: Solution<'g>,
    best: Solution<'g>,
    tabu: TabuList,
    itr: usize,
    diversification_tenure: usize,
}

impl<'g> SearchState<'g> {
    fn new(graph: &'g Graph, p: &Params) -> Self {
        let sol = greedy_min_degree(graph);
        Self {
            best: sol.clone(),
            sol,
            tabu: TabuList::new(graph.id_bound()),
            itr: 0,
            diversification_tenure: p.diversification_tenure,
        }
    }

    fn step<R>(&mut self, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        let graph = self.sol.graph();
        let buckets = classify(graph, &self.sol);

        let v0: Vec<&Candidate> = buckets
            .v0
            .iter()
            .filter(|c| !self.tabu.is_tabu(c.vertex, self.itr))
            .collect();

        if !v0.is_empty() {
            let v = intensify_k0(&v0, &mut self.sol, rng);
            trace!("itr {}: k=0 add {}", self.itr, v);
            self.accept();
        } else {
            let v1: Vec<Candidate> = buckets
                .v1
                .iter()
                .filter(|c| !self.tabu.is_tabu(c.vertex, self.itr))
                .cloned()
                .collect();

            if !v1.is_empty() {
                let heavier = buckets.v2.len() + buckets.v_gt2.len();
                if intensify_k1(&mut self.sol, &mut self.tabu, v1, heavier, self.itr, rng) {
                    trace!("itr {}: k=1 swap, size={}", self.itr, self.sol.size());
                    self.accept();
                }
            } else if !diversification_move(
                &mut self.sol,
                &mut self.tabu,
                &buckets,
                self.itr,
                self.diversification_tenure,
                rng,
            ) {
                trace!("itr {}: diversification bucket empty, skipped", self.itr);
            }
        }

        self.itr += 1;
    }

    /// Intensification acceptance: ties move the best to the newest S.
    fn accept(&mut self) {
        if self.sol.size() >= self.best.size() {
            if self.sol.size() > self.best.size() {
                debug!("itr {}: new best size {}", self.itr, self.sol.size());
            }
            self.best = self.sol.clone();
        }
    }

    fn into_best(self) -> Solution<'g> {
        self.best
    }
}

/*────────────────── tests ──────────────────*/
#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn cube() -> Graph {
        Graph::from_edge_list(
            8,
            &[
                (0, 1),
                (1, 2),
                (2, 3),
                (3, 0),
                (4, 5),
                (5, 6),
                (6, 7),
                (7, 4),
                (0, 4),
                (1, 5),
                (2, 6),
                (3, 7),
            ],
        )
    }

    fn state_with<'g>(g: &'g Graph, s: &[usize], tenure: usize) -> SearchState<'g> {
        SearchState {
            sol: Solution::from_vertices(g, s.iter().copied()),
            best: Solution::from_vertices(g, s.iter().copied()),
            tabu: TabuList::new(g.id_bound()),
            itr: 0,
            diversification_tenure: tenure,
        }
    }

    #[test]
    fn evicted_vertex_respects_its_tenure_window() {
        // 0 dominates 1 and 2; 3 is isolated. Starting from {0, 3} the
        // first iteration is a lateral-heavy k=1 swap evicting 0 with
        // tenure |V1| = 2 (release at iteration 2).
        let g = Graph::from_edge_list(4, &[(0, 1), (0, 2)]);
        let mut state = state_with(&g, &[0, 3], 7);
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        state.step(&mut rng);
        assert_eq!(state.sol.to_vec(), vec![2, 3]);
        assert!(state.tabu.is_tabu(0, 1)); // blocked strictly inside the window
        assert!(!state.tabu.is_tabu(0, 2)); // eligible exactly at release

        // second iteration finds 1 in V0 and grows to the optimum
        state.step(&mut rng);
        assert_eq!(state.sol.to_vec(), vec![1, 2, 3]);
        assert_eq!(state.best.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn free_additions_preempt_swaps() {
        // 1 is a swap candidate, 2 a free addition: k=0 must win
        let g = Graph::from_edge_list(3, &[(0, 1)]);
        let mut state = state_with(&g, &[0], 7);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        state.step(&mut rng);
        assert_eq!(state.sol.to_vec(), vec![0, 2]);
    }

    #[test]
    fn diversification_never_touches_the_best() {
        // greedy already finds the cube optimum {0,2,5,7}; every outsider
        // has three solution-neighbors, so all further moves diversify
        let g = cube();
        let p = Params {
            max_iter: 0,
            ..Params::default()
        };
        let mut state = SearchState::new(&g, &p);
        assert_eq!(state.best.size(), 4);

        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..20 {
            state.step(&mut rng);
            assert_eq!(state.best.size(), 4);
            assert!(state.best.is_independent());
        }
    }

    #[test]
    fn empty_graph_returns_empty_best() {
        let g = Graph::with_vertices(0);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let best = tabu_search(&g, &Params::default(), &mut rng);
        assert!(best.is_empty());
    }

    #[test]
    fn partition_is_complete_at_every_iteration() {
        let g = cube();
        let p = Params::default();
        let mut state = SearchState::new(&g, &p);
        let mut rng = ChaCha8Rng::seed_from_u64(21);

        for _ in 0..30 {
            let b = classify(&g, &state.sol);
            let bucketed =
                b.v0.len() + b.v1.len() + b.v2.len() + b.v_gt2.len();
            assert_eq!(bucketed, g.n() - state.sol.size());
            state.step(&mut rng);
            assert!(state.sol.is_independent());
        }
    }
}
