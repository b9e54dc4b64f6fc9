//! k-exchange local search over the exact solver.
//!
//! Hold out k vertices of the current solution, keep the rest, and let the
//! exact solver re-optimize whatever part of the graph is neither kept nor
//! adjacent to a kept vertex. Strictly more than k vertices back means an
//! improvement; improvements restart the enumeration pass.

use crate::{exact::mis_exact, graph::Graph, solution::Solution};
use bitvec::prelude::*;
use itertools::Itertools;

/// Improve `sol` by k-exchanges; never returns a smaller set.
///
/// `k == 0` and `k >= |S|` are guarded no-ops. With `k = |S| - 1` a single
/// vertex is retained per attempt, which is how the driver callers use it.
pub fn k_exchange<'g>(graph: &'g Graph, sol: &Solution<'g>, k: usize) -> Solution<'g> {
    let mut cur = sol.to_vec();
    if k == 0 || k >= cur.len() {
        return sol.clone();
    }

    'pass: loop {
        for held_out in cur.iter().copied().combinations(k) {
            let kept: Vec<usize> = cur
                .iter()
                .copied()
                .filter(|v| !held_out.contains(v))
                .collect();

            // residual = graph minus every kept vertex and its neighborhood
            let mut keep: BitVec = graph.vertex_mask().to_bitvec();
            for &v in &kept {
                keep.set(v, false);
                for u in graph.neighbors(v) {
                    keep.set(u, false);
                }
            }
            let new_s = mis_exact(&graph.induced_subgraph(&keep));

            if new_s.len() > k {
                cur = kept;
                cur.extend(new_s);
                cur.sort_unstable();
                continue 'pass;
            }
        }
        return Solution::from_vertices(graph, cur);
    }
}

/*────────────────── tests ──────────────────*/
