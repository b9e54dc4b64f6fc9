//! Diversification move: force a vertex with several solution-neighbors
//! into S, evicting all of them, to push the search off its plateau.

use crate::buckets::{diversifying_degree, Buckets, Candidate};
use crate::{solution::Solution, tabu::TabuList};
use rand::Rng;

/// Apply one diversification move.
///
/// Source bucket is V>2 when one-for-one swaps dominate
/// (`|V1| > |V2| + |V>2|`), otherwise a fair coin between V2 and V>2.
/// Within the bucket the candidate with the greatest diversifying degree
/// wins; all its solution-neighbors are evicted with the fixed `tenure`.
/// An empty bucket makes the iteration a no-op and returns `false`.
pub fn diversification_move<R>(
    sol: &mut Solution<'_>,
    tabu: &mut TabuList,
    buckets: &Buckets,
    itr: usize,
    tenure: usize,
    rng: &mut R,
) -> bool
where
    R: Rng + ?Sized,
{
    let graph = sol.graph();
    let bucket: &[Candidate] = if buckets.v1.len() > buckets.v2.len() + buckets.v_gt2.len() {
        &buckets.v_gt2
    } else if rng.gen_bool(0.5) {
        &buckets.v2
    } else {
        &buckets.v_gt2
    };

    let Some(chosen) = bucket
        .iter()
        .max_by_key(|c| diversifying_degree(graph, sol, c.vertex))
    else {
        return false; // can happen on very dense graphs after several evictions
    };

    let release = itr + tenure;
    for &u in &chosen.sol_neighbors {
        sol.remove(u);
        tabu.forbid(u, release);
    }
    sol.add(chosen.vertex);
    true
}

/*────────────────── tests ──────────────────*/
