//! Intensification moves: grow the solution for free (k = 0) or trade one
//! outside vertex for its single solution-neighbor (k = 1).

use crate::buckets::{diversifying_degree, Candidate};
use crate::{solution::Solution, tabu::TabuList};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;

/// k = 0 move: add a uniformly random addable vertex. Nothing is evicted,
/// so the tabu list is untouched. Returns the vertex added.
pub fn intensify_k0<R>(v0: &[&Candidate], sol: &mut Solution<'_>, rng: &mut R) -> usize
where
    R: Rng + ?Sized,
{
    let c = v0.choose(rng).unwrap();
    sol.add(c.vertex);
    c.vertex
}

/// k = 1 move over the tabu-filtered V1 bucket.
///
/// Each candidate would evict its unique solution-neighbor `u`; the
/// *expansion degree* of `u` counts how many candidates share it. When
/// one-for-one swaps dominate (`|V1|` exceeds the size of the heavier
/// buckets combined) the move avoids lateral churn: candidates whose `u`
/// serves only them are dropped and the eviction tenure stretches to
/// `|V1|`. Otherwise the tenure is a short randomized `10 + rand(0,|V1|)`.
/// Among the remaining candidates the one whose `u` has maximum expansion
/// degree wins, ties broken by the greatest diversifying degree.
///
/// Returns `false` (leaving solution and tabu list untouched) when the
/// lateral filter empties the pool.
pub fn intensify_k1<R>(
    sol: &mut Solution<'_>,
    tabu: &mut TabuList,
    v1: Vec<Candidate>,
    heavier_buckets: usize,
    itr: usize,
    rng: &mut R,
) -> bool
where
    R: Rng + ?Sized,
{
    debug_assert!(!v1.is_empty());
    let graph = sol.graph();

    let mut expansion: HashMap<usize, usize> = HashMap::new();
    for c in &v1 {
        *expansion.entry(c.sol_neighbors[0]).or_insert(0) += 1;
    }

    let lateral_heavy = v1.len() > heavier_buckets;
    let tt = if lateral_heavy {
        v1.len()
    } else {
        10 + rng.gen_range(0..v1.len())
    };
    let pool: Vec<Candidate> = if lateral_heavy {
        v1.into_iter()
            .filter(|c| expansion[&c.sol_neighbors[0]] > 1)
            .collect()
    } else {
        v1
    };
    if pool.is_empty() {
        return false; // every available swap was lateral
    }

    let max_expansion = pool
        .iter()
        .map(|c| expansion[&c.sol_neighbors[0]])
        .max()
        .unwrap();
    let finalists: Vec<&Candidate> = pool
        .iter()
        .filter(|c| expansion[&c.sol_neighbors[0]] == max_expansion)
        .collect();

    let chosen = if finalists.len() == 1 {
        finalists[0]
    } else {
        *finalists
            .iter()
            .max_by_key(|c| diversifying_degree(graph, sol, c.vertex))
            .unwrap()
    };

    let release = itr + tt;
    for &u in &chosen.sol_neighbors {
        sol.remove(u);
        tabu.forbid(u, release);
    }
    sol.add(chosen.vertex);
    true
}

/*────────────────── tests ──────────────────*/
