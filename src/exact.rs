//! Exact maximum independent set by include/exclude branch and bound.
//!
//! Exponential in the worst case; intended for small graphs and for the
//! residual subgraphs produced by the k-exchange local search.

use crate::graph::Graph;
use bitvec::prelude::*;

/// Return a maximum independent set of `graph`, as original vertex ids.
///
/// Branches on the first live vertex: the include branch drops the vertex
/// together with its neighbors, the exclude branch drops the vertex alone.
/// The include branch wins ties. Recursion depth is bounded by `n`.
pub fn mis_exact(graph: &Graph) -> Vec<usize> {
    if graph.n() <= 1 {
        return graph.vertices().collect();
    }
    let v = graph.vertices().next().unwrap();

    // include v: v and N(v) leave the residual
    let mut keep: BitVec = graph.vertex_mask().to_bitvec();
    keep.set(v, false);
    for u in graph.neighbors(v) {
        keep.set(u, false);
    }
    let mut with_v = mis_exact(&graph.induced_subgraph(&keep));
    with_v.insert(0, v);

    // exclude v: only v leaves
    let mut keep: BitVec = graph.vertex_mask().to_bitvec();
    keep.set(v, false);
    let without_v = mis_exact(&graph.induced_subgraph(&keep));

    if with_v.len() >= without_v.len() {
        with_v
    } else {
        without_v
    }
}

/*────────────────── tests ──────────────────*/
