//! Candidate solution: a vertex subset S bound to a [`Graph`], with O(1)
//! size and O(n / 64) membership bookkeeping.

use crate::graph::Graph;
use bitvec::prelude::*;

/// Mutable independent-set candidate bound to a single [`Graph`].
///
/// Nothing here enforces independence on every mutation; the search moves
/// maintain it and [`Solution::is_independent`] checks it.
#[derive(Clone, Debug)]
pub struct Solution<'g> {
    graph: &'g Graph,
    vertices: BitVec,
    size: usize,
}

impl<'g> Solution<'g> {
    /* constructors */

    /// Empty solution.
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            vertices: bitvec![0; graph.id_bound()],
            size: 0,
        }
    }

    /// Build from an explicit vertex collection.
    pub fn from_vertices<I>(graph: &'g Graph, vs: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let mut sol = Self::new(graph);
        for v in vs {
            sol.add(v);
        }
        sol
    }

    /* queries */

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    #[inline]
    pub fn contains(&self, v: usize) -> bool {
        self.vertices[v]
    }

    #[inline]
    pub fn bitset(&self) -> &BitSlice {
        &self.vertices
    }

    #[inline]
    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// Members in ascending id order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.vertices.iter_ones()
    }

    /// Members as a sorted Vec.
    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }

    /// No two members adjacent.
    pub fn is_independent(&self) -> bool {
        self.iter()
            .all(|v| self.graph.neighbors(v).all(|u| !self.vertices[u]))
    }

    /// Independent, and every live vertex outside S has a neighbor in S.
    pub fn is_maximal(&self) -> bool {
        self.is_independent()
            && self
                .graph
                .vertices()
                .filter(|&v| !self.vertices[v])
                .all(|v| self.graph.neighbors(v).any(|u| self.vertices[u]))
    }

    /* mutators */

    /// Add vertex *v* (no-op if already present).
    pub fn add(&mut self, v: usize) {
        assert!(self.graph.contains(v), "unknown vertex {v}");
        if self.vertices[v] {
            return;
        }
        self.vertices.set(v, true);
        self.size += 1;
    }

    /// Remove vertex *v* (no-op if absent).
    pub fn remove(&mut self, v: usize) {
        if !self.vertices[v] {
            return;
        }
        self.vertices.set(v, false);
        self.size -= 1;
    }
}

/*───────────────────────── tests ─────────────────────────*/
