//! Undirected graph stored as an adjacency BitVec per row, plus a mask of
//! live vertices so induced subgraphs keep the parent's vertex ids.
//! Supports DIMACS-style parsing and induced-subgraph extraction.

use anyhow::{ensure, Context, Result};
use bitvec::prelude::*;
use std::io::{BufRead, Read};

#[derive(Clone, Debug)]
pub struct Graph {
    /// Row-major adjacency; `adj[i][j]` is 1 ⇔ edge (i,j) exists, j≠i.
    adj: Vec<BitVec>,
    /// Live vertices. Always all-ones for a freshly built graph; induced
    /// subgraphs clear the bits of removed vertices instead of renumbering.
    present: BitVec,
}

impl Graph {
    /*────────── constructors ──────────*/

    /// Empty graph with `n` isolated vertices.
    pub fn with_vertices(n: usize) -> Self {
        let mut rows = Vec::with_capacity(n);
        for _ in 0..n {
            rows.push(bitvec![0; n]);
        }
        Self {
            adj: rows,
            present: bitvec![1; n],
        }
    }

    /// Build from explicit edge list (0-based indices, undirected).
    pub fn from_edge_list(n: usize, edges: &[(usize, usize)]) -> Self {
        let mut g = Self::with_vertices(n);
        for &(u, v) in edges {
            g.add_edge(u, v);
        }
        g
    }

    /// Parse DIMACS format from any reader.
    ///
    /// `p <name> <n> <m>` declares the vertex count, `e <u> <v>` declares a
    /// 1-based edge; every other line is ignored.
    pub fn parse_dimacs<R: Read>(reader: R) -> Result<Self> {
        let mut graph: Option<Graph> = None;

        for line in std::io::BufReader::new(reader).lines() {
            let line = line?;
            let line = line.trim();
            let mut tokens = line.split_whitespace();
            match tokens.next() {
                Some("p") => {
                    let n: usize = tokens
                        .nth(1)
                        .with_context(|| format!("truncated problem line: {line:?}"))?
                        .parse()
                        .with_context(|| format!("bad vertex count in: {line:?}"))?;
                    graph = Some(Self::with_vertices(n));
                }
                Some("e") => {
                    let g = graph
                        .as_mut()
                        .context("edge line before the problem line")?;
                    let u: usize = tokens
                        .next()
                        .with_context(|| format!("truncated edge line: {line:?}"))?
                        .parse()
                        .with_context(|| format!("bad endpoint in: {line:?}"))?;
                    let v: usize = tokens
                        .next()
                        .with_context(|| format!("truncated edge line: {line:?}"))?
                        .parse()
                        .with_context(|| format!("bad endpoint in: {line:?}"))?;
                    let n = g.adj.len();
                    ensure!(
                        (1..=n).contains(&u) && (1..=n).contains(&v),
                        "edge ({u},{v}) out of range for {n} vertices"
                    );
                    ensure!(u != v, "self-loop at vertex {u}");
                    g.add_edge(u - 1, v - 1);
                }
                _ => {} // comments etc.
            }
        }

        graph.context("no problem line found")
    }

    /*────────── queries ──────────*/

    /// Number of live vertices.
    #[inline]
    pub fn n(&self) -> usize {
        self.present.count_ones()
    }

    /// Number of edges between live vertices (each counted once).
    pub fn m(&self) -> usize {
        self.present
            .iter_ones()
            .map(|v| self.adj[v].count_ones())
            .sum::<usize>()
            / 2
    }

    /// One past the largest usable vertex id. Induced subgraphs keep the
    /// parent's id space, so this can exceed `n()`.
    #[inline]
    pub fn id_bound(&self) -> usize {
        self.adj.len()
    }

    /// Whether `v` is a live vertex of this graph.
    #[inline]
    pub fn contains(&self, v: usize) -> bool {
        v < self.adj.len() && self.present[v]
    }

    /// Degree of vertex `v`.
    #[inline]
    pub fn degree(&self, v: usize) -> usize {
        assert!(self.contains(v), "unknown vertex {v}");
        self.adj[v].count_ones()
    }

    /// Neighbors of `v` in ascending id order.
    #[inline]
    pub fn neighbors(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        assert!(self.contains(v), "unknown vertex {v}");
        self.adj[v].iter_ones()
    }

    /// Immutable adjacency row of `v`.
    #[inline]
    pub fn neigh_row(&self, v: usize) -> &BitSlice {
        assert!(self.contains(v), "unknown vertex {v}");
        &self.adj[v]
    }

    /// Live vertices in ascending id order.
    #[inline]
    pub fn vertices(&self) -> impl Iterator<Item = usize> + '_ {
        self.present.iter_ones()
    }

    /// The live-vertex set as a bit mask over `0..id_bound()`.
    #[inline]
    pub fn vertex_mask(&self) -> &BitSlice {
        &self.present
    }

    /// Subgraph induced on `present ∩ keep`. The receiver is unchanged.
    pub fn induced_subgraph(&self, keep: &BitSlice) -> Graph {
        assert_eq!(keep.len(), self.adj.len());
        let mut present = self.present.clone();
        present &= keep;

        let mut adj = self.adj.clone();
        for v in 0..adj.len() {
            if present[v] {
                adj[v] &= &present[..];
            } else {
                adj[v].fill(false);
            }
        }
        Graph { adj, present }
    }

    /*────────── mutators ──────────*/

    #[inline]
    pub fn add_edge(&mut self, u: usize, v: usize) {
        assert!(self.contains(u) && self.contains(v) && u != v);
        self.adj[u].set(v, true);
        self.adj[v].set(u, true);
    }
}

/*────────────────── tests ──────────────────*/
