//! tsmis – maximum independent set search kernel.
//!
//! Three strategies over one read-only graph abstraction: an exact
//! include/exclude branch and bound, a k-exchange local search that
//! re-optimizes residual subgraphs exactly, and a tabu search with
//! neighborhood buckets and tenure-based move forbidding. Every entry
//! point returns an independent set of the given graph.

/*───────── internal modules ─────────*/
pub mod buckets;
pub mod construct;
pub mod diversify;
pub mod exact;
pub mod graph;
pub mod intensify;
pub mod local_search;
pub mod params;
pub mod search;
pub mod solution;
pub mod tabu;

/*───────── re-exports for Rust users ─────────*/
pub use construct::greedy_min_degree;
pub use exact::mis_exact;
pub use graph::Graph;
pub use local_search::k_exchange;
pub use params::Params;
pub use search::tabu_search;
pub use solution::Solution;

/*======================================================================
│  Python bindings (feature "python")
└=====================================================================*/

#[cfg(feature = "python")]
mod python {
    use super::*;
    use pyo3::prelude::*;
    use pyo3::types::PyModule;
    use pyo3::wrap_pyfunction;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::fs::File;
    use std::io::BufReader;

    fn load(path: &str) -> PyResult<Graph> {
        let file = File::open(path)
            .map_err(|e| pyo3::exceptions::PyIOError::new_err(e.to_string()))?;
        Graph::parse_dimacs(BufReader::new(file))
            .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))
    }

    /// Helper: parse DIMACS, return (n, m).
    #[pyfunction]
    #[pyo3(text_signature = "(graph_path)")]
    fn parse_dimacs_py(graph_path: String) -> PyResult<(usize, usize)> {
        let g = load(&graph_path)?;
        Ok((g.n(), g.m()))
    }

    /// Exact solver – returns a maximum independent set.
    #[pyfunction]
    #[pyo3(text_signature = "(graph_path)")]
    fn mis_exact_py(graph_path: String) -> PyResult<Vec<usize>> {
        let g = load(&graph_path)?;
        let mut s = mis_exact(&g);
        s.sort_unstable();
        Ok(s)
    }

    /// Greedy start plus k-exchange local search.
    #[pyfunction]
    #[pyo3(text_signature = "(graph_path, k)")]
    fn local_search_py(graph_path: String, k: usize) -> PyResult<Vec<usize>> {
        let g = load(&graph_path)?;
        let s0 = greedy_min_degree(&g);
        Ok(k_exchange(&g, &s0, k).to_vec())
    }

    /// Tabu search – returns the best independent set found.
    #[pyfunction]
    #[pyo3(text_signature = "(graph_path, max_iter, seed)")]
    fn tabu_search_py(graph_path: String, max_iter: usize, seed: u64) -> PyResult<Vec<usize>> {
        let g = load(&graph_path)?;
        let p = Params {
            max_iter,
            ..Params::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Ok(tabu_search(&g, &p, &mut rng).to_vec())
    }

    /// Module name must match the Python package's native-module name.
    #[pymodule]
    fn _native(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(parse_dimacs_py, m)?)?;
        m.add_function(wrap_pyfunction!(mis_exact_py, m)?)?;
        m.add_function(wrap_pyfunction!(local_search_py, m)?)?;
        m.add_function(wrap_pyfunction!(tabu_search_py, m)?)?;
        Ok(())
    }
}
