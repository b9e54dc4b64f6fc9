//! Parameter bundle for the tabu search driver.
//!
//! The intensification tenure is not a parameter: it is recomputed per
//! move from the V1 bucket (see `intensify`), matching the adaptive-tenure
//! scheme. Only the iteration budget and the fixed diversification tenure
//! are caller-tunable.

/// All tunable controls for the tabu search.
#[derive(Clone, Debug)]
pub struct Params {
    /// Hard iteration budget; the sole stopping criterion.
    pub max_iter: usize,

    /// Iterations a diversification-evicted vertex stays forbidden.
    pub diversification_tenure: usize,
}

impl Default for Params {
    fn default() -> Self {
        Params {
            max_iter: 1_000,
            diversification_tenure: 7,
        }
    }
}
