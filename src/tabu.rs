//! Tabu list: one release iteration per vertex.
//!
//! A vertex evicted at iteration `i` with tenure `t` gets release `i + t`:
//! it may not re-enter the solution while `itr < i + t` and becomes
//! eligible again at exactly `itr == i + t`. Evicting an already-tabu
//! vertex keeps the later release.

#[derive(Clone, Debug)]
pub struct TabuList {
    release: Vec<usize>,
}

impl TabuList {
    pub fn new(n: usize) -> Self {
        Self { release: vec![0; n] }
    }

    /// Whether `v` is forbidden from re-entering S at iteration `itr`.
    #[inline]
    pub fn is_tabu(&self, v: usize, itr: usize) -> bool {
        self.release[v] > itr
    }

    /// Forbid `v` until iteration `release` (exclusive).
    #[inline]
    pub fn forbid(&mut self, v: usize, release: usize) {
        self.release[v] = self.release[v].max(release);
    }
}

/*──────────── unit tests ────────────*/
