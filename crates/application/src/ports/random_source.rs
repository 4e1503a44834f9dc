/// Source of uniform choices among tied candidates.
pub trait RandomSource: Send + Sync {
    /// Returns an index in `0..upper`. Callers never pass `upper < 2`.
    fn index(&self, upper: usize) -> usize;
}

/// Picks one candidate. A single candidate is returned without consulting `rng`.
pub fn pick<'a, T>(rng: &dyn RandomSource, candidates: &'a [T]) -> Option<&'a T> {
    match candidates.len() {
        0 => None,
        1 => candidates.first(),
        n => candidates.get(rng.index(n).min(n - 1)),
    }
}
