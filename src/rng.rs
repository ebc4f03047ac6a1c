use rand::Rng;

/// Source of the random suffix choices made during generation.
pub trait RandomSource {
    /// Returns an index in `0..bound`. `bound` is never zero.
    ///
    /// Generation indexes the candidate list with the result, so an index
    /// outside the range panics.
    fn pick(&mut self, bound: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn pick(&mut self, bound: usize) -> usize {
        self.random_range(0..bound)
    }
}
