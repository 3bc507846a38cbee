//! The randomness seam.
//!
//! Every strategy draws through [`RandomSource`] rather than a global generator. Any `rand::Rng`
//! is a `RandomSource`, so the CLI passes `thread_rng()` and tests pass a seeded `StdRng`.

use rand::seq::SliceRandom;
use rand::Rng;

pub trait RandomSource {
    /// A uniform integer in `0..n`. Panics if `n` is zero.
    fn index_below(&mut self, n: usize) -> usize;

    /// A uniform integer in `low..=high`. Panics if `low > high`.
    fn between_inclusive(&mut self, low: usize, high: usize) -> usize;

    /// A uniformly chosen element, or `None` for an empty slice.
    fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>;

    /// An unbiased in-place shuffle.
    fn shuffle<T>(&mut self, items: &mut [T]);

    /// A fair coin flip.
    fn coin(&mut self) -> bool {
        self.index_below(2) == 0
    }
}

/// Note that `rand`'s uniform sampler already rejects out-of-range samples, so none of these are
/// biased by a modulo reduction.
impl<R: Rng + ?Sized> RandomSource for R {
    fn index_below(&mut self, n: usize) -> usize {
        self.gen_range(0..n)
    }

    fn between_inclusive(&mut self, low: usize, high: usize) -> usize {
        self.gen_range(low..=high)
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        SliceRandom::choose(items, self)
    }

    fn shuffle<T>(&mut self, items: &mut [T]) {
        SliceRandom::shuffle(items, self)
    }
}
