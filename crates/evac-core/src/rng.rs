//! Process-wide deterministic RNG.
//!
//! The tick discipline this workspace implements is strictly single-threaded:
//! simulator step, sensor measurement, predict, and update all run in
//! sequence on one thread (no parallel intent phase splitting agent RNGs
//! across worker threads). So unlike a framework that hands every agent its
//! own RNG, this workspace keeps a single seeded RNG and threads it through
//! every stochastic call. Every sampling primitive funnels through this type
//! so a run is reproducible end-to-end from one seed.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// The one RNG for an entire run.
///
/// Every stochastic decision — behavior-kernel coin flips, correspondence
/// sampling, MH proposals — draws from this RNG in the fixed order the tick
/// loop calls them, so a given seed always reproduces the same run.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types
    /// (`rng.inner().sample(...)`).
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Uniform draw in `[0, 1)` — the `u ~ U(0, 1)` primitive behind the
    /// weighted-sample function.
    #[inline]
    pub fn uniform01(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }

    /// Choose a random element from a non-empty slice.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
