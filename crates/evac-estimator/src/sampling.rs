//! Stochastic primitives shared by correspondence sampling and MH proposals.

use evac_core::SimRng;
use log::debug;
use statrs::distribution::{Binomial, Discrete};

/// Draw an index from `weights` with probability proportional to its weight.
///
/// Falls back to a uniform draw when the weights sum to effectively zero
/// (mirrors `original_source/EstimatorMeasurement.py::randSamp`'s degenerate
/// case, logged there and silently handled here via [`SimRng`]'s single
/// shared stream).
pub fn weighted_sample(weights: &[f64], rng: &mut SimRng) -> usize {
    debug_assert!(!weights.is_empty());
    let sum: f64 = weights.iter().sum();
    if sum < 1e-30 {
        debug!("degenerate weight vector (sum {sum:.3e}); falling back to uniform sample");
        return rng.gen_range(0..weights.len());
    }
    let u = rng.uniform01();
    let mut cum = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cum += w / sum;
        if cum >= u {
            return i;
        }
    }
    weights.len() - 1
}

/// `P(X = k)` for `X ~ Binomial(n, p)`, clamping degenerate inputs instead of
/// propagating a distribution-construction error: `n == 0` has a trivial
/// closed form, and `p` is always already in `[0, 1]` by construction but is
/// clamped defensively since it comes from sensor configuration.
pub fn binomial_pmf(k: u32, n: u32, p: f64) -> f64 {
    if n == 0 {
        return if k == 0 { 1.0 } else { 0.0 };
    }
    match Binomial::new(p.clamp(0.0, 1.0), n as u64) {
        Ok(dist) => dist.pmf(k as u64),
        Err(_) => 0.0,
    }
}
