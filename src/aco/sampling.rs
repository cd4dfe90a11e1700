//! Weighted categorical sampling.
//!
//! Exposed as a free function over any RNG so deterministic tests can drive
//! the direction choice directly.

use rand::Rng;

/// Sample an index with probability proportional to `weights[i]`.
///
/// Zero-weight indices are never chosen. Returns `None` when the weights sum
/// to zero or the slice is empty.
pub fn sample_weighted<R: Rng>(rng: &mut R, weights: &[f64]) -> Option<usize> {
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return None;
    }

    let mut threshold = rng.gen::<f64>() * total;
    for (i, &weight) in weights.iter().enumerate() {
        threshold -= weight;
        if threshold < 0.0 {
            return Some(i);
        }
    }

    // Round-off can leave a sliver of threshold past the final weight; fall
    // back to the last index that could have been chosen.
    weights.iter().rposition(|&weight| weight > 0.0)
}
