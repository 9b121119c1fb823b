//! Reflecting-boundary parameter noise.

use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Folds `value` back into `[0, max]` by mirroring at both bounds.
///
/// Total over all finite reals: a value overshooting `max` by `d` lands at
/// `max - d`, a negative value `-d` lands at `d`, and larger excursions keep
/// folding with period `2 * max`. A non-positive `max` collapses to `0`.
#[must_use]
pub fn reflect(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        return 0.0;
    }
    let folded = max - (value.rem_euclid(2.0 * max) - max).abs();
    folded.clamp(0.0, max)
}

/// With probability `rate`, adds Gaussian noise with standard deviation
/// `max * rate` and reflects the result into `[0, max]`.
pub fn add_noise<R: Rng>(value: f64, max: f64, rate: f64, rng: &mut R) -> f64 {
    if rng.gen::<f64>() >= rate {
        return value;
    }
    let jitter = Normal::new(0.0, max * rate).map_or(0.0, |normal| normal.sample(rng));
    reflect(value + jitter, max)
}
