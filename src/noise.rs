use log::trace;
use rand::RngCore;

use crate::scatter::Scatter;

/// Adds centered uniform noise: `Y' = Y + noise_level * (U - 0.5)`, where
/// `U` is drawn fresh per sample from `[0, 1)`.
///
/// `noise_level` is a bounded amplitude scale, not a true signal-to-noise
/// ratio — the draw is uniform, not Gaussian. Callers skip this stage
/// entirely when `noise_level == 0.0`; it is not special-cased here so
/// that a caller passing an explicit RNG still gets deterministic,
/// reproducible no-op behavior if they choose to call it anyway.
pub fn add_noise(series: &Scatter, noise_level: f64, rng: &mut dyn RngCore) -> Scatter {
    let mut out = series.clone();
    for p in out.points_mut() {
        let u = (rng.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64);
        p.y += noise_level * (u - 0.5);
    }
    trace!("added noise (level={}) to {} samples", noise_level, out.len());
    out
}
