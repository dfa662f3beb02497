use log::trace;

use crate::scatter::Scatter;

/// Mixes an envelope onto a fixed-phase carrier: `Y' = Y * sin(2*pi*f*X/1e9)`.
///
/// Assumes perfect amplitude modulation with the carrier's phase starting
/// at zero — no phase noise, no Doppler, no channel beyond this.
pub fn mix(envelope: &Scatter, carrier_freq: f64) -> Scatter {
    let mut out = envelope.clone();
    for p in out.points_mut() {
        p.y *= (2.0 * std::f64::consts::PI * carrier_freq * p.x as f64 / 1e9).sin();
    }
    trace!("mixed {} samples onto a {:.3e} Hz carrier", out.len(), carrier_freq);
    out
}
