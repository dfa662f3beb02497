use log::trace;

use crate::error::SimError;
use crate::params::SubModulation;

/// Expands a symbol stream into sub-symbols at the sub-carrier's
/// half-period resolution.
///
/// `W = (sub_carrier_freq / bit_rate) / 2` sub-symbols are written per
/// input symbol. When `sub_modulation` is `None`, `sub_carrier_freq` and
/// `bit_rate` are unused and the stream passes through unchanged.
pub fn modulate(
    symbols: &[u8],
    sub_modulation: SubModulation,
    sub_carrier_freq: f64,
    bit_rate: f64,
) -> Result<Vec<u8>, SimError> {
    if sub_modulation == SubModulation::None {
        return Ok(symbols.to_vec());
    }

    let ratio = sub_carrier_freq / bit_rate;
    if ratio < 2.0 || ratio.fract() != 0.0 {
        return Err(SimError::Precondition(format!(
            "sub_carrier_freq ({}) must be an integer multiple (>= 2) of bit_rate ({})",
            sub_carrier_freq, bit_rate
        )));
    }
    let w = (ratio / 2.0) as usize;

    let mut sub = vec![0u8; symbols.len() * w];
    for (i, &s) in symbols.iter().enumerate() {
        let base = i * w;
        let pattern = sub_symbol_pattern(sub_modulation, s, w);
        sub[base..base + w].copy_from_slice(&pattern);
    }

    trace!(
        "sub-carrier-modulated {} symbols into {} sub-symbols ({:?}, W={})",
        symbols.len(),
        sub.len(),
        sub_modulation,
        w
    );
    Ok(sub)
}

/// The `w` sub-symbols written for one input symbol `s`.
fn sub_symbol_pattern(sub_modulation: SubModulation, s: u8, w: usize) -> Vec<u8> {
    match sub_modulation {
        SubModulation::None => unreachable!("None is handled by pass-through above"),
        // OOK: sub-carrier present (all ones) for s=1, absent (alternating
        // from low, i.e. the sub-carrier's own waveform) for s=0.
        SubModulation::Ook => {
            if s == 1 {
                vec![1; w]
            } else {
                alternating(w, false)
            }
        }
        // BPSK: sub-carrier always present; its phase flips 180 degrees
        // between s=1 (alternation starts high) and s=0 (starts low).
        SubModulation::Bpsk => alternating(w, s == 1),
    }
}

/// `w` sub-symbols alternating 0/1, starting high (1,0,1,0,…) or low
/// (0,1,0,1,…).
fn alternating(w: usize, start_high: bool) -> Vec<u8> {
    (0..w)
        .map(|k| if start_high { (k + 1) % 2 } else { k % 2 } as u8)
        .collect()
}
