use log::trace;

use crate::error::SimError;
use crate::params::SubModulation;
use crate::scatter::Scatter;

/// Synthesizes the time-domain envelope from a sub-symbol stream.
///
/// The envelope is a boxcar average of the last `trans_time` samples'
/// underlying sub-symbol values, mapped through a modulation-depth curve.
/// This is a crude first-order approximation of the antenna's finite
/// bandwidth: it smooths sharp 0<->1 transitions over roughly two carrier
/// cycles instead of switching instantaneously.
pub fn synthesize(
    sub_symbols: &[u8],
    bit_rate: f64,
    sub_modulation: SubModulation,
    sub_carrier_freq: f64,
    carrier_freq: f64,
    modulation_index: f64,
    sim_duration: f64,
    number_of_points: usize,
) -> Result<Scatter, SimError> {
    if sub_symbols.is_empty() {
        return Err(SimError::InvalidArgument("sub-symbol stream must not be empty".into()));
    }
    if number_of_points == 0 {
        return Err(SimError::InvalidArgument("number_of_points must be > 0".into()));
    }

    let n = number_of_points;
    let s_len = sub_symbols.len();

    let symbol_duration = if sub_modulation == SubModulation::None {
        1e9 / bit_rate / 4.0
    } else {
        1e9 / sub_carrier_freq / 2.0
    };

    let mod_depth = (100.0 - modulation_index) / (100.0 + modulation_index);

    // Sample count spanning two carrier periods: the boxcar smoothing
    // window width.
    let trans_time = (((2.0 * 1e9 / carrier_freq) * n as f64 / sim_duration).round() as usize).max(1);

    let xs: Vec<i64> = (0..n)
        .map(|i| (i as i64 * sim_duration as i64) / n as i64)
        .collect();

    let mut ys = vec![0.0f64; n];
    for i in 0..n {
        let window_start = i.saturating_sub(trans_time.saturating_sub(1));
        let mut sum = 0.0f64;
        let mut count = 0usize;
        for x in &xs[window_start..=i] {
            let mut k = (*x as f64 / symbol_duration) as usize;
            if k >= s_len {
                k = s_len - 1;
            }
            sum += if sub_symbols[k] == 1 { 1.0 } else { mod_depth };
            count += 1;
        }
        ys[i] = sum / count as f64;
    }

    trace!(
        "synthesized envelope of {} samples (trans_time={}, mod_depth={:.4})",
        n, trans_time, mod_depth
    );
    Ok(Scatter::from_xy(&xs, &ys))
}
