use log::{debug, warn};
use rand::RngCore;

use crate::constants::{CARRIER_FREQ, MAX_BIT_RATE, MIN_BIT_RATE, SUB_CARRIER_FREQ};
use crate::envelope;
use crate::error::SimError;
use crate::mixer;
use crate::noise;
use crate::params::{Direction, Encoding, SignalParameters, Standard, SubModulation};
use crate::scatter::Scatter;
use crate::submodulator;
use crate::symbol_encoder;

/// Runs the full pipeline: Encoder -> SubCarrierModulator ->
/// EnvelopeSynthesizer -> CarrierMixer -> NoiseAdder (optional).
///
/// Each stage's output is consumed by the next and dropped; only the
/// final series is returned. `rng` is required when `params.noise_level
/// > 0.0` and `None` when it is `0.0` — the noise stage is skipped
/// entirely in the latter case so a run with no noise is always
/// bit-identical across repeated calls.
pub fn create_signal(
    params: &SignalParameters,
    rng: Option<&mut dyn RngCore>,
) -> Result<Scatter, SimError> {
    params.validate()?;

    let symbols = symbol_encoder::encode(&params.payload, params.encoding)?;
    let sub_symbols = submodulator::modulate(
        &symbols,
        params.sub_modulation,
        params.sub_carrier_freq,
        params.bit_rate,
    )?;
    let env = envelope::synthesize(
        &sub_symbols,
        params.bit_rate,
        params.sub_modulation,
        params.sub_carrier_freq,
        params.carrier_freq,
        params.modulation_index,
        params.sim_duration,
        params.number_of_points,
    )?;
    let mixed = mixer::mix(&env, params.carrier_freq);

    let out = if params.noise_level > 0.0 {
        let mut fallback;
        let rng: &mut dyn RngCore = match rng {
            Some(r) => r,
            None => {
                fallback = rand::thread_rng();
                &mut fallback
            }
        };
        noise::add_noise(&mixed, params.noise_level, rng)
    } else {
        mixed
    };

    debug!(
        "createSignal: {} payload bytes -> {} samples ({:?}/{:?})",
        params.payload.len(),
        out.len(),
        params.encoding,
        params.sub_modulation
    );
    Ok(out)
}

struct Preset {
    encoding: Encoding,
    sub_modulation: SubModulation,
    sub_carrier_freq: f64,
    modulation_index: f64,
}

fn preset_for(standard: Standard, direction: Direction) -> Preset {
    match (standard, direction) {
        (Standard::NfcA, Direction::Pcd) => Preset {
            encoding: Encoding::ModMiller,
            sub_modulation: SubModulation::None,
            sub_carrier_freq: 0.0,
            modulation_index: 100.0,
        },
        (Standard::NfcA, Direction::Picc) => Preset {
            encoding: Encoding::Manchester,
            sub_modulation: SubModulation::Ook,
            sub_carrier_freq: SUB_CARRIER_FREQ,
            modulation_index: 10.0,
        },
        (Standard::NfcB, Direction::Pcd) => Preset {
            encoding: Encoding::Nrz,
            sub_modulation: SubModulation::None,
            sub_carrier_freq: 0.0,
            modulation_index: 10.0,
        },
        (Standard::NfcB, Direction::Picc) => Preset {
            encoding: Encoding::Nrz,
            sub_modulation: SubModulation::Bpsk,
            sub_carrier_freq: SUB_CARRIER_FREQ,
            modulation_index: 10.0,
        },
    }
}

/// Resolves a (standard, direction) pair and its auto-sized simulation
/// duration into a full [`SignalParameters`], without running the
/// pipeline. Exposed so a caller (e.g. the CLI) can inspect or serialize
/// the resolved parameters before — or instead of — calling
/// [`create_signal`] on them.
pub fn standard_params(
    payload: &[u8],
    standard: Standard,
    direction: Direction,
    bit_rate: f64,
    noise: f64,
    number_of_points: usize,
) -> SignalParameters {
    if bit_rate < MIN_BIT_RATE || bit_rate > MAX_BIT_RATE {
        warn!(
            "bit_rate {} outside the standard range [{}, {}]; NFC-V speeds are not modeled",
            bit_rate, MIN_BIT_RATE, MAX_BIT_RATE
        );
    }

    let preset = preset_for(standard, direction);
    let sim_duration = auto_sim_time(bit_rate, payload.len());

    SignalParameters {
        payload: payload.to_vec(),
        bit_rate,
        encoding: preset.encoding,
        sub_modulation: preset.sub_modulation,
        sub_carrier_freq: preset.sub_carrier_freq,
        carrier_freq: CARRIER_FREQ,
        modulation_index: preset.modulation_index,
        noise_level: noise,
        sim_duration,
        number_of_points,
    }
}

/// Resolves a (standard, direction) pair to its preset encoding, picks an
/// auto-sized simulation duration, and runs [`create_signal`].
pub fn standard_signal(
    payload: &[u8],
    standard: Standard,
    direction: Direction,
    bit_rate: f64,
    noise: f64,
    number_of_points: usize,
    rng: Option<&mut dyn RngCore>,
) -> Result<Scatter, SimError> {
    let params = standard_params(payload, standard, direction, bit_rate, noise, number_of_points);
    create_signal(&params, rng)
}

/// `simDuration (ns) = payload_size * 8 * 1e9 / bit_rate`.
pub fn auto_sim_time(bit_rate: f64, payload_size: usize) -> f64 {
    payload_size as f64 * 8.0 * 1e9 / bit_rate
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn base_params() -> SignalParameters {
        SignalParameters {
            payload: vec![0x01],
            bit_rate: 106_000.0,
            encoding: Encoding::Nrz,
            sub_modulation: SubModulation::None,
            sub_carrier_freq: 0.0,
            carrier_freq: 13.56e6,
            modulation_index: 0.0,
            noise_level: 0.0,
            sim_duration: 10_000.0,
            number_of_points: 1024,
        }
    }

    #[test]
    fn create_signal_rejects_invalid_params() {
        let mut p = base_params();
        p.payload.clear();
        assert!(create_signal(&p, None).is_err());
    }

    #[test]
    fn mixed_signal_stays_within_unit_amplitude_without_noise() {
        let p = base_params();
        let series = create_signal(&p, None).unwrap();
        for pt in series.points() {
            assert!(pt.y >= -1.0 - 1e-9 && pt.y <= 1.0 + 1e-9);
        }
    }

    #[test]
    fn no_noise_is_deterministic_across_runs() {
        let p = base_params();
        let a = create_signal(&p, None).unwrap();
        let b = create_signal(&p, None).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn noise_with_seeded_rng_is_deterministic() {
        let mut p = base_params();
        p.noise_level = 0.1;
        let mut rng_a = StdRng::seed_from_u64(99);
        let mut rng_b = StdRng::seed_from_u64(99);
        let a = create_signal(&p, Some(&mut rng_a)).unwrap();
        let b = create_signal(&p, Some(&mut rng_b)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn auto_sim_time_matches_known_value() {
        // 16 bytes at 424 kbit/s.
        let t = auto_sim_time(424_000.0, 16);
        assert!((t - 301_886.79).abs() < 0.1);
    }

    #[test]
    fn standard_signal_resolves_nfc_a_pcd_preset() {
        let series = standard_signal(&[0x4D], Standard::NfcA, Direction::Pcd, 106_000.0, 0.0, 1024, None);
        assert!(series.is_ok());
        assert_eq!(series.unwrap().len(), 1024);
    }

    #[test]
    fn standard_signal_out_of_range_bit_rate_still_proceeds() {
        // 50 kbit/s is below the standard range but should only warn.
        let series = standard_signal(&[0x01], Standard::NfcB, Direction::Picc, 50_000.0, 0.0, 512, None);
        assert!(series.is_ok());
    }

    #[test]
    fn standard_params_resolves_preset_without_running_pipeline() {
        let params = standard_params(&[0x4D], Standard::NfcA, Direction::Picc, 106_000.0, 0.0, 1024);
        assert_eq!(params.encoding, Encoding::Manchester);
        assert_eq!(params.sub_modulation, SubModulation::Ook);
        assert_eq!(params.sub_carrier_freq, SUB_CARRIER_FREQ);
        assert_eq!(params.carrier_freq, CARRIER_FREQ);
        assert_eq!(params.number_of_points, 1024);
    }
}
