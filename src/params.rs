use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// Bit-cell encoding applied to the payload before sub-carrier modulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Encoding {
    ModMiller,
    Nrz,
    Manchester,
}

/// Sub-carrier modulation applied to the encoded symbol stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubModulation {
    None,
    Ook,
    Bpsk,
}

/// Which ISO/IEC 14443 variant is being simulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Standard {
    NfcA,
    NfcB,
}

/// Which side of the exchange is transmitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Proximity Coupling Device — the reader.
    Pcd,
    /// Proximity Integrated Circuit Card — the card.
    Picc,
}

/// Every input to one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalParameters {
    pub payload: Vec<u8>,
    pub bit_rate: f64,
    pub encoding: Encoding,
    pub sub_modulation: SubModulation,
    /// Hz; must be 0 iff `sub_modulation == SubModulation::None`.
    pub sub_carrier_freq: f64,
    pub carrier_freq: f64,
    /// Percent, 0..=100.
    pub modulation_index: f64,
    /// Uniform noise amplitude scale, 0.0..=1.0 (not a true SNR).
    pub noise_level: f64,
    /// Nanoseconds.
    pub sim_duration: f64,
    /// Output sample count. Must be a power of two if the result will be
    /// handed to `fft_compute`.
    pub number_of_points: usize,
}

impl SignalParameters {
    /// Validate the cross-field invariants every pipeline stage relies on.
    /// Called once at orchestrator entry; individual stages trust their
    /// inputs rather than re-checking.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.payload.is_empty() {
            return Err(SimError::InvalidArgument("payload must not be empty".into()));
        }
        if self.bit_rate <= 0.0 {
            return Err(SimError::InvalidArgument("bit_rate must be > 0".into()));
        }
        if self.sim_duration <= 0.0 {
            return Err(SimError::InvalidArgument("sim_duration must be > 0".into()));
        }
        if self.modulation_index < 0.0 || self.modulation_index > 100.0 {
            return Err(SimError::InvalidArgument(
                "modulation_index must be in 0..=100".into(),
            ));
        }
        if self.noise_level < 0.0 || self.noise_level > 1.0 {
            return Err(SimError::InvalidArgument(
                "noise_level must be in 0.0..=1.0".into(),
            ));
        }
        if self.number_of_points == 0 {
            return Err(SimError::InvalidArgument(
                "number_of_points must be > 0".into(),
            ));
        }

        match self.sub_modulation {
            SubModulation::None => {
                if self.sub_carrier_freq != 0.0 {
                    return Err(SimError::InvalidArgument(
                        "sub_carrier_freq must be 0 when sub_modulation is None".into(),
                    ));
                }
            }
            SubModulation::Ook | SubModulation::Bpsk => {
                if self.sub_carrier_freq <= 0.0 {
                    return Err(SimError::InvalidArgument(
                        "sub_carrier_freq must be > 0 when a sub-modulation is active".into(),
                    ));
                }
                let ratio = self.sub_carrier_freq / self.bit_rate;
                if ratio < 2.0 || ratio.fract() != 0.0 {
                    return Err(SimError::Precondition(format!(
                        "sub_carrier_freq ({}) must be an integer multiple (>= 2) of bit_rate ({})",
                        self.sub_carrier_freq, self.bit_rate
                    )));
                }
            }
        }

        Ok(())
    }
}
