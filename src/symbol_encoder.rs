use log::trace;

use crate::constants::SYMBOLS_PER_BIT;
use crate::error::SimError;
use crate::params::Encoding;

/// Turns a payload into a dense symbol stream at [`SYMBOLS_PER_BIT`]
/// symbols per bit, bit order LSB-first within each byte: bit `j` of byte
/// `i` maps to symbols `[32*i + 4*j .. 32*i + 4*j + 4)`.
pub fn encode(payload: &[u8], encoding: Encoding) -> Result<Vec<u8>, SimError> {
    if payload.is_empty() {
        return Err(SimError::InvalidArgument("payload must not be empty".into()));
    }

    let mut symbols = Vec::with_capacity(payload.len() * 8 * SYMBOLS_PER_BIT);
    let mut prev_bit: Option<u8> = None;

    for &byte in payload {
        for j in 0..8 {
            let bit = (byte >> j) & 1;
            let pattern = match encoding {
                Encoding::Nrz => nrz_pattern(bit),
                Encoding::Manchester => manchester_pattern(bit),
                Encoding::ModMiller => mod_miller_pattern(bit, prev_bit),
            };
            symbols.extend_from_slice(&pattern);
            prev_bit = Some(bit);
        }
    }

    trace!(
        "encoded {} payload bytes into {} symbols ({:?})",
        payload.len(),
        symbols.len(),
        encoding
    );
    Ok(symbols)
}

fn nrz_pattern(bit: u8) -> [u8; 4] {
    if bit == 1 {
        [1, 1, 1, 1]
    } else {
        [0, 0, 0, 0]
    }
}

fn manchester_pattern(bit: u8) -> [u8; 4] {
    if bit == 1 {
        [0, 0, 1, 1]
    } else {
        [1, 1, 0, 0]
    }
}

/// Modified Miller encodes three distinct half-cell patterns rather than
/// the two-pattern approximation some historical implementations collapse
/// "0 after 1" and "0 after 0" into. `prev_bit == None` means this is the
/// payload's first bit, which is seeded as if preceded by a 1.
fn mod_miller_pattern(bit: u8, prev_bit: Option<u8>) -> [u8; 4] {
    if bit == 1 {
        [1, 1, 0, 1]
    } else if prev_bit == Some(0) {
        [0, 1, 1, 1]
    } else {
        [1, 1, 1, 1]
    }
}
