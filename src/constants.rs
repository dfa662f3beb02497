/// Physical-layer constants matching the ISO/IEC 14443 standard presets.

// ── Carrier ──

/// The 13.56 MHz ISM-band carrier every NFC-A/B exchange rides on.
pub const CARRIER_FREQ: f64 = 13.56e6;

/// Default PICC load-modulation sub-carrier frequency (Hz).
pub const SUB_CARRIER_FREQ: f64 = 848e3;

// ── Bit rate ──

/// Default bit rate (bit/s) used when a caller does not specify one.
pub const DEFAULT_BIT_RATE: f64 = 106_000.0;

/// Lower bound of the standard-defined bit-rate range (106 kbit/s).
/// Bit rates outside [MIN_BIT_RATE, MAX_BIT_RATE] are accepted but logged
/// as a warning — NFC-V (212/424 kbit/s and up) is not modeled.
pub const MIN_BIT_RATE: f64 = 106_000.0;

/// Upper bound of the standard-defined bit-rate range (424 kbit/s).
pub const MAX_BIT_RATE: f64 = 424_000.0;

// ── Sampling ──

/// Default point count for a simulation run; a power of two so the
/// series can feed the FFT without resampling.
pub const DEFAULT_NB_POINTS: usize = 16384;

// ── Symbol encoding ──

/// Symbols emitted per payload bit.
pub const SYMBOLS_PER_BIT: usize = 4;
