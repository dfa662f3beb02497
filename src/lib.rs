pub mod constants;
pub mod envelope;
pub mod error;
pub mod fft;
pub mod levelcross;
pub mod mixer;
pub mod noise;
pub mod orchestrator;
pub mod params;
pub mod scatter;
pub mod submodulator;
pub mod symbol_encoder;

#[cfg(feature = "csv")]
pub mod csvio;

// Re-exports for convenience
pub use error::SimError;
pub use fft::fft_compute;
pub use orchestrator::{auto_sim_time, create_signal, standard_params, standard_signal};
pub use params::{Direction, Encoding, SignalParameters, Standard, SubModulation};
pub use scatter::{Point, Scatter};
