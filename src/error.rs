use std::fmt;

/// Errors that can occur while running the signal-generation pipeline or
/// its analysis utilities.
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// A parameter was missing, empty, or outside its valid domain.
    InvalidArgument(String),
    /// A relationship between two otherwise-valid parameters was violated
    /// (e.g. a non-integer sub-carrier/bit-rate ratio, a non-power-of-two
    /// FFT length).
    Precondition(String),
    /// File I/O failed (CSV export only).
    Io(String),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
            SimError::Precondition(msg) => write!(f, "precondition violated: {}", msg),
            SimError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for SimError {}
