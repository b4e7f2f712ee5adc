// src/error.rs
//! Error types for the qubit simulation core
//!
//! Gate application, Bloch projection and distances are total and never fail.
//! Errors only come from validated constructors, custom operators, parsing,
//! configuration and the sequence solver.

use thiserror::Error;

/// Errors raised by fallible operations of this crate
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BlochError {
    /// Amplitudes do not satisfy |α|² + |β|² = 1 within tolerance
    #[error("Qubit state is not normalized: |α|² + |β|² = {norm_sqr}")]
    NotNormalized { norm_sqr: f64 },

    /// An amplitude or coordinate was NaN or infinite
    #[error("Non-finite value in {0}")]
    NonFinite(&'static str),

    /// Both amplitudes are zero, so there is no direction to normalize to
    #[error("Cannot normalize the zero vector")]
    ZeroVector,

    /// An operator that is not 2×2
    #[error("Matrix dimension mismatch: expected 2x2, got {rows}x{cols}")]
    DimensionMismatch { rows: usize, cols: usize },

    /// An operator that does not preserve the norm of a state
    #[error("Matrix is not unitary: U†U deviates from I by {deviation}")]
    NonUnitary { deviation: f64 },

    /// A gate symbol outside the catalog
    #[error("Unknown gate '{0}': expected one of X, Y, Z, H, S, T")]
    UnknownGate(String),

    /// A configuration field is out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Sequence length exceeds the allowed maximum
    #[error("Sequence of length {len} exceeds maximum {max}")]
    SequenceTooLong { len: usize, max: usize },
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, BlochError>;
