//! Single-qubit simulation core for Bloch sphere puzzles
//!
//! This crate models one qubit in a pure state, the six catalog gates
//! X, Y, Z, H, S and T, and the Bloch vector used both to render the state
//! and to decide whether a puzzle target has been reached.
//!
//! ```
//! use bloch::{apply, bloch_vector, distance, ground_state, BlochVector, Gate};
//!
//! let state = [Gate::H, Gate::Z, Gate::H]
//!     .iter()
//!     .fold(ground_state(), |s, g| apply(*g, &s));
//!
//! let d = distance(bloch_vector(&state), BlochVector::new(0.0, 0.0, -1.0));
//! assert!(d < 1e-9);
//! ```

pub mod config;
pub mod error;
pub mod quantum;
pub mod simulators;

pub use config::{DriftPolicy, SimulatorConfig};
pub use error::{BlochError, Result};
pub use quantum::{BlochVector, Gate, GateSequence, Qubit};
pub use simulators::QubitSimulator;

/// Create a prelude module for convenient imports
pub mod prelude {
    pub use crate::quantum::prelude::*;
    pub use crate::{apply, bloch_vector, distance, ground_state};
    pub use crate::{BlochError, DriftPolicy, QubitSimulator, SimulatorConfig};
}

// Version and crate information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");

/// The ground state |0⟩
pub fn ground_state() -> Qubit {
    Qubit::ground()
}

/// Apply `gate` to `state`, producing a new state
pub fn apply(gate: Gate, state: &Qubit) -> Qubit {
    gate.apply(state)
}

/// Bloch sphere point of `state`
pub fn bloch_vector(state: &Qubit) -> BlochVector {
    BlochVector::from_qubit(state)
}

/// Euclidean distance between two Bloch vectors, in [0, 2] on the sphere
pub fn distance(a: BlochVector, b: BlochVector) -> f64 {
    a.distance(&b)
}
