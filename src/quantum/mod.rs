// src/quantum/mod.rs
//! Single-qubit states and gates
//!
//! This module implements the qubit state, its Bloch sphere projection, the
//! fixed gate catalog and ordered gate sequences.

pub mod state;
pub mod bloch;
pub mod gate;
pub mod gate_operations;
pub mod circuit;
pub mod palette;

pub use state::{Qubit, Outcome, Amplitudes};
pub use bloch::BlochVector;
pub use gate::Gate;
pub use circuit::GateSequence;
pub use palette::{GateStyle, Rgb};

/// Re-export commonly used types
pub mod prelude {
    pub use super::{Qubit, Outcome, BlochVector, Gate, GateSequence};
}
