// src/quantum/gate.rs
//! The single-qubit gate catalog
//!
//! Six fixed unitary operators acting on the column vector (α, β)ᵗ. The
//! catalog is static; presentation data such as colours lives in
//! [`palette`](super::palette).

use std::fmt::{self, Display};
use std::str::FromStr;

use ndarray::{array, Array2};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use super::gate_operations;
use super::state::Qubit;
use crate::error::BlochError;

/// Common complex numbers used in gate matrices
pub mod constants {
    use num_complex::Complex64;

    pub const ZERO: Complex64 = Complex64::new(0.0, 0.0);
    pub const ONE: Complex64 = Complex64::new(1.0, 0.0);
    pub const NEG_ONE: Complex64 = Complex64::new(-1.0, 0.0);

    /// The imaginary unit i
    pub const I: Complex64 = Complex64::new(0.0, 1.0);
    pub const NEG_I: Complex64 = Complex64::new(0.0, -1.0);

    /// 1/sqrt(2)
    pub const FRAC_1_SQRT_2: f64 = std::f64::consts::FRAC_1_SQRT_2;
    pub const HALF_AMPLITUDE: Complex64 = Complex64::new(FRAC_1_SQRT_2, 0.0);
    pub const NEG_HALF_AMPLITUDE: Complex64 = Complex64::new(-FRAC_1_SQRT_2, 0.0);

    /// e^{iπ/4}
    pub const EIGHTH_TURN: Complex64 = Complex64::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2);
}

/// A gate tag from the fixed catalog
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Gate {
    /// Pauli-X, bit flip
    X,

    /// Pauli-Y, bit and phase flip
    Y,

    /// Pauli-Z, phase flip
    Z,

    /// Hadamard, equal superposition
    H,

    /// Phase gate, quarter turn about Z
    S,

    /// π/8 gate, eighth turn about Z
    T,
}

impl Gate {
    /// Every gate in catalog order
    pub const ALL: [Gate; 6] = [Gate::X, Gate::Y, Gate::Z, Gate::H, Gate::S, Gate::T];

    /// Matrix entries as a fixed array, row major
    pub const fn elements(&self) -> [[Complex64; 2]; 2] {
        use constants::*;
        match self {
            Gate::X => [[ZERO, ONE], [ONE, ZERO]],
            Gate::Y => [[ZERO, NEG_I], [I, ZERO]],
            Gate::Z => [[ONE, ZERO], [ZERO, NEG_ONE]],
            Gate::H => [[HALF_AMPLITUDE, HALF_AMPLITUDE], [HALF_AMPLITUDE, NEG_HALF_AMPLITUDE]],
            Gate::S => [[ONE, ZERO], [ZERO, I]],
            Gate::T => [[ONE, ZERO], [ZERO, EIGHTH_TURN]],
        }
    }

    /// The 2×2 matrix of this gate
    pub fn matrix(&self) -> Array2<Complex64> {
        let [[a, b], [c, d]] = self.elements();
        array![[a, b], [c, d]]
    }

    /// Conjugate transpose of [`matrix`](Self::matrix)
    pub fn adjoint_matrix(&self) -> Array2<Complex64> {
        gate_operations::adjoint(&self.matrix())
    }

    /// Whether applying the gate twice is the identity
    ///
    /// S and T square to Z and S respectively, so only the Pauli gates and H
    /// are involutions.
    pub fn is_self_inverse(&self) -> bool {
        matches!(self, Gate::X | Gate::Y | Gate::Z | Gate::H)
    }

    /// Catalog gates whose product equals this gate's inverse exactly
    ///
    /// S⁴ = T⁸ = I, so S† = S³ and T† = T⁷.
    pub fn inverse_sequence(&self) -> Vec<Gate> {
        match self {
            Gate::S => vec![Gate::S; 3],
            Gate::T => vec![Gate::T; 7],
            other => vec![*other],
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Gate::X => "X",
            Gate::Y => "Y",
            Gate::Z => "Z",
            Gate::H => "H",
            Gate::S => "S",
            Gate::T => "T",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Gate::X => "Pauli-X",
            Gate::Y => "Pauli-Y",
            Gate::Z => "Pauli-Z",
            Gate::H => "Hadamard",
            Gate::S => "Phase",
            Gate::T => "π/8",
        }
    }

    /// Matrix-vector product without renormalization
    pub fn apply_raw(&self, state: &Qubit) -> Qubit {
        let [[m00, m01], [m10, m11]] = self.elements();
        let (alpha, beta) = (state.alpha(), state.beta());

        Qubit::from_raw(m00 * alpha + m01 * beta, m10 * alpha + m11 * beta)
    }

    /// Apply this gate to a state, returning a new state
    ///
    /// The result is rescaled to unit norm, so floating-point drift cannot
    /// accumulate over long gate chains.
    pub fn apply(&self, state: &Qubit) -> Qubit {
        self.apply_raw(state).renormalized()
    }
}

impl Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Gate {
    type Err = BlochError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "X" => Ok(Gate::X),
            "Y" => Ok(Gate::Y),
            "Z" => Ok(Gate::Z),
            "H" => Ok(Gate::H),
            "S" => Ok(Gate::S),
            "T" => Ok(Gate::T),
            _ => Err(BlochError::UnknownGate(s.to_string())),
        }
    }
}

impl TryFrom<char> for Gate {
    type Error = BlochError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        let mut buf = [0u8; 4];
        c.encode_utf8(&mut buf).parse()
    }
}
