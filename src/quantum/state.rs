// src/quantum/state.rs
//! Single-qubit pure states
//!
//! A [`Qubit`] is the value α|0⟩ + β|1⟩ with |α|² + |β|² = 1. States are
//! immutable values: gates produce new states and never mutate their input.

use std::f64::consts::{FRAC_1_SQRT_2, PI};
use std::fmt::{self, Display};

use ndarray::{array, Array1, Array2};
use num_complex::Complex64;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::bloch::BlochVector;
use super::gate_operations;
use crate::error::{BlochError, Result};

/// Tolerance accepted by the validated constructors
pub const NORM_TOLERANCE: f64 = 1e-9;

/// A measurement outcome in the computational basis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Measurement yielded 0
    Zero,
    /// Measurement yielded 1
    One,
}

impl Outcome {
    /// The basis state this outcome collapses to
    pub fn collapsed_state(self) -> Qubit {
        match self {
            Outcome::Zero => Qubit::ground(),
            Outcome::One => Qubit::one(),
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Zero => write!(f, "0"),
            Outcome::One => write!(f, "1"),
        }
    }
}

/// Serialized form of a qubit; validated on the way back in
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Amplitudes {
    pub alpha: Complex64,
    pub beta: Complex64,
}

/// A single qubit state α|0⟩ + β|1⟩
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Amplitudes", into = "Amplitudes")]
pub struct Qubit {
    alpha: Complex64,
    beta: Complex64,
}

impl Qubit {
    /// Create a qubit state, rejecting amplitudes that are not normalized
    pub fn new(alpha: Complex64, beta: Complex64) -> Result<Self> {
        let qubit = Qubit { alpha, beta };

        if !qubit.is_finite() {
            return Err(BlochError::NonFinite("qubit amplitudes"));
        }

        if !qubit.is_normalized(NORM_TOLERANCE) {
            return Err(BlochError::NotNormalized {
                norm_sqr: qubit.norm_sqr(),
            });
        }

        Ok(qubit)
    }

    /// Create a qubit state by rescaling arbitrary non-zero amplitudes
    pub fn normalized_from(alpha: Complex64, beta: Complex64) -> Result<Self> {
        let raw = Qubit { alpha, beta };

        if !raw.is_finite() {
            return Err(BlochError::NonFinite("qubit amplitudes"));
        }

        let norm = raw.norm_sqr().sqrt();
        if norm == 0.0 {
            return Err(BlochError::ZeroVector);
        }

        Ok(Qubit {
            alpha: alpha / norm,
            beta: beta / norm,
        })
    }

    /// Product of a gate matrix and a state, normalized or not
    pub(crate) fn from_raw(alpha: Complex64, beta: Complex64) -> Self {
        Qubit { alpha, beta }
    }

    /// The ground state |0⟩, north pole of the Bloch sphere
    pub fn ground() -> Self {
        Qubit {
            alpha: Complex64::new(1.0, 0.0),
            beta: Complex64::new(0.0, 0.0),
        }
    }

    /// The excited state |1⟩
    pub fn one() -> Self {
        Qubit {
            alpha: Complex64::new(0.0, 0.0),
            beta: Complex64::new(1.0, 0.0),
        }
    }

    /// The |+⟩ state
    pub fn plus() -> Self {
        Qubit {
            alpha: Complex64::new(FRAC_1_SQRT_2, 0.0),
            beta: Complex64::new(FRAC_1_SQRT_2, 0.0),
        }
    }

    /// The |-⟩ state
    pub fn minus() -> Self {
        Qubit {
            alpha: Complex64::new(FRAC_1_SQRT_2, 0.0),
            beta: Complex64::new(-FRAC_1_SQRT_2, 0.0),
        }
    }

    /// The |+i⟩ state
    pub fn plus_i() -> Self {
        Qubit {
            alpha: Complex64::new(FRAC_1_SQRT_2, 0.0),
            beta: Complex64::new(0.0, FRAC_1_SQRT_2),
        }
    }

    /// The |-i⟩ state
    pub fn minus_i() -> Self {
        Qubit {
            alpha: Complex64::new(FRAC_1_SQRT_2, 0.0),
            beta: Complex64::new(0.0, -FRAC_1_SQRT_2),
        }
    }

    /// The state cos(θ/2)|0⟩ + e^{iφ} sin(θ/2)|1⟩
    ///
    /// θ is the polar angle measured from +Z, φ the azimuth measured from +X.
    pub fn from_angles(theta: f64, phi: f64) -> Self {
        Qubit {
            alpha: Complex64::new((theta / 2.0).cos(), 0.0),
            beta: Complex64::from_polar((theta / 2.0).sin(), phi),
        }
    }

    /// A state drawn uniformly from the surface of the Bloch sphere
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let z: f64 = rng.gen_range(-1.0..=1.0);
        let phi: f64 = rng.gen_range(0.0..2.0 * PI);
        Self::from_angles(z.clamp(-1.0, 1.0).acos(), phi)
    }

    pub fn alpha(&self) -> Complex64 {
        self.alpha
    }

    pub fn beta(&self) -> Complex64 {
        self.beta
    }

    /// Amplitudes as a column vector (α, β)ᵗ
    pub fn to_array(&self) -> Array1<Complex64> {
        array![self.alpha, self.beta]
    }

    /// |α|² + |β|²
    pub fn norm_sqr(&self) -> f64 {
        self.alpha.norm_sqr() + self.beta.norm_sqr()
    }

    pub fn is_normalized(&self, tolerance: f64) -> bool {
        (self.norm_sqr() - 1.0).abs() <= tolerance
    }

    fn is_finite(&self) -> bool {
        self.alpha.is_finite() && self.beta.is_finite()
    }

    /// Rescale to unit norm
    ///
    /// A zero or non-finite state has no direction and is returned unchanged.
    pub fn renormalized(&self) -> Self {
        let norm = self.norm_sqr().sqrt();
        if norm > 0.0 && norm.is_finite() {
            Qubit {
                alpha: self.alpha / norm,
                beta: self.beta / norm,
            }
        } else {
            *self
        }
    }

    /// Multiply a 2×2 unitary onto this state
    ///
    /// Non-unitary operators are rejected so the result is always a valid
    /// state; the product is renormalized like [`Gate::apply`](super::gate::Gate::apply).
    pub fn apply_matrix(&self, matrix: &Array2<Complex64>) -> Result<Self> {
        if matrix.shape() != [2, 2] {
            return Err(BlochError::DimensionMismatch {
                rows: matrix.shape()[0],
                cols: matrix.shape()[1],
            });
        }

        if !gate_operations::is_unitary(matrix, NORM_TOLERANCE) {
            return Err(BlochError::NonUnitary {
                deviation: gate_operations::unitarity_deviation(matrix),
            });
        }

        let amplitudes = matrix.dot(&self.to_array());
        Qubit::normalized_from(amplitudes[0], amplitudes[1])
    }

    /// Inner product ⟨self|other⟩
    pub fn inner_product(&self, other: &Self) -> Complex64 {
        self.alpha.conj() * other.alpha + self.beta.conj() * other.beta
    }

    /// |⟨self|other⟩|², insensitive to global phase
    pub fn fidelity(&self, other: &Self) -> f64 {
        self.inner_product(other).norm_sqr()
    }

    /// Probability of measuring 0
    pub fn probability_zero(&self) -> f64 {
        self.alpha.norm_sqr() / self.norm_sqr()
    }

    /// Probability of measuring 1
    pub fn probability_one(&self) -> f64 {
        self.beta.norm_sqr() / self.norm_sqr()
    }

    /// Sample a computational-basis measurement
    ///
    /// Returns the outcome together with the collapsed post-measurement state.
    pub fn measure<R: Rng>(&self, rng: &mut R) -> (Outcome, Qubit) {
        let outcome = if rng.gen::<f64>() < self.probability_zero() {
            Outcome::Zero
        } else {
            Outcome::One
        };
        (outcome, outcome.collapsed_state())
    }

    /// Point on the Bloch sphere for this state
    pub fn bloch_vector(&self) -> BlochVector {
        BlochVector::from_qubit(self)
    }
}

impl Default for Qubit {
    fn default() -> Self {
        Self::ground()
    }
}

impl TryFrom<Amplitudes> for Qubit {
    type Error = BlochError;

    fn try_from(value: Amplitudes) -> Result<Self> {
        Qubit::new(value.alpha, value.beta)
    }
}

impl From<Qubit> for Amplitudes {
    fn from(qubit: Qubit) -> Self {
        Amplitudes {
            alpha: qubit.alpha,
            beta: qubit.beta,
        }
    }
}

impl Display for Qubit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "({:.6}{:+.6}i)|0⟩ + ({:.6}{:+.6}i)|1⟩",
            self.alpha.re, self.alpha.im, self.beta.re, self.beta.im
        )
    }
}
