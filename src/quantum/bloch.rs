// src/quantum/bloch.rs
//! Bloch sphere coordinates
//!
//! Every single-qubit pure state maps, up to global phase, onto a point of the
//! unit sphere:
//!
//! x = 2·Re(α*β), y = 2·Im(α*β), z = |α|² − |β|²
//!
//! This is the only place that formula lives; renderers and the puzzle check
//! both go through [`BlochVector::from_qubit`].

use std::f64::consts::PI;
use std::fmt::{self, Display};
use std::ops::{Neg, Sub};

use serde::{Deserialize, Serialize};

use super::state::Qubit;

/// A point (x, y, z) on or inside the unit sphere
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct BlochVector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl BlochVector {
    pub const NORTH: BlochVector = BlochVector { x: 0.0, y: 0.0, z: 1.0 };
    pub const SOUTH: BlochVector = BlochVector { x: 0.0, y: 0.0, z: -1.0 };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Project a qubit state onto the sphere
    ///
    /// The state is renormalized first, so amplitudes that drifted off the
    /// unit norm still land on the sphere. The zero vector maps to the origin.
    pub fn from_qubit(qubit: &Qubit) -> Self {
        let state = qubit.renormalized();
        let alpha = state.alpha();
        let beta = state.beta();

        let alpha_conj_beta = alpha.conj() * beta;

        Self {
            x: 2.0 * alpha_conj_beta.re,
            y: 2.0 * alpha_conj_beta.im,
            z: alpha.norm_sqr() - beta.norm_sqr(),
        }
    }

    /// Spherical coordinates (θ, φ) with θ ∈ [0, π] and φ ∈ [0, 2π)
    pub fn angles(&self) -> (f64, f64) {
        let r = self.magnitude();
        if r < 1e-12 {
            return (0.0, 0.0);
        }

        let theta = (self.z / r).clamp(-1.0, 1.0).acos();
        let phi = self.y.atan2(self.x);
        let phi = if phi < 0.0 { phi + 2.0 * PI } else { phi };

        (theta, phi)
    }

    /// The canonical state at this point, with real non-negative α
    pub fn to_qubit(&self) -> Qubit {
        let (theta, phi) = self.angles();
        Qubit::from_angles(theta, phi)
    }

    /// Euclidean norm; 1 for pure states
    pub fn magnitude(&self) -> f64 {
        self.dot(self).sqrt()
    }

    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Euclidean distance in ℝ³; between 0 and 2 for points on the sphere
    pub fn distance(&self, other: &Self) -> f64 {
        (*self - *other).magnitude()
    }

    /// The diametrically opposite point (the orthogonal state)
    pub fn antipode(&self) -> Self {
        -*self
    }

    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.distance(other) <= tolerance
    }

    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl Sub for BlochVector {
    type Output = BlochVector;

    fn sub(self, other: BlochVector) -> BlochVector {
        BlochVector::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Neg for BlochVector {
    type Output = BlochVector;

    fn neg(self) -> BlochVector {
        BlochVector::new(-self.x, -self.y, -self.z)
    }
}

impl From<(f64, f64, f64)> for BlochVector {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self { x, y, z }
    }
}

impl From<BlochVector> for (f64, f64, f64) {
    fn from(v: BlochVector) -> Self {
        (v.x, v.y, v.z)
    }
}

impl From<[f64; 3]> for BlochVector {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self { x, y, z }
    }
}

impl From<&Qubit> for BlochVector {
    fn from(qubit: &Qubit) -> Self {
        Self::from_qubit(qubit)
    }
}

impl Display for BlochVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4}, {:.4})", self.x, self.y, self.z)
    }
}
