// src/quantum/gate_operations.rs
//! Matrix-level operations on 2×2 gate operators
//!
//! Used to check the catalog's algebraic laws and to collapse a gate sequence
//! into a single operator.

use ndarray::Array2;
use num_complex::Complex64;

use super::gate::Gate;

/// The 2×2 identity
pub fn identity() -> Array2<Complex64> {
    Array2::eye(2)
}

/// Conjugate transpose U†
pub fn adjoint(matrix: &Array2<Complex64>) -> Array2<Complex64> {
    matrix.t().mapv(|c| c.conj())
}

/// The operator equivalent to applying `gates` left to right
///
/// The first gate acts first, so it ends up rightmost in the product.
pub fn compose(gates: &[Gate]) -> Array2<Complex64> {
    gates
        .iter()
        .fold(identity(), |acc, gate| gate.matrix().dot(&acc))
}

/// Largest element-wise distance between U†U and I
///
/// Non-square matrices and non-finite entries report infinity.
pub fn unitarity_deviation(matrix: &Array2<Complex64>) -> f64 {
    let (rows, cols) = matrix.dim();
    if rows != cols {
        return f64::INFINITY;
    }

    let product = adjoint(matrix).dot(matrix);
    let eye: Array2<Complex64> = Array2::eye(rows);

    product
        .iter()
        .zip(eye.iter())
        .map(|(a, b)| (a - b).norm())
        .fold(0.0, |worst, d| if d.is_nan() { f64::INFINITY } else { worst.max(d) })
}

/// Whether U†U = I within `tolerance` per element
pub fn is_unitary(matrix: &Array2<Complex64>, tolerance: f64) -> bool {
    unitarity_deviation(matrix) <= tolerance
}

/// Element-wise comparison with tolerance
pub fn approx_eq(a: &Array2<Complex64>, b: &Array2<Complex64>, tolerance: f64) -> bool {
    a.shape() == b.shape() && a.iter().zip(b.iter()).all(|(x, y)| (x - y).norm() <= tolerance)
}

/// Whether `b = e^{iθ}·a` for some global phase θ
///
/// The phase is read off the largest element of `a`, then every element is
/// compared.
pub fn equal_up_to_global_phase(a: &Array2<Complex64>, b: &Array2<Complex64>, tolerance: f64) -> bool {
    if a.shape() != b.shape() {
        return false;
    }

    let pivot = a
        .iter()
        .zip(b.iter())
        .max_by(|(x, _), (y, _)| x.norm_sqr().total_cmp(&y.norm_sqr()));

    let (pa, pb) = match pivot {
        Some((pa, pb)) if pa.norm() > tolerance => (*pa, *pb),
        _ => return approx_eq(a, b, tolerance),
    };

    let phase = pb / pa;
    if (phase.norm() - 1.0).abs() > tolerance {
        return false;
    }

    a.iter()
        .zip(b.iter())
        .all(|(x, y)| (x * phase - y).norm() <= tolerance)
}
