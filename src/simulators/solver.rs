//! Puzzle solving over the gate catalog
//!
//! Sequences are enumerated shortest first. Each depth holds 6^depth
//! candidates which are evaluated in parallel with rayon; the first match in
//! catalog order wins, so results are deterministic.

use log::debug;
use rayon::prelude::*;

use crate::error::{BlochError, Result};
use crate::quantum::bloch::BlochVector;
use crate::quantum::circuit::GateSequence;
use crate::quantum::gate::Gate;
use crate::quantum::state::Qubit;

/// Deepest search accepted by [`find_sequence`]; 6^8 candidates at the last level
pub const MAX_SEARCH_DEPTH: usize = 8;

/// Decode the `index`-th sequence of length `len` in catalog order
fn sequence_at(mut index: usize, len: usize) -> GateSequence {
    let base = Gate::ALL.len();
    let mut gates = vec![Gate::X; len];
    for slot in gates.iter_mut().rev() {
        *slot = Gate::ALL[index % base];
        index /= base;
    }
    GateSequence::from_gates(gates)
}

/// Shortest sequence taking `start` within `threshold` of `target`
///
/// Returns `Ok(None)` when no sequence of at most `max_len` gates reaches the
/// target. An empty sequence is returned when `start` already matches.
pub fn find_sequence(
    start: &Qubit,
    target: &BlochVector,
    max_len: usize,
    threshold: f64,
) -> Result<Option<GateSequence>> {
    if max_len > MAX_SEARCH_DEPTH {
        return Err(BlochError::SequenceTooLong {
            len: max_len,
            max: MAX_SEARCH_DEPTH,
        });
    }

    if !threshold.is_finite() || threshold <= 0.0 {
        return Err(BlochError::InvalidConfig(format!(
            "threshold {} must be positive",
            threshold
        )));
    }

    for depth in 0..=max_len {
        let candidates = Gate::ALL.len().pow(depth as u32);
        debug!("searching {} sequences of length {}", candidates, depth);

        let found = (0..candidates).into_par_iter().find_first(|&index| {
            sequence_at(index, depth).bloch_vector_from(start).distance(target) < threshold
        });

        if let Some(index) = found {
            let sequence = sequence_at(index, depth);
            debug!("found {} at length {}", sequence, depth);
            return Ok(Some(sequence));
        }
    }

    Ok(None)
}

/// Final Bloch vector of each sequence applied to `start`
pub fn evaluate_sequences(start: &Qubit, sequences: &[GateSequence]) -> Vec<BlochVector> {
    sequences
        .par_iter()
        .map(|sequence| sequence.bloch_vector_from(start))
        .collect()
}

/// Every distinct point reachable from `start` with at most `max_len` gates
///
/// Points closer than `tolerance` are merged. Useful for generating puzzle
/// targets that are known to be solvable.
pub fn reachable_points(start: &Qubit, max_len: usize, tolerance: f64) -> Result<Vec<BlochVector>> {
    if max_len > MAX_SEARCH_DEPTH {
        return Err(BlochError::SequenceTooLong {
            len: max_len,
            max: MAX_SEARCH_DEPTH,
        });
    }

    let mut points: Vec<BlochVector> = Vec::new();
    for depth in 0..=max_len {
        let candidates = Gate::ALL.len().pow(depth as u32);
        let level: Vec<BlochVector> = (0..candidates)
            .into_par_iter()
            .map(|index| sequence_at(index, depth).bloch_vector_from(start))
            .collect();

        for point in level {
            if !points.iter().any(|p| p.approx_eq(&point, tolerance)) {
                points.push(point);
            }
        }
    }

    Ok(points)
}
