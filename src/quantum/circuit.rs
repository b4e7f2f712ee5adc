// src/quantum/circuit.rs
//! Ordered gate sequences
//!
//! A puzzle answer is a short list of gates folded left to right through
//! [`Gate::apply`], starting from the current state.

use std::fmt::{self, Display};
use std::str::FromStr;

use ndarray::Array2;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use super::bloch::BlochVector;
use super::gate::Gate;
use super::gate_operations;
use super::state::Qubit;
use crate::error::BlochError;

/// An ordered list of catalog gates, first element applied first
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GateSequence {
    gates: Vec<Gate>,
}

impl GateSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_gates(gates: Vec<Gate>) -> Self {
        Self { gates }
    }

    /// Append a gate, builder style
    pub fn then(mut self, gate: Gate) -> Self {
        self.gates.push(gate);
        self
    }

    pub fn push(&mut self, gate: Gate) {
        self.gates.push(gate);
    }

    pub fn pop(&mut self) -> Option<Gate> {
        self.gates.pop()
    }

    pub fn len(&self) -> usize {
        self.gates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Gate> {
        self.gates.iter()
    }

    /// Fold every gate through `start`
    pub fn apply_to(&self, start: &Qubit) -> Qubit {
        self.gates.iter().fold(*start, |state, gate| gate.apply(&state))
    }

    /// Final state when starting from |0⟩
    pub fn run_from_ground(&self) -> Qubit {
        self.apply_to(&Qubit::ground())
    }

    /// Bloch vector of the final state reached from `start`
    pub fn bloch_vector_from(&self, start: &Qubit) -> BlochVector {
        self.apply_to(start).bloch_vector()
    }

    /// Every intermediate state, `start` included
    ///
    /// The returned vector has `len() + 1` entries; entry `i` is the state
    /// after the first `i` gates. Renderers animate along this path.
    pub fn trace(&self, start: &Qubit) -> Vec<Qubit> {
        let mut states = Vec::with_capacity(self.gates.len() + 1);
        states.push(*start);

        let mut current = *start;
        for gate in &self.gates {
            current = gate.apply(&current);
            states.push(current);
        }

        states
    }

    /// The single operator equivalent to the whole sequence
    pub fn matrix(&self) -> Array2<Complex64> {
        gate_operations::compose(&self.gates)
    }

    /// A sequence of catalog gates undoing this one
    pub fn inverse(&self) -> Self {
        let gates = self
            .gates
            .iter()
            .rev()
            .flat_map(|gate| gate.inverse_sequence())
            .collect();
        Self { gates }
    }

    /// Whether both sequences act identically up to global phase
    pub fn equivalent_to(&self, other: &Self, tolerance: f64) -> bool {
        gate_operations::equal_up_to_global_phase(&self.matrix(), &other.matrix(), tolerance)
    }
}

impl Display for GateSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbols: Vec<&str> = self.gates.iter().map(|g| g.symbol()).collect();
        write!(f, "{}", symbols.join(" "))
    }
}

/// Parse symbols separated by whitespace, commas or arrows, e.g. `"H Z H"`
/// or `"H,Z,H"` or `"H->Z->H"`. Unseparated runs such as `"HZH"` work too.
impl FromStr for GateSequence {
    type Err = BlochError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let gates = s
            .split(|c: char| c.is_whitespace() || c == ',' || c == '-' || c == '>')
            .filter(|token| !token.is_empty())
            .flat_map(|token| token.chars())
            .map(Gate::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { gates })
    }
}

impl From<Vec<Gate>> for GateSequence {
    fn from(gates: Vec<Gate>) -> Self {
        Self { gates }
    }
}

impl FromIterator<Gate> for GateSequence {
    fn from_iter<I: IntoIterator<Item = Gate>>(iter: I) -> Self {
        Self {
            gates: iter.into_iter().collect(),
        }
    }
}

impl Extend<Gate> for GateSequence {
    fn extend<I: IntoIterator<Item = Gate>>(&mut self, iter: I) {
        self.gates.extend(iter);
    }
}

impl IntoIterator for GateSequence {
    type Item = Gate;
    type IntoIter = std::vec::IntoIter<Gate>;

    fn into_iter(self) -> Self::IntoIter {
        self.gates.into_iter()
    }
}

impl<'a> IntoIterator for &'a GateSequence {
    type Item = &'a Gate;
    type IntoIter = std::slice::Iter<'a, Gate>;

    fn into_iter(self) -> Self::IntoIter {
        self.gates.iter()
    }
}
