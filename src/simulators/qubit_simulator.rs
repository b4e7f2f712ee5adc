//! Game-facing qubit simulator
//!
//! Holds the current state of a puzzle, the gates applied so far and an
//! optional target point, and answers whether the target has been reached.

use log::{debug, trace, warn};

use crate::config::{DriftPolicy, SimulatorConfig};
use crate::error::{BlochError, Result};
use crate::quantum::bloch::BlochVector;
use crate::quantum::circuit::GateSequence;
use crate::quantum::gate::Gate;
use crate::quantum::state::Qubit;

/// A single-qubit simulator driven one gate at a time
#[derive(Clone, Debug)]
pub struct QubitSimulator {
    /// State the current puzzle started from
    initial: Qubit,
    /// The current state
    state: Qubit,
    /// Gates applied since the last reset
    history: GateSequence,
    /// Point the player is trying to reach
    target: Option<BlochVector>,
    config: SimulatorConfig,
}

impl QubitSimulator {
    /// Create a simulator in the ground state
    pub fn new(config: SimulatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(Qubit::ground(), config))
    }

    /// Create a simulator starting from an existing state
    pub fn from_state(state: Qubit, config: SimulatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(state, config))
    }

    fn build(state: Qubit, config: SimulatorConfig) -> Self {
        QubitSimulator {
            initial: state,
            state,
            history: GateSequence::new(),
            target: None,
            config,
        }
    }

    pub fn state(&self) -> &Qubit {
        &self.state
    }

    pub fn initial_state(&self) -> &Qubit {
        &self.initial
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    pub fn history(&self) -> &GateSequence {
        &self.history
    }

    /// Current point on the Bloch sphere
    pub fn bloch_vector(&self) -> BlochVector {
        self.state.bloch_vector()
    }

    pub fn target(&self) -> Option<BlochVector> {
        self.target
    }

    pub fn set_target(&mut self, target: BlochVector) {
        self.target = Some(target);
    }

    pub fn clear_target(&mut self) {
        self.target = None;
    }

    /// Apply one gate, returning the new Bloch vector
    pub fn apply_gate(&mut self, gate: Gate) -> Result<BlochVector> {
        let max = self.config.max_sequence_len;
        if self.history.len() >= max {
            return Err(BlochError::SequenceTooLong {
                len: self.history.len() + 1,
                max,
            });
        }

        self.state = self.step(gate, &self.state);
        self.history.push(gate);

        let bloch = self.bloch_vector();
        trace!("applied {} -> {}", gate, bloch);
        Ok(bloch)
    }

    /// Apply a whole sequence
    ///
    /// Either every gate is applied or, when the sequence would exceed the
    /// configured length, none is.
    pub fn run(&mut self, sequence: &GateSequence) -> Result<BlochVector> {
        let len = self.history.len() + sequence.len();
        let max = self.config.max_sequence_len;
        if len > max {
            return Err(BlochError::SequenceTooLong { len, max });
        }

        for gate in sequence {
            self.apply_gate(*gate)?;
        }

        Ok(self.bloch_vector())
    }

    /// Remove the last gate
    ///
    /// The state is replayed from the initial state rather than inverted, so
    /// undoing never adds rounding error.
    pub fn undo(&mut self) -> Option<Gate> {
        let gate = self.history.pop()?;
        self.state = self
            .history
            .iter()
            .fold(self.initial, |state, g| self.step(*g, &state));
        Some(gate)
    }

    /// Return to the initial state and forget the history; the target is kept
    pub fn reset(&mut self) {
        self.state = self.initial;
        self.history = GateSequence::new();
    }

    /// Start a new puzzle from the ground state towards `target`
    pub fn start_problem(&mut self, target: BlochVector) {
        self.initial = Qubit::ground();
        self.reset();
        self.target = Some(target);
    }

    /// Distance from the current point to the target
    pub fn distance_to_target(&self) -> Option<f64> {
        self.target.map(|target| self.bloch_vector().distance(&target))
    }

    /// Whether the current point is within the match threshold of the target
    pub fn is_solved(&self) -> bool {
        match self.distance_to_target() {
            Some(distance) => distance < self.config.match_threshold,
            None => false,
        }
    }

    fn step(&self, gate: Gate, state: &Qubit) -> Qubit {
        let raw = gate.apply_raw(state);
        let drift = (raw.norm_sqr() - 1.0).abs();

        match self.config.drift_policy {
            DriftPolicy::Renormalize => {
                if drift > self.config.tolerance {
                    debug!("renormalizing after {}: drift {:e}", gate, drift);
                }
                raw.renormalized()
            }
            DriftPolicy::Tolerate => {
                if drift > self.config.tolerance {
                    warn!(
                        "normalization drift {:e} after {} exceeds tolerance {:e}",
                        drift, gate, self.config.tolerance
                    );
                }
                raw
            }
        }
    }
}

impl Default for QubitSimulator {
    fn default() -> Self {
        Self::build(Qubit::ground(), SimulatorConfig::default())
    }
}
