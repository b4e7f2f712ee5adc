// src/config.rs
//! Simulator configuration
//!
//! The acceptance threshold for a solved puzzle belongs to the consumer, so it
//! lives here rather than as a constant of the numeric core.

use serde::{Deserialize, Serialize};

use crate::error::{BlochError, Result};

/// Default Bloch-space distance under which a state counts as matching the target
pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.1;

/// Default allowed normalization drift
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Default cap on puzzle sequence length
pub const DEFAULT_MAX_SEQUENCE_LEN: usize = 5;

/// How floating-point drift in |α|² + |β|² is handled after a gate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DriftPolicy {
    /// Rescale the amplitudes after every gate
    #[default]
    Renormalize,

    /// Keep the raw product and only report drift beyond the tolerance
    Tolerate,
}

/// Configuration for [`QubitSimulator`](crate::simulators::QubitSimulator)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Distance on the Bloch sphere below which the target is reached
    pub match_threshold: f64,

    /// Allowed deviation of |α|² + |β|² from 1
    pub tolerance: f64,

    /// Drift handling after each gate
    pub drift_policy: DriftPolicy,

    /// Longest gate sequence a single run may contain
    pub max_sequence_len: usize,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            match_threshold: DEFAULT_MATCH_THRESHOLD,
            tolerance: DEFAULT_TOLERANCE,
            drift_policy: DriftPolicy::default(),
            max_sequence_len: DEFAULT_MAX_SEQUENCE_LEN,
        }
    }
}

impl SimulatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_match_threshold(mut self, threshold: f64) -> Self {
        self.match_threshold = threshold;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_drift_policy(mut self, policy: DriftPolicy) -> Self {
        self.drift_policy = policy;
        self
    }

    pub fn with_max_sequence_len(mut self, len: usize) -> Self {
        self.max_sequence_len = len;
        self
    }

    /// Check that every field is in range
    ///
    /// Distances on the Bloch sphere never exceed 2, so a threshold above
    /// that would accept every state.
    pub fn validate(&self) -> Result<()> {
        if !self.match_threshold.is_finite() || self.match_threshold <= 0.0 || self.match_threshold > 2.0 {
            return Err(BlochError::InvalidConfig(format!(
                "match_threshold {} must be in (0, 2]",
                self.match_threshold
            )));
        }

        if !self.tolerance.is_finite() || self.tolerance <= 0.0 || self.tolerance >= 1.0 {
            return Err(BlochError::InvalidConfig(format!(
                "tolerance {} must be in (0, 1)",
                self.tolerance
            )));
        }

        if self.max_sequence_len == 0 {
            return Err(BlochError::InvalidConfig(
                "max_sequence_len must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}
