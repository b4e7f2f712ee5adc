//! Simulators built on the qubit core
//!
//! A stateful simulator for driving a puzzle one gate at a time, plus a
//! parallel solver over the gate catalog.

pub mod qubit_simulator;
pub mod solver;

pub use qubit_simulator::QubitSimulator;
pub use solver::{evaluate_sequences, find_sequence, reachable_points};
