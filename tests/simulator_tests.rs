// tests/simulator_tests.rs
use bloch::prelude::*;
use bloch::simulators::solver::{self, MAX_SEARCH_DEPTH};

#[cfg(test)]
mod simulator_tests {
    use super::*;

    #[test]
    fn test_simulator_starts_in_ground_state() {
        let sim = QubitSimulator::new(SimulatorConfig::default()).unwrap();

        assert_eq!(*sim.state(), ground_state());
        assert!(sim.bloch_vector().approx_eq(&BlochVector::NORTH, 1e-15));
        assert!(sim.history().is_empty());
        assert_eq!(sim.target(), None);
        assert_eq!(sim.distance_to_target(), None);
        assert!(!sim.is_solved());
    }

    #[test]
    fn test_solving_a_three_gate_puzzle() {
        let mut sim = QubitSimulator::default();
        sim.start_problem(BlochVector::SOUTH);
        assert!(!sim.is_solved());

        sim.apply_gate(Gate::H).unwrap();
        sim.apply_gate(Gate::Z).unwrap();
        assert!(!sim.is_solved());

        let v = sim.apply_gate(Gate::H).unwrap();
        assert!(v.approx_eq(&BlochVector::SOUTH, 1e-10));
        assert!(sim.is_solved());
        assert!(sim.distance_to_target().unwrap() < 1e-10);
        assert_eq!(sim.history().to_string(), "H Z H");
    }

    #[test]
    fn test_threshold_comes_from_config() {
        // T from |+⟩ lands 45° away from |+i⟩: distance 2·sin(22.5°) ≈ 0.765
        let target = BlochVector::new(0.0, 1.0, 0.0);

        let mut strict = QubitSimulator::default();
        strict.set_target(target);
        strict.run(&"H T".parse().unwrap()).unwrap();
        assert!(!strict.is_solved());

        let loose_config = SimulatorConfig::new().with_match_threshold(0.8);
        let mut loose = QubitSimulator::new(loose_config).unwrap();
        loose.set_target(target);
        loose.run(&"H T".parse().unwrap()).unwrap();
        assert!(loose.is_solved());

        loose.clear_target();
        assert!(!loose.is_solved());
    }

    #[test]
    fn test_sequence_length_limit() {
        let config = SimulatorConfig::new().with_max_sequence_len(2);
        let mut sim = QubitSimulator::new(config).unwrap();

        sim.apply_gate(Gate::H).unwrap();
        sim.apply_gate(Gate::S).unwrap();
        let err = sim.apply_gate(Gate::H).unwrap_err();
        assert_eq!(err, BlochError::SequenceTooLong { len: 3, max: 2 });
        assert_eq!(sim.history().len(), 2);

        // run is all or nothing
        sim.reset();
        sim.apply_gate(Gate::X).unwrap();
        let before = *sim.state();
        assert!(sim.run(&"H H".parse().unwrap()).is_err());
        assert_eq!(*sim.state(), before);
        assert_eq!(sim.history().len(), 1);
    }

    #[test]
    fn test_undo_and_reset() {
        let mut sim = QubitSimulator::default();
        sim.run(&"H S".parse().unwrap()).unwrap();
        let after_h = Gate::H.apply(&ground_state());

        assert_eq!(sim.undo(), Some(Gate::S));
        assert_eq!(*sim.state(), after_h);
        assert_eq!(sim.undo(), Some(Gate::H));
        assert_eq!(*sim.state(), ground_state());
        assert_eq!(sim.undo(), None);

        sim.set_target(BlochVector::SOUTH);
        sim.apply_gate(Gate::X).unwrap();
        sim.reset();
        assert_eq!(*sim.state(), ground_state());
        assert!(sim.history().is_empty());
        assert_eq!(sim.target(), Some(BlochVector::SOUTH));
    }

    #[test]
    fn test_custom_initial_state() {
        let mut sim = QubitSimulator::from_state(Qubit::plus(), SimulatorConfig::default()).unwrap();
        sim.apply_gate(Gate::H).unwrap();
        assert!(sim.bloch_vector().approx_eq(&BlochVector::NORTH, 1e-12));

        sim.reset();
        assert_eq!(*sim.initial_state(), Qubit::plus());
        assert_eq!(*sim.state(), Qubit::plus());

        sim.start_problem(BlochVector::SOUTH);
        assert_eq!(*sim.initial_state(), ground_state());
    }

    #[test]
    fn test_tolerate_policy_keeps_states_normalized() {
        let config = SimulatorConfig::new()
            .with_drift_policy(DriftPolicy::Tolerate)
            .with_max_sequence_len(64);
        let mut sim = QubitSimulator::new(config).unwrap();

        for _ in 0..8 {
            sim.run(&"H T S Y".parse().unwrap()).unwrap();
        }
        assert!(sim.state().is_normalized(1e-9));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = SimulatorConfig::new().with_tolerance(-1.0);
        assert!(matches!(
            QubitSimulator::new(config),
            Err(BlochError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: SimulatorConfig = serde_json::from_str(r#"{"match_threshold":0.25,"drift_policy":"Tolerate"}"#).unwrap();
        assert_eq!(config.match_threshold, 0.25);
        assert_eq!(config.drift_policy, DriftPolicy::Tolerate);
        assert_eq!(config.max_sequence_len, SimulatorConfig::default().max_sequence_len);
    }
}

#[cfg(test)]
mod solver_tests {
    use super::*;

    #[test]
    fn test_already_solved_needs_no_gates() {
        let found = solver::find_sequence(&ground_state(), &BlochVector::NORTH, 3, 1e-6).unwrap();
        assert_eq!(found, Some(GateSequence::new()));
    }

    #[test]
    fn test_finds_shortest_sequence() {
        let found = solver::find_sequence(&ground_state(), &BlochVector::SOUTH, 3, 1e-6)
            .unwrap()
            .unwrap();
        assert_eq!(found.gates(), &[Gate::X]);

        let plus_i = BlochVector::new(0.0, 1.0, 0.0);
        let found = solver::find_sequence(&ground_state(), &plus_i, 4, 1e-6)
            .unwrap()
            .unwrap();
        assert_eq!(found.gates(), &[Gate::H, Gate::S]);
        assert!(found.run_from_ground().bloch_vector().approx_eq(&plus_i, 1e-6));
    }

    #[test]
    fn test_unreachable_target() {
        // The origin is a distance 1 from every pure state
        let origin = BlochVector::default();
        assert_eq!(solver::find_sequence(&ground_state(), &origin, 2, 0.5).unwrap(), None);
    }

    #[test]
    fn test_search_bounds() {
        let err = solver::find_sequence(&ground_state(), &BlochVector::SOUTH, MAX_SEARCH_DEPTH + 1, 0.1);
        assert!(matches!(err, Err(BlochError::SequenceTooLong { .. })));

        let err = solver::find_sequence(&ground_state(), &BlochVector::SOUTH, 2, f64::NAN);
        assert!(matches!(err, Err(BlochError::InvalidConfig(_))));
    }

    #[test]
    fn test_evaluate_sequences_in_parallel() {
        let sequences: Vec<GateSequence> = ["X", "H", "", "H S"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        let points = solver::evaluate_sequences(&ground_state(), &sequences);

        assert_eq!(points.len(), 4);
        assert!(points[0].approx_eq(&BlochVector::SOUTH, 1e-12));
        assert!(points[1].approx_eq(&BlochVector::new(1.0, 0.0, 0.0), 1e-12));
        assert!(points[2].approx_eq(&BlochVector::NORTH, 1e-12));
        assert!(points[3].approx_eq(&BlochVector::new(0.0, 1.0, 0.0), 1e-12));
    }

    #[test]
    fn test_reachable_points() {
        let one_gate = solver::reachable_points(&ground_state(), 1, 1e-9).unwrap();
        assert_eq!(one_gate.len(), 3);

        // Every reachable point is solvable within the same budget
        let two_gates = solver::reachable_points(&ground_state(), 2, 1e-9).unwrap();
        for point in &two_gates {
            assert!(point.magnitude() > 1.0 - 1e-9);
            let found = solver::find_sequence(&ground_state(), point, 2, 1e-6).unwrap();
            assert!(found.is_some(), "no sequence for {}", point);
        }
    }
}
