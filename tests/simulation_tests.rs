// tests/simulation_tests.rs

use deutsch::{
    Circuit, CircuitBuilder, DeutschError, Gate, GateApplication, OracleTag, QubitId,
    SimulationResult, Simulator, SimulatorConfig, StateVector, deutsch_circuit,
};
use num_complex::Complex64;
use std::f64::consts::FRAC_1_SQRT_2;

const TEST_TOLERANCE: f64 = 1e-9;

// Helper for QubitId creation
fn qid(id: usize) -> QubitId {
    QubitId(id)
}

// Helper checking the measured qubit's distribution
fn check_probabilities(result: &SimulationResult, p0: f64, p1: f64) {
    let probs = result.probabilities();
    assert!((probs.p0() - p0).abs() < TEST_TOLERANCE, "P0 mismatch: {}", probs);
    assert!((probs.p1() - p1).abs() < TEST_TOLERANCE, "P1 mismatch: {}", probs);
}

fn check_amplitudes(state: &StateVector, expected: &[Complex64]) {
    assert_eq!(state.dim(), expected.len());
    for (i, (a, e)) in state.amplitudes().iter().zip(expected).enumerate() {
        assert!((a - e).norm() < TEST_TOLERANCE, "amplitude {} is {}, expected {}", i, a, e);
    }
}

#[test]
fn test_empty_circuit() -> Result<(), DeutschError> {
    let result = Simulator::new().run(&Circuit::new(2))?;
    check_probabilities(&result, 1.0, 0.0);
    Ok(())
}

#[test]
fn test_identity_gate() -> Result<(), DeutschError> {
    let circuit = CircuitBuilder::new(2)
        .add_op(GateApplication::single(Gate::Identity, qid(0)))
        .build();
    let result = Simulator::new().run(&circuit)?;
    check_probabilities(&result, 1.0, 0.0);
    Ok(())
}

#[test]
fn test_pauli_x_flips_measured_qubit() -> Result<(), DeutschError> {
    let circuit = CircuitBuilder::new(2).x(qid(0)).measure(qid(0)).build();
    let result = Simulator::new().run(&circuit)?;
    check_probabilities(&result, 0.0, 1.0);
    Ok(())
}

#[test]
fn test_flip_ancilla_leaves_input_at_zero() -> Result<(), DeutschError> {
    let circuit = CircuitBuilder::new(2).x(qid(1)).measure(qid(0)).build();
    let result = Simulator::new().run(&circuit)?;
    check_probabilities(&result, 1.0, 0.0);

    let zero = Complex64::new(0.0, 0.0);
    let one = Complex64::new(1.0, 0.0);
    check_amplitudes(result.final_state(), &[zero, zero, one, zero]);
    Ok(())
}

#[test]
fn test_hadamard_gives_even_split() -> Result<(), DeutschError> {
    let circuit = CircuitBuilder::new(2).h(qid(0)).build();
    let result = Simulator::new().run(&circuit)?;
    check_probabilities(&result, 0.5, 0.5);
    Ok(())
}

#[test]
fn test_hadamard_twice_is_identity() -> Result<(), DeutschError> {
    let circuit = CircuitBuilder::new(2).h(qid(0)).h(qid(0)).build();
    let result = Simulator::new().run(&circuit)?;
    check_probabilities(&result, 1.0, 0.0);
    Ok(())
}

#[test]
fn test_bell_pair_marginals() -> Result<(), DeutschError> {
    let circuit = CircuitBuilder::new(2)
        .h(qid(0))
        .cnot(qid(0), qid(1))
        .measure(qid(1))
        .build();
    let result = Simulator::new().run(&circuit)?;
    check_probabilities(&result, 0.5, 0.5);

    let h = Complex64::new(FRAC_1_SQRT_2, 0.0);
    let zero = Complex64::new(0.0, 0.0);
    check_amplitudes(result.final_state(), &[h, zero, zero, h]);
    Ok(())
}

#[test]
fn test_cnot_with_control_zero() -> Result<(), DeutschError> {
    let circuit = CircuitBuilder::new(2).cnot(qid(0), qid(1)).measure(qid(1)).build();
    let result = Simulator::new().run(&circuit)?;
    check_probabilities(&result, 1.0, 0.0);
    Ok(())
}

#[test]
fn test_cnot_with_control_one() -> Result<(), DeutschError> {
    let circuit = CircuitBuilder::new(2)
        .x(qid(0))
        .cnot(qid(0), qid(1))
        .measure(qid(1))
        .build();
    let result = Simulator::new().run(&circuit)?;
    check_probabilities(&result, 0.0, 1.0);
    Ok(())
}

#[test]
fn test_deutsch_distributions() -> Result<(), DeutschError> {
    let simulator = Simulator::new();
    for oracle in [OracleTag::ConstantZero, OracleTag::ConstantOne] {
        check_probabilities(&simulator.run(&deutsch_circuit(oracle))?, 1.0, 0.0);
    }
    for oracle in [OracleTag::Identity, OracleTag::Negation] {
        check_probabilities(&simulator.run(&deutsch_circuit(oracle))?, 0.0, 1.0);
    }
    Ok(())
}

#[test]
fn test_ancilla_ends_in_minus_state() -> Result<(), DeutschError> {
    // The ancilla is left in (|0> - |1>)/√2 regardless of the oracle
    for oracle in OracleTag::ALL {
        let result = Simulator::new().run(&deutsch_circuit(oracle))?;
        let probs = result.final_state().probabilities_for(QubitId::ANCILLA)?;
        assert!((probs.p0() - 0.5).abs() < TEST_TOLERANCE, "{}: {}", oracle, probs);
    }
    Ok(())
}

#[test]
fn test_wrong_arity_reports_dimension_mismatch() {
    let circuit = CircuitBuilder::new(2)
        .add_op(Gate::Cnot.on(&[qid(0)]))
        .build();

    let result = Simulator::new().run(&circuit);
    match result {
        Err(DeutschError::DimensionMismatch { expected, actual, .. }) => {
            assert_eq!(expected, 2);
            assert_eq!(actual, 1);
        }
        other => panic!("Expected DimensionMismatch error, got {:?}", other),
    }
}

#[test]
fn test_validation_can_be_disabled() -> Result<(), DeutschError> {
    let simulator = Simulator::with_config(SimulatorConfig::new().with_validation(false));
    assert!(!simulator.config().validate_each_step);
    let result = simulator.run(&deutsch_circuit(OracleTag::Identity))?;
    check_probabilities(&result, 0.0, 1.0);
    Ok(())
}
