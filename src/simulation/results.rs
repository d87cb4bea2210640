// src/simulation/results.rs
use crate::core::{QubitId, QubitProbabilities, StateVector};
use std::fmt;

/// Outcome of executing a circuit without sampling: the final amplitudes and
/// the marginal distribution of the measured qubit.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    final_state: StateVector,
    measured: QubitId,
    probabilities: QubitProbabilities,
}

impl SimulationResult {
    pub(crate) fn new(final_state: StateVector, measured: QubitId, probabilities: QubitProbabilities) -> Self {
        Self { final_state, measured, probabilities }
    }

    /// State after the last gate.
    pub fn final_state(&self) -> &StateVector {
        &self.final_state
    }

    /// The qubit whose distribution was computed.
    pub fn measured_qubit(&self) -> QubitId {
        self.measured
    }

    /// (P0, P1) for the measured qubit.
    pub fn probabilities(&self) -> QubitProbabilities {
        self.probabilities
    }
}

impl fmt::Display for SimulationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Simulation Results:")?;
        writeln!(f, "  Final state: {}", self.final_state)?;
        writeln!(f, "  Measured {}: {}", self.measured, self.probabilities)
    }
}
