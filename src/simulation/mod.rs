// src/simulation/mod.rs

//! Executes circuits on a [`StateVector`] and reports the measured qubit's
//! probability distribution.
//!
//! Execution is a pure function of the circuit: no randomness is involved
//! until the distribution is handed to the [`Sampler`](crate::sampling::Sampler).

mod results;

pub use results::SimulationResult;

use crate::circuits::{Circuit, deutsch_circuit};
use crate::core::{DeutschError, NORM_TOLERANCE, QubitProbabilities, Result, StateVector};
use crate::oracle::OracleTag;
use crate::validation::check_normalization;

/// Executor configuration.
#[derive(Debug, Clone)]
pub struct SimulatorConfig {
    /// Check normalization after every gate and fail with `NotNormalized`
    /// rather than continue on a drifted state.
    ///
    /// Default: true
    pub validate_each_step: bool,

    /// Allowed deviation of the squared norm from 1.
    ///
    /// Default: 1e-9
    pub norm_tolerance: f64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            validate_each_step: true,
            norm_tolerance: NORM_TOLERANCE,
        }
    }
}

impl SimulatorConfig {
    /// Configuration with the documented defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Turns the per-gate normalization check on or off.
    pub fn with_validation(mut self, validate_each_step: bool) -> Self {
        self.validate_each_step = validate_each_step;
        self
    }

    /// Sets the allowed norm deviation. Negative or non-finite values are
    /// rejected by [`Simulator::run`] before any gate is applied.
    pub fn with_norm_tolerance(mut self, tolerance: f64) -> Self {
        self.norm_tolerance = tolerance;
        self
    }
}

/// The circuit executor.
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimulatorConfig,
}

impl Simulator {
    /// Creates a new Simulator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a Simulator with explicit settings.
    pub fn with_config(config: SimulatorConfig) -> Self {
        Self { config }
    }

    /// Current settings.
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Runs `circuit` from |0…0⟩ and returns the final state together with
    /// the measured qubit's probability pair.
    ///
    /// # Errors
    /// * `InvalidRegister` if the circuit's width is unsupported.
    /// * `DimensionMismatch` if a gate addresses qubits it cannot act on, or
    ///   the measured qubit lies outside the register.
    /// * `NotNormalized` if step validation is enabled and a gate breaks
    ///   normalization.
    /// * `InvalidTolerance` if the configured norm tolerance is negative or
    ///   not finite.
    pub fn run(&self, circuit: &Circuit) -> Result<SimulationResult> {
        self.run_from(StateVector::initialize(circuit.num_qubits())?, circuit)
    }

    /// Runs `circuit` starting from `initial` instead of |0…0⟩.
    ///
    /// Gates are unitary, so with step validation enabled an unnormalized
    /// start fails with `NotNormalized` after the first gate.
    ///
    /// # Errors
    /// As [`run`](Self::run), plus `DimensionMismatch` if `initial` and the
    /// circuit disagree on the register width.
    pub fn run_from(&self, initial: StateVector, circuit: &Circuit) -> Result<SimulationResult> {
        self.check_config()?;
        if initial.num_qubits() != circuit.num_qubits() {
            return Err(DeutschError::DimensionMismatch {
                expected: circuit.num_qubits(),
                actual: initial.num_qubits(),
                context: "initial state width".to_string(),
            });
        }

        let span = tracing::debug_span!(
            "simulate",
            qubits = circuit.num_qubits(),
            gates = circuit.len()
        );
        let _enter = span.enter();

        let mut state = initial;
        for (step, application) in circuit.gates().iter().enumerate() {
            state = state.apply_gate(application)?;
            tracing::trace!(step, gate = %application, norm = state.norm_sqr(), "applied gate");
            if self.config.validate_each_step {
                check_normalization(&state, Some(self.config.norm_tolerance))?;
            }
        }

        let probabilities = state.probabilities_for(circuit.measured_qubit())?;
        tracing::debug!(%probabilities, "circuit executed");
        Ok(SimulationResult::new(state, circuit.measured_qubit(), probabilities))
    }

    fn check_config(&self) -> Result<()> {
        let tolerance = self.config.norm_tolerance;
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(DeutschError::InvalidTolerance { tolerance });
        }
        Ok(())
    }

    /// Runs Deutsch's algorithm for `oracle` and returns (P0, P1) for qubit 0.
    pub fn execute_deutsch(&self, oracle: OracleTag) -> Result<QubitProbabilities> {
        let result = self.run(&deutsch_circuit(oracle))?;
        Ok(result.probabilities())
    }
}
