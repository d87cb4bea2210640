//! Error handling logic

use thiserror::Error;

/// Failures raised while building, simulating, sampling or classifying a
/// Deutsch circuit.
///
/// Every validation error is raised before any amplitude is touched or any
/// shot is drawn. Nothing here is ever recovered from silently.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DeutschError {
    /// The truth table does not describe a function {0,1} -> {0,1}.
    #[error("Invalid oracle: truth table f(0)={f0}, f(1)={f1} is not a 1-bit boolean function")]
    InvalidOracle {
        /// Value supplied for f(0)
        f0: u8,
        /// Value supplied for f(1)
        f1: u8,
    },

    /// A gate was applied with the wrong number of qubit indices, an index
    /// outside the register, or a repeated index.
    #[error("Dimension mismatch ({context}): expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected arity, register width or dimension
        expected: usize,
        /// What was actually supplied
        actual: usize,
        /// Where the mismatch was detected
        context: String,
    },

    /// A shot count of zero was requested.
    #[error("Invalid trial count {trials}: at least one trial is required")]
    InvalidTrialCount {
        /// The rejected trial count
        trials: usize,
    },

    /// The classifier was handed a batch without outcomes.
    #[error("Cannot classify an empty shot batch")]
    EmptyBatch,

    /// A register width the simulator cannot represent.
    #[error("Invalid register width {num_qubits}: expected 1..={max}", max = crate::core::MAX_QUBITS)]
    InvalidRegister {
        /// The rejected width
        num_qubits: usize,
    },

    /// Total probability drifted away from 1.
    #[error("State vector not normalized: sum(|c_i|^2) = {norm}")]
    NotNormalized {
        /// The observed squared norm
        norm: f64,
    },

    /// A negative or non-finite normalization tolerance.
    #[error("Invalid norm tolerance {tolerance}: expected a finite value >= 0")]
    InvalidTolerance {
        /// The rejected tolerance
        tolerance: f64,
    },

    /// A probability pair outside [0, 1] or not summing to 1.
    #[error("Invalid probability pair P0={p0}, P1={p1}")]
    InvalidProbability {
        /// Probability of measuring 0
        p0: f64,
        /// Probability of measuring 1
        p1: f64,
    },
}

/// Result type for every fallible operation in this crate.
pub type Result<T> = std::result::Result<T, DeutschError>;
