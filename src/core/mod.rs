// src/core/mod.rs

//! Core data structures and types

pub mod error;
pub mod qubit;
pub mod state;

// Re-export public types for convenient access via `deutsch::core::TypeName`
pub use error::{DeutschError, Result};
pub use qubit::QubitId;
pub use state::{QubitProbabilities, StateVector};

pub mod constants;
pub use constants::deutsch_constants::{FRAC_1_SQRT_2, MAX_QUBITS, NORM_TOLERANCE, REGISTER_QUBITS};
