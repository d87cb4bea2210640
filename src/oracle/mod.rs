// src/oracle/mod.rs

//! Encodes the four 1-bit boolean functions as gate sequences.
//!
//! The query qubit is `q0` and the ancilla is `q1`. With the ancilla prepared
//! in (|0> - |1>)/√2, the sequence for `f` maps |x>|y> to |x>|y ⊕ f(x)>, which
//! kicks the phase (-1)^f(x) back onto the query qubit.

use crate::classifier::Classification;
use crate::core::{DeutschError, QubitId, Result};
use crate::gates::{Gate, GateApplication};
use std::fmt;

/// One of the four functions f: {0,1} -> {0,1}.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OracleTag {
    /// f(0) = 0, f(1) = 0
    ConstantZero,
    /// f(0) = 1, f(1) = 1
    ConstantOne,
    /// f(x) = x
    Identity,
    /// f(x) = NOT x
    Negation,
}

impl OracleTag {
    /// All four tags, constant ones first.
    pub const ALL: [OracleTag; 4] = [
        OracleTag::ConstantZero,
        OracleTag::ConstantOne,
        OracleTag::Identity,
        OracleTag::Negation,
    ];

    /// Builds a tag from a truth table given as the values f(0) and f(1).
    ///
    /// # Errors
    /// `InvalidOracle` if either value is not 0 or 1.
    pub fn from_truth_table(f0: u8, f1: u8) -> Result<Self> {
        match (f0, f1) {
            (0, 0) => Ok(OracleTag::ConstantZero),
            (1, 1) => Ok(OracleTag::ConstantOne),
            (0, 1) => Ok(OracleTag::Identity),
            (1, 0) => Ok(OracleTag::Negation),
            _ => Err(DeutschError::InvalidOracle { f0, f1 }),
        }
    }

    /// Builds a tag from boolean function values. Always succeeds.
    pub fn from_bools(f0: bool, f1: bool) -> Self {
        match (f0, f1) {
            (false, false) => OracleTag::ConstantZero,
            (true, true) => OracleTag::ConstantOne,
            (false, true) => OracleTag::Identity,
            (true, false) => OracleTag::Negation,
        }
    }

    /// The truth table (f(0), f(1)).
    pub fn truth_table(&self) -> (u8, u8) {
        match self {
            OracleTag::ConstantZero => (0, 0),
            OracleTag::ConstantOne => (1, 1),
            OracleTag::Identity => (0, 1),
            OracleTag::Negation => (1, 0),
        }
    }

    /// Classical evaluation of f(x).
    pub fn evaluate(&self, x: bool) -> bool {
        let (f0, f1) = self.truth_table();
        if x { f1 == 1 } else { f0 == 1 }
    }

    /// `true` for the two constant functions.
    pub fn is_constant(&self) -> bool {
        matches!(self, OracleTag::ConstantZero | OracleTag::ConstantOne)
    }

    /// The verdict a noiseless run must reach for this function.
    pub fn expected_classification(&self) -> Classification {
        if self.is_constant() {
            Classification::Constant
        } else {
            Classification::Balanced
        }
    }

    /// Gate sequence implementing f on (input = q0, ancilla = q1).
    pub fn gate_sequence(&self) -> Vec<GateApplication> {
        let input = QubitId::INPUT;
        let ancilla = QubitId::ANCILLA;
        match self {
            OracleTag::ConstantZero => Vec::new(),
            OracleTag::ConstantOne => vec![GateApplication::single(Gate::PauliX, ancilla)],
            OracleTag::Identity => vec![GateApplication::cnot(input, ancilla)],
            OracleTag::Negation => vec![
                GateApplication::single(Gate::PauliX, input),
                GateApplication::cnot(input, ancilla),
                GateApplication::single(Gate::PauliX, input),
            ],
        }
    }
}

impl fmt::Display for OracleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OracleTag::ConstantZero => "ConstantZero",
            OracleTag::ConstantOne => "ConstantOne",
            OracleTag::Identity => "Identity",
            OracleTag::Negation => "Negation",
        };
        let (f0, f1) = self.truth_table();
        write!(f, "{} [f(0)={}, f(1)={}]", name, f0, f1)
    }
}
