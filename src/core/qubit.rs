// src/core/qubit.rs

use std::fmt;

/// Position of a qubit inside the register.
///
/// Qubit `k` corresponds to bit `k` of a basis-state index, so for two qubits
/// the basis order (q1,q0) is 00, 01, 10, 11.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QubitId(pub usize);

impl QubitId {
    /// The query qubit of Deutsch's algorithm.
    pub const INPUT: QubitId = QubitId(0);
    /// The ancilla qubit used for phase kickback.
    pub const ANCILLA: QubitId = QubitId(1);

    /// Gets the register index of this qubit.
    pub fn index(&self) -> usize {
        self.0
    }

    /// Bit mask selecting this qubit inside a basis-state index.
    pub(crate) fn mask(&self) -> usize {
        1 << self.0
    }
}

impl From<usize> for QubitId {
    fn from(index: usize) -> Self {
        QubitId(index)
    }
}

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}
