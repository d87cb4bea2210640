// src/gates/mod.rs

//! Fixed unitary gates used by Deutsch's algorithm.
//!
//! Gates are pure data: a matrix and an arity. Placing a gate on specific
//! qubits produces a [`GateApplication`], which is what circuits store and
//! what [`StateVector::apply`](crate::core::StateVector::apply) consumes.

use crate::core::{FRAC_1_SQRT_2, QubitId};
use num_complex::Complex64;
use num_traits::{One, Zero};
use std::fmt;

/// The primitive gates of the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gate {
    /// Single-qubit identity.
    Identity,
    /// Pauli-X, the bit flip.
    PauliX,
    /// Hadamard, |0> -> (|0> + |1>)/√2 and |1> -> (|0> - |1>)/√2.
    Hadamard,
    /// Controlled-NOT. The first qubit of the application is the control,
    /// the second the target.
    Cnot,
}

/// Exact matrix of a gate.
///
/// Two-qubit matrices use the basis |a,b> -> index `2a + b`, where `a` is the
/// first qubit of the application (the control for [`Gate::Cnot`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GateMatrix {
    /// 2x2 matrix of a one-qubit gate.
    Single([[Complex64; 2]; 2]),
    /// 4x4 matrix of a two-qubit gate.
    Two([[Complex64; 4]; 4]),
}

impl GateMatrix {
    /// Side length of the matrix (2 or 4).
    pub fn dim(&self) -> usize {
        match self {
            GateMatrix::Single(_) => 2,
            GateMatrix::Two(_) => 4,
        }
    }

    /// Entry at (`row`, `col`).
    pub fn entry(&self, row: usize, col: usize) -> Complex64 {
        match self {
            GateMatrix::Single(m) => m[row][col],
            GateMatrix::Two(m) => m[row][col],
        }
    }
}

impl Gate {
    /// Every gate in the library.
    pub const ALL: [Gate; 4] = [Gate::Identity, Gate::PauliX, Gate::Hadamard, Gate::Cnot];

    /// Number of qubits the gate acts on.
    pub fn arity(&self) -> usize {
        match self {
            Gate::Identity | Gate::PauliX | Gate::Hadamard => 1,
            Gate::Cnot => 2,
        }
    }

    /// Short symbol used when rendering circuits.
    pub fn symbol(&self) -> &'static str {
        match self {
            Gate::Identity => "I",
            Gate::PauliX => "X",
            Gate::Hadamard => "H",
            Gate::Cnot => "CX",
        }
    }

    /// The exact unitary for this gate.
    pub fn matrix(&self) -> GateMatrix {
        let one = Complex64::one();
        let zero = Complex64::zero();
        let h = Complex64::new(FRAC_1_SQRT_2, 0.0);

        match self {
            Gate::Identity => GateMatrix::Single([
                [one, zero],
                [zero, one],
            ]),
            Gate::PauliX => GateMatrix::Single([
                [zero, one],
                [one, zero],
            ]),
            Gate::Hadamard => GateMatrix::Single([
                [h, h],
                [h, -h],
            ]),
            // Control |0> subspace untouched, control |1> subspace flipped
            Gate::Cnot => GateMatrix::Two([
                [one, zero, zero, zero],
                [zero, one, zero, zero],
                [zero, zero, zero, one],
                [zero, zero, one, zero],
            ]),
        }
    }

    /// Places this gate on the given qubits.
    pub fn on(self, qubits: &[QubitId]) -> GateApplication {
        GateApplication { gate: self, qubits: qubits.to_vec() }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A gate together with the qubit(s) it acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateApplication {
    gate: Gate,
    qubits: Vec<QubitId>,
}

impl GateApplication {
    /// Applies `gate` to a single qubit.
    pub fn single(gate: Gate, target: QubitId) -> Self {
        gate.on(&[target])
    }

    /// Controlled-NOT with the given control and target.
    pub fn cnot(control: QubitId, target: QubitId) -> Self {
        Gate::Cnot.on(&[control, target])
    }

    /// The gate being applied.
    pub fn gate(&self) -> Gate {
        self.gate
    }

    /// Qubits in the order the gate matrix expects them.
    pub fn qubits(&self) -> &[QubitId] {
        &self.qubits
    }
}

impl fmt::Display for GateApplication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let qubits: Vec<String> = self.qubits.iter().map(|q| q.to_string()).collect();
        write!(f, "{}({})", self.gate, qubits.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_TOLERANCE: f64 = 1e-12;

    /// Checks U·U† = I entry by entry.
    fn assert_unitary(gate: Gate) {
        let m = gate.matrix();
        let dim = m.dim();
        for row in 0..dim {
            for col in 0..dim {
                let mut acc = Complex64::zero();
                for k in 0..dim {
                    acc += m.entry(row, k) * m.entry(col, k).conj();
                }
                let expected = if row == col { 1.0 } else { 0.0 };
                assert!(
                    (acc - Complex64::new(expected, 0.0)).norm() < TEST_TOLERANCE,
                    "{} is not unitary at ({}, {}): {}", gate, row, col, acc
                );
            }
        }
    }

    #[test]
    fn test_all_gates_are_unitary() {
        for gate in Gate::ALL {
            assert_unitary(gate);
        }
    }

    #[test]
    fn test_arity_matches_matrix_dim() {
        for gate in Gate::ALL {
            assert_eq!(gate.matrix().dim(), 1 << gate.arity(), "arity mismatch for {}", gate);
        }
    }

    #[test]
    fn test_hadamard_entries() {
        let m = Gate::Hadamard.matrix();
        assert!((m.entry(0, 0).re - FRAC_1_SQRT_2).abs() < TEST_TOLERANCE);
        assert!((m.entry(1, 1).re + FRAC_1_SQRT_2).abs() < TEST_TOLERANCE);
        assert_eq!(m.entry(0, 1).im, 0.0);
    }

    #[test]
    fn test_application_display() {
        let app = GateApplication::cnot(QubitId(0), QubitId(1));
        assert_eq!(app.to_string(), "CX(q0, q1)");
        assert_eq!(app.gate().arity(), app.qubits().len());
    }
}
