// src/core/state.rs

use super::error::{DeutschError, Result};
use super::qubit::QubitId;
use super::MAX_QUBITS;
use crate::gates::{Gate, GateApplication, GateMatrix};
use num_complex::Complex64;
use num_traits::{One, Zero};
use std::fmt;

/// Joint amplitude vector of an `n`-qubit register.
///
/// Amplitudes are stored in computational basis order, where bit `k` of the
/// index is the value of qubit `k`. For the two-qubit register this is the
/// (q1,q0) order 00, 01, 10, 11.
///
/// A `StateVector` is never mutated in place: [`apply`](Self::apply) returns
/// the evolved state and leaves `self` untouched.
#[derive(Debug, Clone, PartialEq)] // Avoid Eq for floating-point complex numbers
pub struct StateVector {
    num_qubits: usize,
    amplitudes: Vec<Complex64>,
}

impl StateVector {
    /// Creates the all-zero basis state |0…0⟩.
    pub fn initialize(num_qubits: usize) -> Result<Self> {
        if num_qubits == 0 || num_qubits > MAX_QUBITS {
            return Err(DeutschError::InvalidRegister { num_qubits });
        }
        let mut amplitudes = vec![Complex64::zero(); 1 << num_qubits];
        amplitudes[0] = Complex64::one();
        Ok(Self { num_qubits, amplitudes })
    }

    /// Wraps an explicit amplitude vector. The length must be `2^num_qubits`.
    ///
    /// No normalization is performed; use
    /// [`check_normalization`](crate::validation::check_normalization) if the
    /// source is untrusted.
    pub fn from_amplitudes(num_qubits: usize, amplitudes: Vec<Complex64>) -> Result<Self> {
        if num_qubits == 0 || num_qubits > MAX_QUBITS {
            return Err(DeutschError::InvalidRegister { num_qubits });
        }
        let expected = 1usize << num_qubits;
        if amplitudes.len() != expected {
            return Err(DeutschError::DimensionMismatch {
                expected,
                actual: amplitudes.len(),
                context: "amplitude vector length".to_string(),
            });
        }
        Ok(Self { num_qubits, amplitudes })
    }

    /// Provides read-only access to the amplitudes.
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Number of qubits in the register.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Dimension of the state space, `2^n`.
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    /// Sum of squared amplitude magnitudes.
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(|c| c.norm_sqr()).sum()
    }

    /// Applies `gate` to `qubits` and returns the evolved state.
    ///
    /// The gate matrix is embedded into the full `2^n` space (identity on the
    /// untouched qubits) and multiplied onto the current amplitudes.
    ///
    /// # Errors
    /// `DimensionMismatch` if the number of qubits does not match the gate's
    /// arity, an index lies outside `[0, n)`, or an index is repeated.
    pub fn apply(&self, gate: &Gate, qubits: &[QubitId]) -> Result<StateVector> {
        self.check_targets(gate, qubits)?;
        let operator = embed(&gate.matrix(), qubits, self.num_qubits);

        let amplitudes = operator
            .iter()
            .map(|row| {
                row.iter()
                    .zip(&self.amplitudes)
                    .fold(Complex64::zero(), |acc, (m, psi)| acc + m * psi)
            })
            .collect();

        Ok(StateVector { num_qubits: self.num_qubits, amplitudes })
    }

    /// Convenience wrapper over [`apply`](Self::apply).
    pub fn apply_gate(&self, application: &GateApplication) -> Result<StateVector> {
        self.apply(&application.gate(), application.qubits())
    }

    /// Marginal probabilities of measuring `qubit` as 0 and as 1.
    ///
    /// Sums `|c_k|^2` over every basis state `k` consistent with each value,
    /// marginalizing over the rest of the register.
    pub fn probabilities_for(&self, qubit: QubitId) -> Result<QubitProbabilities> {
        self.check_index(qubit, "measured qubit")?;
        let mask = qubit.mask();
        let (p0, p1) = self.amplitudes.iter().enumerate().fold(
            (0.0, 0.0),
            |(p0, p1), (k, amp)| {
                if k & mask == 0 {
                    (p0 + amp.norm_sqr(), p1)
                } else {
                    (p0, p1 + amp.norm_sqr())
                }
            },
        );
        Ok(QubitProbabilities { p0, p1 })
    }

    fn check_index(&self, qubit: QubitId, context: &str) -> Result<()> {
        if qubit.index() >= self.num_qubits {
            return Err(DeutschError::DimensionMismatch {
                expected: self.num_qubits,
                actual: qubit.index(),
                context: format!("{} index out of range", context),
            });
        }
        Ok(())
    }

    fn check_targets(&self, gate: &Gate, qubits: &[QubitId]) -> Result<()> {
        if qubits.len() != gate.arity() {
            return Err(DeutschError::DimensionMismatch {
                expected: gate.arity(),
                actual: qubits.len(),
                context: format!("qubit count for gate {}", gate),
            });
        }
        for (i, qubit) in qubits.iter().enumerate() {
            self.check_index(*qubit, "gate target")?;
            if qubits[..i].contains(qubit) {
                return Err(DeutschError::DimensionMismatch {
                    expected: gate.arity(),
                    actual: i,
                    context: format!("distinct qubits for gate {} ({} repeated)", gate, qubit),
                });
            }
        }
        Ok(())
    }
}

/// Builds the full `2^n x 2^n` operator for `matrix` acting on `qubits`.
///
/// Row `r`, column `c` is zero unless `r` and `c` agree on every qubit outside
/// `qubits`; otherwise it is the gate entry addressed by the sub-indices of the
/// acted-on bits (first qubit = most significant sub-index bit).
fn embed(matrix: &GateMatrix, qubits: &[QubitId], num_qubits: usize) -> Vec<Vec<Complex64>> {
    let dim = 1usize << num_qubits;
    let acted_mask = qubits.iter().fold(0, |acc, q| acc | q.mask());
    let sub_index = |k: usize| {
        qubits.iter().fold(0, |acc, q| (acc << 1) | ((k >> q.index()) & 1))
    };

    (0..dim)
        .map(|r| {
            (0..dim)
                .map(|c| {
                    if r & !acted_mask != c & !acted_mask {
                        Complex64::zero()
                    } else {
                        matrix.entry(sub_index(r), sub_index(c))
                    }
                })
                .collect()
        })
        .collect()
}

impl fmt::Display for StateVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StateVector[")?;
        for (i, c) in self.amplitudes.iter().enumerate() {
            write!(f, "{}{:.4}", if i > 0 { ", " } else { "" }, c)?;
        }
        write!(f, "]")
    }
}

/// Probability pair (P0, P1) for a single measured qubit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QubitProbabilities {
    p0: f64,
    p1: f64,
}

impl QubitProbabilities {
    /// Builds a pair, rejecting values outside [0, 1] or not summing to 1.
    pub fn new(p0: f64, p1: f64) -> Result<Self> {
        let pair = Self { p0, p1 };
        crate::validation::check_probabilities(&pair, None)?;
        Ok(pair)
    }

    /// Probability of measuring 0.
    pub fn p0(&self) -> f64 {
        self.p0
    }

    /// Probability of measuring 1.
    pub fn p1(&self) -> f64 {
        self.p1
    }
}

impl fmt::Display for QubitProbabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P(0)={:.6}, P(1)={:.6}", self.p0, self.p1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FRAC_1_SQRT_2, NORM_TOLERANCE};

    fn assert_amplitudes(actual: &StateVector, expected: &[Complex64], context: &str) {
        assert_eq!(actual.dim(), expected.len(), "Vector length mismatch - {}", context);
        for (i, (a, e)) in actual.amplitudes().iter().zip(expected).enumerate() {
            assert!(
                (a - e).norm_sqr() < NORM_TOLERANCE * NORM_TOLERANCE,
                "Vector mismatch at index {} - Actual: {}, Expected: {}, Context: {}",
                i, a, e, context
            );
        }
    }

    fn c(re: f64) -> Complex64 {
        Complex64::new(re, 0.0)
    }

    #[test]
    fn test_initialize_two_qubits() -> Result<()> {
        let state = StateVector::initialize(2)?;
        assert_amplitudes(&state, &[c(1.0), c(0.0), c(0.0), c(0.0)], "|00>");
        assert_eq!(state.num_qubits(), 2);
        Ok(())
    }

    #[test]
    fn test_initialize_rejects_empty_register() {
        assert_eq!(StateVector::initialize(0), Err(DeutschError::InvalidRegister { num_qubits: 0 }));
        assert!(StateVector::initialize(MAX_QUBITS + 1).is_err());
    }

    #[test]
    fn test_x_on_qubit_one_sets_high_bit() -> Result<()> {
        let state = StateVector::initialize(2)?.apply(&Gate::PauliX, &[QubitId(1)])?;
        // (q1,q0) = 10 -> index 2
        assert_amplitudes(&state, &[c(0.0), c(0.0), c(1.0), c(0.0)], "X(q1)|00>");
        Ok(())
    }

    #[test]
    fn test_apply_does_not_mutate_source() -> Result<()> {
        let initial = StateVector::initialize(2)?;
        let _ = initial.apply(&Gate::Hadamard, &[QubitId(0)])?;
        assert_amplitudes(&initial, &[c(1.0), c(0.0), c(0.0), c(0.0)], "source untouched");
        Ok(())
    }

    #[test]
    fn test_hadamard_on_qubit_zero() -> Result<()> {
        let state = StateVector::initialize(2)?.apply(&Gate::Hadamard, &[QubitId(0)])?;
        let h = c(FRAC_1_SQRT_2);
        assert_amplitudes(&state, &[h, h, c(0.0), c(0.0)], "H(q0)|00>");
        Ok(())
    }

    #[test]
    fn test_cnot_control_zero_target_one() -> Result<()> {
        // |q1=0,q0=1> (index 1) -> |q1=1,q0=1> (index 3)
        let state = StateVector::initialize(2)?
            .apply(&Gate::PauliX, &[QubitId(0)])?
            .apply(&Gate::Cnot, &[QubitId(0), QubitId(1)])?;
        assert_amplitudes(&state, &[c(0.0), c(0.0), c(0.0), c(1.0)], "CNOT(q0->q1)|01>");
        Ok(())
    }

    #[test]
    fn test_cnot_control_off_is_identity() -> Result<()> {
        // control q0 = 0, target q1 = 1 -> unchanged
        let start = StateVector::initialize(2)?.apply(&Gate::PauliX, &[QubitId(1)])?;
        let state = start.apply(&Gate::Cnot, &[QubitId(0), QubitId(1)])?;
        assert_eq!(state, start);
        Ok(())
    }

    #[test]
    fn test_cnot_reversed_roles() -> Result<()> {
        // control q1 = 1 flips q0: index 2 -> index 3
        let state = StateVector::initialize(2)?
            .apply(&Gate::PauliX, &[QubitId(1)])?
            .apply(&Gate::Cnot, &[QubitId(1), QubitId(0)])?;
        assert_amplitudes(&state, &[c(0.0), c(0.0), c(0.0), c(1.0)], "CNOT(q1->q0)|10>");
        Ok(())
    }

    #[test]
    fn test_apply_rejects_arity_mismatch() -> Result<()> {
        let state = StateVector::initialize(2)?;
        let err = state.apply(&Gate::Cnot, &[QubitId(0)]).unwrap_err();
        assert!(matches!(err, DeutschError::DimensionMismatch { expected: 2, actual: 1, .. }));
        let err = state.apply(&Gate::Hadamard, &[QubitId(0), QubitId(1)]).unwrap_err();
        assert!(matches!(err, DeutschError::DimensionMismatch { expected: 1, actual: 2, .. }));
        Ok(())
    }

    #[test]
    fn test_apply_rejects_out_of_range_and_repeated() -> Result<()> {
        let state = StateVector::initialize(2)?;
        assert!(matches!(
            state.apply(&Gate::PauliX, &[QubitId(2)]),
            Err(DeutschError::DimensionMismatch { .. })
        ));
        assert!(matches!(
            state.apply(&Gate::Cnot, &[QubitId(1), QubitId(1)]),
            Err(DeutschError::DimensionMismatch { .. })
        ));
        Ok(())
    }

    #[test]
    fn test_probabilities_marginalize_other_qubit() -> Result<()> {
        // 0.6|00> + 0.8|11>
        let state = StateVector::from_amplitudes(2, vec![c(0.6), c(0.0), c(0.0), c(0.8)])?;
        let probs = state.probabilities_for(QubitId(0))?;
        assert!((probs.p0() - 0.36).abs() < NORM_TOLERANCE);
        assert!((probs.p1() - 0.64).abs() < NORM_TOLERANCE);
        assert!((probs.p0() + probs.p1() - 1.0).abs() < NORM_TOLERANCE);
        assert!(state.probabilities_for(QubitId(5)).is_err());
        Ok(())
    }

    #[test]
    fn test_from_amplitudes_checks_length() {
        let err = StateVector::from_amplitudes(2, vec![c(1.0)]).unwrap_err();
        assert!(matches!(err, DeutschError::DimensionMismatch { expected: 4, actual: 1, .. }));
    }

    #[test]
    fn test_probability_pair_validation() {
        assert!(QubitProbabilities::new(0.25, 0.75).is_ok());
        assert!(QubitProbabilities::new(0.5, 0.6).is_err());
        assert!(QubitProbabilities::new(-0.1, 1.1).is_err());
    }
}
