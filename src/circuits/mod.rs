// src/circuits/mod.rs

//! Ordered gate sequences ending in a single measured qubit.
//!
//! [`deutsch_circuit`] assembles the full algorithm for an oracle; the
//! [`CircuitBuilder`] is available for anything else that needs to run on the
//! same executor.

use crate::core::{QubitId, REGISTER_QUBITS};
use crate::gates::{Gate, GateApplication};
use crate::oracle::OracleTag;
use std::fmt;

/// An ordered sequence of gate applications on a fixed-width register,
/// followed by a measurement of one designated qubit.
///
/// Circuits are read-only once built. Index validation is left to the
/// executor so that malformed circuits fail with `DimensionMismatch` when run.
#[derive(Clone, PartialEq)]
pub struct Circuit {
    num_qubits: usize,
    gates: Vec<GateApplication>,
    measured: QubitId,
}

impl Circuit {
    /// Creates an empty circuit on `num_qubits` qubits measuring `q0`.
    pub fn new(num_qubits: usize) -> Self {
        Self {
            num_qubits,
            gates: Vec::new(),
            measured: QubitId(0),
        }
    }

    /// Appends a gate application.
    pub fn add_gate(&mut self, gate: GateApplication) {
        self.gates.push(gate);
    }

    /// Appends several gate applications in order.
    pub fn add_gates<I>(&mut self, gates: I)
    where
        I: IntoIterator<Item = GateApplication>,
    {
        self.gates.extend(gates);
    }

    /// Designates the qubit whose outcome the circuit reports.
    pub fn set_measured(&mut self, qubit: QubitId) {
        self.measured = qubit;
    }

    /// Register width.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// The gate applications, in execution order.
    pub fn gates(&self) -> &[GateApplication] {
        &self.gates
    }

    /// The measured qubit.
    pub fn measured_qubit(&self) -> QubitId {
        self.measured
    }

    /// Number of gate applications.
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// Returns `true` if the circuit contains no gates.
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }
}

impl Default for Circuit {
    fn default() -> Self {
        Self::new(REGISTER_QUBITS)
    }
}

//-------------------------------------------------------------------------
// Circuit Builder
//-------------------------------------------------------------------------

/// Method-chaining helper for constructing a [`Circuit`].
pub struct CircuitBuilder {
    circuit: Circuit,
}

impl CircuitBuilder {
    /// Starts a circuit on `num_qubits` qubits.
    pub fn new(num_qubits: usize) -> Self {
        Self { circuit: Circuit::new(num_qubits) }
    }

    /// Adds a single gate application.
    pub fn add_op(mut self, gate: GateApplication) -> Self {
        self.circuit.add_gate(gate);
        self
    }

    /// Adds every gate application from the iterator.
    pub fn add_ops<I>(mut self, gates: I) -> Self
    where
        I: IntoIterator<Item = GateApplication>,
    {
        self.circuit.add_gates(gates);
        self
    }

    /// Adds a Pauli-X on `target`.
    pub fn x(self, target: QubitId) -> Self {
        self.add_op(GateApplication::single(Gate::PauliX, target))
    }

    /// Adds a Hadamard on `target`.
    pub fn h(self, target: QubitId) -> Self {
        self.add_op(GateApplication::single(Gate::Hadamard, target))
    }

    /// Adds a CNOT from `control` onto `target`.
    pub fn cnot(self, control: QubitId, target: QubitId) -> Self {
        self.add_op(GateApplication::cnot(control, target))
    }

    /// Sets the measured qubit.
    pub fn measure(mut self, qubit: QubitId) -> Self {
        self.circuit.set_measured(qubit);
        self
    }

    /// Finalizes the construction process and returns the built `Circuit`.
    pub fn build(self) -> Circuit {
        self.circuit
    }
}

impl Default for CircuitBuilder {
    fn default() -> Self {
        Self::new(REGISTER_QUBITS)
    }
}

/// Deutsch's algorithm for `oracle`:
/// X(q1), H(q0), H(q1), oracle gates, H(q0), measure q0.
pub fn deutsch_circuit(oracle: OracleTag) -> Circuit {
    let input = QubitId::INPUT;
    let ancilla = QubitId::ANCILLA;

    CircuitBuilder::new(REGISTER_QUBITS)
        .x(ancilla)
        .h(input)
        .h(ancilla)
        .add_ops(oracle.gate_sequence())
        .h(input)
        .measure(input)
        .build()
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const GATE_WIDTH: usize = 7; // e.g., "───H───"
        const WIRE: &str = "───────";
        const V_WIRE: char = '│';
        const H_WIRE: char = '─';

        fn format_gate(symbol: &str) -> String {
            let slen = symbol.chars().count();
            let total_dashes = GATE_WIDTH.saturating_sub(slen);
            let pre_dashes = total_dashes / 2;
            let post_dashes = total_dashes - pre_dashes;
            format!(
                "{}{}{}",
                H_WIRE.to_string().repeat(pre_dashes),
                symbol,
                H_WIRE.to_string().repeat(post_dashes)
            )
        }

        let rows = self.num_qubits;
        // One column per gate plus the measurement column
        let columns = self.gates.len() + 1;
        writeln!(f, "deutsch::Circuit[{} gates on {} qubits]", self.gates.len(), rows)?;
        if rows == 0 {
            return Ok(());
        }

        let mut op_grid: Vec<Vec<String>> = vec![vec![WIRE.to_string(); columns]; rows];
        // v_connect[row][t] holds the connector drawn below `row` at time `t`
        let mut v_connect: Vec<Vec<char>> = vec![vec![' '; columns]; rows];

        for (t, app) in self.gates.iter().enumerate() {
            match (app.gate(), app.qubits()) {
                (Gate::Identity, _) => {}
                (Gate::Cnot, [control, target]) => {
                    let (rc, rt) = (control.index(), target.index());
                    if rc < rows && rt < rows {
                        op_grid[rc][t] = format_gate("@");
                        op_grid[rt][t] = format_gate("X");
                        for row_vec in v_connect.iter_mut().take(rc.max(rt)).skip(rc.min(rt)) {
                            row_vec[t] = V_WIRE;
                        }
                    }
                }
                (gate, qubits) => {
                    for q in qubits.iter().filter(|q| q.index() < rows) {
                        op_grid[q.index()][t] = format_gate(gate.symbol());
                    }
                }
            }
        }
        if self.measured.index() < rows {
            op_grid[self.measured.index()][columns - 1] = format_gate("M");
        }

        let label_width = format!("{}", QubitId(rows - 1)).len() + 2;
        for r in 0..rows {
            let label = format!("{}: ", QubitId(r));
            writeln!(f, "{:<width$}{}", label, op_grid[r].join(""), width = label_width)?;

            if r < rows - 1 {
                write!(f, "{}", " ".repeat(label_width))?;
                for t in 0..columns {
                    let pad = GATE_WIDTH - 1;
                    write!(f, "{}{}{}", " ".repeat(pad / 2), v_connect[r][t], " ".repeat(pad - pad / 2))?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deutsch_circuit_shape() {
        let circuit = deutsch_circuit(OracleTag::Negation);
        assert_eq!(circuit.num_qubits(), 2);
        assert_eq!(circuit.measured_qubit(), QubitId::INPUT);
        // X, H, H + 3 oracle gates + final H
        assert_eq!(circuit.len(), 7);
        assert_eq!(circuit.gates()[0], GateApplication::single(Gate::PauliX, QubitId::ANCILLA));
        assert_eq!(
            circuit.gates().last(),
            Some(&GateApplication::single(Gate::Hadamard, QubitId::INPUT))
        );
    }

    #[test]
    fn test_constant_zero_has_no_oracle_gates() {
        assert_eq!(deutsch_circuit(OracleTag::ConstantZero).len(), 4);
    }

    #[test]
    fn test_builder_matches_manual_construction() {
        let built = CircuitBuilder::new(2)
            .h(QubitId(0))
            .cnot(QubitId(0), QubitId(1))
            .measure(QubitId(1))
            .build();

        let mut manual = Circuit::new(2);
        manual.add_gates([
            GateApplication::single(Gate::Hadamard, QubitId(0)),
            GateApplication::cnot(QubitId(0), QubitId(1)),
        ]);
        manual.set_measured(QubitId(1));
        assert_eq!(built, manual);
    }

    #[test]
    fn test_display_renders_every_qubit() {
        let rendered = deutsch_circuit(OracleTag::Identity).to_string();
        assert!(rendered.starts_with("deutsch::Circuit[5 gates on 2 qubits]"));
        assert!(rendered.contains("q0: "));
        assert!(rendered.contains("q1: "));
        assert!(rendered.contains('@'));
        assert!(rendered.contains('M'));
        assert!(rendered.contains('│'));
    }
}
