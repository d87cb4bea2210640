//! Numeric constants shared by the simulator.

/// Constants used throughout the simulation and its validation.
pub mod deutsch_constants {
    /// Width of the register Deutsch's algorithm runs on.
    pub const REGISTER_QUBITS: usize = 2;
    /// Widest register `StateVector` accepts.
    pub const MAX_QUBITS: usize = 10;
    /// Allowed deviation of the squared norm from 1.
    pub const NORM_TOLERANCE: f64 = 1e-9;
    /// Hadamard entry magnitude, 1/√2.
    pub const FRAC_1_SQRT_2: f64 = std::f64::consts::FRAC_1_SQRT_2;
}
