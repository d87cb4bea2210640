// src/lib.rs

//! `deutsch` - Deutsch's algorithm on a self-contained state-vector simulator
//!
//! Decides with a single oracle query whether a 1-bit boolean function is
//! constant or balanced. The crate owns every step: a two-qubit state vector,
//! the gate library, oracle encoding, a seedable sampler and the classifier.
//! Nothing is delegated to an external execution service.

pub mod core;
pub mod gates;
pub mod oracle;
pub mod circuits;
pub mod simulation;
pub mod sampling;
pub mod classifier;
pub mod validation;
pub mod algorithm;

// Re-export the most common types for easier top-level use
pub use crate::core::{DeutschError, QubitId, QubitProbabilities, Result, StateVector};
pub use gates::{Gate, GateApplication, GateMatrix};
pub use oracle::OracleTag;
pub use circuits::{Circuit, CircuitBuilder, deutsch_circuit};
pub use simulation::{SimulationResult, Simulator, SimulatorConfig};
pub use sampling::{Outcome, Sampler, SamplerConfig, ShotBatch};
pub use classifier::{Classification, Classifier, DecisionRule, ShotCounts};
pub use validation::{check_normalization, check_probabilities};
pub use algorithm::{classify_function, DeutschConfig, DeutschReport, DeutschRunner};

// Example 1: Step-by-step Deutsch run
// Builds the circuit for f(x) = NOT x, inspects the noiseless distribution,
// then samples and classifies it.
/// ```
/// use deutsch::{deutsch_circuit, Classification, Classifier, OracleTag, Sampler, Simulator, DeutschError};
///
/// let oracle = OracleTag::from_truth_table(1, 0)?;
/// let circuit = deutsch_circuit(oracle);
/// println!("{}", circuit);
///
/// let result = Simulator::new().run(&circuit)?;
/// // Balanced functions leave qubit 0 in |1> with certainty
/// assert!((result.probabilities().p1() - 1.0).abs() < 1e-9);
///
/// let batch = Sampler::seeded(42).sample(&result.probabilities(), 10)?;
/// assert_eq!(Classifier::new().classify(&batch)?, Classification::Balanced);
/// # Ok::<(), DeutschError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: Full report
// Collects the probability pair, the raw shots and the verdict in one call.
/// ```
/// use deutsch::{DeutschConfig, DeutschRunner, DeutschError};
///
/// let runner = DeutschRunner::new(DeutschConfig::new().with_trials(20).with_seed(Some(7)));
/// let report = runner.run(true, true)?;
/// println!("{}", report);
/// assert_eq!(report.counts().total(), 20);
/// assert!(report.is_correct());
/// # Ok::<(), DeutschError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
