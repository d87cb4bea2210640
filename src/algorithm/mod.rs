// src/algorithm/mod.rs

//! Caller-facing entry point: decide whether a 1-bit function is constant or
//! balanced with Deutsch's algorithm.
//!
//! A run validates its inputs, executes the circuit for the oracle, samples
//! the query qubit and classifies the counts. Either every step succeeds or
//! the run fails before producing output.

use crate::classifier::{Classification, Classifier, DecisionRule, ShotCounts};
use crate::core::{DeutschError, QubitProbabilities, Result};
use crate::oracle::OracleTag;
use crate::sampling::{Sampler, SamplerConfig, ShotBatch};
use crate::simulation::{Simulator, SimulatorConfig};
use std::fmt;

/// Default shot count for a run.
pub const DEFAULT_TRIALS: usize = 100;

/// Classifies f with `trials` shots, reproducibly when `seed` is given.
///
/// Uses the majority rule: `Balanced` if more ones than zeros were measured.
///
/// # Errors
/// * `InvalidTrialCount` if `trials` is zero.
/// * `InvalidOracle` is part of the contract but cannot arise from booleans.
///
/// # Examples
/// ```
/// use deutsch::{classify_function, Classification, DeutschError};
///
/// assert_eq!(classify_function(false, true, 10, Some(42))?, Classification::Balanced);
/// assert_eq!(classify_function(true, true, 10, Some(42))?, Classification::Constant);
/// assert_eq!(
///     classify_function(true, false, 0, None),
///     Err(DeutschError::InvalidTrialCount { trials: 0 })
/// );
/// # Ok::<(), DeutschError>(())
/// ```
pub fn classify_function(f0: bool, f1: bool, trials: usize, seed: Option<u64>) -> Result<Classification> {
    let config = DeutschConfig::new().with_trials(trials).with_seed(seed);
    let report = DeutschRunner::new(config).run_truth_table(f0 as u8, f1 as u8)?;
    Ok(report.classification())
}

/// Configuration for a [`DeutschRunner`].
#[derive(Debug, Clone)]
pub struct DeutschConfig {
    /// Number of shots.
    ///
    /// Default: 100
    pub trials: usize,

    /// Threshold used to turn counts into a verdict.
    ///
    /// Default: `DecisionRule::Majority`
    pub decision_rule: DecisionRule,

    /// Executor settings.
    pub simulator: SimulatorConfig,

    /// Sampler settings, including the seed.
    pub sampler: SamplerConfig,
}

impl Default for DeutschConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            decision_rule: DecisionRule::default(),
            simulator: SimulatorConfig::default(),
            sampler: SamplerConfig::default(),
        }
    }
}

impl DeutschConfig {
    /// Configuration with the documented defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of shots.
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Sets the sampler's master seed.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.sampler.seed = seed;
        self
    }

    /// Sets the rule that turns counts into a verdict.
    pub fn with_decision_rule(mut self, rule: DecisionRule) -> Self {
        self.decision_rule = rule;
        self
    }

    /// Replaces the executor settings.
    pub fn with_simulator(mut self, simulator: SimulatorConfig) -> Self {
        self.simulator = simulator;
        self
    }

    /// Replaces the sampler settings, seed included.
    pub fn with_sampler(mut self, sampler: SamplerConfig) -> Self {
        self.sampler = sampler;
        self
    }
}

/// Everything a run produced, for callers that want to display more than the
/// verdict.
#[derive(Debug, Clone, PartialEq)]
pub struct DeutschReport {
    oracle: OracleTag,
    probabilities: QubitProbabilities,
    batch: ShotBatch,
    counts: ShotCounts,
    classification: Classification,
}

impl DeutschReport {
    /// The oracle that was queried.
    pub fn oracle(&self) -> OracleTag {
        self.oracle
    }

    /// (P0, P1) of the query qubit before sampling.
    pub fn probabilities(&self) -> QubitProbabilities {
        self.probabilities
    }

    /// Raw outcomes in draw order.
    pub fn batch(&self) -> &ShotBatch {
        &self.batch
    }

    /// Zero/one tallies of the batch.
    pub fn counts(&self) -> ShotCounts {
        self.counts
    }

    /// The verdict.
    pub fn classification(&self) -> Classification {
        self.classification
    }

    /// Whether the verdict matches the oracle's actual kind.
    pub fn is_correct(&self) -> bool {
        self.classification == self.oracle.expected_classification()
    }
}

impl fmt::Display for DeutschReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Oracle: {}", self.oracle)?;
        writeln!(f, "  Probabilities: {}", self.probabilities)?;
        let total = self.counts.total().max(1) as f64;
        writeln!(
            f,
            "  Counts ({} shots): |0>: {} ({:.1}%), |1>: {} ({:.1}%)",
            self.counts.total(),
            self.counts.zeros,
            self.counts.zeros as f64 / total * 100.0,
            self.counts.ones,
            self.counts.ones as f64 / total * 100.0
        )?;
        writeln!(f, "  Verdict: {}", self.classification)
    }
}

/// Runs Deutsch's algorithm end to end under a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct DeutschRunner {
    config: DeutschConfig,
}

impl DeutschRunner {
    /// Runner using `config` for every run.
    pub fn new(config: DeutschConfig) -> Self {
        Self { config }
    }

    /// Current settings.
    pub fn config(&self) -> &DeutschConfig {
        &self.config
    }

    /// Runs for boolean function values.
    pub fn run(&self, f0: bool, f1: bool) -> Result<DeutschReport> {
        self.run_truth_table(f0 as u8, f1 as u8)
    }

    /// Runs for a truth table given as 0/1 values.
    ///
    /// Inputs are validated before any simulation work starts, the trial
    /// count first.
    pub fn run_truth_table(&self, f0: u8, f1: u8) -> Result<DeutschReport> {
        let trials = self.checked_trials()?;
        let oracle = OracleTag::from_truth_table(f0, f1)?;
        self.execute(oracle, trials)
    }

    /// Runs for an already-validated oracle.
    pub fn run_oracle(&self, oracle: OracleTag) -> Result<DeutschReport> {
        let trials = self.checked_trials()?;
        self.execute(oracle, trials)
    }

    fn checked_trials(&self) -> Result<usize> {
        match self.config.trials {
            0 => Err(DeutschError::InvalidTrialCount { trials: 0 }),
            trials => Ok(trials),
        }
    }

    fn execute(&self, oracle: OracleTag, trials: usize) -> Result<DeutschReport> {
        let probabilities = Simulator::with_config(self.config.simulator.clone()).execute_deutsch(oracle)?;
        let batch = Sampler::with_config(self.config.sampler.clone()).sample(&probabilities, trials)?;
        let classifier = Classifier::with_rule(self.config.decision_rule);
        let counts = classifier.count(&batch)?;
        let classification = classifier.classify_counts(&counts);

        tracing::info!(
            oracle = %oracle,
            trials,
            zeros = counts.zeros,
            ones = counts.ones,
            verdict = %classification,
            "deutsch run complete"
        );

        Ok(DeutschReport {
            oracle,
            probabilities,
            batch,
            counts,
            classification,
        })
    }
}
