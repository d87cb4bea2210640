// src/sampling/mod.rs

//! Draws independent measurement outcomes from a probability pair.
//!
//! Trials are split into fixed-size chunks. Chunk `i` draws from its own
//! `StdRng` seeded from the master seed and `i`, so the batch produced for a
//! given seed does not depend on whether the chunks run sequentially or on
//! rayon workers.

use crate::classifier::ShotCounts;
use crate::core::{DeutschError, QubitProbabilities, Result};
use crate::validation::check_probabilities;
use rand::SeedableRng;
use rand::distr::{Distribution, StandardUniform};
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::fmt;

/// Default number of trials drawn from one random stream.
pub const DEFAULT_CHUNK_SIZE: usize = 4096;
/// Default batch size from which chunks are drawn on the rayon pool.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 65_536;

/// Measured value of the qubit in one trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The qubit collapsed to |0>.
    Zero,
    /// The qubit collapsed to |1>.
    One,
}

impl Outcome {
    /// The outcome as a classical bit.
    pub fn bit(&self) -> u8 {
        match self {
            Outcome::Zero => 0,
            Outcome::One => 1,
        }
    }
}

impl From<Outcome> for u8 {
    fn from(outcome: Outcome) -> u8 {
        outcome.bit()
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bit())
    }
}

/// Ordered outcomes of `N` independent trials of one circuit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShotBatch {
    outcomes: Vec<Outcome>,
}

impl ShotBatch {
    /// Wraps already-drawn outcomes.
    pub fn from_outcomes(outcomes: Vec<Outcome>) -> Self {
        Self { outcomes }
    }

    /// Outcomes in the order they were drawn.
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    /// Number of trials in the batch.
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Whether the batch holds no outcomes.
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Zero/one tallies.
    ///
    /// Batches of at least [`DEFAULT_PARALLEL_THRESHOLD`] outcomes are summed
    /// per chunk and reduced on the rayon pool.
    pub fn counts(&self) -> ShotCounts {
        if self.outcomes.len() < DEFAULT_PARALLEL_THRESHOLD {
            return count_outcomes(&self.outcomes);
        }
        self.outcomes
            .par_chunks(DEFAULT_CHUNK_SIZE)
            .map(count_outcomes)
            .reduce(ShotCounts::default, |a, b| a + b)
    }

    /// Outcomes rendered as a string of `0`/`1` characters.
    pub fn to_bitstring(&self) -> String {
        self.outcomes
            .iter()
            .map(|o| match o {
                Outcome::Zero => '0',
                Outcome::One => '1',
            })
            .collect()
    }
}

impl fmt::Display for ShotBatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ShotBatch[{} shots: {}]", self.len(), self.counts())
    }
}

fn count_outcomes(outcomes: &[Outcome]) -> ShotCounts {
    outcomes.iter().fold(ShotCounts::default(), |mut acc, o| {
        match o {
            Outcome::Zero => acc.zeros += 1,
            Outcome::One => acc.ones += 1,
        }
        acc
    })
}

/// Sampler configuration.
#[derive(Debug, Clone)]
pub struct SamplerConfig {
    /// Master seed. `None` draws a fresh seed from the thread-local generator,
    /// making every run different.
    ///
    /// Default: None
    pub seed: Option<u64>,

    /// Trials drawn from one random stream.
    ///
    /// Changing this changes which outcomes a given seed produces.
    ///
    /// Default: 4096
    pub chunk_size: usize,

    /// Batches of at least this many trials draw their chunks in parallel.
    ///
    /// Default: 65_536
    pub parallel_threshold: usize,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            seed: None,
            chunk_size: DEFAULT_CHUNK_SIZE,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl SamplerConfig {
    /// Configuration with the documented defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the master seed. `None` makes every run different.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the number of trials drawn from one random stream.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Sets the batch size from which chunks are drawn in parallel.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }
}

/// Bernoulli sampler over a measured qubit's probability pair.
#[derive(Debug, Clone, Default)]
pub struct Sampler {
    config: SamplerConfig,
}

impl Sampler {
    /// Unseeded sampler with default chunking.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sampler with explicit settings.
    pub fn with_config(config: SamplerConfig) -> Self {
        Self { config }
    }

    /// Sampler reproducible under `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::with_config(SamplerConfig::new().with_seed(Some(seed)))
    }

    /// Current settings.
    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Draws `trials` outcomes, each `One` with probability P1.
    ///
    /// # Errors
    /// * `InvalidTrialCount` if `trials` is zero.
    /// * `InvalidProbability` if the pair is not a probability distribution.
    #[tracing::instrument(level = "debug", skip(self, probabilities), fields(p1 = probabilities.p1()))]
    pub fn sample(&self, probabilities: &QubitProbabilities, trials: usize) -> Result<ShotBatch> {
        let plan = self.plan(probabilities, trials)?;
        let chunks: Vec<Vec<Outcome>> = if plan.parallel {
            (0..plan.num_chunks)
                .into_par_iter()
                .map(|index| plan.chunk(index).collect::<Vec<_>>())
                .collect()
        } else {
            (0..plan.num_chunks).map(|index| plan.chunk(index).collect::<Vec<_>>()).collect()
        };
        Ok(ShotBatch::from_outcomes(chunks.into_iter().flatten().collect()))
    }

    /// Draws the same outcomes as [`sample`](Self::sample) but only keeps
    /// per-chunk counts, combined by summation.
    pub fn sample_counts(&self, probabilities: &QubitProbabilities, trials: usize) -> Result<ShotCounts> {
        let plan = self.plan(probabilities, trials)?;
        let local_count = |index: usize| {
            plan.chunk(index).fold(ShotCounts::default(), |mut acc, o| {
                match o {
                    Outcome::Zero => acc.zeros += 1,
                    Outcome::One => acc.ones += 1,
                }
                acc
            })
        };
        let counts = if plan.parallel {
            (0..plan.num_chunks)
                .into_par_iter()
                .map(local_count)
                .reduce(ShotCounts::default, |a, b| a + b)
        } else {
            (0..plan.num_chunks).map(local_count).fold(ShotCounts::default(), |a, b| a + b)
        };
        Ok(counts)
    }

    fn plan(&self, probabilities: &QubitProbabilities, trials: usize) -> Result<SamplingPlan> {
        if trials == 0 {
            return Err(DeutschError::InvalidTrialCount { trials });
        }
        check_probabilities(probabilities, None)?;

        let master_seed = match self.config.seed {
            Some(seed) => seed,
            None => StandardUniform.sample(&mut rand::rng()),
        };
        let chunk_size = self.config.chunk_size.max(1);
        let num_chunks = trials.div_ceil(chunk_size);
        let parallel = num_chunks > 1 && trials >= self.config.parallel_threshold;

        tracing::debug!(
            trials,
            seeded = self.config.seed.is_some(),
            num_chunks,
            parallel,
            "sampling measured qubit"
        );

        Ok(SamplingPlan {
            master_seed,
            trials,
            chunk_size,
            num_chunks,
            parallel,
            // Rounding may push P1 marginally outside [0, 1]
            p1: probabilities.p1().clamp(0.0, 1.0),
        })
    }
}

struct SamplingPlan {
    master_seed: u64,
    trials: usize,
    chunk_size: usize,
    num_chunks: usize,
    parallel: bool,
    p1: f64,
}

impl SamplingPlan {
    /// Outcomes of chunk `index`, drawn from that chunk's own stream.
    fn chunk(&self, index: usize) -> impl Iterator<Item = Outcome> {
        let start = index * self.chunk_size;
        let len = self.chunk_size.min(self.trials - start);
        let mut rng = stream_rng(self.master_seed, index);
        let p1 = self.p1;
        (0..len).map(move |_| {
            let u: f64 = StandardUniform.sample(&mut rng);
            if u < p1 { Outcome::One } else { Outcome::Zero }
        })
    }
}

/// Random stream of chunk `index` under `master_seed`.
///
/// The pair fills distinct halves of the seed, so no two (seed, chunk) pairs
/// share a stream.
fn stream_rng(master_seed: u64, index: usize) -> StdRng {
    let mut seed = [0u8; 32];
    seed[..8].copy_from_slice(&master_seed.to_le_bytes());
    seed[8..16].copy_from_slice(&(index as u64).to_le_bytes());
    StdRng::from_seed(seed)
}
