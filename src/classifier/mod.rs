// src/classifier/mod.rs

//! Turns a batch of measurement outcomes into a constant/balanced verdict.

use crate::core::{DeutschError, Result};
use crate::sampling::ShotBatch;
use std::fmt;
use std::ops::Add;

/// Verdict about the oracle's function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// f(0) = f(1)
    Constant,
    /// f(0) != f(1)
    Balanced,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Constant => write!(f, "Constant"),
            Classification::Balanced => write!(f, "Balanced"),
        }
    }
}

/// Threshold applied to the zero/one counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecisionRule {
    /// `Balanced` when ones > zeros.
    #[default]
    Majority,
    /// `Balanced` when ones > 2 * zeros. Stricter; kept for comparison with
    /// runs that used this threshold.
    Supermajority,
}

impl DecisionRule {
    /// Applies the rule to a set of counts.
    pub fn decide(&self, counts: &ShotCounts) -> Classification {
        let balanced = match self {
            DecisionRule::Majority => counts.ones > counts.zeros,
            DecisionRule::Supermajority => counts.ones > counts.zeros.saturating_mul(2),
        };
        if balanced {
            Classification::Balanced
        } else {
            Classification::Constant
        }
    }
}

/// Zero and one tallies for a batch.
///
/// Addition is associative and commutative, so partial counts from
/// independent workers can be combined in any order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShotCounts {
    /// Outcomes equal to 0
    pub zeros: usize,
    /// Outcomes equal to 1
    pub ones: usize,
}

impl ShotCounts {
    /// Total number of outcomes counted.
    pub fn total(&self) -> usize {
        self.zeros + self.ones
    }

    /// Fraction of outcomes equal to 1, or `None` when nothing was counted.
    pub fn ones_fraction(&self) -> Option<f64> {
        match self.total() {
            0 => None,
            n => Some(self.ones as f64 / n as f64),
        }
    }
}

impl Add for ShotCounts {
    type Output = ShotCounts;

    fn add(self, rhs: ShotCounts) -> ShotCounts {
        ShotCounts {
            zeros: self.zeros + rhs.zeros,
            ones: self.ones + rhs.ones,
        }
    }
}

impl fmt::Display for ShotCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "|0>: {}, |1>: {}", self.zeros, self.ones)
    }
}

/// Aggregates shot batches under a [`DecisionRule`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Classifier {
    rule: DecisionRule,
}

impl Classifier {
    /// Classifier using the majority rule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifier using `rule`.
    pub fn with_rule(rule: DecisionRule) -> Self {
        Self { rule }
    }

    /// The rule this classifier applies.
    pub fn rule(&self) -> DecisionRule {
        self.rule
    }

    /// Counts the batch and applies the decision rule.
    ///
    /// # Errors
    /// `EmptyBatch` if the batch holds no outcomes.
    pub fn classify(&self, batch: &ShotBatch) -> Result<Classification> {
        let counts = self.count(batch)?;
        Ok(self.classify_counts(&counts))
    }

    /// Counts the batch without classifying it.
    ///
    /// # Errors
    /// `EmptyBatch` if the batch holds no outcomes.
    pub fn count(&self, batch: &ShotBatch) -> Result<ShotCounts> {
        if batch.is_empty() {
            return Err(DeutschError::EmptyBatch);
        }
        Ok(batch.counts())
    }

    /// Applies the decision rule to counts that were already taken.
    pub fn classify_counts(&self, counts: &ShotCounts) -> Classification {
        let verdict = self.rule.decide(counts);
        tracing::debug!(
            zeros = counts.zeros,
            ones = counts.ones,
            rule = ?self.rule,
            %verdict,
            "classified shot counts"
        );
        verdict
    }
}
