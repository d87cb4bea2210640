// src/validation/mod.rs

//! Invariant checks for states and probability pairs.
//!
//! These checks only detect violations. Nothing here renormalizes or clamps a
//! value that has drifted.

use crate::core::{DeutschError, NORM_TOLERANCE, QubitProbabilities, Result, StateVector};

/// Checks that the state vector is normalized (sum of squared amplitudes ≈ 1.0).
///
/// # Arguments
/// * `state` - The `StateVector` to check.
/// * `tolerance` - Allowed deviation from 1.0. Defaults to `NORM_TOLERANCE` (1e-9).
///
/// # Returns
/// * `Ok(())` if normalized within tolerance.
/// * `Err(DeutschError::NotNormalized)` otherwise.
pub fn check_normalization(state: &StateVector, tolerance: Option<f64>) -> Result<()> {
    let effective_tolerance = tolerance.unwrap_or(NORM_TOLERANCE);
    let norm = state.norm_sqr();
    if !norm.is_finite() || (norm - 1.0).abs() > effective_tolerance {
        Err(DeutschError::NotNormalized { norm })
    } else {
        Ok(())
    }
}

/// Checks that a probability pair lies in [0, 1] and sums to 1 within tolerance.
///
/// Each component may overshoot the unit interval by at most `tolerance`, which
/// absorbs rounding from the amplitude arithmetic.
pub fn check_probabilities(probabilities: &QubitProbabilities, tolerance: Option<f64>) -> Result<()> {
    let effective_tolerance = tolerance.unwrap_or(NORM_TOLERANCE);
    let (p0, p1) = (probabilities.p0(), probabilities.p1());
    let in_range = |p: f64| p.is_finite() && p >= -effective_tolerance && p <= 1.0 + effective_tolerance;

    if !in_range(p0) || !in_range(p1) || (p0 + p1 - 1.0).abs() > effective_tolerance {
        return Err(DeutschError::InvalidProbability { p0, p1 });
    }
    Ok(())
}
