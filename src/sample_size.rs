//! Sample-size planning.
//!
//! Computes the minimum number of observations needed to hit a target
//! margin of error at a given confidence level. Results always round
//! **up**: under-sizing the sample would violate the requested margin,
//! so the ceiling is a hard contract, not a convenience.

use crate::critical;
use crate::error::{InferError, InferResult};

/// Minimum sample size for estimating a mean to within `margin` at the
/// given confidence level: `n = ⌈(z·s/E)²⌉`.
///
/// # Errors
/// [`InferError::InvalidRange`] if `confidence` is outside (0, 1),
/// `std_dev` is not positive, or `margin` is not positive.
///
/// # Examples
/// ```
/// use u_infer::sample_size::for_mean;
/// // s=15, E=2 at 95%: (1.95996·15/2)² ≈ 216.08 → 217
/// assert_eq!(for_mean(0.95, 15.0, 2.0).unwrap(), 217);
/// ```
pub fn for_mean(confidence: f64, std_dev: f64, margin: f64) -> InferResult<u64> {
    if !std_dev.is_finite() || std_dev <= 0.0 {
        return Err(InferError::InvalidRange {
            name: "std_dev",
            value: std_dev,
            reason: "must be positive",
        });
    }
    check_margin(margin)?;
    let z = critical::z_critical(confidence)?;
    let exact = (z * std_dev / margin).powi(2);
    Ok(exact.ceil() as u64)
}

/// Minimum sample size for estimating a proportion to within `margin` at
/// the given confidence level: `n = ⌈z²·p(1−p)/E²⌉`.
///
/// `estimate` is the planning value for the proportion; 0.5 is the
/// conservative (variance-maximizing) choice when nothing is known.
///
/// # Errors
/// [`InferError::InvalidRange`] if `confidence` is outside (0, 1),
/// `estimate` is outside [0, 1], or `margin` is not positive.
///
/// # Examples
/// ```
/// use u_infer::sample_size::for_proportion;
/// // The textbook worst case: 95%, p=0.5, E=0.05 → 385
/// assert_eq!(for_proportion(0.95, 0.5, 0.05).unwrap(), 385);
/// ```
pub fn for_proportion(confidence: f64, estimate: f64, margin: f64) -> InferResult<u64> {
    if !estimate.is_finite() || !(0.0..=1.0).contains(&estimate) {
        return Err(InferError::InvalidRange {
            name: "estimate",
            value: estimate,
            reason: "must be within [0, 1]",
        });
    }
    check_margin(margin)?;
    let z = critical::z_critical(confidence)?;
    let exact = z * z * estimate * (1.0 - estimate) / (margin * margin);
    Ok(exact.ceil() as u64)
}

fn check_margin(margin: f64) -> InferResult<()> {
    if !margin.is_finite() || margin <= 0.0 {
        return Err(InferError::InvalidRange {
            name: "margin",
            value: margin,
            reason: "must be positive",
        });
    }
    Ok(())
}
