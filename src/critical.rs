//! Critical values for interval estimation.
//!
//! Maps a confidence level to the two-tailed critical value of the
//! standard normal or Student-t distribution: the quantile at
//! `1 − (1−confidence)/2`. Intervals in this engine are two-sided by
//! construction; one-sided hypothesis tests adjust the p-value mapping
//! in [`crate::testing`] instead of the critical-value formula.

use crate::error::{InferError, InferResult};
use crate::special;

/// Rejects confidence levels outside the open interval (0, 1).
fn check_confidence(confidence: f64) -> InferResult<()> {
    if !confidence.is_finite() || confidence <= 0.0 || confidence >= 1.0 {
        return Err(InferError::InvalidRange {
            name: "confidence",
            value: confidence,
            reason: "must be strictly between 0 and 1",
        });
    }
    Ok(())
}

/// Two-tailed standard normal critical value z* for a confidence level.
///
/// `z* = Φ⁻¹(1 − (1−confidence)/2)`.
///
/// # Errors
/// [`InferError::InvalidRange`] if `confidence` is outside (0, 1).
///
/// # Examples
/// ```
/// use u_infer::critical::z_critical;
/// assert!((z_critical(0.95).unwrap() - 1.96).abs() < 1e-3);
/// assert!((z_critical(0.99).unwrap() - 2.576).abs() < 1e-3);
/// assert!(z_critical(1.0).is_err());
/// ```
pub fn z_critical(confidence: f64) -> InferResult<f64> {
    check_confidence(confidence)?;
    let tail_probability = 1.0 - (1.0 - confidence) / 2.0;
    Ok(special::inverse_normal_cdf(tail_probability))
}

/// Two-tailed Student-t critical value t* for a confidence level and
/// degrees of freedom.
///
/// Same tail probability as [`z_critical`], evaluated on the t
/// distribution with `df` degrees of freedom.
///
/// # Errors
/// - [`InferError::InvalidRange`] if `confidence` is outside (0, 1).
/// - [`InferError::InvalidDegreesOfFreedom`] if `df < 1` or not finite.
///
/// # Examples
/// ```
/// use u_infer::critical::t_critical;
/// // df=29: the classic 95% two-sided value
/// assert!((t_critical(0.95, 29.0).unwrap() - 2.045).abs() < 1e-3);
/// assert!(t_critical(0.95, 0.0).is_err());
/// ```
pub fn t_critical(confidence: f64, df: f64) -> InferResult<f64> {
    check_confidence(confidence)?;
    if !df.is_finite() || df < 1.0 {
        return Err(InferError::InvalidDegreesOfFreedom { value: df });
    }
    let tail_probability = 1.0 - (1.0 - confidence) / 2.0;
    Ok(special::student_t_quantile(tail_probability, df))
}
