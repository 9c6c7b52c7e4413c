//! Confidence interval estimation.
//!
//! Four procedures, all producing an [`Interval`]:
//!
//! - **Mean** — Student-t with df = n−1 (the only t-based procedure).
//! - **Proportion** — normal approximation to the binomial.
//! - **Difference of means** — unpooled (Welch-style) standard error
//!   with a normal critical value. The normal approximation is used
//!   uniformly for two-sample differences; this engine does not switch
//!   to a pooled-t procedure.
//! - **Difference of proportions** — per-group variance, normal critical
//!   value.

use crate::critical;
use crate::error::{InferError, InferResult};
use crate::summary::{MeanSummary, Proportion};

/// A two-sided confidence interval.
///
/// Holds the point estimate together with the margin of error (half the
/// interval width) and the materialized bounds. Invariant:
/// `lower ≤ point_estimate ≤ upper` and `upper − lower` equals twice the
/// margin of error.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    /// Center of the interval.
    pub point_estimate: f64,
    /// Half-width of the interval.
    pub margin_of_error: f64,
    /// Lower bound.
    pub lower: f64,
    /// Upper bound.
    pub upper: f64,
}

impl Interval {
    /// Builds the interval `point ± margin`.
    fn from_margin(point_estimate: f64, margin_of_error: f64) -> Self {
        debug_assert!(margin_of_error >= 0.0, "negative margin of error");
        Self {
            point_estimate,
            margin_of_error,
            lower: point_estimate - margin_of_error,
            upper: point_estimate + margin_of_error,
        }
    }

    /// Interval width, `upper − lower`.
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Whether the interval contains `value` (bounds inclusive).
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

/// Confidence interval for a population mean from a [`MeanSummary`].
///
/// Uses the Student-t critical value with df = n−1; the margin of error
/// is `t* · s/√n`.
///
/// # Errors
/// - [`InferError::InsufficientData`] if `n < 2` (df would be 0).
/// - [`InferError::InvalidRange`] if `confidence` is outside (0, 1).
///
/// # Examples
/// ```
/// use u_infer::interval::mean_interval;
/// use u_infer::summary::MeanSummary;
///
/// let summary = MeanSummary::new(50.0, 10.0, 30).unwrap();
/// let ci = mean_interval(&summary, 0.95).unwrap();
/// assert!((ci.margin_of_error - 3.734).abs() < 1e-3);
/// assert!((ci.lower - 46.266).abs() < 1e-3);
/// assert!((ci.upper - 53.734).abs() < 1e-3);
/// ```
pub fn mean_interval(summary: &MeanSummary, confidence: f64) -> InferResult<Interval> {
    if summary.n() < 2 {
        return Err(InferError::InsufficientData {
            required: 2,
            got: summary.n(),
            context: "t-based mean interval",
        });
    }
    let df = (summary.n() - 1) as f64;
    let t = critical::t_critical(confidence, df)?;
    Ok(Interval::from_margin(
        summary.mean(),
        t * summary.standard_error(),
    ))
}

/// Confidence interval for a population proportion (normal approximation).
///
/// The margin of error is `z* · √(p̂(1−p̂)/n)`.
///
/// # Errors
/// [`InferError::InvalidRange`] if `confidence` is outside (0, 1).
/// (`successes > trials` is rejected when the [`Proportion`] is built.)
///
/// # Examples
/// ```
/// use u_infer::interval::proportion_interval;
/// use u_infer::summary::Proportion;
///
/// let p = Proportion::new(15, 50).unwrap();
/// let ci = proportion_interval(&p, 0.95).unwrap();
/// assert!((ci.point_estimate - 0.30).abs() < 1e-12);
/// assert!((ci.margin_of_error - 0.1271).abs() < 1e-3);
/// ```
pub fn proportion_interval(proportion: &Proportion, confidence: f64) -> InferResult<Interval> {
    let z = critical::z_critical(confidence)?;
    let p_hat = proportion.p_hat();
    let n = proportion.trials() as f64;
    let margin = z * (p_hat * (1.0 - p_hat) / n).sqrt();
    Ok(Interval::from_margin(p_hat, margin))
}

/// Confidence interval for the difference of two means.
///
/// Point estimate `x̄₁ − x̄₂`; standard error `√(s₁²/n₁ + s₂²/n₂)`
/// (unpooled); margin `z* · SE`.
///
/// # Errors
/// [`InferError::InvalidRange`] if `confidence` is outside (0, 1).
///
/// # Examples
/// ```
/// use u_infer::interval::mean_difference_interval;
/// use u_infer::summary::MeanSummary;
///
/// let a = MeanSummary::new(10.0, 2.0, 30).unwrap();
/// let b = MeanSummary::new(12.0, 2.5, 30).unwrap();
/// let ci = mean_difference_interval(&a, &b, 0.95).unwrap();
/// assert!((ci.point_estimate - (-2.0)).abs() < 1e-12);
/// assert!(ci.lower < -2.0 && ci.upper > -2.0);
/// ```
pub fn mean_difference_interval(
    a: &MeanSummary,
    b: &MeanSummary,
    confidence: f64,
) -> InferResult<Interval> {
    let z = critical::z_critical(confidence)?;
    let standard_error = unpooled_mean_se(a, b);
    Ok(Interval::from_margin(
        a.mean() - b.mean(),
        z * standard_error,
    ))
}

/// Confidence interval for the difference of two proportions.
///
/// Point estimate `p̂₁ − p̂₂`; standard error
/// `√(p̂₁(1−p̂₁)/n₁ + p̂₂(1−p̂₂)/n₂)`; margin `z* · SE`.
///
/// # Errors
/// [`InferError::InvalidRange`] if `confidence` is outside (0, 1).
pub fn proportion_difference_interval(
    a: &Proportion,
    b: &Proportion,
    confidence: f64,
) -> InferResult<Interval> {
    let z = critical::z_critical(confidence)?;
    let (p1, n1) = (a.p_hat(), a.trials() as f64);
    let (p2, n2) = (b.p_hat(), b.trials() as f64);
    let standard_error = (p1 * (1.0 - p1) / n1 + p2 * (1.0 - p2) / n2).sqrt();
    Ok(Interval::from_margin(p1 - p2, z * standard_error))
}

/// Unpooled (Welch-style) standard error for a difference of means.
pub(crate) fn unpooled_mean_se(a: &MeanSummary, b: &MeanSummary) -> f64 {
    let v1 = a.std_dev() * a.std_dev() / a.n() as f64;
    let v2 = b.std_dev() * b.std_dev() / b.n() as f64;
    (v1 + v2).sqrt()
}
