//! Hypothesis testing.
//!
//! One- and two-sample tests for means and proportions. Every statistic
//! in this module is evaluated against the standard normal distribution,
//! including the mean tests: a deliberate large-sample simplification,
//! in contrast to the t-based one-sample mean *interval* in
//! [`crate::interval`]. The flow is single-shot:
//! inputs → statistic → p-value → decision.
//!
//! # Examples
//!
//! ```
//! use u_infer::summary::Proportion;
//! use u_infer::testing::{proportion_difference_test, Tail};
//!
//! let a = Proportion::new(15, 30).unwrap();
//! let b = Proportion::new(20, 30).unwrap();
//! let result = proportion_difference_test(&a, &b, Tail::TwoSided, 0.05).unwrap();
//! assert!(!result.reject); // 50% vs 67% on 30 trials: not significant
//! ```

use crate::error::{InferError, InferResult};
use crate::interval::unpooled_mean_se;
use crate::special;
use crate::summary::{MeanSummary, Proportion};

/// Direction of the alternative hypothesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tail {
    /// H₁: the parameter differs in either direction.
    TwoSided,
    /// H₁: the parameter is below the null value ("<").
    Left,
    /// H₁: the parameter is above the null value (">").
    Right,
}

/// Outcome of a hypothesis test.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TestResult {
    /// Standardized test statistic.
    pub statistic: f64,
    /// p-value in [0, 1] under the chosen tail.
    pub p_value: f64,
    /// Whether H₀ is rejected at the supplied significance level
    /// (`p_value < alpha`).
    pub reject: bool,
}

/// Rejects significance levels outside the open interval (0, 1).
fn check_alpha(alpha: f64) -> InferResult<()> {
    if !alpha.is_finite() || alpha <= 0.0 || alpha >= 1.0 {
        return Err(InferError::InvalidRange {
            name: "alpha",
            value: alpha,
            reason: "must be strictly between 0 and 1",
        });
    }
    Ok(())
}

/// Maps a standard-normal statistic to a p-value under the chosen tail.
fn p_value_for(statistic: f64, tail: Tail) -> f64 {
    match tail {
        Tail::TwoSided => 2.0 * (1.0 - special::standard_normal_cdf(statistic.abs())),
        Tail::Left => special::standard_normal_cdf(statistic),
        Tail::Right => 1.0 - special::standard_normal_cdf(statistic),
    }
}

/// Assembles the result once the statistic and level are known.
fn decide(statistic: f64, tail: Tail, alpha: f64) -> TestResult {
    let p_value = p_value_for(statistic, tail);
    TestResult {
        statistic,
        p_value,
        reject: p_value < alpha,
    }
}

/// Two-sample test for a difference of means: H₀: μ₁ = μ₂.
///
/// Statistic `(x̄₁ − x̄₂) / √(s₁²/n₁ + s₂²/n₂)` (unpooled standard
/// error), evaluated against the standard normal.
///
/// # Errors
/// - [`InferError::InvalidRange`] if `alpha` is outside (0, 1).
/// - [`InferError::DegenerateInput`] if the standard error is zero
///   (both samples have zero spread).
///
/// # Examples
/// ```
/// use u_infer::summary::MeanSummary;
/// use u_infer::testing::{mean_difference_test, Tail};
///
/// let a = MeanSummary::new(10.0, 2.0, 30).unwrap();
/// let b = MeanSummary::new(12.0, 2.5, 30).unwrap();
/// let r = mean_difference_test(&a, &b, Tail::TwoSided, 0.05).unwrap();
/// assert!(r.statistic < 0.0);
/// assert!(r.reject);
/// ```
pub fn mean_difference_test(
    a: &MeanSummary,
    b: &MeanSummary,
    tail: Tail,
    alpha: f64,
) -> InferResult<TestResult> {
    check_alpha(alpha)?;
    let standard_error = unpooled_mean_se(a, b);
    if standard_error <= 0.0 {
        return Err(InferError::DegenerateInput {
            context: "mean difference test",
        });
    }
    let statistic = (a.mean() - b.mean()) / standard_error;
    Ok(decide(statistic, tail, alpha))
}

/// Two-sample test for a difference of proportions: H₀: p₁ = p₂.
///
/// Uses the pooled proportion `p̄ = (x₁+x₂)/(n₁+n₂)` as the shared
/// variance estimate under the null:
/// `SE = √(p̄(1−p̄)(1/n₁ + 1/n₂))`, statistic `(p̂₁ − p̂₂)/SE`.
///
/// # Errors
/// - [`InferError::InvalidRange`] if `alpha` is outside (0, 1).
/// - [`InferError::DegenerateInput`] if the pooled proportion is 0 or 1
///   (zero variance under the null).
pub fn proportion_difference_test(
    a: &Proportion,
    b: &Proportion,
    tail: Tail,
    alpha: f64,
) -> InferResult<TestResult> {
    check_alpha(alpha)?;
    let n1 = a.trials() as f64;
    let n2 = b.trials() as f64;
    let pooled = (a.successes() + b.successes()) as f64 / (n1 + n2);
    let standard_error = (pooled * (1.0 - pooled) * (1.0 / n1 + 1.0 / n2)).sqrt();
    if standard_error <= 0.0 {
        return Err(InferError::DegenerateInput {
            context: "proportion difference test",
        });
    }
    let statistic = (a.p_hat() - b.p_hat()) / standard_error;
    Ok(decide(statistic, tail, alpha))
}

/// One-sample test for a mean against a hypothesized value: H₀: μ = μ₀.
///
/// Statistic `(x̄ − μ₀) / (s/√n)`, evaluated against the standard normal
/// (the same large-sample simplification as the two-sample test).
///
/// # Errors
/// - [`InferError::InvalidRange`] if `alpha` is outside (0, 1) or `mu0`
///   is not finite.
/// - [`InferError::DegenerateInput`] if the standard error is zero.
///
/// # Examples
/// ```
/// use u_infer::summary::MeanSummary;
/// use u_infer::testing::{one_sample_mean_test, Tail};
///
/// let s = MeanSummary::new(10.0, 2.0, 25).unwrap();
/// let r = one_sample_mean_test(&s, 8.0, Tail::Right, 0.05).unwrap();
/// assert!((r.statistic - 5.0).abs() < 1e-12);
/// assert!(r.reject);
/// ```
pub fn one_sample_mean_test(
    summary: &MeanSummary,
    mu0: f64,
    tail: Tail,
    alpha: f64,
) -> InferResult<TestResult> {
    check_alpha(alpha)?;
    if !mu0.is_finite() {
        return Err(InferError::InvalidRange {
            name: "mu0",
            value: mu0,
            reason: "must be finite",
        });
    }
    let standard_error = summary.standard_error();
    if standard_error <= 0.0 {
        return Err(InferError::DegenerateInput {
            context: "one-sample mean test",
        });
    }
    let statistic = (summary.mean() - mu0) / standard_error;
    Ok(decide(statistic, tail, alpha))
}

/// One-sample test for a proportion against a hypothesized value:
/// H₀: p = p₀.
///
/// The standard error is taken under the null,
/// `SE = √(p₀(1−p₀)/n)`, statistic `(p̂ − p₀)/SE`.
///
/// # Errors
/// - [`InferError::InvalidRange`] if `alpha` is outside (0, 1) or `p0`
///   is outside the open interval (0, 1).
pub fn one_sample_proportion_test(
    proportion: &Proportion,
    p0: f64,
    tail: Tail,
    alpha: f64,
) -> InferResult<TestResult> {
    check_alpha(alpha)?;
    if !p0.is_finite() || p0 <= 0.0 || p0 >= 1.0 {
        return Err(InferError::InvalidRange {
            name: "p0",
            value: p0,
            reason: "must be strictly between 0 and 1",
        });
    }
    let n = proportion.trials() as f64;
    let standard_error = (p0 * (1.0 - p0) / n).sqrt();
    let statistic = (proportion.p_hat() - p0) / standard_error;
    Ok(decide(statistic, tail, alpha))
}
