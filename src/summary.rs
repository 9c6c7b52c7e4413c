//! Validated summary-statistic inputs.
//!
//! Mean-based procedures accept a [`MeanSummary`] (a sufficient statistic
//! standing in for a raw sample); proportion-based procedures accept a
//! [`Proportion`] (successes out of trials). Both validate their
//! invariants at construction so the estimators and tests downstream can
//! rely on them.

use crate::descriptive;
use crate::error::{InferError, InferResult};

/// Sufficient statistic for mean-based procedures: `{x̄, s, n}`.
///
/// Invariants enforced at construction: finite mean, finite `std_dev ≥ 0`,
/// `n ≥ 1`. Procedures that need degrees of freedom (the t-based mean
/// interval) additionally require `n ≥ 2` at the call site.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanSummary {
    mean: f64,
    std_dev: f64,
    n: u64,
}

impl MeanSummary {
    /// Creates a validated summary from a sample mean, sample standard
    /// deviation, and observation count.
    ///
    /// # Errors
    /// [`InferError::InvalidRange`] if `mean` or `std_dev` is not finite,
    /// `std_dev < 0`, or `n == 0`.
    ///
    /// # Examples
    /// ```
    /// use u_infer::summary::MeanSummary;
    /// let s = MeanSummary::new(50.0, 10.0, 30).unwrap();
    /// assert_eq!(s.n(), 30);
    /// assert!(MeanSummary::new(50.0, -1.0, 30).is_err());
    /// ```
    pub fn new(mean: f64, std_dev: f64, n: u64) -> InferResult<Self> {
        if !mean.is_finite() {
            return Err(InferError::InvalidRange {
                name: "mean",
                value: mean,
                reason: "must be finite",
            });
        }
        if !std_dev.is_finite() || std_dev < 0.0 {
            return Err(InferError::InvalidRange {
                name: "std_dev",
                value: std_dev,
                reason: "must be finite and non-negative",
            });
        }
        if n == 0 {
            return Err(InferError::InvalidRange {
                name: "n",
                value: 0.0,
                reason: "must be at least 1",
            });
        }
        Ok(Self { mean, std_dev, n })
    }

    /// Summarizes a raw sample (mean + sample standard deviation).
    ///
    /// # Errors
    /// [`InferError::InsufficientData`] if the sample has fewer than 2
    /// observations; [`InferError::InvalidRange`] on non-finite values.
    ///
    /// # Examples
    /// ```
    /// use u_infer::summary::MeanSummary;
    /// let s = MeanSummary::from_sample(&[2.0, 4.0, 6.0, 8.0]).unwrap();
    /// assert_eq!(s.n(), 4);
    /// assert!((s.mean() - 5.0).abs() < 1e-15);
    /// ```
    pub fn from_sample(sample: &[f64]) -> InferResult<Self> {
        let std_dev = descriptive::sample_std_dev(sample)?;
        let mean = descriptive::mean(sample)?;
        Self::new(mean, std_dev, sample.len() as u64)
    }

    /// Sample mean x̄.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Sample standard deviation s.
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Observation count n.
    pub fn n(&self) -> u64 {
        self.n
    }

    /// Standard error of the mean, s/√n.
    ///
    /// # Examples
    /// ```
    /// use u_infer::summary::MeanSummary;
    /// let s = MeanSummary::new(0.0, 10.0, 25).unwrap();
    /// assert!((s.standard_error() - 2.0).abs() < 1e-15);
    /// ```
    pub fn standard_error(&self) -> f64 {
        self.std_dev / (self.n as f64).sqrt()
    }
}

/// Count statistic for proportion-based procedures: successes out of trials.
///
/// Invariants enforced at construction: `trials ≥ 1` and
/// `successes ≤ trials`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Proportion {
    successes: u64,
    trials: u64,
}

impl Proportion {
    /// Creates a validated proportion statistic.
    ///
    /// # Errors
    /// [`InferError::InvalidRange`] if `trials == 0` or
    /// `successes > trials`.
    ///
    /// # Examples
    /// ```
    /// use u_infer::summary::Proportion;
    /// let p = Proportion::new(15, 50).unwrap();
    /// assert!((p.p_hat() - 0.3).abs() < 1e-15);
    /// assert!(Proportion::new(51, 50).is_err());
    /// ```
    pub fn new(successes: u64, trials: u64) -> InferResult<Self> {
        if trials == 0 {
            return Err(InferError::InvalidRange {
                name: "trials",
                value: 0.0,
                reason: "must be at least 1",
            });
        }
        if successes > trials {
            return Err(InferError::InvalidRange {
                name: "successes",
                value: successes as f64,
                reason: "must not exceed trials",
            });
        }
        Ok(Self { successes, trials })
    }

    /// Number of successes.
    pub fn successes(&self) -> u64 {
        self.successes
    }

    /// Number of trials.
    pub fn trials(&self) -> u64 {
        self.trials
    }

    /// Sample proportion p̂ = successes / trials, in [0, 1].
    pub fn p_hat(&self) -> f64 {
        self.successes as f64 / self.trials as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_summary_valid() {
        let s = MeanSummary::new(50.0, 10.0, 30).unwrap();
        assert_eq!(s.mean(), 50.0);
        assert_eq!(s.std_dev(), 10.0);
        assert_eq!(s.n(), 30);
    }

    #[test]
    fn test_mean_summary_zero_spread_allowed() {
        // A constant sample legitimately has s = 0
        assert!(MeanSummary::new(5.0, 0.0, 10).is_ok());
    }

    #[test]
    fn test_mean_summary_invalid() {
        assert!(matches!(
            MeanSummary::new(f64::NAN, 1.0, 5),
            Err(InferError::InvalidRange { name: "mean", .. })
        ));
        assert!(matches!(
            MeanSummary::new(0.0, -0.5, 5),
            Err(InferError::InvalidRange { name: "std_dev", .. })
        ));
        assert!(matches!(
            MeanSummary::new(0.0, 1.0, 0),
            Err(InferError::InvalidRange { name: "n", .. })
        ));
    }

    #[test]
    fn test_mean_summary_standard_error() {
        let s = MeanSummary::new(0.0, 10.0, 30).unwrap();
        let expected = 10.0 / 30.0_f64.sqrt();
        assert!((s.standard_error() - expected).abs() < 1e-15);
    }

    #[test]
    fn test_from_sample_matches_descriptive() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let s = MeanSummary::from_sample(&data).unwrap();
        assert!((s.mean() - 5.0).abs() < 1e-15);
        assert!((s.std_dev() - 2.138089935299395).abs() < 1e-10);
        assert_eq!(s.n(), 8);
    }

    #[test]
    fn test_from_sample_needs_two() {
        assert!(matches!(
            MeanSummary::from_sample(&[1.0]),
            Err(InferError::InsufficientData { .. })
        ));
    }

    #[test]
    fn test_proportion_valid() {
        let p = Proportion::new(15, 50).unwrap();
        assert_eq!(p.successes(), 15);
        assert_eq!(p.trials(), 50);
        assert!((p.p_hat() - 0.3).abs() < 1e-15);
    }

    #[test]
    fn test_proportion_boundaries() {
        assert_eq!(Proportion::new(0, 10).unwrap().p_hat(), 0.0);
        assert_eq!(Proportion::new(10, 10).unwrap().p_hat(), 1.0);
    }

    #[test]
    fn test_proportion_invalid() {
        assert!(matches!(
            Proportion::new(0, 0),
            Err(InferError::InvalidRange { name: "trials", .. })
        ));
        assert!(matches!(
            Proportion::new(11, 10),
            Err(InferError::InvalidRange { name: "successes", .. })
        ));
    }
}
