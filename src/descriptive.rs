//! Descriptive statistics over raw samples.
//!
//! All functions validate their input up front and use numerically
//! stable accumulation to avoid catastrophic cancellation.
//!
//! # Algorithms
//!
//! - **Mean**: Neumaier compensated summation, O(ε) error independent of n.
//!   Reference: Neumaier (1974), *ZAMM* 54(1), pp. 39–51.
//! - **Variance/StdDev**: Welford's online algorithm with Bessel's
//!   correction. Reference: Welford (1962), *Technometrics* 4(3).
//! - **Mode**: exact-equality run grouping over the sorted sample, with a
//!   single canonical reporting policy (see [`Mode`]).

use crate::error::{InferError, InferResult};

/// Mode of a sample under the canonical reporting policy.
///
/// - Every value occurs exactly once → [`Mode::NoMode`].
/// - One value attains the maximum frequency → [`Mode::Unique`].
/// - Several values tie for the maximum frequency → [`Mode::Multiple`],
///   in ascending order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// All values are distinct; no value repeats.
    NoMode,
    /// A single most frequent value.
    Unique(f64),
    /// Two or more values tied for the maximum frequency, ascending.
    Multiple(Vec<f64>),
}

/// Descriptive summary of a raw sample.
///
/// `std_dev` is `None` when the sample has a single observation (a
/// sample standard deviation needs n ≥ 2); it is never NaN.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DescriptiveSummary {
    /// Number of observations.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Median of the sorted sample.
    pub median: f64,
    /// Mode under the canonical policy.
    pub mode: Mode,
    /// Sample standard deviation (n − 1 denominator), absent for n = 1.
    pub std_dev: Option<f64>,
}

/// Rejects samples containing NaN or infinite values.
fn check_finite(sample: &[f64]) -> InferResult<()> {
    for &x in sample {
        if !x.is_finite() {
            return Err(InferError::InvalidRange {
                name: "sample",
                value: x,
                reason: "every observation must be finite",
            });
        }
    }
    Ok(())
}

/// Computes the arithmetic mean with compensated summation.
///
/// # Errors
/// - [`InferError::EmptyInput`] if the sample is empty.
/// - [`InferError::InvalidRange`] if any observation is NaN or infinite.
///
/// # Examples
/// ```
/// use u_infer::descriptive::mean;
/// let m = mean(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
/// assert!((m - 3.0).abs() < 1e-15);
/// ```
pub fn mean(sample: &[f64]) -> InferResult<f64> {
    if sample.is_empty() {
        return Err(InferError::EmptyInput { context: "mean" });
    }
    check_finite(sample)?;
    Ok(compensated_sum(sample) / sample.len() as f64)
}

/// Computes the median without mutating the input.
///
/// Clones and sorts the sample, then returns the middle element, or the
/// average of the two middle elements for even-length samples.
///
/// # Errors
/// - [`InferError::EmptyInput`] if the sample is empty.
/// - [`InferError::InvalidRange`] if any observation is NaN or infinite.
///
/// # Examples
/// ```
/// use u_infer::descriptive::median;
/// assert_eq!(median(&[3.0, 1.0, 2.0]).unwrap(), 2.0);
/// assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]).unwrap(), 2.5);
/// ```
pub fn median(sample: &[f64]) -> InferResult<f64> {
    if sample.is_empty() {
        return Err(InferError::EmptyInput { context: "median" });
    }
    check_finite(sample)?;
    let mut sorted = sample.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);
    let n = sorted.len();
    if n % 2 == 1 {
        Ok(sorted[n / 2])
    } else {
        Ok((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0)
    }
}

/// Computes the mode under the canonical reporting policy.
///
/// Values are compared by exact floating-point equality; the sample is
/// sorted first so ties come out ascending.
///
/// # Errors
/// - [`InferError::EmptyInput`] if the sample is empty.
/// - [`InferError::InvalidRange`] if any observation is NaN or infinite.
///
/// # Examples
/// ```
/// use u_infer::descriptive::{mode, Mode};
/// assert_eq!(mode(&[1.0, 2.0, 3.0]).unwrap(), Mode::NoMode);
/// assert_eq!(mode(&[1.0, 2.0, 2.0]).unwrap(), Mode::Unique(2.0));
/// assert_eq!(
///     mode(&[2.0, 1.0, 2.0, 1.0, 3.0]).unwrap(),
///     Mode::Multiple(vec![1.0, 2.0]),
/// );
/// ```
pub fn mode(sample: &[f64]) -> InferResult<Mode> {
    if sample.is_empty() {
        return Err(InferError::EmptyInput { context: "mode" });
    }
    check_finite(sample)?;

    let mut sorted = sample.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);

    // Walk runs of equal values, tracking the best frequency and its ties.
    let mut best_count = 0usize;
    let mut best_values: Vec<f64> = Vec::new();
    let mut i = 0;
    while i < sorted.len() {
        let value = sorted[i];
        let mut j = i + 1;
        while j < sorted.len() && sorted[j] == value {
            j += 1;
        }
        let count = j - i;
        if count > best_count {
            best_count = count;
            best_values.clear();
            best_values.push(value);
        } else if count == best_count {
            best_values.push(value);
        }
        i = j;
    }

    if best_count == 1 {
        Ok(Mode::NoMode)
    } else if best_values.len() == 1 {
        Ok(Mode::Unique(best_values[0]))
    } else {
        Ok(Mode::Multiple(best_values))
    }
}

/// Computes the sample variance (Bessel's correction, n − 1 denominator)
/// with Welford's online algorithm.
///
/// # Errors
/// - [`InferError::InsufficientData`] if the sample has fewer than 2
///   observations.
/// - [`InferError::InvalidRange`] if any observation is NaN or infinite.
///
/// # Examples
/// ```
/// use u_infer::descriptive::sample_variance;
/// let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert!((sample_variance(&v).unwrap() - 4.571428571428571).abs() < 1e-10);
/// ```
pub fn sample_variance(sample: &[f64]) -> InferResult<f64> {
    let n = sample.len();
    if n < 2 {
        return Err(InferError::InsufficientData {
            required: 2,
            got: n as u64,
            context: "sample variance",
        });
    }
    check_finite(sample)?;

    let mut running_mean = 0.0;
    let mut m2 = 0.0;
    for (i, &x) in sample.iter().enumerate() {
        let delta = x - running_mean;
        running_mean += delta / (i + 1) as f64;
        m2 += delta * (x - running_mean);
    }
    Ok(m2 / (n - 1) as f64)
}

/// Computes the sample standard deviation, `sqrt(sample_variance)`.
///
/// # Errors
/// Same as [`sample_variance`].
///
/// # Examples
/// ```
/// use u_infer::descriptive::sample_std_dev;
/// let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert!((sample_std_dev(&v).unwrap() - 2.138089935299395).abs() < 1e-10);
/// ```
pub fn sample_std_dev(sample: &[f64]) -> InferResult<f64> {
    sample_variance(sample).map(f64::sqrt)
}

/// Computes the full descriptive summary of a sample in one call.
///
/// # Errors
/// - [`InferError::EmptyInput`] if the sample is empty.
/// - [`InferError::InvalidRange`] if any observation is NaN or infinite.
///
/// # Examples
/// ```
/// use u_infer::descriptive::describe;
/// let s = describe(&[2.0, 4.0, 4.0, 5.0, 7.0]).unwrap();
/// assert_eq!(s.count, 5);
/// assert!((s.mean - 4.4).abs() < 1e-12);
/// assert_eq!(s.median, 4.0);
/// assert!(s.std_dev.is_some());
/// ```
pub fn describe(sample: &[f64]) -> InferResult<DescriptiveSummary> {
    if sample.is_empty() {
        return Err(InferError::EmptyInput {
            context: "descriptive summary",
        });
    }
    check_finite(sample)?;

    let std_dev = if sample.len() >= 2 {
        Some(sample_std_dev(sample)?)
    } else {
        None
    };

    Ok(DescriptiveSummary {
        count: sample.len(),
        mean: mean(sample)?,
        median: median(sample)?,
        mode: mode(sample)?,
        std_dev,
    })
}

/// Neumaier compensated summation.
///
/// Variant of Kahan summation whose branch also captures the low-order
/// bits when the addend dominates the running sum.
fn compensated_sum(data: &[f64]) -> f64 {
    let mut sum = 0.0_f64;
    let mut compensation = 0.0_f64;
    for &x in data {
        let t = sum + x;
        if sum.abs() >= x.abs() {
            compensation += (sum - t) + x;
        } else {
            compensation += (x - t) + sum;
        }
        sum = t;
    }
    sum + compensation
}
