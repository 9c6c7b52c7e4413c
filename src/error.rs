//! Error types for the inference engine.
//!
//! Every operation detects invalid input synchronously and surfaces it as
//! a typed failure. No operation returns NaN or infinity to signal a
//! problem: an input the formulas cannot handle is an error variant, not
//! a poisoned number.

use std::fmt;

/// Result type for all engine operations.
pub type InferResult<T> = Result<T, InferError>;

/// Errors surfaced by the inference engine.
#[derive(Debug, Clone, PartialEq)]
pub enum InferError {
    /// A sample was empty where at least one value is required.
    EmptyInput {
        /// Operation that needed the data.
        context: &'static str,
    },

    /// A sample or summary had too few observations for the requested
    /// statistic (e.g. a sample standard deviation needs n ≥ 2).
    InsufficientData {
        /// Minimum number of observations required.
        required: u64,
        /// Number of observations supplied.
        got: u64,
        /// Operation that needed the data.
        context: &'static str,
    },

    /// A probability, proportion, count, or other parameter was outside
    /// its valid domain (including successes > trials).
    InvalidRange {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: f64,
        /// Constraint that was violated.
        reason: &'static str,
    },

    /// Degrees of freedom below 1.
    InvalidDegreesOfFreedom {
        /// Offending value.
        value: f64,
    },

    /// Inputs were structurally valid but produce a zero standard error,
    /// leaving the statistic undefined.
    DegenerateInput {
        /// Operation whose standard error collapsed.
        context: &'static str,
    },
}

impl fmt::Display for InferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput { context } => {
                write!(f, "empty input in {context}")
            }
            Self::InsufficientData {
                required,
                got,
                context,
            } => {
                write!(
                    f,
                    "insufficient data in {context}: need at least {required} observations, got {got}"
                )
            }
            Self::InvalidRange {
                name,
                value,
                reason,
            } => {
                write!(f, "invalid value for '{name}' = {value}: {reason}")
            }
            Self::InvalidDegreesOfFreedom { value } => {
                write!(f, "invalid degrees of freedom {value}: must be at least 1")
            }
            Self::DegenerateInput { context } => {
                write!(f, "degenerate input in {context}: standard error is zero")
            }
        }
    }
}

impl std::error::Error for InferError {}
