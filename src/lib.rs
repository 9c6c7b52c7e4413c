//! # u-infer
//!
//! Inferential statistics engine for the U-Engine ecosystem.
//!
//! This crate turns validated numeric inputs (raw samples, mean/std-dev
//! summaries, success counts) into point estimates, confidence
//! intervals, hypothesis-test decisions, and required sample sizes. It is
//! a pure computation layer: it parses no text, renders no output, and
//! holds no state between calls. Callers (a UI, a report generator) own
//! input validation at the text boundary and all presentation.
//!
//! ## Modules
//!
//! - [`descriptive`] — Mean, median, mode, sample standard deviation
//! - [`summary`] — Validated summary-statistic inputs (`MeanSummary`, `Proportion`)
//! - [`critical`] — Normal and Student-t critical values for a confidence level
//! - [`interval`] — Confidence intervals for means, proportions, and their differences
//! - [`testing`] — One- and two-sample z-tests with explicit tail direction
//! - [`sample_size`] — Minimum n for a target margin of error
//! - [`special`] — Underlying normal / Student-t approximations
//! - [`error`] — Error types
//!
//! ## Design Philosophy
//!
//! - **Fail loudly**: invalid domains surface as typed errors, never as a
//!   silent NaN or infinity
//! - **Numerical stability first**: Welford's algorithm for variance,
//!   compensated summation for accumulation
//! - **No unnecessary dependencies**: Pure Rust for core math
//! - **Property-based testing**: Mathematical invariants verified via proptest
//!
//! ## Example
//!
//! ```
//! use u_infer::interval::mean_interval;
//! use u_infer::summary::MeanSummary;
//!
//! let summary = MeanSummary::new(50.0, 10.0, 30).unwrap();
//! let ci = mean_interval(&summary, 0.95).unwrap();
//! assert!(ci.lower < 50.0 && 50.0 < ci.upper);
//! ```

pub mod critical;
pub mod descriptive;
pub mod error;
pub mod interval;
pub mod sample_size;
pub mod special;
pub mod summary;
pub mod testing;
