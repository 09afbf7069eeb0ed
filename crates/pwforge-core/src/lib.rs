//! Shared building blocks for pwforge.
//!
//! # Modules
//!
//! - [`character`] -- Character classes and charset sizing for the entropy model
//! - [`case`] -- Case forms and seed case-variant expansion
//! - [`strength`] -- Entropy scoring, strength labels, and the pluggable
//!   [`CrackEstimator`](strength::CrackEstimator) capability
//! - `estimator` -- zxcvbn-backed estimator (feature `zxcvbn`, on by default)

pub mod case;
pub mod character;
#[cfg(feature = "zxcvbn")]
pub mod estimator;
pub mod strength;

pub use case::{CaseForm, case_variants};
pub use strength::{
    CrackEstimate, CrackEstimator, EstimatorOutcome, StrengthLabel, StrengthReport, analyze,
    entropy_bits,
};
