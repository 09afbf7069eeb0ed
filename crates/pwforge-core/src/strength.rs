// Password strength scoring: charset entropy, strength labels, and the
// optional crack-time estimator capability.
//
// The entropy model assumes every character is drawn uniformly from the
// union of the character classes present in the password. It is an upper
// bound, not a guessability measure. An injected `CrackEstimator` can add a
// pattern-aware opinion on top of it.

use std::fmt;

use serde::Serialize;
use tracing::{debug, info};

use crate::character::CharClasses;

// ---------------------------------------------------------------------------
// Labels
// ---------------------------------------------------------------------------

/// Upper entropy bounds (exclusive, in bits) for each label below `VeryStrong`.
const VERY_WEAK_BELOW: f64 = 28.0;
const WEAK_BELOW: f64 = 36.0;
const REASONABLE_BELOW: f64 = 60.0;
const STRONG_BELOW: f64 = 128.0;

/// Qualitative strength bucket for an entropy value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthLabel {
    VeryWeak,
    Weak,
    Reasonable,
    Strong,
    VeryStrong,
}

impl StrengthLabel {
    /// Bucket an entropy value (in bits).
    pub fn from_entropy(bits: f64) -> Self {
        if bits < VERY_WEAK_BELOW {
            Self::VeryWeak
        } else if bits < WEAK_BELOW {
            Self::Weak
        } else if bits < REASONABLE_BELOW {
            Self::Reasonable
        } else if bits < STRONG_BELOW {
            Self::Strong
        } else {
            Self::VeryStrong
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::VeryWeak => "Very Weak",
            Self::Weak => "Weak",
            Self::Reasonable => "Reasonable",
            Self::Strong => "Strong",
            Self::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Entropy
// ---------------------------------------------------------------------------

/// Estimate password entropy as `log2(charset_size ^ length)`, rounded to
/// two decimals.
///
/// Computed as `length * log2(charset_size)` so long passwords do not
/// overflow. Returns 0.0 for the empty string and for passwords made only
/// of characters outside the recognized classes.
pub fn entropy_bits(password: &str) -> f64 {
    let charset = CharClasses::of(password).charset_size();
    if charset == 0 {
        return 0.0;
    }
    let length = password.chars().count() as f64;
    round2(length * f64::from(charset).log2())
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ---------------------------------------------------------------------------
// Estimator capability
// ---------------------------------------------------------------------------

/// Opinion returned by an external crack-time estimator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrackEstimate {
    /// Score on a 0 (trivially guessable) to 4 (very unguessable) scale.
    pub score: u8,
    /// Human-readable time to crack against an offline fast hash
    /// (about 1e10 guesses per second).
    pub crack_time_display: String,
    /// Headline warning, if the estimator produced one.
    pub warning: Option<String>,
    /// Suggestions for making the password stronger.
    pub suggestions: Vec<String>,
}

/// Maximum value of [`CrackEstimate::score`].
pub const MAX_ESTIMATOR_SCORE: u8 = 4;

/// An external password scorer that can be plugged into [`analyze`].
///
/// Implementations return `None` when they cannot score a particular
/// password (for example an empty one).
pub trait CrackEstimator {
    fn estimate(&self, password: &str) -> Option<CrackEstimate>;
}

/// What the estimator contributed to a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EstimatorOutcome {
    /// No estimator was supplied; the report is entropy-only.
    Unavailable,
    /// An estimator was supplied but declined to score this password.
    Declined,
    /// The estimator scored the password.
    Scored(CrackEstimate),
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// Result of analyzing a single password.
///
/// The password itself is never stored in the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrengthReport {
    pub length: usize,
    pub charset_size: u32,
    pub entropy_bits: f64,
    pub label: StrengthLabel,
    pub estimator: EstimatorOutcome,
}

/// Analyze a password, consulting `estimator` when one is available.
pub fn analyze(password: &str, estimator: Option<&dyn CrackEstimator>) -> StrengthReport {
    let charset_size = CharClasses::of(password).charset_size();
    let entropy = entropy_bits(password);
    let label = StrengthLabel::from_entropy(entropy);

    let outcome = match estimator {
        None => {
            info!("no crack-time estimator available, using entropy only");
            EstimatorOutcome::Unavailable
        }
        Some(estimator) => match estimator.estimate(password) {
            Some(estimate) => EstimatorOutcome::Scored(estimate),
            None => EstimatorOutcome::Declined,
        },
    };

    let length = password.chars().count();
    debug!(length, charset_size, entropy, %label, "scored password");

    StrengthReport {
        length,
        charset_size,
        entropy_bits: entropy,
        label,
        estimator: outcome,
    }
}

impl fmt::Display for StrengthReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Password Analysis ---")?;
        match &self.estimator {
            EstimatorOutcome::Unavailable => {
                writeln!(f, "Crack-time estimator not available; using entropy only.")?;
            }
            EstimatorOutcome::Declined => {
                writeln!(f, "Crack-time estimator could not score this password.")?;
            }
            EstimatorOutcome::Scored(estimate) => {
                writeln!(f, "Estimator score: {} / {MAX_ESTIMATOR_SCORE}", estimate.score)?;
                writeln!(
                    f,
                    "Estimated crack time (offline fast hash): {}",
                    estimate.crack_time_display
                )?;
                if let Some(warning) = &estimate.warning {
                    writeln!(f, "Warning: {warning}")?;
                }
                if estimate.suggestions.is_empty() {
                    writeln!(f, "Feedback: none")?;
                } else {
                    writeln!(f, "Feedback:")?;
                    for suggestion in &estimate.suggestions {
                        writeln!(f, "  - {suggestion}")?;
                    }
                }
            }
        }
        writeln!(f, "Entropy: {:.2} bits", self.entropy_bits)?;
        write!(f, "Strength: {}", self.label)
    }
}
