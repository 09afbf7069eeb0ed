// zxcvbn-backed crack-time estimator

use tracing::debug;

use crate::strength::{CrackEstimate, CrackEstimator};

/// [`CrackEstimator`] backed by the `zxcvbn` pattern matcher.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZxcvbnEstimator;

impl CrackEstimator for ZxcvbnEstimator {
    fn estimate(&self, password: &str) -> Option<CrackEstimate> {
        let entropy = match zxcvbn::zxcvbn(password, &[]) {
            Ok(entropy) => entropy,
            Err(err) => {
                debug!(?err, "zxcvbn declined to score password");
                return None;
            }
        };

        let feedback = entropy.feedback();
        let warning = feedback
            .iter()
            .find_map(|f| f.warning())
            .map(|w| w.to_string());
        let suggestions = feedback
            .iter()
            .flat_map(|f| f.suggestions().iter().map(|s| s.to_string()))
            .collect();

        Some(CrackEstimate {
            score: entropy.score(),
            crack_time_display: entropy
                .crack_times()
                .offline_fast_hashing_1e10_per_second()
                .to_string(),
            warning,
            suggestions,
        })
    }
}
