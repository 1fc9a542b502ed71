use serde::{Deserialize, Serialize};

/// Thresholds and credit values applied when turning answers into scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Overall score at or above which the candidate is recommended.
    pub recommend_threshold: u8,
    /// Overall score at or above which the candidate is worth considering.
    pub consider_threshold: u8,
    /// Credit (0-100) for a choice answer that is not the best option.
    pub partial_credit: u8,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            recommend_threshold: 80,
            consider_threshold: 60,
            partial_credit: 25,
        }
    }
}
